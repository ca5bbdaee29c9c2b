use super::*;

/// Tests partial updates only touch the provided fields.
///
/// Expected: priority changed, expiry and active flag untouched
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::FeaturedAd)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ad = factory::featured_ad::create_featured_ad(db, 1).await?;
    let original_expiry = ad.expires_at;

    let repo = FeaturedAdRepository::new(db);
    let updated = repo
        .update(
            ad,
            UpdateFeaturedAdParam {
                priority: Some(9),
                expires_at: None,
                active: None,
            },
        )
        .await?;

    assert_eq!(updated.priority, 9);
    assert_eq!(updated.expires_at, original_expiry);
    assert!(updated.active);

    Ok(())
}

/// Tests deactivating an ad through the update path.
///
/// Expected: active flag cleared
#[tokio::test]
async fn can_deactivate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::FeaturedAd)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ad = factory::featured_ad::create_featured_ad(db, 1).await?;

    let repo = FeaturedAdRepository::new(db);
    let updated = repo
        .update(
            ad,
            UpdateFeaturedAdParam {
                priority: None,
                expires_at: None,
                active: Some(false),
            },
        )
        .await?;

    assert!(!updated.active);

    Ok(())
}
