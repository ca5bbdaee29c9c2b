use super::*;
use chrono::{Duration, Utc};
use entity::featured_ad::ListingType;

/// Tests inserting a new featured ad slot.
///
/// Expected: Ok(ad) active with the given fields
#[tokio::test]
async fn creates_active_ad() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::FeaturedAd)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let repo = FeaturedAdRepository::new(db);

    let ad = repo
        .create(CreateFeaturedAdParam {
            listing_type: ListingType::Auction,
            listing_id: 7,
            priority: 3,
            starts_at: now,
            expires_at: now + Duration::days(14),
        })
        .await?;

    assert_eq!(ad.listing_type, ListingType::Auction);
    assert_eq!(ad.listing_id, 7);
    assert_eq!(ad.priority, 3);
    assert!(ad.active);

    Ok(())
}
