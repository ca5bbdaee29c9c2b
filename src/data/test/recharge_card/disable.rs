use super::*;
use entity::recharge_card::CardStatus;

/// Tests disabling an unused card.
///
/// Expected: Ok(card) with disabled status persisted
#[tokio::test]
async fn disables_card() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RechargeCard)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let card = factory::recharge_card::create_card(db).await?;

    let repo = RechargeCardRepository::new(db);
    let disabled = repo.disable(card).await?;

    assert_eq!(disabled.status, CardStatus::Disabled);

    let reloaded = repo.find_by_id(disabled.id).await?.unwrap();
    assert_eq!(reloaded.status, CardStatus::Disabled);

    Ok(())
}
