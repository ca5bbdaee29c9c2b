use super::*;
use entity::transport_booking::BookingStatus;

/// Tests writing a new booking status.
///
/// Expected: Ok(booking) with the status persisted
#[tokio::test]
async fn persists_new_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::TransportBooking)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::user::create_user(db).await?;
    let booking = factory::booking::create_booking(db, customer.id).await?;

    let repo = BookingRepository::new(db);
    let updated = repo.set_status(booking, BookingStatus::Confirmed).await?;

    assert_eq!(updated.status, BookingStatus::Confirmed);

    let reloaded = repo.find_by_id(updated.id).await?.unwrap();
    assert_eq!(reloaded.status, BookingStatus::Confirmed);

    Ok(())
}
