//! Notification dispatch.

use sea_orm::DatabaseConnection;

use crate::{data::notification::NotificationRepository, error::AppError};

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Notifies both parties of a completed sale.
    ///
    /// Called after the sale transaction has committed; the caller treats a
    /// failure here as non-fatal.
    pub async fn sale_completed(
        &self,
        auction_id: i32,
        seller: &entity::user::Model,
        buyer: &entity::user::Model,
        amount: f64,
    ) -> Result<(), AppError> {
        let repo = NotificationRepository::new(self.db);

        repo.create(
            seller.id,
            "SALE_CONFIRMED",
            "Sale confirmed",
            &format!("Your auction #{} sold for {:.2}.", auction_id, amount),
        )
        .await?;

        repo.create(
            buyer.id,
            "SALE_WON",
            "You won the auction",
            &format!(
                "Your offer of {:.2} on auction #{} was accepted by {}.",
                amount, auction_id, seller.name
            ),
        )
        .await?;

        Ok(())
    }
}
