//! Sale conversation threads.

use sea_orm::DatabaseConnection;
use tracing::debug;

use crate::{data::conversation::ConversationRepository, error::AppError};

pub struct ConversationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ConversationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens the post-sale thread between seller and buyer.
    ///
    /// Idempotent per auction: if a thread already exists (for instance from
    /// a retried request) it is left alone.
    pub async fn open_sale_thread(
        &self,
        auction_id: i32,
        seller_id: i32,
        buyer_id: i32,
        reason: Option<&str>,
    ) -> Result<(), AppError> {
        let repo = ConversationRepository::new(self.db);

        if repo.find_by_auction(auction_id).await?.is_some() {
            debug!("auction {}: sale conversation already exists", auction_id);
            return Ok(());
        }

        let subject = match reason {
            Some(reason) if !reason.trim().is_empty() => reason.trim().to_string(),
            _ => format!("Sale of auction #{}", auction_id),
        };

        repo.create(auction_id, seller_id, buyer_id, &subject).await?;

        Ok(())
    }
}
