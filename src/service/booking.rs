//! Transport booking administration.

use sea_orm::DatabaseConnection;

use crate::{data::booking::BookingRepository, error::AppError};

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of bookings with the total count.
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::transport_booking::Model>, u64), AppError> {
        let result = BookingRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;
        Ok(result)
    }

    /// Moves a booking to a new status, enforcing the transition table.
    ///
    /// PENDING may confirm or cancel, CONFIRMED may start transit or cancel,
    /// IN_TRANSIT may only complete. Terminal statuses reject every change.
    ///
    /// # Returns
    /// - `Ok(booking)` - The updated booking
    /// - `Err(AppError::NotFound(_))` - No booking with that id
    /// - `Err(AppError::BadRequest(_))` - Unknown status name or illegal
    ///   transition
    pub async fn update_status(
        &self,
        booking_id: i32,
        status: &str,
    ) -> Result<entity::transport_booking::Model, AppError> {
        let Some(next) = entity::transport_booking::BookingStatus::parse(status) else {
            return Err(AppError::BadRequest(format!(
                "Unknown booking status '{}'",
                status
            )));
        };

        let repo = BookingRepository::new(self.db);

        let Some(booking) = repo.find_by_id(booking_id).await? else {
            return Err(AppError::NotFound(format!(
                "Booking {} not found",
                booking_id
            )));
        };

        if !booking.status.can_transition_to(&next) {
            return Err(AppError::BadRequest(format!(
                "Booking cannot move from {} to {}",
                booking.status.as_str(),
                next.as_str()
            )));
        }

        let updated = repo.set_status(booking, next).await?;

        Ok(updated)
    }
}
