//! Transport booking data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

/// Repository providing database operations for transport bookings.
pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    /// Creates a new BookingRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a booking by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(booking))` - Booking found
    /// - `Ok(None)` - No booking with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(
        &self,
        booking_id: i32,
    ) -> Result<Option<entity::transport_booking::Model>, DbErr> {
        entity::prelude::TransportBooking::find_by_id(booking_id)
            .one(self.db)
            .await
    }

    /// Gets a page of bookings, soonest scheduled first, with the total count.
    ///
    /// # Arguments
    /// - `page` - Zero-based page index
    /// - `per_page` - Bookings per page
    ///
    /// # Returns
    /// - `Ok((bookings, total))` - Requested page and the overall count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::transport_booking::Model>, u64), DbErr> {
        let paginator = entity::prelude::TransportBooking::find()
            .order_by_asc(entity::transport_booking::Column::ScheduledAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let bookings = paginator.fetch_page(page).await?;

        Ok((bookings, total))
    }

    /// Sets a booking's status. Transition legality is the service's concern.
    ///
    /// # Returns
    /// - `Ok(booking)` - The updated booking
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_status(
        &self,
        booking: entity::transport_booking::Model,
        status: entity::transport_booking::BookingStatus,
    ) -> Result<entity::transport_booking::Model, DbErr> {
        let mut active: entity::transport_booking::ActiveModel = booking.into();
        active.status = ActiveValue::Set(status);
        active.update(self.db).await
    }
}
