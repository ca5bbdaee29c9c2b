use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub id: i32,
    pub customer_id: i32,
    pub pickup: String,
    pub dropoff: String,
    pub status: String,
    pub price: Option<f64>,
    pub scheduled_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<entity::transport_booking::Model> for BookingDto {
    fn from(booking: entity::transport_booking::Model) -> Self {
        Self {
            id: booking.id,
            customer_id: booking.customer_id,
            pickup: booking.pickup,
            dropoff: booking.dropoff,
            status: booking.status.as_str().to_string(),
            price: booking.price,
            scheduled_at: booking.scheduled_at,
            created_at: booking.created_at,
        }
    }
}

/// Body for the admin booking status update.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBookingStatusDto {
    /// Target status name, e.g. `CONFIRMED`.
    pub status: String,
}
