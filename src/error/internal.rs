use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// An auction references a car row that does not exist.
    ///
    /// The schema enforces this foreign key, so hitting it means the database
    /// was modified outside the application. Results in a 500 Internal Server
    /// Error with a generic message returned to the client.
    #[error("Auction {auction_id} references a missing car")]
    MissingCar {
        /// The auction whose car lookup failed
        auction_id: i32,
    },

    /// Password hash stored for a user could not be parsed.
    ///
    /// Indicates a corrupted or legacy-format `password_hash` column value.
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to the client.
    #[error("Stored password hash for user {user_id} is malformed: {reason}")]
    MalformedPasswordHash {
        /// The user whose stored hash failed to parse
        user_id: i32,
        /// The underlying parse failure
        reason: String,
    },
}
