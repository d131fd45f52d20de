use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Testimonial with this ID already exists")]
    AlreadyExists,

    #[error("Testimonial not found")]
    NotFound,

    #[error("No valid updates provided")]
    NoUpdates,

    #[error("Invalid testimonial: {0}")]
    Invalid(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}
