//! SQLite persistence for reviews managed through the `/api/reviews` endpoints.
//!
//! The store is a thin CRUD layer: it opens a connection per operation and
//! reports conflicts and missing rows as typed [`StoreError`] values that the
//! HTTP layer turns into response envelopes.

mod error;
mod reviews;

pub use error::StoreError;
pub use reviews::TestimonialStore;
