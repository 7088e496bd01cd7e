pub mod api;
pub mod client;
pub mod error;

pub use api::RegisterPayload;
pub use client::Gateway;
pub use error::{ApiError, FieldErrors};
