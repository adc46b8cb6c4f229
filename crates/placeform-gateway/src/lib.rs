pub mod client;
pub mod error;
pub mod types;

pub use client::GatewayClient;
pub use error::GatewayError;
pub use types::{DuplicateCheck, StoredImage};
