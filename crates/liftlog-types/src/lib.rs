pub mod user;
pub mod exercise;
pub mod workout;
pub mod analysis;
pub mod error;


pub use error::StoreError;
pub type Result<T> = std::result::Result<T, StoreError>;
