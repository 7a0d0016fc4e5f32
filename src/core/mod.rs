pub mod fetcher;
pub mod profile;

pub use crate::domain::model::{HealthResponse, ProfileResponse, UserProfile};
pub use crate::domain::ports::{ConfigProvider, FactSource};
pub use crate::utils::error::Result;
