use crate::domain::model::{ProfileResponse, UserProfile};
use crate::domain::ports::FactSource;
use chrono::Utc;

/// 上游抓不到小知識時的固定替代訊息
pub const FALLBACK_FACT: &str =
    "Unable to fetch cat fact at this moment. Please try again later.";

pub struct ProfileService<F: FactSource> {
    user: UserProfile,
    source: F,
}

impl<F: FactSource> ProfileService<F> {
    pub fn new(user: UserProfile, source: F) -> Self {
        Self { user, source }
    }

    /// 組出 `/me` 的回應。上游失敗只會換成固定訊息，這裡不會出錯。
    pub async fn build_response(&self) -> ProfileResponse {
        let timestamp = Utc::now();

        let fact = match self.source.fetch_fact().await {
            Some(fact) => fact,
            None => {
                tracing::warn!("Using fallback cat fact due to upstream failure");
                FALLBACK_FACT.to_string()
            }
        };

        ProfileResponse {
            status: "success".to_string(),
            user: self.user.clone(),
            timestamp,
            fact,
        }
    }
}
