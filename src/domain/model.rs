use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 靜態使用者資料，啟動時從配置載入一次，之後不再變動
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    pub name: String,
    pub stack: String,
}

/// `/me` 的回應，每個請求重新組一份
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub status: String,
    pub user: UserProfile,
    pub timestamp: DateTime<Utc>,
    pub fact: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn now() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}
