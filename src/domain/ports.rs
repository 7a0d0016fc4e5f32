use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn fact_api_url(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
}

/// 提供貓咪小知識的來源。抓取失敗一律以 None 表示，錯誤細節只留在日誌。
#[async_trait]
pub trait FactSource: Send + Sync {
    async fn fetch_fact(&self) -> Option<String>;
}
