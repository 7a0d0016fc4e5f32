use crate::domain::model::UserProfile;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "profile-api")]
#[command(about = "Profile API that serves static user info with a random cat fact")]
pub struct AppConfig {
    #[arg(
        long,
        env = "CAT_FACT_API_URL",
        default_value = "https://catfact.ninja/fact"
    )]
    pub fact_api_url: String,

    /// 上游請求超時（秒）
    #[arg(long, env = "API_TIMEOUT", default_value = "5")]
    pub timeout_seconds: u64,

    #[arg(long, env = "USER_EMAIL", default_value = "your.email@example.com")]
    pub user_email: String,

    #[arg(long, env = "USER_NAME", default_value = "Your Full Name")]
    pub user_name: String,

    #[arg(long, env = "USER_STACK", default_value = "Rust/Axum")]
    pub user_stack: String,

    #[arg(long, env = "PORT", default_value = "8000")]
    pub port: u16,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl AppConfig {
    /// 從配置組出靜態使用者資料
    pub fn user_profile(&self) -> UserProfile {
        UserProfile {
            email: self.user_email.clone(),
            name: self.user_name.clone(),
            stack: self.user_stack.clone(),
        }
    }
}

impl ConfigProvider for AppConfig {
    fn fact_api_url(&self) -> &str {
        &self.fact_api_url
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("fact_api_url", &self.fact_api_url)?;
        validation::validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::parse_from(["profile-api"]);

        assert_eq!(config.fact_api_url, "https://catfact.ninja/fact");
        assert_eq!(config.timeout_seconds, 5);
        assert_eq!(config.user_email, "your.email@example.com");
        assert_eq!(config.user_name, "Your Full Name");
        assert_eq!(config.port, 8000);
        assert!(!config.verbose);
    }

    #[test]
    fn test_env_override() {
        std::env::set_var("USER_STACK", "Rust/Actix");

        let config = AppConfig::parse_from(["profile-api"]);
        assert_eq!(config.user_stack, "Rust/Actix");

        std::env::remove_var("USER_STACK");
    }

    #[test]
    fn test_cli_flags_override_defaults() {
        let config = AppConfig::parse_from([
            "profile-api",
            "--fact-api-url",
            "http://localhost:9000/fact",
            "--timeout-seconds",
            "2",
            "--port",
            "3000",
        ]);

        assert_eq!(config.fact_api_url, "http://localhost:9000/fact");
        assert_eq!(config.timeout_seconds, 2);
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_user_profile_from_config() {
        let config = AppConfig::parse_from([
            "profile-api",
            "--user-email",
            "dev@example.com",
            "--user-name",
            "Dev Example",
            "--user-stack",
            "Rust/Axum",
        ]);

        let user = config.user_profile();
        assert_eq!(user.email, "dev@example.com");
        assert_eq!(user.name, "Dev Example");
        assert_eq!(user.stack, "Rust/Axum");
    }

    #[test]
    fn test_validation_rejects_bad_url() {
        let mut config = AppConfig::parse_from(["profile-api"]);
        config.fact_api_url = "not-a-url".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_timeout() {
        let mut config = AppConfig::parse_from(["profile-api"]);
        config.timeout_seconds = 0;

        assert!(config.validate().is_err());
    }
}
