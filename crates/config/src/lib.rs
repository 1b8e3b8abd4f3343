//! storeroom-config - 配置加载库

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use secrecy::Secret;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Load(#[from] figment::Error),
}

/// 数据库配置
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: Secret<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_max_connections() -> u32 {
    // 根据环境自动调整连接池大小
    match std::env::var("APP_ENV").as_deref() {
        Ok("production") => 50,
        _ => 10,
    }
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// 遥测配置
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

/// 系统设置存储配置
#[derive(Debug, Clone, Deserialize)]
pub struct SettingsConfig {
    /// 仓库名称列表的持久化文件
    #[serde(default = "default_warehouse_file")]
    pub warehouse_file: PathBuf,
}

fn default_warehouse_file() -> PathBuf {
    PathBuf::from("data/warehouses.json")
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            warehouse_file: default_warehouse_file(),
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app_name: String,
    pub app_env: String,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub settings: SettingsConfig,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// 从配置文件和环境变量加载配置
    pub fn load(config_dir: &str) -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        let config: Self = Figment::new()
            .merge(Toml::file(format!("{}/default.toml", config_dir)))
            .merge(Toml::file(format!("{}/{}.toml", config_dir, env)))
            .merge(Env::prefixed("").split("_"))
            .extract()?;

        Ok(config)
    }

    /// 是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app_env == "production"
    }

    /// 是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app_env == "development"
    }
}

#[cfg(test)]
mod tests {
    use figment::Jail;

    use super::*;

    #[test]
    fn test_load_from_toml() {
        Jail::expect_with(|jail| {
            jail.create_dir("config")?;
            jail.create_file(
                "config/default.toml",
                r#"
                app_name = "inventory"
                app_env = "development"

                [database]
                url = "postgres://localhost/inventory"
                max_connections = 5

                [server]
                host = "127.0.0.1"
                port = 8000
                "#,
            )?;

            let config = AppConfig::load("config").expect("config should load");
            assert_eq!(config.app_name, "inventory");
            assert_eq!(config.server.port, 8000);
            assert_eq!(config.database.max_connections, 5);
            assert!(config.is_development());
            // 未配置的段回退到默认值
            assert_eq!(config.telemetry.log_level, "info");
            assert_eq!(
                config.settings.warehouse_file,
                PathBuf::from("data/warehouses.json")
            );
            Ok(())
        });
    }
}
