//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. `PORT` / `DATABASE_URL`（或 `MONGO_URL`）环境变量
//! 2. `RIDDLER_` 前缀环境变量
//! 3. 配置文件（config.toml）
//! 4. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::{AppConfig, DatabaseBackend};

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 连接串环境变量，按优先级排列；`MONGO_URL` 为旧部署沿用的名字
const DATABASE_URL_VARS: &[&str] = &["DATABASE_URL", "MONGO_URL"];

/// 不带前缀的部署环境变量
#[derive(Debug, Clone, Default)]
struct PlainEnv {
    port: Option<String>,
    database_url: Option<String>,
}

impl PlainEnv {
    fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            port: lookup("PORT"),
            database_url: DATABASE_URL_VARS.iter().find_map(|key| lookup(key)),
        }
    }
}

/// 加载应用配置
///
/// # 环境变量示例
/// - `PORT=3000`
/// - `DATABASE_URL=sqlite:/data/riddler.db?mode=rwc`
/// - `RIDDLER_SERVER__HOST=127.0.0.1`
/// - `RIDDLER_DATABASE__BACKEND=memory`
/// - `RIDDLER_LOG__LEVEL=debug`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    load_with_env(config_path, PlainEnv::from_env())
}

fn load_with_env(config_path: Option<&Path>, plain_env: PlainEnv) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080)?
        .set_default("database.backend", "sqlite")?
        .set_default("database.path", "data/riddler.db")?
        .set_default("database.max_connections", 5)?
        .set_default("security.argon2_memory_cost_kib", 19 * 1024)?
        .set_default("security.argon2_time_cost", 2)?
        .set_default("security.argon2_parallelism", 1)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 前缀环境变量，层级分隔符 __
    builder = builder.add_source(
        Environment::with_prefix("RIDDLER")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 部署平台常用的 PORT / DATABASE_URL（最高优先级）
    builder = builder
        .set_override_option("server.port", plain_env.port)?
        .set_override_option("database.url", plain_env.database_url)?;

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.database.backend == DatabaseBackend::Sqlite {
        let has_url = config.database.url.as_deref().is_some_and(|u| !u.is_empty());
        if !has_url && config.database.path.is_empty() {
            return Err(ConfigError::ValidationError(
                "Database path cannot be empty".to_string(),
            ));
        }
        if config.database.max_connections == 0 {
            return Err(ConfigError::ValidationError(
                "Database max_connections cannot be 0".to_string(),
            ));
        }
    }

    argon2::Params::new(
        config.security.argon2_memory_cost_kib,
        config.security.argon2_time_cost,
        config.security.argon2_parallelism,
        None,
    )
    .map_err(|e| ConfigError::ValidationError(format!("Invalid Argon2 params: {}", e)))?;

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Database Backend: {:?}", config.database.backend);
    if config.database.backend == DatabaseBackend::Sqlite {
        // url 可能带凭据，只打印文件路径
        if config.database.url.is_some() {
            tracing::info!("Database: <from DATABASE_URL>");
        } else {
            tracing::info!("Database: {}", config.database.path);
        }
        tracing::info!("Database Max Connections: {}", config.database.max_connections);
    }
    tracing::info!(
        "Argon2: m={}KiB t={} p={}",
        config.security.argon2_memory_cost_kib,
        config.security.argon2_time_cost,
        config.security.argon2_parallelism
    );
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_validation_passes_for_default_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_db_path() {
        let mut config = AppConfig::default();
        config.database.path = String::new();
        assert!(validate_config(&config).is_err());

        // memory 后端不需要路径
        config.database.backend = DatabaseBackend::Memory;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_bad_argon2_params() {
        let mut config = AppConfig::default();
        config.security.argon2_time_cost = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let file = write_config(
            r#"
            [server]
            port = 9000

            [database]
            backend = "memory"
            "#,
        );

        let config = load_with_env(Some(file.path()), PlainEnv::default()).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.database.backend, DatabaseBackend::Memory);
    }

    #[test]
    fn test_plain_env_overrides_file() {
        let file = write_config(
            r#"
            [server]
            port = 9000
            "#,
        );

        let plain_env = PlainEnv {
            port: Some("3000".to_string()),
            database_url: Some("sqlite::memory:".to_string()),
        };

        let config = load_with_env(Some(file.path()), plain_env).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.database.database_url(), "sqlite::memory:");
    }

    #[test]
    fn test_mongo_url_is_accepted_as_database_url() {
        let only_mongo = PlainEnv::from_lookup(|key| match key {
            "MONGO_URL" => Some("sqlite:legacy.db".to_string()),
            _ => None,
        });
        assert_eq!(only_mongo.database_url.as_deref(), Some("sqlite:legacy.db"));
        assert_eq!(only_mongo.port, None);

        let both = PlainEnv::from_lookup(|key| match key {
            "DATABASE_URL" => Some("sqlite:new.db".to_string()),
            "MONGO_URL" => Some("sqlite:legacy.db".to_string()),
            _ => None,
        });
        assert_eq!(both.database_url.as_deref(), Some("sqlite:new.db"));
    }
}
