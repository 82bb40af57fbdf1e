//! Riddler - 谜题游戏 REST 后端

use std::sync::Arc;

use riddler::application::{GameRepositoryPort, UserRepositoryPort};
use riddler::config::{load_config, print_config, DatabaseBackend};
use riddler::infrastructure::adapters::{Argon2HasherConfig, Argon2PasswordHasher};
use riddler::infrastructure::http::{AppState, HttpServer, ServerConfig};
use riddler::infrastructure::memory::{InMemoryGameRepository, InMemoryUserRepository};
use riddler::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteGameRepository, SqliteUserRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},riddler={},tower_http=debug",
        config.log.level, config.log.level
    );
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));
    if config.log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    tracing::info!("Riddler - 谜题游戏 REST 后端");
    print_config(&config);

    // 创建 Repository 适配器
    let (game_repo, user_repo): (Arc<dyn GameRepositoryPort>, Arc<dyn UserRepositoryPort>) =
        match config.database.backend {
            DatabaseBackend::Sqlite => {
                // 确保数据目录存在
                if config.database.url.is_none() {
                    if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }

                let db_config = DatabaseConfig {
                    database_url: config.database.database_url(),
                    max_connections: config.database.max_connections,
                };
                let pool = create_pool(&db_config).await?;
                run_migrations(&pool).await?;

                let game_repo: Arc<dyn GameRepositoryPort> =
                    Arc::new(SqliteGameRepository::new(pool.clone()));
                let user_repo: Arc<dyn UserRepositoryPort> =
                    Arc::new(SqliteUserRepository::new(pool));
                (game_repo, user_repo)
            }
            DatabaseBackend::Memory => {
                tracing::warn!("Using in-memory storage, data is lost on restart");
                let game_repo: Arc<dyn GameRepositoryPort> = InMemoryGameRepository::new().arc();
                let user_repo: Arc<dyn UserRepositoryPort> = InMemoryUserRepository::new().arc();
                (game_repo, user_repo)
            }
        };

    // 创建密码哈希器
    let hasher_config = Argon2HasherConfig {
        memory_cost_kib: config.security.argon2_memory_cost_kib,
        time_cost: config.security.argon2_time_cost,
        parallelism: config.security.argon2_parallelism,
    };
    let password_hasher = Arc::new(
        Argon2PasswordHasher::from_config(&hasher_config)
            .map_err(|e| anyhow::anyhow!("Failed to create password hasher: {}", e))?,
    );

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(game_repo, user_repo, password_hasher);
    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
