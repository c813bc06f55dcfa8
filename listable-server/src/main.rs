use listable_server::{Config, DbService, Server, ServerState, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 加载 .env 和配置
    let _ = dotenvy::dotenv();
    let config = Config::from_env();

    // 2. 日志
    setup_environment(&config);
    tracing::info!(
        environment = %config.environment,
        port = config.http_port,
        "listable-server starting..."
    );

    // 3. 数据库在后台连接，监听器不等待
    let state = ServerState::new(config, DbService::new());
    state.connect_in_background();

    // 4. 启动 HTTP 服务器
    if let Err(e) = Server::new(state).run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
