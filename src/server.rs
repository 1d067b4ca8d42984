//! HTTP 服务器生命周期

use std::future::Future;

use tokio::net::TcpListener;
use tracing::{error, info};

use crate::{app, config::ServerConfig, core::error::ServerError, Result};

/// 绑定配置中的地址并一直服务到 Ctrl+C
pub async fn run(config: &ServerConfig) -> Result<()> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    for line in startup_banner(config) {
        println!("{line}");
    }

    info!(%addr, "🚀 服务器已启动");
    info!("📖 可用的路由:");
    for (method, path) in app::ROUTES {
        info!("   {:<4} {}", method, path);
    }

    serve(listener, shutdown_signal()).await
}

/// 启动时打印到 stdout 的两行提示
pub fn startup_banner(config: &ServerConfig) -> [String; 2] {
    [
        format!("Servidor rodando na porta {}", config.port),
        format!("Acesse em: {}", config.access_url()),
    ]
}

/// 在已绑定的监听器上服务，`shutdown` 完成后优雅退出
///
/// 连接在单线程运行时上以任务交替处理，而不是逐个 accept 并串行服务完毕。
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app::router())
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("服务器已停止");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("收到关闭信号"),
        Err(err) => {
            error!(error = %err, "无法监听 Ctrl+C，继续运行");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startup_banner_names_port_and_url() {
        let [port_line, url_line] = startup_banner(&ServerConfig::default());
        assert_eq!(port_line, "Servidor rodando na porta 3335");
        assert_eq!(url_line, "Acesse em: http://localhost:3335");
    }

    #[test]
    fn startup_banner_follows_configured_port() {
        let config = ServerConfig {
            port: 8080,
            ..ServerConfig::default()
        };
        let banner = startup_banner(&config);
        assert!(banner.iter().all(|line| line.contains("8080")));
    }
}
