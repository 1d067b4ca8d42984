//! 服务器配置

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// 默认监听端口
pub const DEFAULT_PORT: u16 = 3335;

/// 监听地址配置，固定为 `0.0.0.0:3335`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// 启动时打印的访问地址，仅用于提示
    pub fn access_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_binds_all_interfaces_on_3335() {
        let config = ServerConfig::default();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3335");
    }

    #[test]
    fn access_url_uses_port() {
        let config = ServerConfig {
            port: 8080,
            ..ServerConfig::default()
        };
        assert_eq!(config.access_url(), "http://localhost:8080");
    }
}
