use super::RequestsLoggingLevel;
use crate::view::TopN;

#[derive(Clone)]
pub struct ServerConfig {
    pub requests_logging_level: RequestsLoggingLevel,
    pub port: u16,
    /// Row limit applied when a view request does not carry `top_n`.
    pub default_top_n: TopN,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::Path,
            port: 3001,
            default_top_n: TopN::default(),
        }
    }
}
