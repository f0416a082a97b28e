use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub store: StoreConfig,
    pub chat: ChatConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreConfig {
    pub base_url: String,
    pub read_timeout_ms: u64,
    pub write_timeout_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: "https://replace-me.example.com".to_owned(),
            read_timeout_ms: 6_000,
            write_timeout_ms: 6_000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatConfig {
    pub poll_interval_ms: u64,
    pub typing_idle_ms: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 4_000,
            typing_idle_ms: 2_000,
        }
    }
}
