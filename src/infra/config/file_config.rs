use serde::Deserialize;

use crate::infra::config::{AppConfig, ChatConfig, LogConfig, StoreConfig};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub store: Option<FileStoreConfig>,
    pub chat: Option<FileChatConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(store) = self.store {
            store.merge_into(&mut config.store);
        }

        if let Some(chat) = self.chat {
            chat.merge_into(&mut config.chat);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileStoreConfig {
    pub base_url: Option<String>,
    pub read_timeout_ms: Option<u64>,
    pub write_timeout_ms: Option<u64>,
}

impl FileStoreConfig {
    fn merge_into(self, config: &mut StoreConfig) {
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }

        if let Some(read_timeout_ms) = self.read_timeout_ms {
            config.read_timeout_ms = read_timeout_ms;
        }

        if let Some(write_timeout_ms) = self.write_timeout_ms {
            config.write_timeout_ms = write_timeout_ms;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileChatConfig {
    pub poll_interval_ms: Option<u64>,
    pub typing_idle_ms: Option<u64>,
}

impl FileChatConfig {
    fn merge_into(self, config: &mut ChatConfig) {
        if let Some(poll_interval_ms) = self.poll_interval_ms {
            config.poll_interval_ms = poll_interval_ms;
        }

        if let Some(typing_idle_ms) = self.typing_idle_ms {
            config.typing_idle_ms = typing_idle_ms;
        }
    }
}
