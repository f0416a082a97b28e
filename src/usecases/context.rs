use std::sync::Arc;

use crate::{
    domain::session::SessionError,
    infra::config::AppConfig,
    usecases::{
        contracts::{Clock, Notifier, RemoteStore},
        session::{ChatSession, SessionOptions},
    },
};

/// Configuration plus the wired adapters a presentation layer needs.
pub struct AppContext {
    pub config: AppConfig,
    pub store: Arc<dyn RemoteStore + Send + Sync>,
    pub notifier: Arc<dyn Notifier + Send + Sync>,
    pub clock: Arc<dyn Clock + Send + Sync>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        store: Arc<dyn RemoteStore + Send + Sync>,
        notifier: Arc<dyn Notifier + Send + Sync>,
        clock: Arc<dyn Clock + Send + Sync>,
    ) -> Self {
        Self {
            config,
            store,
            notifier,
            clock,
        }
    }

    /// Wires a chat session from the configured adapters. The caller still
    /// subscribes and starts it.
    pub fn join_session(
        &self,
        nickname: &str,
        group_code: &str,
    ) -> Result<ChatSession, SessionError> {
        ChatSession::join(
            nickname,
            group_code,
            Arc::clone(&self.store),
            Arc::clone(&self.notifier),
            Arc::clone(&self.clock),
            SessionOptions::from(&self.config.chat),
        )
    }
}
