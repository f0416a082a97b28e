use anyhow::Result;

use crate::usecases::{contracts::Notifier, notify::NotificationContent};

#[cfg(test)]
use crate::infra::{config::AppConfig, contracts::ConfigAdapter};

#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct StubConfigAdapter;

#[cfg(test)]
impl ConfigAdapter for StubConfigAdapter {
    fn load(&self) -> Result<AppConfig> {
        Ok(AppConfig::default())
    }
}

/// Drops notifications on the floor, for headless embeddings that render
/// new-message counts themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _content: &NotificationContent) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_config_adapter_yields_defaults() {
        let config = StubConfigAdapter.load().expect("stub must load");

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn noop_notifier_accepts_anything() {
        let content = NotificationContent {
            title: "New message".to_owned(),
            body: "Group team42".to_owned(),
        };

        assert!(NoopNotifier.notify(&content).is_ok());
    }
}
