use std::{path::Path, sync::Arc};

use crate::{
    domain,
    infra::{
        self, clock::SystemClock, config::FileConfigAdapter, contracts::ConfigAdapter,
        error::AppError, notifier::DesktopNotifier,
    },
    store::{self, RestStoreClient},
    usecases::{self, context::AppContext},
};

/// Loads configuration, initializes logging, and wires the adapters.
pub fn bootstrap(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let context = build_context(config_path)?;
    infra::logging::init(&context.config.logging)?;

    tracing::debug!(
        domain = domain::module_name(),
        store = store::module_name(),
        usecases = usecases::module_name(),
        infra = infra::module_name(),
        "module boundaries loaded"
    );

    Ok(context)
}

fn build_context(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let config_adapter = FileConfigAdapter::new(config_path);
    let config = config_adapter.load().map_err(AppError::Other)?;

    let store = RestStoreClient::new(&config.store).map_err(|error| AppError::Other(error.into()))?;

    Ok(AppContext::new(
        config,
        Arc::new(store),
        Arc::new(DesktopNotifier::default()),
        Arc::new(SystemClock),
    ))
}
