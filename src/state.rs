use std::sync::Arc;

use crate::config::Settings;

/// Shared application context, built once at startup and handed to every
/// component that needs configuration.
///
/// Cloning is cheap: all clones point at the same immutable [`Settings`].
#[derive(Clone, Debug)]
pub struct AppState {
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }

    pub fn from_env() -> Self {
        Self::new(Settings::from_env())
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
