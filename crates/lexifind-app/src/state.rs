use lexifind_config::Config;

/// Startup configuration, shared read-only by every task
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}
