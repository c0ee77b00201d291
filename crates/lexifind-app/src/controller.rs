use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lexifind_generator::WordGenerator;
use lexifind_types::AppEvent;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::share::default_chain;
use crate::events::{EventContext, event_loop};
use crate::state::AppState;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            app_to_ui: kanal::bounded_async(256),
            ui_to_app: kanal::bounded_async(64), // UI interactions and search completions
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks(
        &self,
        generator: Arc<dyn WordGenerator>,
    ) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        let share_chain = default_chain(
            &self.state.config.share,
            self.channels.app_to_ui.0.clone(),
        );

        let ctx = EventContext {
            state: self.state.clone(),
            generator,
            share_chain: Arc::new(share_chain),
            inbox_tx: self.channels.ui_to_app.0.clone(),
            app_to_ui_tx: self.channels.app_to_ui.0.clone(),
        };

        // Event loop
        tasks.spawn(event_loop(
            ctx,
            self.channels.ui_to_app.1.clone(),
            self.cancel_token.child_token(),
        ));

        tasks
    }

    /// Channel ends the UI thread owns
    pub fn ui_endpoints(&self) -> (AsyncReceiver<AppEvent>, AsyncSender<AppEvent>) {
        (
            self.channels.app_to_ui.1.clone(),
            self.channels.ui_to_app.0.clone(),
        )
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
