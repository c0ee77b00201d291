use std::time::Duration;

use async_trait::async_trait;
use kanal::AsyncSender;
use lexifind_config::share::ShareConfig;
use lexifind_core::{ShareAttempt, ShareChain, ShareMechanism, ShareOutcome};
use lexifind_io::{ClipboardShare, CommandShare};
use lexifind_types::{AppEvent, ShareMethod, SharePayload};

use super::EventContext;

/// Last resort: show the link so the user can copy it by hand
pub struct ManualCopyPrompt {
    app_to_ui_tx: AsyncSender<AppEvent>,
}

impl ManualCopyPrompt {
    pub fn new(app_to_ui_tx: AsyncSender<AppEvent>) -> Self {
        Self { app_to_ui_tx }
    }
}

#[async_trait]
impl ShareMechanism for ManualCopyPrompt {
    fn method(&self) -> ShareMethod {
        ShareMethod::ManualPrompt
    }

    fn is_available(&self, _payload: &SharePayload) -> bool {
        true
    }

    async fn share(&self, payload: &SharePayload) -> ShareAttempt {
        match self
            .app_to_ui_tx
            .send(AppEvent::ShowManualCopy {
                url: payload.url.clone(),
            })
            .await
        {
            Ok(()) => ShareAttempt::Shared,
            Err(e) => ShareAttempt::Failed(format!("UI unreachable: {e}")),
        }
    }
}

/// native helper -> clipboard -> manual prompt
pub fn default_chain(config: &ShareConfig, app_to_ui_tx: AsyncSender<AppEvent>) -> ShareChain {
    ShareChain::new()
        .with(CommandShare::new(config.native_command.clone()))
        .with(ClipboardShare::new(Duration::from_millis(config.clipboard_hold_ms)))
        .with(ManualCopyPrompt::new(app_to_ui_tx))
}

/// Runs the chain off the event loop so a slow share sheet does not block searches
pub fn handle_share(ctx: &EventContext) {
    let config = &ctx.state.config;
    let payload = config.share.payload();
    let indicator = Duration::from_millis(config.ui.copy_indicator_ms);

    let chain = ctx.share_chain.clone();
    let app_to_ui_tx = ctx.app_to_ui_tx.clone();

    tokio::spawn(async move {
        match chain.run(&payload).await {
            ShareOutcome::Completed(ShareMethod::Clipboard) => {
                show_copied(&app_to_ui_tx, indicator).await;
            }
            ShareOutcome::Completed(_) | ShareOutcome::Cancelled => {}
            ShareOutcome::Exhausted => {
                tracing::error!("No share mechanism could deliver the app link");
            }
        }
    });
}

async fn show_copied(app_to_ui_tx: &AsyncSender<AppEvent>, indicator: Duration) {
    if app_to_ui_tx.send(AppEvent::CopyIndicator(true)).await.is_err() {
        return;
    }

    tokio::time::sleep(indicator).await;
    let _ = app_to_ui_tx.send(AppEvent::CopyIndicator(false)).await;
}
