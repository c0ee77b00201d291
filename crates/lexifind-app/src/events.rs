use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lexifind_core::{SearchSession, SearchTicket, ShareChain};
use lexifind_generator::WordGenerator;
use lexifind_types::{AppEvent, UiEvent};
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub mod search;
pub mod share;

use search::{handle_search_finished, handle_submit};
use share::handle_share;

/// Everything the event handlers need besides the session itself
#[derive(Clone)]
pub struct EventContext {
    pub state: Arc<AppState>,
    pub generator: Arc<dyn WordGenerator>,
    pub share_chain: Arc<ShareChain>,
    /// Sender side of the app's own inbox, used to report search completions
    pub inbox_tx: AsyncSender<AppEvent>,
    pub app_to_ui_tx: AsyncSender<AppEvent>,
}

/// App's main loop. Sole owner of the search session.
pub async fn event_loop(
    ctx: EventContext,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut session = SearchSession::new();

    let metadata = ctx.generator.metadata();
    tracing::info!(
        "[EVENT_LOOP] Using {} ({})",
        metadata.name,
        metadata.model
    );

    ctx.app_to_ui_tx
        .send(AppEvent::ShowSearch(session.view()))
        .await?;
    ctx.app_to_ui_tx.send(AppEvent::BackendReady).await?;

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] Cancelled");
                break;
            }
            event = ui_to_app_rx.recv() => event?,
        };

        if !handle_events(&ctx, &mut session, event).await? {
            break;
        }
    }

    Ok(())
}

/// Returns false once the loop should stop
pub async fn handle_events(
    ctx: &EventContext,
    session: &mut SearchSession,
    event: AppEvent,
) -> anyhow::Result<bool> {
    match event {
        AppEvent::UiEvent(UiEvent::Submit {
            pattern,
            difficulty,
        }) => {
            handle_submit(ctx, session, &pattern, difficulty).await?;
        }
        AppEvent::SearchFinished { ticket, outcome } => {
            handle_search_finished(ctx, session, SearchTicket::from_raw(ticket), outcome).await?;
        }
        AppEvent::UiEvent(UiEvent::Share) => {
            handle_share(ctx);
        }
        AppEvent::UiEvent(UiEvent::Close) => {
            tracing::info!("[EVENT_LOOP] UI closed");
            return Ok(false);
        }
        AppEvent::ShowSearch(_)
        | AppEvent::CopyIndicator(_)
        | AppEvent::ShowManualCopy { .. }
        | AppEvent::BackendReady => {
            // UI-only event, ignore in backend
        }
    }

    Ok(true)
}
