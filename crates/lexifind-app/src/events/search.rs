use kanal::AsyncSender;
use lexifind_core::{SearchSession, SearchTicket};
use lexifind_generator::{GenerateError, WordGenerator};
use lexifind_types::{AppEvent, Difficulty, Query, SearchOutcome};

use super::EventContext;

pub async fn handle_submit(
    ctx: &EventContext,
    session: &mut SearchSession,
    pattern: &str,
    difficulty: Difficulty,
) -> anyhow::Result<()> {
    let (ticket, query) = match session.begin(pattern, difficulty) {
        Ok(started) => started,
        Err(e) => {
            let err = GenerateError::from(e);
            tracing::debug!("Submission rejected before any request: {}", err);
            return Ok(());
        }
    };

    ctx.app_to_ui_tx
        .send(AppEvent::ShowSearch(session.view()))
        .await?;

    tokio::spawn(run_search(
        ctx.generator.clone(),
        query,
        ticket,
        ctx.inbox_tx.clone(),
    ));

    Ok(())
}

/// One outbound call; the completion goes back through the app inbox
async fn run_search(
    generator: std::sync::Arc<dyn WordGenerator>,
    query: Query,
    ticket: SearchTicket,
    inbox_tx: AsyncSender<AppEvent>,
) {
    let outcome = fetch(generator.as_ref(), &query).await;

    if let Err(e) = inbox_tx
        .send(AppEvent::SearchFinished {
            ticket: ticket.raw(),
            outcome,
        })
        .await
    {
        tracing::error!("Failed to deliver search completion: {}", e);
    }
}

/// Collapse every failure into the message the user sees, logging the cause
pub async fn fetch(generator: &dyn WordGenerator, query: &Query) -> SearchOutcome {
    match generator.generate(query).await {
        Ok(results) => SearchOutcome::Found(results),
        Err(e) => {
            tracing::error!("Word generation failed for {:?}: {}", query.pattern(), e);
            SearchOutcome::Failed(e.user_message())
        }
    }
}

pub async fn handle_search_finished(
    ctx: &EventContext,
    session: &mut SearchSession,
    ticket: SearchTicket,
    outcome: SearchOutcome,
) -> anyhow::Result<()> {
    if session.resolve(ticket, outcome) {
        ctx.app_to_ui_tx
            .send(AppEvent::ShowSearch(session.view()))
            .await?;
    }

    Ok(())
}
