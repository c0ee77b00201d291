use kanal::{AsyncReceiver, AsyncSender};
use lexifind_config::ui::UiConfig;
use lexifind_types::{AppEvent, Difficulty, Query, UiEvent};
use slint::{ComponentHandle, ModelRc, SharedString, VecModel};

mod events;

slint::include_modules!();

/// Runs the window on the calling thread until it is closed
pub fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    config: &UiConfig,
) -> anyhow::Result<()> {
    let window = AppWindow::new()?;

    let labels: Vec<SharedString> = Difficulty::ALL
        .iter()
        .map(|d| SharedString::from(d.display_label()))
        .collect();
    window.set_difficulty_labels(ModelRc::new(VecModel::from(labels)));
    window.set_difficulty_index(config.default_difficulty.index() as i32);

    window.on_pattern_valid(|text| Query::is_valid_pattern(&text));

    {
        let tx = ui_to_app_tx.clone();
        window.on_submit(move |pattern, index| {
            let difficulty = usize::try_from(index)
                .ok()
                .and_then(Difficulty::from_index)
                .unwrap_or_default();

            send_to_app(
                &tx,
                AppEvent::UiEvent(UiEvent::Submit {
                    pattern: pattern.to_string(),
                    difficulty,
                }),
            );
        });
    }

    {
        let tx = ui_to_app_tx.clone();
        window.on_share(move || send_to_app(&tx, AppEvent::UiEvent(UiEvent::Share)));
    }

    // Drain app events on the UI thread
    {
        let window_weak = window.as_weak();
        slint::spawn_local(async move {
            while let Ok(event) = app_to_ui_rx.recv().await {
                let Some(window) = window_weak.upgrade() else {
                    break;
                };

                if !events::handle_event(event, &window) {
                    break;
                }
            }
            tracing::debug!("[SLINT] app channel closed");
        })?;
    }

    window.run()?;

    tracing::info!("[SLINT] window closed");
    if let Err(e) = ui_to_app_tx.try_send(AppEvent::UiEvent(UiEvent::Close)) {
        tracing::warn!("Failed to notify app about window close: {}", e);
    }

    Ok(())
}

fn send_to_app(tx: &AsyncSender<AppEvent>, event: AppEvent) {
    let tx = tx.clone();
    let spawned = slint::spawn_local(async move {
        if let Err(e) = tx.send(event).await {
            tracing::error!("Failed to send UI event to app: {}", e);
        }
    });

    if let Err(e) = spawned {
        tracing::error!("Failed to schedule UI event: {}", e);
    }
}
