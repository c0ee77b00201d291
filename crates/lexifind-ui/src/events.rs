use std::rc::Rc;

use lexifind_types::{AppEvent, Category, SearchStatus, SearchView, UiEvent};
use slint::{Color, ComponentHandle, VecModel};

use crate::{AppWindow, PanelData, SearchPhase, WordRow};

/// Apply one app event to the window. Returns false when the UI should stop listening.
pub fn handle_event(event: AppEvent, window: &AppWindow) -> bool {
    match event {
        AppEvent::ShowSearch(view) => {
            tracing::debug!(
                "[SLINT] Search view: {:?} with {} panels",
                view.status,
                view.panels.len()
            );
            apply_search_view(window, view);
        }
        AppEvent::CopyIndicator(copied) => {
            window.set_copied(copied);
        }
        AppEvent::ShowManualCopy { url } => {
            tracing::debug!("[SLINT] Manual copy prompt for {}", url);
            window.set_manual_copy_url(url.into());
        }
        AppEvent::BackendReady => {
            tracing::debug!("[SLINT] Backend ready");
            window.set_backend_ready(true);
        }
        AppEvent::UiEvent(UiEvent::Close) => {
            window.hide().ok();
            slint::quit_event_loop().ok();
            return false;
        }
        AppEvent::UiEvent(_) | AppEvent::SearchFinished { .. } => {
            // Backend-only events
        }
    }

    true
}

fn apply_search_view(window: &AppWindow, view: SearchView) {
    window.set_phase(phase(view.status));
    window.set_error_message(view.error_message.unwrap_or_default().into());

    let panels: Vec<PanelData> = view
        .panels
        .into_iter()
        .map(|panel| {
            let rows: Vec<WordRow> = panel
                .rows
                .into_iter()
                .map(|item| WordRow {
                    word: item.word.into(),
                    ipa: item.ipa.into(),
                })
                .collect();

            PanelData {
                title: panel.title.into(),
                count_label: panel.count_label.into(),
                accent: accent(panel.category),
                rows: Rc::new(VecModel::from(rows)).into(),
                empty: panel.is_empty,
            }
        })
        .collect();

    window.set_panels(Rc::new(VecModel::from(panels)).into());
}

fn phase(status: SearchStatus) -> SearchPhase {
    match status {
        SearchStatus::Idle => SearchPhase::Idle,
        SearchStatus::Loading => SearchPhase::Loading,
        SearchStatus::Success => SearchPhase::Success,
        SearchStatus::Error => SearchPhase::Error,
    }
}

fn accent(category: Category) -> Color {
    match category {
        Category::Start => Color::from_rgb_u8(0x10, 0xb9, 0x81),
        Category::Middle => Color::from_rgb_u8(0x63, 0x66, 0xf1),
        Category::End => Color::from_rgb_u8(0xf4, 0x3f, 0x5e),
    }
}
