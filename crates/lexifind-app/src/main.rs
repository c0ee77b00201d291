use std::sync::Arc;

use lexifind_config::generator::GeneratorConfig;
use lexifind_gemini::GeminiGenerator;
use lexifind_generator::WordGenerator;

mod controller;
mod events;
mod logging;
mod profile;
mod state;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init_tracing();

    let config = profile::load_config();
    if !config.generator.has_api_key() {
        tracing::warn!("GEMINI_API_KEY is not set, every search will fail");
    }

    let generator = build_generator(&config.generator)?;
    let ui_config = config.ui.clone();

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(generator);

    // Slint owns the main thread; backend tasks run on the runtime workers
    let (app_to_ui_rx, ui_to_app_tx) = controller.ui_endpoints();
    let ui_result = lexifind_ui::ui_loop(app_to_ui_rx, ui_to_app_tx, &ui_config);

    controller.shutdown();
    while let Some(result) = tasks.join_next().await {
        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::error!("task exited with error: {e:#}"),
            Err(e) => tracing::error!("task panicked: {e}"),
        }
    }

    ui_result
}

fn build_generator(config: &GeneratorConfig) -> anyhow::Result<Arc<dyn WordGenerator>> {
    match config.provider.as_str() {
        "gemini" => Ok(Arc::new(GeminiGenerator::new(
            config.api_key.clone(),
            config.api_url.clone(),
            config.model.clone(),
        ))),
        other => anyhow::bail!("Unsupported generator provider: {other}"),
    }
}
