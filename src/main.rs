use anyhow::{anyhow, Context};
use devpoint_assistant::config::{Config, ASSISTANT_NAME};
use devpoint_assistant::logger;
use devpoint_assistant::ui::AssistantApp;
use eframe::NativeOptions;

fn main() -> anyhow::Result<()> {
    logger::init();
    log::info!("🚀 {} assistant starting", ASSISTANT_NAME);

    // Reply resolution runs on tokio; the UI thread only polls results
    let runtime = tokio::runtime::Runtime::new().context("creating tokio runtime")?;
    let _guard = runtime.enter();
    let handle = runtime.handle().clone();

    let config = Config::from_env();
    log::info!(
        "📁 Config loaded (credential: {}, model: {})",
        if config.has_credential() { "present" } else { "absent" },
        config.gemini_model
    );

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([420.0, 480.0])
            .with_title("DevPoint"),
        ..Default::default()
    };

    eframe::run_native(
        "DevPoint",
        options,
        Box::new(move |_cc| -> Result<Box<dyn eframe::App>, Box<dyn std::error::Error + Send + Sync>> {
            Ok(Box::new(AssistantApp::new(config, handle)))
        }),
    )
    .map_err(|e| anyhow!("UI exited with error: {e}"))?;

    log::info!("👋 {} assistant stopped", ASSISTANT_NAME);
    Ok(())
}
