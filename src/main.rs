use anyhow::Result;
use eframe::NativeOptions;

use configtool::ui::ConfigToolApp;

fn main() -> Result<()> {
    env_logger::init();

    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1080.0, 720.0])
            .with_min_inner_size([800.0, 500.0])
            .with_title("Helper config tool"),
        ..Default::default()
    };

    eframe::run_native(
        "configtool",
        native_options,
        Box::new(|cc| Ok(Box::new(ConfigToolApp::new(cc)))),
    )
    .map_err(|e| anyhow::anyhow!("ui error: {e}"))
}
