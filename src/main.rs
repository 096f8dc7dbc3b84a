mod advisor;
mod metrics;
mod model;
mod simulate;
mod stats;
mod store;
mod ui;

use eframe::egui;
use ui::AnalyzerApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([1000.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Hotel Revenue Analyzer",
        options,
        Box::new(|cc| {
            ui::set_custom_style(&cc.egui_ctx);
            Ok(Box::new(AnalyzerApp::new()))
        }),
    )
}
