mod app;
mod ui;

use app::MetricAnnotatorApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([520.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "CSV Comparer",
        options,
        Box::new(|_cc| Ok(Box::new(MetricAnnotatorApp::default()))),
    )
}
