#![windows_subsystem = "windows"]

mod app;
mod settings;

use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1080.0, 680.0])
            .with_title("Curio Catalog"),
        ..Default::default()
    };

    eframe::run_native(
        "Curio Catalog",
        options,
        Box::new(|_cc| Ok(Box::new(app::CurioApp::new()))),
    )
}
