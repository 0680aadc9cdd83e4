#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // no console window in release

// Entry point stays minimal: window configuration and start-up wiring.
// Application state and screens live in the app module.

use eframe::{egui, egui_wgpu::WgpuConfiguration, wgpu::PresentMode};

mod app;
mod catalog;
mod gallery;
mod localization;
mod logger;
mod types;
mod ui_constants;
mod views;

fn main() -> eframe::Result<()> {
    logger::init();
    app::settings::load_settings_from_disk();
    let preferred = { app::settings::APP_SETTINGS.read().unwrap().language };
    localization::initialize_localization(preferred);

    // Wgpu with vsync off keeps input-to-photon latency low; the gallery
    // swipes feel it.
    let wgpu_options = WgpuConfiguration {
        present_mode: PresentMode::AutoNoVsync,
        ..Default::default()
    };
    let native_options = eframe::NativeOptions {
        renderer: eframe::Renderer::Wgpu,
        vsync: false,
        hardware_acceleration: eframe::HardwareAcceleration::Preferred,
        wgpu_options,
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1120.0, 760.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    let res = eframe::run_native(
        localization::translate("app-window-title").as_str(),
        native_options,
        Box::new(|_cc| Box::new(app::EncontreiApp::default())),
    );
    if let Err(ref e) = res {
        log::error!("eframe::run_native failed: {e}");
    }
    res
}
