pub mod cards;
pub mod tabs;
pub mod ui_helpers;
pub mod widgets;

use eframe::egui::Color32;

/// Primary brand color of the platform (the web front end's #2b619e).
pub const ACCENT: Color32 = Color32::from_rgb(43, 97, 158);
