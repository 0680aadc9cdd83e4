// Settings: the persisted store plus its viewport.

pub mod store;
mod ui;

pub use store::{instant_responses, load_settings_from_disk, save_settings_to_disk, APP_SETTINGS};
pub use ui::{draw_settings_viewport, open_settings};
