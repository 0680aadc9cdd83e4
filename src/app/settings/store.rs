// Settings store: data types, global state, load/save.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

use crate::localization::SupportedLang;

const SETTINGS_FILE: &str = "encontrei_settings.json";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppSettings {
    /// UI language; `None` follows the system locale.
    #[serde(default)]
    pub language: Option<SupportedLang>,
    /// Skip the simulated network delays.
    #[serde(default)]
    pub instant_responses: bool,
}

lazy_static! {
    pub static ref APP_SETTINGS: RwLock<AppSettings> = RwLock::new(AppSettings::default());
}

pub fn load_settings_from_disk() {
    match std::fs::read_to_string(SETTINGS_FILE) {
        Ok(text) => match serde_json::from_str::<AppSettings>(&text) {
            Ok(loaded) => {
                if let Ok(mut st) = APP_SETTINGS.write() {
                    *st = loaded;
                }
            }
            Err(e) => log::warn!("couldn't parse {SETTINGS_FILE}: {e}"),
        },
        Err(_) => log::info!("no {SETTINGS_FILE} yet, using defaults"),
    }
}

pub fn save_settings_to_disk() {
    let snapshot = APP_SETTINGS.read().unwrap().clone();
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => {
            if let Err(e) = std::fs::write(SETTINGS_FILE, json) {
                log::warn!("couldn't write {SETTINGS_FILE}: {e}");
            }
        }
        Err(e) => log::warn!("couldn't serialize settings: {e}"),
    }
}

pub fn instant_responses() -> bool {
    APP_SETTINGS.read().unwrap().instant_responses
}
