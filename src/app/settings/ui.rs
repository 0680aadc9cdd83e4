use eframe::egui;
use lazy_static::lazy_static;
use std::sync::RwLock;
use strum::IntoEnumIterator;

use super::store::{save_settings_to_disk, APP_SETTINGS};
use crate::localization::{self, translate, SupportedLang};

lazy_static! {
    static ref SETTINGS_OPEN: RwLock<bool> = RwLock::new(false);
}

pub fn open_settings() {
    if let Ok(mut v) = SETTINGS_OPEN.write() {
        *v = true;
    }
}

pub fn draw_settings_viewport(ctx: &egui::Context) {
    let is_open = SETTINGS_OPEN.read().map(|g| *g).unwrap_or(false);
    if !is_open {
        return;
    }

    let viewport_id = egui::ViewportId::from_hash_of("settings_window");
    ctx.show_viewport_immediate(
        viewport_id,
        egui::ViewportBuilder::default()
            .with_title(translate("settings-title"))
            .with_inner_size([380.0, 180.0])
            .with_resizable(false),
        |ctx, _class| {
            if ctx.input(|i| i.viewport().close_requested()) {
                if let Ok(mut v) = SETTINGS_OPEN.write() {
                    *v = false;
                }
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                return;
            }

            egui::CentralPanel::default().show(ctx, |ui| {
                ui.add_space(8.0);

                let mut language = { APP_SETTINGS.read().unwrap().language };
                ui.horizontal(|ui| {
                    ui.label(translate("settings-language"));
                    let selected_text = language
                        .map(|l| l.native_name().to_string())
                        .unwrap_or_else(|| translate("settings-language-auto"));
                    egui::ComboBox::from_id_source("settings_language")
                        .selected_text(selected_text)
                        .show_ui(ui, |ui| {
                            let mut changed = ui
                                .selectable_value(
                                    &mut language,
                                    None,
                                    translate("settings-language-auto"),
                                )
                                .clicked();
                            for lang in SupportedLang::iter() {
                                changed |= ui
                                    .selectable_value(&mut language, Some(lang), lang.native_name())
                                    .clicked();
                            }
                            if changed {
                                APP_SETTINGS.write().unwrap().language = language;
                                match language {
                                    Some(lang) => localization::set_current_language(lang),
                                    None => localization::set_language_auto(),
                                }
                                save_settings_to_disk();
                            }
                        });
                });

                ui.add_space(8.0);
                let mut instant = { APP_SETTINGS.read().unwrap().instant_responses };
                if ui
                    .checkbox(&mut instant, translate("settings-instant"))
                    .on_hover_text(translate("settings-instant-hint"))
                    .changed()
                {
                    APP_SETTINGS.write().unwrap().instant_responses = instant;
                    save_settings_to_disk();
                }
            });
        },
    );
}
