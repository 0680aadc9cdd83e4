use std::time::{Duration, Instant};

use eframe::egui::{self, Align2, Color32, FontId, RichText, Rounding, Sense};
use strum::IntoEnumIterator;

use super::EncontreiApp;
use crate::app::simulate::sim_duration;
use crate::app::state::ButtonPhase;
use crate::localization::translate;
use crate::types::{ProfileSection, ToastKind};
use crate::ui_constants::{latency, revert, spacing};
use crate::views::tabs::TabLabel;
use crate::views::widgets::{load_photo, tag_chips};

const FORM_WIDTH: f32 = 560.0;
const AVATAR_SIZE: f32 = 72.0;

pub(super) fn update(app: &mut EncontreiApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(FORM_WIDTH);
                    ui.add_space(spacing::LARGE);
                    ui.heading(translate("profile-title"));
                    ui.add_space(spacing::MEDIUM);

                    // Section tabs
                    ui.horizontal(|ui| {
                        for section in ProfileSection::iter() {
                            let label =
                                format!("{} {}", section.icon(), translate(section.loc_key()));
                            if ui
                                .selectable_label(app.profile.section == section, label)
                                .clicked()
                            {
                                app.profile.section = section;
                            }
                        }
                    });
                    ui.separator();
                    ui.add_space(spacing::MEDIUM);

                    match app.profile.section {
                        ProfileSection::Dados => dados_section(app, ui, ctx),
                        ProfileSection::Preferencias => preferencias_section(app, ui),
                    }

                    ui.add_space(spacing::LARGE);
                    save_button(app, ui);
                    ui.add_space(spacing::XLARGE);
                });
            });
    });
}

fn dados_section(app: &mut EncontreiApp, ui: &mut egui::Ui, ctx: &egui::Context) {
    ui.horizontal(|ui| {
        draw_avatar(app, ui);
        ui.add_space(spacing::MEDIUM);
        ui.vertical(|ui| {
            ui.label(RichText::new(&app.profile.name).strong());
            if ui.button(translate("profile-avatar-change")).clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Imagens", &["png", "jpg", "jpeg"])
                    .pick_file()
                {
                    match load_photo(ctx, &path) {
                        Ok(photo) => app.profile.avatar = Some(photo),
                        Err(e) => {
                            log::warn!("avatar rejected: {e}");
                            app.toast(ToastKind::Error, translate("checkin-photo-invalid"));
                        }
                    }
                }
            }
        });
    });
    ui.add_space(spacing::LARGE);

    ui.label(translate("profile-name"));
    ui.add(egui::TextEdit::singleline(&mut app.profile.name).desired_width(f32::INFINITY));
    ui.add_space(spacing::MEDIUM);

    ui.label(translate("profile-bio"));
    ui.add(
        egui::TextEdit::multiline(&mut app.profile.bio)
            .desired_rows(4)
            .desired_width(f32::INFINITY),
    );
}

fn preferencias_section(app: &mut EncontreiApp, ui: &mut egui::Ui) {
    ui.label(translate("profile-interests"));
    ui.add_space(spacing::SMALL);
    if tag_chips(
        ui,
        &mut app.profile.interests,
        &mut app.profile.interest_draft,
    ) {
        log::debug!("interests now: {:?}", app.profile.interests);
    }
}

fn draw_avatar(app: &EncontreiApp, ui: &mut egui::Ui) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(AVATAR_SIZE, AVATAR_SIZE), Sense::hover());
    let painter = ui.painter_at(rect);
    match &app.profile.avatar {
        Some(photo) => {
            let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
            painter.image(photo.texture.id(), rect, uv, Color32::WHITE);
        }
        None => {
            painter.circle_filled(rect.center(), AVATAR_SIZE / 2.0, crate::views::ACCENT);
            let initial = app
                .profile
                .name
                .chars()
                .next()
                .map(|c| c.to_uppercase().to_string())
                .unwrap_or_else(|| "?".to_string());
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                initial,
                FontId::proportional(30.0),
                Color32::WHITE,
            );
        }
    }
}

fn save_button(app: &mut EncontreiApp, ui: &mut egui::Ui) {
    let (key, enabled) = match app.profile.save.phase {
        ButtonPhase::Idle => ("profile-save", true),
        ButtonPhase::Busy { .. } => ("profile-save-busy", false),
        ButtonPhase::Done { .. } => ("profile-save-done", false),
    };
    let btn = egui::Button::new(translate(key))
        .min_size(egui::vec2(ui.available_width(), 38.0))
        .rounding(Rounding::same(6.0));
    if ui.add_enabled(enabled, btn).clicked() {
        log::info!("profile save requested");
        app.profile.save.trigger(
            Instant::now(),
            sim_duration(latency::PROFILE_SAVE_MS),
            Duration::from_millis(revert::PROFILE_SAVE_MS),
        );
    }
}
