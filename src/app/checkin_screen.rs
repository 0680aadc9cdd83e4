use eframe::egui::{self, Color32, RichText, Rounding, Stroke};

use super::EncontreiApp;
use crate::app::simulate;
use crate::app::state::CheckinReceipt;
use crate::localization::translate;
use crate::types::ToastKind;
use crate::ui_constants::spacing;
use crate::views::ui_helpers;
use crate::views::widgets::{load_photo, photo_field, rating_text, star_rating, take_dropped_file};

const FORM_WIDTH: f32 = 560.0;

pub(super) fn update(app: &mut EncontreiApp, ctx: &egui::Context) {
    // An image dropped anywhere on the window lands in the form, like the
    // drag-and-drop zone on the web page.
    if let Some(path) = take_dropped_file(ctx) {
        match load_photo(ctx, &path) {
            Ok(photo) => app.checkin.photo = Some(photo),
            Err(e) => {
                log::warn!("dropped file rejected: {e}");
                app.toast(ToastKind::Error, translate("checkin-photo-invalid"));
            }
        }
    }

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(FORM_WIDTH);
                    ui.add_space(spacing::LARGE);
                    ui.heading(translate("checkin-title"));
                    ui.label(
                        RichText::new(translate("checkin-subtitle"))
                            .color(Color32::from_gray(170)),
                    );
                    ui.add_space(spacing::LARGE);
                    form(app, ui, ctx);
                });
            });
    });

    draw_success_modal(app, ctx);
}

fn form(app: &mut EncontreiApp, ui: &mut egui::Ui, ctx: &egui::Context) {
    // Book id + QR scan
    ui.label(translate("checkin-book-id"));
    ui.horizontal(|ui| {
        let w = (ui.available_width() - 150.0).max(120.0);
        ui.add_sized(
            [w, 0.0],
            egui::TextEdit::singleline(&mut app.checkin.book_id)
                .hint_text(translate("checkin-book-id-hint")),
        );
        let scan = ui.add_enabled(
            !app.checkin.scanning,
            egui::Button::new(translate("checkin-scan-qr")),
        );
        if app.checkin.scanning {
            ui.add(egui::Spinner::new());
        }
        if scan.clicked() {
            app.checkin.scanning = true;
            app.toast(ToastKind::Info, translate("checkin-scan-pending"));
            simulate::scan_qr(ctx, app.tx.clone());
        }
    });
    ui.add_space(spacing::MEDIUM);

    // Location + geolocation
    ui.label(translate("checkin-location"));
    ui.horizontal(|ui| {
        let w = (ui.available_width() - 150.0).max(120.0);
        ui.add_sized(
            [w, 0.0],
            egui::TextEdit::singleline(&mut app.checkin.location)
                .hint_text(translate("checkin-location-hint")),
        );
        let locate = ui.add_enabled(
            !app.checkin.locating,
            egui::Button::new(translate("checkin-locate")),
        );
        if app.checkin.locating {
            ui.add(egui::Spinner::new());
        }
        if locate.clicked() {
            app.checkin.locating = true;
            simulate::resolve_location(ctx, app.tx.clone());
        }
    });
    ui.add_space(spacing::MEDIUM);

    // Observations
    ui.label(translate("checkin-observations"));
    ui.add(
        egui::TextEdit::multiline(&mut app.checkin.observations)
            .desired_rows(3)
            .desired_width(f32::INFINITY)
            .hint_text(translate("checkin-observations-hint")),
    );
    ui.add_space(spacing::MEDIUM);

    // Rating
    ui.label(translate("checkin-rating"));
    if let Some(rating) = star_rating(ui, app.checkin.rating) {
        app.checkin.rating = rating;
    }
    ui.add_space(spacing::MEDIUM);

    // Photo
    ui.label(translate("checkin-photo"));
    if let Some(err) = photo_field(ui, &mut app.checkin.photo) {
        app.toast(ToastKind::Error, err);
    }
    ui.add_space(spacing::LARGE);

    // Submit
    let submitting = app.checkin.submitting;
    let label = if submitting {
        translate("checkin-submit-busy")
    } else {
        translate("checkin-submit")
    };
    let btn = egui::Button::new(label).min_size(egui::vec2(ui.available_width(), 38.0));
    if ui.add_enabled(!submitting, btn).clicked() {
        submit(app, ctx);
    }
    ui.add_space(spacing::XLARGE);
}

fn submit(app: &mut EncontreiApp, ctx: &egui::Context) {
    let form = &app.checkin;
    if form.book_id.trim().is_empty() || form.location.trim().is_empty() {
        app.toast(ToastKind::Error, translate("checkin-missing-fields"));
        return;
    }
    if form.rating == 0 {
        app.toast(ToastKind::Error, translate("checkin-missing-rating"));
        return;
    }

    let receipt = CheckinReceipt {
        book_id: form.book_id.trim().to_string(),
        location: form.location.trim().to_string(),
        rating: form.rating,
        has_photo: form.photo.is_some(),
    };
    app.checkin.submitting = true;
    simulate::submit_checkin(ctx, app.tx.clone(), receipt);
}

fn draw_success_modal(app: &mut EncontreiApp, ctx: &egui::Context) {
    let Some(receipt) = app.checkin.receipt.clone() else {
        return;
    };
    let mut open = true;
    ui_helpers::modal_overlay(ctx, "checkin_modal", &mut open, |ui, open| {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("✓")
                    .size(40.0)
                    .color(ToastKind::Success.color()),
            );
            ui.add_space(spacing::SMALL);
            ui.label(
                RichText::new(translate("checkin-modal-title"))
                    .size(22.0)
                    .strong()
                    .color(Color32::from_rgb(225, 230, 240)),
            );
            ui.label(
                RichText::new(translate("checkin-modal-subtitle"))
                    .color(Color32::from_gray(170)),
            );
        });
        ui.add_space(spacing::LARGE);

        egui::Frame::none()
            .fill(Color32::from_rgb(40, 38, 32))
            .stroke(Stroke::new(1.0, Color32::from_gray(60)))
            .rounding(Rounding::same(8.0))
            .inner_margin(spacing::LARGE)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(RichText::new(translate("checkin-modal-book")).strong());
                    ui.label(&receipt.book_id);
                });
                ui.horizontal(|ui| {
                    ui.label(RichText::new(translate("checkin-modal-location")).strong());
                    ui.label(&receipt.location);
                });
                ui.horizontal(|ui| {
                    ui.label(RichText::new(translate("checkin-modal-rating")).strong());
                    ui.label(
                        RichText::new(rating_text(receipt.rating as f32))
                            .color(Color32::from_rgb(245, 185, 66)),
                    );
                });
                if receipt.has_photo {
                    ui.label(RichText::new(translate("checkin-modal-photo")).strong());
                }
            });

        ui.add_space(spacing::LARGE);
        ui.vertical_centered(|ui| {
            if ui.button(translate("modal-close")).clicked() {
                *open = false;
            }
        });
    });
    if !open {
        app.checkin.receipt = None;
    }
}
