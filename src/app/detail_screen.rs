use std::time::{Duration, Instant};

use eframe::egui::{self, Color32, RichText, Rounding, Stroke};

use super::EncontreiApp;
use crate::app::simulate::sim_duration;
use crate::app::state::{ButtonPhase, Page, TimedButton};
use crate::catalog::{self, Partner};
use crate::localization::translate;
use crate::types::ToastKind;
use crate::ui_constants::{card, latency, revert, spacing};
use crate::views::tabs::TabLabel;
use crate::views::widgets::gallery_view;

const SIDEBAR_WIDTH: f32 = 320.0;

pub(super) fn update(app: &mut EncontreiApp, ctx: &egui::Context) {
    let partner = app
        .detail
        .as_ref()
        .and_then(|d| catalog::partner(d.partner_id));
    let Some(partner) = partner else {
        // Nothing sensible to show; fall back to the directory.
        app.detail = None;
        app.page = Page::Directory;
        return;
    };

    let mut toast: Option<(ToastKind, String)> = None;

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add_space(spacing::MEDIUM);
                ui.horizontal(|ui| {
                    if ui
                        .add(egui::Button::new(translate("detail-back")).frame(false))
                        .clicked()
                    {
                        app.page = Page::Directory;
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button(translate("detail-share")).clicked() {
                            let url = format!("https://encontrei.app/parceiros/{}", partner.id);
                            ui.output_mut(|o| o.copied_text = url);
                            toast = Some((ToastKind::Success, translate("detail-link-copied")));
                        }
                    });
                });
                ui.add_space(spacing::MEDIUM);

                ui.label(
                    RichText::new(partner.name)
                        .size(26.0)
                        .strong()
                        .color(Color32::from_rgb(235, 235, 235)),
                );
                ui.label(
                    RichText::new(format!(
                        "{} {} · {}",
                        partner.kind.icon(),
                        translate(partner.kind.loc_key()),
                        partner.location
                    ))
                    .color(Color32::from_gray(170)),
                );
                ui.add_space(spacing::LARGE);

                let sidebar_fits = ui.available_width() > SIDEBAR_WIDTH + 420.0;
                if sidebar_fits {
                    ui.horizontal_top(|ui| {
                        let main_w = ui.available_width() - SIDEBAR_WIDTH - spacing::LARGE;
                        ui.vertical(|ui| {
                            ui.set_width(main_w);
                            main_column(app, ui, partner);
                        });
                        ui.add_space(spacing::LARGE);
                        ui.vertical(|ui| {
                            ui.set_width(SIDEBAR_WIDTH);
                            sidebar_column(app, ui, partner);
                        });
                    });
                } else {
                    // Narrow window: stack the sidebar below the content.
                    main_column(app, ui, partner);
                    ui.add_space(spacing::LARGE);
                    sidebar_column(app, ui, partner);
                }
            });
    });

    if let Some((kind, text)) = toast {
        app.toast(kind, text);
    }
}

fn main_column(app: &mut EncontreiApp, ui: &mut egui::Ui, partner: &Partner) {
    let Some(detail) = app.detail.as_mut() else {
        return;
    };
    gallery_view(ui, &mut detail.gallery, partner, &mut app.slides);

    ui.add_space(spacing::LARGE);
    ui.heading(translate("detail-about"));
    ui.add_space(spacing::SMALL);
    ui.label(RichText::new(partner.description).color(Color32::from_gray(200)));

    if !partner.tags.is_empty() {
        ui.add_space(spacing::MEDIUM);
        ui.horizontal_wrapped(|ui| {
            for tag in partner.tags {
                egui::Frame::none()
                    .fill(Color32::from_rgb(36, 48, 66))
                    .rounding(Rounding::same(10.0))
                    .inner_margin(egui::Margin::symmetric(8.0, 2.0))
                    .show(ui, |ui| {
                        ui.label(RichText::new(*tag).small());
                    });
            }
        });
    }
}

fn sidebar_column(app: &mut EncontreiApp, ui: &mut egui::Ui, partner: &Partner) {
    let Some(detail) = app.detail.as_mut() else {
        return;
    };

    // Quick check-in widget
    egui::Frame::none()
        .fill(Color32::from_rgb(36, 36, 36))
        .stroke(Stroke::new(1.0, Color32::from_rgb(64, 64, 64)))
        .rounding(Rounding::same(card::ROUNDING))
        .inner_margin(spacing::LARGE)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(translate("detail-checkin-title")).strong());
            ui.add_space(spacing::SMALL);
            ui.label(
                RichText::new(translate("detail-checkin-hint"))
                    .small()
                    .color(Color32::from_gray(170)),
            );
            ui.add_space(spacing::MEDIUM);
            if timed_button(
                ui,
                &mut detail.checkin_widget,
                "detail-checkin-cta",
                "detail-checkin-busy",
                "detail-checkin-done",
            ) {
                log::info!("quick check-in at partner {}", partner.id);
                detail.checkin_widget.trigger(
                    Instant::now(),
                    sim_duration(latency::CHECKIN_WIDGET_MS),
                    Duration::from_millis(revert::CHECKIN_WIDGET_MS),
                );
            }
        });

    // Upcoming events
    if !partner.events.is_empty() {
        ui.add_space(spacing::LARGE);
        ui.label(RichText::new(translate("detail-events-title")).strong());
        ui.add_space(spacing::SMALL);
        for event in partner.events {
            egui::Frame::none()
                .fill(Color32::from_rgb(32, 32, 32))
                .stroke(Stroke::new(1.0, Color32::from_rgb(58, 58, 58)))
                .rounding(Rounding::same(card::ROUNDING))
                .inner_margin(spacing::MEDIUM + 4.0)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new(event.title).color(Color32::from_gray(225)));
                    ui.label(
                        RichText::new(event.date_label)
                            .small()
                            .color(Color32::from_gray(160)),
                    );
                    ui.add_space(spacing::SMALL);
                    let button = detail.reservations.entry(event.id).or_default();
                    if timed_button(
                        ui,
                        button,
                        "detail-reserve-cta",
                        "detail-reserve-busy",
                        "detail-reserve-done",
                    ) {
                        log::info!("reservation requested: {}", event.title);
                        button.trigger(
                            Instant::now(),
                            sim_duration(latency::RESERVE_MS),
                            Duration::from_millis(revert::RESERVE_MS),
                        );
                    }
                });
            ui.add_space(spacing::MEDIUM);
        }
    }
}

/// Full-width button whose label follows the simulated request phase.
/// Returns true on a fresh click while idle.
fn timed_button(
    ui: &mut egui::Ui,
    button: &mut TimedButton,
    idle_key: &str,
    busy_key: &str,
    done_key: &str,
) -> bool {
    let (key, enabled) = match button.phase {
        ButtonPhase::Idle => (idle_key, true),
        ButtonPhase::Busy { .. } => (busy_key, false),
        ButtonPhase::Done { .. } => (done_key, false),
    };
    let widget = egui::Button::new(translate(key))
        .min_size(egui::vec2(ui.available_width(), 32.0))
        .rounding(Rounding::same(card::META_ROUNDING));
    ui.add_enabled(enabled, widget).clicked()
}
