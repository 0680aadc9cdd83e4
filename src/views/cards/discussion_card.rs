use eframe::egui::{self, Color32, RichText, Rounding, Stroke};

use crate::catalog::Discussion;
use crate::localization::{translate, translate_with};
use crate::ui_constants::{card, spacing};
use crate::views::tabs::TabLabel;

/// Full-width forum discussion card.
pub fn discussion_card(ui: &mut egui::Ui, d: &Discussion) {
    egui::Frame::none()
        .fill(Color32::from_rgb(36, 36, 36))
        .stroke(Stroke::new(1.0, Color32::from_rgb(64, 64, 64)))
        .rounding(Rounding::same(card::ROUNDING))
        .inner_margin(egui::Margin::symmetric(spacing::LARGE, spacing::MEDIUM + 4.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.horizontal(|ui| {
                egui::Frame::none()
                    .fill(Color32::from_rgb(36, 48, 66))
                    .rounding(Rounding::same(10.0))
                    .inner_margin(egui::Margin::symmetric(8.0, 2.0))
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new(format!(
                                "{} {}",
                                d.category.icon(),
                                translate(d.category.loc_key())
                            ))
                            .small(),
                        );
                    });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(d.posted_label)
                            .small()
                            .color(Color32::from_gray(150)),
                    );
                });
            });

            ui.add_space(spacing::SMALL);
            ui.label(
                RichText::new(d.title)
                    .heading()
                    .color(Color32::from_rgb(230, 230, 230)),
            );
            ui.add_space(spacing::SMALL);
            ui.label(RichText::new(d.excerpt).color(Color32::from_gray(195)));
            ui.add_space(spacing::MEDIUM);

            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(d.author)
                        .small()
                        .color(Color32::from_gray(170)),
                );
                ui.separator();
                ui.label(
                    RichText::new(translate_with(
                        "forum-replies",
                        &[("count", d.replies.to_string())],
                    ))
                    .small()
                    .color(Color32::from_gray(150)),
                );
            });
        });
}
