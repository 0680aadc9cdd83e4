use eframe::egui::{self, Color32, RichText, Rounding, Stroke};
use strum::IntoEnumIterator;

use super::EncontreiApp;
use crate::app::simulate;
use crate::app::state::PostReceipt;
use crate::catalog;
use crate::localization::translate;
use crate::types::{ForumCategory, ToastKind};
use crate::ui_constants::spacing;
use crate::views::cards::discussion_card;
use crate::views::tabs::{filter_tabs, TabLabel};
use crate::views::ui_helpers;

const FORM_WIDTH: f32 = 560.0;

pub(super) fn update(app: &mut EncontreiApp, ctx: &egui::Context) {
    if app.forum.composing {
        composer(app, ctx);
    } else {
        discussion_list(app, ctx);
    }
    draw_publish_modal(app, ctx);
}

fn discussion_list(app: &mut EncontreiApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add_space(spacing::MEDIUM);
                ui.horizontal(|ui| {
                    ui.heading(translate("forum-title"));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button(translate("forum-new-discussion")).clicked() {
                            app.forum.composing = true;
                        }
                    });
                });
                ui.add_space(spacing::MEDIUM);

                let w = ui.available_width();
                ui.add_sized(
                    [w, 0.0],
                    egui::TextEdit::singleline(&mut app.forum.query)
                        .hint_text(translate("forum-search-placeholder")),
                );
                ui.add_space(spacing::SMALL);
                filter_tabs(ui, &mut app.forum.category_filter);
                ui.add_space(spacing::LARGE);

                let visible: Vec<&catalog::Discussion> = catalog::discussions()
                    .iter()
                    .filter(|d| {
                        catalog::discussion_matches(
                            d,
                            app.forum.category_filter,
                            &app.forum.query,
                        )
                    })
                    .collect();

                if visible.is_empty() {
                    ui.add_space(spacing::XLARGE * 2.0);
                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new(translate("forum-no-results"))
                                .size(20.0)
                                .color(Color32::from_gray(180)),
                        );
                        ui.label(
                            RichText::new(translate("forum-no-results-hint"))
                                .color(Color32::from_gray(140)),
                        );
                    });
                    return;
                }

                for d in visible {
                    discussion_card(ui, d);
                    ui.add_space(spacing::MEDIUM);
                }
            });
    });
}

fn composer(app: &mut EncontreiApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(FORM_WIDTH);
                    ui.add_space(spacing::MEDIUM);
                    ui.horizontal(|ui| {
                        if ui
                            .add(egui::Button::new(translate("composer-back")).frame(false))
                            .clicked()
                        {
                            app.forum.composing = false;
                        }
                    });
                    ui.add_space(spacing::SMALL);
                    ui.heading(translate("composer-title"));
                    ui.add_space(spacing::LARGE);

                    ui.label(translate("composer-field-title"));
                    ui.add(
                        egui::TextEdit::singleline(&mut app.composer.title)
                            .desired_width(f32::INFINITY)
                            .hint_text(translate("composer-title-hint")),
                    );
                    ui.add_space(spacing::MEDIUM);

                    ui.label(translate("composer-field-category"));
                    let selected = app
                        .composer
                        .category
                        .map(|c| translate(c.loc_key()))
                        .unwrap_or_else(|| translate("composer-category-hint"));
                    egui::ComboBox::from_id_source("composer_category")
                        .selected_text(selected)
                        .width(260.0)
                        .show_ui(ui, |ui| {
                            for c in ForumCategory::iter() {
                                ui.selectable_value(
                                    &mut app.composer.category,
                                    Some(c),
                                    translate(c.loc_key()),
                                );
                            }
                        });
                    ui.add_space(spacing::MEDIUM);

                    ui.label(translate("composer-field-content"));
                    ui.add(
                        egui::TextEdit::multiline(&mut app.composer.content)
                            .desired_rows(8)
                            .desired_width(f32::INFINITY)
                            .hint_text(translate("composer-content-hint")),
                    );
                    ui.add_space(spacing::LARGE);

                    let publishing = app.composer.publishing;
                    let label = if publishing {
                        translate("composer-publish-busy")
                    } else {
                        translate("composer-publish")
                    };
                    let btn =
                        egui::Button::new(label).min_size(egui::vec2(ui.available_width(), 38.0));
                    if ui.add_enabled(!publishing, btn).clicked() {
                        publish(app, ctx);
                    }
                    ui.add_space(spacing::XLARGE);
                });
            });
    });
}

fn publish(app: &mut EncontreiApp, ctx: &egui::Context) {
    let form = &app.composer;
    let (title, content) = (form.title.trim(), form.content.trim());
    let Some(category) = form.category else {
        app.toast(ToastKind::Error, translate("composer-missing-fields"));
        return;
    };
    if title.is_empty() || content.is_empty() {
        app.toast(ToastKind::Error, translate("composer-missing-fields"));
        return;
    }

    let receipt = PostReceipt {
        title: title.to_string(),
        category,
        content: content.to_string(),
    };
    app.composer.publishing = true;
    simulate::publish_post(ctx, app.tx.clone(), receipt);
}

fn draw_publish_modal(app: &mut EncontreiApp, ctx: &egui::Context) {
    let Some(receipt) = app.composer.receipt.clone() else {
        return;
    };
    let mut open = true;
    let mut go_to_forum = false;

    ui_helpers::modal_overlay(ctx, "composer_modal", &mut open, |ui, open| {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("✓")
                    .size(40.0)
                    .color(ToastKind::Success.color()),
            );
            ui.add_space(spacing::SMALL);
            ui.label(
                RichText::new(translate("composer-modal-title"))
                    .size(22.0)
                    .strong()
                    .color(Color32::from_rgb(225, 230, 240)),
            );
            ui.label(
                RichText::new(translate("composer-modal-subtitle"))
                    .color(Color32::from_gray(170)),
            );
        });
        ui.add_space(spacing::LARGE);

        let mut preview: String = receipt.content.chars().take(100).collect();
        if receipt.content.chars().count() > 100 {
            preview.push_str("...");
        }
        egui::Frame::none()
            .fill(Color32::from_rgb(40, 38, 32))
            .stroke(Stroke::new(1.0, Color32::from_gray(60)))
            .rounding(Rounding::same(8.0))
            .inner_margin(spacing::LARGE)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(RichText::new(translate("composer-modal-field-title")).strong());
                    ui.label(&receipt.title);
                });
                ui.horizontal(|ui| {
                    ui.label(RichText::new(translate("composer-modal-field-category")).strong());
                    ui.label(translate(receipt.category.loc_key()));
                });
                ui.horizontal_wrapped(|ui| {
                    ui.label(RichText::new(translate("composer-modal-field-content")).strong());
                    ui.label(preview);
                });
            });

        ui.add_space(spacing::LARGE);
        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                if ui.button(translate("composer-view-forum")).clicked() {
                    go_to_forum = true;
                    *open = false;
                }
                if ui.button(translate("composer-create-another")).clicked() {
                    *open = false;
                }
            });
        });
    });

    if !open {
        app.composer.receipt = None;
        if go_to_forum {
            app.forum.composing = false;
        }
    }
}
