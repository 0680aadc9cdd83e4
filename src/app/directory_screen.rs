use std::time::Instant;

use eframe::egui::{self, Color32, RichText};

use super::EncontreiApp;
use crate::app::simulate::sim_duration;
use crate::catalog;
use crate::localization::translate;
use crate::ui_constants::{latency, spacing, CARD_GAP, CARD_WIDTH};
use crate::views::cards::partner_card;
use crate::views::tabs::filter_tabs;

pub(super) fn update(app: &mut EncontreiApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add_space(spacing::MEDIUM);
                ui.heading(translate("directory-title"));
                ui.add_space(spacing::MEDIUM);

                let w = ui.available_width();
                ui.add_sized(
                    [w, 0.0],
                    egui::TextEdit::singleline(&mut app.directory.query)
                        .hint_text(translate("directory-search-placeholder")),
                );
                ui.add_space(spacing::SMALL);
                filter_tabs(ui, &mut app.directory.kind_filter);
                ui.add_space(spacing::LARGE);

                let visible: Vec<&catalog::Partner> = catalog::partners()
                    .iter()
                    .filter(|p| {
                        catalog::partner_matches(p, app.directory.kind_filter, &app.directory.query)
                    })
                    .collect();

                if visible.is_empty() {
                    ui.add_space(spacing::XLARGE * 2.0);
                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new(translate("directory-no-results"))
                                .size(20.0)
                                .color(Color32::from_gray(180)),
                        );
                        ui.label(
                            RichText::new(translate("directory-no-results-hint"))
                                .color(Color32::from_gray(140)),
                        );
                    });
                    return;
                }

                // Columns from the available width, centered rows.
                let avail_w = ui.available_width().floor();
                let mut cols = ((avail_w + CARD_GAP) / (CARD_WIDTH + CARD_GAP)).floor() as usize;
                if cols == 0 {
                    cols = 1;
                }
                let row_w = cols as f32 * CARD_WIDTH + (cols - 1) as f32 * CARD_GAP;
                let left_pad = ((avail_w - row_w) / 2.0).max(0.0);

                let opening_id = app.directory.opening.map(|(id, _)| id);
                let mut clicked: Option<u32> = None;
                for row in visible.chunks(cols) {
                    ui.horizontal(|ui| {
                        ui.add_space(left_pad);
                        for p in row {
                            ui.vertical(|ui| {
                                if partner_card(ui, p, CARD_WIDTH, opening_id == Some(p.id)) {
                                    clicked = Some(p.id);
                                }
                            });
                            ui.add_space(CARD_GAP);
                        }
                    });
                    ui.add_space(CARD_GAP);
                }

                if let Some(id) = clicked {
                    if app.directory.opening.is_none() {
                        log::info!("opening partner {id}");
                        let delay = sim_duration(latency::OPEN_DETAIL_MS);
                        app.directory.opening = Some((id, Instant::now() + delay));
                        ui.ctx().request_repaint_after(delay);
                    }
                }
            });
    });
}
