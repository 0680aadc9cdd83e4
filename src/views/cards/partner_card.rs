use eframe::egui::{self, Align2, Color32, FontId, RichText, Rounding, Sense, Stroke};

use crate::catalog::Partner;
use crate::localization::translate;
use crate::types::PartnerKind;
use crate::ui_constants::{card, spacing};
use crate::views::tabs::TabLabel;

/// Fixed-width directory card. Strictly constrained to `width` so rows
/// form a proper grid. Returns true when the details CTA was clicked.
pub fn partner_card(ui: &mut egui::Ui, p: &Partner, width: f32, opening: bool) -> bool {
    ui.set_min_width(width);
    ui.set_max_width(width);

    let mut clicked = false;
    egui::Frame::none()
        .fill(Color32::from_rgb(36, 36, 36))
        .stroke(Stroke::new(1.0, Color32::from_rgb(64, 64, 64)))
        .rounding(Rounding::same(card::ROUNDING))
        .inner_margin(egui::Margin::symmetric(card::INNER_MARGIN, card::INNER_MARGIN))
        .show(ui, |ui| {
            let inner_w = width - 2.0 * card::INNER_MARGIN;
            ui.set_width(inner_w);

            // Kind-tinted banner standing in for the cover photo
            let (banner, _) =
                ui.allocate_exact_size(egui::vec2(inner_w, 96.0), Sense::hover());
            let painter = ui.painter_at(banner);
            painter.rect_filled(banner, Rounding::same(card::ROUNDING), kind_tint(p.kind));
            painter.text(
                banner.center(),
                Align2::CENTER_CENTER,
                p.kind.icon(),
                FontId::proportional(40.0),
                Color32::from_white_alpha(210),
            );

            ui.add_space(spacing::MEDIUM);
            ui.label(
                RichText::new(p.name)
                    .heading()
                    .color(Color32::from_rgb(230, 230, 230)),
            );
            ui.label(
                RichText::new(p.location)
                    .small()
                    .color(Color32::from_gray(180)),
            );
            ui.add_space(spacing::SMALL);
            ui.label(RichText::new(p.description).color(Color32::from_gray(200)));
            ui.add_space(spacing::MEDIUM);

            // Meta plaque: rating + tags on a darker background
            egui::Frame::none()
                .fill(Color32::from_rgba_premultiplied(28, 28, 28, 180))
                .rounding(Rounding::same(card::META_ROUNDING))
                .inner_margin(egui::Margin::symmetric(8.0, 6.0))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(format!("★ {:.1}", p.rating))
                                .color(Color32::from_rgb(245, 185, 66)),
                        );
                        if !p.tags.is_empty() {
                            ui.separator();
                            ui.label(
                                RichText::new(p.tags.join(" · "))
                                    .small()
                                    .color(Color32::from_gray(170)),
                            );
                        }
                    });
                });

            ui.add_space(spacing::MEDIUM);
            let label = if opening {
                translate("directory-card-loading")
            } else {
                translate("directory-card-cta")
            };
            let btn = egui::Button::new(label)
                .min_size(egui::vec2(inner_w, 32.0))
                .rounding(Rounding::same(card::META_ROUNDING));
            if ui.add_enabled(!opening, btn).clicked() {
                clicked = true;
            }
        });

    clicked
}

fn kind_tint(kind: PartnerKind) -> Color32 {
    match kind {
        PartnerKind::Cafe => Color32::from_rgb(94, 63, 45),
        PartnerKind::Livraria => Color32::from_rgb(45, 74, 94),
        PartnerKind::Biblioteca => Color32::from_rgb(52, 78, 52),
        PartnerKind::EspacoCultural => Color32::from_rgb(84, 52, 84),
    }
}
