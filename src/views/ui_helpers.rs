use std::time::{Duration, Instant};

use eframe::egui::{self, Align2, Color32, Id, RichText, Rounding, Sense, Stroke};

use crate::types::ToastKind;
use crate::ui_constants::{spacing, TOAST_TTL_MS};

/// Transient feedback message, stacked top-right like the web front end's
/// slide-in notices.
pub struct Toast {
    pub text: String,
    pub kind: ToastKind,
    pub born: Instant,
}

impl Toast {
    pub fn new(text: String, kind: ToastKind) -> Self {
        Self {
            text,
            kind,
            born: Instant::now(),
        }
    }
}

/// Draws and expires the toast stack. Keeps repainting while any toast is
/// alive so they disappear without user input.
pub fn draw_toasts(ctx: &egui::Context, toasts: &mut Vec<Toast>) {
    let ttl = Duration::from_millis(TOAST_TTL_MS);
    toasts.retain(|t| t.born.elapsed() < ttl);
    if toasts.is_empty() {
        return;
    }

    egui::Area::new(Id::new("toast_stack"))
        .anchor(Align2::RIGHT_TOP, egui::vec2(-spacing::LARGE, 72.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            for toast in toasts.iter() {
                egui::Frame::none()
                    .fill(toast.kind.color())
                    .rounding(Rounding::same(8.0))
                    .inner_margin(egui::Margin::symmetric(16.0, 10.0))
                    .show(ui, |ui| {
                        ui.label(RichText::new(&toast.text).color(Color32::WHITE).strong());
                    });
                ui.add_space(spacing::MEDIUM);
            }
        });

    ctx.request_repaint_after(Duration::from_millis(200));
}

/// Dimmed full-screen overlay with a centered plaque. The content closure
/// gets the `open` flag to close itself; clicking the dim area outside the
/// plaque closes too.
pub fn modal_overlay(
    ctx: &egui::Context,
    id: &str,
    open: &mut bool,
    content: impl FnOnce(&mut egui::Ui, &mut bool),
) {
    if !*open {
        return;
    }

    let screen = ctx.screen_rect();
    egui::Area::new(Id::new(id))
        .order(egui::Order::Foreground)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            // Swallow clicks on the dim layer so the page behind stays inert.
            let backdrop = ui.allocate_rect(screen, Sense::click());
            ui.painter()
                .rect_filled(screen, Rounding::ZERO, Color32::from_black_alpha(160));

            let width = 460.0_f32.min(screen.width() - 2.0 * spacing::XLARGE);
            let plaque_rect =
                egui::Rect::from_center_size(screen.center(), egui::vec2(width, 440.0));
            let frame_rect = ui
                .allocate_ui_at_rect(plaque_rect, |ui| {
                    egui::Frame::none()
                        .fill(Color32::from_rgb(30, 32, 36))
                        .stroke(Stroke::new(1.0, Color32::from_gray(70)))
                        .rounding(Rounding::same(16.0))
                        .inner_margin(spacing::XLARGE)
                        .show(ui, |ui| content(ui, &mut *open))
                        .response
                        .rect
                })
                .inner;

            if backdrop.clicked() {
                if let Some(pos) = backdrop.interact_pointer_pos() {
                    if !frame_rect.contains(pos) {
                        *open = false;
                    }
                }
            }
        });
}
