use std::collections::HashMap;

use eframe::egui::{
    self, Align2, Color32, FontId, Key, Rect, RichText, Rounding, Sense, Stroke, TextureHandle,
    TextureOptions, Ui,
};

use crate::catalog::Partner;
use crate::gallery::{GalleryController, NavKey};
use crate::localization::translate;
use crate::ui_constants::{gallery as g, spacing};

/// Lazily generated placeholder slides, keyed by (partner, slide).
pub type SlideCache = HashMap<(u32, usize), TextureHandle>;

/// The rendering boundary of the gallery controller: draws the current
/// slide, prev/next overlay buttons and the indicator dots, and feeds
/// pointer drags and arrow keys back into the controller. All inputs go
/// through the same navigation API; nothing synthesizes clicks.
pub fn gallery_view(
    ui: &mut Ui,
    gallery: &mut GalleryController,
    partner: &Partner,
    slides: &mut SlideCache,
) {
    let Some(current) = gallery.current_index() else {
        ui.label(RichText::new(translate("gallery-empty")).color(Color32::from_gray(150)));
        return;
    };

    let width = ui.available_width();
    let height = width / g::SLIDE_ASPECT;
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), Sense::hover());

    // Current slide
    let tex = slide_texture(ui.ctx(), slides, partner.id, current);
    let uv = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
    let painter = ui.painter_at(rect);
    painter.image(tex.id(), rect, uv, Color32::WHITE);

    // Slide counter badge, bottom-right
    let badge = Rect::from_min_max(
        egui::pos2(rect.max.x - spacing::MEDIUM - 54.0, rect.max.y - spacing::MEDIUM - 20.0),
        egui::pos2(rect.max.x - spacing::MEDIUM, rect.max.y - spacing::MEDIUM),
    );
    painter.rect_filled(
        badge,
        Rounding::same(6.0),
        Color32::from_rgba_premultiplied(0, 0, 0, 140),
    );
    painter.text(
        badge.center(),
        Align2::CENTER_CENTER,
        format!("{} / {}", current + 1, gallery.slide_count()),
        FontId::proportional(12.0),
        Color32::from_gray(220),
    );

    // Swipe: raw presses and releases, so a drag that leaves the gallery
    // still finishes its gesture. Taps land below the threshold and are
    // discarded by the controller, which keeps the overlay buttons safe.
    let (pressed_at, released_at) = ui.input(|i| {
        let pos = i.pointer.interact_pos();
        (
            if i.pointer.primary_pressed() { pos } else { None },
            if i.pointer.primary_released() { pos } else { None },
        )
    });
    if let Some(pos) = pressed_at {
        if rect.contains(pos) {
            gallery.gesture_start(pos.x);
        }
    }
    if let Some(pos) = released_at {
        // A release without a start inside the gallery is a no-op.
        gallery.gesture_end(pos.x);
    }

    // Prev/next overlay buttons
    let btn = g::NAV_BUTTON_SIZE;
    let prev_center = egui::pos2(rect.left() + spacing::LARGE + btn / 2.0, rect.center().y);
    let next_center = egui::pos2(rect.right() - spacing::LARGE - btn / 2.0, rect.center().y);
    if nav_button(ui, Rect::from_center_size(prev_center, egui::vec2(btn, btn)), "‹", ("gallery_prev", partner.id)) {
        gallery.previous();
    }
    if nav_button(ui, Rect::from_center_size(next_center, egui::vec2(btn, btn)), "›", ("gallery_next", partner.id)) {
        gallery.next();
    }

    // Indicator dots
    ui.add_space(spacing::MEDIUM);
    let n = gallery.slide_count();
    let dot = g::INDICATOR_SIZE;
    let gap = spacing::MEDIUM;
    let total_w = n as f32 * dot + (n.saturating_sub(1)) as f32 * gap;
    let (strip, _) = ui.allocate_exact_size(egui::vec2(width, dot), Sense::hover());
    let mut x = strip.center().x - total_w / 2.0 + dot / 2.0;
    for i in 0..n {
        let center = egui::pos2(x, strip.center().y);
        let hit = Rect::from_center_size(center, egui::vec2(dot, dot)).expand(2.0);
        let resp = ui
            .interact(hit, ui.id().with(("gallery_dot", partner.id, i)), Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand);
        let color = if i == current {
            Color32::from_gray(230)
        } else if resp.hovered() {
            Color32::from_gray(160)
        } else {
            Color32::from_gray(110)
        };
        ui.painter().circle_filled(center, dot / 2.0, color);
        if resp.clicked() {
            // Dots are generated from the slide count, so the jump can't be
            // out of range; log it if that ever stops holding.
            if let Err(e) = gallery.go_to(i) {
                log::warn!("indicator jump rejected: {e}");
            }
        }
        x += dot + gap;
    }

    // Arrow keys, only while this gallery's page is the focused one and no
    // text field wants the keyboard.
    if gallery.has_focus() && !ui.ctx().wants_keyboard_input() {
        let key = ui.input(|i| {
            if i.key_pressed(Key::ArrowLeft) {
                Some(NavKey::ArrowLeft)
            } else if i.key_pressed(Key::ArrowRight) {
                Some(NavKey::ArrowRight)
            } else {
                None
            }
        });
        if let Some(key) = key {
            gallery.handle_key(key);
        }
    }
}

fn nav_button(ui: &mut Ui, rect: Rect, glyph: &str, id: (&'static str, u32)) -> bool {
    let resp = ui
        .interact(rect, ui.id().with(id), Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand);
    let bg = if resp.hovered() {
        Color32::from_rgba_premultiplied(0, 0, 0, 180)
    } else {
        Color32::from_rgba_premultiplied(0, 0, 0, 120)
    };
    let painter = ui.painter();
    painter.circle_filled(rect.center(), rect.width() / 2.0, bg);
    painter.circle_stroke(rect.center(), rect.width() / 2.0, Stroke::new(1.0, Color32::from_gray(90)));
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        glyph,
        FontId::proportional(22.0),
        Color32::from_gray(230),
    );
    resp.clicked()
}

fn slide_texture(
    ctx: &egui::Context,
    slides: &mut SlideCache,
    partner_id: u32,
    idx: usize,
) -> TextureHandle {
    slides
        .entry((partner_id, idx))
        .or_insert_with(|| {
            ctx.load_texture(
                format!("slide:{partner_id}:{idx}"),
                placeholder_slide(partner_id, idx),
                TextureOptions::LINEAR,
            )
        })
        .clone()
}

/// Deterministic two-tone gradient standing in for a partner photo until
/// real imagery lands.
fn placeholder_slide(partner_id: u32, idx: usize) -> egui::ColorImage {
    const W: usize = 480;
    const H: usize = 270;
    let top = tone(partner_id.wrapping_mul(31).wrapping_add(idx as u32 * 7));
    let bottom = tone(partner_id.wrapping_mul(113).wrapping_add(idx as u32 * 29 + 5));
    let mut pixels = Vec::with_capacity(W * H);
    for y in 0..H {
        let t = y as f32 / (H - 1) as f32;
        let c = lerp_color(top, bottom, t);
        for _ in 0..W {
            pixels.push(c);
        }
    }
    egui::ColorImage {
        size: [W, H],
        pixels,
    }
}

fn tone(seed: u32) -> Color32 {
    let h = seed.wrapping_mul(2654435761);
    Color32::from_rgb(
        60 + (h & 0x3F) as u8,
        60 + ((h >> 8) & 0x3F) as u8,
        70 + ((h >> 16) & 0x3F) as u8,
    )
}

fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t) as u8;
    Color32::from_rgb(mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}
