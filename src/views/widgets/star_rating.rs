use eframe::egui::{self, Align2, Color32, FontId, Sense, Ui, Vec2};

const STAR_COUNT: usize = 5;
const STAR_SIZE: f32 = 28.0;

const FILLED: Color32 = Color32::from_rgb(245, 185, 66);
const PREVIEW: Color32 = Color32::from_rgb(255, 210, 110);
const EMPTY: Color32 = Color32::from_gray(90);

/// Five-star rating input. Hovering previews the value, clicking commits
/// it; when the pointer leaves, the committed value shows again.
/// Returns the new rating when clicked.
pub fn star_rating(ui: &mut Ui, current: u8) -> Option<u8> {
    let size = Vec2::new(STAR_SIZE * STAR_COUNT as f32, STAR_SIZE);
    let (rect, resp) = ui.allocate_exact_size(size, Sense::click());
    let resp = resp.on_hover_cursor(egui::CursorIcon::PointingHand);

    // Nearest star under the pointer, by X, like the screenshot marker strip.
    let hovered_star = resp.hover_pos().map(|p| {
        let rel = (p.x - rect.left()).clamp(0.0, size.x);
        ((rel / STAR_SIZE).floor() as usize).min(STAR_COUNT - 1) as u8 + 1
    });

    let shown = hovered_star.unwrap_or(current);
    let painter = ui.painter_at(rect);
    for i in 0..STAR_COUNT {
        let color = if (i as u8) < shown {
            if hovered_star.is_some() {
                PREVIEW
            } else {
                FILLED
            }
        } else {
            EMPTY
        };
        let center = egui::pos2(rect.left() + (i as f32 + 0.5) * STAR_SIZE, rect.center().y);
        painter.text(
            center,
            Align2::CENTER_CENTER,
            "★",
            FontId::proportional(STAR_SIZE - 4.0),
            color,
        );
    }

    if resp.clicked() {
        hovered_star
    } else {
        None
    }
}

/// Read-only "★★★★☆" strip for displaying a stored rating.
pub fn rating_text(rating: f32) -> String {
    let filled = (rating.round().clamp(0.0, 5.0)) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(STAR_COUNT - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_text_fills_and_pads() {
        assert_eq!(rating_text(0.0), "☆☆☆☆☆");
        assert_eq!(rating_text(3.0), "★★★☆☆");
        assert_eq!(rating_text(5.0), "★★★★★");
        // Rounds like the card display does.
        assert_eq!(rating_text(4.6), "★★★★★");
        assert_eq!(rating_text(4.4), "★★★★☆");
        // Out-of-range input is clamped, not panicked on.
        assert_eq!(rating_text(9.0), "★★★★★");
    }
}
