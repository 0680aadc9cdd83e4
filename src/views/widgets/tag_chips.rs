use eframe::egui::{self, Color32, Key, Rounding, Stroke, TextEdit, Ui};

use crate::localization::translate;

/// Trimmed, case-insensitive insert. Returns true when the tag was added.
fn insert_tag(tags: &mut Vec<String>, value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return false;
    }
    let lowered = value.to_lowercase();
    if tags.iter().any(|t| t.to_lowercase() == lowered) {
        return false;
    }
    tags.push(value.to_string());
    true
}

/// Interest chips with an inline "type and press Enter" field. Chips are
/// removed by their ✕ button. Returns true when the list changed.
pub fn tag_chips(ui: &mut Ui, tags: &mut Vec<String>, draft: &mut String) -> bool {
    let mut changed = false;
    let mut remove: Option<usize> = None;

    ui.horizontal_wrapped(|ui| {
        for (i, tag) in tags.iter().enumerate() {
            egui::Frame::none()
                .fill(Color32::from_rgb(36, 48, 66))
                .stroke(Stroke::new(1.0, crate::views::ACCENT))
                .rounding(Rounding::same(12.0))
                .inner_margin(egui::Margin::symmetric(10.0, 4.0))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(tag);
                        if ui
                            .add(egui::Button::new("✕").small().frame(false))
                            .on_hover_cursor(egui::CursorIcon::PointingHand)
                            .clicked()
                        {
                            remove = Some(i);
                        }
                    });
                });
        }

        let resp = ui.add(
            TextEdit::singleline(draft)
                .hint_text(translate("profile-interests-hint"))
                .desired_width(200.0),
        );
        if resp.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
            if insert_tag(tags, draft) {
                changed = true;
            }
            draft.clear();
            resp.request_focus();
        }
    });

    if let Some(i) = remove {
        tags.remove(i);
        changed = true;
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_rejected() {
        let mut tags = vec![];
        assert!(!insert_tag(&mut tags, ""));
        assert!(!insert_tag(&mut tags, "   "));
        assert!(tags.is_empty());
    }

    #[test]
    fn duplicates_are_ignored_case_insensitively() {
        let mut tags = vec!["Poesia".to_string()];
        assert!(!insert_tag(&mut tags, "poesia"));
        assert!(!insert_tag(&mut tags, "  POESIA "));
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn new_tags_keep_their_typed_form() {
        let mut tags = vec![];
        assert!(insert_tag(&mut tags, "  Ficção científica "));
        assert_eq!(tags, vec!["Ficção científica".to_string()]);
    }
}
