use eframe::egui::{self, Stroke, Ui};
use strum::IntoEnumIterator;

use crate::localization::translate;

/// Implemented by the enums that back a tab row.
pub trait TabLabel {
    fn loc_key(&self) -> &'static str;
    fn icon(&self) -> &'static str;
}

/// Horizontal filter tabs with a leading "all" tab mapped to `None`.
/// Returns true when the selection changed this frame.
pub fn filter_tabs<T>(ui: &mut Ui, current: &mut Option<T>) -> bool
where
    T: TabLabel + IntoEnumIterator + PartialEq + Copy,
{
    let mut selection = *current;
    ui.horizontal_wrapped(|ui| {
        if tab_button(ui, current.is_none(), &translate("tab-all")) {
            selection = None;
        }
        for value in T::iter() {
            let label = format!("{} {}", value.icon(), translate(value.loc_key()));
            if tab_button(ui, *current == Some(value), &label) {
                selection = Some(value);
            }
        }
    });
    let changed = selection != *current;
    *current = selection;
    changed
}

fn tab_button(ui: &mut Ui, active: bool, label: &str) -> bool {
    let resp = ui.selectable_label(active, label);
    if active {
        let r = resp.rect;
        ui.painter().line_segment(
            [
                r.left_bottom() + egui::vec2(2.0, 2.0),
                r.right_bottom() + egui::vec2(-2.0, 2.0),
            ],
            Stroke::new(2.0, super::ACCENT),
        );
    }
    resp.clicked()
}
