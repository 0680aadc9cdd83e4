use std::path::{Path, PathBuf};

use eframe::egui::{self, Color32, RichText, Rounding, Sense, Stroke, TextureHandle, TextureOptions, Ui, Vec2};
use thiserror::Error;

use crate::localization::translate;
use crate::ui_constants::spacing;

/// A decoded photo ready to draw, plus the name shown next to it.
pub struct PhotoAttachment {
    pub file_name: String,
    pub texture: TextureHandle,
}

#[derive(Debug, Error)]
pub enum PhotoError {
    #[error("not a decodable image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Decode an image file into a texture the UI can draw.
pub fn load_photo(ctx: &egui::Context, path: &Path) -> Result<PhotoAttachment, PhotoError> {
    let rgba = image::open(path)?.to_rgba8();
    let (w, h) = rgba.dimensions();
    let color = egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], rgba.as_raw());
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "foto".to_string());
    let texture = ctx.load_texture(format!("photo:{file_name}"), color, TextureOptions::LINEAR);
    Ok(PhotoAttachment { file_name, texture })
}

/// First file dropped onto the window this frame, if any.
pub fn take_dropped_file(ctx: &egui::Context) -> Option<PathBuf> {
    ctx.input(|i| i.raw.dropped_files.iter().find_map(|f| f.path.clone()))
}

/// Photo attachment area: a drop-zone-styled browse button while empty, a
/// preview with a remove button once a photo is attached. Returns a
/// localized error message when a picked file can't be decoded.
pub fn photo_field(ui: &mut Ui, attachment: &mut Option<PhotoAttachment>) -> Option<String> {
    let mut error = None;

    match attachment {
        Some(photo) => {
            let tex_size = photo.texture.size_vec2();
            let h = 140.0_f32;
            let w = (tex_size.x / tex_size.y * h).min(ui.available_width());
            let (rect, _) = ui.allocate_exact_size(Vec2::new(w, h), Sense::hover());
            let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
            ui.painter_at(rect)
                .image(photo.texture.id(), rect, uv, Color32::WHITE);
            ui.add_space(spacing::SMALL);

            let mut clear = false;
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(&photo.file_name)
                        .small()
                        .color(Color32::from_gray(170)),
                );
                if ui.small_button(translate("checkin-photo-remove")).clicked() {
                    clear = true;
                }
            });
            if clear {
                *attachment = None;
            }
        }
        None => {
            let mut picked: Option<PhotoAttachment> = None;
            egui::Frame::none()
                .fill(Color32::from_rgb(30, 30, 30))
                .stroke(Stroke::new(1.0, Color32::from_gray(70)))
                .rounding(Rounding::same(8.0))
                .inner_margin(spacing::LARGE)
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        if ui.button(translate("checkin-photo-browse")).clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("Imagens", &["png", "jpg", "jpeg"])
                                .pick_file()
                            {
                                match load_photo(ui.ctx(), &path) {
                                    Ok(photo) => picked = Some(photo),
                                    Err(e) => {
                                        log::warn!("photo rejected: {e}");
                                        error = Some(translate("checkin-photo-invalid"));
                                    }
                                }
                            }
                        }
                        ui.label(
                            RichText::new(translate("checkin-photo-drop-hint"))
                                .small()
                                .color(Color32::from_gray(140)),
                        );
                    });
                });
            if picked.is_some() {
                *attachment = picked;
            }
        }
    }

    error
}
