mod gallery_view;
mod photo_field;
mod star_rating;
mod tag_chips;

pub use gallery_view::{gallery_view, SlideCache};
pub use photo_field::{load_photo, photo_field, take_dropped_file, PhotoAttachment, PhotoError};
pub use star_rating::{rating_text, star_rating};
pub use tag_chips::tag_chips;
