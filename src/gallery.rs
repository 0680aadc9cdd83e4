// Photo gallery navigation: slide-index arithmetic plus gesture and key
// interpretation. The controller never draws; whoever owns it hands in a
// `render` callback at construction and presents the slide it is told to.
// One controller per mounted gallery.

use crate::ui_constants::gallery::SWIPE_THRESHOLD;

/// The only signaled navigation error: a direct jump outside the slide
/// range. Buttons and gestures can't produce it; indicator callers are
/// generated from the slide count and shouldn't either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("slide index {index} out of range for {slide_count} slides")]
pub struct OutOfRangeError {
    pub index: usize,
    pub slide_count: usize,
}

/// Directional keys the gallery reacts to. Mapping from the concrete UI
/// toolkit's key type happens at the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
    Other,
}

pub struct GalleryController {
    slide_count: usize,
    current: usize,
    /// Start X of the gesture in flight, if any. Cleared every cycle.
    pending_gesture: Option<f32>,
    /// Keys are honored only while the owning view is the focused one,
    /// so two galleries on screen never both react to one keypress.
    focused: bool,
    render: Box<dyn FnMut(usize)>,
}

impl GalleryController {
    /// A gallery with `slide_count` slides, positioned on the first one.
    /// With zero slides the gallery is inactive and every navigation call
    /// is a no-op.
    pub fn new(slide_count: usize, render: impl FnMut(usize) + 'static) -> Self {
        Self {
            slide_count,
            current: 0,
            pending_gesture: None,
            focused: false,
            render: Box::new(render),
        }
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn is_empty(&self) -> bool {
        self.slide_count == 0
    }

    /// `None` while the gallery has no slides.
    pub fn current_index(&self) -> Option<usize> {
        (self.slide_count > 0).then_some(self.current)
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn has_focus(&self) -> bool {
        self.focused
    }

    /// Advance one slide, wrapping from the last slide back to the first.
    pub fn next(&mut self) -> Option<usize> {
        if self.slide_count == 0 {
            return None;
        }
        Some(self.apply((self.current + 1) % self.slide_count))
    }

    /// Go back one slide, wrapping from the first slide to the last.
    pub fn previous(&mut self) -> Option<usize> {
        if self.slide_count == 0 {
            return None;
        }
        Some(self.apply((self.current + self.slide_count - 1) % self.slide_count))
    }

    /// Jump straight to `index` (indicator dots). Fails without touching
    /// the current slide when the index is outside `[0, slide_count)`.
    pub fn go_to(&mut self, index: usize) -> Result<usize, OutOfRangeError> {
        if index >= self.slide_count {
            return Err(OutOfRangeError {
                index,
                slide_count: self.slide_count,
            });
        }
        Ok(self.apply(index))
    }

    /// Record the start of a drag. A new start overwrites any stale
    /// pending gesture; only one gesture is in flight per controller.
    pub fn gesture_start(&mut self, x: f32) {
        self.pending_gesture = Some(x);
    }

    /// Finish a drag. A stray end without a matching start is ignored.
    /// Travel at or below the threshold is a tap or jitter and discarded;
    /// beyond it, dragging left advances and dragging right goes back.
    pub fn gesture_end(&mut self, x: f32) {
        let Some(start) = self.pending_gesture.take() else {
            return;
        };
        let delta = start - x;
        if delta > SWIPE_THRESHOLD {
            self.next();
        } else if delta < -SWIPE_THRESHOLD {
            self.previous();
        }
    }

    /// Arrow-key navigation; ignored unless this gallery is focused.
    pub fn handle_key(&mut self, key: NavKey) -> Option<usize> {
        if !self.focused {
            return None;
        }
        match key {
            NavKey::ArrowLeft => self.previous(),
            NavKey::ArrowRight => self.next(),
            NavKey::Other => None,
        }
    }

    fn apply(&mut self, index: usize) -> usize {
        self.current = index;
        (self.render)(index);
        index
    }
}

#[cfg(test)]
mod tests;
