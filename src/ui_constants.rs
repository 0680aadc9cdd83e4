// UI constants gathered here so magic numbers don't spread across views.

/// Default card width in logical pixels
pub const CARD_WIDTH: f32 = 320.0;

/// Gap between cards in the grid
pub const CARD_GAP: f32 = 16.0;

/// How long a toast stays on screen before it expires
pub const TOAST_TTL_MS: u64 = 3000;

/// UI spacing constants
pub mod spacing {
    /// Small spacing (4px)
    pub const SMALL: f32 = 4.0;

    /// Medium spacing (8px)
    pub const MEDIUM: f32 = 8.0;

    /// Large spacing (16px)
    pub const LARGE: f32 = 16.0;

    /// Extra large spacing (24px)
    pub const XLARGE: f32 = 24.0;
}

/// Card-specific layout constants
pub mod card {
    /// Inner margin of card frame (symmetric)
    pub const INNER_MARGIN: f32 = 8.0;

    /// Border radius of card corners
    pub const ROUNDING: f32 = 8.0;

    /// Meta plaque rounding
    pub const META_ROUNDING: f32 = 6.0;
}

/// Photo gallery constants
pub mod gallery {
    /// Minimum horizontal travel (logical px) for a drag to count as a swipe;
    /// anything at or below this is treated as a tap or jitter.
    pub const SWIPE_THRESHOLD: f32 = 50.0;

    /// Slide aspect ratio (width / height)
    pub const SLIDE_ASPECT: f32 = 16.0 / 9.0;

    /// Diameter of an indicator dot
    pub const INDICATOR_SIZE: f32 = 10.0;

    /// Size of the prev/next overlay buttons
    pub const NAV_BUTTON_SIZE: f32 = 36.0;
}

/// Simulated backend latencies, in milliseconds. The platform has no
/// backend yet; every "request" resolves on one of these timers.
pub mod latency {
    /// Opening a partner detail page from the directory
    pub const OPEN_DETAIL_MS: u64 = 500;

    /// Reserving a spot in a partner event
    pub const RESERVE_MS: u64 = 800;

    /// Quick check-in from the partner page widget
    pub const CHECKIN_WIDGET_MS: u64 = 1000;

    /// Saving the profile form
    pub const PROFILE_SAVE_MS: u64 = 1000;

    /// QR scan simulation
    pub const QR_SCAN_MS: u64 = 1500;

    /// Geolocation lookup simulation
    pub const GEOLOCATE_MS: u64 = 1500;

    /// Check-in form submission
    pub const CHECKIN_SUBMIT_MS: u64 = 1500;

    /// Publishing a forum discussion
    pub const PUBLISH_MS: u64 = 1500;
}

/// How long transient button labels ("✓ Reservado!") stay before reverting
pub mod revert {
    pub const RESERVE_MS: u64 = 2000;
    pub const CHECKIN_WIDGET_MS: u64 = 2000;
    pub const PROFILE_SAVE_MS: u64 = 1500;
    /// Check-in form clears this long after the success modal appears
    pub const CHECKIN_FORM_MS: u64 = 3000;
}
