//! Component Constants
//!
//! Centralized defaults shared by sections, forms and navigation.

/// Hero defaults
pub const HERO_DEFAULT_BACKGROUND: &str = "#ffffff";
pub const HERO_DEFAULT_OVERLAY_OPACITY: f64 = 0.4;
pub const HERO_DEFAULT_MIN_HEIGHT: &str = "500px";

/// Stats grid default column count
pub const STATS_GRID_DEFAULT_COLUMNS: u8 = 4;

/// Image card grid default image height
pub const IMAGE_CARD_DEFAULT_IMAGE_HEIGHT: &str = "300px";

/// Footer defaults
pub const FOOTER_DEFAULT_BACKGROUND: &str = "#111827";
pub const FOOTER_DEFAULT_TEXT_COLOR: &str = "#ffffff";

/// Textarea default row count
pub const TEXTAREA_DEFAULT_ROWS: u32 = 4;

/// Sticky navigation defaults
pub const NAV_DEFAULT_BACKGROUND: &str = "transparent";
pub const NAV_DEFAULT_SCROLLED_BACKGROUND: &str = "#ffffff";
pub const NAV_DEFAULT_TEXT_COLOR: &str = "#111827";
pub const NAV_DEFAULT_PADDING_X: &str = "1.5rem";
pub const NAV_DEFAULT_PADDING_X_MOBILE: &str = "1rem";
pub const NAV_DEFAULT_MOBILE_MENU_BACKGROUND: &str = "#ffffff";
pub const NAV_DEFAULT_MOBILE_MENU_TEXT: &str = "#000000";

/// Body overflow value applied while the scroll lock is held
pub const SCROLL_LOCK_OVERFLOW: &str = "hidden";

/// Carousel defaults
pub const CAROUSEL_DEFAULT_DELAY_MS: u64 = 3000;
pub const CAROUSEL_DEFAULT_SPACE_BETWEEN: u32 = 30;
pub const CAROUSEL_DEFAULT_ACTIVE_COLOR: &str = "#007bff";
pub const CAROUSEL_THUMBS_DEFAULT_PER_VIEW: u32 = 5;
