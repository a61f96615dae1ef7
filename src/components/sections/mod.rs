//! Page Sections
//!
//! Self-contained full-width blocks and the renderer that dispatches on their tag.

pub mod alternating_content;
pub mod features;
pub mod hero;
pub mod image_card_grid;
pub mod info_with_images;
pub mod overview;
pub mod renderer;
pub mod stats_grid;

pub use alternating_content::{AlternatingContent, ContentItem};
pub use features::{FeatureItem, Features};
pub use hero::{Alignment, Hero};
pub use image_card_grid::{CardLayout, ImageCard, ImageCardGrid};
pub use info_with_images::{ImageItem, InfoWithImages};
pub use overview::{HighlightItem, MediaItem, MediaKind, Overview};
pub use renderer::{RenderedSection, SectionConfig, SectionsRenderer, render_sections};
pub use stats_grid::{StatItem, StatValue, StatsGrid};
