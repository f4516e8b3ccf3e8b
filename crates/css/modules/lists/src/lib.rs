//! CSS Lists and Counters Module Level 3 — marker boxes of list items.
//! Spec: <https://www.w3.org/TR/css-lists-3/>
//! Spec: CSS 2.2 §12.5 Lists <https://www.w3.org/TR/CSS22/generate.html#lists>
//!
//! ## Pipeline
//!
//! ```text
//! box generation:  build_list_item() -> ListItemBox { marker: Option<ListMarker> }
//!                    (marker text from marker_string(), or an image from ImageStore)
//!   ↓
//! layout pass:     list_marker_layout()
//!                    ├─ text marker  → TextMeasurer
//!                    └─ image marker → image_marker_layout() → list_style_image_size()
//!                  then outside_marker_placement() against the list item's border box
//! ```
//!
//! Inside markers are laid out as ordinary inline content by the inline
//! formatting context and are ignored here. Outside markers are placed with
//! margin arithmetic beside the list item's border box; their top aligns with
//! the list item's content box rather than the first line's baseline.

mod generation;
mod image_size;
mod marker_box;
mod marker_string;
mod placement;

pub use generation::{build_list_item, build_list_marker};
pub use image_size::{image_marker_layout, list_style_image_size};
pub use marker_box::{ListItemBox, ListMarker, MarkerBox, MarkerContent};
pub use marker_string::{counter_representation, marker_string};
pub use placement::{MarkerPlacement, list_marker_layout, outside_marker_placement};
