//! Marker boxes and the list item boxes that own them.

use css_box::LayoutBox;
use css_images::ImageResource;
use css_orchestrator::style_model::{ComputedStyle, ListStylePosition};
use std::fmt;
use std::sync::Arc;

/// What a marker box displays.
#[derive(Clone)]
pub enum MarkerContent {
    /// Literal marker text, e.g. `"• "` or `"3. "`.
    Text(String),
    /// The image named by `list-style-image`.
    Image(Arc<dyn ImageResource>),
}

impl fmt::Debug for MarkerContent {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => formatter.debug_tuple("Text").field(text).finish(),
            Self::Image(image) => formatter
                .debug_struct("Image")
                .field("width", &image.intrinsic_width())
                .field("height", &image.intrinsic_height())
                .field("ratio", &image.intrinsic_ratio())
                .finish(),
        }
    }
}

/// The `::marker` box of a list item.
///
/// The content kind is fixed at construction; only the geometry of `layout`
/// changes, and only during the layout pass that owns the list item.
#[derive(Clone, Debug)]
pub struct MarkerBox {
    pub layout: LayoutBox,
    pub(crate) content: MarkerContent,
}

impl MarkerBox {
    #[inline]
    pub fn text(style: ComputedStyle, text: impl Into<String>) -> Self {
        Self {
            layout: LayoutBox::new(style),
            content: MarkerContent::Text(text.into()),
        }
    }

    #[inline]
    pub fn image(style: ComputedStyle, image: Arc<dyn ImageResource>) -> Self {
        Self {
            layout: LayoutBox::new(style),
            content: MarkerContent::Image(image),
        }
    }

    #[inline]
    pub const fn content(&self) -> &MarkerContent {
        &self.content
    }

    #[inline]
    pub const fn is_image(&self) -> bool {
        matches!(self.content, MarkerContent::Image(_))
    }
}

/// A marker attached to a list item, with its `list-style-position`.
#[derive(Clone, Debug)]
pub struct ListMarker {
    pub position: ListStylePosition,
    pub marker: MarkerBox,
}

/// A box generated for a `display: list-item` element.
///
/// Holds at most one marker; whether it is laid out inside or outside is
/// recorded on the [`ListMarker`].
#[derive(Clone, Debug, Default)]
pub struct ListItemBox {
    pub layout: LayoutBox,
    marker: Option<ListMarker>,
}

impl ListItemBox {
    #[inline]
    pub const fn new(layout: LayoutBox, marker: Option<ListMarker>) -> Self {
        Self { layout, marker }
    }

    #[inline]
    pub const fn marker(&self) -> Option<&ListMarker> {
        self.marker.as_ref()
    }

    /// The marker box if it is positioned outside the principal box.
    #[inline]
    pub fn outside_marker(&self) -> Option<&MarkerBox> {
        self.marker
            .as_ref()
            .filter(|attached| attached.position == ListStylePosition::Outside)
            .map(|attached| &attached.marker)
    }

    #[inline]
    pub fn outside_marker_mut(&mut self) -> Option<&mut MarkerBox> {
        self.marker
            .as_mut()
            .filter(|attached| attached.position == ListStylePosition::Outside)
            .map(|attached| &mut attached.marker)
    }

    /// The marker box if it flows as the first inline content of the item.
    #[inline]
    pub fn inside_marker(&self) -> Option<&MarkerBox> {
        self.marker
            .as_ref()
            .filter(|attached| attached.position == ListStylePosition::Inside)
            .map(|attached| &attached.marker)
    }
}
