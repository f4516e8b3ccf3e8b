//! Used geometry of a layout box and the box-model edge queries.
//!
//! `position_x`/`position_y` locate the top-left corner of the *margin* box;
//! every other edge is derived from it. Geometry is written by the layout pass
//! that owns the box and is read-only afterwards.

use crate::BoxSides;
use css_orchestrator::style_model::ComputedStyle;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoxGeometry {
    pub position_x: f32,
    pub position_y: f32,
    /// Content-box width.
    pub width: f32,
    /// Content-box height.
    pub height: f32,

    pub margin_top: f32,
    pub margin_right: f32,
    pub margin_bottom: f32,
    pub margin_left: f32,

    pub padding_top: f32,
    pub padding_right: f32,
    pub padding_bottom: f32,
    pub padding_left: f32,

    pub border_top: f32,
    pub border_right: f32,
    pub border_bottom: f32,
    pub border_left: f32,
}

impl BoxGeometry {
    /// Copy resolved edge widths into this geometry.
    #[inline]
    pub fn apply_sides(&mut self, sides: &BoxSides) {
        self.margin_top = sides.margin_top;
        self.margin_right = sides.margin_right;
        self.margin_bottom = sides.margin_bottom;
        self.margin_left = sides.margin_left;
        self.padding_top = sides.padding_top;
        self.padding_right = sides.padding_right;
        self.padding_bottom = sides.padding_bottom;
        self.padding_left = sides.padding_left;
        self.border_top = sides.border_top;
        self.border_right = sides.border_right;
        self.border_bottom = sides.border_bottom;
        self.border_left = sides.border_left;
    }

    #[inline]
    pub fn border_box_x(&self) -> f32 {
        self.position_x + self.margin_left
    }

    #[inline]
    pub fn border_box_y(&self) -> f32 {
        self.position_y + self.margin_top
    }

    #[inline]
    pub fn content_box_x(&self) -> f32 {
        self.border_box_x() + self.border_left + self.padding_left
    }

    #[inline]
    pub fn content_box_y(&self) -> f32 {
        self.border_box_y() + self.border_top + self.padding_top
    }

    #[inline]
    pub fn padding_width(&self) -> f32 {
        self.width + self.padding_left + self.padding_right
    }

    #[inline]
    pub fn border_width(&self) -> f32 {
        self.padding_width() + self.border_left + self.border_right
    }

    /// Width of the margin box: border box plus horizontal margins.
    #[inline]
    pub fn margin_width(&self) -> f32 {
        self.border_width() + self.margin_left + self.margin_right
    }

    #[inline]
    pub fn border_height(&self) -> f32 {
        self.height + self.padding_top + self.padding_bottom + self.border_top + self.border_bottom
    }
}

/// A node of the box tree: computed style plus used geometry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutBox {
    pub style: ComputedStyle,
    pub geometry: BoxGeometry,
}

impl LayoutBox {
    #[inline]
    pub fn new(style: ComputedStyle) -> Self {
        Self {
            style,
            geometry: BoxGeometry::default(),
        }
    }
}
