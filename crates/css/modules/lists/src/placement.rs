//! Spec: CSS Lists 3 §3.1 — sizing and positioning outside `::marker` boxes.
//! <https://www.w3.org/TR/css-lists-3/#list-style-position-property>

use crate::image_size::image_marker_layout;
use crate::marker_box::{ListItemBox, MarkerContent};
use css_box::{BoxGeometry, ContainingBlock};
use css_orchestrator::style_model::Direction;
use css_text::{RenderContext, TextMeasurer};
use log::debug;

/// Horizontal used values of an outside marker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerPlacement {
    pub position_x: f32,
    pub margin_left: f32,
    pub margin_right: f32,
}

impl MarkerPlacement {
    #[inline]
    pub fn apply(self, geometry: &mut BoxGeometry) {
        geometry.position_x = self.position_x;
        geometry.margin_left = self.margin_left;
        geometry.margin_right = self.margin_right;
    }
}

/// Place a sized marker beside the border box of its list item.
///
/// Left-to-right: the marker's right margin edge touches the list item's
/// left border edge, with `gap` as the marker's right margin. Right-to-left
/// mirrors this: the marker starts at the list item's right border edge with
/// `gap` as its left margin. The other margin is kept as resolved.
pub fn outside_marker_placement(
    direction: Direction,
    gap: f32,
    list_item: &BoxGeometry,
    marker: &BoxGeometry,
) -> MarkerPlacement {
    match direction {
        Direction::Ltr => {
            let margin_width = marker.border_width() + marker.margin_left + gap;
            MarkerPlacement {
                position_x: list_item.border_box_x() - margin_width,
                margin_left: marker.margin_left,
                margin_right: gap,
            }
        }
        Direction::Rtl => MarkerPlacement {
            position_x: list_item.border_box_x() + list_item.border_width(),
            margin_left: gap,
            margin_right: marker.margin_right,
        },
    }
}

/// Lay out the outside marker of `list_item`, if it has one.
///
/// The list item's own geometry must already be final; the marker is sized
/// (measured text, or the image rules of [`image_marker_layout`]) and then
/// positioned relative to it, half of the marker's own em away from the
/// border box. Only the marker's geometry is written.
///
/// The marker's font size must be positive; debug builds panic otherwise.
pub fn list_marker_layout(
    list_item: &mut ListItemBox,
    containing_block: &ContainingBlock,
    measurer: &mut dyn TextMeasurer,
    context: &RenderContext,
) {
    let host = list_item.layout.geometry;
    let direction = list_item.layout.style.direction;
    let Some(marker) = list_item.outside_marker_mut() else {
        return;
    };
    let font_size = marker.layout.style.font_size;
    debug_assert!(
        font_size > 0.0,
        "marker laid out with non-positive font-size {font_size}"
    );

    marker.layout.resolve_percentages(containing_block);
    match &marker.content {
        MarkerContent::Text(text) => {
            let extent = measurer.measure(text, &marker.layout.style, context);
            marker.layout.geometry.width = extent.width;
            marker.layout.geometry.height = extent.height;
        }
        MarkerContent::Image(image) => {
            image_marker_layout(&mut marker.layout, image.as_ref(), containing_block);
        }
    }

    // TODO: align the marker's baseline with the first line box of the list item.
    marker.layout.geometry.position_y = host.content_box_y();

    let half_em = 0.5 * font_size;
    outside_marker_placement(direction, half_em, &host, &marker.layout.geometry)
        .apply(&mut marker.layout.geometry);

    debug!(
        "[MARKER] {:?} {}x{} at ({}, {}) dir={direction:?}",
        marker.content,
        marker.layout.geometry.width,
        marker.layout.geometry.height,
        marker.layout.geometry.position_x,
        marker.layout.geometry.position_y
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host() -> BoxGeometry {
        BoxGeometry {
            position_x: 40.0,
            position_y: 10.0,
            width: 200.0,
            margin_left: 5.0,
            border_left: 2.0,
            border_right: 2.0,
            padding_left: 3.0,
            padding_right: 3.0,
            ..BoxGeometry::default()
        }
    }

    #[test]
    fn ltr_marker_ends_at_left_border_edge() {
        let marker = BoxGeometry {
            width: 10.0,
            ..BoxGeometry::default()
        };
        let placement = outside_marker_placement(Direction::Ltr, 8.0, &host(), &marker);
        assert_eq!(
            placement,
            MarkerPlacement {
                position_x: 45.0 - 18.0,
                margin_left: 0.0,
                margin_right: 8.0,
            }
        );
    }

    #[test]
    fn ltr_counts_existing_left_margin() {
        let marker = BoxGeometry {
            width: 10.0,
            margin_left: 4.0,
            ..BoxGeometry::default()
        };
        let placement = outside_marker_placement(Direction::Ltr, 8.0, &host(), &marker);
        assert!((placement.position_x - (45.0 - 22.0)).abs() < f32::EPSILON);
        assert!((placement.margin_left - 4.0).abs() < f32::EPSILON);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "non-positive font-size")]
    fn zero_font_size_is_rejected() {
        use crate::marker_box::{ListItemBox, ListMarker, MarkerBox};
        use css_box::LayoutBox;
        use css_orchestrator::style_model::{ComputedStyle, ListStylePosition};

        let style = ComputedStyle {
            font_size: 0.0,
            ..ComputedStyle::default()
        };
        let marker = MarkerBox::text(style.inherit_for_child(), "• ");
        let mut item = ListItemBox::new(
            LayoutBox::new(style),
            Some(ListMarker {
                position: ListStylePosition::Outside,
                marker,
            }),
        );
        list_marker_layout(
            &mut item,
            &ContainingBlock::new(100.0, None),
            &mut css_text::AdvanceMeasurer::default(),
            &RenderContext::default(),
        );
    }

    #[test]
    fn rtl_marker_starts_at_right_border_edge() {
        let marker = BoxGeometry {
            width: 10.0,
            margin_right: 1.0,
            ..BoxGeometry::default()
        };
        let placement = outside_marker_placement(Direction::Rtl, 8.0, &host(), &marker);
        // border box: x = 45, width = 200 + 3 + 3 + 2 + 2
        assert_eq!(
            placement,
            MarkerPlacement {
                position_x: 45.0 + 210.0,
                margin_left: 8.0,
                margin_right: 1.0,
            }
        );
    }
}
