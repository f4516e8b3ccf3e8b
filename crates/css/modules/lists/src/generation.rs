//! Spec: CSS Display 3 §2.3 — generating marker boxes for `display: list-item`.
//! <https://www.w3.org/TR/css-display-3/#list-items>

use crate::marker_box::{ListItemBox, ListMarker, MarkerBox};
use crate::marker_string::marker_string;
use css_box::LayoutBox;
use css_images::ImageStore;
use css_orchestrator::style_model::{ComputedStyle, Display};
use log::debug;

/// Build the marker for a list item with the given style and ordinal.
///
/// A `list-style-image` that is available in `images` wins; otherwise the
/// marker shows the `list-style-type` string for `ordinal`. Returns None when
/// neither produces content.
pub fn build_list_marker(
    list_item_style: &ComputedStyle,
    ordinal: i32,
    images: &ImageStore,
) -> Option<ListMarker> {
    let style = list_item_style.inherit_for_child();
    let image = style.list_style_image.as_deref().and_then(|url| {
        let image = images.get(url);
        if image.is_none() {
            debug!(
                "[MARKER] image {url} not among {} loaded; using list-style-type",
                images.len()
            );
        }
        image
    });

    let marker = match image {
        Some(image) => MarkerBox::image(style, image),
        None => {
            let text = marker_string(style.list_style_type, ordinal)?;
            MarkerBox::text(style, text)
        }
    };
    Some(ListMarker {
        position: list_item_style.list_style_position,
        marker,
    })
}

/// Generate the box for an element, with a marker when it is a list item.
pub fn build_list_item(style: ComputedStyle, ordinal: i32, images: &ImageStore) -> ListItemBox {
    let marker = if style.display == Display::ListItem {
        build_list_marker(&style, ordinal, images)
    } else {
        None
    };
    ListItemBox::new(LayoutBox::new(style), marker)
}
