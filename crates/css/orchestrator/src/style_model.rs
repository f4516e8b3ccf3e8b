//! Computed style values consumed by box layout and list marker generation.

/// Inline base direction (CSS Writing Modes 3 §2.1 `direction`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Display {
    #[default]
    Inline,
    Block,
    ListItem,
}

/// Where the marker box of a list item is placed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListStylePosition {
    #[default]
    Outside,
    Inside,
}

/// Predefined counter styles usable in `list-style-type`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListStyleType {
    None,
    #[default]
    Disc,
    Circle,
    Square,
    Decimal,
    DecimalLeadingZero,
    LowerRoman,
    UpperRoman,
    LowerAlpha,
    UpperAlpha,
    LowerGreek,
}

/// A length that may be `auto`, absolute, or relative to the containing block.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum SizeSpecified {
    #[default]
    Auto,
    Px(f32),
    /// Fraction of the containing block dimension (0.0..=1.0 for 0%..100%).
    Percent(f32),
}

impl SizeSpecified {
    /// Absolute length if this value does not depend on a containing block.
    #[inline]
    pub const fn as_px(self) -> Option<f32> {
        match self {
            Self::Px(pixels) => Some(pixels),
            Self::Auto | Self::Percent(_) => None,
        }
    }
}

/// Per-side specified values (margins, padding).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SideValues {
    pub top: SizeSpecified,
    pub right: SizeSpecified,
    pub bottom: SizeSpecified,
    pub left: SizeSpecified,
}

impl SideValues {
    /// Same value on all four sides.
    #[inline]
    pub const fn uniform(value: SizeSpecified) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BorderWidths {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ComputedStyle {
    pub display: Display,
    pub direction: Direction,
    pub font_size: f32,
    /// Computed line-height in pixels when specified; None represents 'normal'.
    pub line_height: Option<f32>,
    pub font_family: Option<String>,
    /// Font weight (100-900, with 400=normal, 700=bold).
    pub font_weight: u16,
    pub margin: SideValues,
    /// Padding never resolves to `auto`; an `Auto` value is treated as zero.
    pub padding: SideValues,
    pub border_width: BorderWidths,
    pub width: SizeSpecified,
    pub height: SizeSpecified,
    pub list_style_type: ListStyleType,
    pub list_style_position: ListStylePosition,
    /// URL of the `list-style-image`; None represents 'none'.
    pub list_style_image: Option<String>,
}

impl Default for ComputedStyle {
    #[inline]
    fn default() -> Self {
        Self {
            display: Display::default(),
            direction: Direction::default(),
            font_size: 16.0,
            line_height: None,
            font_family: None,
            font_weight: 400,
            margin: SideValues::uniform(SizeSpecified::Px(0.0)),
            padding: SideValues::uniform(SizeSpecified::Px(0.0)),
            border_width: BorderWidths::default(),
            width: SizeSpecified::Auto,
            height: SizeSpecified::Auto,
            list_style_type: ListStyleType::default(),
            list_style_position: ListStylePosition::default(),
            list_style_image: None,
        }
    }
}

impl ComputedStyle {
    /// Style for a box generated by this element, such as a `::marker`.
    ///
    /// Inherited properties are carried over; box-model properties reset to
    /// their initial values.
    #[inline]
    #[must_use]
    pub fn inherit_for_child(&self) -> Self {
        Self {
            direction: self.direction,
            font_size: self.font_size,
            line_height: self.line_height,
            font_family: self.font_family.clone(),
            font_weight: self.font_weight,
            list_style_type: self.list_style_type,
            list_style_position: self.list_style_position,
            list_style_image: self.list_style_image.clone(),
            ..Self::default()
        }
    }
}
