//! Style descriptors attached to every component.
//!
//! Each descriptor covers one category of presentation (positioning, layout,
//! styling, responsive overrides). Enumerated values are closed sum types, but
//! each one carries an `Unknown` variant holding the raw value, so documents
//! written by newer editors still load, contribute no classes, and are written
//! back unchanged.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Declares a string-valued enum whose unrecognized values are kept verbatim
/// in an `Unknown` variant, so they survive a load/save cycle.
macro_rules! open_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:literal $(| $alias:literal)*,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
            /// Value not understood by this version, kept as written
            Unknown(String),
        }

        impl $name {
            /// Parses a schema value. Unrecognized values are preserved as `Unknown`.
            pub fn parse(value: &str) -> Self {
                match value {
                    $( $value $(| $alias)* => Self::$variant, )+
                    other => Self::Unknown(other.to_string()),
                }
            }

            /// Returns the value as written in a schema.
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $value, )+
                    Self::Unknown(raw) => raw,
                }
            }

            /// Returns true if this version does not understand the value.
            pub const fn is_unknown(&self) -> bool {
                matches!(self, Self::Unknown(_))
            }

            /// Returns the raw value when this version does not understand it.
            pub fn unknown_value(&self) -> Option<&str> {
                match self {
                    Self::Unknown(raw) => Some(raw),
                    _ => None,
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::parse(&value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Unknown(raw) => raw,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

open_enum! {
    /// Placement strategy of a component.
    #[derive(Default)]
    pub enum PositionType {
        /// Normal document flow
        #[default]
        Static = "static",
        /// Offset relative to its normal position
        Relative = "relative",
        /// Positioned against the nearest positioned ancestor
        Absolute = "absolute",
        /// Pinned to the viewport
        Fixed = "fixed",
        /// Sticks once scrolled past its offset
        Sticky = "sticky",
    }
}

/// Edge offset for positioned components.
///
/// Numbers map onto the spacing scale (`0` → `top-0`, `-4` → `-top-4`),
/// strings are passed through as keywords (`"full"`, `"1/2"`) or wrapped as
/// arbitrary values (`"10px"` → `top-[10px]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Offset {
    /// Spacing scale step
    Scale(f64),
    /// Keyword or raw CSS length
    Keyword(String),
}

impl From<i32> for Offset {
    fn from(value: i32) -> Self {
        Self::Scale(f64::from(value))
    }
}

impl From<&str> for Offset {
    fn from(value: &str) -> Self {
        Self::Keyword(value.to_string())
    }
}

/// Describes how a component is placed on the page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositioningDescriptor {
    /// Placement strategy
    #[serde(rename = "type", default)]
    pub kind: PositionType,
    /// Top edge offset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<Offset>,
    /// Right edge offset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Offset>,
    /// Bottom edge offset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<Offset>,
    /// Left edge offset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Offset>,
    /// Stacking order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
}

impl PositioningDescriptor {
    /// Creates a descriptor with the given placement strategy and no offsets.
    pub fn new(kind: PositionType) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Sets the top offset.
    #[must_use]
    pub fn with_top(mut self, offset: impl Into<Offset>) -> Self {
        self.top = Some(offset.into());
        self
    }

    /// Sets the right offset.
    #[must_use]
    pub fn with_right(mut self, offset: impl Into<Offset>) -> Self {
        self.right = Some(offset.into());
        self
    }

    /// Sets the bottom offset.
    #[must_use]
    pub fn with_bottom(mut self, offset: impl Into<Offset>) -> Self {
        self.bottom = Some(offset.into());
        self
    }

    /// Sets the left offset.
    #[must_use]
    pub fn with_left(mut self, offset: impl Into<Offset>) -> Self {
        self.left = Some(offset.into());
        self
    }

    /// Sets the stacking order.
    #[must_use]
    pub const fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = Some(z_index);
        self
    }
}

open_enum! {
    /// Internal arrangement strategy of a component.
    #[derive(Default)]
    pub enum LayoutType {
        /// Block formatting context
        #[default]
        Block = "block",
        /// Flexbox container
        Flex = "flex",
        /// Inline flexbox container
        InlineFlex = "inline-flex",
        /// CSS grid container
        Grid = "grid",
    }
}

open_enum! {
    /// Main axis of a flex container.
    pub enum FlexDirection {
        /// Left to right
        Row = "row",
        /// Top to bottom
        Column = "column" | "col",
        /// Right to left
        RowReverse = "row-reverse",
        /// Bottom to top
        ColumnReverse = "column-reverse" | "col-reverse",
    }
}

open_enum! {
    /// Cross-axis alignment of children.
    pub enum Align {
        /// Align to the start
        Start = "start",
        /// Center children
        Center = "center",
        /// Align to the end
        End = "end",
        /// Stretch to fill
        Stretch = "stretch",
        /// Align text baselines
        Baseline = "baseline",
    }
}

open_enum! {
    /// Main-axis distribution of children.
    pub enum Justify {
        /// Pack at the start
        Start = "start",
        /// Pack in the center
        Center = "center",
        /// Pack at the end
        End = "end",
        /// Space between children
        Between = "between",
        /// Space around children
        Around = "around",
        /// Equal space everywhere
        Evenly = "evenly",
    }
}

/// Describes how a component arranges its children.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDescriptor {
    /// Arrangement strategy
    #[serde(rename = "type", default)]
    pub kind: LayoutType,
    /// Flex direction (flex layouts only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<FlexDirection>,
    /// Allow flex items to wrap
    #[serde(default, skip_serializing_if = "is_false")]
    pub wrap: bool,
    /// Cross-axis alignment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
    /// Main-axis distribution
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justify: Option<Justify>,
    /// Grid column count (grid layouts only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,
    /// Grid row count (grid layouts only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,
    /// Gap between children, spacing scale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<u32>,
    /// Padding on all sides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<u32>,
    /// Horizontal padding
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_x: Option<u32>,
    /// Vertical padding
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_y: Option<u32>,
    /// Maximum width keyword (e.g. `"7xl"`, `"screen-lg"`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width: Option<String>,
    /// Center horizontally with auto margins
    #[serde(default, skip_serializing_if = "is_false")]
    pub centered: bool,
    /// Stretch to the full width of the parent
    #[serde(default, skip_serializing_if = "is_false")]
    pub full_width: bool,
    /// At least as tall as the viewport
    #[serde(default, skip_serializing_if = "is_false")]
    pub min_height_screen: bool,
}

impl LayoutDescriptor {
    /// Creates a descriptor with the given arrangement strategy.
    pub fn new(kind: LayoutType) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Sets the main-axis distribution.
    #[must_use]
    pub fn with_justify(mut self, justify: Justify) -> Self {
        self.justify = Some(justify);
        self
    }

    /// Sets the cross-axis alignment.
    #[must_use]
    pub fn with_align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    /// Sets the flex direction.
    #[must_use]
    pub fn with_direction(mut self, direction: FlexDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Sets the grid column count.
    #[must_use]
    pub const fn with_columns(mut self, columns: u32) -> Self {
        self.columns = Some(columns);
        self
    }

    /// Sets the gap between children.
    #[must_use]
    pub const fn with_gap(mut self, gap: u32) -> Self {
        self.gap = Some(gap);
        self
    }

    /// Sets padding on all sides.
    #[must_use]
    pub const fn with_padding(mut self, padding: u32) -> Self {
        self.padding = Some(padding);
        self
    }
}

open_enum! {
    /// Corner radius preset.
    pub enum Rounded {
        /// Square corners
        None = "none",
        /// Small radius
        Sm = "sm",
        /// Default radius
        Default = "default",
        /// Medium radius
        Md = "md",
        /// Large radius
        Lg = "lg",
        /// Extra large radius
        Xl = "xl",
        /// Double extra large radius
        Xxl = "2xl",
        /// Pill / circle
        Full = "full",
    }
}

open_enum! {
    /// Drop shadow preset.
    pub enum Shadow {
        /// No shadow
        None = "none",
        /// Small shadow
        Sm = "sm",
        /// Default shadow
        Default = "default",
        /// Medium shadow
        Md = "md",
        /// Large shadow
        Lg = "lg",
        /// Extra large shadow
        Xl = "xl",
        /// Double extra large shadow
        Xxl = "2xl",
        /// Inset shadow
        Inner = "inner",
    }
}

/// Describes the visual treatment of a component.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StylingDescriptor {
    /// Background color token (`"white"`, `"slate-900"`, `"#0f172a"`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Text color token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    /// Border on all sides
    #[serde(default, skip_serializing_if = "is_false")]
    pub border: bool,
    /// Top border only
    #[serde(default, skip_serializing_if = "is_false")]
    pub border_top: bool,
    /// Right border only
    #[serde(default, skip_serializing_if = "is_false")]
    pub border_right: bool,
    /// Bottom border only
    #[serde(default, skip_serializing_if = "is_false")]
    pub border_bottom: bool,
    /// Left border only
    #[serde(default, skip_serializing_if = "is_false")]
    pub border_left: bool,
    /// Border color token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    /// Corner radius
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rounded: Option<Rounded>,
    /// Drop shadow
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
    /// Opacity percentage (0-100)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<u8>,
    /// Blur whatever is behind the component
    #[serde(default, skip_serializing_if = "is_false")]
    pub backdrop_blur: bool,
}

/// Named breakpoint used to key responsive overrides.
///
/// The ordering follows ascending viewport width, so maps keyed by
/// `BreakpointKey` always iterate narrowest first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BreakpointKey {
    /// Unprefixed, applies at every width
    Base,
    /// `sm:` (640px)
    Sm,
    /// `md:` (768px)
    Md,
    /// `lg:` (1024px)
    Lg,
    /// `xl:` (1280px)
    Xl,
    /// `2xl:` (1536px)
    Xxl,
    /// A breakpoint name without a known prefix
    Other(String),
}

impl BreakpointKey {
    /// Parses a breakpoint name. Unrecognized names are preserved as `Other`.
    pub fn parse(name: &str) -> Self {
        match name {
            "base" => Self::Base,
            "sm" => Self::Sm,
            "md" => Self::Md,
            "lg" => Self::Lg,
            "xl" => Self::Xl,
            "2xl" => Self::Xxl,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the breakpoint name as written in a schema.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Base => "base",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "2xl",
            Self::Other(name) => name,
        }
    }

    /// Returns the class prefix for this breakpoint, `None` when unknown.
    pub const fn prefix(&self) -> Option<&'static str> {
        match self {
            Self::Base => Some(""),
            Self::Sm => Some("sm:"),
            Self::Md => Some("md:"),
            Self::Lg => Some("lg:"),
            Self::Xl => Some("xl:"),
            Self::Xxl => Some("2xl:"),
            Self::Other(_) => None,
        }
    }

    /// Returns true if the synthesizer knows a prefix for this breakpoint.
    pub const fn is_known(&self) -> bool {
        self.prefix().is_some()
    }
}

impl From<String> for BreakpointKey {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<BreakpointKey> for String {
    fn from(value: BreakpointKey) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for BreakpointKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overrides applied from one breakpoint upwards.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsiveOverride {
    /// Hide (`true`) or show (`false`) the component from this width up
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    /// Flex direction from this width up
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<FlexDirection>,
    /// Grid column count from this width up
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,
    /// Gap from this width up
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<u32>,
    /// Padding from this width up
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<u32>,
}

impl ResponsiveOverride {
    /// Creates an override that only toggles visibility.
    pub fn visibility(hidden: bool) -> Self {
        Self {
            hidden: Some(hidden),
            ..Self::default()
        }
    }
}

/// Per-breakpoint overrides, keyed by breakpoint name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponsiveDescriptor {
    /// Overrides in canonical breakpoint order
    pub overrides: BTreeMap<BreakpointKey, ResponsiveOverride>,
}

impl ResponsiveDescriptor {
    /// Creates an empty descriptor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the override for a breakpoint.
    #[must_use]
    pub fn with(mut self, breakpoint: BreakpointKey, value: ResponsiveOverride) -> Self {
        self.overrides.insert(breakpoint, value);
        self
    }

    /// Returns true if no breakpoint carries an override.
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_false(value: &bool) -> bool {
    !*value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_key_ordering_is_by_width() {
        let mut keys = vec![
            BreakpointKey::Xxl,
            BreakpointKey::parse("lg"),
            BreakpointKey::Base,
            BreakpointKey::Sm,
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![
                BreakpointKey::Base,
                BreakpointKey::Sm,
                BreakpointKey::Lg,
                BreakpointKey::Xxl
            ]
        );
    }

    #[test]
    fn test_breakpoint_key_unknown_has_no_prefix() {
        let key = BreakpointKey::parse("watch");
        assert_eq!(key, BreakpointKey::Other("watch".to_string()));
        assert_eq!(key.prefix(), None);
        assert_eq!(key.as_str(), "watch");
    }

    #[test]
    fn test_unknown_position_type_deserializes() {
        let positioning: PositioningDescriptor =
            serde_json::from_str(r#"{"type": "floating", "top": 0}"#).unwrap();
        assert_eq!(positioning.kind, PositionType::Unknown("floating".to_string()));
        assert!(positioning.kind.is_unknown());
        assert_eq!(positioning.top, Some(Offset::Scale(0.0)));
    }

    #[test]
    fn test_unknown_values_are_written_back_unchanged() {
        let json = serde_json::json!({
            "type": "masonry",
            "direction": "col",
            "align": "safe-center",
            "gap": 4
        });
        let layout: LayoutDescriptor = serde_json::from_value(json).unwrap();
        assert_eq!(layout.kind, LayoutType::Unknown("masonry".to_string()));
        assert_eq!(layout.direction, Some(FlexDirection::Column));
        assert_eq!(layout.align, Some(Align::Unknown("safe-center".to_string())));

        assert_eq!(
            serde_json::to_value(&layout).unwrap(),
            serde_json::json!({
                "type": "masonry",
                "direction": "column",
                "align": "safe-center",
                "gap": 4
            })
        );
    }

    #[test]
    fn test_open_enum_string_forms() {
        assert_eq!(Rounded::parse("2xl"), Rounded::Xxl);
        assert_eq!(Shadow::Xxl.to_string(), "2xl");
        assert_eq!(LayoutType::InlineFlex.as_str(), "inline-flex");
        assert_eq!(String::from(Shadow::Unknown("glow".to_string())), "glow");
        assert!(!PositionType::default().is_unknown());
    }

    #[test]
    fn test_offset_accepts_numbers_and_keywords() {
        let positioning: PositioningDescriptor =
            serde_json::from_str(r#"{"type": "absolute", "left": "1/2", "right": -4}"#).unwrap();
        assert_eq!(positioning.left, Some(Offset::Keyword("1/2".to_string())));
        assert_eq!(positioning.right, Some(Offset::Scale(-4.0)));
    }

    #[test]
    fn test_flex_direction_accepts_col_alias() {
        let layout: LayoutDescriptor =
            serde_json::from_str(r#"{"type": "flex", "direction": "col"}"#).unwrap();
        assert_eq!(layout.direction, Some(FlexDirection::Column));
    }

    #[test]
    fn test_responsive_iterates_in_canonical_order() {
        let responsive: ResponsiveDescriptor =
            serde_json::from_str(r#"{"lg": {"hidden": false}, "base": {"hidden": true}}"#)
                .unwrap();
        let keys: Vec<_> = responsive.overrides.keys().cloned().collect();
        assert_eq!(keys, vec![BreakpointKey::Base, BreakpointKey::Lg]);
    }

    #[test]
    fn test_styling_skips_default_fields_when_serialized() {
        let styling = StylingDescriptor {
            background: Some("white".to_string()),
            border_bottom: true,
            ..StylingDescriptor::default()
        };
        let json = serde_json::to_value(&styling).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"background": "white", "borderBottom": true})
        );
    }
}
