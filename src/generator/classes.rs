//! Utility-class synthesis from style descriptors.
//!
//! Every function here is pure: the same descriptor always yields the same
//! space-separated class string. Unknown descriptor values contribute nothing
//! instead of failing, so partially understood schemas still generate.

use crate::models::{
    Align, BreakpointDescriptor, BreakpointKey, ComponentDescriptor, FlexDirection, Justify,
    LayoutDescriptor, LayoutType, Offset, PositionType, PositioningDescriptor,
    ResponsiveDescriptor, ResponsiveOverride, Rounded, Shadow, StylingDescriptor,
};
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Z-index steps available without an arbitrary value.
const Z_INDEX_SCALE: [i32; 6] = [0, 10, 20, 30, 40, 50];

/// Minimum widths of the prefixed breakpoints, narrowest first.
const PREFIX_WIDTHS: [(u32, &str); 5] = [
    (640, "sm:"),
    (768, "md:"),
    (1024, "lg:"),
    (1280, "xl:"),
    (1536, "2xl:"),
];

/// Translates a positioning descriptor into classes.
///
/// `fixed` with `top: 0, left: 0` yields `"fixed top-0 left-0"`. Offsets and
/// stacking order are ignored for `static` elements.
pub fn generate_positioning_classes(positioning: &PositioningDescriptor) -> String {
    let keyword = match positioning.kind {
        PositionType::Static => "static",
        PositionType::Relative => "relative",
        PositionType::Absolute => "absolute",
        PositionType::Fixed => "fixed",
        PositionType::Sticky => "sticky",
        PositionType::Unknown(_) => return String::new(),
    };

    let mut tokens = vec![keyword.to_string()];

    if positioning.kind != PositionType::Static {
        let edges = [
            ("top", &positioning.top),
            ("right", &positioning.right),
            ("bottom", &positioning.bottom),
            ("left", &positioning.left),
        ];
        for (edge, offset) in edges {
            if let Some(token) = offset.as_ref().and_then(|o| offset_token(edge, o)) {
                tokens.push(token);
            }
        }

        if let Some(z_index) = positioning.z_index {
            tokens.push(z_index_token(z_index));
        }
    }

    tokens.join(" ")
}

/// Translates a layout descriptor into classes.
///
/// Direction and wrapping only apply to flex containers, column and row
/// counts only to grids; alignment and gap apply to both.
pub fn generate_layout_classes(layout: &LayoutDescriptor) -> String {
    let Some(display) = display_token(&layout.kind) else {
        return String::new();
    };

    let mut tokens = vec![display.to_string()];
    let is_flex = matches!(layout.kind, LayoutType::Flex | LayoutType::InlineFlex);
    let is_grid = layout.kind == LayoutType::Grid;

    if is_flex {
        if let Some(token) = layout.direction.as_ref().and_then(direction_token) {
            tokens.push(token.to_string());
        }
        if layout.wrap {
            tokens.push("flex-wrap".to_string());
        }
    }

    if is_grid {
        if let Some(token) = layout.columns.and_then(|n| grid_track_token("grid-cols", n)) {
            tokens.push(token);
        }
        if let Some(token) = layout.rows.and_then(|n| grid_track_token("grid-rows", n)) {
            tokens.push(token);
        }
    }

    if is_flex || is_grid {
        if let Some(token) = layout.align.as_ref().and_then(align_token) {
            tokens.push(token.to_string());
        }
        if let Some(token) = layout.justify.as_ref().and_then(justify_token) {
            tokens.push(token.to_string());
        }
        if let Some(gap) = layout.gap {
            tokens.push(format!("gap-{gap}"));
        }
    }

    if let Some(padding) = layout.padding {
        tokens.push(format!("p-{padding}"));
    }
    if let Some(padding) = layout.padding_x {
        tokens.push(format!("px-{padding}"));
    }
    if let Some(padding) = layout.padding_y {
        tokens.push(format!("py-{padding}"));
    }
    if let Some(max_width) = layout.max_width.as_deref().and_then(clean_value) {
        tokens.push(format!("max-w-{max_width}"));
    }
    if layout.centered {
        tokens.push("mx-auto".to_string());
    }
    if layout.full_width {
        tokens.push("w-full".to_string());
    }
    if layout.min_height_screen {
        tokens.push("min-h-screen".to_string());
    }

    tokens.join(" ")
}

/// Translates a styling descriptor into classes.
pub fn generate_styling_classes(styling: &StylingDescriptor) -> String {
    let mut tokens = Vec::new();

    if let Some(token) = styling.background.as_deref().and_then(|c| color_token("bg", c)) {
        tokens.push(token);
    }
    if let Some(token) = styling.text_color.as_deref().and_then(|c| color_token("text", c)) {
        tokens.push(token);
    }

    let borders = [
        (styling.border, "border"),
        (styling.border_top, "border-t"),
        (styling.border_right, "border-r"),
        (styling.border_bottom, "border-b"),
        (styling.border_left, "border-l"),
    ];
    for (enabled, token) in borders {
        if enabled {
            tokens.push(token.to_string());
        }
    }
    if let Some(token) = styling
        .border_color
        .as_deref()
        .and_then(|c| color_token("border", c))
    {
        tokens.push(token);
    }

    if let Some(token) = styling.rounded.as_ref().and_then(rounded_token) {
        tokens.push(token.to_string());
    }
    if let Some(token) = styling.shadow.as_ref().and_then(shadow_token) {
        tokens.push(token.to_string());
    }
    if let Some(opacity) = styling.opacity {
        tokens.push(opacity_token(opacity));
    }
    if styling.backdrop_blur {
        tokens.push("backdrop-blur".to_string());
    }

    tokens.join(" ")
}

/// Translates per-breakpoint overrides into prefixed classes.
///
/// Keys are resolved through `breakpoints` (see [`resolve_breakpoint`]) and
/// visited narrowest first regardless of how the schema ordered them; keys
/// that resolve to nothing are skipped. `hidden: false` shows the element
/// again with the display of `shown_as`, falling back to `block`.
pub fn generate_responsive_classes(
    responsive: &ResponsiveDescriptor,
    breakpoints: &[BreakpointDescriptor],
    shown_as: &LayoutType,
) -> String {
    let show = display_token(shown_as).unwrap_or("block");

    let mut resolved: Vec<(ResolvedBreakpoint, &ResponsiveOverride)> = responsive
        .overrides
        .iter()
        .filter_map(|(key, overrides)| {
            resolve_breakpoint(key, breakpoints).map(|resolved| (resolved, overrides))
        })
        .collect();
    resolved.sort_by_key(|(breakpoint, _)| breakpoint.min_width);

    let mut tokens = Vec::new();
    for (breakpoint, overrides) in &resolved {
        let prefix = breakpoint.prefix.as_str();

        if let Some(hidden) = overrides.hidden {
            let display = if hidden { "hidden" } else { show };
            tokens.push(format!("{prefix}{display}"));
        }
        if let Some(token) = overrides.direction.as_ref().and_then(direction_token) {
            tokens.push(format!("{prefix}{token}"));
        }
        if let Some(token) = overrides
            .columns
            .and_then(|n| grid_track_token("grid-cols", n))
        {
            tokens.push(format!("{prefix}{token}"));
        }
        if let Some(gap) = overrides.gap {
            tokens.push(format!("{prefix}gap-{gap}"));
        }
        if let Some(padding) = overrides.padding {
            tokens.push(format!("{prefix}p-{padding}"));
        }
    }

    tokens.join(" ")
}

/// Class prefix a responsive key resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBreakpoint {
    /// Width the prefix starts applying at
    pub min_width: u32,
    /// Variant prefix including the colon, empty for the base width
    pub prefix: String,
}

impl ResolvedBreakpoint {
    fn base() -> Self {
        Self {
            min_width: 0,
            prefix: String::new(),
        }
    }

    fn at(min_width: u32) -> Self {
        let prefix = PREFIX_WIDTHS
            .iter()
            .find(|(width, _)| *width == min_width)
            .map_or_else(
                || format!("min-[{min_width}px]:"),
                |(_, prefix)| (*prefix).to_string(),
            );
        Self { min_width, prefix }
    }
}

/// Maps a responsive key onto a class prefix.
///
/// `base`, `sm`, `md`, `lg`, `xl` and `2xl` always use their own prefix.
/// Any other key must name a breakpoint declared in `breakpoints`: a
/// `minWidth` of 0, or the narrowest declared breakpoint when it sits below
/// `sm`, is the unprefixed base; a width matching a standard prefix uses that
/// prefix; anything else becomes an arbitrary `min-[Npx]:` variant.
pub fn resolve_breakpoint(
    key: &BreakpointKey,
    breakpoints: &[BreakpointDescriptor],
) -> Option<ResolvedBreakpoint> {
    if *key == BreakpointKey::Base {
        return Some(ResolvedBreakpoint::base());
    }
    if let Some(prefix) = key.prefix() {
        let min_width = PREFIX_WIDTHS
            .iter()
            .find(|(_, known)| *known == prefix)
            .map_or(0, |(width, _)| *width);
        return Some(ResolvedBreakpoint {
            min_width,
            prefix: prefix.to_string(),
        });
    }

    let declared = breakpoints.iter().find(|bp| bp.name == key.as_str())?;
    let narrowest = breakpoints.iter().map(|bp| bp.min_width).min()?;
    let below_sm = declared.min_width < PREFIX_WIDTHS[0].0;

    if declared.min_width == 0 || (below_sm && declared.min_width == narrowest) {
        Some(ResolvedBreakpoint::base())
    } else {
        Some(ResolvedBreakpoint::at(declared.min_width))
    }
}

/// Combines all four categories for a component.
///
/// Order is positioning, layout, styling, responsive. Repeated tokens keep
/// their first position.
pub fn generate_component_classes(
    component: &ComponentDescriptor,
    breakpoints: &[BreakpointDescriptor],
) -> String {
    let parts = [
        generate_positioning_classes(&component.positioning),
        generate_layout_classes(&component.layout),
        generate_styling_classes(&component.styling),
        generate_responsive_classes(&component.responsive, breakpoints, &component.layout.kind),
    ];

    dedupe_classes(parts.iter().flat_map(|part| part.split_whitespace()))
}

/// Joins tokens with single spaces, dropping repeats but keeping first-seen order.
pub fn dedupe_classes<'a>(tokens: impl IntoIterator<Item = &'a str>) -> String {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();

    for token in tokens {
        if !token.is_empty() && seen.insert(token) {
            unique.push(token);
        }
    }

    unique.join(" ")
}

/// Per-category synthesis result for one component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentClasses {
    /// Component name
    pub name: String,
    /// Positioning classes
    pub positioning: String,
    /// Layout classes
    pub layout: String,
    /// Styling classes
    pub styling: String,
    /// Responsive classes
    pub responsive: String,
    /// Merged, deduplicated class string
    pub combined: String,
}

impl ComponentClasses {
    /// Synthesizes every category for a component.
    pub fn for_component(
        component: &ComponentDescriptor,
        breakpoints: &[BreakpointDescriptor],
    ) -> Self {
        Self {
            name: component.name.clone(),
            positioning: generate_positioning_classes(&component.positioning),
            layout: generate_layout_classes(&component.layout),
            styling: generate_styling_classes(&component.styling),
            responsive: generate_responsive_classes(
                &component.responsive,
                breakpoints,
                &component.layout.kind,
            ),
            combined: generate_component_classes(component, breakpoints),
        }
    }
}

fn offset_token(edge: &str, offset: &Offset) -> Option<String> {
    match offset {
        Offset::Scale(value) => {
            if !value.is_finite() {
                return None;
            }
            let magnitude = format_number(value.abs());
            if *value < 0.0 {
                Some(format!("-{edge}-{magnitude}"))
            } else {
                Some(format!("{edge}-{magnitude}"))
            }
        }
        Offset::Keyword(raw) => {
            let value = clean_value(raw)?;
            match value.strip_prefix('-') {
                Some(rest) if is_scale_value(rest) => Some(format!("-{edge}-{rest}")),
                _ => Some(format!("{edge}-{}", scale_or_arbitrary(value))),
            }
        }
    }
}

fn z_index_token(z_index: i32) -> String {
    let negated = z_index.checked_neg().filter(|n| Z_INDEX_SCALE.contains(n));

    if Z_INDEX_SCALE.contains(&z_index) {
        format!("z-{z_index}")
    } else if let Some(magnitude) = negated {
        format!("-z-{magnitude}")
    } else {
        format!("z-[{z_index}]")
    }
}

const fn display_token(kind: &LayoutType) -> Option<&'static str> {
    match kind {
        LayoutType::Block => Some("block"),
        LayoutType::Flex => Some("flex"),
        LayoutType::InlineFlex => Some("inline-flex"),
        LayoutType::Grid => Some("grid"),
        LayoutType::Unknown(_) => None,
    }
}

const fn direction_token(direction: &FlexDirection) -> Option<&'static str> {
    match direction {
        FlexDirection::Row => Some("flex-row"),
        FlexDirection::Column => Some("flex-col"),
        FlexDirection::RowReverse => Some("flex-row-reverse"),
        FlexDirection::ColumnReverse => Some("flex-col-reverse"),
        FlexDirection::Unknown(_) => None,
    }
}

const fn align_token(align: &Align) -> Option<&'static str> {
    match align {
        Align::Start => Some("items-start"),
        Align::Center => Some("items-center"),
        Align::End => Some("items-end"),
        Align::Stretch => Some("items-stretch"),
        Align::Baseline => Some("items-baseline"),
        Align::Unknown(_) => None,
    }
}

const fn justify_token(justify: &Justify) -> Option<&'static str> {
    match justify {
        Justify::Start => Some("justify-start"),
        Justify::Center => Some("justify-center"),
        Justify::End => Some("justify-end"),
        Justify::Between => Some("justify-between"),
        Justify::Around => Some("justify-around"),
        Justify::Evenly => Some("justify-evenly"),
        Justify::Unknown(_) => None,
    }
}

const fn rounded_token(rounded: &Rounded) -> Option<&'static str> {
    match rounded {
        Rounded::None => Some("rounded-none"),
        Rounded::Sm => Some("rounded-sm"),
        Rounded::Default => Some("rounded"),
        Rounded::Md => Some("rounded-md"),
        Rounded::Lg => Some("rounded-lg"),
        Rounded::Xl => Some("rounded-xl"),
        Rounded::Xxl => Some("rounded-2xl"),
        Rounded::Full => Some("rounded-full"),
        Rounded::Unknown(_) => None,
    }
}

const fn shadow_token(shadow: &Shadow) -> Option<&'static str> {
    match shadow {
        Shadow::None => Some("shadow-none"),
        Shadow::Sm => Some("shadow-sm"),
        Shadow::Default => Some("shadow"),
        Shadow::Md => Some("shadow-md"),
        Shadow::Lg => Some("shadow-lg"),
        Shadow::Xl => Some("shadow-xl"),
        Shadow::Xxl => Some("shadow-2xl"),
        Shadow::Inner => Some("shadow-inner"),
        Shadow::Unknown(_) => None,
    }
}

fn opacity_token(opacity: u8) -> String {
    let opacity = opacity.min(100);
    if opacity % 5 == 0 {
        format!("opacity-{opacity}")
    } else {
        format!("opacity-[.{opacity:02}]")
    }
}

fn grid_track_token(prefix: &str, count: u32) -> Option<String> {
    match count {
        0 => None,
        1..=12 => Some(format!("{prefix}-{count}")),
        _ => Some(format!("{prefix}-[repeat({count},minmax(0,1fr))]")),
    }
}

/// Color tokens: palette names pass through, raw CSS colors become arbitrary values.
fn color_token(prefix: &str, raw: &str) -> Option<String> {
    let value = clean_value(raw)?;
    if value.starts_with('#') || value.contains('(') {
        Some(format!("{prefix}-[{value}]"))
    } else {
        Some(format!("{prefix}-{value}"))
    }
}

/// Trims a user-supplied value; values that would split into several tokens are rejected.
fn clean_value(raw: &str) -> Option<&str> {
    let value = raw.trim();
    if value.is_empty() || value.contains(char::is_whitespace) {
        None
    } else {
        Some(value)
    }
}

fn scale_or_arbitrary(value: &str) -> String {
    if is_scale_value(value) {
        value.to_string()
    } else {
        format!("[{value}]")
    }
}

fn is_scale_value(value: &str) -> bool {
    static SCALE: OnceLock<Regex> = OnceLock::new();
    SCALE
        .get_or_init(|| {
            Regex::new(r"^(\d+(\.\d+)?|\d+/\d+|auto|full|px|screen)$")
                .unwrap_or_else(|e| unreachable!("scale pattern is valid: {e}"))
        })
        .is_match(value)
}

#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value < 1e9 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SemanticTag;

    fn responsive_classes(responsive: &ResponsiveDescriptor) -> String {
        let defaults = BreakpointDescriptor::defaults();
        generate_responsive_classes(responsive, &defaults, &LayoutType::Block)
    }

    fn component_classes(component: &ComponentDescriptor) -> String {
        generate_component_classes(component, &BreakpointDescriptor::defaults())
    }

    fn device_breakpoints() -> Vec<BreakpointDescriptor> {
        vec![
            BreakpointDescriptor::new("mobile", 0),
            BreakpointDescriptor::new("tablet", 768),
            BreakpointDescriptor::new("desktop", 1024),
        ]
    }

    fn global_header() -> ComponentDescriptor {
        ComponentDescriptor::new("GlobalHeader", SemanticTag::Header)
            .with_positioning(
                PositioningDescriptor::new(PositionType::Fixed)
                    .with_top(0)
                    .with_left(0)
                    .with_right(0),
            )
            .with_layout(LayoutDescriptor::new(LayoutType::Flex).with_justify(Justify::Between))
            .with_styling(StylingDescriptor {
                background: Some("white".to_string()),
                border_bottom: true,
                ..StylingDescriptor::default()
            })
    }

    fn tokens(classes: &str) -> Vec<&str> {
        classes.split_whitespace().collect()
    }

    #[test]
    fn test_fixed_top_zero() {
        let positioning = PositioningDescriptor::new(PositionType::Fixed).with_top(0);
        let classes = generate_positioning_classes(&positioning);
        assert_eq!(classes, "fixed top-0");
    }

    #[test]
    fn test_positioning_offsets_in_edge_order() {
        let positioning = PositioningDescriptor::new(PositionType::Absolute)
            .with_left("1/2")
            .with_bottom(-4)
            .with_top("10px")
            .with_z_index(50);
        assert_eq!(
            generate_positioning_classes(&positioning),
            "absolute top-[10px] -bottom-4 left-1/2 z-50"
        );
    }

    #[test]
    fn test_static_ignores_offsets() {
        let positioning = PositioningDescriptor::new(PositionType::Static)
            .with_top(4)
            .with_z_index(10);
        assert_eq!(generate_positioning_classes(&positioning), "static");
    }

    #[test]
    fn test_z_index_outside_scale_is_arbitrary() {
        assert_eq!(z_index_token(15), "z-[15]");
        assert_eq!(z_index_token(-10), "-z-10");
    }

    #[test]
    fn test_z_index_extremes() {
        assert_eq!(z_index_token(i32::MIN), "z-[-2147483648]");
        assert_eq!(z_index_token(i32::MAX), "z-[2147483647]");

        let component = ComponentDescriptor::new("Overlay", SemanticTag::Div)
            .with_positioning(
                PositioningDescriptor::new(PositionType::Fixed).with_z_index(i32::MIN),
            );
        assert_eq!(component_classes(&component), "fixed z-[-2147483648] block");
    }

    #[test]
    fn test_fractional_offset() {
        let positioning = PositioningDescriptor::new(PositionType::Relative).with_top(
            Offset::Scale(0.5),
        );
        assert_eq!(generate_positioning_classes(&positioning), "relative top-0.5");
    }

    #[test]
    fn test_unknown_position_type_is_empty() {
        let positioning =
            PositioningDescriptor::new(PositionType::Unknown("floating".to_string())).with_top(0);
        assert_eq!(generate_positioning_classes(&positioning), "");
    }

    #[test]
    fn test_grid_layout_includes_grid() {
        let layout = LayoutDescriptor::new(LayoutType::Grid)
            .with_columns(3)
            .with_gap(4);
        let classes = generate_layout_classes(&layout);
        assert!(tokens(&classes).contains(&"grid"));
        assert_eq!(classes, "grid grid-cols-3 gap-4");
    }

    #[test]
    fn test_grid_with_many_columns_uses_arbitrary_template() {
        let layout = LayoutDescriptor::new(LayoutType::Grid).with_columns(16);
        assert_eq!(
            generate_layout_classes(&layout),
            "grid grid-cols-[repeat(16,minmax(0,1fr))]"
        );
    }

    #[test]
    fn test_flex_layout_tokens() {
        let layout = LayoutDescriptor {
            wrap: true,
            padding_x: Some(6),
            centered: true,
            max_width: Some("7xl".to_string()),
            ..LayoutDescriptor::new(LayoutType::Flex)
                .with_direction(FlexDirection::Column)
                .with_align(Align::Center)
                .with_justify(Justify::Between)
        };
        assert_eq!(
            generate_layout_classes(&layout),
            "flex flex-col flex-wrap items-center justify-between px-6 max-w-7xl mx-auto"
        );
    }

    #[test]
    fn test_block_layout_ignores_flex_fields() {
        let layout = LayoutDescriptor::new(LayoutType::Block)
            .with_justify(Justify::Center)
            .with_columns(2)
            .with_padding(4);
        assert_eq!(generate_layout_classes(&layout), "block p-4");
    }

    #[test]
    fn test_unknown_layout_type_is_empty() {
        let layout =
            LayoutDescriptor::new(LayoutType::Unknown("masonry".to_string())).with_gap(2);
        assert_eq!(generate_layout_classes(&layout), "");
    }

    #[test]
    fn test_styling_tokens() {
        let styling = StylingDescriptor {
            background: Some("slate-900".to_string()),
            text_color: Some("#f8fafc".to_string()),
            border: true,
            border_color: Some("slate-700".to_string()),
            rounded: Some(Rounded::Lg),
            shadow: Some(Shadow::Default),
            opacity: Some(90),
            backdrop_blur: true,
            ..StylingDescriptor::default()
        };
        assert_eq!(
            generate_styling_classes(&styling),
            "bg-slate-900 text-[#f8fafc] border border-slate-700 rounded-lg shadow opacity-90 backdrop-blur"
        );
    }

    #[test]
    fn test_styling_rejects_values_with_whitespace() {
        let styling = StylingDescriptor {
            background: Some("light blue".to_string()),
            text_color: Some("   ".to_string()),
            ..StylingDescriptor::default()
        };
        assert_eq!(generate_styling_classes(&styling), "");
    }

    #[test]
    fn test_opacity_off_scale() {
        assert_eq!(opacity_token(33), "opacity-[.33]");
        assert_eq!(opacity_token(7), "opacity-[.07]");
        assert_eq!(opacity_token(250), "opacity-100");
    }

    #[test]
    fn test_responsive_visibility_pair() {
        let responsive = ResponsiveDescriptor::new()
            .with(BreakpointKey::Lg, ResponsiveOverride::visibility(false))
            .with(BreakpointKey::Base, ResponsiveOverride::visibility(true));
        assert_eq!(responsive_classes(&responsive), "hidden lg:block");
    }

    #[test]
    fn test_responsive_order_independent_of_input() {
        let a: ResponsiveDescriptor = serde_json::from_str(
            r#"{"xl": {"columns": 4}, "sm": {"direction": "column"}, "md": {"padding": 8}}"#,
        )
        .unwrap();
        let b: ResponsiveDescriptor = serde_json::from_str(
            r#"{"md": {"padding": 8}, "xl": {"columns": 4}, "sm": {"direction": "column"}}"#,
        )
        .unwrap();
        let expected = "sm:flex-col md:p-8 xl:grid-cols-4";
        assert_eq!(responsive_classes(&a), expected);
        assert_eq!(responsive_classes(&b), expected);
    }

    #[test]
    fn test_responsive_skips_unknown_breakpoints() {
        let responsive = ResponsiveDescriptor::new()
            .with(BreakpointKey::parse("watch"), ResponsiveOverride::visibility(true))
            .with(BreakpointKey::Xxl, ResponsiveOverride::visibility(true));
        assert_eq!(responsive_classes(&responsive), "2xl:hidden");
    }

    #[test]
    fn test_global_header_scenario() {
        let classes = component_classes(&global_header());
        let tokens = tokens(&classes);
        for expected in [
            "fixed",
            "top-0",
            "left-0",
            "right-0",
            "flex",
            "justify-between",
            "bg-white",
            "border-b",
        ] {
            assert!(tokens.contains(&expected), "missing {expected} in {classes}");
        }
    }

    #[test]
    fn test_responsive_scenario_contains_visibility_pair() {
        let component = ComponentDescriptor::new("Sidebar", SemanticTag::Aside).with_responsive(
            ResponsiveDescriptor::new()
                .with(BreakpointKey::Lg, ResponsiveOverride::visibility(false))
                .with(BreakpointKey::Base, ResponsiveOverride::visibility(true)),
        );
        let classes = component_classes(&component);
        let tokens = tokens(&classes);
        assert!(tokens.contains(&"hidden"));
        assert!(tokens.contains(&"lg:block"));
    }

    #[test]
    fn test_component_classes_have_no_duplicates() {
        // layout "block" and base visibility "block" collide
        let component = ComponentDescriptor::new("Panel", SemanticTag::Section)
            .with_layout(LayoutDescriptor::new(LayoutType::Block))
            .with_responsive(
                ResponsiveDescriptor::new()
                    .with(BreakpointKey::Base, ResponsiveOverride::visibility(false)),
            );
        let classes = component_classes(&component);
        assert_eq!(classes, "static block");

        let tokens = tokens(&classes);
        let unique: HashSet<_> = tokens.iter().collect();
        assert_eq!(unique.len(), tokens.len());
    }

    #[test]
    fn test_component_classes_are_trimmed() {
        let component = ComponentDescriptor::new("Ghost", SemanticTag::Div)
            .with_positioning(PositioningDescriptor::new(PositionType::Unknown(
                "floating".to_string(),
            )))
            .with_styling(StylingDescriptor {
                shadow: Some(Shadow::Md),
                ..StylingDescriptor::default()
            });
        let classes = component_classes(&component);
        assert_eq!(classes, "block shadow-md");
        assert_eq!(classes, classes.trim());
        assert!(!classes.contains("  "));
    }

    #[test]
    fn test_synthesis_is_idempotent() {
        let component = global_header();
        let first = component_classes(&component);
        let second = component_classes(&component);
        assert_eq!(first, second);
        assert_eq!(
            ComponentClasses::for_component(&component, &[]),
            ComponentClasses::for_component(&component, &[])
        );
    }

    #[test]
    fn test_dedupe_keeps_first_occurrence() {
        assert_eq!(dedupe_classes(["b", "a", "b", "c", "a"]), "b a c");
    }

    #[test]
    fn test_show_uses_component_display() {
        let responsive = ResponsiveDescriptor::new()
            .with(BreakpointKey::Base, ResponsiveOverride::visibility(true))
            .with(BreakpointKey::Lg, ResponsiveOverride::visibility(false));
        let component = global_header().with_responsive(responsive.clone());

        let classes = component_classes(&component);
        assert!(classes.ends_with("flex justify-between bg-white border-b hidden lg:flex"));
        assert!(!tokens(&classes).contains(&"lg:block"));

        let defaults = BreakpointDescriptor::defaults();
        for (kind, shown) in [
            (LayoutType::Grid, "hidden lg:grid"),
            (LayoutType::InlineFlex, "hidden lg:inline-flex"),
            (LayoutType::Unknown("masonry".to_string()), "hidden lg:block"),
        ] {
            assert_eq!(generate_responsive_classes(&responsive, &defaults, &kind), shown);
        }
    }

    #[test]
    fn test_schema_breakpoint_names_resolve_by_width() {
        let responsive: ResponsiveDescriptor = serde_json::from_str(
            r#"{"desktop": {"hidden": false}, "mobile": {"hidden": true}, "tablet": {"columns": 2}}"#,
        )
        .unwrap();

        assert_eq!(
            generate_responsive_classes(&responsive, &device_breakpoints(), &LayoutType::Block),
            "hidden md:grid-cols-2 lg:block"
        );

        let component = ComponentDescriptor::new("Sidebar", SemanticTag::Aside)
            .with_responsive(responsive);
        let classes = generate_component_classes(&component, &device_breakpoints());
        assert_eq!(classes, "static block hidden md:grid-cols-2 lg:block");
    }

    #[test]
    fn test_undeclared_schema_names_are_skipped() {
        let responsive: ResponsiveDescriptor =
            serde_json::from_str(r#"{"desktop": {"hidden": true}}"#).unwrap();
        assert_eq!(responsive_classes(&responsive), "");
    }

    #[test]
    fn test_resolve_breakpoint() {
        let mut breakpoints = device_breakpoints();
        breakpoints.push(BreakpointDescriptor::new("wide", 1440));

        let prefix = |name: &str| {
            resolve_breakpoint(&BreakpointKey::parse(name), &breakpoints).map(|bp| bp.prefix)
        };
        assert_eq!(prefix("mobile").as_deref(), Some(""));
        assert_eq!(prefix("tablet").as_deref(), Some("md:"));
        assert_eq!(prefix("desktop").as_deref(), Some("lg:"));
        assert_eq!(prefix("wide").as_deref(), Some("min-[1440px]:"));
        assert_eq!(prefix("xl").as_deref(), Some("xl:"));
        assert_eq!(prefix("watch"), None);

        let phones = vec![
            BreakpointDescriptor::new("phone", 360),
            BreakpointDescriptor::new("phablet", 480),
        ];
        let phone = resolve_breakpoint(&BreakpointKey::parse("phone"), &phones).unwrap();
        let phablet = resolve_breakpoint(&BreakpointKey::parse("phablet"), &phones).unwrap();
        assert_eq!(phone.prefix, "");
        assert_eq!(phablet.prefix, "min-[480px]:");
        assert_eq!(phablet.min_width, 480);
    }

    #[test]
    fn test_wider_arbitrary_breakpoint_comes_after_standard_ones() {
        let breakpoints = vec![
            BreakpointDescriptor::new("compact", 900),
            BreakpointDescriptor::new("lg", 1024),
        ];
        let responsive: ResponsiveDescriptor =
            serde_json::from_str(r#"{"lg": {"gap": 8}, "compact": {"gap": 4}, "sm": {"gap": 2}}"#)
                .unwrap();
        assert_eq!(
            generate_responsive_classes(&responsive, &breakpoints, &LayoutType::Grid),
            "sm:gap-2 min-[900px]:gap-4 lg:gap-8"
        );
    }
}
