//! Built-in component templates offered by the library panel.

use std::fmt;
use std::str::FromStr;

use crate::models::{
    Align, BreakpointKey, ComponentDescriptor, FlexDirection, Justify, LayoutDescriptor,
    LayoutType, PositionType, PositioningDescriptor, ResponsiveDescriptor, ResponsiveOverride,
    SemanticTag, Shadow, StylingDescriptor,
};

/// A pre-filled component the user can drop onto the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentTemplate {
    /// Sticky page header
    Header,
    /// Horizontal navigation bar
    Navbar,
    /// Side column, hidden on small screens
    Sidebar,
    /// Full-height introduction section
    Hero,
    /// Centered main content column
    Content,
    /// Page footer
    Footer,
}

impl ComponentTemplate {
    /// Returns every template in library order.
    pub const fn all() -> &'static [Self] {
        &[
            Self::Header,
            Self::Navbar,
            Self::Sidebar,
            Self::Hero,
            Self::Content,
            Self::Footer,
        ]
    }

    /// Template key as used on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Navbar => "navbar",
            Self::Sidebar => "sidebar",
            Self::Hero => "hero",
            Self::Content => "content",
            Self::Footer => "footer",
        }
    }

    /// Component name given to new instances.
    pub const fn default_name(self) -> &'static str {
        match self {
            Self::Header => "Header",
            Self::Navbar => "Navbar",
            Self::Sidebar => "Sidebar",
            Self::Hero => "Hero",
            Self::Content => "Content",
            Self::Footer => "Footer",
        }
    }

    /// One-line description for listings.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Header => "Sticky header with space-between flex row",
            Self::Navbar => "Navigation links in a centered row",
            Self::Sidebar => "Vertical column, shown from md upwards",
            Self::Hero => "Full-height centered introduction",
            Self::Content => "Centered max-width content column",
            Self::Footer => "Bordered footer row",
        }
    }

    /// Creates a component from this template under its default name.
    pub fn instantiate(self) -> ComponentDescriptor {
        self.instantiate_as(self.default_name())
    }

    /// Creates a component from this template with a custom name.
    ///
    /// Every call yields a fresh id.
    pub fn instantiate_as(self, name: &str) -> ComponentDescriptor {
        match self {
            Self::Header => ComponentDescriptor::new(name, SemanticTag::Header)
                .with_positioning(
                    PositioningDescriptor::new(PositionType::Sticky)
                        .with_top(0)
                        .with_z_index(40),
                )
                .with_layout(LayoutDescriptor {
                    padding_x: Some(6),
                    padding_y: Some(4),
                    ..LayoutDescriptor::new(LayoutType::Flex)
                        .with_justify(Justify::Between)
                        .with_align(Align::Center)
                })
                .with_styling(StylingDescriptor {
                    background: Some("white".to_string()),
                    border_bottom: true,
                    shadow: Some(Shadow::Sm),
                    ..StylingDescriptor::default()
                })
                .with_prop("title", "My Site"),
            Self::Navbar => ComponentDescriptor::new(name, SemanticTag::Nav)
                .with_layout(
                    LayoutDescriptor::new(LayoutType::Flex)
                        .with_direction(FlexDirection::Row)
                        .with_align(Align::Center)
                        .with_gap(6),
                )
                .with_styling(StylingDescriptor {
                    text_color: Some("gray-700".to_string()),
                    ..StylingDescriptor::default()
                }),
            Self::Sidebar => ComponentDescriptor::new(name, SemanticTag::Aside)
                .with_layout(
                    LayoutDescriptor::new(LayoutType::Flex)
                        .with_direction(FlexDirection::Column)
                        .with_gap(2)
                        .with_padding(4),
                )
                .with_styling(StylingDescriptor {
                    background: Some("gray-50".to_string()),
                    border_right: true,
                    ..StylingDescriptor::default()
                })
                .with_responsive(
                    ResponsiveDescriptor::new()
                        .with(BreakpointKey::Base, ResponsiveOverride::visibility(true))
                        .with(BreakpointKey::Md, ResponsiveOverride::visibility(false)),
                ),
            Self::Hero => ComponentDescriptor::new(name, SemanticTag::Section)
                .with_layout(LayoutDescriptor {
                    min_height_screen: true,
                    ..LayoutDescriptor::new(LayoutType::Flex)
                        .with_direction(FlexDirection::Column)
                        .with_justify(Justify::Center)
                        .with_align(Align::Center)
                        .with_padding(8)
                })
                .with_styling(StylingDescriptor {
                    background: Some("slate-900".to_string()),
                    text_color: Some("white".to_string()),
                    ..StylingDescriptor::default()
                })
                .with_prop("headline", "Build something great"),
            Self::Content => ComponentDescriptor::new(name, SemanticTag::Main).with_layout(
                LayoutDescriptor {
                    max_width: Some("7xl".to_string()),
                    centered: true,
                    ..LayoutDescriptor::new(LayoutType::Block).with_padding(6)
                },
            ),
            Self::Footer => ComponentDescriptor::new(name, SemanticTag::Footer)
                .with_layout(
                    LayoutDescriptor::new(LayoutType::Flex)
                        .with_justify(Justify::Between)
                        .with_padding(6),
                )
                .with_styling(StylingDescriptor {
                    border_top: true,
                    text_color: Some("gray-500".to_string()),
                    ..StylingDescriptor::default()
                }),
        }
    }
}

impl fmt::Display for ComponentTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentTemplate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|template| template.as_str() == s)
            .ok_or_else(|| {
                let names: Vec<_> = Self::all().iter().map(|t| t.as_str()).collect();
                format!("Unknown template '{s}'. Available: {}", names.join(", "))
            })
    }
}
