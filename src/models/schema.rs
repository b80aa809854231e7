//! Layout schema document and component descriptors.

use crate::constants::SCHEMA_VERSION;
use crate::models::descriptors::{
    LayoutDescriptor, PositioningDescriptor, ResponsiveDescriptor, StylingDescriptor,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use uuid::Uuid;

/// Wrapping element of a generated component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticTag {
    /// `<header>`
    Header,
    /// `<nav>`
    Nav,
    /// `<main>`
    Main,
    /// `<aside>`
    Aside,
    /// `<footer>`
    Footer,
    /// `<section>`
    Section,
    /// `<article>`
    Article,
    /// `<div>`
    #[default]
    Div,
}

impl SemanticTag {
    /// All tags in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Header,
        Self::Nav,
        Self::Main,
        Self::Aside,
        Self::Footer,
        Self::Section,
        Self::Article,
        Self::Div,
    ];

    /// Returns the element name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Nav => "nav",
            Self::Main => "main",
            Self::Aside => "aside",
            Self::Footer => "footer",
            Self::Section => "section",
            Self::Article => "article",
            Self::Div => "div",
        }
    }
}

impl fmt::Display for SemanticTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SemanticTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "Unknown semantic tag '{s}'. Expected one of: {}",
                    Self::ALL.map(Self::as_str).join(", ")
                )
            })
    }
}

/// One generated UI component.
///
/// # Validation
///
/// - `name` must match `^[A-Z][a-zA-Z0-9]*$` and be unique within a schema
/// - `id` is assigned at creation and never changes
/// - `props` keys must be valid JavaScript identifiers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDescriptor {
    /// Stable identity (UUID v4)
    #[serde(default = "new_component_id")]
    pub id: String,
    /// PascalCase component and file name
    pub name: String,
    /// Wrapping element
    #[serde(default)]
    pub semantic_tag: SemanticTag,
    /// Default property values
    #[serde(default)]
    pub props: Map<String, Value>,
    /// Placement on the page
    #[serde(default)]
    pub positioning: PositioningDescriptor,
    /// Arrangement of children
    #[serde(default)]
    pub layout: LayoutDescriptor,
    /// Visual treatment
    #[serde(default)]
    pub styling: StylingDescriptor,
    /// Per-breakpoint overrides
    #[serde(default)]
    pub responsive: ResponsiveDescriptor,
}

impl ComponentDescriptor {
    /// Creates a component with a fresh id and empty descriptors.
    ///
    /// The name is not validated here; editing collaborators run it through
    /// [`crate::validation::validate_component_name`] before inserting.
    pub fn new(name: impl Into<String>, semantic_tag: SemanticTag) -> Self {
        Self {
            id: new_component_id(),
            name: name.into(),
            semantic_tag,
            props: Map::new(),
            positioning: PositioningDescriptor::default(),
            layout: LayoutDescriptor::default(),
            styling: StylingDescriptor::default(),
            responsive: ResponsiveDescriptor::default(),
        }
    }

    /// Sets the positioning descriptor.
    #[must_use]
    pub fn with_positioning(mut self, positioning: PositioningDescriptor) -> Self {
        self.positioning = positioning;
        self
    }

    /// Sets the layout descriptor.
    #[must_use]
    pub fn with_layout(mut self, layout: LayoutDescriptor) -> Self {
        self.layout = layout;
        self
    }

    /// Sets the styling descriptor.
    #[must_use]
    pub fn with_styling(mut self, styling: StylingDescriptor) -> Self {
        self.styling = styling;
        self
    }

    /// Sets the responsive descriptor.
    #[must_use]
    pub fn with_responsive(mut self, responsive: ResponsiveDescriptor) -> Self {
        self.responsive = responsive;
        self
    }

    /// Adds a default property value.
    #[must_use]
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }
}

fn new_component_id() -> String {
    Uuid::new_v4().to_string()
}

/// Named viewport threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakpointDescriptor {
    /// Breakpoint name, also the responsive key (e.g. `"md"`)
    pub name: String,
    /// Minimum viewport width in pixels
    pub min_width: u32,
    /// Human-readable label (e.g. `"Tablet"`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl BreakpointDescriptor {
    /// Creates a breakpoint without a label.
    pub fn new(name: impl Into<String>, min_width: u32) -> Self {
        Self {
            name: name.into(),
            min_width,
            label: None,
        }
    }

    /// Sets the display label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Default breakpoint set, ascending by width.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("sm", 640).with_label("Large Phone"),
            Self::new("md", 768).with_label("Tablet"),
            Self::new("lg", 1024).with_label("Desktop"),
            Self::new("xl", 1280).with_label("Wide"),
            Self::new("2xl", 1536).with_label("Ultra Wide"),
        ]
    }
}

/// Complete, versioned description of a layout design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSchema {
    /// Document format version (e.g. `"2.0"`)
    pub schema_version: String,
    /// Components in render order
    #[serde(default)]
    pub components: Vec<ComponentDescriptor>,
    /// Breakpoints, ascending by `min_width`
    #[serde(default = "BreakpointDescriptor::defaults")]
    pub breakpoints: Vec<BreakpointDescriptor>,
}

impl LayoutSchema {
    /// Creates an empty schema with the current version and default breakpoints.
    pub fn new() -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            components: Vec::new(),
            breakpoints: BreakpointDescriptor::defaults(),
        }
    }

    /// Parses a schema from JSON text.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serializes the schema as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Finds a component by name.
    pub fn component_by_name(&self, name: &str) -> Option<&ComponentDescriptor> {
        self.components.iter().find(|c| c.name == name)
    }

    /// Finds a component by id.
    pub fn component_by_id(&self, id: &str) -> Option<&ComponentDescriptor> {
        self.components.iter().find(|c| c.id == id)
    }

    /// Returns the breakpoints sorted ascending by width.
    pub fn sorted_breakpoints(&self) -> Vec<&BreakpointDescriptor> {
        let mut sorted: Vec<_> = self.breakpoints.iter().collect();
        sorted.sort_by_key(|bp| bp.min_width);
        sorted
    }

    /// Returns true if the schema declares a breakpoint with this name.
    pub fn declares_breakpoint(&self, name: &str) -> bool {
        self.breakpoints.iter().any(|bp| bp.name == name)
    }
}

impl Default for LayoutSchema {
    fn default() -> Self {
        Self::new()
    }
}
