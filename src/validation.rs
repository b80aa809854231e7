//! Schema validation for the editing surfaces.
//!
//! Problems found here are reported to the user while the schema is being
//! edited. Generation assumes a schema that passed these checks and treats
//! anything it still cannot represent as a [`crate::error::GenerationError`].

// Allow format! appended to String - more readable for building messages
#![allow(clippy::format_push_string)]

use crate::constants::SUPPORTED_SCHEMA_MAJOR;
use crate::generator::generate_component_classes;
use crate::generator::resolve_breakpoint;
use crate::models::{
    Align, BreakpointDescriptor, BreakpointKey, ComponentDescriptor, FlexDirection, Justify,
    LayoutSchema, Rounded, Shadow,
};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Words that cannot name a destructured parameter in module (strict) code.
const RESERVED_WORDS: &[&str] = &[
    "arguments",
    "await",
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "eval",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "implements",
    "import",
    "in",
    "instanceof",
    "interface",
    "let",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "static",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
];

/// Identifiers the generated modules declare themselves.
const GENERATED_BINDINGS: &[&str] = &["React", "Page"];

/// Import binding of the React module in every generated file.
const REACT_BINDING: &str = "React";

fn component_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Z][a-zA-Z0-9]*$")
            .unwrap_or_else(|e| unreachable!("name pattern is valid: {e}"))
    })
}

fn identifier_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$")
            .unwrap_or_else(|e| unreachable!("identifier pattern is valid: {e}"))
    })
}

/// Validation result with specific errors and warnings.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// Problems that block export
    pub errors: Vec<ValidationError>,
    /// Non-critical warnings
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    /// Creates a new empty validation report.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Returns true if there are no errors (warnings are allowed).
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Adds an error to the report.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Adds a warning to the report.
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Formats the report as a user-friendly error message.
    #[must_use]
    pub fn format_message(&self) -> String {
        let mut message = String::new();

        if !self.errors.is_empty() {
            message.push_str(&format!("❌ {} validation errors:\n", self.errors.len()));
            for (idx, error) in self.errors.iter().enumerate() {
                message.push_str(&format!("  {}. {}\n", idx + 1, error));
            }
        }

        if !self.warnings.is_empty() {
            message.push_str(&format!("\n⚠️  {} warnings:\n", self.warnings.len()));
            for (idx, warning) in self.warnings.iter().enumerate() {
                message.push_str(&format!("  {}. {}\n", idx + 1, warning));
            }
        }

        message
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Type of validation error
    pub kind: ValidationErrorKind,
    /// Component the error belongs to
    pub component: Option<String>,
    /// Human-readable error message
    pub message: String,
    /// Optional suggestion for fixing the error
    pub suggestion: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            component: None,
            message: message.into(),
            suggestion: None,
        }
    }

    /// Sets the component context.
    #[must_use]
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    /// Sets a suggestion for fixing the error.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(component) = &self.component {
            write!(f, "[{}] {}: {}", component, self.kind, self.message)?;
        } else {
            write!(f, "{}: {}", self.kind, self.message)?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n    → {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Types of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Component name is not a PascalCase identifier
    InvalidName,
    /// Two components share a name
    DuplicateName,
    /// Two components share an id
    DuplicateId,
    /// Prop key cannot be used as a parameter name
    InvalidPropKey,
    /// Breakpoint widths are not strictly ascending
    UnsortedBreakpoints,
    /// Breakpoint name declared twice
    DuplicateBreakpoint,
    /// Schema major version is not supported
    UnsupportedVersion,
    /// Component would render without any classes
    EmptyClassList,
}

impl std::fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName => write!(f, "Invalid Name"),
            Self::DuplicateName => write!(f, "Duplicate Name"),
            Self::DuplicateId => write!(f, "Duplicate Id"),
            Self::InvalidPropKey => write!(f, "Invalid Prop Key"),
            Self::UnsortedBreakpoints => write!(f, "Unsorted Breakpoints"),
            Self::DuplicateBreakpoint => write!(f, "Duplicate Breakpoint"),
            Self::UnsupportedVersion => write!(f, "Unsupported Version"),
            Self::EmptyClassList => write!(f, "Empty Class List"),
        }
    }
}

/// Validation warning (non-blocking).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// Component the warning belongs to
    pub component: Option<String>,
    /// Warning message
    pub message: String,
}

impl ValidationWarning {
    /// Creates a new validation warning
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            component: None,
            message: message.into(),
        }
    }

    /// Sets the component context.
    #[must_use]
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.component {
            Some(component) => write!(f, "[{}] {}", component, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Checks a component name: PascalCase, ASCII letters and digits only.
pub fn validate_component_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidName,
            "Component name cannot be empty",
        ));
    }

    if is_reserved_component_name(name) {
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidName,
            format!("'{name}' is already declared by the generated code"),
        )
        .with_suggestion(format!("Use '{name}Section'")));
    }

    if component_name_regex().is_match(name) {
        return Ok(());
    }

    let mut error = ValidationError::new(
        ValidationErrorKind::InvalidName,
        format!(
            "'{name}' must start with an uppercase letter and contain only letters and digits"
        ),
    );
    let suggestion = to_pascal_case(name);
    if component_name_regex().is_match(&suggestion) {
        error = error.with_suggestion(format!("Use '{suggestion}'"));
    }
    Err(error)
}

/// Returns true if `key` can be used as a destructured parameter name.
pub fn is_valid_prop_key(key: &str) -> bool {
    identifier_regex().is_match(key) && !RESERVED_WORDS.contains(&key) && key != REACT_BINDING
}

/// Returns true if a component with this name would clash with an
/// identifier of the generated page or component modules.
pub fn is_reserved_component_name(name: &str) -> bool {
    GENERATED_BINDINGS.contains(&name)
}

/// Checks a single component in isolation: name, prop keys, and classes.
///
/// `breakpoints` are the schema's declared breakpoints. Returns the first
/// problem found. Schema-wide checks (uniqueness) are done by
/// [`SchemaValidator`].
pub fn validate_component(
    component: &ComponentDescriptor,
    breakpoints: &[BreakpointDescriptor],
) -> Result<(), ValidationError> {
    validate_component_name(&component.name).map_err(|e| e.with_component(&component.name))?;

    if let Some(key) = component.props.keys().find(|key| !is_valid_prop_key(key)) {
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidPropKey,
            format!("Prop '{key}' is not a valid identifier"),
        )
        .with_component(&component.name)
        .with_suggestion("Use letters, digits, '_' or '$', not starting with a digit"));
    }

    if generate_component_classes(component, breakpoints).is_empty() {
        return Err(ValidationError::new(
            ValidationErrorKind::EmptyClassList,
            "Component produces no classes",
        )
        .with_component(&component.name)
        .with_suggestion("Set a positioning or layout type"));
    }

    Ok(())
}

/// Validates a whole schema.
pub struct SchemaValidator<'a> {
    schema: &'a LayoutSchema,
}

impl<'a> SchemaValidator<'a> {
    /// Creates a validator for `schema`.
    pub const fn new(schema: &'a LayoutSchema) -> Self {
        Self { schema }
    }

    /// Runs every check and collects the results.
    #[must_use]
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();

        self.check_version(&mut report);
        self.check_breakpoints(&mut report);
        self.check_components(&mut report);

        report
    }

    fn check_version(&self, report: &mut ValidationReport) {
        let version = &self.schema.schema_version;
        let major = version
            .split('.')
            .next()
            .and_then(|major| major.parse::<u32>().ok());

        if major != Some(SUPPORTED_SCHEMA_MAJOR) {
            report.add_error(
                ValidationError::new(
                    ValidationErrorKind::UnsupportedVersion,
                    format!("Schema version '{version}' is not supported"),
                )
                .with_suggestion(format!(
                    "Expected a {SUPPORTED_SCHEMA_MAJOR}.x schema version"
                )),
            );
        }
    }

    fn check_breakpoints(&self, report: &mut ValidationReport) {
        let mut names = HashSet::new();
        for breakpoint in &self.schema.breakpoints {
            if !names.insert(breakpoint.name.as_str()) {
                report.add_error(ValidationError::new(
                    ValidationErrorKind::DuplicateBreakpoint,
                    format!("Breakpoint '{}' is declared more than once", breakpoint.name),
                ));
            }
        }

        for pair in self.schema.breakpoints.windows(2) {
            if pair[1].min_width <= pair[0].min_width {
                report.add_error(
                    ValidationError::new(
                        ValidationErrorKind::UnsortedBreakpoints,
                        format!(
                            "Breakpoint '{}' ({}px) must be wider than '{}' ({}px)",
                            pair[1].name, pair[1].min_width, pair[0].name, pair[0].min_width
                        ),
                    )
                    .with_suggestion("List breakpoints in ascending minWidth order"),
                );
            }
        }
    }

    fn check_components(&self, report: &mut ValidationReport) {
        let mut names = HashSet::new();
        let mut ids = HashSet::new();

        for component in &self.schema.components {
            if let Err(e) = validate_component_name(&component.name) {
                report.add_error(e.with_component(&component.name));
            }

            if !names.insert(component.name.as_str()) {
                report.add_error(
                    ValidationError::new(
                        ValidationErrorKind::DuplicateName,
                        "Another component already uses this name",
                    )
                    .with_component(&component.name)
                    .with_suggestion("Rename one of the components"),
                );
            }

            if !ids.insert(component.id.as_str()) {
                report.add_error(
                    ValidationError::new(
                        ValidationErrorKind::DuplicateId,
                        format!("Component id '{}' is used more than once", component.id),
                    )
                    .with_component(&component.name),
                );
            }

            for key in component.props.keys() {
                if !is_valid_prop_key(key) {
                    report.add_error(
                        ValidationError::new(
                            ValidationErrorKind::InvalidPropKey,
                            format!("Prop '{key}' is not a valid identifier"),
                        )
                        .with_component(&component.name),
                    );
                }
            }

            if generate_component_classes(component, &self.schema.breakpoints).is_empty() {
                report.add_error(
                    ValidationError::new(
                        ValidationErrorKind::EmptyClassList,
                        "Component produces no classes",
                    )
                    .with_component(&component.name)
                    .with_suggestion("Set a positioning or layout type"),
                );
            }

            self.check_descriptor_values(component, report);
            self.check_responsive_keys(component, report);
        }
    }

    #[allow(clippy::unused_self)]
    fn check_descriptor_values(&self, component: &ComponentDescriptor, report: &mut ValidationReport) {
        let layout = &component.layout;
        let styling = &component.styling;
        let unknown = [
            ("positioning type", component.positioning.kind.unknown_value()),
            ("layout type", layout.kind.unknown_value()),
            ("flex direction", layout.direction.as_ref().and_then(FlexDirection::unknown_value)),
            ("align", layout.align.as_ref().and_then(Align::unknown_value)),
            ("justify", layout.justify.as_ref().and_then(Justify::unknown_value)),
            ("rounded", styling.rounded.as_ref().and_then(Rounded::unknown_value)),
            ("shadow", styling.shadow.as_ref().and_then(Shadow::unknown_value)),
        ];

        for (field, raw) in unknown {
            if let Some(raw) = raw {
                report.add_warning(
                    ValidationWarning::new(format!("Unknown {field} '{raw}' is ignored"))
                        .with_component(&component.name),
                );
            }
        }
    }

    fn check_responsive_keys(&self, component: &ComponentDescriptor, report: &mut ValidationReport) {
        for key in component.responsive.overrides.keys() {
            if *key == BreakpointKey::Base || self.schema.declares_breakpoint(key.as_str()) {
                continue;
            }

            let message = if resolve_breakpoint(key, &self.schema.breakpoints).is_some() {
                format!("Breakpoint '{key}' is not declared in the schema")
            } else {
                format!(
                    "Breakpoint '{key}' is not declared in the schema; its overrides are ignored"
                )
            };
            report.add_warning(ValidationWarning::new(message).with_component(&component.name));
        }
    }
}

/// Turns `my-card title` into `MyCardTitle`.
fn to_pascal_case(input: &str) -> String {
    input
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_ascii_uppercase().to_string() + chars.as_str()
            })
        })
        .collect()
}
