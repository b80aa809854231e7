//! Editor state shared by the editing surfaces.
//!
//! `EditorState` owns the schema being edited. Every mutation goes through it
//! so the schema stays valid between edits: names are unique PascalCase
//! identifiers, ids are unique and never change. Exports work on a
//! [`EditorState::snapshot`] rather than the live schema.

use anyhow::{bail, Context, Result};
use tracing::debug;

use crate::config::ThemeMode;
use crate::models::{BreakpointKey, ComponentDescriptor, LayoutSchema};
use crate::validation::{validate_component, SchemaValidator, ValidationError, ValidationErrorKind};

/// The schema being edited plus UI state around it.
#[derive(Debug, Clone)]
pub struct EditorState {
    schema: LayoutSchema,
    /// Theme used by the editing surfaces
    pub theme_mode: ThemeMode,
    /// Breakpoint the canvas is previewing
    pub active_breakpoint: BreakpointKey,
    dirty: bool,
}

impl EditorState {
    /// Creates state holding an empty schema.
    pub fn new() -> Self {
        Self {
            schema: LayoutSchema::new(),
            theme_mode: ThemeMode::default(),
            active_breakpoint: BreakpointKey::Base,
            dirty: false,
        }
    }

    /// Creates state from a loaded schema.
    pub fn from_schema(schema: LayoutSchema) -> Result<Self> {
        let mut state = Self::new();
        state.load(schema)?;
        Ok(state)
    }

    /// Returns the live schema.
    pub const fn schema(&self) -> &LayoutSchema {
        &self.schema
    }

    /// Returns true if there are unsaved changes.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Records that the schema has been saved.
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Returns an owned copy of the schema for export.
    #[must_use]
    pub fn snapshot(&self) -> LayoutSchema {
        self.schema.clone()
    }

    /// Replaces the schema after validating it.
    pub fn load(&mut self, schema: LayoutSchema) -> Result<()> {
        let report = SchemaValidator::new(&schema).validate();
        if !report.is_valid() {
            bail!("Schema is invalid:\n{}", report.format_message());
        }

        debug!(components = schema.components.len(), "Loaded schema into editor");
        self.schema = schema;
        self.dirty = false;
        Ok(())
    }

    /// Clears the schema back to an empty document.
    pub fn reset(&mut self) {
        self.schema = LayoutSchema::new();
        self.active_breakpoint = BreakpointKey::Base;
        self.dirty = false;
    }

    /// Appends a component, giving it a fresh id.
    ///
    /// Returns the assigned id.
    pub fn add_component(
        &mut self,
        mut component: ComponentDescriptor,
    ) -> Result<String, ValidationError> {
        component.id = uuid::Uuid::new_v4().to_string();
        validate_component(&component, &self.schema.breakpoints)?;
        self.ensure_unique_name(&component.name, None)?;

        debug!(name = %component.name, id = %component.id, "Added component");
        let id = component.id.clone();
        self.schema.components.push(component);
        self.dirty = true;
        Ok(id)
    }

    /// Applies `edit` to the component with `id`.
    ///
    /// The edit is discarded if it changes the id, breaks validation, or
    /// collides with another component's name.
    pub fn update_component<F>(&mut self, id: &str, edit: F) -> Result<()>
    where
        F: FnOnce(&mut ComponentDescriptor),
    {
        let index = self.index_of(id)?;

        let mut updated = self.schema.components[index].clone();
        edit(&mut updated);

        if updated.id != id {
            bail!("Component id cannot be changed");
        }
        validate_component(&updated, &self.schema.breakpoints)?;
        self.ensure_unique_name(&updated.name, Some(index))?;

        self.schema.components[index] = updated;
        self.dirty = true;
        Ok(())
    }

    /// Removes and returns the component with `id`.
    pub fn remove_component(&mut self, id: &str) -> Result<ComponentDescriptor> {
        let index = self.index_of(id)?;
        let removed = self.schema.components.remove(index);
        debug!(name = %removed.name, "Removed component");
        self.dirty = true;
        Ok(removed)
    }

    /// Moves the component with `id` to `index`, clamped to the end.
    pub fn move_component(&mut self, id: &str, index: usize) -> Result<()> {
        let from = self.index_of(id)?;
        let component = self.schema.components.remove(from);
        let to = index.min(self.schema.components.len());
        self.schema.components.insert(to, component);
        if from != to {
            self.dirty = true;
        }
        Ok(())
    }

    /// Finds a component id by name.
    pub fn id_for_name(&self, name: &str) -> Option<&str> {
        self.schema.component_by_name(name).map(|c| c.id.as_str())
    }

    fn index_of(&self, id: &str) -> Result<usize> {
        self.schema
            .components
            .iter()
            .position(|c| c.id == id)
            .with_context(|| format!("No component with id '{id}'"))
    }

    fn ensure_unique_name(&self, name: &str, skip: Option<usize>) -> Result<(), ValidationError> {
        let taken = self
            .schema
            .components
            .iter()
            .enumerate()
            .any(|(i, c)| Some(i) != skip && c.name == name);

        if taken {
            return Err(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("A component named '{name}' already exists"),
            )
            .with_component(name));
        }
        Ok(())
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
