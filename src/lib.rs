//! Layoutsmith Library
//!
//! This library turns a declarative layout schema into a React + Tailwind
//! project: it synthesizes utility classes per component, generates one
//! source file per component plus a page composing them, and packages the
//! result as a zip archive.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod generator;
pub mod models;
pub mod services;
pub mod state;
pub mod templates;
pub mod validation;
