//! Export options selected in the export dialog.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target UI framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    /// React function components
    #[default]
    React,
    /// Vue single-file components (not generated yet)
    Vue,
    /// Svelte components (not generated yet)
    Svelte,
}

impl Framework {
    /// Returns the option value as written in configs and on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::React => "react",
            Self::Vue => "vue",
            Self::Svelte => "svelte",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Framework {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "react" => Ok(Self::React),
            "vue" => Ok(Self::Vue),
            "svelte" => Ok(Self::Svelte),
            other => Err(format!(
                "Invalid framework '{other}'. Must be 'react', 'vue', or 'svelte'"
            )),
        }
    }
}

/// Styling approach of the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CssSolution {
    /// Tailwind utility classes
    #[default]
    Tailwind,
    /// CSS Modules (not generated yet)
    CssModules,
    /// styled-components (not generated yet)
    StyledComponents,
}

impl CssSolution {
    /// Returns the option value as written in configs and on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tailwind => "tailwind",
            Self::CssModules => "css-modules",
            Self::StyledComponents => "styled-components",
        }
    }
}

impl fmt::Display for CssSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CssSolution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tailwind" => Ok(Self::Tailwind),
            "css-modules" => Ok(Self::CssModules),
            "styled-components" => Ok(Self::StyledComponents),
            other => Err(format!(
                "Invalid CSS solution '{other}'. Must be 'tailwind', 'css-modules', or 'styled-components'"
            )),
        }
    }
}

/// Options controlling project generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportOptions {
    /// Target framework
    pub framework: Framework,
    /// Styling approach
    pub css_solution: CssSolution,
    /// Emit TypeScript annotations (`.tsx` instead of `.jsx`)
    pub include_types: bool,
    /// Emit explanatory header comments
    pub include_comments: bool,
}

impl ExportOptions {
    /// Returns the source file extension implied by `include_types`.
    pub const fn extension(&self) -> &'static str {
        if self.include_types {
            "tsx"
        } else {
            "jsx"
        }
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            framework: Framework::React,
            css_solution: CssSolution::Tailwind,
            include_types: true,
            include_comments: true,
        }
    }
}
