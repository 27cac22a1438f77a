//! Configuration for Gradebook
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a Gradebook instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// The single JSON file holding the whole record set
    pub data_file: PathBuf,

    /// Spaces per indentation level in the saved file
    pub json_indent: usize,

    // -------------------------------------------------------------------------
    // Presentation Configuration
    // -------------------------------------------------------------------------
    /// Table layout used by "View All"
    pub table_style: TableStyle,
}

/// Table layout strategy, chosen once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableStyle {
    /// Bordered grid with a header rule
    #[default]
    Grid,

    /// Header, dash separator, and `" | "`-joined rows
    Plain,
}

impl Config {
    /// Default location of the record file, relative to the working directory
    pub const DEFAULT_DATA_FILE: &'static str = "students.json";

    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(Self::DEFAULT_DATA_FILE),
            json_indent: 4,
            table_style: TableStyle::Grid,
        }
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the record file path
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Set the JSON indentation width
    pub fn json_indent(mut self, spaces: usize) -> Self {
        self.config.json_indent = spaces;
        self
    }

    /// Set the table layout
    pub fn table_style(mut self, style: TableStyle) -> Self {
        self.config.table_style = style;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
