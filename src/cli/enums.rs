//! CLI enum types for output format and schema selection.

use clap::ValueEnum;

/// How calculation results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `WIDTH HEIGHT`
    #[default]
    Plain,
    /// Width and height plus the ratio, as TOML
    Metadata,
}

/// Which node schema to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SchemaTarget {
    Simple,
    Advanced,
    #[default]
    All,
}

impl SchemaTarget {
    pub fn includes_simple(self) -> bool {
        matches!(self, SchemaTarget::Simple | SchemaTarget::All)
    }

    pub fn includes_advanced(self) -> bool {
        matches!(self, SchemaTarget::Advanced | SchemaTarget::All)
    }
}
