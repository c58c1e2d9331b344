//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::{OutputFormat, SchemaTarget};

/// Compute image width/height from a base resolution and an aspect ratio
#[derive(Parser, Debug)]
#[command(name = "yares")]
#[command(version, about = "Resolution selector for image generation", long_about = None)]
#[command(after_help = "EXAMPLES:
    # 16:9 landscape, longest side 1024
    yares select \"landscape (16:9)\" --base 1024

    # Portrait 3:4 with the width held at 512
    yares select \"portrait (3:4)\" --base 512 --overextend

    # Keep roughly 1024x1024 pixels at 4:3 (height:width)
    yares advanced --width-ratio 3 --height-ratio 4 --base 1024 --constant-resolution

    # List selectable ratio labels
    yares ratios list")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Config file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Ratio catalog file (overrides config)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Output format for calculations
    #[arg(long, short, global = true, default_value = "plain")]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute dimensions from a ratio label such as "landscape (16:9)"
    Select {
        /// Label containing a WIDTH:HEIGHT ratio
        label: String,
        /// Base resolution (default from config, else 512)
        #[arg(long, short)]
        base: Option<u32>,
        /// Hold one side at the base resolution and let the other exceed it
        #[arg(long)]
        overextend: bool,
    },
    /// Compute dimensions from explicit ratio components
    Advanced {
        /// Width component of the ratio
        #[arg(long, default_value_t = 1)]
        width_ratio: u32,
        /// Height component of the ratio
        #[arg(long, default_value_t = 1)]
        height_ratio: u32,
        /// Base resolution (default from config, else 512)
        #[arg(long, short)]
        base: Option<u32>,
        /// Hold one side at the base resolution and let the other exceed it
        #[arg(long)]
        overextend: bool,
        /// Keep the pixel count near base^2
        #[arg(long)]
        constant_resolution: bool,
    },
    /// Ratio catalog management
    Ratios {
        #[command(subcommand)]
        action: RatiosAction,
    },
    /// Print the node input/output schema
    Schema {
        #[arg(default_value = "all")]
        node: SchemaTarget,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum RatiosAction {
    /// List ratio labels in catalog order
    List,
    /// Create the catalog file with default labels
    Init,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
