//! Subcommand handlers.
//!
//! Handlers return the text to print so `main` owns stdout and exit codes.

use std::error::Error;
use std::fmt::Write as _;
use std::path::PathBuf;

use super::args::{Args, Command, ConfigAction, RatiosAction};
use super::enums::{OutputFormat, SchemaTarget};
use crate::catalog::RatioCatalog;
use crate::config::{self, Config};
use crate::node::{AdvancedInputs, AdvancedSelectorNode, Resolution, SelectorNode};

pub type CommandResult = Result<String, Box<dyn Error>>;

/// Settings shared by every subcommand, after merging config and flags.
#[derive(Debug)]
pub struct Context {
    pub config: Config,
    pub config_path: PathBuf,
    pub catalog: RatioCatalog,
    pub format: OutputFormat,
}

impl Context {
    /// Load the config file and resolve the catalog location.
    /// `--catalog` beats `[catalog] path`, which beats the default location.
    pub fn from_args(args: &Args) -> Result<Self, Box<dyn Error>> {
        let config_path = args.config.clone().unwrap_or_else(config::default_path);
        let config = Config::load(Some(&config_path))?;

        let catalog = args
            .catalog
            .clone()
            .or_else(|| config.catalog.path.clone())
            .map(RatioCatalog::new)
            .unwrap_or_else(RatioCatalog::with_default_path);

        Ok(Self {
            config,
            config_path,
            catalog,
            format: args.format,
        })
    }

    fn base_or_default(&self, base: Option<u32>) -> u32 {
        base.unwrap_or(self.config.defaults.base_resolution)
    }
}

/// Dispatch a parsed command.
pub fn run(command: Command, ctx: &Context) -> CommandResult {
    match command {
        Command::Select {
            label,
            base,
            overextend,
        } => run_select(ctx, &label, base, overextend),
        Command::Advanced {
            width_ratio,
            height_ratio,
            base,
            overextend,
            constant_resolution,
        } => run_advanced(
            ctx,
            AdvancedInputs {
                base_resolution: ctx.base_or_default(base),
                width_ratio,
                height_ratio,
                overextend: overextend || ctx.config.defaults.overextend,
                constant_resolution: constant_resolution
                    || ctx.config.defaults.constant_resolution,
            },
        ),
        Command::Ratios { action } => run_ratios(ctx, action),
        Command::Schema { node } => run_schema(ctx, node),
        Command::Config { action } => run_config(ctx, action),
    }
}

pub fn run_select(ctx: &Context, label: &str, base: Option<u32>, overextend: bool) -> CommandResult {
    let node = SelectorNode::new(ctx.catalog.clone());
    node.catalog().initialize()?;
    if !node.catalog().contains(label)? {
        log::warn!(
            "'{}' is not in the ratio catalog ({}), using its embedded ratio",
            label,
            node.catalog().path().display()
        );
    }

    let overextend = overextend || ctx.config.defaults.overextend;
    let resolution = node.calculate(ctx.base_or_default(base), label, overextend)?;
    format_resolution(resolution, ctx.format)
}

pub fn run_advanced(ctx: &Context, inputs: AdvancedInputs) -> CommandResult {
    let resolution = AdvancedSelectorNode.calculate(&inputs)?;
    format_resolution(resolution, ctx.format)
}

pub fn run_ratios(ctx: &Context, action: RatiosAction) -> CommandResult {
    match action {
        RatiosAction::List => {
            let mut out = String::new();
            for label in ctx.catalog.load()? {
                writeln!(out, "{}", label)?;
            }
            Ok(out)
        }
        RatiosAction::Init => {
            let path = ctx.catalog.path().display();
            if ctx.catalog.initialize()? {
                Ok(format!("Created ratio catalog: {}\n", path))
            } else {
                Ok(format!("Ratio catalog already exists: {}\n", path))
            }
        }
    }
}

pub fn run_schema(ctx: &Context, target: SchemaTarget) -> CommandResult {
    #[derive(serde::Serialize)]
    struct Schemas {
        node: Vec<crate::node::NodeSchema>,
    }

    let mut node = Vec::new();
    if target.includes_simple() {
        node.push(SelectorNode::new(ctx.catalog.clone()).schema()?);
    }
    if target.includes_advanced() {
        node.push(AdvancedSelectorNode.schema());
    }
    Ok(toml::to_string(&Schemas { node })?)
}

pub fn run_config(ctx: &Context, action: ConfigAction) -> CommandResult {
    match action {
        ConfigAction::Show => {
            let mut out = String::from("Current configuration:\n\n");
            out.push_str(&ctx.config.to_toml()?);
            out.push('\n');

            let state = if ctx.config_path.exists() {
                "exists"
            } else {
                "not found"
            };
            writeln!(out, "Config file: {} ({})", ctx.config_path.display(), state)?;
            writeln!(out, "Ratio catalog: {}", ctx.catalog.path().display())?;
            Ok(out)
        }
        ConfigAction::Init => {
            Config::init(&ctx.config_path)?;
            Ok(format!("Created config file: {}\n", ctx.config_path.display()))
        }
    }
}

fn format_resolution(resolution: Resolution, format: OutputFormat) -> CommandResult {
    match format {
        OutputFormat::Plain => Ok(format!("{} {}\n", resolution.width, resolution.height)),
        OutputFormat::Metadata => Ok(toml::to_string(&resolution)?),
    }
}
