//! yares library crate.
//!
//! Computes width/height pairs for image generation from a base resolution
//! and an aspect ratio.
//!
//! # Modules
//!
//! - [`dimensions`] - even-integer normalization with a 64 pixel floor
//! - [`resolve`] - anchored and constant-resolution strategies
//! - [`ratio`] - ratio labels and explicit components
//! - [`catalog`] - selectable ratio labels backed by a text file
//! - [`node`] - the two selector nodes and their host schema

pub mod catalog;
pub mod cli;
pub mod config;
pub mod dimensions;
pub mod error;
pub mod node;
pub mod ratio;
pub mod resolve;

pub use catalog::{RatioCatalog, DEFAULT_RATIOS};
pub use dimensions::{normalize, Dimensions, MIN_DIMENSION};
pub use error::{Error, Result};
pub use node::{AdvancedInputs, AdvancedSelectorNode, NodeSchema, Resolution, SelectorNode};
pub use ratio::RatioSpec;
pub use resolve::{aspect_ratio, constant_resolution, resolve, Mode};
