//! Selector nodes and their static host schema.
//!
//! The host describes each node with typed, bounded inputs and two integer
//! outputs. [`NodeSchema`] holds that description as plain data; the nodes
//! themselves only validate inputs against it and delegate to [`resolve`].

use serde::Serialize;

use crate::catalog::RatioCatalog;
use crate::error::{Error, Result};
use crate::ratio::RatioSpec;
use crate::resolve::{self, Mode};

pub const CATEGORY: &str = "utils";

const BASE_RESOLUTION: IntRange = IntRange {
    default: 512,
    min: 512,
    max: 8192,
    step: 128,
};

const RATIO_COMPONENT: IntRange = IntRange {
    default: 1,
    min: 1,
    max: 1024,
    step: 1,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IntRange {
    pub default: i64,
    pub min: i64,
    pub max: i64,
    pub step: i64,
}

impl IntRange {
    fn check(&self, input: &'static str, value: i64) -> Result<()> {
        if value < self.min || value > self.max {
            return Err(Error::OutOfRange {
                input,
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum InputKind {
    Int(IntRange),
    /// One of a fixed list of labels.
    #[serde(rename = "COMBO")]
    Choice { options: Vec<String> },
    Boolean {
        default: bool,
        label_on: String,
        label_off: String,
    },
}

impl InputKind {
    fn toggle() -> Self {
        InputKind::Boolean {
            default: false,
            label_on: "yes".to_string(),
            label_off: "no".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputSpec {
    pub name: &'static str,
    #[serde(flatten)]
    pub kind: InputKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputSpec {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// Static description of a node as the host sees it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeSchema {
    pub name: &'static str,
    pub display_name: &'static str,
    pub category: &'static str,
    pub input_spec: Vec<InputSpec>,
    pub output_spec: Vec<OutputSpec>,
}

fn dimension_outputs() -> Vec<OutputSpec> {
    vec![
        OutputSpec {
            name: "width",
            kind: "INT",
        },
        OutputSpec {
            name: "height",
            kind: "INT",
        },
    ]
}

/// Result of a node calculation.
///
/// `ratio` is only filled in when the caller asks for display metadata.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratio: Option<f64>,
}

impl Resolution {
    fn new(width: u32, height: u32, ratio: f64) -> Self {
        Self {
            width,
            height,
            ratio: Some(ratio),
        }
    }

    /// Drop the metadata, keeping only the two outputs.
    pub fn without_metadata(self) -> Self {
        Self {
            ratio: None,
            ..self
        }
    }

    pub fn as_tuple(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Simple selector: picks a ratio from the catalog by label.
#[derive(Debug, Clone)]
pub struct SelectorNode {
    catalog: RatioCatalog,
}

impl SelectorNode {
    pub const NAME: &'static str = "YARS";
    pub const DISPLAY_NAME: &'static str = "yaResolution Selector";

    pub fn new(catalog: RatioCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &RatioCatalog {
        &self.catalog
    }

    /// Schema with the current catalog entries as the ratio choices.
    pub fn schema(&self) -> Result<NodeSchema> {
        Ok(NodeSchema {
            name: Self::NAME,
            display_name: Self::DISPLAY_NAME,
            category: CATEGORY,
            input_spec: vec![
                InputSpec {
                    name: "base_resolution",
                    kind: InputKind::Int(BASE_RESOLUTION),
                },
                InputSpec {
                    name: "aspect_ratio",
                    kind: InputKind::Choice {
                        options: self.catalog.load()?,
                    },
                },
                InputSpec {
                    name: "overextend",
                    kind: InputKind::toggle(),
                },
            ],
            output_spec: dimension_outputs(),
        })
    }

    /// Compute the resolution for a ratio label.
    ///
    /// The label only needs an embedded `W:H`; it does not have to be a
    /// catalog entry.
    pub fn calculate(&self, base_resolution: u32, label: &str, overextend: bool) -> Result<Resolution> {
        BASE_RESOLUTION.check("base_resolution", base_resolution as i64)?;

        let ratio = RatioSpec::Label(label.to_string()).ratio()?;
        let d = resolve::aspect_ratio(base_resolution, ratio, overextend)?;
        Ok(Resolution::new(d.width, d.height, ratio))
    }
}

/// Inputs of the advanced selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvancedInputs {
    pub base_resolution: u32,
    pub width_ratio: u32,
    pub height_ratio: u32,
    pub overextend: bool,
    pub constant_resolution: bool,
}

impl Default for AdvancedInputs {
    fn default() -> Self {
        Self {
            base_resolution: BASE_RESOLUTION.default as u32,
            width_ratio: RATIO_COMPONENT.default as u32,
            height_ratio: RATIO_COMPONENT.default as u32,
            overextend: false,
            constant_resolution: false,
        }
    }
}

/// Advanced selector: explicit ratio components and a constant-resolution mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdvancedSelectorNode;

impl AdvancedSelectorNode {
    pub const NAME: &'static str = "YARSAdv";
    pub const DISPLAY_NAME: &'static str = "yaResolution Selector (Advanced)";

    pub fn schema(&self) -> NodeSchema {
        NodeSchema {
            name: Self::NAME,
            display_name: Self::DISPLAY_NAME,
            category: CATEGORY,
            input_spec: vec![
                InputSpec {
                    name: "base_resolution",
                    kind: InputKind::Int(BASE_RESOLUTION),
                },
                InputSpec {
                    name: "width_ratio",
                    kind: InputKind::Int(RATIO_COMPONENT),
                },
                InputSpec {
                    name: "height_ratio",
                    kind: InputKind::Int(RATIO_COMPONENT),
                },
                InputSpec {
                    name: "overextend",
                    kind: InputKind::toggle(),
                },
                InputSpec {
                    name: "constant_resolution",
                    kind: InputKind::toggle(),
                },
            ],
            output_spec: dimension_outputs(),
        }
    }

    pub fn calculate(&self, inputs: &AdvancedInputs) -> Result<Resolution> {
        BASE_RESOLUTION.check("base_resolution", inputs.base_resolution as i64)?;
        RATIO_COMPONENT.check("width_ratio", inputs.width_ratio as i64)?;
        RATIO_COMPONENT.check("height_ratio", inputs.height_ratio as i64)?;

        let ratio = RatioSpec::Components {
            width: inputs.width_ratio,
            height: inputs.height_ratio,
        }
        .ratio()?;
        let mode = Mode::from_flags(inputs.overextend, inputs.constant_resolution);
        let d = resolve::resolve(inputs.base_resolution, ratio, mode)?;
        Ok(Resolution::new(d.width, d.height, ratio))
    }
}

/// Node id to display name, in registration order.
pub fn registry() -> [(&'static str, &'static str); 2] {
    [
        (SelectorNode::NAME, SelectorNode::DISPLAY_NAME),
        (AdvancedSelectorNode::NAME, AdvancedSelectorNode::DISPLAY_NAME),
    ]
}
