//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the flowtext crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use flowtext::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let steps_json = std::fs::read_to_string("path/to/steps.json")?;
//! let steps = parse_steps_json(&steps_json)?;
//!
//! let message = FlowchartTextBuilder::new()
//!     .with_direction(Direction::LeftRight)
//!     .build(&steps)?;
//!
//! println!("{}", message.content);
//! # Ok(())
//! # }
//! ```

// Builders
pub use crate::flowchart::{Direction, FlowchartTextBuilder, ReferencePolicy};
pub use crate::pie::{PieChartBuilder, Slice};

// Step model and conversion
pub use crate::steps::{
    Branch, Edge, IntoSteps, JsonSteps, LinearSteps, StepDescriptor, StepNext, parse_steps_json,
};

// Output
pub use crate::message::{DiagramMessage, MessageRole};

// Error types
pub use crate::error::{BuildError, ChartError, StepConversionError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
