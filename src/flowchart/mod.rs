use crate::error::BuildError;
use crate::message::{DiagramMessage, flowchart_message};
use crate::steps::StepDescriptor;
use std::fmt;
use tracing::debug;

mod render;
mod validation;

use render::LineRenderer;
use validation::StepValidator;

/// Layout direction written into the `graph <DIR>` header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    TopDown,
    TopBottom,
    BottomTop,
    LeftRight,
    RightLeft,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::TopDown => "TD",
            Direction::TopBottom => "TB",
            Direction::BottomTop => "BT",
            Direction::LeftRight => "LR",
            Direction::RightLeft => "RL",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What to do with an edge whose target is not the id of any step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReferencePolicy {
    /// Fail the build with `BuildError::DanglingReference`.
    #[default]
    Strict,
    /// Render the edge anyway and log a warning; the diagram renderer reports it.
    PassThrough,
}

/// Converts an ordered list of steps into Mermaid flowchart text wrapped in a chat message.
///
/// The builder holds only configuration, so one instance can serve any number of
/// concurrent `build` calls.
#[derive(Debug, Clone, Default)]
pub struct FlowchartTextBuilder {
    direction: Direction,
    reference_policy: ReferencePolicy,
    sanitize_labels: bool,
}

impl FlowchartTextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_reference_policy(mut self, policy: ReferencePolicy) -> Self {
        self.reference_policy = policy;
        self
    }

    /// Run every label through [`sanitize_label`](crate::label::sanitize_label) and every
    /// condition through [`sanitize_condition`](crate::label::sanitize_condition) before rendering.
    pub fn with_label_sanitizing(mut self, enabled: bool) -> Self {
        self.sanitize_labels = enabled;
        self
    }

    /// Builds the wrapped message. The reported step count is always `steps.len()`.
    pub fn build(&self, steps: &[StepDescriptor]) -> Result<DiagramMessage, BuildError> {
        let diagram = self.diagram(steps)?;
        Ok(flowchart_message(diagram, steps.len()))
    }

    /// Builds only the diagram text: the header line followed by one line per node or edge.
    pub fn diagram(&self, steps: &[StepDescriptor]) -> Result<String, BuildError> {
        debug!(
            steps = steps.len(),
            direction = %self.direction,
            policy = ?self.reference_policy,
            "building flowchart"
        );

        StepValidator::new(steps, self.reference_policy, self.sanitize_labels).validate()?;

        let mut renderer = LineRenderer::new(self.direction, self.sanitize_labels);
        for step in steps {
            renderer.push_step(step);
        }

        debug!(lines = renderer.body_line_count(), "flowchart built");
        Ok(renderer.finish())
    }
}

/// Builds a flowchart message with default options (`graph TD`, strict references).
pub fn build(steps: &[StepDescriptor]) -> Result<DiagramMessage, BuildError> {
    FlowchartTextBuilder::default().build(steps)
}
