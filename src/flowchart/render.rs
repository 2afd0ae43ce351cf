use super::Direction;
use crate::label::{sanitize_condition, sanitize_label};
use crate::steps::StepDescriptor;
use std::borrow::Cow;

const INDENT: &str = "  ";

/// Accumulates the diagram text one step at a time.
pub(super) struct LineRenderer {
    output: String,
    sanitize_labels: bool,
    body_lines: usize,
}

impl LineRenderer {
    pub(super) fn new(direction: Direction, sanitize_labels: bool) -> Self {
        Self {
            output: format!("graph {}\n", direction),
            sanitize_labels,
            body_lines: 0,
        }
    }

    pub(super) fn push_step(&mut self, step: &StepDescriptor) {
        let label = if self.sanitize_labels {
            Cow::Owned(sanitize_label(&step.label))
        } else {
            Cow::Borrowed(step.label.as_str())
        };

        let mut edges = step.edges().peekable();
        if edges.peek().is_none() {
            self.push_line(&step.id, &label, "", None);
            return;
        }
        for edge in edges {
            let condition = match edge.condition {
                Some(condition) if self.sanitize_labels => Cow::Owned(sanitize_condition(condition)),
                Some(condition) => Cow::Borrowed(condition),
                None => Cow::Borrowed(""),
            };
            self.push_line(edge.source_id, &label, &condition, Some(edge.target_id));
        }
    }

    /// An empty `condition` renders a plain arrow.
    fn push_line(&mut self, id: &str, label: &str, condition: &str, target: Option<&str>) {
        let line = match target {
            Some(target) if condition.is_empty() => format!("{INDENT}{id}[{label}] --> {target}\n"),
            Some(target) => format!("{INDENT}{id}[{label}] -->|{condition}| {target}\n"),
            None => format!("{INDENT}{id}[{label}]\n"),
        };
        self.output.push_str(&line);
        self.body_lines += 1;
    }

    pub(super) fn body_line_count(&self) -> usize {
        self.body_lines
    }

    pub(super) fn finish(self) -> String {
        self.output
    }
}
