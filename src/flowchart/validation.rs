use super::ReferencePolicy;
use crate::error::BuildError;
use crate::steps::{StepDescriptor, StepNext};
use ahash::AHashSet;
use tracing::warn;

/// Characters that would end the node token or the label box early.
const RESERVED_ID_CHARS: &[char] = &['[', ']', '|', '"', '(', ')', '{', '}'];

const LINE_BREAKS: &[char] = &['\n', '\r'];

/// Checks a step list before any text is emitted, so a failing build never
/// leaves a half-written diagram behind.
pub(super) struct StepValidator<'a> {
    steps: &'a [StepDescriptor],
    policy: ReferencePolicy,
    sanitize_text: bool,
    known_ids: AHashSet<&'a str>,
}

impl<'a> StepValidator<'a> {
    /// With `sanitize_text` set, labels and conditions are cleaned at render time,
    /// so only their presence is checked here.
    pub(super) fn new(
        steps: &'a [StepDescriptor],
        policy: ReferencePolicy,
        sanitize_text: bool,
    ) -> Self {
        let known_ids = steps.iter().map(|step| step.id.as_str()).collect();
        Self {
            steps,
            policy,
            sanitize_text,
            known_ids,
        }
    }

    pub(super) fn validate(&self) -> Result<(), BuildError> {
        for (index, step) in self.steps.iter().enumerate() {
            self.check_fields(index, step)?;
            self.check_targets(index, step)?;
        }
        Ok(())
    }

    fn check_fields(&self, index: usize, step: &StepDescriptor) -> Result<(), BuildError> {
        let malformed = |field: &str, reason: &str| BuildError::MalformedStep {
            index,
            field: field.to_string(),
            reason: reason.to_string(),
        };

        check_identifier(&step.id).map_err(|reason| malformed("id", reason))?;
        if step.label.trim().is_empty() {
            return Err(malformed("label", "must not be empty"));
        }
        if !self.sanitize_text && step.label.contains(LINE_BREAKS) {
            return Err(malformed("label", "must not contain line breaks"));
        }
        for (k, target) in step.next.targets().enumerate() {
            check_identifier(target).map_err(|reason| malformed(&format!("next[{k}]"), reason))?;
        }
        if let (false, StepNext::ConditionalEdges(branches)) = (self.sanitize_text, &step.next) {
            for (k, branch) in branches.iter().enumerate() {
                check_condition(&branch.condition)
                    .map_err(|reason| malformed(&format!("next[{k}].condition"), reason))?;
            }
        }
        Ok(())
    }

    fn check_targets(&self, index: usize, step: &StepDescriptor) -> Result<(), BuildError> {
        for target in step.next.targets() {
            if self.known_ids.contains(target) {
                continue;
            }
            match self.policy {
                ReferencePolicy::Strict => {
                    return Err(BuildError::DanglingReference {
                        index,
                        source_id: step.id.clone(),
                        target_id: target.to_string(),
                    });
                }
                ReferencePolicy::PassThrough => {
                    warn!(
                        source_id = %step.id,
                        target_id = target,
                        "rendering edge to a node that no step defines"
                    );
                }
            }
        }
        Ok(())
    }
}

fn check_identifier(id: &str) -> Result<(), &'static str> {
    if id.is_empty() {
        return Err("must not be empty");
    }
    if id.chars().any(char::is_whitespace) {
        return Err("must not contain whitespace");
    }
    if id.contains(RESERVED_ID_CHARS) {
        return Err("must not contain brackets, braces, parentheses, '|' or '\"'");
    }
    Ok(())
}

fn check_condition(condition: &str) -> Result<(), &'static str> {
    if condition.contains(LINE_BREAKS) {
        return Err("must not contain line breaks");
    }
    if condition.contains('|') {
        return Err("must not contain '|'");
    }
    Ok(())
}
