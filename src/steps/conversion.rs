use super::definition::{Branch, StepDescriptor, StepNext};
use crate::error::StepConversionError;
use serde::Deserialize;
use tracing::debug;

/// A trait for custom data models that can be converted into flowchart steps.
///
/// This is the extension point for feeding your own process format into the
/// builder. Implement it on your configuration structs to translate them into
/// the canonical `StepDescriptor` list.
///
/// # Example
///
/// ```rust
/// use flowtext::error::StepConversionError;
/// use flowtext::steps::{IntoSteps, StepDescriptor};
///
/// struct Stage { key: String, title: String }
/// struct Pipeline { stages: Vec<Stage> }
///
/// impl IntoSteps for Pipeline {
///     fn into_steps(self) -> Result<Vec<StepDescriptor>, StepConversionError> {
///         if let Some(stage) = self.stages.iter().find(|s| s.key.is_empty()) {
///             return Err(StepConversionError::ValidationError(format!(
///                 "stage '{}' has no key",
///                 stage.title
///             )));
///         }
///         let keys: Vec<String> = self.stages.iter().map(|s| s.key.clone()).collect();
///         Ok(self
///             .stages
///             .into_iter()
///             .enumerate()
///             .map(|(i, stage)| match keys.get(i + 1) {
///                 Some(next) => StepDescriptor::to(stage.key, stage.title, next.clone()),
///                 None => StepDescriptor::terminal(stage.key, stage.title),
///             })
///             .collect())
///     }
/// }
///
/// let unkeyed = Pipeline { stages: vec![Stage { key: String::new(), title: "审核".into() }] };
/// assert!(matches!(unkeyed.into_steps(), Err(StepConversionError::ValidationError(_))));
/// ```
pub trait IntoSteps {
    /// Consumes the object and converts it into an ordered list of steps.
    fn into_steps(self) -> Result<Vec<StepDescriptor>, StepConversionError>;
}

impl IntoSteps for Vec<StepDescriptor> {
    fn into_steps(self) -> Result<Vec<StepDescriptor>, StepConversionError> {
        Ok(self)
    }
}

// --- JSON wire format ---
// `next` is absent, null, a target id, or a list of `{condition, target}` objects.

#[derive(Deserialize)]
struct RawStep {
    id: Option<String>,
    label: Option<String>,
    #[serde(default)]
    next: Option<RawNext>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNext {
    Target(String),
    Branches(Vec<RawBranch>),
}

#[derive(Deserialize)]
struct RawBranch {
    #[serde(default)]
    condition: Option<String>,
    target: Option<String>,
}

/// Steps in the JSON shape `[{"id": .., "label": .., "next": ..}, ..]`.
pub struct JsonSteps(Vec<RawStep>);

impl JsonSteps {
    pub fn parse(json: &str) -> Result<Self, StepConversionError> {
        serde_json::from_str(json)
            .map(Self)
            .map_err(|e| StepConversionError::JsonParseError(e.to_string()))
    }
}

impl IntoSteps for JsonSteps {
    fn into_steps(self) -> Result<Vec<StepDescriptor>, StepConversionError> {
        self.0
            .into_iter()
            .enumerate()
            .map(|(index, raw)| convert_raw_step(index, raw))
            .collect()
    }
}

fn convert_raw_step(index: usize, raw: RawStep) -> Result<StepDescriptor, StepConversionError> {
    let missing = |field: &str| StepConversionError::MissingField {
        index,
        field: field.to_string(),
    };

    let id = raw.id.ok_or_else(|| missing("id"))?;
    let label = raw.label.ok_or_else(|| missing("label"))?;

    // Empty values count as "no next step".
    let next = match raw.next {
        None => StepNext::NoEdge,
        Some(RawNext::Target(target)) if target.is_empty() => StepNext::NoEdge,
        Some(RawNext::Target(target)) => StepNext::SingleEdge { target },
        Some(RawNext::Branches(branches)) if branches.is_empty() => StepNext::NoEdge,
        Some(RawNext::Branches(branches)) => StepNext::ConditionalEdges(
            branches
                .into_iter()
                .enumerate()
                .map(|(k, branch)| {
                    let target = branch
                        .target
                        .ok_or_else(|| missing(&format!("next[{k}].target")))?;
                    Ok(Branch::new(branch.condition.unwrap_or_default(), target))
                })
                .collect::<Result<_, StepConversionError>>()?,
        ),
    };

    Ok(StepDescriptor { id, label, next })
}

/// Parses the JSON step list into canonical steps.
pub fn parse_steps_json(json: &str) -> Result<Vec<StepDescriptor>, StepConversionError> {
    JsonSteps::parse(json)?.into_steps()
}

/// An ordered list of plain labels, chained `s0 --> s1 --> ...`.
///
/// Blank labels are skipped; ids are assigned after skipping so the chain has no gaps.
pub struct LinearSteps(pub Vec<String>);

impl IntoSteps for LinearSteps {
    fn into_steps(self) -> Result<Vec<StepDescriptor>, StepConversionError> {
        let labels: Vec<String> = self
            .0
            .into_iter()
            .filter(|label| {
                let keep = !label.trim().is_empty();
                if !keep {
                    debug!("skipping blank linear step label");
                }
                keep
            })
            .collect();

        let last = labels.len().saturating_sub(1);
        Ok(labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| {
                if i == last {
                    StepDescriptor::terminal(format!("s{i}"), label)
                } else {
                    StepDescriptor::to(format!("s{i}"), label, format!("s{}", i + 1))
                }
            })
            .collect())
    }
}
