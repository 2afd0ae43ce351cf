use thiserror::Error;

/// Errors that can occur while turning steps into flowchart text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("Step at position {index} has an invalid '{field}' field: {reason}")]
    MalformedStep {
        index: usize,
        field: String,
        reason: String,
    },

    #[error(
        "Step '{source_id}' at position {index} points to '{target_id}', which is not the id of any step"
    )]
    DanglingReference {
        index: usize,
        source_id: String,
        target_id: String,
    },
}

/// Errors that can occur when converting a custom input format into `StepDescriptor`s.
#[derive(Error, Debug, Clone)]
pub enum StepConversionError {
    #[error("Failed to parse steps JSON: {0}")]
    JsonParseError(String),

    #[error("Step at position {index} is missing required field '{field}'")]
    MissingField { index: usize, field: String },

    #[error("Invalid custom data: {0}")]
    ValidationError(String),
}

/// Errors that can occur while building a pie chart message.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Cannot chart an empty dataset")]
    EmptyDataset,

    #[error("Slice '{label}' has an invalid value: {value}")]
    InvalidValue { label: String, value: f64 },

    #[error("Slice values add up to zero, percentages are undefined")]
    ZeroTotal,

    #[error("Slice values add up to more than a finite number can hold")]
    TotalOverflow,
}
