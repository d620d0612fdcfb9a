use thiserror::Error;

/// Errors raised while turning raw input into evaluator parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    /// An integer outside the accepted range. `value` keeps the text as given,
    /// since it may not fit any integer type.
    #[error("{name} \"{value}\" must be between {min} and {max}")]
    OutOfRange {
        name: &'static str,
        value: String,
        min: u32,
        max: u32,
    },

    #[error("{name} \"{input}\" is not a valid integer")]
    Malformed { name: &'static str, input: String },
}
