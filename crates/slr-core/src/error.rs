use thiserror::Error;

pub type SlrResult<T> = Result<T, SlrError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SlrError {
    #[error("Units '{unit}' are not supported; only use {valid}")]
    InvalidUnit { unit: String, valid: String },

    #[error("The x and y arrays have discordant lengths (x={x_len}, y={y_len})")]
    LengthMismatch { x_len: usize, y_len: usize },

    #[error("Series must contain at least one sample")]
    EmptySeries,

    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Probability {value} is not within [0; 1]")]
    InvalidProbability { value: f64 },

    #[error("The '{field}' key is missing or misspelled in {context}")]
    MissingField { field: String, context: String },

    #[error("Target year {year} is out of bounds; years range from {min} to {max}")]
    OutOfRange { year: f64, min: f64, max: f64 },

    #[error("Index out of range: {what} (index={index}, len={len})")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error(
        "Unknown identifier '{identifier}'; use an index, a key, a location name, or a station ID"
    )]
    UnknownIdentifier { identifier: String },

    #[error("Collection for station '{station_id}' has no scenarios")]
    NoScenarios { station_id: String },

    #[error("Mixed units ({units}) where a single shared unit is required")]
    MixedUnitsAmbiguous { units: String },
}
