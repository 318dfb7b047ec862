use thiserror::Error as ThisError;

/*-------------------------------------------------------------------------------------------------
  Errors and Results
-------------------------------------------------------------------------------------------------*/

// Error type alias used throughout the crate.
pub type Error = Box<dyn std::error::Error + Send + Sync + 'static>;

// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/*--------------------------------------------------------------------------------------
  Input Errors
--------------------------------------------------------------------------------------*/

/// Fatal input-validation errors. These are raised before any file is rewritten or any
/// network request is made.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum InputError {
    #[error("Name must contain only alphanumeric characters, hyphens, and underscores: {0:?}")]
    InvalidName(String),

    #[error("AS number must be a positive integer: {0:?}")]
    InvalidAsNumber(String),

    #[error("Invalid IP address or subnet: {0:?}")]
    InvalidNetwork(String),

    #[error("Malformed provider list on line {line}: {reason}")]
    MalformedProviderList { line: usize, reason: String },

    #[error("Duplicate AS number {as_number} found on line {line}")]
    DuplicateAsNumber { as_number: u32, line: usize },
}

/*--------------------------------------------------------------------------------------
  Log Error Function
--------------------------------------------------------------------------------------*/

#[cfg(test)]
pub(crate) fn log_error(error: &Error) {
    log::error!("{}", error);
}

/// Downcast a crate [Error] to an [InputError], when it is one.
pub fn as_input_error(error: &Error) -> Option<&InputError> {
    error.downcast_ref::<InputError>()
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
