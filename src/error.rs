use thiserror::Error;

/// Returned when a metric descriptor cannot be built.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DescError {
    #[error("metric name must not be empty")]
    EmptyName,

    #[error("invalid metric name {name:?}: unexpected character at byte {position}")]
    InvalidName { name: String, position: usize },
}
