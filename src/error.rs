use thiserror::Error;

/// Error types for `DynArray` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DynArrayError {
    /// Index is beyond the current array length
    #[error("Index out of bounds: index {index} is beyond array length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current length of the array
        length: usize,
    },
    /// Storage for the requested number of slots could not be acquired
    #[error("Allocation failed: could not reserve storage for {requested} elements")]
    AllocationFailed {
        /// Number of element slots requested
        requested: usize,
    },
    /// Operation requires at least one element
    #[error("Operation on empty array")]
    EmptyArray,
    /// Invalid parameter provided to a `DynArray` constructor
    #[error("Invalid configuration: {parameter} cannot be {value}")]
    InvalidConfiguration {
        /// Name of the rejected parameter
        parameter: &'static str,
        /// Provided value
        value: usize,
    },
}
