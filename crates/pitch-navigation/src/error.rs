//! This module defines the error types used by the `pitch-navigation` crate.

#![warn(missing_docs)]

/// Error type for grid operations.
///
/// This enum encapsulates all possible errors that can occur while building
/// or querying a grid, such as invalid pitch parameters or out-of-bounds access.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// Error for an invalid grid configuration.
    /// This variant is returned when the pitch size or node radius is not a
    /// positive finite number, or when the pitch cannot hold a single node.
    InvalidConfiguration(&'static str),
    /// Error for out-of-bounds access.
    /// This variant is returned when a grid index lies outside the lattice.
    OutOfBounds(&'static str),
    /// Error for invalid world coordinates.
    /// This variant is returned when a world point has a NaN or infinite component.
    InvalidWorldCoordinates(&'static str),
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::InvalidConfiguration(msg) => {
                write!(f, "Invalid grid configuration: {}", msg)
            }
            GridError::OutOfBounds(msg) => write!(f, "Grid access out of bounds: {}", msg),
            GridError::InvalidWorldCoordinates(msg) => {
                write!(f, "Invalid world coordinates: {}", msg)
            }
        }
    }
}

impl core::error::Error for GridError {}
