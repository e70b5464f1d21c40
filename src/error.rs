use std::fmt;

/// Errors that can occur when using a poly-map
#[derive(Debug)]
pub enum MapError {
    /// The requested key was not found in the map
    KeyNotFound(String),
    /// A grouping operation was called without any group ids
    NoGroups,
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MapError::KeyNotFound(key) => write!(f, "Key not found in map: {}", key),
            MapError::NoGroups => write!(f, "At least one group is required"),
        }
    }
}

impl std::error::Error for MapError {}
