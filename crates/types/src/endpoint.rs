//! Endpoint identification for link-traversal reporting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a simulated module instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleId(String);

impl ModuleId {
    /// Create a module identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ModuleId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ModuleId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One side of a link traversal: a module plus the connector the packet
/// crossed.
///
/// Carried through to diagnostic records only — classification never looks
/// at it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EndpointRef {
    /// The module instance.
    pub module: ModuleId,
    /// Index of the connector on that module.
    pub connector: u32,
}

impl EndpointRef {
    /// Create an endpoint reference.
    pub fn new(module: impl Into<ModuleId>, connector: u32) -> Self {
        Self {
            module: module.into(),
            connector,
        }
    }
}

impl fmt::Display for EndpointRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.module, self.connector)
    }
}
