//! Role domain entity

use std::fmt;

/// Role model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub id: i32,
    /// Unique role name
    pub name: String,
    pub description: Option<String>,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Role: name={}>", self.name)
    }
}
