use serde::{Deserialize, Serialize};

/// An entry in the top bar notification menu.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub id: u32,
    pub text: String,
    /// Relative age as displayed, e.g. "2 hours ago"
    pub age: String,
}
