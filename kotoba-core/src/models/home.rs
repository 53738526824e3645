use serde::{Deserialize, Serialize};

/// A selling point on the landing page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub avatar_url: String,
    pub text: String,
}
