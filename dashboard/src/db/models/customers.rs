//! Database models for customers.

/// Database response for a customer row
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerDBResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image_url: Option<String>,
}
