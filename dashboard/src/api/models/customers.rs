//! API response models for customers.

use crate::db::models::customers::CustomerDBResponse;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A customer record, returned as stored
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CustomerResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl From<CustomerDBResponse> for CustomerResponse {
    fn from(db: CustomerDBResponse) -> Self {
        Self {
            id: db.id,
            name: db.name,
            email: db.email,
            image_url: db.image_url,
        }
    }
}
