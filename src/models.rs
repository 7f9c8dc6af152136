use serde::{Deserialize, Serialize};

/// Response type for successful DELETE operations
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct DeleteResponse {
    pub message: String,
}

impl DeleteResponse {
    pub fn cleared(basket_name: &str) -> Self {
        Self {
            message: format!("Basket {} cleared successfully.", basket_name),
        }
    }
}
