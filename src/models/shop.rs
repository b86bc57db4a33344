//! Shop model and request types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A physical sales location.
///
/// Maps to the `shops` table. `name` is unique and doubles as the display
/// name in report cards, chart legends and alert messages. A shop exists
/// independently of its records and may have none.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize)]
pub struct Shop {
    pub id: Uuid,
    pub name: String,
    pub location: String,
}

/// Request body for creating a shop.
///
/// ```json
/// { "name": "Milk Shop", "location": "Main Street" }
/// ```
#[derive(Debug, Deserialize)]
pub struct CreateShopRequest {
    pub name: String,

    #[serde(default)]
    pub location: String,
}

impl CreateShopRequest {
    /// Trim the name and reject blank ones.
    pub fn validate(&self) -> Result<String, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Shop name must not be empty".to_string());
        }
        if name.chars().count() > 100 {
            return Err("Shop name exceeds 100 characters".to_string());
        }
        Ok(name.to_string())
    }
}
