//! Category Model

use serde::{Deserialize, Serialize};

/// Category entity, used as a facet option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub slug: String,
}
