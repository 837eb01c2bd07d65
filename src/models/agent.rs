use serde::{Deserialize, Serialize};

use crate::models::validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    #[serde(deserialize_with = "validate::non_empty")]
    pub account_id: String,
    #[serde(deserialize_with = "validate::non_empty")]
    pub symbol: String,
    #[serde(deserialize_with = "validate::non_empty")]
    pub headquarters: String,
    /// Can go negative when funds are overdrawn.
    pub credits: i64,
}
