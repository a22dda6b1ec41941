use serde::Serialize;

use super::entities::FinanceRange;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetFinanceDataRequest {
    #[serde(rename = "type")]
    pub range: FinanceRange,
}
