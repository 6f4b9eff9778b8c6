use serde::{Deserialize, Serialize};

use crate::enums::RecordStatus;
use crate::shared::Scalar;

/// Подсклад (sub-godown). В таблице распределения имя подсклада - ключ колонки.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubGodown {
    pub uuid: Option<String>,

    #[serde(rename = "parentGodown")]
    pub parent_godown: Option<String>,

    #[serde(rename = "subGodown")]
    pub sub_godown: String,

    pub status: Option<RecordStatus>,

    pub subgodown_id: Option<Scalar>,
}

impl SubGodown {
    /// Имя колонки в таблице распределения
    pub fn column_name(&self) -> &str {
        &self.sub_godown
    }
}
