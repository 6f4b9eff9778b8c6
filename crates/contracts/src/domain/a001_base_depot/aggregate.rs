use serde::{Deserialize, Serialize};

use crate::enums::RecordStatus;
use crate::shared::Scalar;

/// Базовое депо (MSWC), от которого выписывается D.O.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseDepot {
    pub uuid: Option<String>,

    pub mswc_id: Scalar,

    #[serde(rename = "godownName", default)]
    pub godown_name: String,

    /// Группа, к которой относится депо ("group under")
    #[serde(rename = "godownUnder")]
    pub godown_under: Option<String>,

    pub status: Option<RecordStatus>,
}

impl BaseDepot {
    /// Метка группы; пустая строка считается отсутствующей
    pub fn group_under(&self) -> Option<&str> {
        self.godown_under
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
