use serde::{Deserialize, Serialize};

/// Статус записи справочника
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordStatus {
    Active,
    Inactive,
    /// Любое другое значение из upstream
    #[serde(other)]
    Unknown,
}
