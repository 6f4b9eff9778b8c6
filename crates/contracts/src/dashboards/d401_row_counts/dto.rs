use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Количество записей и дата последнего изменения по справочникам
/// (ответ upstream `/api/getRowCounts`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountData {
    #[serde(default)]
    pub ownercount: u64,
    #[serde(default)]
    pub employeecount: u64,
    #[serde(default)]
    pub mswccount: u64,
    #[serde(default)]
    pub godowncount: u64,
    #[serde(default)]
    pub truckcount: u64,
    #[serde(default)]
    pub schemecount: u64,
    #[serde(default)]
    pub packagingcount: u64,
    #[serde(default)]
    pub drivercount: u64,
    #[serde(default)]
    pub graincount: u64,
    #[serde(default)]
    pub categorycount: u64,
    #[serde(rename = "lastModifiedOwners")]
    pub last_modified_owners: Option<String>,
    #[serde(rename = "lastModifiedEmployee")]
    pub last_modified_employee: Option<String>,
    #[serde(rename = "lastModifiedMSWC")]
    pub last_modified_mswc: Option<String>,
    #[serde(rename = "lastModifiedSubGodown")]
    pub last_modified_sub_godown: Option<String>,
    #[serde(rename = "lastModifiedTruck")]
    pub last_modified_truck: Option<String>,
    #[serde(rename = "lastModifiedScheme")]
    pub last_modified_scheme: Option<String>,
    #[serde(rename = "lastModifiedPackaging")]
    pub last_modified_packaging: Option<String>,
    #[serde(rename = "lastModifieddriver")]
    pub last_modified_driver: Option<String>,
    #[serde(rename = "lastModifiedGrain")]
    pub last_modified_grain: Option<String>,
    #[serde(rename = "lastModifiedCategory")]
    pub last_modified_category: Option<String>,
}

impl CountData {
    /// Карточки для главной страницы, в порядке меню справочников
    pub fn cards(&self) -> Vec<SummaryCard> {
        let card = |key: &str, title: &str, count: u64, last: &Option<String>| SummaryCard {
            key: key.to_string(),
            title: title.to_string(),
            count,
            last_modified: last.clone(),
        };

        vec![
            card("owners", "Owners", self.ownercount, &self.last_modified_owners),
            card("employees", "Employees", self.employeecount, &self.last_modified_employee),
            card("mswc", "MSWC", self.mswccount, &self.last_modified_mswc),
            card("godowns", "Godowns", self.godowncount, &self.last_modified_sub_godown),
            card("trucks", "Trucks", self.truckcount, &self.last_modified_truck),
            card("schemes", "Schemes", self.schemecount, &self.last_modified_scheme),
            card("packaging", "Packaging", self.packagingcount, &self.last_modified_packaging),
            card("drivers", "Drivers", self.drivercount, &self.last_modified_driver),
            card("grains", "Grains", self.graincount, &self.last_modified_grain),
            card("category", "Category", self.categorycount, &self.last_modified_category),
        ]
    }
}

/// Карточка справочника на главной странице
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryCard {
    pub key: String,
    pub title: String,
    pub count: u64,
    pub last_modified: Option<String>,
}

/// Ответ `GET /api/get-count`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowCountsResponse {
    pub data: CountData,
    /// true, если upstream недоступен и отдан последний сохраненный снимок
    #[serde(default)]
    pub stale: bool,
    pub fetched_at: Option<DateTime<Utc>>,
    /// Ошибка последнего обращения к upstream (только для `stale`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Ответ `GET /api/get-count/cards`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryCardsResponse {
    pub cards: Vec<SummaryCard>,
    #[serde(default)]
    pub stale: bool,
}
