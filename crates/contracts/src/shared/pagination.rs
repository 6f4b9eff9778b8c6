use serde::{Deserialize, Deserializer, Serialize};

/// Paginated list as returned by every upstream list endpoint:
/// `{ "data": [...], "pagination": { "total", "page", "limit", "totalPages" } }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(rename = "totalPages", default)]
    pub total_pages: u32,
}

/// Query parameters `?page=&limit=` (page is 1-based)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub page: Option<u32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub limit: Option<u32>,
}

/// `?page=` (пустое значение) - как отсутствующий параметр
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u32),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            s.parse()
                .map(Some)
                .map_err(|_| serde::de::Error::custom(format!("'{}' is not a valid page number", s)))
        }
    }
}

impl PageQuery {
    pub const DEFAULT_PAGE: u32 = 1;
    pub const DEFAULT_LIMIT: u32 = 10;
    pub const MAX_LIMIT: u32 = 1000;

    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
        }
    }

    /// Page number, never below 1
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(Self::DEFAULT_PAGE).max(1)
    }

    /// Page size; 0 or missing falls back to the default, capped at `MAX_LIMIT`
    pub fn limit(&self) -> u32 {
        match self.limit {
            Some(0) | None => Self::DEFAULT_LIMIT,
            Some(l) => l.min(Self::MAX_LIMIT),
        }
    }

    /// Number of rows before the first row of this page
    pub fn offset(&self) -> u64 {
        (self.page() as u64 - 1) * self.limit() as u64
    }

    /// Query pairs for an upstream request
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page().to_string()),
            ("limit", self.limit().to_string()),
        ]
    }
}
