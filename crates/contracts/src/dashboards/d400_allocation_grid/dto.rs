use serde::{Deserialize, Serialize};

use crate::shared::{Pagination, Scalar};

/// Fallback label for unresolved lookups
pub const UNKNOWN: &str = "Unknown";

/// Prefix of dynamic sub-godown column ids
pub const GODOWN_COLUMN_PREFIX: &str = "godown_";

/// One dynamic column: a sub-godown from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridColumn {
    /// Column identifier (e.g., "godown_Alpha")
    pub id: String,
    /// Header text: the sub-godown name as it is in the catalog
    pub header: String,
}

impl GridColumn {
    pub fn for_sub_godown(name: &str) -> Self {
        Self {
            id: format!("{}{}", GODOWN_COLUMN_PREFIX, name),
            header: name.to_string(),
        }
    }
}

/// Non-empty cell: allocated quantity and its vahtuk tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    /// Primary text
    pub quantity: String,
    /// Secondary text, uppercased (e.g., "THET")
    pub vahtuk: String,
}

impl GridCell {
    /// Compact text form, e.g. "10/THET"
    pub fn label(&self) -> String {
        format!("{}/{}", self.quantity, self.vahtuk)
    }
}

/// One row per allocation record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationGridRow {
    /// 1-based running number across pages
    pub sr_no: u64,
    pub do_id: Scalar,
    pub godown: Vec<String>,
    pub vahtuk: Vec<String>,
    pub quantity: Vec<String>,
    /// "{do_id} - {group_under} - {quota date}"
    pub display_do_info: String,
    /// Cells aligned with `AllocationGrid::columns`; `None` is an empty cell
    pub cells: Vec<Option<GridCell>>,
}

/// Sparse grid: fixed columns (Sr. No., D.O. No.) are implicit,
/// `columns` lists the dynamic sub-godown columns
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AllocationGrid {
    pub columns: Vec<GridColumn>,
    pub rows: Vec<AllocationGridRow>,
}

impl AllocationGrid {
    /// Cell of row `row` under the column whose header is `header`
    pub fn cell(&self, row: usize, header: &str) -> Option<&GridCell> {
        let col = self.columns.iter().position(|c| c.header == header)?;
        self.rows.get(row)?.cells.get(col)?.as_ref()
    }
}

/// Response for `GET /api/do-allocation/grid`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationGridResponse {
    #[serde(flatten)]
    pub grid: AllocationGrid,
    /// Pagination of the allocation list (catalogs are not paginated here)
    pub pagination: Pagination,
}
