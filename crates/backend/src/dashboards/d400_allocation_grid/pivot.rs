use contracts::dashboards::d400_allocation_grid::{
    AllocationGrid, AllocationGridRow, GridCell, GridColumn, UNKNOWN,
};
use contracts::domain::a001_base_depot::BaseDepot;
use contracts::domain::a002_sub_godown::SubGodown;
use contracts::domain::a003_delivery_order::DeliveryOrder;
use contracts::domain::a004_do_allocation::{AllocationRecord, NormalizedAllocation};
use contracts::shared::date_utils::format_display_date;
use contracts::shared::Scalar;
use std::collections::HashMap;

/// Pivot of allocation records into a row-per-record,
/// column-per-sub-godown sparse grid.
///
/// Lookup tables are built once from the catalogs; `build` is a pure
/// function of its input and may be called any number of times.
pub struct AllocationPivot<'a> {
    /// Dynamic columns, one per catalog entry, in catalog order
    columns: Vec<GridColumn>,
    /// D.O. by `do_no` key; the first record wins on duplicates
    orders: HashMap<String, &'a DeliveryOrder>,
    /// `godownUnder` by `mswc_id` key
    group_under: HashMap<String, &'a str>,
    /// Display zone for quota dates carrying a time part
    utc_offset_minutes: i32,
}

impl<'a> AllocationPivot<'a> {
    pub fn new(
        sub_godowns: &[SubGodown],
        delivery_orders: &'a [DeliveryOrder],
        base_depots: &'a [BaseDepot],
        utc_offset_minutes: i32,
    ) -> Self {
        let columns = sub_godowns
            .iter()
            .map(|sg| GridColumn::for_sub_godown(sg.column_name()))
            .collect();

        let mut orders = HashMap::new();
        for order in delivery_orders {
            orders.entry(order.do_no.key()).or_insert(order);
        }

        let mut group_under = HashMap::new();
        for depot in base_depots {
            if let Some(label) = depot.group_under() {
                group_under.entry(depot.mswc_id.key()).or_insert(label);
            }
        }

        Self {
            columns,
            orders,
            group_under,
            utc_offset_minutes,
        }
    }

    /// Build the grid; `first_sr_no` is the running number of the first row
    pub fn build(&self, allocations: &[AllocationRecord], first_sr_no: u64) -> AllocationGrid {
        let rows = allocations
            .iter()
            .enumerate()
            .map(|(i, record)| self.build_row(record, first_sr_no + i as u64))
            .collect();

        AllocationGrid {
            columns: self.columns.clone(),
            rows,
        }
    }

    fn build_row(&self, record: &AllocationRecord, sr_no: u64) -> AllocationGridRow {
        let normalized = record.normalized();
        let cells = self
            .columns
            .iter()
            .map(|column| Self::cell_for(&normalized, &column.header))
            .collect();

        AllocationGridRow {
            sr_no,
            display_do_info: self.display_do_info(&record.do_id),
            do_id: normalized.do_id,
            godown: normalized.godown,
            vahtuk: normalized.vahtuk,
            quantity: normalized.quantity,
            cells,
        }
    }

    fn cell_for(allocation: &NormalizedAllocation, sub_godown: &str) -> Option<GridCell> {
        let index = allocation.position_of(sub_godown)?;
        let (quantity, vahtuk) = allocation.line(index);
        Some(GridCell {
            quantity: quantity.to_string(),
            vahtuk: vahtuk.to_uppercase(),
        })
    }

    /// "{do_id} - {group_under} - {DD/MM/YYYY}" with "Unknown" for failed lookups
    pub fn display_do_info(&self, do_id: &Scalar) -> String {
        let (group_under, quota_date) = match self.orders.get(&do_id.key()) {
            Some(order) => {
                let group_under = order
                    .godown_id
                    .as_ref()
                    .and_then(|id| self.group_under.get(&id.key()).copied())
                    .unwrap_or(UNKNOWN);
                let quota_date = order
                    .cota
                    .as_deref()
                    .map(|cota| format_display_date(cota, self.utc_offset_minutes))
                    .unwrap_or_else(|| UNKNOWN.to_string());
                (group_under, quota_date)
            }
            None => (UNKNOWN, UNKNOWN.to_string()),
        };

        format!("{} - {} - {}", do_id, group_under, quota_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::DelimitedList;

    const IST: i32 = 330;

    fn sub_godown(name: &str) -> SubGodown {
        SubGodown {
            uuid: None,
            parent_godown: None,
            sub_godown: name.into(),
            status: None,
            subgodown_id: None,
        }
    }

    fn order(do_no: Scalar, godown_id: &str, cota: &str) -> DeliveryOrder {
        DeliveryOrder {
            stock_id: None,
            do_no,
            scheme_id: None,
            cota: Some(cota.into()),
            do_date: None,
            godown_id: Some(Scalar::from(godown_id)),
            grain_id: None,
            quintal: None,
            quantity: None,
            total_amount: None,
            expire_date: None,
        }
    }

    fn depot(mswc_id: Scalar, group_under: &str) -> BaseDepot {
        BaseDepot {
            uuid: None,
            mswc_id,
            godown_name: String::new(),
            godown_under: Some(group_under.into()),
            status: None,
        }
    }

    fn allocation(do_id: &str, godown: &[&str], vahtuk: &[&str], quantity: &[&str]) -> AllocationRecord {
        let items = |v: &[&str]| DelimitedList::Items(v.iter().map(|s| s.to_string()).collect());
        AllocationRecord {
            do_id: Scalar::from(do_id),
            godown: items(godown),
            vahtuk: items(vahtuk),
            quantity: items(quantity),
        }
    }

    #[test]
    fn test_example_grid() {
        let catalog = vec![sub_godown("Alpha"), sub_godown("Beta"), sub_godown("Gamma")];
        let orders = vec![order(Scalar::from("DO1"), "5", "2024-03-01")];
        let depots = vec![depot(Scalar::from("5"), "Zone-1")];
        let records = vec![allocation(
            "DO1",
            &["Alpha", "Beta"],
            &["Thet", "Godown"],
            &["10", "20"],
        )];

        let pivot = AllocationPivot::new(&catalog, &orders, &depots, IST);
        let grid = pivot.build(&records, 1);

        assert_eq!(grid.rows.len(), 1);
        let row = &grid.rows[0];
        assert_eq!(row.sr_no, 1);
        assert_eq!(row.display_do_info, "DO1 - Zone-1 - 01/03/2024");
        assert_eq!(grid.cell(0, "Alpha").map(GridCell::label), Some("10/THET".into()));
        assert_eq!(grid.cell(0, "Beta").map(GridCell::label), Some("20/GODOWN".into()));
        assert!(grid.cell(0, "Gamma").is_none());
        assert_eq!(row.cells.len(), 3);
    }

    #[test]
    fn test_pipe_delimited_fields_are_normalized() {
        let catalog = vec![sub_godown("Beta")];
        let record = AllocationRecord {
            do_id: Scalar::from(42_i64),
            godown: DelimitedList::Joined("Alpha|Beta".into()),
            vahtuk: DelimitedList::Joined("Thet|Godown".into()),
            quantity: DelimitedList::Joined("7|8".into()),
        };

        let pivot = AllocationPivot::new(&catalog, &[], &[], IST);
        let grid = pivot.build(&[record], 1);
        let row = &grid.rows[0];

        assert_eq!(row.godown, vec!["Alpha", "Beta"]);
        assert_eq!(row.vahtuk, vec!["Thet", "Godown"]);
        assert_eq!(row.quantity, vec!["7", "8"]);
        assert_eq!(row.godown.join("|"), "Alpha|Beta");
        assert_eq!(grid.cell(0, "Beta").map(GridCell::label), Some("8/GODOWN".into()));
    }

    #[test]
    fn test_unmatched_do_is_unknown() {
        let pivot = AllocationPivot::new(&[], &[], &[], IST);
        let info = pivot.display_do_info(&Scalar::from("DO9"));
        assert_eq!(info, "DO9 - Unknown - Unknown");
        assert!(info.ends_with("- Unknown - Unknown"));
    }

    #[test]
    fn test_missing_depot_keeps_quota_date() {
        let orders = vec![order(Scalar::from("DO1"), "99", "2024-03-01")];
        let depots = vec![depot(Scalar::from("5"), "Zone-1")];
        let pivot = AllocationPivot::new(&[], &orders, &depots, IST);
        assert_eq!(
            pivot.display_do_info(&Scalar::from("DO1")),
            "DO1 - Unknown - 01/03/2024"
        );
    }

    #[test]
    fn test_numeric_and_text_ids_join() {
        let orders = vec![order(Scalar::from(1024_i64), "5", "2024-03-01T00:00:00")];
        let depots = vec![depot(Scalar::from(5_i64), "Zone-2")];
        let pivot = AllocationPivot::new(&[], &orders, &depots, IST);
        assert_eq!(
            pivot.display_do_info(&Scalar::from("1024")),
            "1024 - Zone-2 - 01/03/2024"
        );
    }

    #[test]
    fn test_first_matching_order_wins() {
        let orders = vec![
            order(Scalar::from("DO1"), "5", "2024-03-01"),
            order(Scalar::from("DO1"), "6", "2025-01-01"),
        ];
        let depots = vec![depot(Scalar::from("5"), "Zone-1"), depot(Scalar::from("6"), "Zone-2")];
        let pivot = AllocationPivot::new(&[], &orders, &depots, IST);
        assert_eq!(
            pivot.display_do_info(&Scalar::from("DO1")),
            "DO1 - Zone-1 - 01/03/2024"
        );
    }

    #[test]
    fn test_malformed_quota_date_is_shown_as_is() {
        let orders = vec![order(Scalar::from("DO1"), "5", "next month")];
        let depots = vec![depot(Scalar::from("5"), "Zone-1")];
        let pivot = AllocationPivot::new(&[], &orders, &depots, IST);
        assert_eq!(
            pivot.display_do_info(&Scalar::from("DO1")),
            "DO1 - Zone-1 - next month"
        );
    }

    #[test]
    fn test_matching_ignores_case_and_whitespace() {
        let catalog = vec![sub_godown("  ALPHA ")];
        let records = vec![allocation("DO1", &["alpha"], &["thet"], &["3"])];
        let pivot = AllocationPivot::new(&catalog, &[], &[], IST);
        let grid = pivot.build(&records, 1);
        assert_eq!(grid.columns[0].header, "  ALPHA ");
        assert_eq!(grid.rows[0].cells[0].as_ref().map(GridCell::label), Some("3/THET".into()));
    }

    #[test]
    fn test_cells_do_not_depend_on_catalog_order() {
        let records = vec![
            allocation("DO1", &["Alpha", "Beta"], &["Thet", "Godown"], &["10", "20"]),
            allocation("DO2", &["Gamma"], &["Godown"], &["5"]),
        ];
        let forward = vec![sub_godown("Alpha"), sub_godown("Beta"), sub_godown("Gamma")];
        let reversed: Vec<SubGodown> = forward.iter().rev().cloned().collect();

        let a = AllocationPivot::new(&forward, &[], &[], IST).build(&records, 1);
        let b = AllocationPivot::new(&reversed, &[], &[], IST).build(&records, 1);

        for row in 0..records.len() {
            for name in ["Alpha", "Beta", "Gamma"] {
                assert_eq!(a.cell(row, name), b.cell(row, name), "row {row}, column {name}");
            }
        }
    }

    #[test]
    fn test_mismatched_lengths_leave_missing_parts_blank() {
        let catalog = vec![sub_godown("C")];
        let records = vec![allocation("DO1", &["A", "B", "C"], &["Thet"], &["1", "2"])];
        let grid = AllocationPivot::new(&catalog, &[], &[], IST).build(&records, 1);
        assert_eq!(
            grid.cell(0, "C"),
            Some(&GridCell {
                quantity: String::new(),
                vahtuk: String::new(),
            })
        );
    }

    #[test]
    fn test_running_numbers_and_idempotence() {
        let catalog = vec![sub_godown("Alpha")];
        let records = vec![
            allocation("DO1", &["Alpha"], &["Thet"], &["1"]),
            allocation("DO2", &["Beta"], &["Godown"], &["2"]),
        ];
        let pivot = AllocationPivot::new(&catalog, &[], &[], IST);

        let first = pivot.build(&records, 21);
        let second = pivot.build(&records, 21);
        assert_eq!(first, second);
        assert_eq!(first.rows[0].sr_no, 21);
        assert_eq!(first.rows[1].sr_no, 22);
        assert!(first.rows[1].cells[0].is_none());
    }
}
