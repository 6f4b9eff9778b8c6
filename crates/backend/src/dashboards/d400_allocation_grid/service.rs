use contracts::dashboards::d400_allocation_grid::AllocationGridResponse;
use contracts::shared::{PageQuery, Paginated};

use super::pivot::AllocationPivot;
use crate::shared::upstream::UpstreamError;
use crate::system::state::AppState;

/// Страница сетки распределений D.O. по подскладам.
///
/// Четыре запроса к upstream выполняются параллельно; при ошибке любого
/// из них сетка не строится.
pub async fn get_grid(
    state: &AppState,
    page: PageQuery,
) -> Result<AllocationGridResponse, UpstreamError> {
    let upstream = state.upstream.as_ref();
    let catalog = PageQuery::new(1, state.config.catalog.limit);

    let (allocations, sub_godowns, delivery_orders, base_depots) = tokio::try_join!(
        upstream.list_allocations(page),
        upstream.list_sub_godowns(catalog),
        upstream.list_delivery_orders(catalog),
        upstream.list_base_depots(catalog),
    )?;

    warn_if_truncated("sub-godown", &sub_godowns);
    warn_if_truncated("delivery order", &delivery_orders);
    warn_if_truncated("base depot", &base_depots);

    for record in &allocations.data {
        if let Err(e) = record.validate() {
            tracing::warn!("Malformed allocation record: {}", e);
        }
    }

    let pivot = AllocationPivot::new(
        &sub_godowns.data,
        &delivery_orders.data,
        &base_depots.data,
        state.config.display.utc_offset_minutes,
    );
    let grid = pivot.build(&allocations.data, page.offset() + 1);

    Ok(AllocationGridResponse {
        grid,
        pagination: allocations.pagination,
    })
}

/// Справочник не поместился в одну страницу: часть колонок/связей потеряна
fn warn_if_truncated<T>(catalog: &str, page: &Paginated<T>) {
    let total = page.pagination.total;
    if total > page.data.len() as u64 {
        tracing::warn!(
            "{} catalog truncated: {} of {} records loaded",
            catalog,
            page.data.len(),
            total
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::Config;
    use crate::shared::upstream::fake::FakeUpstream;
    use crate::shared::upstream::paths;
    use contracts::dashboards::d400_allocation_grid::GridCell;
    use contracts::domain::a001_base_depot::BaseDepot;
    use contracts::domain::a002_sub_godown::SubGodown;
    use contracts::domain::a003_delivery_order::DeliveryOrder;
    use contracts::domain::a004_do_allocation::AllocationRecord;
    use contracts::shared::{DelimitedList, Scalar};
    use std::sync::Arc;

    fn fake() -> FakeUpstream {
        let sub_godown = |name: &str| SubGodown {
            uuid: None,
            parent_godown: None,
            sub_godown: name.into(),
            status: None,
            subgodown_id: None,
        };
        let allocation = |do_id: &str, godown: &str, vahtuk: &str, quantity: &str| AllocationRecord {
            do_id: Scalar::from(do_id),
            godown: DelimitedList::Joined(godown.into()),
            vahtuk: DelimitedList::Joined(vahtuk.into()),
            quantity: DelimitedList::Joined(quantity.into()),
        };

        FakeUpstream {
            allocations: vec![
                allocation("DO1", "Alpha|Beta", "Thet|Godown", "10|20"),
                allocation("DO2", "Gamma", "Godown", "5"),
                allocation("DO3", "Alpha", "Thet", "1"),
            ],
            sub_godowns: vec![sub_godown("Alpha"), sub_godown("Beta"), sub_godown("Gamma")],
            delivery_orders: vec![DeliveryOrder {
                stock_id: Some(Scalar::from(1_i64)),
                do_no: Scalar::from("DO1"),
                scheme_id: None,
                cota: Some("2024-03-01".into()),
                do_date: Some("2024-02-01".into()),
                godown_id: Some(Scalar::from(5_i64)),
                grain_id: None,
                quintal: None,
                quantity: None,
                total_amount: None,
                expire_date: None,
            }],
            base_depots: vec![BaseDepot {
                uuid: None,
                mswc_id: Scalar::from("5"),
                godown_name: "Nagpur".into(),
                godown_under: Some("Zone-1".into()),
                status: None,
            }],
            ..Default::default()
        }
    }

    fn state(upstream: Arc<FakeUpstream>) -> AppState {
        AppState::new(Config::embedded().unwrap(), upstream)
    }

    #[tokio::test]
    async fn test_grid_first_page() {
        let upstream = Arc::new(fake());
        let response = get_grid(&state(upstream.clone()), PageQuery::new(1, 10))
            .await
            .unwrap();

        assert_eq!(response.grid.columns.len(), 3);
        assert_eq!(response.grid.rows.len(), 3);
        assert_eq!(response.grid.rows[0].display_do_info, "DO1 - Zone-1 - 01/03/2024");
        assert_eq!(response.grid.rows[1].display_do_info, "DO2 - Unknown - Unknown");
        assert_eq!(
            response.grid.cell(0, "Beta").map(GridCell::label),
            Some("20/GODOWN".into())
        );
        assert_eq!(response.pagination.total, 3);

        let requests = upstream.requests.lock().unwrap().clone();
        assert!(requests.contains(&format!("{}?page=1&limit=10", paths::ALLOCATIONS)));
        assert!(requests.contains(&format!("{}?page=1&limit=1000", paths::SUB_GODOWNS)));
        assert!(requests.contains(&format!("{}?page=1&limit=1000", paths::DELIVERY_ORDERS)));
        assert!(requests.contains(&format!("{}?page=1&limit=1000", paths::BASE_DEPOTS)));
    }

    #[tokio::test]
    async fn test_running_numbers_continue_across_pages() {
        let upstream = Arc::new(fake());
        let response = get_grid(&state(upstream), PageQuery::new(2, 2))
            .await
            .unwrap();

        assert_eq!(response.grid.rows.len(), 1);
        assert_eq!(response.grid.rows[0].sr_no, 3);
        assert_eq!(response.grid.rows[0].do_id, Scalar::from("DO3"));
        assert_eq!(response.pagination.total_pages, 2);
    }

    #[tokio::test]
    async fn test_any_failed_fetch_fails_the_grid() {
        let upstream = Arc::new(fake());
        upstream.fail_on(paths::BASE_DEPOTS);

        let err = get_grid(&state(upstream.clone()), PageQuery::default())
            .await
            .unwrap_err();
        assert!(matches!(err, UpstreamError::Status { status: 500, .. }));

        upstream.recover(paths::BASE_DEPOTS);
        assert!(get_grid(&state(upstream), PageQuery::default()).await.is_ok());
    }
}
