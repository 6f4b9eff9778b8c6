use async_trait::async_trait;
use contracts::dashboards::d401_row_counts::CountData;
use contracts::domain::a001_base_depot::BaseDepot;
use contracts::domain::a002_sub_godown::SubGodown;
use contracts::domain::a003_delivery_order::{DeliveryOrder, DeliveryOrderDto, NextDoNumber};
use contracts::domain::a004_do_allocation::AllocationRecord;
use contracts::shared::{PageQuery, Paginated, Pagination, Scalar};
use serde_json::json;
use std::sync::Mutex;

use super::{paths, UpstreamApi, UpstreamError};

/// In-memory upstream for tests
#[derive(Default)]
pub struct FakeUpstream {
    pub allocations: Vec<AllocationRecord>,
    pub sub_godowns: Vec<SubGodown>,
    pub delivery_orders: Vec<DeliveryOrder>,
    pub base_depots: Vec<BaseDepot>,
    pub next_do_no: Option<Scalar>,
    pub counts: Mutex<Option<CountData>>,

    /// Paths answered with status 500, see `fail_on`
    pub failing: Mutex<Vec<&'static str>>,
    pub requests: Mutex<Vec<String>>,
    pub created_orders: Mutex<Vec<DeliveryOrderDto>>,
    pub updated_orders: Mutex<Vec<DeliveryOrderDto>>,
    pub created_allocations: Mutex<Vec<AllocationRecord>>,
}

impl FakeUpstream {
    /// Make every request to `path` fail with status 500
    pub fn fail_on(&self, path: &'static str) {
        self.failing.lock().unwrap().push(path);
    }

    pub fn recover(&self, path: &'static str) {
        self.failing.lock().unwrap().retain(|p| *p != path);
    }

    fn hit(&self, path: &'static str, page: Option<PageQuery>) -> Result<(), UpstreamError> {
        let line = match page {
            Some(p) => format!("{}?page={}&limit={}", path, p.page(), p.limit()),
            None => path.to_string(),
        };
        self.requests.lock().unwrap().push(line);

        if self.failing.lock().unwrap().contains(&path) {
            return Err(UpstreamError::Status {
                path: path.to_string(),
                status: 500,
                body: "Internal Server Error".into(),
            });
        }
        Ok(())
    }
}

fn paginate<T: Clone>(items: &[T], page: PageQuery) -> Paginated<T> {
    let limit = page.limit() as usize;
    let data: Vec<T> = items
        .iter()
        .skip(page.offset() as usize)
        .take(limit)
        .cloned()
        .collect();

    Paginated {
        data,
        pagination: Pagination {
            total: items.len() as u64,
            page: page.page(),
            limit: page.limit(),
            total_pages: items.len().div_ceil(limit) as u32,
        },
    }
}

#[async_trait]
impl UpstreamApi for FakeUpstream {
    async fn list_allocations(
        &self,
        page: PageQuery,
    ) -> Result<Paginated<AllocationRecord>, UpstreamError> {
        self.hit(paths::ALLOCATIONS, Some(page))?;
        Ok(paginate(&self.allocations, page))
    }

    async fn list_sub_godowns(
        &self,
        page: PageQuery,
    ) -> Result<Paginated<SubGodown>, UpstreamError> {
        self.hit(paths::SUB_GODOWNS, Some(page))?;
        Ok(paginate(&self.sub_godowns, page))
    }

    async fn list_delivery_orders(
        &self,
        page: PageQuery,
    ) -> Result<Paginated<DeliveryOrder>, UpstreamError> {
        self.hit(paths::DELIVERY_ORDERS, Some(page))?;
        Ok(paginate(&self.delivery_orders, page))
    }

    async fn list_base_depots(
        &self,
        page: PageQuery,
    ) -> Result<Paginated<BaseDepot>, UpstreamError> {
        self.hit(paths::BASE_DEPOTS, Some(page))?;
        Ok(paginate(&self.base_depots, page))
    }

    async fn get_delivery_order(&self, id: &str) -> Result<serde_json::Value, UpstreamError> {
        self.hit(paths::DELIVERY_ORDERS, None)?;
        let order = self
            .delivery_orders
            .iter()
            .find(|o| o.do_no.key() == id || o.stock_id.as_ref().is_some_and(|s| s.key() == id))
            .ok_or_else(|| UpstreamError::Status {
                path: format!("{}/{}", paths::DELIVERY_ORDERS, id),
                status: 404,
                body: "D.O. not found".into(),
            })?;
        Ok(json!({ "data": order }))
    }

    async fn next_do_number(&self) -> Result<NextDoNumber, UpstreamError> {
        self.hit(paths::NEXT_DO, None)?;
        Ok(NextDoNumber {
            next_do_no: self.next_do_no.clone().unwrap_or_else(|| Scalar::from(1_i64)),
        })
    }

    async fn create_delivery_order(
        &self,
        dto: &DeliveryOrderDto,
    ) -> Result<serde_json::Value, UpstreamError> {
        self.hit(paths::DELIVERY_ORDERS, None)?;
        self.created_orders.lock().unwrap().push(dto.clone());
        Ok(json!({ "message": "created", "do_no": dto.do_no }))
    }

    async fn update_delivery_order(
        &self,
        dto: &DeliveryOrderDto,
    ) -> Result<serde_json::Value, UpstreamError> {
        self.hit(paths::DELIVERY_ORDERS, None)?;
        self.updated_orders.lock().unwrap().push(dto.clone());
        Ok(json!({ "message": "updated" }))
    }

    async fn create_allocation(
        &self,
        record: &AllocationRecord,
    ) -> Result<serde_json::Value, UpstreamError> {
        self.hit(paths::ALLOCATIONS, None)?;
        self.created_allocations.lock().unwrap().push(record.clone());
        Ok(json!({ "message": "allocated" }))
    }

    async fn row_counts(&self) -> Result<CountData, UpstreamError> {
        self.hit(paths::ROW_COUNTS, None)?;
        Ok(self.counts.lock().unwrap().clone().unwrap_or_default())
    }
}
