//! Клиент внешнего backend REST API (upstream).
//!
//! Все обращения к upstream идут через трейт [`UpstreamApi`], который
//! передается в обработчики через состояние приложения.

pub mod http_client;

#[cfg(test)]
pub mod fake;

use async_trait::async_trait;
use contracts::dashboards::d401_row_counts::CountData;
use contracts::domain::a001_base_depot::BaseDepot;
use contracts::domain::a002_sub_godown::SubGodown;
use contracts::domain::a003_delivery_order::{DeliveryOrder, DeliveryOrderDto, NextDoNumber};
use contracts::domain::a004_do_allocation::AllocationRecord;
use contracts::shared::{PageQuery, Paginated};
use thiserror::Error;

pub use http_client::HttpUpstream;

/// Пути upstream API
pub mod paths {
    pub const ALLOCATIONS: &str = "/api/alloc";
    pub const SUB_GODOWNS: &str = "/api/subgodowns";
    pub const DELIVERY_ORDERS: &str = "/api/do";
    pub const NEXT_DO: &str = "/api/do/next-do";
    pub const BASE_DEPOTS: &str = "/api/mswc";
    pub const ROW_COUNTS: &str = "/api/getRowCounts";
}

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{path} returned {status}: {body}")]
    Status {
        path: String,
        status: u16,
        body: String,
    },

    #[error("cannot parse {path} response: {message}")]
    Decode { path: String, message: String },
}

/// Операции upstream API, которые использует дашборд
#[async_trait]
pub trait UpstreamApi: Send + Sync {
    async fn list_allocations(
        &self,
        page: PageQuery,
    ) -> Result<Paginated<AllocationRecord>, UpstreamError>;

    async fn list_sub_godowns(&self, page: PageQuery)
        -> Result<Paginated<SubGodown>, UpstreamError>;

    async fn list_delivery_orders(
        &self,
        page: PageQuery,
    ) -> Result<Paginated<DeliveryOrder>, UpstreamError>;

    async fn list_base_depots(&self, page: PageQuery)
        -> Result<Paginated<BaseDepot>, UpstreamError>;

    /// Один D.O. по идентификатору (`/api/do/{id}`), ответ upstream как есть
    async fn get_delivery_order(&self, id: &str) -> Result<serde_json::Value, UpstreamError>;

    async fn next_do_number(&self) -> Result<NextDoNumber, UpstreamError>;

    async fn create_delivery_order(
        &self,
        dto: &DeliveryOrderDto,
    ) -> Result<serde_json::Value, UpstreamError>;

    async fn update_delivery_order(
        &self,
        dto: &DeliveryOrderDto,
    ) -> Result<serde_json::Value, UpstreamError>;

    async fn create_allocation(
        &self,
        record: &AllocationRecord,
    ) -> Result<serde_json::Value, UpstreamError>;

    async fn row_counts(&self) -> Result<CountData, UpstreamError>;
}
