use async_trait::async_trait;
use contracts::dashboards::d401_row_counts::CountData;
use contracts::domain::a001_base_depot::BaseDepot;
use contracts::domain::a002_sub_godown::SubGodown;
use contracts::domain::a003_delivery_order::{DeliveryOrder, DeliveryOrderDto, NextDoNumber};
use contracts::domain::a004_do_allocation::AllocationRecord;
use contracts::shared::{PageQuery, Paginated};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use super::{paths, UpstreamApi, UpstreamError};
use crate::shared::config::UpstreamConfig;

/// HTTP-клиент upstream API
pub struct HttpUpstream {
    client: reqwest::Client,
    base_url: String,
}

impl HttpUpstream {
    pub fn new(config: &UpstreamConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// URL ресурса `{path}/{id}`; `id` кодируется как один сегмент пути
    fn item_url(&self, path: &str, id: &str) -> Result<reqwest::Url, UpstreamError> {
        let decode_error = |message: String| UpstreamError::Decode {
            path: path.to_string(),
            message,
        };
        let mut url = reqwest::Url::parse(&self.url(path)).map_err(|e| decode_error(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| decode_error(format!("{} cannot carry a path", self.base_url)))?
            .push(id);
        Ok(url)
    }

    /// GET с разбором JSON в `T`
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, UpstreamError> {
        self.get_url(path, self.url(path), query).await
    }

    async fn get_url<T: DeserializeOwned, U: reqwest::IntoUrl + Send>(
        &self,
        path: &str,
        url: U,
        query: &[(&str, String)],
    ) -> Result<T, UpstreamError> {
        tracing::debug!("GET {} {:?}", path, query);

        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .query(query)
            .send()
            .await
            .map_err(|source| UpstreamError::Transport {
                path: path.to_string(),
                source,
            })?;

        let body = read_body(path, response).await?;
        parse_body(path, &body)
    }

    /// POST/PUT с JSON телом; пустой ответ - `null`
    async fn send<B: Serialize + ?Sized + Sync>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<serde_json::Value, UpstreamError> {
        tracing::debug!("{} {}", method, path);

        let response = self
            .client
            .request(method, self.url(path))
            .header("Accept", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|source| UpstreamError::Transport {
                path: path.to_string(),
                source,
            })?;

        let body = read_body(path, response).await?;
        if body.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        parse_body(path, &body)
    }
}

async fn read_body(path: &str, response: reqwest::Response) -> Result<String, UpstreamError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::error!("Upstream request {} failed with status {}: {}", path, status, body);
        return Err(UpstreamError::Status {
            path: path.to_string(),
            status: status.as_u16(),
            body,
        });
    }

    response.text().await.map_err(|source| UpstreamError::Transport {
        path: path.to_string(),
        source,
    })
}

fn parse_body<T: DeserializeOwned>(path: &str, body: &str) -> Result<T, UpstreamError> {
    serde_json::from_str::<T>(body).map_err(|e| {
        let preview: String = body.chars().take(500).collect();
        tracing::error!("Failed to parse {} response: {}. Body: {}", path, e, preview);
        UpstreamError::Decode {
            path: path.to_string(),
            message: e.to_string(),
        }
    })
}

#[async_trait]
impl UpstreamApi for HttpUpstream {
    async fn list_allocations(
        &self,
        page: PageQuery,
    ) -> Result<Paginated<AllocationRecord>, UpstreamError> {
        self.get(paths::ALLOCATIONS, &page.to_query()).await
    }

    async fn list_sub_godowns(
        &self,
        page: PageQuery,
    ) -> Result<Paginated<SubGodown>, UpstreamError> {
        self.get(paths::SUB_GODOWNS, &page.to_query()).await
    }

    async fn list_delivery_orders(
        &self,
        page: PageQuery,
    ) -> Result<Paginated<DeliveryOrder>, UpstreamError> {
        self.get(paths::DELIVERY_ORDERS, &page.to_query()).await
    }

    async fn list_base_depots(
        &self,
        page: PageQuery,
    ) -> Result<Paginated<BaseDepot>, UpstreamError> {
        self.get(paths::BASE_DEPOTS, &page.to_query()).await
    }

    async fn get_delivery_order(&self, id: &str) -> Result<serde_json::Value, UpstreamError> {
        let url = self.item_url(paths::DELIVERY_ORDERS, id)?;
        self.get_url(paths::DELIVERY_ORDERS, url, &[]).await
    }

    async fn next_do_number(&self) -> Result<NextDoNumber, UpstreamError> {
        self.get(paths::NEXT_DO, &[]).await
    }

    async fn create_delivery_order(
        &self,
        dto: &DeliveryOrderDto,
    ) -> Result<serde_json::Value, UpstreamError> {
        self.send(Method::POST, paths::DELIVERY_ORDERS, dto).await
    }

    async fn update_delivery_order(
        &self,
        dto: &DeliveryOrderDto,
    ) -> Result<serde_json::Value, UpstreamError> {
        self.send(Method::PUT, paths::DELIVERY_ORDERS, dto).await
    }

    async fn create_allocation(
        &self,
        record: &AllocationRecord,
    ) -> Result<serde_json::Value, UpstreamError> {
        self.send(Method::POST, paths::ALLOCATIONS, record).await
    }

    async fn row_counts(&self) -> Result<CountData, UpstreamError> {
        self.get(paths::ROW_COUNTS, &[]).await
    }
}
