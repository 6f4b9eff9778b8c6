use chrono::{DateTime, Utc};
use contracts::dashboards::d401_row_counts::{CountData, RowCountsResponse};
use tokio::sync::RwLock;

use crate::shared::upstream::{UpstreamApi, UpstreamError};

#[derive(Debug, Default)]
struct Snapshot {
    data: Option<CountData>,
    error: Option<String>,
    fetched_at: Option<DateTime<Utc>>,
}

/// Кэш количества записей по справочникам.
///
/// Хранит последний успешный ответ upstream. Принадлежит состоянию
/// приложения и передается в обработчики явно.
#[derive(Debug, Default)]
pub struct RowCountStore {
    inner: RwLock<Snapshot>,
}

impl RowCountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Запросить свежие данные у upstream.
    ///
    /// При ошибке отдается последний успешный снимок с `stale: true`
    /// и текстом ошибки; если снимка нет, ошибка возвращается вызывающему.
    pub async fn refresh(
        &self,
        upstream: &dyn UpstreamApi,
    ) -> Result<RowCountsResponse, UpstreamError> {
        let result = upstream.row_counts().await;
        let mut snapshot = self.inner.write().await;

        match result {
            Ok(data) => {
                let fetched_at = Utc::now();
                snapshot.data = Some(data.clone());
                snapshot.error = None;
                snapshot.fetched_at = Some(fetched_at);
                Ok(RowCountsResponse {
                    data,
                    stale: false,
                    fetched_at: Some(fetched_at),
                    error: None,
                })
            }
            Err(e) => {
                snapshot.error = Some(e.to_string());
                let Some(data) = snapshot.data.clone() else {
                    return Err(e);
                };
                tracing::warn!("Row counts refresh failed, serving cached snapshot: {}", e);
                Ok(RowCountsResponse {
                    data,
                    stale: true,
                    fetched_at: snapshot.fetched_at,
                    error: snapshot.error.clone(),
                })
            }
        }
    }
}
