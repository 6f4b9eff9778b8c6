use std::sync::Arc;

use crate::dashboards::d401_row_counts::store::RowCountStore;
use crate::shared::config::Config;
use crate::shared::upstream::UpstreamApi;

/// Состояние приложения, передаваемое в обработчики
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub upstream: Arc<dyn UpstreamApi>,
    pub row_counts: Arc<RowCountStore>,
}

impl AppState {
    pub fn new(config: Config, upstream: Arc<dyn UpstreamApi>) -> Self {
        Self {
            config: Arc::new(config),
            upstream,
            row_counts: Arc::new(RowCountStore::new()),
        }
    }
}
