use contracts::dashboards::d401_row_counts::{RowCountsResponse, SummaryCardsResponse};

use crate::shared::upstream::UpstreamError;
use crate::system::state::AppState;

/// Количество записей по справочникам (через кэш состояния)
pub async fn get_counts(state: &AppState) -> Result<RowCountsResponse, UpstreamError> {
    state.row_counts.refresh(state.upstream.as_ref()).await
}

/// Карточки справочников для главной страницы
pub async fn get_cards(state: &AppState) -> Result<SummaryCardsResponse, UpstreamError> {
    let counts = get_counts(state).await?;
    Ok(SummaryCardsResponse {
        cards: counts.data.cards(),
        stale: counts.stale,
    })
}
