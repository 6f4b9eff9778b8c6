use contracts::domain::a003_delivery_order::{
    DeliveryOrder, DeliveryOrderDto, DoGenerateRequest, DoGenerateResponse, NextDoNumber,
};
use contracts::shared::{PageQuery, Paginated};

use crate::shared::error::AppError;
use crate::shared::upstream::UpstreamApi;

/// Страница списка D.O.
pub async fn list(
    upstream: &dyn UpstreamApi,
    page: PageQuery,
) -> Result<Paginated<DeliveryOrder>, AppError> {
    Ok(upstream.list_delivery_orders(page).await?)
}

/// D.O. по идентификатору (для формы редактирования)
pub async fn get_by_id(upstream: &dyn UpstreamApi, id: &str) -> Result<serde_json::Value, AppError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(AppError::Validation("D.O. id is required".into()));
    }
    Ok(upstream.get_delivery_order(id).await?)
}

/// Следующий свободный номер D.O.
pub async fn next_do_number(upstream: &dyn UpstreamApi) -> Result<NextDoNumber, AppError> {
    Ok(upstream.next_do_number().await?)
}

/// Создание D.O. и, если заполнен второй шаг, его распределения по подскладам
pub async fn create(
    upstream: &dyn UpstreamApi,
    request: DoGenerateRequest,
) -> Result<DoGenerateResponse, AppError> {
    let request = request.normalized();

    // Валидация
    request.validate().map_err(AppError::Validation)?;

    let order = upstream.create_delivery_order(&request.order).await?;
    tracing::info!("D.O. {} created", request.order.do_no);

    let Some(record) = request.allocation_record() else {
        return Ok(DoGenerateResponse {
            order,
            allocation: None,
            allocation_error: None,
        });
    };

    match upstream.create_allocation(&record).await {
        Ok(allocation) => {
            tracing::info!(
                "D.O. {} allocated to sub-godowns {}",
                record.do_id,
                record.godown.joined()
            );
            Ok(DoGenerateResponse {
                order,
                allocation: Some(allocation),
                allocation_error: None,
            })
        }
        Err(e) => {
            tracing::error!("D.O. {} created but allocation failed: {}", record.do_id, e);
            Ok(DoGenerateResponse {
                order,
                allocation: None,
                allocation_error: Some(e.to_string()),
            })
        }
    }
}

/// Обновление существующего D.O.
pub async fn update(
    upstream: &dyn UpstreamApi,
    dto: DeliveryOrderDto,
) -> Result<serde_json::Value, AppError> {
    let dto = dto.normalized();

    // Валидация
    dto.validate_for_update().map_err(AppError::Validation)?;

    let result = upstream.update_delivery_order(&dto).await?;
    tracing::info!("D.O. {} updated", dto.do_no);
    Ok(result)
}
