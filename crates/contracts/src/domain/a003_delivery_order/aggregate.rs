use serde::{Deserialize, Serialize};

use crate::domain::a004_do_allocation::{validate_entries, AllocationEntry, AllocationRecord};
use crate::shared::date_utils::{date_part, parse_form_date};
use crate::shared::validation::{is_decimal, require};
use crate::shared::Scalar;

// ============================================================================
// Read model
// ============================================================================

/// Delivery Order (D.O.) в том виде, в каком его отдает upstream `/api/do`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryOrder {
    pub stock_id: Option<Scalar>,
    pub do_no: Scalar,
    pub scheme_id: Option<Scalar>,
    /// Срок действия квоты (ISO дата)
    pub cota: Option<String>,
    pub do_date: Option<String>,
    /// Ссылка на базовое депо (`mswc_id`)
    pub godown_id: Option<Scalar>,
    pub grain_id: Option<Scalar>,
    pub quintal: Option<Scalar>,
    pub quantity: Option<Scalar>,
    pub total_amount: Option<Scalar>,
    pub expire_date: Option<String>,
}

/// Ответ `/api/do/next-do`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextDoNumber {
    pub next_do_no: Scalar,
}

// ============================================================================
// Write model
// ============================================================================

/// Форма создания/редактирования D.O.
///
/// Незаполненные поля формы приходят пустыми и отклоняются в `validate()`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryOrderDto {
    pub do_no: Scalar,
    /// Base Depo (`mswc_id`)
    pub godown_id: String,
    pub do_date: String,
    /// Quota date
    pub cota: String,
    pub scheme_id: String,
    pub grain_id: String,
    pub quantity: String,
    /// Обязателен при обновлении
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_id: Option<Scalar>,
}

impl DeliveryOrderDto {
    /// Обрезать пробелы и отбросить время у дат ("2024-03-15T00:00:00Z" -> "2024-03-15")
    pub fn normalized(mut self) -> Self {
        self.godown_id = self.godown_id.trim().to_string();
        self.do_date = date_part(&self.do_date).to_string();
        self.cota = date_part(&self.cota).to_string();
        self.scheme_id = self.scheme_id.trim().to_string();
        self.grain_id = self.grain_id.trim().to_string();
        self.quantity = self.quantity.trim().to_string();
        self
    }

    /// Валидация данных формы
    pub fn validate(&self) -> Result<(), String> {
        if self.do_no.is_blank() {
            return Err("D.O. No. is required".into());
        }
        require(&self.godown_id, "Base Depo is required")?;
        require(&self.do_date, "DO Date is required")?;
        require(&self.cota, "Quota Date is required")?;
        require(&self.scheme_id, "Scheme is required")?;
        require(&self.grain_id, "Grain is required")?;
        require(&self.quantity, "Quantity is required")?;

        if !is_decimal(self.quantity.trim()) {
            return Err("Please enter a valid number".into());
        }
        if parse_form_date(&self.do_date).is_none() {
            return Err("DO Date must be a date in YYYY-MM-DD format".into());
        }
        if parse_form_date(&self.cota).is_none() {
            return Err("Quota Date must be a date in YYYY-MM-DD format".into());
        }
        Ok(())
    }

    /// Валидация для обновления: дополнительно нужен `stock_id`
    pub fn validate_for_update(&self) -> Result<(), String> {
        match &self.stock_id {
            Some(id) if !id.is_blank() => self.validate(),
            _ => Err("stock_id is required to update a D.O.".into()),
        }
    }
}

/// Запрос мастера D.O.: шаг 1 - сама форма, шаг 2 - строки распределения
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoGenerateRequest {
    #[serde(flatten)]
    pub order: DeliveryOrderDto,
    #[serde(default)]
    pub allocations: Vec<AllocationEntry>,
}

impl DoGenerateRequest {
    pub fn normalized(self) -> Self {
        Self {
            order: self.order.normalized(),
            allocations: self.allocations,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        self.order.validate()?;
        validate_entries(&self.allocations)
    }

    /// Распределение для upstream, если второй шаг заполнен
    pub fn allocation_record(&self) -> Option<AllocationRecord> {
        if self.allocations.is_empty() {
            return None;
        }
        Some(AllocationRecord::from_entries(
            self.order.do_no.clone(),
            &self.allocations,
        ))
    }
}

/// Ответ мастера D.O.
///
/// Если D.O. создан, а распределение нет, запрос считается успешным,
/// ошибка распределения возвращается в `allocation_error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoGenerateResponse {
    pub order: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allocation: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allocation_error: Option<String>,
}
