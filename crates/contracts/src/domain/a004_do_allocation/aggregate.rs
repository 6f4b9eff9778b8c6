use serde::{Deserialize, Serialize};

use crate::enums::Vahtuk;
use crate::shared::delimited::DELIMITER;
use crate::shared::validation::{is_decimal, require};
use crate::shared::{DelimitedList, Scalar};

/// Сравнение имен подскладов: без учета регистра и пробелов по краям
pub fn same_godown(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

// ============================================================================
// Read model
// ============================================================================

/// Распределение D.O. по подскладам, как его хранит upstream.
///
/// Три поля `godown`, `vahtuk`, `quantity` параллельны: индекс i во всех
/// трех описывает одну строку распределения.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationRecord {
    pub do_id: Scalar,
    #[serde(default)]
    pub godown: DelimitedList,
    #[serde(default)]
    pub vahtuk: DelimitedList,
    #[serde(default)]
    pub quantity: DelimitedList,
}

impl AllocationRecord {
    /// Запись для отправки в upstream из строк второго шага мастера D.O.
    pub fn from_entries(do_id: Scalar, entries: &[AllocationEntry]) -> Self {
        let godowns: Vec<&str> = entries.iter().map(|e| e.godown.trim()).collect();
        let vahtuks: Vec<&str> = entries.iter().map(|e| e.vahtuk.code()).collect();
        let quantities: Vec<&str> = entries.iter().map(|e| e.quantity.trim()).collect();

        Self {
            do_id,
            godown: DelimitedList::join(&godowns),
            vahtuk: DelimitedList::join(&vahtuks),
            quantity: DelimitedList::join(&quantities),
        }
    }

    /// Разбить поля на последовательности
    pub fn normalized(&self) -> NormalizedAllocation {
        NormalizedAllocation {
            do_id: self.do_id.clone(),
            godown: self.godown.items(),
            vahtuk: self.vahtuk.items(),
            quantity: self.quantity.items(),
        }
    }

    /// Проверка согласованности длин трех последовательностей
    pub fn validate(&self) -> Result<(), String> {
        let (g, v, q) = (self.godown.len(), self.vahtuk.len(), self.quantity.len());
        if g != v || g != q {
            return Err(format!(
                "D.O. {}: godown/vahtuk/quantity lengths differ ({}/{}/{})",
                self.do_id, g, v, q
            ));
        }
        Ok(())
    }
}

/// Распределение с уже разбитыми полями
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedAllocation {
    pub do_id: Scalar,
    pub godown: Vec<String>,
    pub vahtuk: Vec<String>,
    pub quantity: Vec<String>,
}

impl NormalizedAllocation {
    /// Индекс первой строки для подсклада `name`
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.godown.iter().position(|g| same_godown(g, name))
    }

    /// Количество и vahtuk по индексу; недостающие значения - пустая строка
    pub fn line(&self, index: usize) -> (&str, &str) {
        let quantity = self.quantity.get(index).map(String::as_str).unwrap_or("");
        let vahtuk = self.vahtuk.get(index).map(String::as_str).unwrap_or("");
        (quantity, vahtuk)
    }
}

// ============================================================================
// Write model (second step of the D.O. wizard)
// ============================================================================

/// Одна строка распределения, введенная пользователем
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationEntry {
    pub godown: String,
    pub vahtuk: Vahtuk,
    pub quantity: String,
}

impl AllocationEntry {
    pub fn validate(&self) -> Result<(), String> {
        require(&self.godown, "Godown is required")?;
        if self.godown.contains(DELIMITER) {
            return Err(format!("Godown name must not contain '{}'", DELIMITER));
        }
        let quantity = self.quantity.trim();
        require(quantity, "Quantity is required")?;
        if !is_decimal(quantity) {
            return Err("Please enter a valid number".into());
        }
        if quantity.chars().all(|c| c == '0' || c == '.') {
            return Err("Quantity must be greater than zero".into());
        }
        Ok(())
    }
}

/// Проверка всех строк: каждая валидна, подсклады не повторяются
pub fn validate_entries(entries: &[AllocationEntry]) -> Result<(), String> {
    for (i, entry) in entries.iter().enumerate() {
        entry
            .validate()
            .map_err(|e| format!("Allocation line {}: {}", i + 1, e))?;

        if entries[..i].iter().any(|prev| same_godown(&prev.godown, &entry.godown)) {
            return Err(format!(
                "Allocation line {}: godown '{}' is already allocated",
                i + 1,
                entry.godown.trim()
            ));
        }
    }
    Ok(())
}
