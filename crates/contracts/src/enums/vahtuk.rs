use serde::{Deserialize, Serialize};
use std::fmt;

/// Способ вывоза по строке распределения (vahtuk)
///
/// `Thet` - прямая доставка, `Godown` - через склад.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Vahtuk {
    Thet,
    Godown,
}

impl Vahtuk {
    /// Значение в том виде, в каком его хранит upstream
    pub fn code(&self) -> &'static str {
        match self {
            Vahtuk::Thet => "Thet",
            Vahtuk::Godown => "Godown",
        }
    }

    pub fn all() -> Vec<Vahtuk> {
        vec![Vahtuk::Thet, Vahtuk::Godown]
    }

    /// Парсинг без учета регистра и пробелов по краям
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::all()
            .into_iter()
            .find(|v| v.code().eq_ignore_ascii_case(code))
    }
}

impl TryFrom<String> for Vahtuk {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_code(&value).ok_or_else(|| format!("Unknown vahtuk '{}'", value))
    }
}

impl fmt::Display for Vahtuk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
