use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Why a date field rejected its value. Names match the codes raised by the
/// browser-side date widget; codes we do not know deserialize as `None`.
#[derive(
    EnumString,
    Display,
    VariantArray,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    AsRefStr,
)]
pub enum ValidationErrorCode {
    #[serde(rename = "minDate")]
    #[strum(serialize = "minDate")]
    MinDate,
    #[serde(rename = "maxDate")]
    #[strum(serialize = "maxDate")]
    MaxDate,
    #[serde(rename = "invalidDate")]
    #[strum(serialize = "invalidDate")]
    InvalidDate,
    #[default]
    #[serde(rename = "none", other)]
    #[strum(serialize = "none")]
    None,
}

impl ValidationErrorCode {
    pub fn is_error(&self) -> bool {
        !matches!(self, Self::None)
    }
}

#[derive(EnumString, Display, VariantArray, Clone, Copy, Debug, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Field {
    Start,
    End,
}
