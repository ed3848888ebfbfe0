use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use utoipa::{IntoParams, ToSchema};

pub const MIN_NAME_LEN: usize = 3;

/// An item as stored and returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub price: f64,
}

/// Item name of at least three characters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct ItemName(String);

impl ItemName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for ItemName {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.chars().count() < MIN_NAME_LEN {
            return Err(format!(
                "name should have at least {} characters",
                MIN_NAME_LEN
            ));
        }
        Ok(ItemName(value))
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Non-negative, finite price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64")]
pub struct Price(f64);

impl Price {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Price {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err("price must be a finite number".to_string());
        }
        if value < 0.0 {
            return Err("price should be greater than or equal to 0".to_string());
        }
        Ok(Price(value))
    }
}

/// Parse a decimal integer, saturating at the bounds of `i128`
fn parse_integer(value: &str) -> Option<i128> {
    let value = value.trim();
    let (negative, digits) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // All digits, so parsing can only fail on overflow
    let magnitude = digits.parse::<i128>().unwrap_or(i128::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Query integer that saturates instead of failing on out-of-range values
fn saturating_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match parse_integer(&raw) {
        Some(value) => Ok(value.clamp(i64::MIN as i128, i64::MAX as i128) as i64),
        None => Err(serde::de::Error::custom(format!(
            "invalid integer `{}`",
            raw
        ))),
    }
}

/// Item id taken from the request path
///
/// Any integer is accepted. Ids that do not fit a `u64` (negative or very
/// large) are kept as `None` and never match a stored item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct ItemId(Option<u64>);

impl ItemId {
    pub fn get(self) -> Option<u64> {
        self.0
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        ItemId(Some(value))
    }
}

impl TryFrom<String> for ItemId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_integer(&value)
            .map(|id| ItemId(u64::try_from(id).ok()))
            .ok_or_else(|| format!("item_id must be an integer, got `{}`", value))
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(id) => write!(f, "{}", id),
            None => f.write_str("<out of range>"),
        }
    }
}

/// Request body for creating an item
#[derive(Debug, Deserialize, ToSchema)]
pub struct ItemCreate {
    #[schema(value_type = String, min_length = 3, example = "Banana")]
    pub name: ItemName,
    #[schema(value_type = f64, minimum = 0.0, example = 2.5)]
    pub price: Price,
}

/// Request body for updating an item, absent fields are left unchanged
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ItemUpdate {
    #[schema(value_type = Option<String>, min_length = 3)]
    pub name: Option<ItemName>,
    #[schema(value_type = Option<f64>, minimum = 0.0)]
    pub price: Option<Price>,
}

/// Query parameters for listing items
#[derive(Debug, Deserialize, IntoParams)]
#[serde(deny_unknown_fields)]
#[into_params(parameter_in = Query)]
pub struct FilterParameters {
    /// Only return items priced at or above this value
    #[serde(default)]
    #[param(default = 0.0)]
    pub min_price: f64,
    /// Index of the first item of the window
    #[serde(default, deserialize_with = "saturating_i64")]
    #[param(default = 0)]
    pub offset: i64,
    /// Size of the window
    #[serde(default = "default_limit", deserialize_with = "saturating_i64")]
    #[param(default = 100)]
    pub limit: i64,
}

impl Default for FilterParameters {
    fn default() -> Self {
        Self {
            min_price: 0.0,
            offset: 0,
            limit: default_limit(),
        }
    }
}

fn default_limit() -> i64 {
    100
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn item_create_rejects_short_name() {
        let err = serde_json::from_value::<ItemCreate>(json!({"name": "ab", "price": 5}))
            .unwrap_err();
        assert!(err.to_string().contains("at least 3 characters"));
    }

    #[test]
    fn item_create_rejects_negative_price() {
        let err = serde_json::from_value::<ItemCreate>(json!({"name": "X", "price": -35}))
            .unwrap_err();
        assert!(err.is_data());
    }

    #[test]
    fn item_create_accepts_integer_price() {
        let create: ItemCreate =
            serde_json::from_value(json!({"name": "Grape", "price": 6})).unwrap();
        assert_eq!(create.name.as_str(), "Grape");
        assert_eq!(create.price.value(), 6.0);
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        assert!(ItemName::try_from("éé".to_string()).is_err());
        assert!(ItemName::try_from("ééé".to_string()).is_ok());
    }

    #[test]
    fn item_update_treats_null_and_missing_as_absent() {
        let update: ItemUpdate = serde_json::from_value(json!({"name": null})).unwrap();
        assert!(update.name.is_none());
        assert!(update.price.is_none());
    }

    #[test]
    fn item_update_validates_present_fields() {
        assert!(serde_json::from_value::<ItemUpdate>(json!({"name": "ab"})).is_err());
        assert!(serde_json::from_value::<ItemUpdate>(json!({"price": -1.0})).is_err());
    }

    #[test]
    fn item_id_accepts_any_integer() {
        assert_eq!(ItemId::try_from("7".to_string()), Ok(ItemId::from(7)));
        assert_eq!(ItemId::try_from("-0".to_string()), Ok(ItemId::from(0)));
        assert_eq!(ItemId::try_from("-1".to_string()).unwrap().get(), None);
        assert_eq!(
            ItemId::try_from("99999999999999999999999999999999999999999".to_string())
                .unwrap()
                .get(),
            None
        );
        assert!(ItemId::try_from("one".to_string()).is_err());
        assert!(ItemId::try_from("1.5".to_string()).is_err());
        assert!(ItemId::try_from("-".to_string()).is_err());
    }

    #[test]
    fn filter_offset_and_limit_saturate() {
        let params: FilterParameters =
            serde_json::from_value(json!({"offset": "99999999999999999999", "limit": "-99999999999999999999"}))
                .unwrap();
        assert_eq!(params.offset, i64::MAX);
        assert_eq!(params.limit, i64::MIN);
        assert_eq!(params.min_price, 0.0);
    }

    #[test]
    fn filter_rejects_non_integer_offset() {
        assert!(serde_json::from_value::<FilterParameters>(json!({"offset": "abc"})).is_err());
    }

    #[test]
    fn price_rejects_non_finite_values() {
        assert!(Price::try_from(f64::NAN).is_err());
        assert!(Price::try_from(f64::INFINITY).is_err());
        assert!(Price::try_from(0.0).is_ok());
    }
}
