use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Number;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Stock {
    pub stockid: i64,
    pub name: String,
    #[serde(serialize_with = "serialize_price")]
    pub price: Decimal,
    pub company: String,
}

/// Write payload for create and update. A `stockid` in the body is ignored and
/// absent fields take their zero value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StockInput {
    pub name: String,
    #[serde(deserialize_with = "deserialize_price")]
    pub price: Decimal,
    pub company: String,
}

/// Accepts JSON numbers (or `null` as zero) that fit in a `Decimal`.
fn deserialize_price<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(number) = Option::<Number>::deserialize(deserializer)? else {
        return Ok(Decimal::ZERO);
    };

    decimal_from_number(&number)
        .ok_or_else(|| de::Error::custom(format!("price {number} is out of range")))
}

fn decimal_from_number(number: &Number) -> Option<Decimal> {
    if let Some(n) = number.as_i64() {
        return Some(Decimal::from(n));
    }
    if let Some(n) = number.as_u64() {
        return Some(Decimal::from(n));
    }

    // Decimal holds 28 significant digits, roughly 1e-28 up to 7.9e28.
    let float = number.as_f64()?;
    if float != 0.0 && !(1e-28..7.9e28).contains(&float.abs()) {
        return None;
    }

    let text = number.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}

/// Whole prices are written as JSON integers, everything else as a float.
fn serialize_price<S>(price: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if price.fract().is_zero() {
        if let Some(whole) = price.to_i64() {
            return serializer.serialize_i64(whole);
        }
    }

    let float = price
        .to_f64()
        .ok_or_else(|| <S::Error as ser::Error>::custom(format!("price {price} has no float form")))?;
    serializer.serialize_f64(float)
}
