//! Lenient deserializers for commerce API fields.
//!
//! The API is loose about JSON types: ids arrive as numbers or strings, and
//! prices sometimes arrive as numeric strings. These helpers are used with
//! `#[serde(deserialize_with = "...")]`.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Integer(i64),
    Text(String),
}

/// Number or numeric string. `null` is 0; a non-numeric string is NaN.
pub fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(match Option::<NumberOrText>::deserialize(deserializer)? {
        None => 0.0,
        Some(NumberOrText::Number(n)) => n,
        Some(NumberOrText::Text(s)) => s.trim().parse().unwrap_or(f64::NAN),
    })
}

/// Integer or integer string, truncating fractions. `null` and
/// non-numeric strings are 0.
pub fn integer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    Ok(match Option::<NumberOrText>::deserialize(deserializer)? {
        None => 0,
        Some(NumberOrText::Number(n)) => n as i64,
        Some(NumberOrText::Text(s)) => s.trim().parse().unwrap_or(0),
    })
}

/// Numeric or string identifier, as a string.
pub fn id_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match IdRepr::deserialize(deserializer)? {
        IdRepr::Integer(n) => n.to_string(),
        IdRepr::Text(s) => s,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(deserialize_with = "id_string")]
        id: String,
        #[serde(default, deserialize_with = "number")]
        amount: f64,
        #[serde(default, deserialize_with = "integer")]
        count: i64,
    }

    #[test]
    fn test_numbers_and_numeric_strings() {
        let sample: Sample =
            serde_json::from_str(r#"{"id": 7, "amount": "12.5", "count": "3"}"#).unwrap();
        assert_eq!(sample.id, "7");
        assert_eq!(sample.amount, 12.5);
        assert_eq!(sample.count, 3);

        let sample: Sample =
            serde_json::from_str(r#"{"id": "c-1", "amount": 4, "count": 2.9}"#).unwrap();
        assert_eq!(sample.id, "c-1");
        assert_eq!(sample.amount, 4.0);
        assert_eq!(sample.count, 2);
    }

    #[test]
    fn test_null_and_garbage() {
        let sample: Sample =
            serde_json::from_str(r#"{"id": 1, "amount": null, "count": "lots"}"#).unwrap();
        assert_eq!(sample.amount, 0.0);
        assert_eq!(sample.count, 0);

        let sample: Sample = serde_json::from_str(r#"{"id": 1, "amount": "n/a"}"#).unwrap();
        assert!(sample.amount.is_nan());
    }
}
