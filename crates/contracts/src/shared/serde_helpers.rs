//! Lenient field decoders.
//!
//! The store API sends decimals (prices, totals) either as JSON numbers or as
//! strings such as `"12.50"`, and role/status flags either as numbers or strings.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

/// Decodes `12.5` and `"12.5"` alike; an empty string is `0.0`
pub fn decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(s) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(0.0);
            }
            s.parse::<f64>()
                .map_err(|_| serde::de::Error::custom(format!("invalid decimal: {s}")))
        }
    }
}

/// Decodes `1` and `"1"` alike into a string
pub fn flag_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) if n.fract() == 0.0 => format!("{}", n as i64),
        NumberOrString::Number(n) => n.to_string(),
        NumberOrString::Text(s) => s,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(deserialize_with = "decimal")]
        price: f64,
        #[serde(deserialize_with = "flag_string")]
        role: String,
    }

    #[test]
    fn test_decimal_accepts_both_shapes() {
        let a: Sample = serde_json::from_str(r#"{"price":"12.50","role":1}"#).unwrap();
        let b: Sample = serde_json::from_str(r#"{"price":12.5,"role":"1"}"#).unwrap();
        assert_eq!(a.price, 12.5);
        assert_eq!(b.price, 12.5);
        assert_eq!(a.role, "1");
        assert_eq!(b.role, "1");
    }

    #[test]
    fn test_decimal_rejects_garbage() {
        let res: Result<Sample, _> = serde_json::from_str(r#"{"price":"doce","role":0}"#);
        assert!(res.is_err());
    }
}
