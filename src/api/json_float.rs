//! JSON encoding for `f64` fields that may be non-finite.
//!
//! `serde_json` writes NaN and infinities as `null` and then refuses to read
//! them back. Finite values stay plain numbers; the rest are spelled
//! `"NaN"`, `"inf"` and `"-inf"`.

use serde::{Deserialize, Deserializer, Serializer};

const NAN: &str = "NaN";
const INFINITY: &str = "inf";
const NEG_INFINITY: &str = "-inf";

pub(crate) fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else if value.is_nan() {
        serializer.serialize_str(NAN)
    } else if value.is_sign_positive() {
        serializer.serialize_str(INFINITY)
    } else {
        serializer.serialize_str(NEG_INFINITY)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonFloat {
    Number(f64),
    Text(String),
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match JsonFloat::deserialize(deserializer)? {
        JsonFloat::Number(value) => Ok(value),
        JsonFloat::Text(text) => match text.as_str() {
            NAN => Ok(f64::NAN),
            INFINITY => Ok(f64::INFINITY),
            NEG_INFINITY => Ok(f64::NEG_INFINITY),
            other => Err(serde::de::Error::custom(format!(
                "unknown non-finite float literal: {other}"
            ))),
        },
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Sample {
        #[serde(with = "crate::api::json_float")]
        value: f64,
    }

    fn roundtrip(value: f64) -> f64 {
        let json = serde_json::to_string(&Sample { value }).expect("serialize");
        serde_json::from_str::<Sample>(&json).expect("deserialize").value
    }

    #[test]
    fn finite_values_stay_numbers() {
        let json = serde_json::to_string(&Sample { value: 1.5 }).expect("serialize");
        assert_eq!(json, r#"{"value":1.5}"#);
        assert_eq!(roundtrip(-2.25), -2.25);
    }

    #[test]
    fn integer_literals_are_accepted() {
        let sample: Sample = serde_json::from_str(r#"{"value":7}"#).expect("deserialize");
        assert_eq!(sample.value, 7.0);
    }

    #[test]
    fn non_finite_values_survive() {
        let json = serde_json::to_string(&Sample { value: f64::NAN }).expect("serialize");
        assert_eq!(json, r#"{"value":"NaN"}"#);
        assert!(roundtrip(f64::NAN).is_nan());
        assert_eq!(roundtrip(f64::INFINITY), f64::INFINITY);
        assert_eq!(roundtrip(f64::NEG_INFINITY), f64::NEG_INFINITY);
    }

    #[test]
    fn unknown_literal_is_rejected() {
        assert!(serde_json::from_str::<Sample>(r#"{"value":"many"}"#).is_err());
        assert!(serde_json::from_str::<Sample>(r#"{"value":null}"#).is_err());
    }
}
