//! Transformer description: raw input and validated specification.
//!
//! A [`RawSpec`] is whatever the caller handed in (usually JSON), with every
//! field optional and voltages still in their loose textual form. It only
//! becomes a [`TransformerSpec`] after [`validate_spec`] has checked it, and a
//! `TransformerSpec` cannot be built any other way, so the dimensioning stages
//! can rely on its invariants without re-checking them.

mod types;
mod validate;

pub use types::*;
pub use validate::{parse_voltages, validate_spec, MAX_POWER, MAX_VOLTAGE};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A numeric field that may arrive as a JSON number or as text.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

impl Scalar {
    /// Interpret the field as a number, if possible.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Number(v) => Some(*v),
            Scalar::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Number(v) => write!(f, "{v}"),
            Scalar::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Voltage list as supplied: `"220/110"`, `127`, or `[220, 110]`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum VoltageField {
    List(Vec<Scalar>),
    Single(Scalar),
}

impl From<&str> for VoltageField {
    fn from(s: &str) -> Self {
        VoltageField::Single(Scalar::Text(s.to_string()))
    }
}

impl From<Vec<f64>> for VoltageField {
    fn from(values: Vec<f64>) -> Self {
        VoltageField::List(values.into_iter().map(Scalar::Number).collect())
    }
}

/// Unvalidated transformer description.
///
/// Field names follow the wire format of the calculator's JSON endpoint;
/// English aliases are accepted as well.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawSpec {
    #[serde(rename = "tipo_transformador", alias = "topology", default)]
    pub topology: Option<String>,

    #[serde(rename = "Vp", alias = "primary_voltages", default)]
    pub primary_voltages: Option<VoltageField>,

    #[serde(rename = "Vs", alias = "secondary_voltages", default)]
    pub secondary_voltages: Option<VoltageField>,

    #[serde(rename = "Potencia", alias = "power", default)]
    pub power: Option<Scalar>,

    #[serde(rename = "tipo_lamina", alias = "lamination", default)]
    pub lamination: Option<String>,

    /// Defaults to 50 Hz when absent
    #[serde(rename = "frequencia", alias = "frequency", default)]
    pub frequency: Option<Scalar>,
}

impl RawSpec {
    /// Parse a raw description from a JSON string.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Validate into a [`TransformerSpec`].
    pub fn validate(&self) -> Result<TransformerSpec> {
        validate_spec(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wire_names() {
        let raw = RawSpec::from_json(
            r#"{
                "tipo_transformador": "Transformador de um primário e um secundário",
                "Vp": "120",
                "Vs": "12",
                "Potencia": 100,
                "tipo_lamina": "Padronizada",
                "frequencia": 60
            }"#,
        )
        .unwrap();
        assert_eq!(raw.primary_voltages, Some(VoltageField::from("120")));
        assert_eq!(raw.power, Some(Scalar::Number(100.0)));
        assert_eq!(raw.frequency, Some(Scalar::Number(60.0)));
    }

    #[test]
    fn test_parse_english_aliases_and_lists() {
        let raw = RawSpec::from_json(
            r#"{
                "topology": "Transformador de dois primários e um secundário",
                "primary_voltages": [220, 110],
                "secondary_voltages": 24,
                "power": "300",
                "lamination": "Comprida"
            }"#,
        )
        .unwrap();
        assert_eq!(raw.primary_voltages, Some(VoltageField::from(vec![220.0, 110.0])));
        assert_eq!(
            raw.secondary_voltages,
            Some(VoltageField::Single(Scalar::Number(24.0)))
        );
        assert_eq!(raw.power.and_then(|p| p.as_f64()), Some(300.0));
        assert!(raw.frequency.is_none());
    }

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let raw = RawSpec::from_json("{}").unwrap();
        assert_eq!(raw, RawSpec::default());
    }
}
