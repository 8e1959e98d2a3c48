//! Input validation.

use crate::error::{Result, TrafoError};
use crate::DEFAULT_FREQUENCY;

use super::{LaminationFamily, RawSpec, Scalar, Topology, TransformerSpec, VoltageField};

/// Highest accepted winding voltage (V).
pub const MAX_VOLTAGE: f64 = 1e6;

/// Highest accepted rated power (VA).
pub const MAX_POWER: f64 = 1e7;

/// Validate a raw description into a [`TransformerSpec`].
///
/// Checks, in order:
/// - All required fields are present (`tipo_transformador`, `Vp`, `Vs`,
///   `Potencia`, `tipo_lamina`)
/// - The topology is one of the four known literals
/// - Every voltage parses as a number in `(0, MAX_VOLTAGE]`
/// - Voltage counts match the topology
/// - Power is in `(0, MAX_POWER]`
/// - The lamination family is known
/// - Frequency is positive (values other than 50/60 Hz only log a warning)
pub fn validate_spec(raw: &RawSpec) -> Result<TransformerSpec> {
    let topology_raw = raw
        .topology
        .as_deref()
        .ok_or_else(|| TrafoError::missing("tipo_transformador"))?;
    let primary_raw = raw
        .primary_voltages
        .as_ref()
        .ok_or_else(|| TrafoError::missing("Vp"))?;
    let secondary_raw = raw
        .secondary_voltages
        .as_ref()
        .ok_or_else(|| TrafoError::missing("Vs"))?;
    let power_raw = raw
        .power
        .as_ref()
        .ok_or_else(|| TrafoError::missing("Potencia"))?;
    let lamination_raw = raw
        .lamination
        .as_deref()
        .ok_or_else(|| TrafoError::missing("tipo_lamina"))?;

    let topology = Topology::from_literal(topology_raw).ok_or_else(|| TrafoError::InvalidTopology {
        value: topology_raw.to_string(),
    })?;

    let primary_voltages = parse_voltages(primary_raw, "primary")?;
    let secondary_voltages = parse_voltages(secondary_raw, "secondary")?;

    check_count("primary", topology.primary_count(), &primary_voltages)?;
    check_count("secondary", topology.secondary_count(), &secondary_voltages)?;

    let power = power_raw
        .as_f64()
        .filter(|p| !p.is_nan())
        .ok_or(TrafoError::InvalidPower { value: f64::NAN })?;
    if !(power > 0.0 && power <= MAX_POWER) {
        return Err(TrafoError::InvalidPower { value: power });
    }

    let lamination =
        LaminationFamily::from_literal(lamination_raw).ok_or_else(|| TrafoError::InvalidLamination {
            value: lamination_raw.to_string(),
        })?;

    let frequency = parse_frequency(raw.frequency.as_ref())?;

    Ok(TransformerSpec {
        topology,
        primary_voltages,
        secondary_voltages,
        power,
        frequency,
        lamination,
    })
}

/// Parse a voltage field into a list of positive voltages.
///
/// Text is split on `/` with empty pieces skipped, so `"220/110"` and
/// `"220/"` give two and one values respectively.
pub fn parse_voltages(field: &VoltageField, side: &'static str) -> Result<Vec<f64>> {
    let scalars: Vec<Scalar> = match field {
        VoltageField::List(items) => items.clone(),
        VoltageField::Single(Scalar::Text(text)) => text
            .split('/')
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(|piece| Scalar::Text(piece.to_string()))
            .collect(),
        VoltageField::Single(number) => vec![number.clone()],
    };

    scalars
        .iter()
        .map(|s| match s.as_f64() {
            Some(v) if v > 0.0 && v <= MAX_VOLTAGE => Ok(v),
            _ => Err(TrafoError::InvalidVoltage {
                side,
                value: s.to_string(),
            }),
        })
        .collect()
}

fn check_count(side: &'static str, expected: usize, voltages: &[f64]) -> Result<()> {
    if voltages.len() != expected {
        return Err(TrafoError::InvalidVoltageList {
            side,
            expected,
            got: voltages.len(),
        });
    }
    Ok(())
}

fn parse_frequency(field: Option<&Scalar>) -> Result<u32> {
    let Some(field) = field else {
        return Ok(DEFAULT_FREQUENCY);
    };

    // Fractional frequencies are truncated toward zero
    let value = field
        .as_f64()
        .filter(|f| f.is_finite())
        .map(|f| f.trunc() as i64)
        .ok_or(TrafoError::InvalidFrequency { value: 0 })?;

    if value <= 0 || value > u32::MAX as i64 {
        return Err(TrafoError::InvalidFrequency { value });
    }

    let frequency = value as u32;
    if frequency != 50 && frequency != 60 {
        log::warn!(
            "Frequency of {} Hz is neither 50 Hz nor 60 Hz; results may be imprecise",
            frequency
        );
    }
    Ok(frequency)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(topology: &str, vp: &str, vs: &str) -> RawSpec {
        RawSpec {
            topology: Some(topology.to_string()),
            primary_voltages: Some(VoltageField::from(vp)),
            secondary_voltages: Some(VoltageField::from(vs)),
            power: Some(Scalar::Number(100.0)),
            lamination: Some("Padronizada".to_string()),
            frequency: Some(Scalar::Number(60.0)),
        }
    }

    #[test]
    fn test_valid_simple() {
        let spec = validate_spec(&raw(Topology::LITERALS[0], "120", "12")).unwrap();
        assert_eq!(spec.topology(), Topology::Simple);
        assert_eq!(spec.primary_voltages(), &[120.0]);
        assert_eq!(spec.secondary_voltages(), &[12.0]);
        assert_eq!(spec.power(), 100.0);
        assert_eq!(spec.frequency(), 60);
        assert_eq!(spec.lamination(), LaminationFamily::Standard);
    }

    #[test]
    fn test_missing_fields_in_order() {
        let mut r = raw(Topology::LITERALS[0], "120", "12");
        r.power = None;
        r.lamination = None;
        match validate_spec(&r) {
            Err(TrafoError::MissingField { field }) => assert_eq!(field, "Potencia"),
            other => panic!("expected MissingField, got {:?}", other),
        }

        let mut r = raw(Topology::LITERALS[0], "120", "12");
        r.topology = None;
        assert!(matches!(
            validate_spec(&r),
            Err(TrafoError::MissingField { field }) if field == "tipo_transformador"
        ));
    }

    #[test]
    fn test_invalid_topology() {
        let r = raw("Autotransformador", "120", "12");
        assert!(matches!(
            validate_spec(&r),
            Err(TrafoError::InvalidTopology { value }) if value == "Autotransformador"
        ));
    }

    #[test]
    fn test_voltage_count_mismatch() {
        let r = raw(Topology::LITERALS[1], "220", "12");
        assert!(matches!(
            validate_spec(&r),
            Err(TrafoError::InvalidVoltageList { side: "primary", expected: 2, got: 1 })
        ));

        let r = raw(Topology::LITERALS[2], "220", "12");
        assert!(matches!(
            validate_spec(&r),
            Err(TrafoError::InvalidVoltageList { side: "secondary", expected: 2, got: 1 })
        ));

        let r = raw(Topology::LITERALS[0], "", "12");
        assert!(matches!(
            validate_spec(&r),
            Err(TrafoError::InvalidVoltageList { side: "primary", expected: 1, got: 0 })
        ));
    }

    #[test]
    fn test_bad_voltage_values() {
        let r = raw(Topology::LITERALS[0], "abc", "12");
        assert!(matches!(
            validate_spec(&r),
            Err(TrafoError::InvalidVoltage { side: "primary", .. })
        ));

        let r = raw(Topology::LITERALS[0], "120", "0");
        assert!(matches!(
            validate_spec(&r),
            Err(TrafoError::InvalidVoltage { side: "secondary", .. })
        ));
    }

    #[test]
    fn test_split_voltages() {
        let v = parse_voltages(&VoltageField::from("220/110/"), "primary").unwrap();
        assert_eq!(v, vec![220.0, 110.0]);
        let v = parse_voltages(&VoltageField::from(vec![127.0, 220.0]), "primary").unwrap();
        assert_eq!(v, vec![127.0, 220.0]);
    }

    #[test]
    fn test_invalid_power() {
        let mut r = raw(Topology::LITERALS[0], "120", "12");
        r.power = Some(Scalar::Number(0.0));
        assert!(matches!(validate_spec(&r), Err(TrafoError::InvalidPower { .. })));

        r.power = Some(Scalar::Number(-5.0));
        assert!(matches!(validate_spec(&r), Err(TrafoError::InvalidPower { .. })));

        r.power = Some(Scalar::Text("lots".to_string()));
        assert!(matches!(validate_spec(&r), Err(TrafoError::InvalidPower { .. })));

        r.power = Some(Scalar::Number(MAX_POWER));
        assert!(validate_spec(&r).is_ok());
        r.power = Some(Scalar::Number(MAX_POWER * 10.0));
        assert!(matches!(validate_spec(&r), Err(TrafoError::InvalidPower { .. })));
        r.power = Some(Scalar::Number(f64::INFINITY));
        assert!(matches!(validate_spec(&r), Err(TrafoError::InvalidPower { .. })));
    }

    #[test]
    fn test_voltage_upper_bound() {
        assert!(parse_voltages(&VoltageField::from(vec![MAX_VOLTAGE]), "primary").is_ok());
        assert!(matches!(
            parse_voltages(&VoltageField::from("1e300"), "primary"),
            Err(TrafoError::InvalidVoltage { side: "primary", .. })
        ));
        assert!(matches!(
            parse_voltages(&VoltageField::from(vec![f64::INFINITY]), "secondary"),
            Err(TrafoError::InvalidVoltage { side: "secondary", .. })
        ));
    }

    #[test]
    fn test_invalid_lamination() {
        let mut r = raw(Topology::LITERALS[0], "120", "12");
        r.lamination = Some("Curta".to_string());
        assert!(matches!(
            validate_spec(&r),
            Err(TrafoError::InvalidLamination { value }) if value == "Curta"
        ));
    }

    #[test]
    fn test_frequency_default_and_caveat() {
        let mut r = raw(Topology::LITERALS[0], "120", "12");
        r.frequency = None;
        assert_eq!(validate_spec(&r).unwrap().frequency(), 50);

        r.frequency = Some(Scalar::Number(400.0));
        assert_eq!(validate_spec(&r).unwrap().frequency(), 400);

        r.frequency = Some(Scalar::Number(0.0));
        assert!(matches!(
            validate_spec(&r),
            Err(TrafoError::InvalidFrequency { value: 0 })
        ));
    }
}
