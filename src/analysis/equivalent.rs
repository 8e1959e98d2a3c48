//! Equivalent-circuit parameters from open- and short-circuit tests.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrafoError};

/// Transformer side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Side {
    #[serde(rename = "primario", alias = "primary")]
    Primary,
    #[serde(rename = "secundario", alias = "secondary")]
    Secondary,
}

/// Bench test performed on a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum BenchTest {
    #[serde(rename = "circuito-aberto", alias = "open-circuit")]
    OpenCircuit,
    #[serde(rename = "curto-circuito", alias = "short-circuit")]
    ShortCircuit,
}

/// How the series impedance is split in the reported circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum CircuitType {
    /// Lumped Req + jXeq
    #[serde(rename = "Serie", alias = "Series")]
    Series,
    T,
    L,
}

/// A voltage/current/power reading from one bench test.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct TestReading {
    pub voltage: f64,
    pub current: f64,
    pub power: f64,
}

/// Bench test data. Missing JSON fields take the textbook defaults.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BenchTests {
    #[serde(rename = "N1")]
    pub primary_turns: f64,
    #[serde(rename = "N2")]
    pub secondary_turns: f64,
    /// Short-circuit test voltage (V)
    #[serde(rename = "Va")]
    pub sc_voltage: f64,
    /// Short-circuit test current (A)
    #[serde(rename = "Ia")]
    pub sc_current: f64,
    /// Short-circuit test power (W)
    #[serde(rename = "Pa")]
    pub sc_power: f64,
    /// Open-circuit test voltage (V)
    #[serde(rename = "Vb")]
    pub oc_voltage: f64,
    /// Open-circuit test current (A)
    #[serde(rename = "Ib")]
    pub oc_current: f64,
    /// Open-circuit test power (W)
    #[serde(rename = "Pb")]
    pub oc_power: f64,
    pub circuit_type: CircuitType,
    /// Side the parameters are referred to
    pub referred_to: Side,
    /// Test performed on the secondary; the other one ran on the primary
    #[serde(rename = "sec_type")]
    pub secondary_test: BenchTest,
}

impl Default for BenchTests {
    fn default() -> Self {
        Self {
            primary_turns: 1000.0,
            secondary_turns: 200.0,
            sc_voltage: 40.0,
            sc_current: 5.0,
            sc_power: 100.0,
            oc_voltage: 220.0,
            oc_current: 1.2,
            oc_power: 60.0,
            circuit_type: CircuitType::Series,
            referred_to: Side::Primary,
            secondary_test: BenchTest::OpenCircuit,
        }
    }
}

impl BenchTests {
    pub fn short_circuit(&self) -> TestReading {
        TestReading {
            voltage: self.sc_voltage,
            current: self.sc_current,
            power: self.sc_power,
        }
    }

    pub fn open_circuit(&self) -> TestReading {
        TestReading {
            voltage: self.oc_voltage,
            current: self.oc_current,
            power: self.oc_power,
        }
    }

    /// Side a given test was run on.
    pub fn side_of(&self, test: BenchTest) -> Side {
        if self.secondary_test == test {
            Side::Secondary
        } else {
            Side::Primary
        }
    }

    /// Turns ratio `a = N1/N2`.
    pub fn turns_ratio(&self) -> Result<f64> {
        if self.secondary_turns <= 0.0 || self.primary_turns <= 0.0 {
            return Err(TrafoError::test_data(format!(
                "turn counts must be positive (N1 = {}, N2 = {})",
                self.primary_turns, self.secondary_turns
            )));
        }
        Ok(self.primary_turns / self.secondary_turns)
    }
}

/// Move an impedance measured on `measured` to `target` through ratio `a`.
pub fn refer_impedance(value: f64, a: f64, measured: Side, target: Side) -> f64 {
    match (measured, target) {
        (m, t) if m == t => value,
        (_, Side::Primary) => value * a * a,
        (_, Side::Secondary) => value / (a * a),
    }
}

/// Core branch from the open-circuit test.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct OpenCircuitResult {
    /// Core-loss resistance, referred (Ω)
    pub rc: f64,
    /// Magnetizing reactance, referred (Ω)
    pub xm: f64,
    /// No-load impedance on the test side (Ω)
    pub z_phi: f64,
    /// Core-loss current component (A)
    pub ic: f64,
    /// Magnetizing current component (A)
    pub im: f64,
}

impl OpenCircuitResult {
    /// Magnitude of the excitation current (A).
    pub fn excitation_current(&self) -> f64 {
        self.ic.hypot(self.im)
    }

    /// Angle between the excitation current and the applied voltage (degrees).
    pub fn excitation_angle_deg(&self) -> f64 {
        let i_phi = self.excitation_current();
        if i_phi == 0.0 {
            return 0.0;
        }
        (self.ic / i_phi).clamp(-1.0, 1.0).acos().to_degrees()
    }
}

/// Series branch from the short-circuit test.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ShortCircuitResult {
    /// Equivalent resistance, referred (Ω)
    pub req: f64,
    /// Equivalent reactance, referred (Ω)
    pub xeq: f64,
    /// Short-circuit impedance on the test side (Ω)
    pub zcc: f64,
}

/// Series impedance laid out per circuit type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "tipo")]
pub enum SeriesBranch {
    #[serde(rename = "Serie")]
    Lumped { req: f64, xeq: f64 },
    /// Half of the series impedance on each side (T and L circuits)
    #[serde(rename = "Dividido")]
    Split { rp: f64, xp: f64, rs: f64, xs: f64 },
}

/// Complete equivalent circuit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquivalentCircuit {
    pub turns_ratio: f64,
    pub referred_to: Side,
    pub open_circuit: OpenCircuitResult,
    pub short_circuit: ShortCircuitResult,
    pub series: SeriesBranch,
    /// Excitation current magnitude (A)
    pub excitation_current: f64,
    /// Excitation current angle (degrees)
    pub excitation_angle_deg: f64,
}

/// Core branch parameters from an open-circuit reading.
///
/// A zero voltage or current reading yields an all-zero result. Zero power
/// makes Rc infinite, and a current with no magnetizing component makes Xm
/// infinite.
pub fn open_circuit(reading: TestReading, a: f64, measured: Side, target: Side) -> OpenCircuitResult {
    let TestReading { voltage, current, power } = reading;
    if current == 0.0 || voltage == 0.0 {
        return OpenCircuitResult::default();
    }

    let rc = if power > 0.0 { voltage * voltage / power } else { f64::INFINITY };
    let ic = power / voltage;
    let im = if current > ic { (current * current - ic * ic).sqrt() } else { 0.0 };
    let xm = if im != 0.0 { voltage / im } else { f64::INFINITY };

    OpenCircuitResult {
        rc: refer_impedance(rc, a, measured, target),
        xm: refer_impedance(xm, a, measured, target),
        z_phi: voltage / current,
        ic,
        im,
    }
}

/// Series branch parameters from a short-circuit reading.
pub fn short_circuit(reading: TestReading, a: f64, measured: Side, target: Side) -> ShortCircuitResult {
    let TestReading { voltage, current, power } = reading;
    if current == 0.0 || voltage == 0.0 {
        return ShortCircuitResult::default();
    }

    let req = power / (current * current);
    let zcc = voltage / current;
    let delta = zcc * zcc - req * req;
    let xeq = if delta > 0.0 { delta.sqrt() } else { 0.0 };

    ShortCircuitResult {
        req: refer_impedance(req, a, measured, target),
        xeq: refer_impedance(xeq, a, measured, target),
        zcc,
    }
}

/// Extract the full equivalent circuit from bench test data.
pub fn equivalent_circuit(tests: &BenchTests) -> Result<EquivalentCircuit> {
    let a = tests.turns_ratio()?;
    let target = tests.referred_to;

    let oc = open_circuit(tests.open_circuit(), a, tests.side_of(BenchTest::OpenCircuit), target);
    let sc = short_circuit(tests.short_circuit(), a, tests.side_of(BenchTest::ShortCircuit), target);

    let series = match tests.circuit_type {
        CircuitType::Series => SeriesBranch::Lumped {
            req: sc.req,
            xeq: sc.xeq,
        },
        CircuitType::T | CircuitType::L => SeriesBranch::Split {
            rp: sc.req / 2.0,
            xp: sc.xeq / 2.0,
            rs: sc.req / 2.0,
            xs: sc.xeq / 2.0,
        },
    };

    log::debug!("a = {:.3}, Req = {:.3} Ω, Xeq = {:.3} Ω", a, sc.req, sc.xeq);

    Ok(EquivalentCircuit {
        turns_ratio: a,
        referred_to: target,
        open_circuit: oc,
        short_circuit: sc,
        series,
        excitation_current: oc.excitation_current(),
        excitation_angle_deg: oc.excitation_angle_deg(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_referral() {
        assert_eq!(refer_impedance(4.0, 5.0, Side::Primary, Side::Primary), 4.0);
        assert_eq!(refer_impedance(4.0, 5.0, Side::Secondary, Side::Primary), 100.0);
        assert_eq!(refer_impedance(100.0, 5.0, Side::Primary, Side::Secondary), 4.0);
    }

    #[test]
    fn test_default_bench_data() {
        let circuit = equivalent_circuit(&BenchTests::default()).unwrap();
        assert_eq!(circuit.turns_ratio, 5.0);

        // Open circuit on the secondary, referred to the primary (x25)
        let oc = circuit.open_circuit;
        assert_relative_eq!(oc.rc, 220.0 * 220.0 / 60.0 * 25.0, epsilon = 1e-9);
        assert_relative_eq!(oc.ic, 60.0 / 220.0, epsilon = 1e-12);
        let im = (1.44f64 - oc.ic * oc.ic).sqrt();
        assert_relative_eq!(oc.im, im, epsilon = 1e-12);
        assert_relative_eq!(oc.xm, 220.0 / im * 25.0, epsilon = 1e-9);
        assert_relative_eq!(oc.z_phi, 220.0 / 1.2, epsilon = 1e-12);

        // Short circuit on the primary, no referral
        let sc = circuit.short_circuit;
        assert_relative_eq!(sc.req, 4.0);
        assert_relative_eq!(sc.zcc, 8.0);
        assert_relative_eq!(sc.xeq, 48f64.sqrt(), epsilon = 1e-12);

        assert_eq!(
            circuit.series,
            SeriesBranch::Lumped {
                req: sc.req,
                xeq: sc.xeq
            }
        );
        assert_relative_eq!(circuit.excitation_current, 1.2, epsilon = 1e-12);
    }

    #[test]
    fn test_t_circuit_splits_halves() {
        let tests = BenchTests {
            circuit_type: CircuitType::T,
            ..BenchTests::default()
        };
        match equivalent_circuit(&tests).unwrap().series {
            SeriesBranch::Split { rp, xp, rs, xs } => {
                assert_relative_eq!(rp, 2.0);
                assert_relative_eq!(rs, 2.0);
                assert_relative_eq!(xp, xs);
            }
            other => panic!("expected split branch, got {:?}", other),
        }
    }

    #[test]
    fn test_refer_to_secondary() {
        let tests = BenchTests {
            referred_to: Side::Secondary,
            ..BenchTests::default()
        };
        let circuit = equivalent_circuit(&tests).unwrap();
        // Open circuit already on the secondary, short circuit moved down
        assert_relative_eq!(circuit.open_circuit.rc, 220.0 * 220.0 / 60.0, epsilon = 1e-9);
        assert_relative_eq!(circuit.short_circuit.req, 4.0 / 25.0, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_readings() {
        let oc = open_circuit(
            TestReading { voltage: 0.0, current: 1.0, power: 1.0 },
            1.0,
            Side::Primary,
            Side::Primary,
        );
        assert_eq!(oc, OpenCircuitResult::default());
        assert_eq!(oc.excitation_angle_deg(), 0.0);

        let oc = open_circuit(
            TestReading { voltage: 100.0, current: 0.5, power: 0.0 },
            1.0,
            Side::Primary,
            Side::Primary,
        );
        assert!(oc.rc.is_infinite());
        assert_relative_eq!(oc.xm, 200.0);

        let sc = short_circuit(
            TestReading { voltage: 10.0, current: 0.0, power: 5.0 },
            1.0,
            Side::Primary,
            Side::Primary,
        );
        assert_eq!(sc, ShortCircuitResult::default());
    }

    #[test]
    fn test_zero_turns_rejected() {
        let tests = BenchTests {
            secondary_turns: 0.0,
            ..BenchTests::default()
        };
        assert!(matches!(
            equivalent_circuit(&tests),
            Err(TrafoError::InvalidTestData { .. })
        ));
    }

    #[test]
    fn test_deserialize_partial_json() {
        let tests: BenchTests =
            serde_json::from_str(r#"{"N1": 500, "circuit_type": "L", "sec_type": "curto-circuito"}"#).unwrap();
        assert_eq!(tests.primary_turns, 500.0);
        assert_eq!(tests.secondary_turns, 200.0);
        assert_eq!(tests.circuit_type, CircuitType::L);
        assert_eq!(tests.side_of(BenchTest::ShortCircuit), Side::Secondary);
        assert_eq!(tests.side_of(BenchTest::OpenCircuit), Side::Primary);
    }
}
