//! Winding currents and conductor sizing.

use serde::Serialize;

use crate::input::TransformerSpec;
use crate::tables::{select_gauge, GaugeEntry};

use super::{round_to, DESIGN_MARGIN};

/// Conductor sizing for one winding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindingConductor {
    /// Winding voltage (V)
    pub voltage: f64,
    /// Winding current (A), rounded to 2 decimals
    pub current: f64,
    /// Required conductor cross-section (mm²), rounded to 2 decimals
    pub required_section_mm2: f64,
    /// Selected standard gauge
    pub gauge: GaugeEntry,
}

/// Output of the electrical stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElectricalDesign {
    /// Current density used for sizing (A/mm²)
    pub current_density: f64,
    pub primary: Vec<WindingConductor>,
    pub secondary: Vec<WindingConductor>,
}

impl ElectricalDesign {
    pub fn primary_currents(&self) -> Vec<f64> {
        self.primary.iter().map(|w| w.current).collect()
    }

    pub fn secondary_currents(&self) -> Vec<f64> {
        self.secondary.iter().map(|w| w.current).collect()
    }

    pub fn primary_gauges(&self) -> Vec<GaugeEntry> {
        self.primary.iter().map(|w| w.gauge).collect()
    }

    pub fn secondary_gauges(&self) -> Vec<GaugeEntry> {
        self.secondary.iter().map(|w| w.gauge).collect()
    }
}

/// Current density (A/mm²) allowed for a given rated power (VA).
///
/// | Power | Density |
/// |-------|---------|
/// | P ≤ 500 | 3.0 |
/// | 500 < P ≤ 1000 | 2.5 |
/// | P > 1000 | 2.0 |
pub fn current_density(power: f64) -> f64 {
    if power <= 500.0 {
        3.0
    } else if power <= 1000.0 {
        2.5
    } else {
        2.0
    }
}

/// Compute winding currents, required cross-sections and gauges.
///
/// The primary carries the rated power plus the design margin; the
/// secondary carries the rated power.
pub fn calculate(spec: &TransformerSpec) -> ElectricalDesign {
    let power = spec.power();
    let density = current_density(power);
    let primary_power = DESIGN_MARGIN * power;

    let size = |voltage: f64, apparent_power: f64| {
        let current = round_to(apparent_power / voltage, 2);
        let required_section_mm2 = round_to(current / density, 2);
        WindingConductor {
            voltage,
            current,
            required_section_mm2,
            gauge: select_gauge(required_section_mm2),
        }
    };

    let primary: Vec<_> = spec
        .primary_voltages()
        .iter()
        .map(|&v| size(v, primary_power))
        .collect();
    let secondary: Vec<_> = spec
        .secondary_voltages()
        .iter()
        .map(|&v| size(v, power))
        .collect();

    for (side, windings) in [("primary", &primary), ("secondary", &secondary)] {
        for (i, w) in windings.iter().enumerate() {
            log::debug!(
                "{} winding {}: {:.2} A, {:.2} mm² -> AWG {}",
                side,
                i + 1,
                w.current,
                w.required_section_mm2,
                w.gauge.awg
            );
        }
    }

    ElectricalDesign {
        current_density: density,
        primary,
        secondary,
    }
}
