//! Core cross-section, lamination selection and turn counts.
//!
//! The procedure:
//!
//! 1. Magnetic section `Sm = k·√(m·P/f)` (cm²), where `k` depends on the
//!    lamination family and `m` on the topology
//! 2. Geometric section `Sg = 1.1·Sm`
//! 3. First-guess column width `a = ⌈√Sg⌉` and stack length `b = round(Sg/a)`
//! 4. Pick the narrowest catalog lamination with width ≥ `a`
//! 5. Snap `a` to the lamination width and `b` to a whole multiple of it,
//!    then recompute `Sg = a·b` and `Sm = Sg/1.1`
//! 6. Turns per volt from `Sm` and frequency, then turn counts per winding

use serde::Serialize;

use crate::input::TransformerSpec;
use crate::tables::{select_lamination, LaminationEntry};

use super::{round_to, DESIGN_MARGIN, FLUX_DENSITY_GAUSS, STACKING_FACTOR};

/// Output of the core stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoreDesign {
    /// Column width before snapping to the catalog (cm)
    pub required_width_cm: f64,
    /// Stack length before snapping (cm)
    pub required_depth_cm: f64,
    /// Selected lamination
    pub lamination: LaminationEntry,
    /// Number of lamination-widths in the stack
    pub lamination_count: u32,
    /// Final column width `a` (cm)
    pub width_cm: f64,
    /// Final stack length `b` (cm)
    pub depth_cm: f64,
    /// Final magnetic cross-section (cm²)
    pub magnetic_section_cm2: f64,
    /// Final geometric cross-section (cm²)
    pub geometric_section_cm2: f64,
    /// Turns per volt
    pub turns_per_volt: f64,
    pub primary_turns: Vec<u32>,
    pub secondary_turns: Vec<u32>,
}

/// Initial magnetic cross-section (cm²), rounded to 1 decimal.
pub fn magnetic_section(spec: &TransformerSpec) -> f64 {
    let coefficient = spec.lamination().section_coefficient();
    let multiplier = spec.topology().core_multiplier();
    round_to(
        coefficient * (multiplier * spec.power() / spec.frequency() as f64).sqrt(),
        1,
    )
}

/// First-guess column width and stack length for a geometric section.
pub fn initial_dimensions(geometric_section_cm2: f64) -> (f64, f64) {
    let a = geometric_section_cm2.sqrt().ceil();
    let b = (geometric_section_cm2 / a).round_ties_even();
    (a, b)
}

/// Turns per volt for a magnetic section at a given frequency.
///
/// 50 Hz and 60 Hz use the customary workshop constants; other frequencies
/// fall back to `10⁸ / (4.44·B·f)` with `B` in gauss.
pub fn turns_per_volt(frequency: u32, magnetic_section_cm2: f64) -> f64 {
    let numerator = match frequency {
        50 => 40.0,
        60 => 33.5,
        f => 1e8 / (4.44 * FLUX_DENSITY_GAUSS * f as f64),
    };
    round_to(numerator / magnetic_section_cm2, 2)
}

/// Dimension the core and compute turn counts.
pub fn dimension_core(spec: &TransformerSpec) -> CoreDesign {
    let sm = magnetic_section(spec);
    let sg = round_to(sm * STACKING_FACTOR, 1);
    let (required_width_cm, required_depth_cm) = initial_dimensions(sg);

    let lamination = select_lamination(spec.lamination(), required_width_cm);
    log::debug!(
        "Sm = {} cm², Sg = {} cm², a = {} cm -> lamination #{} ({} cm)",
        sm,
        sg,
        required_width_cm,
        lamination.number,
        lamination.width_cm
    );

    let width_cm = lamination.width_cm;
    // A stack that rounds to zero length still takes one lamination width
    let lamination_count = ((required_depth_cm / width_cm).ceil() as u32).max(1);
    let depth_cm = width_cm * lamination_count as f64;
    let geometric_section_cm2 = width_cm * depth_cm;
    let magnetic_section_cm2 = round_to(geometric_section_cm2 / STACKING_FACTOR, 2);

    let turns_per_volt = turns_per_volt(spec.frequency(), magnetic_section_cm2);
    log::debug!("{} turns/V over {} cm²", turns_per_volt, magnetic_section_cm2);

    // Validation caps voltage and power and keeps frequency at 1 Hz or more,
    // which holds turn counts well inside u32
    let primary_turns = spec
        .primary_voltages()
        .iter()
        .map(|v| (turns_per_volt * v).ceil() as u32)
        .collect();
    // Secondary gets the design margin to make up for winding losses
    let secondary_turns = spec
        .secondary_voltages()
        .iter()
        .map(|v| (turns_per_volt * v * DESIGN_MARGIN).ceil() as u32)
        .collect();

    CoreDesign {
        required_width_cm,
        required_depth_cm,
        lamination,
        lamination_count,
        width_cm,
        depth_cm,
        magnetic_section_cm2,
        geometric_section_cm2,
        turns_per_volt,
        primary_turns,
        secondary_turns,
    }
}
