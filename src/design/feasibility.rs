//! Window/copper feasibility check.

use serde::Serialize;

use crate::tables::GaugeEntry;

use super::{CoreDesign, ElectricalDesign};

/// Whether the windings fit in the lamination window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Feasibility {
    /// Lamination window area (mm²)
    pub window_area_mm2: f64,
    /// Total copper cross-section through the window (mm²)
    pub copper_area_mm2: f64,
    /// Window/copper ratio, 0 when there is no copper
    pub ratio: f64,
    /// Minimum ratio the design had to meet
    pub threshold: f64,
    pub feasible: bool,
}

impl Feasibility {
    /// Human-readable verdict.
    pub fn message(&self) -> String {
        if self.feasible {
            format!(
                "Transformador viável (Sj/Scu = {:.2} >= {})",
                self.ratio, self.threshold
            )
        } else {
            format!(
                "Transformador não viável (Sj/Scu = {:.2} < {})",
                self.ratio, self.threshold
            )
        }
    }
}

/// Copper cross-section of a set of windings (mm²).
///
/// Turn counts and gauges are paired by position; an unpaired tail on
/// either side is ignored.
pub fn winding_copper_area(turns: &[u32], gauges: &[GaugeEntry]) -> f64 {
    turns
        .iter()
        .zip(gauges)
        .map(|(&n, g)| n as f64 * g.area_mm2)
        .sum()
}

/// Total copper cross-section of primary and secondary windings (mm²).
pub fn copper_area(electrical: &ElectricalDesign, core: &CoreDesign) -> f64 {
    winding_copper_area(&core.primary_turns, &electrical.primary_gauges())
        + winding_copper_area(&core.secondary_turns, &electrical.secondary_gauges())
}

/// Window/copper ratio, or 0 when `copper_area_mm2` is not positive.
pub fn window_ratio(window_area_mm2: f64, copper_area_mm2: f64) -> f64 {
    if copper_area_mm2 > 0.0 {
        window_area_mm2 / copper_area_mm2
    } else {
        0.0
    }
}

/// Compare the lamination window against the copper it has to hold.
pub fn check(electrical: &ElectricalDesign, core: &CoreDesign, threshold: f64) -> Feasibility {
    let copper_area_mm2 = copper_area(electrical, core);
    let window_area_mm2 = core.lamination.window_mm2;
    let ratio = window_ratio(window_area_mm2, copper_area_mm2);

    Feasibility {
        window_area_mm2,
        copper_area_mm2,
        ratio,
        threshold,
        feasible: ratio >= threshold,
    }
}
