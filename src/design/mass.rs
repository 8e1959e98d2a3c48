//! Iron and copper mass estimates.

use std::f64::consts::PI;

use serde::Serialize;

use super::feasibility::copper_area;
use super::{CoreDesign, ElectricalDesign};

/// Estimated masses of the finished transformer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MassEstimate {
    /// Lamination stack mass (kg)
    pub iron_kg: f64,
    /// Winding copper mass (kg)
    pub copper_kg: f64,
    /// Mean length of one turn around the central column (cm)
    pub mean_turn_length_cm: f64,
}

/// Mean turn length `2a + 2b + πa` (cm) of a winding around an `a × b` column.
pub fn mean_turn_length(width_cm: f64, depth_cm: f64) -> f64 {
    2.0 * width_cm + 2.0 * depth_cm + PI * width_cm
}

/// Estimate iron and copper masses.
///
/// `copper_density` is in g/cm³.
pub fn estimate(electrical: &ElectricalDesign, core: &CoreDesign, copper_density: f64) -> MassEstimate {
    let (a, b) = (core.width_cm, core.depth_cm);
    let iron_kg = core.lamination.mass_kg_per_cm * b * a;

    let mean_turn_length_cm = mean_turn_length(a, b);
    // mm² -> cm², times length gives cm³, times density gives g
    let copper_kg = copper_area(electrical, core) / 100.0 * mean_turn_length_cm * copper_density / 1000.0;

    MassEstimate {
        iron_kg,
        copper_kg,
        mean_turn_length_cm,
    }
}
