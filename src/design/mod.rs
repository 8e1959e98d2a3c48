//! Core-and-winding dimensioning.
//!
//! Dimensioning is a single forward pass over a validated
//! [`TransformerSpec`]:
//!
//! ```text
//! electrical ──┐
//!              ├─> feasibility ─┐
//! core ────────┤                ├─> assemble
//!              └─> mass ────────┘
//! ```
//!
//! Each stage is a plain function taking the outputs it needs by reference
//! and returning its own immutable result, so a later stage cannot run
//! without the earlier ones. None of the stages can fail: an infeasible
//! design is reported through [`Feasibility`], not as an error.

mod core_design;
mod electrical;
mod feasibility;
mod mass;
mod report;

pub use core_design::{dimension_core, initial_dimensions, magnetic_section, turns_per_volt, CoreDesign};
pub use electrical::{calculate as calculate_electrical, current_density, ElectricalDesign, WindingConductor};
pub use feasibility::{check as check_feasibility, copper_area, window_ratio, winding_copper_area, Feasibility};
pub use mass::{estimate as estimate_mass, mean_turn_length, MassEstimate};
pub use report::{assemble, DimensioningResult, OuterDimensions};

use crate::error::Result;
use crate::input::{RawSpec, TransformerSpec};

/// Extra power drawn by the primary, and extra turns on the secondary.
pub const DESIGN_MARGIN: f64 = 1.10;

/// Ratio of geometric to magnetic core section (stacking gaps).
pub const STACKING_FACTOR: f64 = 1.1;

/// Peak flux density assumed for non-standard frequencies (gauss).
pub const FLUX_DENSITY_GAUSS: f64 = 11300.0;

/// Minimum window/copper ratio for a buildable design.
pub const DEFAULT_MIN_WINDOW_RATIO: f64 = 3.0;

/// Copper density (g/cm³).
pub const DEFAULT_COPPER_DENSITY: f64 = 9.0;

/// Round to a number of decimal places.
///
/// Rounds the exact binary value of `value`, so `0.765000…01` goes up to
/// 0.77. Scaling by a power of ten first would turn it into an exact tie.
pub(crate) fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, value).parse().unwrap_or(value)
}

/// Tunable constants for the dimensioning pass.
#[derive(Debug, Clone)]
pub struct DesignOptions {
    /// Minimum window/copper ratio for a feasible design.
    pub min_window_ratio: f64,
    /// Copper density used for the mass estimate (g/cm³).
    pub copper_density: f64,
}

impl Default for DesignOptions {
    fn default() -> Self {
        Self {
            min_window_ratio: DEFAULT_MIN_WINDOW_RATIO,
            copper_density: DEFAULT_COPPER_DENSITY,
        }
    }
}

impl DesignOptions {
    /// Create options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum window/copper ratio.
    pub fn with_min_window_ratio(mut self, ratio: f64) -> Self {
        self.min_window_ratio = ratio;
        self
    }

    /// Set the copper density (g/cm³).
    pub fn with_copper_density(mut self, density: f64) -> Self {
        self.copper_density = density;
        self
    }
}

/// Runs the dimensioning pass with a fixed set of options.
///
/// Holds no per-run state; one designer can serve any number of
/// specifications.
#[derive(Debug, Clone, Default)]
pub struct Designer {
    options: DesignOptions,
}

impl Designer {
    /// Create a designer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a designer with custom options.
    pub fn with_options(options: DesignOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DesignOptions {
        &self.options
    }

    /// Dimension a validated specification.
    pub fn run(&self, spec: &TransformerSpec) -> DimensioningResult {
        let electrical = electrical::calculate(spec);
        let core = core_design::dimension_core(spec);
        let feasibility = feasibility::check(&electrical, &core, self.options.min_window_ratio);
        let mass = mass::estimate(&electrical, &core, self.options.copper_density);

        log::info!("{}", feasibility.message());

        report::assemble(spec.clone(), electrical, core, feasibility, mass)
    }

    /// Validate a raw description, then dimension it.
    pub fn run_raw(&self, raw: &RawSpec) -> Result<DimensioningResult> {
        let spec = raw.validate()?;
        Ok(self.run(&spec))
    }

    /// Parse, validate and dimension a JSON description.
    pub fn run_json(&self, input: &str) -> Result<DimensioningResult> {
        self.run_raw(&RawSpec::from_json(input)?)
    }
}

/// Dimension a validated specification with default options.
pub fn dimension(spec: &TransformerSpec) -> DimensioningResult {
    Designer::new().run(spec)
}
