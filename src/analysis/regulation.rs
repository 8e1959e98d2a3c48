//! Voltage regulation from the load phasor diagram.
//!
//! With the load voltage `V2` as the angular reference, the no-load voltage
//! is
//!
//! ```text
//! V20 = V2∠0 + I2∠θ · (Req + jXeq)
//! ```
//!
//! where `θ = -acos(pf)` for a lagging load and `+acos(pf)` for a leading
//! one. Regulation is `(|V20| - V2) / V2` in percent.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrafoError};

/// Whether the load current lags or leads the voltage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum PowerFactorKind {
    #[serde(rename = "atrasado", alias = "lagging")]
    Lagging,
    #[serde(rename = "adiantado", alias = "leading")]
    Leading,
}

/// Load operating point and series impedance (referred to the load side).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoadPoint {
    /// Load voltage (V)
    #[serde(rename = "V2")]
    pub voltage: f64,
    /// Load current (A)
    #[serde(rename = "I2")]
    pub current: f64,
    /// Equivalent series resistance (Ω)
    #[serde(rename = "R_eq")]
    pub req: f64,
    /// Equivalent series reactance (Ω)
    #[serde(rename = "X_eq")]
    pub xeq: f64,
    /// Power factor, 0 to 1
    #[serde(rename = "cos_phi")]
    pub power_factor: f64,
    #[serde(rename = "tipo_fp")]
    pub kind: PowerFactorKind,
}

impl Default for LoadPoint {
    fn default() -> Self {
        Self {
            voltage: 2400.0,
            current: 20.8,
            req: 1.42,
            xeq: 1.82,
            power_factor: 0.8,
            kind: PowerFactorKind::Leading,
        }
    }
}

impl LoadPoint {
    fn validate(&self) -> Result<()> {
        if !(self.voltage > 0.0) {
            return Err(TrafoError::load(format!(
                "load voltage must be positive (got {})",
                self.voltage
            )));
        }
        if !(0.0..=1.0).contains(&self.power_factor) {
            return Err(TrafoError::load(format!(
                "power factor must be between 0 and 1 (got {})",
                self.power_factor
            )));
        }
        Ok(())
    }

    /// Angle of the load current relative to the load voltage (rad).
    pub fn current_angle(&self) -> f64 {
        let phi = self.power_factor.acos();
        match self.kind {
            PowerFactorKind::Lagging => -phi,
            PowerFactorKind::Leading => phi,
        }
    }
}

/// A phasor as magnitude and angle, for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Phasor {
    pub magnitude: f64,
    pub angle_deg: f64,
    pub re: f64,
    pub im: f64,
}

impl From<Complex64> for Phasor {
    fn from(z: Complex64) -> Self {
        let (magnitude, angle) = z.to_polar();
        Self {
            magnitude,
            angle_deg: angle.to_degrees(),
            re: z.re,
            im: z.im,
        }
    }
}

/// Phasor diagram and resulting regulation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Regulation {
    pub load_voltage: Phasor,
    pub load_current: Phasor,
    /// I2·Req
    pub resistive_drop: Phasor,
    /// I2·jXeq
    pub reactive_drop: Phasor,
    pub no_load_voltage: Phasor,
    /// Regulation (%)
    pub regulation_pct: f64,
}

/// Build the phasor diagram for a load point and compute its regulation.
pub fn regulation(load: &LoadPoint) -> Result<Regulation> {
    load.validate()?;

    let v2 = Complex64::from_polar(load.voltage, 0.0);
    let i2 = Complex64::from_polar(load.current, load.current_angle());
    let resistive_drop = i2 * load.req;
    let reactive_drop = i2 * Complex64::new(0.0, load.xeq);
    let v20 = v2 + i2 * Complex64::new(load.req, load.xeq);

    let regulation_pct = (v20.norm() - load.voltage) / load.voltage * 100.0;
    log::debug!("|V20| = {:.2} V, regulation = {:.3} %", v20.norm(), regulation_pct);

    Ok(Regulation {
        load_voltage: v2.into(),
        load_current: i2.into(),
        resistive_drop: resistive_drop.into(),
        reactive_drop: reactive_drop.into(),
        no_load_voltage: v20.into(),
        regulation_pct,
    })
}
