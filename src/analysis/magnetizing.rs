//! Magnetizing current waveform from a measured magnetization curve.
//!
//! A sinusoidal supply `v(t) = Vm·sin(ωt)` forces the core flux
//! `Φ(t) = -Vm/(ωN)·cos(ωt)`. The curve gives the MMF needed for each flux
//! level, and the magnetizing current is `i(t) = MMF(Φ(t))/N`. Saturation in
//! the curve shows up as peaked, non-sinusoidal current.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrafoError};

/// Largest waveform [`magnetizing_current`] will sample.
pub const MAX_SAMPLES: usize = 1_000_000;

/// One measured point of the magnetization curve.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct CurvePoint {
    /// Magnetomotive force (A·turns)
    #[serde(rename = "MMF", alias = "mmf")]
    pub mmf: f64,
    /// Flux (Wb)
    #[serde(rename = "Fluxo", alias = "flux")]
    pub flux: f64,
}

/// MMF as a piecewise-linear function of flux.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MagnetizationCurve {
    points: Vec<CurvePoint>,
}

impl MagnetizationCurve {
    /// Build a curve from measured points, in any order.
    ///
    /// Needs at least two finite points with distinct flux values.
    pub fn new(mut points: Vec<CurvePoint>) -> Result<Self> {
        if points.len() < 2 {
            return Err(TrafoError::curve(format!(
                "need at least 2 points, got {}",
                points.len()
            )));
        }
        if points.iter().any(|p| !p.mmf.is_finite() || !p.flux.is_finite()) {
            return Err(TrafoError::curve("points must be finite numbers"));
        }

        points.sort_by(|a, b| a.flux.total_cmp(&b.flux));
        if let Some(pair) = points.windows(2).find(|w| w[0].flux == w[1].flux) {
            return Err(TrafoError::curve(format!(
                "duplicate flux value {}",
                pair[0].flux
            )));
        }

        Ok(Self { points })
    }

    /// Parse a curve from a JSON array of `{"MMF": .., "Fluxo": ..}` objects.
    pub fn from_json(input: &str) -> Result<Self> {
        let points: Vec<CurvePoint> = serde_json::from_str(input)?;
        Self::new(points)
    }

    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// MMF required for a flux level.
    ///
    /// Interpolates linearly between points and extends the end segments
    /// linearly outside the measured range.
    pub fn mmf_at(&self, flux: f64) -> f64 {
        let n = self.points.len();
        // First index whose flux is above the query, clamped to an interior segment
        let upper = self
            .points
            .partition_point(|p| p.flux <= flux)
            .clamp(1, n - 1);
        let (p0, p1) = (self.points[upper - 1], self.points[upper]);
        let slope = (p1.mmf - p0.mmf) / (p1.flux - p0.flux);
        p0.mmf + slope * (flux - p0.flux)
    }
}

/// Supply and sampling parameters.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MagnetizingParams {
    /// Peak supply voltage (V)
    #[serde(rename = "VM")]
    pub peak_voltage: f64,
    /// Winding turns
    #[serde(rename = "N")]
    pub turns: f64,
    /// Supply frequency (Hz)
    #[serde(rename = "freq")]
    pub frequency: f64,
    /// Simulated time span (s)
    #[serde(rename = "tempo_max")]
    pub duration: f64,
    /// Sampling step (s)
    #[serde(rename = "passo")]
    pub step: f64,
}

impl Default for MagnetizingParams {
    fn default() -> Self {
        Self {
            peak_voltage: 325.0,
            turns: 850.0,
            frequency: 50.0,
            duration: 0.340,
            step: 1.0 / 3000.0,
        }
    }
}

impl MagnetizingParams {
    fn validate(&self) -> Result<()> {
        let checks = [
            ("VM", self.peak_voltage),
            ("N", self.turns),
            ("freq", self.frequency),
            ("tempo_max", self.duration),
            ("passo", self.step),
        ];
        for (name, value) in checks {
            if !(value > 0.0 && value.is_finite()) {
                return Err(TrafoError::test_data(format!(
                    "{} must be a positive number (got {})",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Sampled magnetizing waveform.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MagnetizingWaveform {
    /// Sample times (s)
    pub time_s: Vec<f64>,
    /// Core flux (Wb)
    pub flux_wb: Vec<f64>,
    /// MMF (A·turns)
    pub mmf: Vec<f64>,
    /// Magnetizing current (A)
    pub current_a: Vec<f64>,
    /// Largest absolute current in the waveform (A)
    pub peak_current_a: f64,
}

impl MagnetizingWaveform {
    pub fn len(&self) -> usize {
        self.time_s.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_s.is_empty()
    }

    pub fn peak_current(&self) -> f64 {
        self.peak_current_a
    }
}

/// Sample the magnetizing current over `[0, duration)`.
pub fn magnetizing_current(curve: &MagnetizationCurve, params: &MagnetizingParams) -> Result<MagnetizingWaveform> {
    params.validate()?;

    let omega = 2.0 * PI * params.frequency;
    let flux_peak = params.peak_voltage / (omega * params.turns);
    let samples = (params.duration / params.step).ceil();
    if !(samples <= MAX_SAMPLES as f64) {
        return Err(TrafoError::test_data(format!(
            "tempo_max / passo gives {:.0} samples, more than the limit of {}",
            samples, MAX_SAMPLES
        )));
    }
    let samples = samples as usize;

    let time_s: Vec<f64> = (0..samples).map(|k| k as f64 * params.step).collect();
    let flux_wb: Vec<f64> = time_s.iter().map(|t| -flux_peak * (omega * t).cos()).collect();
    let mmf: Vec<f64> = flux_wb.iter().map(|&phi| curve.mmf_at(phi)).collect();
    let current_a: Vec<f64> = mmf.iter().map(|f| f / params.turns).collect();
    let peak_current_a = current_a.iter().fold(0.0, |m: f64, i| m.max(i.abs()));

    let wave = MagnetizingWaveform {
        time_s,
        flux_wb,
        mmf,
        current_a,
        peak_current_a,
    };
    log::debug!(
        "{} samples, peak flux {:.4e} Wb, peak current {:.4} A",
        wave.len(),
        flux_peak,
        wave.peak_current()
    );

    Ok(wave)
}
