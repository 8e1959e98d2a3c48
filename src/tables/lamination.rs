//! Lamination catalogs.

use serde::Serialize;

use crate::input::LaminationFamily;

/// One standard E-I lamination profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LaminationEntry {
    /// Catalog number
    #[serde(rename = "numero")]
    pub number: u8,
    /// Central column width (cm)
    #[serde(rename = "a_cm")]
    pub width_cm: f64,
    /// Winding window cross-section (mm²)
    #[serde(rename = "secao_mm2")]
    pub window_mm2: f64,
    /// Core mass per cm of stack per cm of column width (kg)
    #[serde(rename = "peso_kgcm")]
    pub mass_kg_per_cm: f64,
}

const fn lamination(number: u8, width_cm: f64, window_mm2: f64, mass_kg_per_cm: f64) -> LaminationEntry {
    LaminationEntry {
        number,
        width_cm,
        window_mm2,
        mass_kg_per_cm,
    }
}

/// Standard ("Padronizada") laminations, ascending by width.
pub static STANDARD_LAMINATIONS: [LaminationEntry; 7] = [
    lamination(0, 1.5, 168.0, 0.095),
    lamination(1, 2.0, 300.0, 0.170),
    lamination(2, 2.5, 468.0, 0.273),
    lamination(3, 3.0, 675.0, 0.380),
    lamination(4, 3.5, 900.0, 0.516),
    lamination(5, 4.0, 1200.0, 0.674),
    lamination(6, 5.0, 1880.0, 1.053),
];

/// Long ("Comprida") laminations, ascending by width.
pub static LONG_LAMINATIONS: [LaminationEntry; 2] = [
    lamination(5, 4.0, 2400.0, 1.000),
    lamination(6, 5.0, 3750.0, 1.580),
];

/// Narrowest lamination of `family` whose width is at least `width_cm`.
///
/// Falls back to the widest lamination when the requirement exceeds the
/// catalog.
pub fn select_lamination(family: LaminationFamily, width_cm: f64) -> LaminationEntry {
    family
        .table()
        .iter()
        .find(|l| l.width_cm >= width_cm)
        .copied()
        .unwrap_or(*family.largest())
}
