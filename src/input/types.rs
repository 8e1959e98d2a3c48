//! Core types for a validated transformer description.

use std::fmt;

use serde::Serialize;

use crate::tables::{LaminationEntry, LONG_LAMINATIONS, STANDARD_LAMINATIONS};

/// Winding arrangement of a single-phase transformer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Topology {
    #[serde(rename = "Transformador de um primário e um secundário")]
    Simple,
    #[serde(rename = "Transformador de dois primários e um secundário")]
    DualPrimary,
    #[serde(rename = "Transformador de um primário e dois secundários")]
    DualSecondary,
    #[serde(rename = "Transformador de dois primários e dois secundários")]
    DualBoth,
}

impl Topology {
    /// Accepted topology strings, in declaration order.
    pub const LITERALS: [&'static str; 4] = [
        "Transformador de um primário e um secundário",
        "Transformador de dois primários e um secundário",
        "Transformador de um primário e dois secundários",
        "Transformador de dois primários e dois secundários",
    ];

    const ALL: [Topology; 4] = [
        Topology::Simple,
        Topology::DualPrimary,
        Topology::DualSecondary,
        Topology::DualBoth,
    ];

    /// Look up a topology by its exact literal.
    pub fn from_literal(value: &str) -> Option<Self> {
        Self::LITERALS
            .iter()
            .position(|lit| *lit == value)
            .map(|i| Self::ALL[i])
    }

    /// The literal this topology is written as.
    pub fn literal(&self) -> &'static str {
        match self {
            Topology::Simple => Self::LITERALS[0],
            Topology::DualPrimary => Self::LITERALS[1],
            Topology::DualSecondary => Self::LITERALS[2],
            Topology::DualBoth => Self::LITERALS[3],
        }
    }

    /// Number of primary windings, read from the literal's wording.
    pub fn primary_count(&self) -> usize {
        winding_count(self.literal(), "um primário", "dois primários")
    }

    /// Number of secondary windings, read from the literal's wording.
    pub fn secondary_count(&self) -> usize {
        winding_count(self.literal(), "um secundário", "dois secundários")
    }

    /// Power multiplier applied when sizing the core.
    ///
    /// Each doubled side adds a quarter of the rated power.
    pub fn core_multiplier(&self) -> f64 {
        match self {
            Topology::Simple => 1.0,
            Topology::DualPrimary | Topology::DualSecondary => 1.25,
            Topology::DualBoth => 1.5,
        }
    }
}

fn winding_count(literal: &str, single: &str, double: &str) -> usize {
    let lower = literal.to_lowercase();
    if lower.contains(double) {
        2
    } else if lower.contains(single) {
        1
    } else {
        0
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.literal())
    }
}

/// Lamination catalog family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LaminationFamily {
    #[serde(rename = "Padronizada")]
    Standard,
    #[serde(rename = "Comprida")]
    Long,
}

impl LaminationFamily {
    /// Look up a family by its literal ("Padronizada" or "Comprida").
    pub fn from_literal(value: &str) -> Option<Self> {
        match value {
            "Padronizada" => Some(LaminationFamily::Standard),
            "Comprida" => Some(LaminationFamily::Long),
            _ => None,
        }
    }

    pub fn literal(&self) -> &'static str {
        match self {
            LaminationFamily::Standard => "Padronizada",
            LaminationFamily::Long => "Comprida",
        }
    }

    /// Coefficient in the magnetic cross-section formula.
    pub fn section_coefficient(&self) -> f64 {
        match self {
            LaminationFamily::Standard => 7.5,
            LaminationFamily::Long => 6.0,
        }
    }

    /// Catalog for this family, ascending by column width.
    pub fn table(&self) -> &'static [LaminationEntry] {
        match self {
            LaminationFamily::Standard => &STANDARD_LAMINATIONS,
            LaminationFamily::Long => &LONG_LAMINATIONS,
        }
    }

    /// Widest lamination in the catalog.
    pub fn largest(&self) -> &'static LaminationEntry {
        match self {
            LaminationFamily::Standard => &STANDARD_LAMINATIONS[STANDARD_LAMINATIONS.len() - 1],
            LaminationFamily::Long => &LONG_LAMINATIONS[LONG_LAMINATIONS.len() - 1],
        }
    }
}

impl fmt::Display for LaminationFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.literal())
    }
}

/// A validated transformer description.
///
/// Fields are private so the voltage-count, positivity and frequency
/// invariants established by validation cannot be broken afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformerSpec {
    #[serde(rename = "tipo_transformador")]
    pub(crate) topology: Topology,
    #[serde(rename = "tensao_primaria")]
    pub(crate) primary_voltages: Vec<f64>,
    #[serde(rename = "tensao_secundaria")]
    pub(crate) secondary_voltages: Vec<f64>,
    #[serde(rename = "potencia")]
    pub(crate) power: f64,
    #[serde(rename = "frequencia")]
    pub(crate) frequency: u32,
    #[serde(rename = "tipo_lamina")]
    pub(crate) lamination: LaminationFamily,
}

impl TransformerSpec {
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Primary voltages (V), one per primary winding.
    pub fn primary_voltages(&self) -> &[f64] {
        &self.primary_voltages
    }

    /// Secondary voltages (V), one per secondary winding.
    pub fn secondary_voltages(&self) -> &[f64] {
        &self.secondary_voltages
    }

    /// Rated apparent power (VA).
    pub fn power(&self) -> f64 {
        self.power
    }

    /// Supply frequency (Hz).
    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    pub fn lamination(&self) -> LaminationFamily {
        self.lamination
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_roundtrip() {
        for lit in Topology::LITERALS {
            let topology = Topology::from_literal(lit).unwrap();
            assert_eq!(topology.literal(), lit);
        }
        assert_eq!(Topology::from_literal("transformador de um primário e um secundário"), None);
    }

    #[test]
    fn test_winding_counts() {
        assert_eq!(Topology::Simple.primary_count(), 1);
        assert_eq!(Topology::Simple.secondary_count(), 1);
        assert_eq!(Topology::DualPrimary.primary_count(), 2);
        assert_eq!(Topology::DualPrimary.secondary_count(), 1);
        assert_eq!(Topology::DualSecondary.primary_count(), 1);
        assert_eq!(Topology::DualSecondary.secondary_count(), 2);
        assert_eq!(Topology::DualBoth.primary_count(), 2);
        assert_eq!(Topology::DualBoth.secondary_count(), 2);
    }

    #[test]
    fn test_core_multiplier() {
        assert_eq!(Topology::Simple.core_multiplier(), 1.0);
        assert_eq!(Topology::DualPrimary.core_multiplier(), 1.25);
        assert_eq!(Topology::DualSecondary.core_multiplier(), 1.25);
        assert_eq!(Topology::DualBoth.core_multiplier(), 1.5);
    }

    #[test]
    fn test_lamination_family() {
        assert_eq!(LaminationFamily::from_literal("Padronizada"), Some(LaminationFamily::Standard));
        assert_eq!(LaminationFamily::from_literal("Comprida"), Some(LaminationFamily::Long));
        assert_eq!(LaminationFamily::from_literal("Standard"), None);
        assert_eq!(LaminationFamily::Standard.largest().number, 6);
        assert_eq!(LaminationFamily::Long.largest().width_cm, 5.0);
    }
}
