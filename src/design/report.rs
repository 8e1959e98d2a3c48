//! Final dimensioning report.

use serde::{Serialize, Serializer};

use crate::input::TransformerSpec;
use crate::tables::{GaugeEntry, LaminationEntry};

use super::{round_to, CoreDesign, ElectricalDesign, Feasibility, MassEstimate};

/// Clearance added around the core for the outer envelope (cm).
const ENVELOPE_CLEARANCE_CM: f64 = 4.0;

/// Outer envelope of the finished transformer (cm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OuterDimensions {
    #[serde(rename = "largura")]
    pub width_cm: f64,
    #[serde(rename = "profundidade")]
    pub depth_cm: f64,
    #[serde(rename = "altura")]
    pub height_cm: f64,
}

/// Everything computed for one transformer description.
///
/// Built once by [`assemble`] and read-only afterwards:
///
/// ```compile_fail
/// fn tamper(result: &mut trafo_core::DimensioningResult) {
///     result.mass.iron_kg = 0.0;
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DimensioningResult {
    pub(crate) spec: TransformerSpec,
    pub(crate) electrical: ElectricalDesign,
    pub(crate) core: CoreDesign,
    pub(crate) feasibility: Feasibility,
    pub(crate) mass: MassEstimate,
}

impl DimensioningResult {
    /// The validated input this result was computed from.
    pub fn spec(&self) -> &TransformerSpec {
        &self.spec
    }

    pub fn electrical(&self) -> &ElectricalDesign {
        &self.electrical
    }

    pub fn core(&self) -> &CoreDesign {
        &self.core
    }

    pub fn feasibility(&self) -> &Feasibility {
        &self.feasibility
    }

    pub fn mass(&self) -> &MassEstimate {
        &self.mass
    }

    pub fn primary_currents(&self) -> Vec<f64> {
        self.electrical.primary_currents()
    }

    pub fn secondary_currents(&self) -> Vec<f64> {
        self.electrical.secondary_currents()
    }

    pub fn primary_turns(&self) -> &[u32] {
        &self.core.primary_turns
    }

    pub fn secondary_turns(&self) -> &[u32] {
        &self.core.secondary_turns
    }

    pub fn lamination(&self) -> &LaminationEntry {
        &self.core.lamination
    }

    pub fn is_feasible(&self) -> bool {
        self.feasibility.feasible
    }

    /// Core dimensions `(a, b)` in cm.
    pub fn core_dimensions(&self) -> (f64, f64) {
        (self.core.width_cm, self.core.depth_cm)
    }

    /// Outer envelope: core plus clearance, height 1.5× the stack length.
    pub fn outer_dimensions(&self) -> OuterDimensions {
        let (a, b) = self.core_dimensions();
        OuterDimensions {
            width_cm: a + ENVELOPE_CLEARANCE_CM,
            depth_cm: b + ENVELOPE_CLEARANCE_CM,
            height_cm: b * 1.5,
        }
    }

    /// Pretty-printed JSON report.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Freeze the stage outputs into a report.
pub fn assemble(
    spec: TransformerSpec,
    electrical: ElectricalDesign,
    core: CoreDesign,
    feasibility: Feasibility,
    mass: MassEstimate,
) -> DimensioningResult {
    DimensioningResult {
        spec,
        electrical,
        core,
        feasibility,
        mass,
    }
}

// Serialized layout of the calculator's JSON endpoint.

#[derive(Serialize)]
struct ReportView<'a> {
    dados_entrada: &'a TransformerSpec,
    resultados: ResultsView<'a>,
}

#[derive(Serialize)]
struct ResultsView<'a> {
    correntes: PairView<Vec<f64>>,
    espiras: PairView<&'a [u32]>,
    bitolas: PairView<Vec<GaugeEntry>>,
    nucleo: CoreView<'a>,
    pesos: MassView,
    viabilidade: FeasibilityView,
    dimensoes_finais: OuterDimensions,
}

#[derive(Serialize)]
struct PairView<T> {
    primario: T,
    secundario: T,
}

#[derive(Serialize)]
struct CoreView<'a> {
    lamina: u8,
    lamina_detalhes: &'a LaminationEntry,
    quantidade: u32,
    secao_magnetica: f64,
    secao_geometrica: f64,
    espiras_por_volt: f64,
    dimensoes: DimensionsView,
}

#[derive(Serialize)]
struct DimensionsView {
    a: f64,
    b: f64,
}

#[derive(Serialize)]
struct MassView {
    ferro: f64,
    cobre: f64,
}

#[derive(Serialize)]
struct FeasibilityView {
    executavel: bool,
    relacao: f64,
    mensagem: String,
}

impl Serialize for DimensioningResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let view = ReportView {
            dados_entrada: &self.spec,
            resultados: ResultsView {
                correntes: PairView {
                    primario: self.primary_currents(),
                    secundario: self.secondary_currents(),
                },
                espiras: PairView {
                    primario: self.primary_turns(),
                    secundario: self.secondary_turns(),
                },
                bitolas: PairView {
                    primario: self.electrical.primary_gauges(),
                    secundario: self.electrical.secondary_gauges(),
                },
                nucleo: CoreView {
                    lamina: self.core.lamination.number,
                    lamina_detalhes: &self.core.lamination,
                    quantidade: self.core.lamination_count,
                    secao_magnetica: self.core.magnetic_section_cm2,
                    secao_geometrica: self.core.geometric_section_cm2,
                    espiras_por_volt: self.core.turns_per_volt,
                    dimensoes: DimensionsView {
                        a: self.core.width_cm,
                        b: self.core.depth_cm,
                    },
                },
                pesos: MassView {
                    ferro: round_to(self.mass.iron_kg, 2),
                    cobre: round_to(self.mass.copper_kg, 2),
                },
                viabilidade: FeasibilityView {
                    executavel: self.feasibility.feasible,
                    relacao: round_to(self.feasibility.ratio, 2),
                    mensagem: self.feasibility.message(),
                },
                dimensoes_finais: self.outer_dimensions(),
            },
        };
        view.serialize(serializer)
    }
}
