//! Bench analysis of a finished transformer.
//!
//! These routines work from measurements rather than from a design:
//!
//! - [`equivalent_circuit`] turns open- and short-circuit test readings into
//!   the series and magnetizing branch parameters
//! - [`regulation`] builds the load phasor diagram and the voltage regulation
//! - [`magnetizing_current`] samples the no-load current drawn through a
//!   measured magnetization curve

mod equivalent;
mod magnetizing;
mod regulation;

pub use equivalent::{
    equivalent_circuit, open_circuit, refer_impedance, short_circuit, BenchTest, BenchTests,
    CircuitType, EquivalentCircuit, OpenCircuitResult, SeriesBranch, ShortCircuitResult, Side,
    TestReading,
};
pub use magnetizing::{
    magnetizing_current, CurvePoint, MagnetizationCurve, MagnetizingParams, MagnetizingWaveform,
    MAX_SAMPLES,
};
pub use regulation::{regulation, LoadPoint, Phasor, PowerFactorKind, Regulation};
