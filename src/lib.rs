//! # Trafo Core
//!
//! Dimensioning of small single-phase transformers.
//!
//! This library provides:
//! - Validation of a transformer description (topology, voltages, power,
//!   lamination family, frequency)
//! - Core and winding dimensioning against the AWG wire table and the
//!   standard lamination catalogue
//! - A feasibility check of the winding window, mass estimates and a JSON
//!   report
//! - Bench analysis: equivalent circuit from open/short-circuit tests,
//!   voltage regulation and magnetizing current
//!
//! ## Architecture
//!
//! - [`input`] - Raw and validated transformer descriptions
//! - [`tables`] - AWG gauge and lamination tables
//! - [`design`] - The dimensioning pass and its report
//! - [`analysis`] - Equivalent circuit, regulation and magnetizing current
//! - [`io`] - JSON file input and output (CLI only)
//!
//! ## Usage
//!
//! ### Library
//!
//! ```
//! use trafo_core::Designer;
//!
//! let report = Designer::new()
//!     .run_json(r#"{
//!         "tipo_transformador": "Transformador de um primário e um secundário",
//!         "Vp": "120",
//!         "Vs": "12",
//!         "Potencia": 100,
//!         "tipo_lamina": "Padronizada",
//!         "frequencia": 60
//!     }"#)
//!     .unwrap();
//!
//! assert!(report.is_feasible());
//! assert_eq!(report.lamination().number, 5);
//! ```
//!
//! ### Native CLI
//!
//! ```bash
//! trafo dimension design.json --output report.json
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import init, { dimension_json } from 'trafo_core';
//!
//! await init();
//! const report = JSON.parse(dimension_json(JSON.stringify(input)));
//! ```
//!
//! ## Dimensioning Method
//!
//! 1. Currents from power and voltage, primary drawing 10% extra
//! 2. Wire sections from a power-dependent current density, rounded up to
//!    the next AWG gauge
//! 3. Magnetic section from power and frequency, central leg width rounded
//!    up to the next catalogue lamination
//! 4. Turns from the turns-per-volt figure of the final core
//! 5. Window/copper ratio decides whether the windings fit

pub mod analysis;
pub mod design;
pub mod error;
pub mod input;
pub mod tables;

#[cfg(feature = "cli")]
pub mod io;

// Re-export main types for convenience
pub use design::{dimension, DesignOptions, Designer, DimensioningResult};
pub use error::{Result, TrafoError};
pub use input::{RawSpec, TransformerSpec};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

/// Frequency assumed when a description gives none (Hz)
pub const DEFAULT_FREQUENCY: u32 = 50;
