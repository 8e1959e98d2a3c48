//! Property-based tests for table selection and the dimensioning pass.
//!
//! Covers: gauge monotonicity, lamination coverage, window ratio scale
//! consistency, pipeline idempotence, topology cardinality.

use proptest::prelude::*;
use trafo_core::design::{window_ratio, winding_copper_area};
use trafo_core::input::{LaminationFamily, RawSpec, Scalar, Topology, VoltageField};
use trafo_core::tables::{select_gauge, select_lamination, GaugeEntry, AWG_TABLE};
use trafo_core::{Designer, TrafoError};

fn any_topology() -> impl Strategy<Value = Topology> {
    prop_oneof![
        Just(Topology::Simple),
        Just(Topology::DualPrimary),
        Just(Topology::DualSecondary),
        Just(Topology::DualBoth),
    ]
}

fn any_family() -> impl Strategy<Value = LaminationFamily> {
    prop_oneof![Just(LaminationFamily::Standard), Just(LaminationFamily::Long)]
}

fn raw_spec(
    topology: Topology,
    primary: Vec<f64>,
    secondary: Vec<f64>,
    power: f64,
    family: LaminationFamily,
    frequency: u32,
) -> RawSpec {
    RawSpec {
        topology: Some(topology.literal().to_string()),
        primary_voltages: Some(VoltageField::from(primary)),
        secondary_voltages: Some(VoltageField::from(secondary)),
        power: Some(Scalar::Number(power)),
        lamination: Some(family.literal().to_string()),
        frequency: Some(Scalar::Number(frequency as f64)),
    }
}

// ── Table selection ──────────────────────────────────────────────────

proptest! {
    /// A larger requirement never selects a smaller gauge.
    #[test]
    fn gauge_selection_monotone(s1 in 0.0f64..80.0, s2 in 0.0f64..80.0) {
        let (lo, hi) = if s1 <= s2 { (s1, s2) } else { (s2, s1) };
        prop_assert!(select_gauge(lo).area_mm2 <= select_gauge(hi).area_mm2);
    }

    /// The selected gauge covers the requirement unless nothing in the table does.
    #[test]
    fn gauge_covers_or_is_largest(s in 0.0f64..100.0) {
        let g = select_gauge(s);
        let largest = AWG_TABLE[AWG_TABLE.len() - 1];
        prop_assert!(g.area_mm2 >= s || g == largest);
    }

    /// Lamination width covers the requirement, or the widest entry is returned.
    #[test]
    fn lamination_covers_or_is_largest(family in any_family(), width in 0.0f64..12.0) {
        let entry = select_lamination(family, width);
        let largest = *family.largest();
        if width <= largest.width_cm {
            prop_assert!(entry.width_cm >= width);
        } else {
            prop_assert_eq!(entry, largest);
        }
    }
}

// ── Feasibility ──────────────────────────────────────────────────────

proptest! {
    /// Doubling turns and halving gauge areas leaves the ratio unchanged.
    #[test]
    fn ratio_scale_consistent(
        window in 100.0f64..5000.0,
        windings in prop::collection::vec((1u32..2000, 0usize..AWG_TABLE.len()), 1..4),
    ) {
        let turns: Vec<u32> = windings.iter().map(|&(n, _)| n).collect();
        let gauges: Vec<GaugeEntry> = windings.iter().map(|&(_, i)| AWG_TABLE[i]).collect();

        let doubled: Vec<u32> = turns.iter().map(|n| n * 2).collect();
        let halved: Vec<GaugeEntry> = gauges
            .iter()
            .map(|g| GaugeEntry { area_mm2: g.area_mm2 / 2.0, ..*g })
            .collect();

        let base = window_ratio(window, winding_copper_area(&turns, &gauges));
        let scaled = window_ratio(window, winding_copper_area(&doubled, &halved));
        prop_assert_eq!(base, scaled);
    }
}

// ── Pipeline ─────────────────────────────────────────────────────────

proptest! {
    /// Identical input gives identical results.
    #[test]
    fn pipeline_idempotent(
        topology in any_topology(),
        family in any_family(),
        voltages in prop::collection::vec(1.0f64..1000.0, 4),
        power in 1.0f64..5000.0,
        frequency in prop_oneof![Just(50u32), Just(60u32), Just(400u32)],
    ) {
        let primary = voltages[..topology.primary_count()].to_vec();
        let secondary = voltages[2..2 + topology.secondary_count()].to_vec();
        let raw = raw_spec(topology, primary, secondary, power, family, frequency);

        let designer = Designer::new();
        let first = designer.run_raw(&raw).unwrap();
        let second = designer.run_raw(&raw).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
    }

    /// Voltage lists are accepted exactly when their lengths match the topology.
    #[test]
    fn topology_cardinality(
        topology in any_topology(),
        n_primary in 1usize..=3,
        n_secondary in 1usize..=3,
    ) {
        let raw = raw_spec(
            topology,
            vec![220.0; n_primary],
            vec![12.0; n_secondary],
            100.0,
            LaminationFamily::Standard,
            50,
        );
        let matches = n_primary == topology.primary_count() && n_secondary == topology.secondary_count();

        match raw.validate() {
            Ok(spec) => {
                prop_assert!(matches);
                prop_assert_eq!(spec.primary_voltages().len(), n_primary);
            }
            Err(e) => {
                prop_assert!(!matches);
                let is_list_error = matches!(e, TrafoError::InvalidVoltageList { .. });
                prop_assert!(is_list_error);
            }
        }
    }
}
