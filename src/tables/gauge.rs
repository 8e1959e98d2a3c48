//! AWG wire-gauge catalog.

use serde::Serialize;

/// One standard wire size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GaugeEntry {
    /// AWG size code
    #[serde(rename = "AWG")]
    pub awg: u8,
    /// Conductor cross-section (mm²)
    pub area_mm2: f64,
}

const fn awg(awg: u8, area_mm2: f64) -> GaugeEntry {
    GaugeEntry { awg, area_mm2 }
}

/// AWG 25 through AWG 0, ascending by area.
pub static AWG_TABLE: [GaugeEntry; 26] = [
    awg(25, 0.162),
    awg(24, 0.205),
    awg(23, 0.258),
    awg(22, 0.326),
    awg(21, 0.410),
    awg(20, 0.518),
    awg(19, 0.653),
    awg(18, 0.823),
    awg(17, 1.04),
    awg(16, 1.31),
    awg(15, 1.65),
    awg(14, 2.08),
    awg(13, 2.62),
    awg(12, 3.31),
    awg(11, 4.17),
    awg(10, 5.26),
    awg(9, 6.63),
    awg(8, 8.37),
    awg(7, 10.55),
    awg(6, 13.30),
    awg(5, 16.80),
    awg(4, 21.15),
    awg(3, 26.67),
    awg(2, 33.62),
    awg(1, 42.41),
    awg(0, 53.49),
];

/// Smallest gauge whose area is at least `required_mm2`.
///
/// Requirements beyond the table return AWG 0; an overloaded conductor
/// shows up later as a poor window/copper ratio rather than an error here.
pub fn select_gauge(required_mm2: f64) -> GaugeEntry {
    AWG_TABLE
        .iter()
        .find(|g| g.area_mm2 >= required_mm2)
        .copied()
        .unwrap_or(AWG_TABLE[AWG_TABLE.len() - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_ascending() {
        for pair in AWG_TABLE.windows(2) {
            assert!(pair[0].area_mm2 < pair[1].area_mm2);
        }
    }

    #[test]
    fn test_exact_match_selected() {
        assert_eq!(select_gauge(0.326).awg, 22);
        assert_eq!(select_gauge(3.31).awg, 12);
    }

    #[test]
    fn test_rounds_up_to_next_size() {
        assert_eq!(select_gauge(0.31).awg, 22);
        assert_eq!(select_gauge(2.78).awg, 12);
        assert_eq!(select_gauge(0.0).awg, 25);
    }

    #[test]
    fn test_oversized_falls_back_to_largest() {
        let g = select_gauge(120.0);
        assert_eq!(g.awg, 0);
        assert_eq!(g.area_mm2, 53.49);
    }
}
