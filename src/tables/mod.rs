//! Standard wire-gauge and lamination catalogs.
//!
//! Both catalogs are compiled-in, read-only arrays sorted ascending by the
//! quantity they are searched on. Selection always picks the *first* entry
//! that covers the requirement and falls back to the largest entry when
//! nothing does; it never fails.

mod gauge;
mod lamination;

pub use gauge::{select_gauge, GaugeEntry, AWG_TABLE};
pub use lamination::{select_lamination, LaminationEntry, LONG_LAMINATIONS, STANDARD_LAMINATIONS};
