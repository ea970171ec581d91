//! Bolide CLI library.
//!
//! Output formatting helpers for the impact energy report binary.

pub mod output;
