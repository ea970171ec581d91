//! Bolide library entry points.
//!
//! This crate holds the fixed CGS constant set behind the asteroid impact
//! energy report, the unit conversions and closed-form formulas that derive
//! energies from it, and the [`ImpactReport`] summary type. Higher-level
//! consumers (the CLI) should only depend on the items exported here instead
//! of reimplementing behavior.

#![deny(warnings)]

pub mod asteroid;
pub mod constants;
pub mod error;
pub mod physics;
pub mod report;
pub mod units;

pub use asteroid::SpectralClass;
pub use error::{Error, Result};
pub use physics::{
    difference_factor, kinetic_energy, mass_from_volume_density, mean_energy, sphere_volume,
};
pub use report::{CeresImpact, ClassEnergy, ImpactReport};
