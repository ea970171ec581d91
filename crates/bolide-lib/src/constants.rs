//! Physical constants shared across the impact energy calculations.
//!
//! Everything is expressed in CGS units (grams, centimetres, ergs); the
//! ton-of-TNT equivalence exists only for display conversions. The values
//! are rounded working figures, not high-precision literature values, and
//! the reported energies depend on keeping them exactly as written.

/// Earth escape velocity in cm/s (11.2 km/s), used as the impact velocity.
pub const ESCAPE_VELOCITY_CM_S: f64 = 1.12e6;

/// Mass of the dwarf planet Ceres in grams.
pub const CERES_MASS_G: f64 = 9.393e23;

/// Kinetic energy released by a 10-megaton hydrogen bomb in erg.
pub const KE_BOMB_10_MEGATON_ERG: f64 = 4.2e23;

/// Energy of one ton of TNT in erg.
pub const ERG_PER_TON_TNT: f64 = 3.6e16;

/// Diameter of the reference impactor in km.
pub const REFERENCE_DIAMETER_KM: f64 = 1.0;
