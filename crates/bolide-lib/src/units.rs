//! Unit conversions for the CGS pipeline.
//!
//! Each function is a single multiplication or division with no side
//! effects and no failure modes. Both directions are provided for every
//! pair the calculations touch.

use crate::constants::ERG_PER_TON_TNT;

/// Convert cubic kilometres to cubic centimetres.
#[inline]
pub fn km3_to_cm3(km3: f64) -> f64 {
    km3 * 1.0e15
}

/// Convert cubic centimetres to cubic kilometres.
#[inline]
pub fn cm3_to_km3(cm3: f64) -> f64 {
    cm3 / 1.0e15
}

/// Convert kilograms to grams.
#[inline]
pub fn kg_to_g(kg: f64) -> f64 {
    kg * 1.0e3
}

/// Convert grams to kilograms.
#[inline]
pub fn g_to_kg(g: f64) -> f64 {
    g / 1.0e3
}

/// Convert kilometres to centimetres.
#[inline]
pub fn km_to_cm(km: f64) -> f64 {
    km * 1.0e5
}

/// Convert centimetres to kilometres.
#[inline]
pub fn cm_to_km(cm: f64) -> f64 {
    cm / 1.0e5
}

/// Convert tons of TNT equivalent to erg.
#[inline]
pub fn ton_tnt_to_erg(ton: f64) -> f64 {
    ton * ERG_PER_TON_TNT
}

/// Convert erg to tons of TNT equivalent.
#[inline]
pub fn erg_to_ton_tnt(erg: f64) -> f64 {
    erg / ERG_PER_TON_TNT
}
