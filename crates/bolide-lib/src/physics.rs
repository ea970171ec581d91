//! Closed-form formulas behind the impact energy calculations.
//!
//! Every function validates its arguments the same way: values must be
//! finite and positive, otherwise [`Error::InvalidQuantity`] is returned.
//! The fixed-constant report pipeline never trips these checks; they exist
//! for direct callers of the library.

use std::f64::consts::PI;

use crate::error::{Error, Result};

/// Volume of a sphere with the given diameter.
///
/// Formula: `V = (4/3) · π · (d/2)³`
///
/// Units are the caller's: a diameter in km yields a volume in km³.
///
/// # Errors
///
/// Returns an error if `diameter` is not finite and positive.
///
/// # Examples
///
/// ```
/// use bolide_lib::sphere_volume;
///
/// // A unit-diameter sphere has volume π/6.
/// let volume = sphere_volume(1.0).unwrap();
/// assert!((volume - std::f64::consts::PI / 6.0).abs() < 1e-15);
/// ```
pub fn sphere_volume(diameter: f64) -> Result<f64> {
    if !diameter.is_finite() || diameter <= 0.0 {
        return Err(Error::InvalidQuantity {
            message: format!("diameter must be finite and positive, got {}", diameter),
        });
    }

    let radius = diameter / 2.0;
    Ok((4.0 / 3.0) * PI * radius.powi(3))
}

/// Mass of a homogeneous body from its volume and density.
///
/// In the CGS pipeline the volume is in cm³ and the density in g/cm³,
/// giving a mass in grams.
///
/// # Errors
///
/// Returns an error if either argument is not finite and positive.
pub fn mass_from_volume_density(volume: f64, density: f64) -> Result<f64> {
    if !volume.is_finite() || volume <= 0.0 {
        return Err(Error::InvalidQuantity {
            message: format!("volume must be finite and positive, got {}", volume),
        });
    }

    if !density.is_finite() || density <= 0.0 {
        return Err(Error::InvalidQuantity {
            message: format!("density must be finite and positive, got {}", density),
        });
    }

    Ok(volume * density)
}

/// Classical kinetic energy, `KE = ½ · m · v²`.
///
/// With a mass in grams and a velocity in cm/s the result is in erg.
///
/// # Errors
///
/// Returns an error if either argument is not finite and positive.
///
/// # Examples
///
/// ```
/// use bolide_lib::kinetic_energy;
///
/// // Ceres at Earth escape velocity.
/// let ke = kinetic_energy(9.393e23, 1.12e6).unwrap();
/// assert!((ke / 5.89e35 - 1.0).abs() < 1e-3);
/// ```
pub fn kinetic_energy(mass: f64, velocity: f64) -> Result<f64> {
    if !mass.is_finite() || mass <= 0.0 {
        return Err(Error::InvalidQuantity {
            message: format!("mass must be finite and positive, got {}", mass),
        });
    }

    if !velocity.is_finite() || velocity <= 0.0 {
        return Err(Error::InvalidQuantity {
            message: format!("velocity must be finite and positive, got {}", velocity),
        });
    }

    Ok(0.5 * mass * velocity.powi(2))
}

/// Arithmetic mean of a set of kinetic energies.
///
/// The sum runs left to right over the slice.
///
/// # Errors
///
/// Returns [`Error::EmptyEnergySet`] for an empty slice, and
/// [`Error::InvalidQuantity`] if any element is not finite and positive.
pub fn mean_energy(energies: &[f64]) -> Result<f64> {
    if energies.is_empty() {
        return Err(Error::EmptyEnergySet);
    }

    for &energy in energies {
        if !energy.is_finite() || energy <= 0.0 {
            return Err(Error::InvalidQuantity {
                message: format!("energy must be finite and positive, got {}", energy),
            });
        }
    }

    Ok(energies.iter().sum::<f64>() / energies.len() as f64)
}

/// Dimensionless ratio of one kinetic energy to a reference energy.
///
/// # Errors
///
/// Returns an error if either argument is not finite and positive.
pub fn difference_factor(energy_erg: f64, reference_erg: f64) -> Result<f64> {
    if !energy_erg.is_finite() || energy_erg <= 0.0 {
        return Err(Error::InvalidQuantity {
            message: format!("energy must be finite and positive, got {}", energy_erg),
        });
    }

    if !reference_erg.is_finite() || reference_erg <= 0.0 {
        return Err(Error::InvalidQuantity {
            message: format!(
                "reference energy must be finite and positive, got {}",
                reference_erg
            ),
        });
    }

    Ok(energy_erg / reference_erg)
}
