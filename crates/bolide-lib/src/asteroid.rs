//! Asteroid spectral classification and mean-density assumptions.

use std::fmt;

use serde::Serialize;

/// Asteroid spectral class, selecting the mean-density assumption for the
/// reference impactor.
///
/// The densities are rounded survey means: 1.38 g/cm³ for carbonaceous,
/// 2.71 g/cm³ for silicaceous, and 5.32 g/cm³ for metallic bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpectralClass {
    /// Carbonaceous asteroids.
    CType,
    /// Silicaceous asteroids.
    SType,
    /// Metallic asteroids.
    MType,
}

impl SpectralClass {
    /// All classes in report order.
    pub const ALL: [SpectralClass; 3] = [
        SpectralClass::CType,
        SpectralClass::SType,
        SpectralClass::MType,
    ];

    /// Human-readable label shown in textual renderings.
    pub fn label(self) -> &'static str {
        match self {
            SpectralClass::CType => "C-type",
            SpectralClass::SType => "S-type",
            SpectralClass::MType => "M-type",
        }
    }

    /// Mean density for this class in g/cm³.
    pub fn mean_density_g_cm3(self) -> f64 {
        match self {
            SpectralClass::CType => 1.38,
            SpectralClass::SType => 2.71,
            SpectralClass::MType => 5.32,
        }
    }
}

impl fmt::Display for SpectralClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
