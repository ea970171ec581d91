//! Impact energy summary types and rendering.
//!
//! [`ImpactReport::compute`] runs the whole calculation pass over the fixed
//! constant set; [`ImpactReport::render_text`] produces the bordered console
//! report. The types serialize to JSON for machine consumers.

use std::fmt::Write as _;

use serde::Serialize;
use tracing::debug;

use crate::asteroid::SpectralClass;
use crate::constants::{
    CERES_MASS_G, ESCAPE_VELOCITY_CM_S, KE_BOMB_10_MEGATON_ERG, REFERENCE_DIAMETER_KM,
};
use crate::error::Result;
use crate::physics::{
    difference_factor, kinetic_energy, mass_from_volume_density, mean_energy, sphere_volume,
};
use crate::units::{erg_to_ton_tnt, km3_to_cm3};

/// Width of the label column in the plain-text report.
const LABEL_WIDTH: usize = 30;

/// Horizontal rule framing the plain-text report.
const RULE: &str = "---------------------------------------------------------------";

/// Kinetic energy of the reference body at one spectral-class density.
#[derive(Debug, Serialize)]
pub struct ClassEnergy {
    /// Spectral class the density assumption belongs to.
    pub class: SpectralClass,
    /// Mean density assumed for the class, in g/cm³.
    pub density_g_cm3: f64,
    /// Mass of the reference body at that density, in grams.
    pub mass_g: f64,
    /// Impact kinetic energy in erg.
    pub ke_erg: f64,
    /// Impact kinetic energy in tons of TNT.
    pub ke_ton_tnt: f64,
}

/// Kinetic energy of a Ceres-mass body at the impact velocity.
#[derive(Debug, Serialize)]
pub struct CeresImpact {
    /// Mass of Ceres, in grams.
    pub mass_g: f64,
    /// Impact kinetic energy in erg.
    pub ke_erg: f64,
    /// Impact kinetic energy in tons of TNT.
    pub ke_ton_tnt: f64,
}

/// Complete result of one impact energy calculation pass.
#[derive(Debug, Serialize)]
pub struct ImpactReport {
    /// Diameter of the reference body, in km.
    pub diameter_km: f64,
    /// Volume of the reference body, in cm³.
    pub volume_cm3: f64,
    /// Impact velocity, in cm/s.
    pub velocity_cm_s: f64,
    /// Yield of the reference bomb, in erg.
    pub bomb_ke_erg: f64,
    /// Per-class energies, in C, S, M order.
    pub classes: Vec<ClassEnergy>,
    /// Mean of the class energies, in erg.
    pub mean_ke_erg: f64,
    /// Mean of the class energies, in tons of TNT.
    pub mean_ke_ton_tnt: f64,
    /// Ceres at the same impact velocity.
    pub ceres: CeresImpact,
    /// Ceres kinetic energy over the bomb yield.
    pub difference_factor: f64,
}

impl ImpactReport {
    /// Computes every quantity in the report from the built-in constants.
    ///
    /// The reference volume is evaluated in km³ and converted to cm³ before
    /// the mass step, and the mean is the left-to-right sum of the three
    /// class energies over their count.
    ///
    /// # Errors
    ///
    /// Propagates formula validation failures; none are reachable with the
    /// built-in constants.
    pub fn compute() -> Result<Self> {
        let volume_km3 = sphere_volume(REFERENCE_DIAMETER_KM)?;
        let volume_cm3 = km3_to_cm3(volume_km3);
        debug!(volume_km3, volume_cm3, "computed reference body volume");

        let mut classes = Vec::with_capacity(SpectralClass::ALL.len());
        for class in SpectralClass::ALL {
            let density_g_cm3 = class.mean_density_g_cm3();
            let mass_g = mass_from_volume_density(volume_cm3, density_g_cm3)?;
            let ke_erg = kinetic_energy(mass_g, ESCAPE_VELOCITY_CM_S)?;
            debug!(class = %class, mass_g, ke_erg, "computed class impact energy");
            classes.push(ClassEnergy {
                class,
                density_g_cm3,
                mass_g,
                ke_erg,
                ke_ton_tnt: erg_to_ton_tnt(ke_erg),
            });
        }

        let energies: Vec<f64> = classes.iter().map(|entry| entry.ke_erg).collect();
        let mean_ke_erg = mean_energy(&energies)?;

        let ceres_ke_erg = kinetic_energy(CERES_MASS_G, ESCAPE_VELOCITY_CM_S)?;
        let factor = difference_factor(ceres_ke_erg, KE_BOMB_10_MEGATON_ERG)?;
        debug!(ceres_ke_erg, factor, "computed Ceres impact energy");

        Ok(Self {
            diameter_km: REFERENCE_DIAMETER_KM,
            volume_cm3,
            velocity_cm_s: ESCAPE_VELOCITY_CM_S,
            bomb_ke_erg: KE_BOMB_10_MEGATON_ERG,
            classes,
            mean_ke_erg,
            mean_ke_ton_tnt: erg_to_ton_tnt(mean_ke_erg),
            ceres: CeresImpact {
                mass_g: CERES_MASS_G,
                ke_erg: ceres_ke_erg,
                ke_ton_tnt: erg_to_ton_tnt(ceres_ke_erg),
            },
            difference_factor: factor,
        })
    }

    /// Renders the bordered plain-text report.
    ///
    /// Energies print in `{:.2E}` scientific notation in a fixed value
    /// column; each asteroid energy line is followed by its ton-of-TNT
    /// equivalent, with the `(ton):` tag aligned under the parent line's
    /// `(erg):` tag. The difference factor prints twice, fixed-point then
    /// scientific.
    pub fn render_text(&self) -> String {
        let mut buffer = String::new();

        let _ = writeln!(buffer);
        let _ = writeln!(buffer, " {RULE}");
        let _ = writeln!(buffer, " Results:");
        let _ = writeln!(buffer, " {RULE}");
        write_energy_line(&mut buffer, "10-megaton bomb KE (erg):", self.bomb_ke_erg);
        let _ = writeln!(buffer);

        for entry in &self.classes {
            let label = format!("1-km {} asteroid KE (erg):", entry.class);
            write_energy_line(&mut buffer, &label, entry.ke_erg);
            write_ton_line(&mut buffer, &label, entry.ke_ton_tnt);
        }
        let _ = writeln!(buffer);

        let mean_label = "1-km mean asteroid KE (erg):";
        write_energy_line(&mut buffer, mean_label, self.mean_ke_erg);
        write_ton_line(&mut buffer, mean_label, self.mean_ke_ton_tnt);
        let _ = writeln!(buffer);

        let ceres_label = "Ceres asteroid KE (erg):";
        write_energy_line(&mut buffer, ceres_label, self.ceres.ke_erg);
        write_ton_line(&mut buffer, ceres_label, self.ceres.ke_ton_tnt);

        let _ = writeln!(
            buffer,
            " {:<width$}  {:.1}",
            "Difference factor (x):", self.difference_factor, width = LABEL_WIDTH
        );
        let _ = writeln!(
            buffer,
            " {:<width$}  {:.2E}",
            "Difference factor (x):", self.difference_factor, width = LABEL_WIDTH
        );
        let _ = writeln!(buffer, " {RULE}");

        buffer
    }
}

fn write_energy_line(buffer: &mut String, label: &str, value: f64) {
    let _ = writeln!(buffer, " {label:<width$}  {value:.2E}", width = LABEL_WIDTH);
}

fn write_ton_line(buffer: &mut String, parent_label: &str, value: f64) {
    let tag = format!("{:>width$}", "(ton):", width = parent_label.len());
    let _ = writeln!(buffer, " {tag:<width$}  {value:.2E}", width = LABEL_WIDTH);
}
