use bolide_lib::constants::{CERES_MASS_G, ESCAPE_VELOCITY_CM_S, KE_BOMB_10_MEGATON_ERG};
use bolide_lib::units::{erg_to_ton_tnt, km3_to_cm3};
use bolide_lib::{sphere_volume, ImpactReport, SpectralClass};

#[test]
fn report_orders_classes_c_s_m() {
    let report = ImpactReport::compute().expect("report computes");

    let classes: Vec<SpectralClass> = report.classes.iter().map(|entry| entry.class).collect();
    assert_eq!(
        classes,
        vec![
            SpectralClass::CType,
            SpectralClass::SType,
            SpectralClass::MType
        ]
    );

    let densities: Vec<f64> = report
        .classes
        .iter()
        .map(|entry| entry.density_g_cm3)
        .collect();
    assert_eq!(densities, vec![1.38, 2.71, 5.32]);
}

#[test]
fn class_energies_follow_the_volume_mass_energy_chain() {
    let report = ImpactReport::compute().expect("report computes");

    // Volume is evaluated in km³ and converted to cm³ before the mass step.
    let volume_cm3 = km3_to_cm3(sphere_volume(1.0).expect("volume computes"));
    assert_eq!(report.diameter_km, 1.0);
    assert_eq!(report.volume_cm3, volume_cm3);
    assert_eq!(report.velocity_cm_s, ESCAPE_VELOCITY_CM_S);

    for entry in &report.classes {
        let mass_g = volume_cm3 * entry.density_g_cm3;
        assert_eq!(entry.mass_g, mass_g);
        assert_eq!(entry.ke_erg, 0.5 * mass_g * ESCAPE_VELOCITY_CM_S.powi(2));
        assert_eq!(entry.ke_ton_tnt, erg_to_ton_tnt(entry.ke_erg));
    }

    // Order-of-magnitude anchor for the C-type body.
    assert!((report.classes[0].ke_erg / 4.531935898362491e26 - 1.0).abs() < 1e-12);
}

#[test]
fn mean_energy_is_the_three_term_average() {
    let report = ImpactReport::compute().expect("report computes");

    let expected =
        (report.classes[0].ke_erg + report.classes[1].ke_erg + report.classes[2].ke_erg) / 3.0;
    assert_eq!(report.mean_ke_erg, expected);
    assert_eq!(report.mean_ke_ton_tnt, erg_to_ton_tnt(expected));

    // The mean lies between the lightest and densest class energies.
    assert!(report.mean_ke_erg > report.classes[0].ke_erg);
    assert!(report.mean_ke_erg < report.classes[2].ke_erg);
}

#[test]
fn ceres_energy_dwarfs_the_reference_bomb() {
    let report = ImpactReport::compute().expect("report computes");

    assert_eq!(report.ceres.mass_g, CERES_MASS_G);
    assert_eq!(
        report.ceres.ke_erg,
        0.5 * CERES_MASS_G * ESCAPE_VELOCITY_CM_S.powi(2)
    );
    assert_eq!(report.ceres.ke_ton_tnt, erg_to_ton_tnt(report.ceres.ke_erg));

    assert_eq!(report.bomb_ke_erg, KE_BOMB_10_MEGATON_ERG);
    assert_eq!(
        report.difference_factor,
        report.ceres.ke_erg / KE_BOMB_10_MEGATON_ERG
    );
    assert!((report.difference_factor / 1.402688e12 - 1.0).abs() < 1e-12);
}

#[test]
fn report_serializes_with_kebab_case_classes() {
    let report = ImpactReport::compute().expect("report computes");
    let value = serde_json::to_value(&report).expect("report serializes");

    let classes = value["classes"].as_array().expect("classes array");
    assert_eq!(classes.len(), 3);
    assert_eq!(classes[0]["class"], "c-type");
    assert_eq!(classes[1]["class"], "s-type");
    assert_eq!(classes[2]["class"], "m-type");

    assert_eq!(value["bomb_ke_erg"], 4.2e23);
    assert_eq!(
        value["ceres"]["ke_erg"].as_f64().expect("ceres energy"),
        report.ceres.ke_erg
    );
    assert_eq!(
        value["difference_factor"].as_f64().expect("factor"),
        report.difference_factor
    );
}
