//! 현열/잠열 분할 테스트.
use approx::assert_abs_diff_eq;
use boiling_lab::substance;
use boiling_lab::thermo::apply_heat_energy;

#[test]
fn zero_energy_leaves_temperature_unchanged() {
    let r = apply_heat_energy(1.0, 20.0, 0.0, Some(100.0), &substance::water());
    assert_eq!(r.new_temp_c, 20.0);
    assert_eq!(r.steam_generated_kg, 0.0);
    assert_eq!(r.energy_to_vaporization_j, 0.0);
}

#[test]
fn sensible_heat_below_boiling_point() {
    // Q = m·c·ΔT : 1 kg 물 10 K => 41860 J
    let r = apply_heat_energy(1.0, 20.0, 41_860.0, Some(100.0), &substance::water());
    assert_abs_diff_eq!(r.new_temp_c, 30.0, epsilon = 1e-9);
    assert_eq!(r.steam_generated_kg, 0.0);
}

#[test]
fn energy_exactly_to_boiling_point_makes_no_steam() {
    let water = substance::water();
    let energy = 1.0 * 1000.0 * water.specific_heat * (100.0 - 20.0);
    let r = apply_heat_energy(1.0, 20.0, energy, Some(100.0), &water);
    assert_abs_diff_eq!(r.new_temp_c, 100.0, epsilon = 1e-9);
    assert!(r.steam_generated_kg < 1e-12, "steam={}", r.steam_generated_kg);
}

#[test]
fn surplus_energy_becomes_steam_at_fixed_temperature() {
    let water = substance::water();
    let to_boil = 1000.0 * water.specific_heat * 80.0;
    let surplus = 2_257_000.0 * 0.01; // 10 g 증발분
    let r = apply_heat_energy(1.0, 20.0, to_boil + surplus, Some(100.0), &water);
    assert_eq!(r.new_temp_c, 100.0);
    assert_abs_diff_eq!(r.steam_generated_kg, 0.01, epsilon = 1e-9);
    assert_abs_diff_eq!(r.energy_to_vaporization_j, surplus, epsilon = 1e-6);
}

#[test]
fn no_vaporization_data_allows_overshoot() {
    let mut water = substance::water();
    water.heat_of_vaporization = 0.0;
    let r = apply_heat_energy(1.0, 95.0, 41_860.0, Some(100.0), &water);
    assert_abs_diff_eq!(r.new_temp_c, 105.0, epsilon = 1e-9);
    assert_eq!(r.steam_generated_kg, 0.0);

    let r = apply_heat_energy(1.0, 95.0, 41_860.0, None, &substance::water());
    assert_abs_diff_eq!(r.new_temp_c, 105.0, epsilon = 1e-9);
    assert_eq!(r.steam_generated_kg, 0.0);
}

#[test]
fn degenerate_mass_or_specific_heat_is_noop() {
    let water = substance::water();
    let r = apply_heat_energy(0.0, 20.0, 10_000.0, Some(100.0), &water);
    assert_eq!(r.new_temp_c, 20.0);
    let r = apply_heat_energy(-1.0, 20.0, 10_000.0, Some(100.0), &water);
    assert_eq!(r.new_temp_c, 20.0);

    let mut broken = substance::water();
    broken.specific_heat = f64::NAN;
    let r = apply_heat_energy(1.0, 20.0, 10_000.0, Some(100.0), &broken);
    assert_eq!(r.new_temp_c, 20.0);
    assert_eq!(r.steam_generated_kg, 0.0);
}
