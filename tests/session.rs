//! 세션 실행기 종단 시나리오 테스트.
use approx::assert_abs_diff_eq;
use boiling_lab::session::{Session, SessionError};
use boiling_lab::substance;
use boiling_lab::thermo::{resolve_boiling_point, Phase, SimulationState};

fn assert_close(label: &str, actual: f64, expected: f64, abs_tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= abs_tol,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {abs_tol})"
    );
}

#[test]
fn one_kilogram_of_water_on_2kw_heater() {
    let water = substance::water();
    let bp = resolve_boiling_point(0.0, &water).expect("bp").temperature_c;
    let expected_s = 1000.0 * water.specific_heat * (bp - 20.0) / 2000.0;

    let mut session = Session::new(water, SimulationState::new(1.0, 20.0, 0.0), 20.0, 0.1)
        .expect("session");
    let boil_at = session.run_until_boiling(2000.0, 600.0).expect("never boiled");

    // Q = m·c·ΔT 로 구한 약 167.4 s, 틱 해상도 0.1 s
    assert_close("boil time", boil_at, expected_s, 0.15);
    let last = session.last_step().expect("last step");
    assert!(last.is_boiling);
    assert_eq!(last.state.temperature_c, bp);

    // 끓기 직전 틱은 아직 끓지 않는다
    let history = session.history();
    let before = history[history.len() - 2];
    assert!(before.temperature_c < bp);
    assert_ne!(before.phase, Phase::Boiling);
    assert_close("energy", session.total_energy_j(), boil_at * 2000.0, 1e-6);
}

#[test]
fn saltwater_never_drops_below_residue() {
    let initial = SimulationState::new(1.0, 20.0, 0.0).with_residue(0.03);
    let mut session =
        Session::new(substance::saltwater(), initial, 20.0, 0.1).expect("session");
    session.run_for(20_000.0, 1_000.0);

    for record in session.history() {
        assert!(record.fluid_mass_kg >= 0.03, "mass {} at {}", record.fluid_mass_kg, record.time_s);
    }
    assert!(session.is_depleted());
    assert_eq!(session.state().fluid_mass_kg, 0.03);
    assert_abs_diff_eq!(session.total_steam_kg(), 0.97, epsilon = 1e-9);
    assert_eq!(
        session.history().last().map(|r| r.phase),
        Some(Phase::Depleted)
    );

    // 증발이 끝나면 더 이상 틱을 돌리지 않는다
    let ran = session.run_for(20_000.0, 10.0);
    assert_eq!(ran, 0);
}

#[test]
fn heater_off_then_cools_toward_ambient() {
    let mut session = Session::new(
        substance::water(),
        SimulationState::new(0.5, 20.0, 0.0),
        20.0,
        0.5,
    )
    .expect("session");
    session.run_for(1500.0, 60.0);
    let peak = session.state().temperature_c;
    assert!(peak > 60.0);

    session.run_for(0.0, 3600.0);
    let t = session.state().temperature_c;
    assert!(t < peak && t >= 20.0, "t={t}");
    assert_eq!(session.history().last().map(|r| r.phase), Some(Phase::Cooling));
}

#[test]
fn higher_altitude_boils_sooner() {
    let time_at = |altitude_m: f64| {
        let mut s = Session::new(
            substance::water(),
            SimulationState::new(1.0, 20.0, altitude_m),
            20.0,
            0.1,
        )
        .expect("session");
        s.run_until_boiling(2000.0, 600.0).expect("boiled")
    };
    assert!(time_at(3000.0) < time_at(0.0));
}

#[test]
fn invalid_initial_conditions_are_rejected() {
    let water = substance::water();
    let ok = SimulationState::new(1.0, 20.0, 0.0);
    assert_eq!(
        Session::new(water.clone(), ok, 20.0, 0.0).err(),
        Some(SessionError::InvalidTick(0.0))
    );
    assert!(matches!(
        Session::new(water.clone(), ok.with_residue(2.0), 20.0, 0.1),
        Err(SessionError::InvalidMass { .. })
    ));
    let hot = SimulationState::new(1.0, f64::NAN, 0.0);
    assert!(matches!(
        Session::new(water, hot, 20.0, 0.1),
        Err(SessionError::InvalidTemperature(_))
    ));
}

#[test]
fn climbing_with_hot_water_flashes_to_new_boiling_point() {
    let mut session = Session::new(
        substance::water(),
        SimulationState::new(1.0, 99.0, 0.0),
        20.0,
        0.1,
    )
    .expect("session");
    session.set_altitude(3000.0);
    let bp_high = resolve_boiling_point(3000.0, session.substance())
        .expect("bp")
        .temperature_c;

    let step = *session.step(1.0);
    assert_eq!(step.state.temperature_c, bp_high);
    assert!(step.is_boiling);
    // 과열분 m·c·ΔT 가 잠열로 넘어간다
    let expected_steam = (1000.0 * 4.186 * (99.0 - bp_high) + 0.1) / 2_257_000.0;
    assert_abs_diff_eq!(step.steam_generated_kg, expected_steam, epsilon = 1e-12);
}
