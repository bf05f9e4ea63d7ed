//! IAPWS-IF97 포화선과 물 Antoine 결과 비교.
use boiling_lab::substance;
use boiling_lab::thermo::atmosphere::pressure_at_altitude;
use boiling_lab::thermo::if97::{water_saturation_pressure_pa, water_saturation_temp_c};
use boiling_lab::thermo::resolve_boiling_point;

fn assert_close(label: &str, actual: f64, expected: f64, abs_tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= abs_tol,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {abs_tol})"
    );
}

#[test]
fn normal_boiling_point_reference() {
    // IF97: 0.101325 MPa => 99.974 °C
    let t = water_saturation_temp_c(101_325.0).expect("tsat");
    assert_close("tsat", t, 99.974, 0.01);
    let p = water_saturation_pressure_pa(100.0).expect("psat");
    assert_close("psat", p, 101_418.0, 50.0);
}

#[test]
fn antoine_tracks_if97_up_to_5000m() {
    let water = substance::water();
    let mut h = 0.0;
    while h <= 5000.0 {
        let bp = resolve_boiling_point(h, &water).expect("bp");
        let reference = water_saturation_temp_c(pressure_at_altitude(h)).expect("if97");
        assert_close(&format!("{h} m"), bp.temperature_c, reference, 0.5);
        h += 500.0;
    }
}

#[test]
fn outside_saturation_line_is_none() {
    assert!(water_saturation_temp_c(100.0).is_none());
    assert!(water_saturation_temp_c(30.0e6).is_none());
    assert!(water_saturation_pressure_pa(400.0).is_none());
}
