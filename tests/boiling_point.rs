//! 끓는점 결정(Antoine 우선, 선형 근사 대체, 끓는점 오름) 테스트.
use approx::assert_abs_diff_eq;
use boiling_lab::substance::{self, SubstanceProperties};
use boiling_lab::thermo::{
    boiling_point_elevation, ebullioscopic_constant, resolve_boiling_point, BoilingPointMethod,
    SolventConstants,
};

fn without_antoine(mut s: SubstanceProperties) -> SubstanceProperties {
    s.antoine = None;
    s
}

#[test]
fn water_at_sea_level_boils_near_100c() {
    let bp = resolve_boiling_point(0.0, &substance::water()).expect("water bp");
    assert_abs_diff_eq!(bp.temperature_c, 100.0, epsilon = 0.5);
    assert_eq!(bp.method, BoilingPointMethod::Antoine);
    assert_eq!(bp.elevation_c, 0.0);
    assert!(!bp.is_extrapolated);
}

#[test]
fn water_in_denver_boils_near_95c() {
    let bp = resolve_boiling_point(1609.0, &substance::water()).expect("denver bp");
    assert_abs_diff_eq!(bp.temperature_c, 95.0, epsilon = 1.0);
}

#[test]
fn linear_fallback_without_antoine() {
    let water = without_antoine(substance::water());
    let bp = resolve_boiling_point(1000.0, &water).expect("fallback bp");
    assert_eq!(bp.method, BoilingPointMethod::LinearLapse);
    assert_abs_diff_eq!(bp.base_boiling_point_c, 100.0 - 1000.0 * 0.0033, epsilon = 1e-9);
    assert!(!bp.is_extrapolated);
    assert_eq!(bp.verified_range.min, None);
    assert_eq!(bp.verified_range.max, None);
}

#[test]
fn default_lapse_rate_when_substance_has_none() {
    let mut water = without_antoine(substance::water());
    water.altitude_lapse_rate = None;
    let bp = resolve_boiling_point(300.0, &water).expect("fallback bp");
    assert_abs_diff_eq!(bp.temperature_c, 100.0 - 300.0 * 0.0033, epsilon = 1e-9);
}

#[test]
fn antoine_takes_priority_over_linear_model() {
    // 비현실적인 감률을 넣어도 Antoine 결과가 나와야 한다
    let mut water = substance::water();
    water.altitude_lapse_rate = Some(1.0);
    let bp = resolve_boiling_point(1609.0, &water).expect("bp");
    assert_eq!(bp.method, BoilingPointMethod::Antoine);
    assert!(bp.temperature_c > 90.0);
}

#[test]
fn failed_antoine_falls_back_to_linear() {
    let mut water = substance::water();
    if let Some(c) = water.antoine.as_mut() {
        c.b = 0.0;
    }
    let bp = resolve_boiling_point(0.0, &water).expect("bp");
    assert_eq!(bp.method, BoilingPointMethod::LinearLapse);
    assert_abs_diff_eq!(bp.temperature_c, 100.0, epsilon = 1e-12);
}

#[test]
fn missing_sea_level_boiling_point_is_invalid_data() {
    let mut water = substance::water();
    water.boiling_point_sea_level = f64::NAN;
    assert!(resolve_boiling_point(0.0, &water).is_none());
}

#[test]
fn saltwater_elevation_is_dynamic() {
    let salt = substance::saltwater();
    let sea = resolve_boiling_point(0.0, &salt).expect("sea level");
    let kb = ebullioscopic_constant(sea.base_boiling_point_c, &SolventConstants::WATER);
    assert_abs_diff_eq!(kb, 0.513, epsilon = 0.002);
    assert_abs_diff_eq!(sea.elevation_c, 2.0 * kb * 0.62, epsilon = 1e-12);
    assert_abs_diff_eq!(sea.temperature_c, sea.base_boiling_point_c + sea.elevation_c);

    // 고지대에서는 Tb가 낮아 Kb도 작아진다
    let high = resolve_boiling_point(4000.0, &salt).expect("high altitude");
    assert!(high.elevation_c < sea.elevation_c);
}

#[test]
fn static_elevation_used_without_solute_data() {
    let mut salt = substance::saltwater();
    salt.molality = None;
    assert_eq!(boiling_point_elevation(100.0, &salt), 0.64);
    salt.boiling_point_elevation = None;
    assert_eq!(boiling_point_elevation(100.0, &salt), 0.0);
}

#[test]
fn extrapolation_metadata_is_passed_through() {
    // 에탄올 검증 상한은 80 °C. 해수면 아래 깊은 곳에서는 넘는다.
    let bp = resolve_boiling_point(-3000.0, &substance::ethanol()).expect("bp");
    assert!(bp.temperature_c > 80.0);
    assert!(bp.is_extrapolated);
    assert_eq!(bp.verified_range.max, Some(80.0));
}
