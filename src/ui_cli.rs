use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::DisplayUnits;
use crate::session::Session;
use crate::substance::SubstanceProperties;
use crate::thermo::{BoilingPointMethod, BoilingPointResult, Phase, TimeStep};
use crate::units::pressure::from_pascal;
use crate::units::{convert_energy, convert_mass, format_temperature, EnergyUnit, MassUnit};

/// 명령줄 인자.
#[derive(Debug, Parser)]
#[command(
    name = "boiling_lab_cli",
    version,
    about = "고도와 조성에 따른 가열·끓음·냉각 시뮬레이터"
)]
pub struct Cli {
    /// 설정 파일 경로. 없으면 기본값으로 생성한다.
    #[arg(long, default_value = "config.toml")]
    pub config: PathBuf,
    #[command(subcommand)]
    pub command: Command,
}

/// 하위 명령.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// 고도에서의 끓는점을 계산한다
    Boil {
        #[arg(short, long, default_value = "water")]
        substance: String,
        /// 해발 고도 [m]
        #[arg(short, long, default_value_t = 0.0, allow_hyphen_values = true)]
        altitude: f64,
        /// IAPWS-IF97 포화온도와 비교한다(물 계열만 의미가 있음)
        #[arg(long)]
        if97: bool,
    },
    /// 틱 단위 가열/냉각 시뮬레이션을 실행한다
    Simulate(SimulateArgs),
    /// 단위를 변환한다 (예: convert temperature 100 C F)
    Convert {
        quantity: String,
        #[arg(allow_hyphen_values = true)]
        value: f64,
        from: String,
        to: String,
    },
    /// 사용할 수 있는 물질 목록을 보여준다
    Substances,
}

#[derive(Debug, Args)]
pub struct SimulateArgs {
    #[arg(short, long, default_value = "water")]
    pub substance: String,
    /// 초기 액체 질량 [kg]
    #[arg(short, long, default_value_t = 1.0)]
    pub mass: f64,
    /// 증발하지 않는 잔류 질량 [kg]
    #[arg(long, default_value_t = 0.0)]
    pub residue: f64,
    /// 초기 온도 [°C]. 생략하면 주변 온도
    #[arg(short, long, allow_hyphen_values = true)]
    pub temperature: Option<f64>,
    /// 해발 고도 [m]
    #[arg(short, long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub altitude: f64,
    /// 히터 출력 [W]. 생략하면 설정값
    #[arg(short, long)]
    pub power: Option<f64>,
    /// 전체 시뮬레이션 시간 [s]
    #[arg(short, long, default_value_t = 600.0)]
    pub duration: f64,
    /// 이 시각 [s] 이후에는 히터를 끄고 냉각한다
    #[arg(long)]
    pub heater_off_at: Option<f64>,
    /// 출력 간격 [s]
    #[arg(long, default_value_t = 10.0)]
    pub report_every: f64,
}

fn method_label(method: BoilingPointMethod) -> &'static str {
    match method {
        BoilingPointMethod::Antoine => "Antoine",
        BoilingPointMethod::LinearLapse => "선형 근사",
    }
}

fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Heating => "가열",
        Phase::Cooling => "냉각",
        Phase::Idle => "대기",
        Phase::Boiling => "끓음",
        Phase::Depleted => "증발 완료",
    }
}

/// 끓는점 계산 결과를 출력한다.
pub fn print_boiling_point(
    substance: &SubstanceProperties,
    altitude_m: f64,
    result: &BoilingPointResult,
    units: &DisplayUnits,
) {
    println!("물질: {}", substance.name);
    println!("고도: {altitude_m:.0} m");
    println!(
        "대기압: {:.2} {}",
        from_pascal(result.pressure_pa, units.pressure),
        units.pressure.symbol()
    );
    println!(
        "끓는점: {} ({})",
        format_temperature(result.temperature_c, units.temperature, 2),
        method_label(result.method)
    );
    if result.elevation_c != 0.0 {
        println!(
            "  기준 끓는점 {} + 끓는점 오름 {:.3} K",
            format_temperature(result.base_boiling_point_c, units.temperature, 2),
            result.elevation_c
        );
    }
    if result.is_extrapolated {
        let range = result.verified_range;
        let bound = |v: Option<f64>| {
            v.map(|t| format_temperature(t, units.temperature, 1))
                .unwrap_or_else(|| "-".into())
        };
        println!(
            "경고: 검증 범위({} ~ {}) 밖으로 외삽한 값입니다.",
            bound(range.min),
            bound(range.max)
        );
    }
}

/// IF97 기준값과의 차이를 출력한다.
pub fn print_if97_comparison(
    result: &BoilingPointResult,
    if97_temp_c: Option<f64>,
    units: &DisplayUnits,
) {
    match if97_temp_c {
        Some(t) => println!(
            "IF97 포화온도: {} (차이 {:+.3} K)",
            format_temperature(t, units.temperature, 2),
            result.base_boiling_point_c - t
        ),
        None => println!("IF97 포화온도: 유효 범위 밖"),
    }
}

/// 시뮬레이션 표의 머리말.
pub fn print_tick_header(units: &DisplayUnits) {
    println!(
        "{:>8}  {:>12}  {:>12}  {:>10}",
        "시간[s]",
        format!("온도[{}]", units.temperature.symbol()),
        format!("질량[{}]", units.mass.symbol()),
        "상태"
    );
}

/// 시뮬레이션 한 줄.
pub fn print_tick(time_s: f64, step: &TimeStep, units: &DisplayUnits) {
    let temp = format_temperature(step.state.temperature_c, units.temperature, 2);
    let mass = convert_mass(step.state.fluid_mass_kg, MassUnit::Kilogram, units.mass);
    println!(
        "{:>8.1}  {:>12}  {:>12.2}  {:>10}",
        time_s,
        temp,
        mass,
        phase_label(step.phase)
    );
}

/// 세션 요약.
pub fn print_summary(session: &Session, units: &DisplayUnits) {
    let state = session.state();
    println!("\n-- 요약 ({}) --", session.substance().name);
    println!("경과 시간: {:.1} s", session.elapsed_s());
    println!(
        "최종 온도: {}",
        format_temperature(state.temperature_c, units.temperature, 2)
    );
    println!(
        "남은 질량: {:.3} {} (잔류 {:.3} {})",
        convert_mass(state.fluid_mass_kg, MassUnit::Kilogram, units.mass),
        units.mass.symbol(),
        convert_mass(state.residue_mass_kg, MassUnit::Kilogram, units.mass),
        units.mass.symbol()
    );
    println!(
        "증기 발생량: {:.3} {}",
        convert_mass(session.total_steam_kg(), MassUnit::Kilogram, units.mass),
        units.mass.symbol()
    );
    println!(
        "공급 에너지: {:.1} {}",
        convert_energy(session.total_energy_j(), EnergyUnit::Joule, units.energy),
        units.energy.symbol()
    );
    match session.first_boil_time_s() {
        Some(t) => println!("끓기 시작: {t:.1} s"),
        None => println!("끓기 시작: 없음"),
    }
    if session.last_step().is_some_and(|s| s.is_extrapolated) {
        println!("경고: 끓는점이 Antoine 검증 범위 밖에서 계산되었습니다.");
    }
}

/// 물질 목록을 출력한다.
pub fn print_substances(substances: &[SubstanceProperties], units: &DisplayUnits) {
    println!(
        "{:<14} {:>12} {:>10} {:>8} {:>8}",
        "이름", "끓는점", "비열", "Antoine", "끓음"
    );
    for s in substances {
        println!(
            "{:<14} {:>12} {:>10.3} {:>8} {:>8}",
            s.name,
            format_temperature(s.boiling_point_sea_level, units.temperature, 1),
            s.specific_heat,
            if s.antoine.is_some() { "O" } else { "-" },
            if s.can_boil { "O" } else { "-" }
        );
    }
}
