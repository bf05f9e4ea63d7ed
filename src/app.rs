use crate::config::{Config, ConfigError};
use crate::conversion::{self, ConversionError};
use crate::session::{Session, SessionError};
use crate::substance::{self, SubstanceProperties};
use crate::thermo::{self, SimulationState};
use crate::ui_cli::{self, Command, SimulateArgs};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(ConfigError),
    /// 단위 변환 오류
    Conversion(ConversionError),
    /// 세션 초기 조건 오류
    Session(SessionError),
    /// 카탈로그에 없는 물질
    UnknownSubstance(String),
    /// 해수면 끓는점이 없어 끓는점을 계산할 수 없는 물질
    InvalidSubstanceData(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Conversion(e) => write!(f, "단위 변환 오류: {e}"),
            AppError::Session(e) => write!(f, "시뮬레이션 조건 오류: {e}"),
            AppError::UnknownSubstance(name) => write!(f, "알 수 없는 물질: {name}"),
            AppError::InvalidSubstanceData(name) => {
                write!(f, "물질 데이터로 끓는점을 계산할 수 없음: {name}")
            }
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<ConversionError> for AppError {
    fn from(value: ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

impl From<SessionError> for AppError {
    fn from(value: SessionError) -> Self {
        AppError::Session(value)
    }
}

fn lookup(name: &str, config: &Config) -> Result<SubstanceProperties, AppError> {
    substance::find_substance(name, &config.substances)
        .ok_or_else(|| AppError::UnknownSubstance(name.to_string()))
}

/// 하위 명령을 실행한다.
pub fn run(command: Command, config: &Config) -> Result<(), AppError> {
    match command {
        Command::Boil {
            substance,
            altitude,
            if97,
        } => handle_boil(&substance, altitude, if97, config),
        Command::Simulate(args) => handle_simulate(args, config),
        Command::Convert {
            quantity,
            value,
            from,
            to,
        } => {
            let kind = conversion::parse_quantity(&quantity)?;
            let result = conversion::convert(kind, value, &from, &to)?;
            println!("변환 결과: {result} {to}");
            Ok(())
        }
        Command::Substances => {
            let mut all = substance::builtin_substances();
            all.extend(config.substances.iter().cloned());
            ui_cli::print_substances(&all, &config.display);
            Ok(())
        }
    }
}

fn handle_boil(name: &str, altitude_m: f64, if97: bool, config: &Config) -> Result<(), AppError> {
    let substance = lookup(name, config)?;
    let result = thermo::resolve_boiling_point(altitude_m, &substance)
        .ok_or_else(|| AppError::InvalidSubstanceData(substance.name.clone()))?;
    ui_cli::print_boiling_point(&substance, altitude_m, &result, &config.display);
    if if97 {
        let reference = thermo::if97::water_saturation_temp_c(result.pressure_pa);
        ui_cli::print_if97_comparison(&result, reference, &config.display);
    }
    Ok(())
}

fn handle_simulate(args: SimulateArgs, config: &Config) -> Result<(), AppError> {
    let substance = lookup(&args.substance, config)?;
    if thermo::resolve_boiling_point(args.altitude, &substance).is_none() {
        return Err(AppError::InvalidSubstanceData(substance.name));
    }

    let initial = SimulationState::new(
        args.mass,
        args.temperature.unwrap_or(config.ambient_temp_c),
        args.altitude,
    )
    .with_residue(args.residue);
    let mut session = Session::new(substance, initial, config.ambient_temp_c, config.tick_seconds)?;

    let power_w = args.power.unwrap_or(config.heater_watts);
    let total_ticks = (args.duration / session.tick_s()).round().max(0.0) as u64;
    let report_ticks = ((args.report_every / session.tick_s()).round() as u64).max(1);

    ui_cli::print_tick_header(&config.display);
    for tick in 1..=total_ticks {
        let heater_on = args
            .heater_off_at
            .map_or(true, |off_at| session.elapsed_s() < off_at);
        let watts = if heater_on { power_w } else { 0.0 };
        let step = *session.step(watts);
        if tick % report_ticks == 0 || step.all_evaporated {
            ui_cli::print_tick(session.elapsed_s(), &step, &config.display);
        }
        if step.all_evaporated {
            break;
        }
    }
    ui_cli::print_summary(&session, &config.display);
    Ok(())
}
