//! 고정 간격 틱으로 상태를 선형으로 이어가는 실행기.
//!
//! 상태는 세션이 단독으로 소유하며 `simulate_time_step`을 통해서만 바뀐다.
//! 틱은 겹치지 않는다. 틱 N의 출력이 틱 N+1의 입력이다.

use tracing::info;

use crate::substance::SubstanceProperties;
use crate::thermo::{simulate_time_step, Phase, SimulationState, TimeStep};

/// 틱 하나의 기록.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickRecord {
    /// 틱 종료 시점의 누적 시간 [s]
    pub time_s: f64,
    pub temperature_c: f64,
    pub fluid_mass_kg: f64,
    pub steam_generated_kg: f64,
    pub phase: Phase,
}

/// 세션 생성 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionError {
    /// 틱 길이는 양의 유한값이어야 함
    InvalidTick(f64),
    /// 질량이 음수이거나 잔류 질량이 전체 질량보다 큼
    InvalidMass { fluid_kg: f64, residue_kg: f64 },
    /// 초기 온도가 유한하지 않음
    InvalidTemperature(f64),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::InvalidTick(v) => write!(f, "틱 길이가 올바르지 않음: {v} s"),
            SessionError::InvalidMass {
                fluid_kg,
                residue_kg,
            } => write!(
                f,
                "질량이 올바르지 않음: 액체 {fluid_kg} kg, 잔류 {residue_kg} kg"
            ),
            SessionError::InvalidTemperature(v) => write!(f, "초기 온도가 올바르지 않음: {v}"),
        }
    }
}

impl std::error::Error for SessionError {}

/// 하나의 시뮬레이션 세션.
#[derive(Debug, Clone)]
pub struct Session {
    substance: SubstanceProperties,
    state: SimulationState,
    ambient_temp_c: f64,
    tick_s: f64,
    ticks: u64,
    total_steam_kg: f64,
    total_energy_j: f64,
    first_boil_time_s: Option<f64>,
    last_step: Option<TimeStep>,
    history: Vec<TickRecord>,
}

impl Session {
    pub fn new(
        substance: SubstanceProperties,
        initial_state: SimulationState,
        ambient_temp_c: f64,
        tick_s: f64,
    ) -> Result<Self, SessionError> {
        if !(tick_s.is_finite() && tick_s > 0.0) {
            return Err(SessionError::InvalidTick(tick_s));
        }
        let fluid_kg = initial_state.fluid_mass_kg;
        let residue_kg = initial_state.residue_mass_kg;
        if !(fluid_kg.is_finite() && residue_kg.is_finite())
            || fluid_kg < 0.0
            || residue_kg < 0.0
            || residue_kg > fluid_kg
        {
            return Err(SessionError::InvalidMass {
                fluid_kg,
                residue_kg,
            });
        }
        if !initial_state.temperature_c.is_finite() {
            return Err(SessionError::InvalidTemperature(initial_state.temperature_c));
        }
        Ok(Self {
            substance,
            state: initial_state,
            ambient_temp_c,
            tick_s,
            ticks: 0,
            total_steam_kg: 0.0,
            total_energy_j: 0.0,
            first_boil_time_s: None,
            last_step: None,
            history: Vec::new(),
        })
    }

    /// 한 틱을 진행하고 그 결과를 돌려준다.
    pub fn step(&mut self, heat_input_watts: f64) -> &TimeStep {
        let was_depleted = self.is_depleted();
        let step = simulate_time_step(
            self.state,
            heat_input_watts,
            self.tick_s,
            Some(&self.substance),
            self.ambient_temp_c,
        );
        self.ticks += 1;
        let time_s = self.elapsed_s();

        if !was_depleted && heat_input_watts > 0.0 {
            self.total_energy_j += heat_input_watts * self.tick_s;
        }
        self.total_steam_kg += step.steam_generated_kg;
        if step.is_boiling && self.first_boil_time_s.is_none() {
            info!(
                substance = %self.substance.name,
                time_s,
                temperature_c = step.state.temperature_c,
                "boiling started"
            );
            self.first_boil_time_s = Some(time_s);
        }
        if step.all_evaporated && !was_depleted {
            info!(
                substance = %self.substance.name,
                time_s,
                residue_kg = step.state.residue_mass_kg,
                "all evaporable fluid is gone"
            );
        }

        self.history.push(TickRecord {
            time_s,
            temperature_c: step.state.temperature_c,
            fluid_mass_kg: step.state.fluid_mass_kg,
            steam_generated_kg: step.steam_generated_kg,
            phase: step.phase,
        });
        self.state = step.state;
        self.last_step.insert(step)
    }

    /// `duration_s` 동안 같은 출력으로 틱을 돌린다. 증발이 끝나면 일찍 멈춘다.
    /// 실행한 틱 수를 반환한다.
    pub fn run_for(&mut self, heat_input_watts: f64, duration_s: f64) -> u64 {
        let target = self.ticks_for(duration_s);
        let mut run = 0;
        while run < target && !self.is_depleted() {
            self.step(heat_input_watts);
            run += 1;
        }
        run
    }

    /// 끓기 시작할 때까지(최대 `max_duration_s`) 가열한다. 끓기 시작한 시각을 반환한다.
    pub fn run_until_boiling(
        &mut self,
        heat_input_watts: f64,
        max_duration_s: f64,
    ) -> Option<f64> {
        let target = self.ticks_for(max_duration_s);
        let mut run = 0;
        while run < target && self.first_boil_time_s.is_none() && !self.is_depleted() {
            self.step(heat_input_watts);
            run += 1;
        }
        self.first_boil_time_s
    }

    fn ticks_for(&self, duration_s: f64) -> u64 {
        if duration_s.is_finite() && duration_s > 0.0 {
            (duration_s / self.tick_s).round() as u64
        } else {
            0
        }
    }

    pub fn is_depleted(&self) -> bool {
        self.state.evaporable_mass_kg() <= 0.0
    }

    pub fn substance(&self) -> &SubstanceProperties {
        &self.substance
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    /// 고도를 바꾼다. 다음 틱부터 새 기압으로 끓는점을 계산한다.
    pub fn set_altitude(&mut self, altitude_m: f64) {
        self.state.altitude_m = altitude_m;
    }

    pub fn last_step(&self) -> Option<&TimeStep> {
        self.last_step.as_ref()
    }

    pub fn elapsed_s(&self) -> f64 {
        self.ticks as f64 * self.tick_s
    }

    pub fn tick_s(&self) -> f64 {
        self.tick_s
    }

    pub fn total_steam_kg(&self) -> f64 {
        self.total_steam_kg
    }

    /// 히터가 실제로 공급한 누적 에너지 [J]
    pub fn total_energy_j(&self) -> f64 {
        self.total_energy_j
    }

    pub fn first_boil_time_s(&self) -> Option<f64> {
        self.first_boil_time_s
    }

    pub fn history(&self) -> &[TickRecord] {
        &self.history
    }
}
