//! 틱 단위 상태 전이.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::antoine::VerifiedRange;
use super::boiling_point::{resolve_boiling_point, BoilingPointResult};
use super::heat_transfer::apply_heat_energy;
use crate::substance::SubstanceProperties;

/// 한 틱의 입력이자 출력이 되는 물리 상태. 호출자가 소유하고 틱마다 새 값으로 교체한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    /// 액체 질량 [kg]
    pub fluid_mass_kg: f64,
    /// 증발하지 않는 잔류 질량 [kg] (녹아 있던 고형분 등)
    pub residue_mass_kg: f64,
    pub temperature_c: f64,
    /// 해발 고도 [m]
    pub altitude_m: f64,
}

impl SimulationState {
    pub fn new(fluid_mass_kg: f64, temperature_c: f64, altitude_m: f64) -> Self {
        Self {
            fluid_mass_kg,
            residue_mass_kg: 0.0,
            temperature_c,
            altitude_m,
        }
    }

    pub fn with_residue(mut self, residue_mass_kg: f64) -> Self {
        self.residue_mass_kg = residue_mass_kg;
        self
    }

    /// 증발 가능한 질량 [kg]. 음수가 되지 않는다.
    pub fn evaporable_mass_kg(&self) -> f64 {
        (self.fluid_mass_kg - self.residue_mass_kg).max(0.0)
    }
}

/// 틱 동안의 상태 구분.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Heating,
    Cooling,
    Idle,
    Boiling,
    /// 증발 가능한 질량이 모두 사라짐. 상태를 다시 만들기 전까지 유지된다.
    Depleted,
}

/// `simulate_time_step`의 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeStep {
    pub state: SimulationState,
    pub phase: Phase,
    /// 이번 틱에 계산한 끓는점. 물질 데이터가 불충분하면 `None`.
    pub boiling_point: Option<BoilingPointResult>,
    pub steam_generated_kg: f64,
    pub energy_to_vaporization_j: f64,
    pub is_boiling: bool,
    pub all_evaporated: bool,
    pub is_extrapolated: bool,
    pub verified_range: VerifiedRange,
}

impl TimeStep {
    fn unchanged(state: SimulationState, all_evaporated: bool) -> Self {
        Self {
            state,
            phase: if all_evaporated {
                Phase::Depleted
            } else {
                Phase::Idle
            },
            boiling_point: None,
            steam_generated_kg: 0.0,
            energy_to_vaporization_j: 0.0,
            is_boiling: false,
            all_evaporated,
            is_extrapolated: false,
            verified_range: VerifiedRange::default(),
        }
    }
}

/// 한 틱을 진행한다.
///
/// `heat_input_watts > 0`이면 가열, 그 외에는 주변 온도보다 뜨거울 때만 뉴턴 냉각을 적용한다.
/// 한 틱 안에서 가열과 냉각은 동시에 일어나지 않는다.
/// 질량은 잔류 질량 아래로 내려가지 않으며, 냉각은 주변 온도 아래로 넘어가지 않는다.
/// `delta_time_s`가 음수이거나 유한하지 않으면 0으로 본다.
pub fn simulate_time_step(
    state: SimulationState,
    heat_input_watts: f64,
    delta_time_s: f64,
    substance: Option<&SubstanceProperties>,
    ambient_temp_c: f64,
) -> TimeStep {
    let evaporable_kg = state.evaporable_mass_kg();
    if state.fluid_mass_kg <= 0.0 || evaporable_kg <= 0.0 {
        return TimeStep::unchanged(state, evaporable_kg <= 0.0);
    }
    let Some(substance) = substance else {
        return TimeStep::unchanged(state, false);
    };

    let dt = if delta_time_s.is_finite() {
        delta_time_s.max(0.0)
    } else {
        0.0
    };
    let heat_input_watts = if heat_input_watts.is_finite() {
        heat_input_watts
    } else {
        0.0
    };

    let boiling_point = resolve_boiling_point(state.altitude_m, substance);
    let bp_c = boiling_point.map(|bp| bp.temperature_c);
    let can_boil = substance.can_boil && bp_c.is_some_and(f64::is_finite);

    let mut temperature_c = state.temperature_c;
    let mut engine_steam_kg = 0.0;
    let mut energy_to_vaporization_j = 0.0;
    let mut cooled = false;

    if heat_input_watts > 0.0 {
        let energy_j = heat_input_watts * dt;
        // 끓을 수 없는 물질은 끓는점에 묶지 않고 현열로만 데운다
        let engine_bp_c = bp_c.filter(|_| can_boil);
        let result = apply_heat_energy(
            state.fluid_mass_kg,
            temperature_c,
            energy_j,
            engine_bp_c,
            substance,
        );
        temperature_c = result.new_temp_c;
        engine_steam_kg = result.steam_generated_kg;
        energy_to_vaporization_j = result.energy_to_vaporization_j;
    } else if temperature_c > ambient_temp_c {
        let delta_c = substance.cooling_coefficient * (temperature_c - ambient_temp_c) * dt;
        temperature_c = (temperature_c - delta_c).max(ambient_temp_c);
        cooled = true;
    }

    let steam_generated_kg = if can_boil {
        engine_steam_kg.min(evaporable_kg)
    } else {
        0.0
    };
    // 남은 증발분을 다 쓰면 뺄셈 오차 없이 잔류 질량으로 맞춘다
    let next_fluid_kg = if steam_generated_kg >= evaporable_kg {
        state.residue_mass_kg
    } else {
        (state.fluid_mass_kg - steam_generated_kg).max(state.residue_mass_kg)
    };
    let next_state = SimulationState {
        fluid_mass_kg: next_fluid_kg,
        temperature_c,
        ..state
    };

    let is_boiling =
        can_boil && bp_c.is_some_and(|bp| temperature_c >= bp) && steam_generated_kg > 0.0;
    let all_evaporated = next_state.evaporable_mass_kg() <= 0.0;
    let phase = if all_evaporated {
        Phase::Depleted
    } else if is_boiling {
        Phase::Boiling
    } else if heat_input_watts > 0.0 {
        Phase::Heating
    } else if cooled {
        Phase::Cooling
    } else {
        Phase::Idle
    };

    trace!(
        substance = %substance.name,
        temperature_c,
        fluid_mass_kg = next_state.fluid_mass_kg,
        steam_generated_kg,
        ?phase,
        "time step"
    );

    TimeStep {
        state: next_state,
        phase,
        boiling_point,
        steam_generated_kg,
        energy_to_vaporization_j,
        is_boiling,
        all_evaporated,
        is_extrapolated: boiling_point.is_some_and(|bp| bp.is_extrapolated),
        verified_range: boiling_point
            .map(|bp| bp.verified_range)
            .unwrap_or_default(),
    }
}
