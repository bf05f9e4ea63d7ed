//! 가열·끓음·냉각 시뮬레이션 코어.
//!
//! 모든 함수는 입력 값만으로 결과를 만드는 순수 함수이며 내부 상태를 갖지 않는다.

pub mod antoine;
pub mod atmosphere;
pub mod boiling_point;
pub mod elevation;
pub mod heat_transfer;
pub mod if97;
pub mod time_step;

pub use antoine::{solve_antoine, vapor_pressure_pa, AntoineSolution, VerifiedRange};
pub use atmosphere::pressure_at_altitude;
pub use boiling_point::{resolve_boiling_point, BoilingPointMethod, BoilingPointResult};
pub use elevation::{boiling_point_elevation, ebullioscopic_constant, SolventConstants};
pub use heat_transfer::{apply_heat_energy, HeatResult};
pub use time_step::{simulate_time_step, Phase, SimulationState, TimeStep};
