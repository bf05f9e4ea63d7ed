//! 가열·끓음·냉각 시뮬레이션 코어를 라이브러리로 분리하여 CLI 뿐 아니라 다른 프런트엔드도 쉽게 붙인다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod quantity;
pub mod session;
pub mod substance;
pub mod thermo;
pub mod ui_cli;
pub mod units;
