//! # carstats-settings
//!
//! 설정 화면 코어.
//! 차량 속도에 따라 메뉴 이동을 막는 주의 분산 게이트,
//! 화면 전면 표시 구간에만 살아있는 속도 구독,
//! 스위치/메뉴/종료 다이얼로그를 연결하는 설정 컨트롤러를 제공한다.

pub mod controller;
pub mod gate;
pub mod lifecycle;
pub mod subscription;

#[cfg(test)]
pub(crate) mod testing;

pub use controller::{SettingsController, SettingsView};
pub use gate::{ControlGroup, DistractionGate, GateState};
pub use lifecycle::{LifecycleScope, ScreenLifecycle, ScreenState};
pub use subscription::{run_while_started, spawn_gate, GateHandle};
