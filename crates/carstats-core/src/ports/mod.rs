//! 포트 인터페이스 (trait).
//!
//! Hexagonal Architecture의 포트 레이어.
//! 설정 화면 코어가 소비하는 외부 협력자를 정의하며,
//! 어댑터는 `carstats-storage`와 `carstats-app`에 있고 `Arc<dyn T>`로 와이어링한다.
//!
//! UI 이벤트 스레드에서 호출되는 포트라서 모두 동기 trait이다.

pub mod app_exit;
pub mod control;
pub mod dialog;
pub mod navigator;
pub mod preference_store;
pub mod speed_feed;
pub mod unit_listener;
