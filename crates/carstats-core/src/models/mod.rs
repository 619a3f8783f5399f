//! 도메인 모델.
//!
//! 설정값, 차량 속도 샘플, 화면/컨트롤 식별자.

pub mod preferences;
pub mod screen;
pub mod vehicle;
