//! # carstats-storage
//!
//! `PreferenceStore` 포트 어댑터.
//! 앱 실행용 JSON 파일 저장소와 테스트/임베딩용 인메모리 저장소를 제공한다.

pub mod json_store;
pub mod memory_store;

pub use json_store::JsonPreferenceStore;
pub use memory_store::InMemoryPreferenceStore;
