//! 게이트 대상 메뉴 컨트롤 포트.

use crate::models::screen::VisualTreatment;

/// 활성/비활성 전환이 가능한 메뉴 항목
pub trait MenuControl: Send + Sync {
    /// 클릭 가능 여부 설정
    fn set_enabled(&self, enabled: bool);

    /// 텍스트 스타일/아이콘 틴트 적용
    fn set_visual_treatment(&self, treatment: VisualTreatment);
}
