//! 화면/컨트롤 식별자.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 설정 화면에서 이동 가능한 하위 화면
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenId {
    /// 메인 뷰 설정
    MainView,
    /// 차량 설정
    Vehicle,
    /// API 설정
    Apis,
    /// 앱 정보
    About,
    /// 앱 로그
    Log,
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScreenId::MainView => "main_view",
            ScreenId::Vehicle => "vehicle",
            ScreenId::Apis => "apis",
            ScreenId::About => "about",
            ScreenId::Log => "log",
        };
        f.write_str(name)
    }
}

/// 주의 분산 게이트 대상 메뉴 항목 (표시 순서)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuEntry {
    MainView,
    Vehicle,
    Apis,
    About,
}

impl MenuEntry {
    /// 게이트 대상 전체 (표시 순서)
    pub const ALL: [MenuEntry; 4] = [
        MenuEntry::MainView,
        MenuEntry::Vehicle,
        MenuEntry::Apis,
        MenuEntry::About,
    ];

    /// 클릭 시 열리는 화면
    pub fn target(&self) -> ScreenId {
        match self {
            MenuEntry::MainView => ScreenId::MainView,
            MenuEntry::Vehicle => ScreenId::Vehicle,
            MenuEntry::Apis => ScreenId::Apis,
            MenuEntry::About => ScreenId::About,
        }
    }
}

/// 설정 화면 토글 스위치
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingSwitch {
    Notifications,
    ConsumptionUnit,
    UseLocation,
    Autostart,
    /// 체크 = 마일
    DistanceUnit,
    AltLayout,
}

/// 메뉴 항목의 시각 처리 (텍스트 스타일 + 아이콘 틴트)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualTreatment {
    /// 기본 행 스타일, 흰색 틴트
    Enabled,
    /// 비활성 행 스타일, 비활성 틴트
    Disabled,
}

impl VisualTreatment {
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled {
            VisualTreatment::Enabled
        } else {
            VisualTreatment::Disabled
        }
    }

    /// 아이콘 틴트 색상 (#RRGGBB)
    pub fn tint(&self) -> &'static str {
        match self {
            VisualTreatment::Enabled => "#FFFFFF",
            VisualTreatment::Disabled => "#5A5A5A",
        }
    }
}
