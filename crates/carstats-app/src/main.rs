//! # carstats-app
//!
//! Car Stats Viewer 설정 화면 실행기.
//! DI 컨테이너 역할, 화면 라이프사이클 구동, 속도 피드 시뮬레이션.

mod console;
mod lifecycle;
mod speed_bus;

use anyhow::{Context, Result};
use carstats_core::config::AppConfig;
use carstats_core::config_manager::ConfigManager;
use carstats_core::models::screen::{MenuEntry, SettingSwitch};
use carstats_core::ports::control::MenuControl;
use carstats_settings::{spawn_gate, ControlGroup, DistractionGate, ScreenLifecycle, SettingsController};
use carstats_storage::JsonPreferenceStore;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::console::{AutoAnswerDialog, ConsoleMenuControl, ConsoleNavigator, ConsoleUnitListener};
use crate::lifecycle::LifecycleManager;
use crate::speed_bus::SpeedBus;

/// Car Stats Viewer 설정 화면
///
/// 차량 속도에 따라 메뉴 이동을 제한하는 설정 화면을 콘솔에서 구동한다.
#[derive(Parser, Debug)]
#[command(name = "carstats")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 설정 파일 경로 (기본: 플랫폼 설정 디렉토리)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// 설정값 파일 경로 (설정 파일 값보다 우선)
    #[arg(long, short = 'p')]
    preferences: Option<PathBuf>,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, short = 'l', default_value = "info")]
    log_level: String,

    /// 에뮬레이터 모드 (거리 단위 스위치 노출)
    #[arg(long)]
    emulator: bool,

    /// 재생할 속도 목록 (m/s, 쉼표 구분)
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    speeds: Option<Vec<f32>>,

    /// 샘플 간격 (밀리초)
    #[arg(long)]
    interval_ms: Option<u64>,

    /// 재생 후 모든 메뉴 항목 클릭 시도
    #[arg(long)]
    navigate: bool,

    /// 재생 후 종료 버튼 → 확인
    #[arg(long)]
    quit: bool,

    /// CLI로 바꾼 설정을 설정 파일에 저장
    #[arg(long)]
    save: bool,
}

/// CLI 인자를 설정에 덮어쓴다
fn apply_overrides(args: &Args, config: &mut AppConfig) {
    if args.emulator {
        config.screen.emulator_mode = true;
    }
    if let Some(path) = &args.preferences {
        config.preferences.path = Some(path.clone());
    }
    if let Some(speeds) = &args.speeds {
        config.simulation.speeds = speeds.clone();
    }
    if let Some(ms) = args.interval_ms {
        config.simulation.sample_interval_ms = ms;
    }
}

/// 재생 전 구독이 붙을 때까지 대기
async fn wait_for_subscriber(bus: &SpeedBus) {
    let poll = async {
        while bus.subscriber_count() == 0 {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    };
    if tokio::time::timeout(Duration::from_secs(1), poll).await.is_err() {
        warn!("속도 구독 대기 시간 초과, 첫 샘플이 유실될 수 있음");
    }
}

/// 재생한 샘플이 모두 게이트에 적용될 때까지 대기
///
/// 유실(Lagged)된 샘플은 세지 않으므로 시간 제한을 둔다.
async fn wait_for_processed(processed: &mut watch::Receiver<u64>, target: u64) {
    let applied = tokio::time::timeout(
        Duration::from_secs(1),
        processed.wait_for(|n| *n >= target),
    )
    .await;
    if !matches!(applied, Ok(Ok(_))) {
        warn!("속도 샘플 적용 대기 시간 초과 (목표 {target}개)");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_filter = format!(
        "carstats={},carstats_app={},carstats_core={},carstats_storage={},carstats_settings={}",
        args.log_level, args.log_level, args.log_level, args.log_level, args.log_level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter)),
        )
        .init();

    // 설정 로드 (CLI 인자는 --save일 때만 파일에 저장)
    let config_manager = match &args.config {
        Some(path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    }
    .context("설정 로드 실패")?;
    let config = if args.save {
        config_manager
            .update_with(|c| apply_overrides(&args, c))
            .context("설정 저장 실패")?
    } else {
        let mut config = config_manager.get();
        apply_overrides(&args, &mut config);
        config
    };
    info!("설정 파일: {}", config_manager.config_path().display());

    let prefs_path = ConfigManager::preferences_path(&config)?;
    let store = Arc::new(JsonPreferenceStore::open(&prefs_path).context("설정값 로드 실패")?);
    info!("설정값 파일: {}", store.path().display());

    let lifecycle = Arc::new(LifecycleManager::new());
    let bus = Arc::new(SpeedBus::new(config.simulation.feed_capacity));

    let group = ControlGroup::from_fn(|entry| -> Arc<dyn MenuControl> {
        Arc::new(ConsoleMenuControl::new(entry))
    });
    let gate = Arc::new(DistractionGate::new(group));
    let controller = SettingsController::new(
        store.clone(),
        Arc::new(ConsoleNavigator),
        Arc::new(AutoAnswerDialog::new(true)),
        lifecycle.clone(),
        gate.clone(),
        config.screen.clone(),
    )
    .with_unit_listener(Arc::new(ConsoleUnitListener));

    let view = controller.view();
    info!("{}", view.version_text);
    for switch in [
        SettingSwitch::Notifications,
        SettingSwitch::ConsumptionUnit,
        SettingSwitch::UseLocation,
        SettingSwitch::Autostart,
        SettingSwitch::DistanceUnit,
        SettingSwitch::AltLayout,
    ] {
        if switch == SettingSwitch::DistanceUnit && !view.distance_unit_switch_visible {
            continue;
        }
        info!("스위치 {switch:?}: {}", view.is_checked(switch));
    }

    // 화면 전면 진입 → 속도 구독
    let screen = ScreenLifecycle::new();
    let gate_handle = spawn_gate(gate.clone(), bus.clone(), store.clone(), screen.scope());
    screen.start();

    let signal_lifecycle = lifecycle.clone();
    tokio::spawn(async move { signal_lifecycle.wait_for_signal().await });

    wait_for_subscriber(&bus).await;
    let mut processed = gate.processed();
    let target = *processed.borrow_and_update() + config.simulation.speeds.len() as u64;
    let completed = bus
        .replay(
            &config.simulation.speeds,
            config.sample_interval(),
            lifecycle.subscribe(),
        )
        .await;
    if completed {
        wait_for_processed(&mut processed, target).await;
    }
    info!("게이트 상태: {:?}", gate.state());

    if completed {
        if args.navigate {
            for entry in MenuEntry::ALL {
                controller.on_entry_clicked(entry);
            }
        }
        if args.quit {
            controller.on_kill_clicked();
        } else {
            info!("Ctrl+C로 종료");
        }
    }

    let mut shutdown = lifecycle.subscribe();
    let _ = shutdown.wait_for(|code| code.is_some()).await;

    screen.stop();
    screen.destroy();
    gate_handle.finished().await;

    let code = lifecycle.exit_code().unwrap_or(0);
    info!("종료 (code={code})");
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
