use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use storage::repository::{InMemoryRepository, PreferenceRepository, StorageError};
use study_core::model::{SessionPlan, SessionRun, Subject, TaskKind, ThemePreference};

use super::test_harness::{
    ViewKind, render_focus, setup_view_harness, setup_view_harness_with_preferences,
    setup_view_harness_with_running_timer,
};
use crate::vm::FocusVm;

struct UnavailablePreferences;

#[async_trait::async_trait]
impl PreferenceRepository for UnavailablePreferences {
    async fn get_preference(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Connection("offline".into()))
    }

    async fn set_preference(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("offline".into()))
    }
}

fn plan(sessions: u32) -> SessionPlan {
    SessionPlan::new(
        NaiveDate::from_ymd_opt(2026, 10, 15).unwrap(),
        1,
        sessions,
        TaskKind::Listen,
        Subject::Dsa,
    )
    .unwrap()
}

fn started_run(sessions: u32) -> SessionRun {
    let mut run = SessionRun::idle();
    run.start(plan(sessions));
    run
}

#[tokio::test(flavor = "current_thread")]
async fn shell_smoke_renders_home_and_navigation() {
    let mut harness = setup_view_harness(ViewKind::Shell).await;
    harness.rebuild();
    let html = harness.render();

    for expected in [
        "Good Morning",
        "Thursday, Oct 15, 2026",
        "Home",
        "Study",
        "Light",
        "Dark",
        "System",
        "theme-system",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn shell_smoke_uses_stored_theme() {
    let repo = InMemoryRepository::new();
    repo.set_preference("theme", "dark").await.unwrap();
    let mut harness = setup_view_harness_with_preferences(ViewKind::Shell, Arc::new(repo)).await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("theme-dark"), "missing dark theme in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn shell_smoke_follows_theme_changes() {
    let mut harness = setup_view_harness(ViewKind::Shell).await;
    harness.rebuild();

    harness
        .theme
        .set_preference(ThemePreference::Light)
        .await
        .expect("persist theme");
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("theme-light"), "missing light theme in {html}");
    assert!(!html.contains("theme-system"), "stale theme class in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn shell_smoke_survives_unavailable_storage() {
    let mut harness =
        setup_view_harness_with_preferences(ViewKind::Shell, Arc::new(UnavailablePreferences))
            .await;
    harness.rebuild();

    let result = harness.theme.set_preference(ThemePreference::Dark).await;
    assert!(result.is_err());
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("theme-system"), "missing fallback theme in {html}");
    assert!(html.contains("Good Morning"), "missing greeting in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn study_smoke_renders_plan_form_defaults() {
    let mut harness = setup_view_harness(ViewKind::Study).await;
    harness.rebuild();
    let html = harness.render();

    for expected in [
        "Plan your session",
        "2026-10-15",
        "1 min",
        "60 min",
        "Read",
        "Tutorial",
        "JavaScript",
        "DSA",
        "Start Session",
        "pill pill--selected",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(!html.contains("End Session"), "unexpected focus mode in {html}");
}

#[test]
fn focus_smoke_renders_running_session() {
    let mut run = started_run(3);
    for _ in 0..75 {
        run.tick();
    }
    let html = render_focus(FocusVm::from_run(&run).unwrap());

    for expected in [
        "Oct 15, 2026",
        "DSA • Listen",
        "3 sessions × 1 min",
        "42% Complete",
        "Session 2",
        "0:45",
        "timer-text--pulse",
        "session-tile--done",
        "session-tile--active",
        "session-tile--pending",
        "End Session",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(!html.contains("All sessions completed!"));
}

#[test]
fn focus_smoke_renders_completion() {
    let mut run = started_run(2);
    for _ in 0..120 {
        run.tick();
    }
    let html = render_focus(FocusVm::from_run(&run).unwrap());

    for expected in ["Complete", "🎉", "All sessions completed!", "100% Complete"] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(!html.contains("session-tile--pending"));
    assert!(!html.contains("timer-text--pulse"));
}

#[tokio::test(flavor = "current_thread")]
async fn study_smoke_start_and_end_switch_modes() {
    let mut harness = setup_view_harness(ViewKind::Study).await;
    harness.rebuild();
    assert!(harness.render().contains("Start Session"));

    let start = harness.study_handles.start();
    harness.in_runtime(|| start.call(plan(2)));
    harness.drive_async().await;
    let html = harness.render();

    for expected in [
        "DSA • Listen",
        "2 sessions × 1 min",
        "Session 1",
        "session-tile--active",
        "End Session",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(!html.contains("Start Session"), "form still shown in {html}");
    let updates = harness.issued_timer();
    assert!(updates.borrow().is_started());

    let end = harness.study_handles.end();
    harness.in_runtime(|| end.call(()));
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Start Session"), "missing form in {html}");
    assert!(!html.contains("End Session"), "focus mode still shown in {html}");
    assert_eq!(*updates.borrow(), SessionRun::idle());
}

#[tokio::test(flavor = "current_thread")]
async fn study_teardown_cancels_running_timer() {
    let mut harness = setup_view_harness_with_running_timer(plan(2)).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("End Session"), "missing focus mode in {html}");

    let mut updates = harness.issued_timer();
    assert!(updates.borrow().is_started());

    drop(harness.dom);

    let settled = tokio::time::timeout(Duration::from_secs(2), async {
        loop {
            if !updates.borrow_and_update().is_started() {
                break;
            }
            if updates.changed().await.is_err() {
                break;
            }
        }
    })
    .await;
    assert!(settled.is_ok(), "timer kept running after the screen was dropped");

    tokio::time::sleep(Duration::from_millis(30)).await;
    assert_eq!(*updates.borrow(), SessionRun::idle());
}
