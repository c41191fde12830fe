#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! End-to-end panel scenarios against a scripted backend.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use change_ttl_core::{
    InputEdit, InputMode, Ttl, TtlBackend, TtlError, TtlPanel, TtlResult, TtlValues,
    INVALID_TTL_MESSAGE,
};
use tokio::sync::Mutex;

// ===== Scripted Backend =====

/// Backend that replays queued responses and records every call.
#[derive(Default)]
struct ScriptedBackend {
    gets: Mutex<VecDeque<TtlResult<TtlValues>>>,
    sets: Mutex<VecDeque<TtlResult<()>>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedBackend {
    fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    async fn queue_get(&self, result: TtlResult<TtlValues>) {
        self.gets.lock().await.push_back(result);
    }

    async fn queue_set(&self, result: TtlResult<()>) {
        self.sets.lock().await.push_back(result);
    }

    async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl TtlBackend for ScriptedBackend {
    async fn get(&self) -> TtlResult<TtlValues> {
        self.calls.lock().await.push("get".to_string());
        self.gets
            .lock()
            .await
            .pop_front()
            .expect("unexpected get call")
    }

    async fn set(&self, ttl: Ttl) -> TtlResult<()> {
        self.calls.lock().await.push(format!("set({ttl})"));
        self.sets
            .lock()
            .await
            .pop_front()
            .expect("unexpected set call")
    }
}

async fn mounted_panel(backend: &Arc<ScriptedBackend>, mode: InputMode) -> TtlPanel {
    backend.queue_get(Ok(TtlValues { ipv4: 64, ipv6: 64 })).await;
    let mut panel = TtlPanel::new(backend.clone(), mode);
    panel.fetch_ttl_values().await.unwrap();
    panel
}

fn type_text(panel: &mut TtlPanel, text: &str) {
    for c in text.chars() {
        panel.handle_ttl_change(InputEdit::Text(c.to_string()));
    }
}

#[tokio::test]
async fn mount_shows_current_values() {
    let backend = ScriptedBackend::new();
    let panel = mounted_panel(&backend, InputMode::Slider).await;

    let values = panel.state().values();
    assert_eq!(format!("Current IPv4 TTL: {}", values.ipv4), "Current IPv4 TTL: 64");
    assert_eq!(format!("Current IPv6 TTL: {}", values.ipv6), "Current IPv6 TTL: 64");
    assert_eq!(panel.state().error(), None);
}

#[tokio::test]
async fn out_of_range_value_is_rejected_locally() {
    let backend = ScriptedBackend::new();
    let mut panel = mounted_panel(&backend, InputMode::Text).await;
    type_text(&mut panel, "300");

    let result = panel.handle_set_ttl().await;

    assert_eq!(result, Err(TtlError::InvalidValue));
    assert_eq!(panel.state().error(), Some(INVALID_TTL_MESSAGE));
    assert_eq!(backend.calls().await, vec!["get"]);
}

#[tokio::test]
async fn accepted_value_is_written_then_refreshed() {
    let backend = ScriptedBackend::new();
    let mut panel = mounted_panel(&backend, InputMode::Text).await;
    backend.queue_set(Ok(())).await;
    backend.queue_get(Ok(TtlValues { ipv4: 128, ipv6: 64 })).await;
    type_text(&mut panel, "128");

    let ttl = panel.handle_set_ttl().await.unwrap();

    assert_eq!(ttl.get(), 128);
    assert_eq!(backend.calls().await, vec!["get", "set(128)", "get"]);
    let state = panel.state();
    assert_eq!(state.values().ipv4, 128);
    assert_eq!(state.values().ipv6, 64);
    assert!(state.confirmation().is_some());
    assert!(state.input().is_unset());
    assert_eq!(state.error(), None);
}

#[tokio::test]
async fn backend_refusal_is_shown_verbatim() {
    let backend = ScriptedBackend::new();
    let mut panel = mounted_panel(&backend, InputMode::Text).await;
    backend
        .queue_set(Err(TtlError::backend("permission denied")))
        .await;
    type_text(&mut panel, "64");

    let result = panel.handle_set_ttl().await;

    assert!(result.is_err());
    assert_eq!(panel.state().error(), Some("permission denied"));
    assert!(panel.state().confirmation().is_none());
    assert_eq!(panel.state().input().display(), "64");
    assert_eq!(backend.calls().await, vec!["get", "set(64)"]);
}

#[tokio::test]
async fn editing_after_error_clears_it_before_resubmitting() {
    let backend = ScriptedBackend::new();
    let mut panel = mounted_panel(&backend, InputMode::Text).await;
    type_text(&mut panel, "0");
    assert!(panel.handle_set_ttl().await.is_err());
    assert!(panel.state().error().is_some());

    panel.handle_ttl_change(InputEdit::Backspace);
    assert_eq!(panel.state().error(), None);

    backend.queue_set(Ok(())).await;
    backend.queue_get(Ok(TtlValues { ipv4: 9, ipv6: 9 })).await;
    type_text(&mut panel, "9");
    assert_eq!(panel.handle_set_ttl().await.map(Ttl::get), Ok(9));
}

#[tokio::test]
async fn slider_submits_its_position() {
    let backend = ScriptedBackend::new();
    let mut panel = mounted_panel(&backend, InputMode::Slider).await;
    backend.queue_set(Ok(())).await;
    backend.queue_get(Ok(TtlValues { ipv4: 11, ipv6: 11 })).await;

    panel.handle_ttl_change(InputEdit::Increment);
    panel.handle_ttl_change(InputEdit::PageUp);

    assert_eq!(panel.handle_set_ttl().await.map(Ttl::get), Ok(11));
    assert_eq!(backend.calls().await, vec!["get", "set(11)", "get"]);
}
