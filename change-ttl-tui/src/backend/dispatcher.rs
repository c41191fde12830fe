//! 命令调度器
//!
//! 在 tokio 运行时上执行 Update 层产生的 Command，
//! 并把结果作为 `AppMessage::Backend` 送回主循环。

use std::sync::Arc;

use change_ttl_core::{submit_ttl, TtlBackend};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::message::{AppMessage, BackendEvent, Command};

/// 后端命令调度器
pub struct Dispatcher {
    handle: Handle,
    backend: Arc<dyn TtlBackend>,
    tx: UnboundedSender<AppMessage>,
}

impl Dispatcher {
    /// 创建调度器，返回结果接收端（由主循环持有）
    pub fn new(handle: Handle, backend: Arc<dyn TtlBackend>) -> (Self, UnboundedReceiver<AppMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { handle, backend, tx }, rx)
    }

    /// 异步执行命令
    pub fn dispatch(&self, command: Command) {
        let backend = Arc::clone(&self.backend);
        let tx = self.tx.clone();

        self.handle.spawn(async move {
            let event = match command {
                Command::FetchTtl(ticket) => BackendEvent::Fetched(ticket, backend.get().await),
                // set 与随后的 get 在同一个任务里顺序执行
                Command::SetTtl(ttl) => BackendEvent::Submitted(submit_ttl(backend.as_ref(), ttl).await),
            };
            // 接收端已关闭说明应用正在退出，丢弃结果即可
            if tx.send(AppMessage::Backend(event)).is_err() {
                log::debug!("Dropped backend result after shutdown");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use change_ttl_core::{InputMode, PanelState, SubmitOutcome, SysctlTtlService, Ttl, TtlValues};

    fn fake_sysctl(ipv4: &str, ipv6: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let v4 = dir.path().join("net/ipv4");
        let v6 = dir.path().join("net/ipv6/conf/all");
        std::fs::create_dir_all(&v4).unwrap();
        std::fs::create_dir_all(&v6).unwrap();
        std::fs::write(v4.join("ip_default_ttl"), ipv4).unwrap();
        std::fs::write(v6.join("hop_limit"), ipv6).unwrap();
        dir
    }

    #[tokio::test]
    async fn fetch_reports_values() {
        let dir = fake_sysctl("64\n", "255\n");
        let backend = Arc::new(SysctlTtlService::with_root(dir.path()));
        let (dispatcher, mut rx) = Dispatcher::new(Handle::current(), backend);
        let ticket = PanelState::new(InputMode::Slider).begin_fetch();

        dispatcher.dispatch(Command::FetchTtl(ticket));

        match rx.recv().await {
            Some(AppMessage::Backend(BackendEvent::Fetched(returned, Ok(values)))) => {
                assert_eq!(returned, ticket);
                assert_eq!(values, TtlValues { ipv4: 64, ipv6: 255 });
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    /// 第一次 get 在写入前取值，但很晚才返回
    struct SlowFirstGet {
        values: std::sync::Mutex<TtlValues>,
        gets: std::sync::atomic::AtomicUsize,
    }

    #[async_trait::async_trait]
    impl TtlBackend for SlowFirstGet {
        async fn get(&self) -> change_ttl_core::TtlResult<TtlValues> {
            let snapshot = *self.values.lock().unwrap();
            if self.gets.fetch_add(1, std::sync::atomic::Ordering::SeqCst) == 0 {
                tokio::time::sleep(std::time::Duration::from_millis(200)).await;
            }
            Ok(snapshot)
        }

        async fn set(&self, ttl: Ttl) -> change_ttl_core::TtlResult<()> {
            *self.values.lock().unwrap() = TtlValues { ipv4: ttl.get(), ipv6: ttl.get() };
            Ok(())
        }
    }

    #[tokio::test]
    async fn late_mount_fetch_cannot_overwrite_confirmed_write() {
        use crate::message::PanelMessage;
        use crate::model::App;
        use change_ttl_core::InputEdit;

        let backend = Arc::new(SlowFirstGet {
            values: std::sync::Mutex::new(TtlValues { ipv4: 64, ipv6: 64 }),
            gets: std::sync::atomic::AtomicUsize::new(0),
        });
        let (dispatcher, mut rx) = Dispatcher::new(Handle::current(), backend);
        let mut app = App::new(InputMode::Text);

        let mount = crate::update::update(&mut app, AppMessage::Refresh).unwrap();
        dispatcher.dispatch(mount);
        crate::update::update(
            &mut app,
            AppMessage::Panel(PanelMessage::Edit(InputEdit::Text("128".to_string()))),
        );
        let submit = crate::update::update(&mut app, AppMessage::Panel(PanelMessage::Submit)).unwrap();
        dispatcher.dispatch(submit);

        let first = rx.recv().await.unwrap();
        assert!(matches!(first, AppMessage::Backend(BackendEvent::Submitted(_))));
        crate::update::update(&mut app, first);
        let second = rx.recv().await.unwrap();
        assert!(matches!(second, AppMessage::Backend(BackendEvent::Fetched(..))));
        crate::update::update(&mut app, second);

        assert_eq!(app.panel.values(), TtlValues { ipv4: 128, ipv6: 128 });
        assert!(app.panel.confirmation().is_some());
    }

    #[tokio::test]
    async fn set_reports_write_and_refresh() {
        let dir = fake_sysctl("64\n", "64\n");
        let backend = Arc::new(SysctlTtlService::with_root(dir.path()));
        let (dispatcher, mut rx) = Dispatcher::new(Handle::current(), backend);
        let ttl = Ttl::new(128).unwrap();

        dispatcher.dispatch(Command::SetTtl(ttl));

        match rx.recv().await {
            Some(AppMessage::Backend(BackendEvent::Submitted(outcome))) => {
                assert_eq!(
                    outcome,
                    SubmitOutcome::Applied {
                        ttl,
                        refreshed: Ok(TtlValues { ipv4: 128, ipv6: 128 }),
                    }
                );
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }
}
