//!
//! app.rs
//! 应用主循环
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//!
//! step(Refresh)                                      // 启动时读取一次当前 TTL
//! loop {
//!
//!     terminal.draw(|f| view::render(&app, f))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查是否应该退出
//!     while let Ok(msg) = backend_rx.try_recv() {     // 收取已完成的后端任务
//!         step(msg)
//!     }
//!     if let Some(event) = poll_event() {             // 轮询输入，最长等待 100ms
//!         step(handle_event(event, &app))
//!     }
//! }
//!
//! 其中 step = update::update + 把返回的 Command 交给 Dispatcher。
//! 退出时仍在执行的后端任务随运行时一起被丢弃，结果不会再写回 App。

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::Dispatcher;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    dispatcher: &Dispatcher,
    mut backend_rx: UnboundedReceiver<AppMessage>,
) -> Result<()> {
    step(app, dispatcher, AppMessage::Refresh);

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 处理已完成的后端任务
        while let Ok(msg) = backend_rx.try_recv() {
            step(app, dispatcher, msg);
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            step(app, dispatcher, msg);
        }
    }

    Ok(())
}

/// 更新状态，并执行返回的命令
fn step(app: &mut App, dispatcher: &Dispatcher, msg: AppMessage) {
    if let Some(command) = update::update(app, msg) {
        dispatcher.dispatch(command);
    }
}
