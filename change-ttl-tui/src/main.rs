//! Change TTL
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与后端调度 (`backend/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! fn `main()` {
//!
//!     Cli::parse()                // 解析命令行
//!     try_init_logging()          // 日志写入缓存目录，失败不致命
//!     resolve_config()            // 配置文件 + 命令行覆盖
//!     Runtime::new()              // 后端调用所需的 tokio 运行时
//!
//!     有子命令：在运行时上执行 get / set，打印 JSON 后退出
//!     否则：
//!         init_terminal()         // 初始化终端
//!         App::new()              // 创建 App 实例
//!         app::run()              // 运行主循环
//!         restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod cli;
mod event;
mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use change_ttl_core::{SysctlTtlService, TtlBackend};
use clap::Parser;

use backend::{default_log_path, Dispatcher};
use cli::Cli;
use i18n::{current_language, set_language, Language};
use util::{init_terminal, restore_terminal, try_init_logging};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    try_init_logging(default_log_path().as_deref());
    let config = cli.resolve_config()?;

    let runtime = tokio::runtime::Runtime::new()?;
    let backend: Arc<dyn TtlBackend> = Arc::new(SysctlTtlService::with_root(&config.sysctl_root));

    if let Some(command) = cli.command {
        return runtime.block_on(cli::execute(command, backend));
    }

    view::theme::set_theme(config.theme);
    match Language::from_code(&config.language) {
        Some(language) => set_language(language),
        None => tracing::warn!("Unknown language '{}', falling back to en-US", config.language),
    }
    tracing::info!(
        input_mode = config.input_mode.name(),
        language = current_language().code(),
        sysctl_root = %config.sysctl_root.display(),
        "Starting Change TTL"
    );

    let (dispatcher, backend_rx) = Dispatcher::new(runtime.handle().clone(), backend);

    // 1. 初始化终端
    let mut terminal = init_terminal()?;

    // 2. 创建应用实例
    let mut app = model::App::new(config.input_mode);

    // 3. 运行主循环
    let result = app::run(&mut terminal, &mut app, &dispatcher, backend_rx);

    // 4. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    result.map(|()| ExitCode::SUCCESS)
}
