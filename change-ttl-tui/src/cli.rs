//! 命令行参数与无界面子命令
//!
//! 不带子命令时启动 TUI；`get` / `set` 直接调用后端，
//! 把结果以 `{"success": ..., "result": ...}` 的 JSON 打印到标准输出。

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use change_ttl_core::{InputEdit, InputMode, PluginResponse, TtlBackend, TtlPanel};
use clap::{Parser, Subcommand};

use crate::backend::{AppConfig, ConfigService, LocalConfigService};

/// 读取和修改系统默认 IPv4 TTL / IPv6 hop limit
#[derive(Debug, Parser)]
#[command(name = "change-ttl", version, about)]
pub struct Cli {
    /// 配置文件路径（默认为 <config_dir>/change-ttl/config.json）
    #[arg(long, env = "CHANGE_TTL_CONFIG")]
    pub config: Option<PathBuf>,

    /// 输入方式：slider / text
    #[arg(long, value_parser = parse_input_mode)]
    pub input_mode: Option<InputMode>,

    /// sysctl 根目录（默认为 /proc/sys）
    #[arg(long)]
    pub sysctl_root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// 读取当前 IPv4 / IPv6 TTL
    Get,
    /// 写入新的 TTL（1-255）
    Set {
        /// 新的 TTL 值
        value: String,
    },
}

fn parse_input_mode(name: &str) -> Result<InputMode, String> {
    InputMode::from_name(name).ok_or_else(|| format!("unknown input mode '{name}' (expected slider or text)"))
}

impl Cli {
    /// 加载配置文件并应用命令行覆盖项
    pub fn resolve_config(&self) -> Result<AppConfig> {
        let service = self
            .config
            .as_ref()
            .map_or_else(LocalConfigService::new, LocalConfigService::with_path);
        log::debug!("Loading config from {:?}", service.path());
        let mut config = service.load()?;

        if let Some(mode) = self.input_mode {
            config.input_mode = mode;
        }
        if let Some(root) = &self.sysctl_root {
            config.sysctl_root.clone_from(root);
        }
        Ok(config)
    }
}

/// 执行无界面子命令
pub async fn execute(command: Commands, backend: Arc<dyn TtlBackend>) -> Result<ExitCode> {
    let (json, success) = respond(command, backend).await?;
    println!("{json}");
    Ok(if success { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// 执行子命令，返回 JSON 行以及是否成功
async fn respond(command: Commands, backend: Arc<dyn TtlBackend>) -> Result<(String, bool)> {
    Ok(match command {
        Commands::Get => {
            let response = PluginResponse::from(backend.get().await);
            (serde_json::to_string(&response)?, response.is_success())
        }
        Commands::Set { value } => {
            // 与 TUI 的文本输入走同一条校验路径
            let mut panel = TtlPanel::new(backend, InputMode::Text);
            panel.handle_ttl_change(InputEdit::Text(value));
            let result = panel.handle_set_ttl().await.map(|ttl| {
                tracing::info!("TTL set to {ttl}");
            });
            let response = PluginResponse::from_unit(result);
            (serde_json::to_string(&response)?, response.is_success())
        }
    })
}
