//! 日志初始化

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 尽量初始化日志；失败时提示到 stderr 并继续运行
///
/// 返回日志是否已启用。
pub fn try_init_logging(path: Option<&Path>) -> bool {
    let Some(path) = path else {
        eprintln!("change-ttl: no cache directory, logging disabled");
        return false;
    };
    match init_logging(path) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("change-ttl: logging disabled: {e:#}");
            false
        }
    }
}

/// 初始化 tracing，输出追加到 `path`
///
/// 级别由 `RUST_LOG` 控制，默认 info。`log` 宏的记录同样会被收集。
pub fn init_logging(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(filter)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwritable_log_path_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        let path = blocker.join("change-ttl.log");
        assert!(init_logging(&path).is_err());
        assert!(!try_init_logging(Some(&path)));
        assert!(!try_init_logging(None));
    }
}
