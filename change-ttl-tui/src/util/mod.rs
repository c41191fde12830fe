//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码：
//! 终端的初始化和恢复，以及日志初始化。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod logging;        // 日志（写入缓存目录下的文件）
//!         mod terminal;       // 终端初始化和恢复
//!
//!
//!     · Raw Mode（原始模式）
//!         - 关闭行缓冲：无需按 Enter，每个按键立即生效
//!         - 关闭字符回显
//!
//!     · Alternate Screen（备用屏幕）
//!         - 退出后自动恢复主屏幕内容
//!
//!     · Bracketed Paste（括号粘贴）
//!         - 粘贴内容作为一个 Event::Paste 送达，而不是逐个按键
//!
//!     TUI 占用了整个终端，日志不能写到 stderr，
//!     因此 tracing 的输出被重定向到文件。
//!     日志文件打不开时只在 stderr 提示一次，程序照常运行。
//!

mod logging;
mod terminal;

pub use logging::try_init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
