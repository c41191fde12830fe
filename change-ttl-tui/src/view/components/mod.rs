//! UI 组件

pub mod modal;
pub mod statusbar;
