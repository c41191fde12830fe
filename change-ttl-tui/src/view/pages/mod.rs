//! 页面

pub mod ttl_panel;
