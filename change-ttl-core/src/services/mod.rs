//! Backend service implementations.

mod sysctl_service;

pub use sysctl_service::{SysctlTtlService, DEFAULT_SYSCTL_ROOT};
