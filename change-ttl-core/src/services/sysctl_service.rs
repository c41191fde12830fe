//! Sysctl-backed TTL service.
//!
//! Reads and writes `net.ipv4.ip_default_ttl` and `net.ipv6.conf.all.hop_limit`
//! through their procfs files. Writing requires root (or `CAP_NET_ADMIN`).

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::{TtlError, TtlResult};
use crate::traits::TtlBackend;
use crate::types::{Ttl, TtlValues};

/// Default procfs sysctl root.
pub const DEFAULT_SYSCTL_ROOT: &str = "/proc/sys";

const IPV4_DEFAULT_TTL: &str = "net/ipv4/ip_default_ttl";
const IPV6_HOP_LIMIT: &str = "net/ipv6/conf/all/hop_limit";

/// TTL backend operating on the sysctl tree.
#[derive(Debug, Clone)]
pub struct SysctlTtlService {
    root: PathBuf,
}

impl SysctlTtlService {
    /// Use the live `/proc/sys` tree.
    pub fn new() -> Self {
        Self::with_root(DEFAULT_SYSCTL_ROOT)
    }

    /// Use an alternative sysctl root (a mounted namespace or a scratch directory).
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ipv4_path(&self) -> PathBuf {
        self.root.join(IPV4_DEFAULT_TTL)
    }

    fn ipv6_path(&self) -> PathBuf {
        self.root.join(IPV6_HOP_LIMIT)
    }

    async fn read_values(&self) -> io::Result<TtlValues> {
        let ipv4 = read_sysctl(&self.ipv4_path()).await?;
        let ipv6 = read_sysctl(&self.ipv6_path()).await?;
        Ok(TtlValues { ipv4, ipv6 })
    }

    async fn write_values(&self, ttl: Ttl) -> io::Result<()> {
        write_sysctl(&self.ipv4_path(), ttl).await?;
        write_sysctl(&self.ipv6_path(), ttl).await
    }
}

impl Default for SysctlTtlService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TtlBackend for SysctlTtlService {
    async fn get(&self) -> TtlResult<TtlValues> {
        match self.read_values().await {
            Ok(values) => {
                log::debug!("Read TTL values: ipv4={}, ipv6={}", values.ipv4, values.ipv6);
                Ok(values)
            }
            Err(e) => {
                log::error!("Error getting TTL values: {e}");
                Err(TtlError::backend(format!("Failed to get TTL values: {e}")))
            }
        }
    }

    async fn set(&self, ttl: Ttl) -> TtlResult<()> {
        match self.write_values(ttl).await {
            Ok(()) => {
                log::info!("TTL set to {ttl}");
                Ok(())
            }
            Err(e) => {
                log::error!("Error setting TTL value: {e}");
                Err(TtlError::backend(format!("Failed to set TTL value: {e}")))
            }
        }
    }
}

async fn read_sysctl(path: &Path) -> io::Result<u8> {
    let raw = tokio::fs::read_to_string(path).await?;
    raw.trim().parse::<u8>().map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("{}: {e}", path.display()),
        )
    })
}

async fn write_sysctl(path: &Path, ttl: Ttl) -> io::Result<()> {
    // procfs 只接受覆盖写，不能先创建临时文件再重命名
    tokio::fs::write(path, format!("{ttl}\n")).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_root(ipv4: &str, ipv6: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let v4 = dir.path().join(IPV4_DEFAULT_TTL);
        let v6 = dir.path().join(IPV6_HOP_LIMIT);
        std::fs::create_dir_all(v4.parent().unwrap()).unwrap();
        std::fs::create_dir_all(v6.parent().unwrap()).unwrap();
        std::fs::write(v4, ipv4).unwrap();
        std::fs::write(v6, ipv6).unwrap();
        dir
    }

    #[tokio::test]
    async fn get_reads_both_sysctls() {
        let dir = fake_root("64\n", "128\n");
        let svc = SysctlTtlService::with_root(dir.path());

        let values = svc.get().await.unwrap();
        assert_eq!(values, TtlValues { ipv4: 64, ipv6: 128 });
    }

    #[tokio::test]
    async fn set_writes_both_sysctls() {
        let dir = fake_root("64\n", "64\n");
        let svc = SysctlTtlService::with_root(dir.path());

        svc.set(Ttl::new(200).unwrap()).await.unwrap();

        let values = svc.get().await.unwrap();
        assert_eq!(values, TtlValues { ipv4: 200, ipv6: 200 });
        let raw = std::fs::read_to_string(dir.path().join(IPV4_DEFAULT_TTL)).unwrap();
        assert_eq!(raw, "200\n");
    }

    #[tokio::test]
    async fn get_missing_file_reports_failure() {
        let dir = tempfile::tempdir().unwrap();
        let svc = SysctlTtlService::with_root(dir.path());

        let err = svc.get().await.unwrap_err();
        assert!(err.to_string().starts_with("Failed to get TTL values: "));
        assert!(!err.is_expected());
    }

    #[tokio::test]
    async fn get_garbage_reports_failure() {
        let dir = fake_root("sixty-four\n", "64\n");
        let svc = SysctlTtlService::with_root(dir.path());

        let err = svc.get().await.unwrap_err();
        assert!(err.to_string().starts_with("Failed to get TTL values: "));
    }

    #[tokio::test]
    async fn set_into_missing_tree_reports_failure() {
        let dir = tempfile::tempdir().unwrap();
        let svc = SysctlTtlService::with_root(dir.path().join("absent"));

        let err = svc.set(Ttl::new(64).unwrap()).await.unwrap_err();
        assert!(err.to_string().starts_with("Failed to set TTL value: "));
    }

    #[test]
    fn default_root_is_procfs() {
        assert_eq!(SysctlTtlService::default().root(), Path::new("/proc/sys"));
    }
}
