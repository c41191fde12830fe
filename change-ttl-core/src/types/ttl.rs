//! TTL 相关类型定义

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{TtlError, TtlResult};

/// Current default TTL / hop limit as reported by the backend.
///
/// The backend is the source of truth, so fetched values are not range-checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TtlValues {
    /// `net.ipv4.ip_default_ttl`
    pub ipv4: u8,
    /// `net.ipv6.conf.all.hop_limit`
    pub ipv6: u8,
}

/// A TTL value accepted for submission, always within `[Ttl::MIN, Ttl::MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Ttl(u8);

impl Ttl {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 255;

    /// Returns `None` for `0`, the only `u8` outside the accepted range.
    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Validate a candidate read from an input control.
    ///
    /// `None` means the input did not parse as a number.
    pub fn validate(candidate: Option<i64>) -> TtlResult<Self> {
        candidate
            .and_then(|value| u8::try_from(value).ok())
            .and_then(Self::new)
            .ok_or(TtlError::InvalidValue)
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl From<Ttl> for u8 {
    fn from(ttl: Ttl) -> Self {
        ttl.0
    }
}

impl fmt::Display for Ttl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_whole_range() {
        for value in 1..=255_i64 {
            let ttl = Ttl::validate(Some(value)).unwrap();
            assert_eq!(i64::from(ttl.get()), value);
        }
    }

    #[test]
    fn rejects_out_of_range_and_missing() {
        for candidate in [None, Some(0), Some(-1), Some(256), Some(300), Some(i64::MAX)] {
            assert_eq!(Ttl::validate(candidate), Err(TtlError::InvalidValue));
        }
    }

    #[test]
    fn zero_is_not_a_ttl() {
        assert!(Ttl::new(0).is_none());
        assert_eq!(Ttl::new(64).map(u8::from), Some(64));
    }

    #[test]
    fn values_default_to_zero() {
        assert_eq!(TtlValues::default(), TtlValues { ipv4: 0, ipv6: 0 });
    }
}
