//! 后端调用结果的 JSON 包装类型

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::error::TtlResult;

/// Tagged result of a backend call.
///
/// Serializes as `{"success": true, "result": ...}` on success (the `result`
/// field is omitted when there is no payload) and as
/// `{"success": false, "result": "<message>"}` on failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PluginResponse<T> {
    Success(Option<T>),
    Failure(String),
}

impl<T> PluginResponse<T> {
    /// 是否成功
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl<T> From<TtlResult<T>> for PluginResponse<T> {
    fn from(result: TtlResult<T>) -> Self {
        match result {
            Ok(value) => Self::Success(Some(value)),
            Err(e) => Self::Failure(e.to_string()),
        }
    }
}

impl PluginResponse<()> {
    /// `set` carries no payload on success.
    pub fn from_unit(result: TtlResult<()>) -> Self {
        match result {
            Ok(()) => Self::Success(None),
            Err(e) => Self::Failure(e.to_string()),
        }
    }
}

impl<T: Serialize> Serialize for PluginResponse<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Success(Some(value)) => {
                let mut state = serializer.serialize_struct("PluginResponse", 2)?;
                state.serialize_field("success", &true)?;
                state.serialize_field("result", value)?;
                state.end()
            }
            Self::Success(None) => {
                let mut state = serializer.serialize_struct("PluginResponse", 1)?;
                state.serialize_field("success", &true)?;
                state.end()
            }
            Self::Failure(message) => {
                let mut state = serializer.serialize_struct("PluginResponse", 2)?;
                state.serialize_field("success", &false)?;
                state.serialize_field("result", message)?;
                state.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TtlError;
    use crate::types::TtlValues;

    #[test]
    fn get_success_carries_values() {
        let response = PluginResponse::from(Ok(TtlValues { ipv4: 64, ipv6: 128 }));
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"success":true,"result":{"ipv4":64,"ipv6":128}}"#);
    }

    #[test]
    fn set_success_omits_result() {
        let json = serde_json::to_string(&PluginResponse::from_unit(Ok(()))).unwrap();
        assert_eq!(json, r#"{"success":true}"#);
    }

    #[test]
    fn failure_carries_message_verbatim() {
        let response: PluginResponse<()> =
            PluginResponse::from_unit(Err(TtlError::backend("permission denied")));
        assert!(!response.is_success());
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"success":false,"result":"permission denied"}"#);
    }
}
