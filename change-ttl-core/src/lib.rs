//! Change TTL Core Library
//!
//! Core logic for reading and setting the operating system's default
//! IPv4 TTL and IPv6 hop limit:
//! - Data model (`TtlValues`, validated `Ttl`)
//! - Backend contract (`TtlBackend`) and the sysctl-backed implementation
//! - Input strategies (bounded slider / digit-filtered text)
//! - The panel state machine shared by every front end
//!
//! The library never touches a terminal; front ends drive `PanelState`
//! (synchronously) or `TtlPanel` (asynchronously).

pub mod error;
pub mod input;
pub mod panel;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{TtlError, TtlResult, INVALID_TTL_MESSAGE};
pub use input::{InputEdit, InputMode, SliderInput, TextInput, TtlInput};
pub use panel::{submit_ttl, Confirmation, FetchTicket, PanelState, SubmitOutcome, TtlPanel};
pub use services::SysctlTtlService;
pub use traits::TtlBackend;
pub use types::{PluginResponse, Ttl, TtlValues};
