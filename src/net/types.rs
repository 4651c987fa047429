//! Wire DTOs for the identity-service boundary.
//!
//! DESIGN
//! ======
//! The login response may carry more fields than the client needs; only the
//! display name and the access credential are deserialized. The same struct
//! is the `localStorage` persistence format, so a saved session from a prior
//! visit round-trips losslessly.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated identity as returned by `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Display name.
    pub name: String,
    /// Opaque access credential; the client stores it and never inspects it.
    #[serde(rename = "accessToken")]
    pub access_token: String,
}
