//! `martpos-auth` — the client-side login gate.
//!
//! A single hard-coded credential pair checked locally, with a session
//! flag the UI persists between page loads. Explicitly NOT a security
//! boundary: there is no hashing, no token, no server to verify against.

pub mod session;

pub use session::{
    ADMIN_PASSWORD, ADMIN_USERNAME, SESSION_ACTIVE, SESSION_SLOT, verify_credentials,
};
