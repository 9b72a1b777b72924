//! Device registration for push notifications.
//!
//! [`Registrar::register`] runs the one-shot procedure: Android channel
//! setup, physical-device check, permission query/request, project-id
//! resolution, token fetch. Every failure is terminal for the attempt and
//! surfaces as a single structured [`RegistrationError`].

pub mod registrar;
pub mod types;

pub use registrar::{PermissionGate, Registrar, TokenIssuer};
pub use types::{PermissionStatus, RegistrationError, TokenState};
