//! The registration procedure
//!
//! Single attempt per invocation, no retries. Collaborators (device
//! environment, OS permission subsystem, provider token API) are traits so
//! hosts wire in the real platform bindings and tests wire in fakes.

use super::types::{PermissionStatus, RegistrationError};
use crate::config::AppManifest;
use crate::device::{DeviceEnvironment, NotificationChannel, Platform};

/// OS notification permission subsystem.
#[allow(async_fn_in_trait)]
pub trait PermissionGate {
    /// Query the existing permission status without prompting the user
    async fn current_status(&self) -> PermissionStatus;

    /// Show the OS consent prompt and return the resulting status.
    ///
    /// The registrar calls this at most once per attempt, and only after
    /// observing a non-granted existing status. The prompt itself is owned
    /// by the OS; implementations must not auto-grant.
    async fn request_permission(&self) -> PermissionStatus;
}

/// Provider registration API that issues push tokens scoped to a project.
#[allow(async_fn_in_trait)]
pub trait TokenIssuer {
    /// Fetch a push token for this install, scoped to `project_id`
    async fn fetch_token(&self, project_id: &str) -> Result<String, String>;
}

/// Runs the device registration procedure against a set of collaborators.
pub struct Registrar<D, P, T> {
    device: D,
    permissions: P,
    issuer: T,
    manifest: AppManifest,
}

impl<D, P, T> Registrar<D, P, T>
where
    D: DeviceEnvironment,
    P: PermissionGate,
    T: TokenIssuer,
{
    pub fn new(device: D, permissions: P, issuer: T, manifest: AppManifest) -> Self {
        Self {
            device,
            permissions,
            issuer,
            manifest,
        }
    }

    /// Register this device for push notifications.
    ///
    /// Steps, in order:
    /// 1. On Android, ensure the default notification channel exists
    ///    (idempotent, applied on every attempt).
    /// 2. Require a physical device.
    /// 3. Check permission; if not granted, request it interactively exactly
    ///    once. Still not granted fails the attempt.
    /// 4. Resolve the project identifier from the manifest.
    /// 5. Ask the provider for a token scoped to that project.
    pub async fn register(&self) -> Result<String, RegistrationError> {
        if self.device.platform() == Platform::Android {
            self.device
                .ensure_notification_channel(&NotificationChannel::default_channel());
        }

        if !self.device.is_physical_device() {
            log::warn!("Push registration attempted on a non-physical device");
            return Err(RegistrationError::NotPhysicalDevice);
        }

        let mut status = self.permissions.current_status().await;
        if !status.is_granted() {
            status = self.permissions.request_permission().await;
        }
        if !status.is_granted() {
            log::info!("Notification permission not granted ({:?})", status);
            return Err(RegistrationError::PermissionDenied);
        }

        let project_id = self
            .manifest
            .resolve_project_id()
            .ok_or(RegistrationError::MissingProjectId)?;

        let token = self
            .issuer
            .fetch_token(project_id)
            .await
            .map_err(RegistrationError::TokenFetch)?;

        log::info!("Registered for push notifications");
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::StaticDevice;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Permission gate with a scripted existing status and request outcome,
    /// counting how often each is consulted.
    struct ScriptedPermissions {
        existing: PermissionStatus,
        after_request: PermissionStatus,
        status_calls: Arc<AtomicUsize>,
        request_calls: Arc<AtomicUsize>,
    }

    impl ScriptedPermissions {
        fn new(existing: PermissionStatus, after_request: PermissionStatus) -> Self {
            Self {
                existing,
                after_request,
                status_calls: Arc::new(AtomicUsize::new(0)),
                request_calls: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    impl PermissionGate for &ScriptedPermissions {
        async fn current_status(&self) -> PermissionStatus {
            self.status_calls.fetch_add(1, Ordering::SeqCst);
            self.existing
        }

        async fn request_permission(&self) -> PermissionStatus {
            self.request_calls.fetch_add(1, Ordering::SeqCst);
            self.after_request
        }
    }

    /// Issuer that returns a fixed token and counts fetches
    struct FixedIssuer {
        token: Result<String, String>,
        fetch_calls: Arc<AtomicUsize>,
    }

    impl FixedIssuer {
        fn ok(token: &str) -> Self {
            Self {
                token: Ok(token.to_string()),
                fetch_calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn err(message: &str) -> Self {
            Self {
                token: Err(message.to_string()),
                fetch_calls: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    impl TokenIssuer for &FixedIssuer {
        async fn fetch_token(&self, _project_id: &str) -> Result<String, String> {
            self.fetch_calls.fetch_add(1, Ordering::SeqCst);
            self.token.clone()
        }
    }

    #[tokio::test]
    async fn test_simulator_fails_before_permission_or_network() {
        let permissions =
            ScriptedPermissions::new(PermissionStatus::Granted, PermissionStatus::Granted);
        let issuer = FixedIssuer::ok("ExponentPushToken[abc123]");
        let registrar = Registrar::new(
            StaticDevice::simulator(Platform::Ios),
            &permissions,
            &issuer,
            AppManifest::with_eas_project_id("proj-1"),
        );

        let result = registrar.register().await;
        assert_eq!(result, Err(RegistrationError::NotPhysicalDevice));
        assert_eq!(permissions.status_calls.load(Ordering::SeqCst), 0);
        assert_eq!(permissions.request_calls.load(Ordering::SeqCst), 0);
        assert_eq!(issuer.fetch_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_denied_after_single_request() {
        let permissions =
            ScriptedPermissions::new(PermissionStatus::Undetermined, PermissionStatus::Denied);
        let issuer = FixedIssuer::ok("ExponentPushToken[abc123]");
        let registrar = Registrar::new(
            StaticDevice::physical(Platform::Ios),
            &permissions,
            &issuer,
            AppManifest::with_eas_project_id("proj-1"),
        );

        let result = registrar.register().await;
        assert_eq!(result, Err(RegistrationError::PermissionDenied));
        assert_eq!(permissions.request_calls.load(Ordering::SeqCst), 1);
        assert_eq!(issuer.fetch_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_already_granted_skips_request() {
        let permissions =
            ScriptedPermissions::new(PermissionStatus::Granted, PermissionStatus::Denied);
        let issuer = FixedIssuer::ok("ExponentPushToken[abc123]");
        let registrar = Registrar::new(
            StaticDevice::physical(Platform::Ios),
            &permissions,
            &issuer,
            AppManifest::with_eas_project_id("proj-1"),
        );

        let token = registrar.register().await.unwrap();
        assert_eq!(token, "ExponentPushToken[abc123]");
        assert_eq!(permissions.request_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_project_id_fails_before_fetch() {
        let permissions =
            ScriptedPermissions::new(PermissionStatus::Granted, PermissionStatus::Granted);
        let issuer = FixedIssuer::ok("ExponentPushToken[abc123]");
        let registrar = Registrar::new(
            StaticDevice::physical(Platform::Android),
            &permissions,
            &issuer,
            AppManifest::default(),
        );

        let result = registrar.register().await;
        assert_eq!(result, Err(RegistrationError::MissingProjectId));
        assert_eq!(issuer.fetch_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_provider_error_carries_message() {
        let permissions =
            ScriptedPermissions::new(PermissionStatus::Granted, PermissionStatus::Granted);
        let issuer = FixedIssuer::err("provider unavailable");
        let registrar = Registrar::new(
            StaticDevice::physical(Platform::Android),
            &permissions,
            &issuer,
            AppManifest::with_eas_project_id("proj-1"),
        );

        let result = registrar.register().await;
        assert_eq!(
            result,
            Err(RegistrationError::TokenFetch(
                "provider unavailable".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_granted_with_project_id_returns_token_verbatim() {
        let permissions =
            ScriptedPermissions::new(PermissionStatus::Granted, PermissionStatus::Granted);
        let issuer = FixedIssuer::ok("ExponentPushToken[abc123]");
        let registrar = Registrar::new(
            StaticDevice::physical(Platform::Android),
            &permissions,
            &issuer,
            AppManifest::with_eas_project_id("proj-1"),
        );

        let token = registrar.register().await.unwrap();
        assert_eq!(token, "ExponentPushToken[abc123]");
        assert_eq!(issuer.fetch_calls.load(Ordering::SeqCst), 1);
    }
}
