//! Host device environment collaborator.
//!
//! Registration needs three facts from the host: which platform family it is
//! running on, whether it is a physical device (simulators cannot receive
//! push tokens), and the ability to create the default notification channel
//! on Android before a token is requested.

use serde::{Deserialize, Serialize};

/// Platform family the app is running on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Android,
    Ios,
    Other,
}

/// Android notification channel configuration.
///
/// Channel creation is idempotent on Android, so the registration procedure
/// applies this configuration on every attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationChannel {
    /// Channel identifier
    pub name: String,
    /// Importance level (0 = none .. 5 = max)
    pub importance: u8,
    /// Vibration pattern in milliseconds (off/on pairs)
    pub vibration_pattern: Vec<u32>,
    /// Notification light color, `#AARRGGBB`
    pub light_color: String,
}

/// Maximum channel importance
pub const IMPORTANCE_MAX: u8 = 5;

impl NotificationChannel {
    /// The default channel every registration attempt ensures exists
    pub fn default_channel() -> Self {
        Self {
            name: "default".to_string(),
            importance: IMPORTANCE_MAX,
            vibration_pattern: vec![0, 250, 250, 250],
            light_color: "#FF231F7C".to_string(),
        }
    }
}

/// What the registration procedure needs from the host device.
pub trait DeviceEnvironment {
    /// Platform family of the host
    fn platform(&self) -> Platform;

    /// Whether this is a physical device (not a simulator/emulator)
    fn is_physical_device(&self) -> bool;

    /// Create or update the given notification channel. Only meaningful on
    /// Android; must be idempotent.
    fn ensure_notification_channel(&self, channel: &NotificationChannel);
}

/// Fixed device description, for hosts that know their environment up front
/// and for tests.
#[derive(Debug, Clone)]
pub struct StaticDevice {
    pub platform: Platform,
    pub physical: bool,
}

impl StaticDevice {
    pub fn physical(platform: Platform) -> Self {
        Self {
            platform,
            physical: true,
        }
    }

    pub fn simulator(platform: Platform) -> Self {
        Self {
            platform,
            physical: false,
        }
    }
}

impl DeviceEnvironment for StaticDevice {
    fn platform(&self) -> Platform {
        self.platform
    }

    fn is_physical_device(&self) -> bool {
        self.physical
    }

    fn ensure_notification_channel(&self, channel: &NotificationChannel) {
        log::debug!(
            "Ensured notification channel '{}' (importance {})",
            channel.name,
            channel.importance
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_channel_constants() {
        let channel = NotificationChannel::default_channel();
        assert_eq!(channel.name, "default");
        assert_eq!(channel.importance, IMPORTANCE_MAX);
        assert_eq!(channel.vibration_pattern, vec![0, 250, 250, 250]);
        assert_eq!(channel.light_color, "#FF231F7C");
    }

    #[test]
    fn test_static_device() {
        let device = StaticDevice::physical(Platform::Android);
        assert!(device.is_physical_device());
        assert_eq!(device.platform(), Platform::Android);

        let sim = StaticDevice::simulator(Platform::Ios);
        assert!(!sim.is_physical_device());
    }
}
