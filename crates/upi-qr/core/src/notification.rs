use serde::{Deserialize, Serialize};

use crate::input::ValidationError;

pub const ERROR_TITLE: &str = "Error";

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum Severity {
    #[default]
    Normal,
    Destructive,
}

/// A transient message for the user.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl From<&ValidationError> for Notification {
    fn from(value: &ValidationError) -> Self {
        Notification {
            title: ERROR_TITLE.to_string(),
            description: value.user_message().to_string(),
            severity: Severity::Destructive,
        }
    }
}

/// Trait that displays notifications. Implemented by the front end.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_from_validation_error() {
        let notification = Notification::from(&ValidationError::InvalidAmount);
        assert_eq!(
            notification,
            Notification {
                title: "Error".to_string(),
                description: "Please enter a valid amount".to_string(),
                severity: Severity::Destructive,
            }
        );
    }
}
