use std::sync::Mutex;

use tracing::debug;

use crate::notification::{Notification, Notifier};

#[derive(Default)]
pub struct MockNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        MockNotifier::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }
}

impl Notifier for MockNotifier {
    fn notify(&self, notification: Notification) {
        debug!("Push notification: {notification:?}");
        self.notifications.lock().unwrap().push(notification);
    }
}
