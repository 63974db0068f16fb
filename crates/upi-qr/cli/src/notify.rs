use upi_qr_core::{Notification, Notifier, Severity};

pub(crate) struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        eprintln!("{}", format_notification(&notification));
    }
}

fn format_notification(notification: &Notification) -> String {
    let text = format!("{}: {}", notification.title, notification.description);
    match notification.severity {
        Severity::Destructive => format!("\x1b[1;31m{text}\x1b[m"),
        Severity::Normal => text,
    }
}
