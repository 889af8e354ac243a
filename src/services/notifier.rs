use crate::models::notification_types::Toast;

/// Sink for user-facing notifications raised by the analysis flow.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

/// Headless sink: toasts only go to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, toast: Toast) {
        tracing::warn!(title = %toast.title, "{}", toast.description);
    }
}

/// Desktop sink: forwards toasts to the webview as `toast` events.
#[cfg(feature = "desktop")]
pub struct EventNotifier {
    app: tauri::AppHandle,
}

#[cfg(feature = "desktop")]
impl EventNotifier {
    pub fn new(app: tauri::AppHandle) -> Self {
        Self { app }
    }
}

#[cfg(feature = "desktop")]
impl Notifier for EventNotifier {
    fn notify(&self, toast: Toast) {
        use tauri::Emitter;

        if let Err(e) = self.app.emit("toast", &toast) {
            tracing::error!("Failed to emit toast {:?}: {}", toast.title, e);
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingNotifier;
    use super::*;

    #[test]
    fn recording_notifier_keeps_toasts_in_order() {
        let notifier = RecordingNotifier::default();
        let shared: &dyn Notifier = &notifier;
        shared.notify(Toast::invalid_file_type());
        TracingNotifier.notify(Toast::invalid_file_type());

        assert_eq!(notifier.toasts(), vec![Toast::invalid_file_type()]);
    }
}
