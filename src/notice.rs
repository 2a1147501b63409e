use tracing::warn;

/// Blocking, user-facing notice (validation failures, missing capabilities).
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// Fallback where no dialog is available: the notice only reaches the log.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn alert(&self, message: &str) {
        warn!(notice = message, "user notice");
    }
}

/// `window.alert` in the browser.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNotifier;

#[cfg(target_arch = "wasm32")]
impl Notifier for BrowserNotifier {
    fn alert(&self, message: &str) {
        let shown = web_sys::window().map(|w| w.alert_with_message(message).is_ok());
        if shown != Some(true) {
            LogNotifier.alert(message);
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub type PlatformNotifier = BrowserNotifier;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformNotifier = LogNotifier;
