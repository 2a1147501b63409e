/// Backend origin for native builds when nothing else is configured.
pub const NATIVE_API_BASE: &str = "http://127.0.0.1:5000";

/// Runtime settings for the client.
///
/// A browser bundle has no process environment, so overrides are baked in
/// at compile time through `SMART_TODO_API_BASE` and `SMART_TODO_SPEECH_LANG`.
/// Native builds also read `SMART_TODO_API_BASE` at runtime.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Backend origin, e.g. `http://localhost:5000`. Empty means same origin.
    pub api_base: String,
    /// BCP 47 tag handed to the speech recognizer.
    pub speech_lang: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            api_base: String::new(),
            speech_lang: "en-US".to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        let mut config = ClientConfig::default();
        if let Some(base) = option_env!("SMART_TODO_API_BASE") {
            config.api_base = base.to_string();
        }
        if let Some(lang) = option_env!("SMART_TODO_SPEECH_LANG").filter(|l| !l.is_empty()) {
            config.speech_lang = lang.to_string();
        }
        if config.api_base.is_empty() {
            // reqwest rejects relative URLs on every target
            config.api_base = default_origin();
        }
        config
    }

    /// Join the base and an endpoint path with exactly one slash.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(target_arch = "wasm32")]
fn default_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn default_origin() -> String {
    native_origin(std::env::var("SMART_TODO_API_BASE").ok())
}

#[cfg(not(target_arch = "wasm32"))]
fn native_origin(runtime: Option<String>) -> String {
    runtime
        .filter(|base| !base.trim().is_empty())
        .unwrap_or_else(|| NATIVE_API_BASE.to_string())
}
