//! Speech-to-text capability used for dictating task text.
//!
//! The browser engine is opaque: once started it may deliver a transcript,
//! report an error, or never call back at all.

use crate::error::{ClientError, Result};

/// Receives the first alternative of the first recognized result.
pub type TranscriptHandler = Box<dyn FnMut(String)>;

pub trait SpeechRecognizer {
    /// Start listening in `lang`. Returns once listening has begun; the
    /// transcript arrives later through `on_result`. A session still open
    /// from an earlier call is stopped first and never delivers.
    fn start(&mut self, lang: &str, on_result: TranscriptHandler) -> Result<()>;

    fn stop(&mut self) {}
}

/// Stand-in for environments without speech recognition.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnavailableSpeech;

impl SpeechRecognizer for UnavailableSpeech {
    fn start(&mut self, _lang: &str, _on_result: TranscriptHandler) -> Result<()> {
        Err(ClientError::SpeechUnavailable)
    }
}

/// Delivers a fixed transcript as soon as it starts. [`ScriptedSpeech::silent`]
/// keeps listening instead until [`ScriptedSpeech::deliver`] is called.
#[derive(Default)]
pub struct ScriptedSpeech {
    transcript: Option<String>,
    pending: Option<TranscriptHandler>,
    pub started_with: Vec<String>,
    pub stopped: usize,
}

impl ScriptedSpeech {
    pub fn saying(transcript: impl Into<String>) -> Self {
        ScriptedSpeech {
            transcript: Some(transcript.into()),
            ..Default::default()
        }
    }

    pub fn silent() -> Self {
        ScriptedSpeech::default()
    }

    pub fn is_listening(&self) -> bool {
        self.pending.is_some()
    }

    /// Hand `text` to the open session, if any.
    pub fn deliver(&mut self, text: impl Into<String>) {
        if let Some(on_result) = self.pending.as_mut() {
            on_result(text.into());
        }
    }
}

impl SpeechRecognizer for ScriptedSpeech {
    fn start(&mut self, lang: &str, mut on_result: TranscriptHandler) -> Result<()> {
        self.stop();
        self.started_with.push(lang.to_string());
        match self.transcript.clone() {
            Some(text) => on_result(text),
            None => self.pending = Some(on_result),
        }
        Ok(())
    }

    fn stop(&mut self) {
        if self.pending.take().is_some() {
            self.stopped += 1;
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserSpeech;

#[cfg(target_arch = "wasm32")]
mod browser {
    use js_sys::{Array, Function, Reflect};
    use tracing::warn;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    use super::{SpeechRecognizer, TranscriptHandler};
    use crate::error::{ClientError, Result};

    /// Web Speech API recognizer (`SpeechRecognition` or the `webkit` prefix).
    #[derive(Default)]
    pub struct BrowserSpeech {
        active: Option<Session>,
    }

    /// Keeps the JS object and its callbacks alive while listening.
    struct Session {
        recognition: JsValue,
        _on_result: Closure<dyn FnMut(JsValue)>,
        _on_error: Closure<dyn FnMut(JsValue)>,
    }

    // The closures are freed right after this runs, so the recognition must
    // not be able to reach them any more.
    impl Drop for Session {
        fn drop(&mut self) {
            for handler in ["onresult", "onerror"] {
                let _ = Reflect::set(&self.recognition, &JsValue::from_str(handler), &JsValue::NULL);
            }
            let abort = Reflect::get(&self.recognition, &JsValue::from_str("abort"))
                .ok()
                .and_then(|f| f.dyn_into::<Function>().ok());
            if let Some(abort) = abort {
                if let Err(e) = abort.call0(&self.recognition) {
                    warn!("failed to abort speech recognition: {e:?}");
                }
            }
        }
    }

    fn js_err(e: JsValue) -> ClientError {
        ClientError::speech(e.as_string().unwrap_or_else(|| format!("{e:?}")))
    }

    fn constructor() -> Option<Function> {
        let window = web_sys::window()?;
        ["SpeechRecognition", "webkitSpeechRecognition"]
            .iter()
            .find_map(|name| {
                Reflect::get(&window, &JsValue::from_str(name))
                    .ok()
                    .filter(|v| v.is_function())
                    .map(|v| v.unchecked_into::<Function>())
            })
    }

    /// `event.results[0][0].transcript`
    fn first_transcript(event: &JsValue) -> Option<String> {
        let results = Reflect::get(event, &JsValue::from_str("results")).ok()?;
        let result = Reflect::get_u32(&results, 0).ok()?;
        let alternative = Reflect::get_u32(&result, 0).ok()?;
        Reflect::get(&alternative, &JsValue::from_str("transcript"))
            .ok()?
            .as_string()
    }

    impl SpeechRecognizer for BrowserSpeech {
        fn start(&mut self, lang: &str, mut on_result: TranscriptHandler) -> Result<()> {
            self.stop();
            let ctor = constructor().ok_or(ClientError::SpeechUnavailable)?;
            let recognition = Reflect::construct(&ctor, &Array::new()).map_err(js_err)?;
            Reflect::set(&recognition, &JsValue::from_str("lang"), &JsValue::from_str(lang))
                .map_err(js_err)?;

            let result_cb = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
                if let Some(text) = first_transcript(&event) {
                    on_result(text);
                }
            });
            let error_cb = Closure::<dyn FnMut(JsValue)>::new(|event: JsValue| {
                let code = Reflect::get(&event, &JsValue::from_str("error"))
                    .ok()
                    .and_then(|v| v.as_string())
                    .unwrap_or_else(|| "unknown".to_string());
                warn!(%code, "speech recognition error");
            });
            Reflect::set(&recognition, &JsValue::from_str("onresult"), result_cb.as_ref())
                .map_err(js_err)?;
            Reflect::set(&recognition, &JsValue::from_str("onerror"), error_cb.as_ref())
                .map_err(js_err)?;

            let start: Function = Reflect::get(&recognition, &JsValue::from_str("start"))
                .map_err(js_err)?
                .dyn_into()
                .map_err(js_err)?;
            start.call0(&recognition).map_err(js_err)?;

            self.active = Some(Session {
                recognition,
                _on_result: result_cb,
                _on_error: error_cb,
            });
            Ok(())
        }

        fn stop(&mut self) {
            self.active = None;
        }
    }
}

/// The recognizer for the platform this build targets.
pub fn platform_speech() -> Box<dyn SpeechRecognizer> {
    #[cfg(target_arch = "wasm32")]
    {
        Box::new(BrowserSpeech::default())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Box::new(UnavailableSpeech)
    }
}
