use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use tracing::info;

use crate::api::HttpTaskApi;
use crate::app_assets::head_nodes;
use crate::config::ClientConfig;
use crate::controller::TaskController;
use crate::notice::PlatformNotifier;
use crate::pages::list::TaskListPage;
use crate::speech::{platform_speech, SpeechRecognizer};
use crate::state::ClientState;

pub type AppController = TaskController<HttpTaskApi, Signal<ClientState>, PlatformNotifier>;

/// The recognizer outlives each dictation so its browser callbacks stay valid.
#[derive(Clone)]
pub struct SpeechHandle(pub Rc<RefCell<Box<dyn SpeechRecognizer>>>);

#[component]
pub fn App() -> Element {
    let state = use_signal(ClientState::default);

    // Wire the three actions once; components pull the controller from context.
    use_context_provider(|| {
        let config = ClientConfig::from_env();
        info!(api_base = %config.api_base, lang = %config.speech_lang, "starting task client");
        let api = HttpTaskApi::new(config.clone());
        AppController::new(api, state, PlatformNotifier::default(), config.speech_lang)
    });
    use_context_provider(|| SpeechHandle(Rc::new(RefCell::new(platform_speech()))));

    rsx! {
        { head_nodes() }
        TaskListPage {}
    }
}
