use tracing::{debug, error, info, warn};

use crate::api::TaskApi;
use crate::error::ClientError;
use crate::models::{DeleteTaskRequest, TaskKey};
use crate::notice::Notifier;
use crate::speech::SpeechRecognizer;
use crate::state::StateCell;

pub const SPEECH_UNAVAILABLE_NOTICE: &str = "Voice input is not supported in this browser.";

#[derive(Clone)]
pub struct TaskController<A, S, N> {
    api: A,
    state: S,
    notifier: N,
    speech_lang: String,
}

impl<A, S, N> TaskController<A, S, N>
where
    A: TaskApi,
    S: StateCell,
    N: Notifier,
{
    pub fn new(api: A, state: S, notifier: N, speech_lang: impl Into<String>) -> Self {
        TaskController {
            api,
            state,
            notifier,
            speech_lang: speech_lang.into(),
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub async fn submit(&self) {
        let request = match self.state.inspect(|s| s.form.to_request()) {
            Ok(request) => request,
            Err(err) => {
                self.notifier.alert(&err.to_string());
                return;
            }
        };
        let ticket = self.state.update(|s| s.fence.issue());
        match self.api.add_task(&request).await {
            Ok(tasks) => self.state.update(|s| {
                s.replace_tasks(ticket, tasks);
                s.form.clear_after_submit();
            }),
            Err(err) => error!("Error adding task: {err}"),
        }
    }

    pub async fn delete(&self, key: TaskKey) {
        let request = DeleteTaskRequest::from(&key);
        let ticket = self.state.update(|s| s.fence.issue());
        match self.api.delete_task(&request).await {
            Ok(tasks) => {
                debug!(remaining = tasks.len(), "updated task list");
                self.state.update(|s| s.replace_tasks(ticket, tasks));
            }
            Err(err) => error!(task = %key, "Error deleting task: {err}"),
        }
    }

    /// The first transcript overwrites the task text.
    pub fn dictate(&self, recognizer: &mut dyn SpeechRecognizer) {
        let state = self.state.clone();
        let on_result = Box::new(move |transcript: String| {
            state.update(|s| s.form.content = transcript);
        });
        match recognizer.start(&self.speech_lang, on_result) {
            Ok(()) => info!(lang = %self.speech_lang, "listening for task text"),
            Err(ClientError::SpeechUnavailable) => {
                warn!("speech recognition unavailable");
                self.notifier.alert(SPEECH_UNAVAILABLE_NOTICE);
            }
            Err(err) => warn!("Error starting voice input: {err}"),
        }
    }
}
