use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;

use smart_todo::api::TaskApi;
use smart_todo::controller::{TaskController, SPEECH_UNAVAILABLE_NOTICE};
use smart_todo::error::{ClientError, Result};
use smart_todo::models::{AddTaskRequest, DeleteTaskRequest, Priority, Task, TaskKey};
use smart_todo::notice::Notifier;
use smart_todo::speech::{ScriptedSpeech, UnavailableSpeech};
use smart_todo::state::{ClientState, TaskForm};

type Shared = Rc<RefCell<ClientState>>;

fn task(content: &str, priority: i64) -> Task {
    Task {
        id: None,
        content: content.into(),
        priority: Priority(priority),
        remind_at: None,
    }
}

fn key(content: &str) -> TaskKey {
    TaskKey {
        id: None,
        content: content.into(),
    }
}

fn failure() -> ClientError {
    ClientError::Rejected {
        status: 503,
        message: "backend unavailable".into(),
    }
}

/// Answers each call with the next scripted reply and records the bodies.
#[derive(Clone, Default)]
struct FakeApi {
    adds: Rc<RefCell<Vec<AddTaskRequest>>>,
    deletes: Rc<RefCell<Vec<DeleteTaskRequest>>>,
    replies: Rc<RefCell<VecDeque<Result<Vec<Task>>>>>,
}

impl FakeApi {
    fn replying(replies: impl IntoIterator<Item = Result<Vec<Task>>>) -> Self {
        let api = FakeApi::default();
        api.replies.borrow_mut().extend(replies);
        api
    }

    fn next_reply(&self) -> Result<Vec<Task>> {
        self.replies.borrow_mut().pop_front().unwrap_or_else(|| Ok(Vec::new()))
    }
}

#[async_trait(?Send)]
impl TaskApi for FakeApi {
    async fn add_task(&self, request: &AddTaskRequest) -> Result<Vec<Task>> {
        self.adds.borrow_mut().push(request.clone());
        self.next_reply()
    }

    async fn delete_task(&self, request: &DeleteTaskRequest) -> Result<Vec<Task>> {
        self.deletes.borrow_mut().push(request.clone());
        self.next_reply()
    }
}

/// Holds every call open until the test releases it.
#[derive(Clone, Default)]
struct GatedApi {
    gates: Rc<RefCell<Vec<Option<oneshot::Sender<Vec<Task>>>>>>,
}

impl GatedApi {
    async fn wait(&self) -> Result<Vec<Task>> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().push(Some(tx));
        rx.await.map_err(|_| failure())
    }

    fn opened(&self) -> usize {
        self.gates.borrow().len()
    }

    fn release(&self, index: usize, tasks: Vec<Task>) {
        let tx = self.gates.borrow_mut()[index].take().expect("gate already released");
        tx.send(tasks).expect("request dropped");
    }
}

#[async_trait(?Send)]
impl TaskApi for GatedApi {
    async fn add_task(&self, _request: &AddTaskRequest) -> Result<Vec<Task>> {
        self.wait().await
    }

    async fn delete_task(&self, _request: &DeleteTaskRequest) -> Result<Vec<Task>> {
        self.wait().await
    }
}

#[derive(Clone, Default)]
struct RecordingNotifier {
    alerts: Rc<RefCell<Vec<String>>>,
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

fn setup<A: TaskApi + Clone>(api: A) -> (TaskController<A, Shared, RecordingNotifier>, Shared, RecordingNotifier) {
    let state: Shared = Rc::default();
    let notifier = RecordingNotifier::default();
    let controller = TaskController::new(api, state.clone(), notifier.clone(), "en-US");
    (controller, state, notifier)
}

fn fill_form(state: &Shared, content: &str, priority: Priority, remind_at: &str) {
    state.borrow_mut().form = TaskForm {
        content: content.into(),
        priority,
        remind_at: remind_at.into(),
    };
}

#[tokio::test]
async fn blank_submit_alerts_without_request() {
    let api = FakeApi::default();
    let (controller, state, notifier) = setup(api.clone());
    fill_form(&state, "   ", Priority::HIGH, "2026-10-15T09:30");
    let before = state.borrow().form.clone();

    controller.submit().await;

    assert!(api.adds.borrow().is_empty());
    assert_eq!(*notifier.alerts.borrow(), ["Task content cannot be empty!"]);
    assert_eq!(state.borrow().form, before);
}

#[tokio::test]
async fn submit_sends_trimmed_content_priority_and_reminder() {
    let api = FakeApi::default();
    let (controller, state, _) = setup(api.clone());
    fill_form(&state, "  Buy milk  ", Priority::LOW, "2026-10-15T09:30");

    controller.submit().await;

    let adds = api.adds.borrow();
    assert_eq!(adds.len(), 1);
    assert_eq!(
        adds[0],
        AddTaskRequest {
            content: "Buy milk".into(),
            priority: Priority::LOW,
            remind_at: Some("2026-10-15T09:30".into()),
        }
    );
}

#[tokio::test]
async fn submit_without_reminder_sends_null() {
    let api = FakeApi::default();
    let (controller, state, _) = setup(api.clone());
    fill_form(&state, "Call mom", Priority::MEDIUM, "");

    controller.submit().await;

    assert_eq!(api.adds.borrow()[0].remind_at, None);
}

#[tokio::test]
async fn successful_submit_replaces_list_and_clears_inputs() {
    let api = FakeApi::replying([Ok(vec![task("A", 1), task("B", 3)])]);
    let (controller, state, notifier) = setup(api);
    state.borrow_mut().tasks = vec![task("stale", 2)];
    fill_form(&state, "B", Priority::HIGH, "2026-10-15T09:30");

    controller.submit().await;

    let s = state.borrow();
    assert_eq!(s.tasks, vec![task("A", 1), task("B", 3)]);
    assert_eq!(s.form.content, "");
    assert_eq!(s.form.remind_at, "");
    assert_eq!(s.form.priority, Priority::HIGH);
    assert!(notifier.alerts.borrow().is_empty());
}

#[tokio::test]
async fn failed_submit_keeps_list_and_inputs() {
    let api = FakeApi::replying([Err(failure())]);
    let (controller, state, notifier) = setup(api.clone());
    state.borrow_mut().tasks = vec![task("existing", 2)];
    fill_form(&state, "New", Priority::LOW, "2026-10-15T09:30");
    let before = state.borrow().clone();

    controller.submit().await;

    let s = state.borrow();
    assert_eq!(s.tasks, before.tasks);
    assert_eq!(s.form, before.form);
    assert_eq!(api.adds.borrow().len(), 1);
    assert!(notifier.alerts.borrow().is_empty());
}

#[tokio::test]
async fn delete_sends_content_and_replaces_list() {
    let api = FakeApi::replying([Ok(vec![task("Walk dog", 2)])]);
    let (controller, state, _) = setup(api.clone());
    state.borrow_mut().tasks = vec![task("Buy milk", 1), task("Walk dog", 2)];

    controller.delete(key("Buy milk")).await;

    assert_eq!(
        *api.deletes.borrow(),
        [DeleteTaskRequest {
            task: "Buy milk".into(),
            id: None,
        }]
    );
    assert_eq!(state.borrow().tasks, vec![task("Walk dog", 2)]);
}

#[tokio::test]
async fn delete_by_id_keeps_content_field() {
    let api = FakeApi::default();
    let (controller, _, _) = setup(api.clone());

    controller
        .delete(TaskKey {
            id: Some(12),
            content: "Buy milk".into(),
        })
        .await;

    let body = serde_json::to_value(&api.deletes.borrow()[0]).unwrap();
    assert_eq!(body, serde_json::json!({"task": "Buy milk", "id": 12}));
}

#[tokio::test]
async fn failed_delete_leaves_list_untouched() {
    let api = FakeApi::replying([Err(failure())]);
    let (controller, state, _) = setup(api);
    let rows = vec![task("Buy milk", 1), task("Walk dog", 2)];
    state.borrow_mut().tasks = rows.clone();

    controller.delete(key("Buy milk")).await;

    assert_eq!(state.borrow().tasks, rows);
}

#[tokio::test]
async fn late_response_does_not_overwrite_newer_list() {
    let api = GatedApi::default();
    let (controller, state, _) = setup(api.clone());
    state.borrow_mut().tasks = vec![task("a", 1), task("b", 1), task("c", 1)];

    let first = controller.delete(key("a"));
    let second = controller.delete(key("b"));
    let driver = async {
        while api.opened() < 2 {
            tokio::task::yield_now().await;
        }
        api.release(1, vec![task("c", 1)]);
        while state.borrow().tasks.len() != 1 {
            tokio::task::yield_now().await;
        }
        api.release(0, vec![task("b", 1), task("c", 1)]);
    };
    tokio::join!(first, second, driver);

    assert_eq!(state.borrow().tasks, vec![task("c", 1)]);
}

#[tokio::test]
async fn in_order_responses_all_apply() {
    let api = FakeApi::replying([Ok(vec![task("b", 1)]), Ok(vec![])]);
    let (controller, state, _) = setup(api);

    controller.delete(key("a")).await;
    assert_eq!(state.borrow().tasks, vec![task("b", 1)]);
    controller.delete(key("b")).await;
    assert!(state.borrow().tasks.is_empty());
}

#[test]
fn dictation_overwrites_task_text() {
    let (controller, state, notifier) = setup(FakeApi::default());
    fill_form(&state, "old text", Priority::LOW, "");
    let mut speech = ScriptedSpeech::saying("water the plants");

    controller.dictate(&mut speech);

    assert_eq!(state.borrow().form.content, "water the plants");
    assert_eq!(state.borrow().form.priority, Priority::LOW);
    assert_eq!(speech.started_with, ["en-US"]);
    assert!(notifier.alerts.borrow().is_empty());
}

#[test]
fn dictation_without_result_leaves_form() {
    let (controller, state, _) = setup(FakeApi::default());
    fill_form(&state, "keep me", Priority::MEDIUM, "");

    controller.dictate(&mut ScriptedSpeech::silent());

    assert_eq!(state.borrow().form.content, "keep me");
}

#[test]
fn second_dictation_replaces_first_session() {
    let (controller, state, _) = setup(FakeApi::default());
    let mut speech = ScriptedSpeech::silent();

    controller.dictate(&mut speech);
    controller.dictate(&mut speech);
    speech.deliver("buy bread");

    assert_eq!(speech.stopped, 1);
    assert_eq!(speech.started_with.len(), 2);
    assert_eq!(state.borrow().form.content, "buy bread");
}

#[test]
fn missing_speech_capability_is_reported() {
    let (controller, state, notifier) = setup(FakeApi::default());
    fill_form(&state, "unchanged", Priority::MEDIUM, "");

    controller.dictate(&mut UnavailableSpeech);

    assert_eq!(*notifier.alerts.borrow(), [SPEECH_UNAVAILABLE_NOTICE]);
    assert_eq!(state.borrow().form.content, "unchanged");
}
