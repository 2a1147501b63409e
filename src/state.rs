use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::{AddTaskRequest, Priority, Task};

/// Values of the three input fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskForm {
    pub content: String,
    pub priority: Priority,
    /// Raw `datetime-local` value; empty when unset.
    pub remind_at: String,
}

impl TaskForm {
    /// Validate and build the create body. Content is trimmed; an empty
    /// reminder is sent as `null`.
    pub fn to_request(&self) -> Result<AddTaskRequest> {
        let content = self.content.trim();
        if content.is_empty() {
            return Err(ClientError::EmptyContent);
        }
        let remind_at = Some(self.remind_at.trim())
            .filter(|r| !r.is_empty())
            .map(String::from);
        Ok(AddTaskRequest {
            content: content.to_string(),
            priority: self.priority,
            remind_at,
        })
    }

    /// Clear text and reminder after a successful add; priority stays.
    pub fn clear_after_submit(&mut self) {
        self.content.clear();
        self.remind_at.clear();
    }
}

/// Position of a request in issue order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Drops responses that arrive after a newer one was already applied.
#[derive(Clone, Debug, Default)]
pub struct ResponseFence {
    issued: u64,
    applied: u64,
}

impl ResponseFence {
    pub fn issue(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    /// True if the response for `ticket` may replace the list.
    pub fn admit(&mut self, ticket: Ticket) -> bool {
        if ticket.0 > self.applied {
            self.applied = ticket.0;
            true
        } else {
            false
        }
    }
}

/// Everything the page shows. `tasks` is always exactly the collection of
/// the newest applied response.
#[derive(Clone, Debug, Default)]
pub struct ClientState {
    pub tasks: Vec<Task>,
    pub form: TaskForm,
    pub fence: ResponseFence,
}

impl ClientState {
    /// Replace the whole list if `ticket` is still current.
    pub fn replace_tasks(&mut self, ticket: Ticket, tasks: Vec<Task>) -> bool {
        if self.fence.admit(ticket) {
            self.tasks = tasks;
            true
        } else {
            debug!(?ticket, "dropping stale task list");
            false
        }
    }
}

/// Shared handle to [`ClientState`]: a Dioxus signal in the app, a plain
/// `Rc<RefCell<_>>` elsewhere. Borrows never span an await.
pub trait StateCell: Clone + 'static {
    fn inspect<R>(&self, f: impl FnOnce(&ClientState) -> R) -> R;
    fn update<R>(&self, f: impl FnOnce(&mut ClientState) -> R) -> R;
}

impl StateCell for Rc<RefCell<ClientState>> {
    fn inspect<R>(&self, f: impl FnOnce(&ClientState) -> R) -> R {
        f(&self.borrow())
    }

    fn update<R>(&self, f: impl FnOnce(&mut ClientState) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

impl StateCell for Signal<ClientState> {
    fn inspect<R>(&self, f: impl FnOnce(&ClientState) -> R) -> R {
        f(&self.read())
    }

    fn update<R>(&self, f: impl FnOnce(&mut ClientState) -> R) -> R {
        let mut signal = *self;
        let mut guard = signal.write();
        f(&mut guard)
    }
}
