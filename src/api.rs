//! Backend seam. Both endpoints answer with the full current collection.

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::models::{AddTaskRequest, DeleteTaskRequest, Task, TaskListResponse};

pub const ADD_TASK_PATH: &str = "/add_task";
pub const DELETE_TASK_PATH: &str = "/delete_task";

/// The backend as the client sees it. Futures are not `Send`: in the
/// browser they run on the UI thread.
#[async_trait(?Send)]
pub trait TaskApi {
    async fn add_task(&self, request: &AddTaskRequest) -> Result<Vec<Task>>;
    async fn delete_task(&self, request: &DeleteTaskRequest) -> Result<Vec<Task>>;
}

/// JSON-over-HTTP backend.
#[derive(Clone)]
pub struct HttpTaskApi {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpTaskApi {
    pub fn new(config: ClientConfig) -> Self {
        HttpTaskApi {
            client: reqwest::Client::new(),
            config,
        }
    }

    async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Vec<Task>> {
        let url = self.config.endpoint(path);
        debug!(%url, "POST");
        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        parse_task_list(status, &text)
    }
}

#[async_trait(?Send)]
impl TaskApi for HttpTaskApi {
    async fn add_task(&self, request: &AddTaskRequest) -> Result<Vec<Task>> {
        self.post(ADD_TASK_PATH, request).await
    }

    async fn delete_task(&self, request: &DeleteTaskRequest) -> Result<Vec<Task>> {
        self.post(DELETE_TASK_PATH, request).await
    }
}

/// Turn a status and body into the task collection, or the matching error.
pub fn parse_task_list(status: u16, body: &str) -> Result<Vec<Task>> {
    if !(200..300).contains(&status) {
        return Err(ClientError::rejected(status, body));
    }
    let parsed: TaskListResponse = serde_json::from_str(body)?;
    Ok(parsed.tasks)
}
