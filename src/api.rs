//! Task Service Client
//!
//! One async call per backend endpoint. Each call makes a single attempt:
//! no retries and no client-side timeout.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{ClientError, Result};
use crate::models::{AccessToken, Credentials, RegisteredUser, Task, TaskDraft, TaskId};

// ========================
// Endpoints
// ========================

const REGISTER_PATH: &str = "/register/";
const TOKEN_PATH: &str = "/token";
const LIST_TASKS_PATH: &str = "/get_tasks/";
const CREATE_TASK_PATH: &str = "/create_task/";

fn task_path(id: TaskId) -> String {
    format!("/tasks/{id}")
}

/// Backend operations used by the controller
#[async_trait(?Send)]
pub trait TaskApi {
    async fn register(&self, credentials: &Credentials) -> Result<RegisteredUser>;
    async fn login(&self, credentials: &Credentials) -> Result<AccessToken>;
    async fn list_tasks(&self, token: &str) -> Result<Vec<Task>>;
    async fn get_task(&self, token: &str, id: TaskId) -> Result<Task>;
    async fn create_task(&self, token: &str, draft: &TaskDraft) -> Result<Task>;
    async fn update_task(&self, token: &str, id: TaskId, draft: &TaskDraft) -> Result<Task>;
    async fn delete_task(&self, token: &str, id: TaskId) -> Result<()>;
}

/// Non-2xx body shape: `{"detail": "..."}`
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Build the error for a failed response. Falls back to `fallback` when the
/// body is not JSON or `detail` is missing or not a string.
pub fn request_error(status: u16, body: &str, fallback: &str) -> ClientError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.detail)
        .unwrap_or_else(|| fallback.to_string());
    ClientError::Request { status, message }
}

async fn ensure_success(response: Response, fallback: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(request_error(status.as_u16(), &body, fallback))
}

async fn send_json<T: DeserializeOwned>(request: RequestBuilder, fallback: &str) -> Result<T> {
    let response = ensure_success(request.send().await?, fallback).await?;
    Ok(response.json::<T>().await?)
}

/// HTTP implementation over `reqwest` (browser `fetch` on wasm32)
#[derive(Debug, Clone)]
pub struct HttpTaskApi {
    client: Client,
    base_url: String,
}

impl HttpTaskApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn register_request(&self, credentials: &Credentials) -> RequestBuilder {
        self.client.post(self.url(REGISTER_PATH)).json(credentials)
    }

    /// The token endpoint takes an OAuth2 password form, not JSON
    fn login_request(&self, credentials: &Credentials) -> RequestBuilder {
        self.client.post(self.url(TOKEN_PATH)).form(credentials)
    }

    fn list_tasks_request(&self, token: &str) -> RequestBuilder {
        self.client.get(self.url(LIST_TASKS_PATH)).bearer_auth(token)
    }

    fn get_task_request(&self, token: &str, id: TaskId) -> RequestBuilder {
        self.client.get(self.url(&task_path(id))).bearer_auth(token)
    }

    fn create_task_request(&self, token: &str, draft: &TaskDraft) -> RequestBuilder {
        self.client
            .post(self.url(CREATE_TASK_PATH))
            .bearer_auth(token)
            .json(draft)
    }

    fn update_task_request(&self, token: &str, id: TaskId, draft: &TaskDraft) -> RequestBuilder {
        self.client.put(self.url(&task_path(id))).bearer_auth(token).json(draft)
    }

    fn delete_task_request(&self, token: &str, id: TaskId) -> RequestBuilder {
        self.client.delete(self.url(&task_path(id))).bearer_auth(token)
    }
}

#[async_trait(?Send)]
impl TaskApi for HttpTaskApi {
    async fn register(&self, credentials: &Credentials) -> Result<RegisteredUser> {
        log::debug!("POST {REGISTER_PATH}");
        send_json(self.register_request(credentials), "Registration failed").await
    }

    async fn login(&self, credentials: &Credentials) -> Result<AccessToken> {
        log::debug!("POST {TOKEN_PATH}");
        send_json(self.login_request(credentials), "Login failed").await
    }

    async fn list_tasks(&self, token: &str) -> Result<Vec<Task>> {
        log::debug!("GET {LIST_TASKS_PATH}");
        send_json(self.list_tasks_request(token), "Failed to fetch tasks").await
    }

    async fn get_task(&self, token: &str, id: TaskId) -> Result<Task> {
        log::debug!("GET {}", task_path(id));
        send_json(self.get_task_request(token, id), "Failed to fetch task for update").await
    }

    async fn create_task(&self, token: &str, draft: &TaskDraft) -> Result<Task> {
        log::debug!("POST {CREATE_TASK_PATH}");
        send_json(self.create_task_request(token, draft), "Failed to create task").await
    }

    async fn update_task(&self, token: &str, id: TaskId, draft: &TaskDraft) -> Result<Task> {
        log::debug!("PUT {}", task_path(id));
        send_json(self.update_task_request(token, id, draft), "Failed to update task").await
    }

    async fn delete_task(&self, token: &str, id: TaskId) -> Result<()> {
        log::debug!("DELETE {}", task_path(id));
        // 204, nothing to parse
        let response = self.delete_task_request(token, id).send().await?;
        ensure_success(response, "Failed to delete task").await?;
        Ok(())
    }
}
