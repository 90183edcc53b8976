use kanban_core::{Board, Task, TaskStatus};
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::state::MoveRequest;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateTaskBody<'a> {
    column_id: &'a str,
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    status: TaskStatus,
}

#[derive(Serialize)]
struct UpdateTaskBody<'a> {
    title: &'a str,
    description: Option<&'a str>,
}

#[derive(Deserialize)]
struct VersionBody {
    version: String,
}

#[derive(Serialize)]
struct CreateBoardBody<'a> {
    title: &'a str,
}

/// Client for the kanban JSON API. One method per route, no retries.
#[derive(Debug, Clone)]
pub struct KanbanClient {
    client: reqwest::Client,
    base_url: String,
}

impl KanbanClient {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let client =
            reqwest::Client::builder().build().map_err(|e| ClientError::ClientInit(e.to_string()))?;
        Ok(Self { client, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `GET /health`: `true` when the server answers with a success status.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let response = self.client.get(self.url("/health")).send().await?;
        Ok(response.status().is_success())
    }

    pub async fn version(&self) -> Result<String, ClientError> {
        let response = self.client.get(self.url("/api/version")).send().await?;
        let body: VersionBody = read_json(response, "version").await?;
        Ok(body.version)
    }

    /// `GET /api/board`: the singleton board, created server-side on first use.
    pub async fn fetch_board(&self) -> Result<Board, ClientError> {
        let response = self.client.get(self.url("/api/board")).send().await?;
        read_json(response, "board").await
    }

    pub async fn create_board(&self, title: &str) -> Result<Board, ClientError> {
        let response =
            self.client.post(self.url("/api/board")).json(&CreateBoardBody { title }).send().await?;
        read_json(response, "created board").await
    }

    pub async fn create_task(
        &self,
        column_id: &str,
        title: &str,
        description: Option<&str>,
        status: TaskStatus,
    ) -> Result<Task, ClientError> {
        let body = CreateTaskBody { column_id, title, description, status };
        let response = self.client.post(self.url("/api/tasks")).json(&body).send().await?;
        read_json(response, "created task").await
    }

    pub async fn move_task(&self, request: &MoveRequest) -> Result<(), ClientError> {
        let response = self.client.post(self.url("/api/tasks/move")).json(request).send().await?;
        check_status(response).await.map(drop)
    }

    pub async fn update_task(
        &self,
        task_id: &str,
        title: &str,
        description: Option<&str>,
    ) -> Result<Task, ClientError> {
        let response = self
            .client
            .put(self.url(&format!("/api/tasks/{task_id}")))
            .json(&UpdateTaskBody { title, description })
            .send()
            .await?;
        read_json(response, "updated task").await
    }

    pub async fn delete_task(&self, task_id: &str) -> Result<Task, ClientError> {
        let response = self.client.delete(self.url(&format!("/api/tasks/{task_id}"))).send().await?;
        read_json(response, "deleted task").await
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_else(|_| "Could not read error body".to_owned());
    Err(ClientError::HttpStatus { code: status.as_u16(), body })
}

async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
    context: &str,
) -> Result<T, ClientError> {
    let body = check_status(response).await?.text().await?;
    serde_json::from_str(&body).map_err(|source| ClientError::JsonParse {
        context: format!("{context} response"),
        source,
    })
}
