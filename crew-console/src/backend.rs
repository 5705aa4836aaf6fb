//! HTTP client for the crew backend

use crew_console_sdk::{
    async_trait, BackendError, BackendResult, Crew, CrewBackend, CrewDescription, RunRequest,
};
use tracing::debug;

/// Backend reached over HTTP at a fixed base address
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

fn transport(err: reqwest::Error) -> BackendError {
    BackendError::Transport(err.to_string())
}

fn check_status(response: reqwest::Response) -> BackendResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(BackendError::Status {
            status: status.as_u16(),
            url: response.url().to_string(),
        })
    }
}

#[async_trait]
impl CrewBackend for HttpBackend {
    async fn get_crew(&self, crew: Crew) -> BackendResult<CrewDescription> {
        let url = self.endpoint("get_crew");
        debug!(%url, crew = crew.key(), "fetching crew description");

        let response = self
            .client
            .get(&url)
            .query(&[("crew_name", crew.key())])
            .send()
            .await
            .map_err(transport)?;
        let body = check_status(response)?.bytes().await.map_err(transport)?;

        serde_json::from_slice(&body).map_err(|e| BackendError::Decode(e.to_string()))
    }

    async fn run_crew(&self, request: &RunRequest) -> BackendResult<Option<String>> {
        let url = self.endpoint("run_crew");
        debug!(%url, crew = request.crew_name.key(), "starting crew run");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(transport)?;
        let body = check_status(response)?.bytes().await.map_err(transport)?;

        if body.is_empty() {
            Ok(None)
        } else {
            Ok(Some(String::from_utf8_lossy(&body).into_owned()))
        }
    }
}
