//! REST backend implementation.
//!
//! | Operation     | Method | Path                        |
//! |---------------|--------|-----------------------------|
//! | List all      | GET    | `/`                         |
//! | List filtered | GET    | `/filter?completed={bool}`  |
//! | Create        | POST   | `/`                         |
//! | Update        | PUT    | `/{id}`                     |
//! | Delete        | DELETE | `/{id}`                     |

use super::{Backend, BackendError, CreateTaskArgs, Task, TaskFilter, TaskId, UpdateTaskArgs};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use std::time::Duration;

/// Task service client speaking JSON over HTTP.
#[derive(Clone, Debug)]
pub struct RestBackend {
    client: Client,
    base_url: Url,
}

impl RestBackend {
    /// Create a backend for the service rooted at `base_url`.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, BackendError> {
        let base_url = Url::parse(base_url).map_err(|e| BackendError::Url(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(BackendError::Url(format!("{} cannot be used as a base URL", base_url)));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| BackendError::Network(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of the collection endpoint, or of `segment` below it.
    fn endpoint(&self, segment: Option<&str>) -> Result<Url, BackendError> {
        let mut url = self.base_url.clone();
        if let Some(segment) = segment {
            url.path_segments_mut()
                .map_err(|_| BackendError::Url(self.base_url.to_string()))?
                .pop_if_empty()
                .push(segment);
        }
        Ok(url)
    }

    fn list_url(&self, filter: TaskFilter) -> Result<Url, BackendError> {
        match filter.completed_param() {
            None => self.endpoint(None),
            Some(completed) => {
                let mut url = self.endpoint(Some("filter"))?;
                url.query_pairs_mut()
                    .append_pair("completed", if completed { "true" } else { "false" });
                Ok(url)
            }
        }
    }

    fn task_url(&self, id: &TaskId) -> Result<Url, BackendError> {
        self.endpoint(Some(&id.to_string()))
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        log::debug!("{} {}", method, url);
        self.client
            .request(method, url)
            .header(CONTENT_TYPE, "application/json")
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, BackendError> {
        let response = request
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        if response.status().is_success() {
            Ok(response)
        } else {
            Err(BackendError::Status {
                status: response.status().as_u16(),
                url: response.url().to_string(),
            })
        }
    }
}

#[async_trait]
impl Backend for RestBackend {
    fn backend_type(&self) -> &str {
        "rest"
    }

    async fn fetch_tasks(&self, filter: TaskFilter) -> Result<Vec<Task>, BackendError> {
        let url = self.list_url(filter)?;
        let response = self.send(self.request(Method::GET, url)).await?;
        response
            .json::<Vec<Task>>()
            .await
            .map_err(|e| BackendError::InvalidData(e.to_string()))
    }

    async fn create_task(&self, args: CreateTaskArgs) -> Result<(), BackendError> {
        let url = self.endpoint(None)?;
        self.send(self.request(Method::POST, url).json(&args)).await?;
        Ok(())
    }

    async fn update_task(&self, id: &TaskId, args: UpdateTaskArgs) -> Result<(), BackendError> {
        let url = self.task_url(id)?;
        self.send(self.request(Method::PUT, url).json(&args)).await?;
        Ok(())
    }

    async fn delete_task(&self, id: &TaskId) -> Result<(), BackendError> {
        let url = self.task_url(id)?;
        self.send(self.request(Method::DELETE, url)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend(base: &str) -> RestBackend {
        RestBackend::new(base, None).unwrap()
    }

    #[test]
    fn list_urls_follow_filter_mapping() {
        let rest = backend("https://tasks.example.com/");
        assert_eq!(rest.list_url(TaskFilter::All).unwrap().as_str(), "https://tasks.example.com/");
        assert_eq!(
            rest.list_url(TaskFilter::Completed).unwrap().as_str(),
            "https://tasks.example.com/filter?completed=true"
        );
        assert_eq!(
            rest.list_url(TaskFilter::Pending).unwrap().as_str(),
            "https://tasks.example.com/filter?completed=false"
        );
    }

    #[test]
    fn paths_join_without_doubled_slashes() {
        let with_slash = backend("https://tasks.example.com/api/");
        let without_slash = backend("https://tasks.example.com/api");

        for rest in [with_slash, without_slash] {
            assert_eq!(
                rest.task_url(&TaskId::Int(7)).unwrap().as_str(),
                "https://tasks.example.com/api/7"
            );
            assert_eq!(
                rest.list_url(TaskFilter::Pending).unwrap().as_str(),
                "https://tasks.example.com/api/filter?completed=false"
            );
        }
    }

    #[test]
    fn string_ids_are_escaped_into_one_segment() {
        let rest = backend("https://tasks.example.com/");
        let url = rest.task_url(&TaskId::Str("a b/c".to_string())).unwrap();
        assert_eq!(url.as_str(), "https://tasks.example.com/a%20b%2Fc");
    }

    #[test]
    fn rejects_non_base_urls() {
        assert!(matches!(RestBackend::new("mailto:me@example.com", None), Err(BackendError::Url(_))));
        assert!(matches!(RestBackend::new("not a url", None), Err(BackendError::Url(_))));
    }
}
