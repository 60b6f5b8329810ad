use reqwest::Client;

use crate::error::AppwriteError;

pub const DEFAULT_ENDPOINT: &str = "https://cloud.appwrite.io/v1";

pub struct AppwriteClient {
    pub(crate) client: Client,
    pub(crate) endpoint: String,
    pub(crate) project_id: String,
    pub(crate) api_key: Option<String>,
}

impl AppwriteClient {
    /// Create a client against the hosted endpoint.
    pub fn new(client: Client, project_id: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            project_id: project_id.into(),
            api_key: None,
        }
    }

    /// Point the client at a self-hosted or test endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Attach a server API key. Without one, requests run with guest access.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint, path)
    }

    /// Attach the project and key headers every request needs.
    pub(crate) fn request(
        &self,
        method: reqwest::Method,
        path: &str,
    ) -> reqwest::RequestBuilder {
        let mut request = self
            .client
            .request(method, self.url(path))
            .header("X-Appwrite-Project", &self.project_id);
        if let Some(key) = &self.api_key {
            request = request.header("X-Appwrite-Key", key);
        }
        request
    }

    pub(crate) async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> crate::Result<T> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(AppwriteError::Api {
                status_code: status.as_u16(),
                message: body,
            });
        }
        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        serde_path_to_error::deserialize(deserializer).map_err(|e| AppwriteError::Json {
            path: e.path().to_string(),
            source: e.into_inner(),
        })
    }
}
