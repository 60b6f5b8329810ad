use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::AppwriteClient;

/// Server-side unique ID sentinel.
const UNIQUE_ID: &str = "unique()";

/// A stored document: system `$id` plus the collection attributes.
#[derive(Debug, Clone, Deserialize)]
pub struct Document<T> {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(flatten)]
    pub data: T,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DocumentList<T> {
    pub total: i64,
    pub documents: Vec<Document<T>>,
}

impl AppwriteClient {
    /// List documents in a collection, filtered and ordered by `queries`.
    /// GET /databases/{db}/collections/{collection}/documents
    pub async fn list_documents<T: DeserializeOwned>(
        &self,
        database_id: &str,
        collection_id: &str,
        queries: &[String],
    ) -> crate::Result<DocumentList<T>> {
        let path = format!(
            "/databases/{}/collections/{}/documents",
            database_id, collection_id
        );
        let query: Vec<(&str, &str)> = queries.iter().map(|q| ("queries[]", q.as_str())).collect();
        let response = self
            .request(Method::GET, &path)
            .query(&query)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Create a document with a server-generated ID.
    /// POST /databases/{db}/collections/{collection}/documents
    pub async fn create_document<T: Serialize, R: DeserializeOwned>(
        &self,
        database_id: &str,
        collection_id: &str,
        data: &T,
    ) -> crate::Result<Document<R>> {
        let path = format!(
            "/databases/{}/collections/{}/documents",
            database_id, collection_id
        );
        let response = self
            .request(Method::POST, &path)
            .json(&json!({
                "documentId": UNIQUE_ID,
                "data": data,
            }))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Patch selected attributes of an existing document.
    /// PATCH /databases/{db}/collections/{collection}/documents/{id}
    pub async fn update_document<T: Serialize, R: DeserializeOwned>(
        &self,
        database_id: &str,
        collection_id: &str,
        document_id: &str,
        data: &T,
    ) -> crate::Result<Document<R>> {
        let path = format!(
            "/databases/{}/collections/{}/documents/{}",
            database_id, collection_id, document_id
        );
        let response = self
            .request(Method::PATCH, &path)
            .json(&json!({ "data": data }))
            .send()
            .await?;
        self.handle_response(response).await
    }
}
