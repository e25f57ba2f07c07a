//! Transport Layer
//!
//! Sends one GraphQL request to the single remote endpoint, tagged with the tenant header.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::tenant::TenantSlug;

/// Header carrying the active organization slug
pub const DEFAULT_TENANT_HEADER: &str = "X-Organization-Slug";

/// Wire request body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphqlRequest {
    pub query: &'static str,
    #[serde(rename = "operationName")]
    pub operation_name: &'static str,
    pub variables: Value,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphqlErrorEntry {
    pub message: String,
}

/// Wire response body
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GraphqlResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Option<Vec<GraphqlErrorEntry>>,
}

impl GraphqlResponse {
    pub fn data(data: Value) -> Self {
        Self {
            data: Some(data),
            errors: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            data: None,
            errors: Some(vec![GraphqlErrorEntry {
                message: message.into(),
            }]),
        }
    }

    /// Error payload wins over partial data; absence of both is `MissingData`.
    pub fn into_data(self) -> ApiResult<Value> {
        if let Some(errors) = self.errors.filter(|e| !e.is_empty()) {
            return Err(ApiError::Graphql(
                errors.into_iter().map(|e| e.message).collect(),
            ));
        }
        match self.data {
            Some(Value::Null) | None => Err(ApiError::MissingData),
            Some(data) => Ok(data),
        }
    }
}

/// Executes requests against the remote service
#[async_trait(?Send)]
pub trait Transport {
    async fn execute(&self, tenant: &TenantSlug, request: &GraphqlRequest)
        -> ApiResult<GraphqlResponse>;
}

/// HTTP transport over `reqwest` (browser `fetch` on wasm32)
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    endpoint: String,
    tenant_header: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            tenant_header: DEFAULT_TENANT_HEADER.to_string(),
        }
    }

    pub fn with_tenant_header(mut self, header: impl Into<String>) -> Self {
        self.tenant_header = header.into();
        self
    }

}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn execute(
        &self,
        tenant: &TenantSlug,
        request: &GraphqlRequest,
    ) -> ApiResult<GraphqlResponse> {
        let response = self
            .http
            .post(&self.endpoint)
            .header(self.tenant_header.as_str(), tenant.as_str())
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !status.is_success() {
            // graphene answers 400 with a regular error payload
            if let Ok(parsed) = serde_json::from_str::<GraphqlResponse>(&body) {
                if parsed.errors.as_ref().is_some_and(|e| !e.is_empty()) {
                    return Ok(parsed);
                }
            }
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_wire_shape() {
        let request = GraphqlRequest {
            query: "query GetProjects { projects { id } }",
            operation_name: "GetProjects",
            variables: json!({}),
        };
        let wire = serde_json::to_value(&request).unwrap();
        assert_eq!(wire["operationName"], "GetProjects");
        assert_eq!(wire["variables"], json!({}));
    }

    #[test]
    fn test_errors_take_precedence_over_data() {
        let response: GraphqlResponse = serde_json::from_value(json!({
            "data": { "project": null },
            "errors": [{ "message": "Project matching query does not exist." }]
        }))
        .unwrap();
        assert_eq!(
            response.into_data(),
            Err(ApiError::Graphql(vec![
                "Project matching query does not exist.".into()
            ]))
        );
    }

    #[test]
    fn test_missing_data() {
        let response: GraphqlResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(response.into_data(), Err(ApiError::MissingData));
        let response: GraphqlResponse = serde_json::from_value(json!({ "errors": [] })).unwrap();
        assert_eq!(response.into_data(), Err(ApiError::MissingData));
    }
}
