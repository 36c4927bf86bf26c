use crate::error::{ApiError, Result};
use crate::traits::ApiNetwork;
use crate::types::{ApiRequest, ApiResponse, Body, FormPart};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use std::collections::BTreeMap;

/// [`ApiNetwork`] backed by a `reqwest` client.
pub struct NativeNetwork {
    client: Client,
}

impl NativeNetwork {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

fn transport_error(err: reqwest::Error) -> ApiError {
    ApiError::Network {
        timed_out: err.is_timeout(),
        detail: err.to_string(),
    }
}

fn multipart_form(parts: Vec<FormPart>) -> Result<Form> {
    let mut form = Form::new();
    for part in parts {
        form = match part {
            FormPart::File {
                name,
                file_name,
                content_type,
                bytes,
            } => {
                let file = Part::bytes(bytes.to_vec())
                    .file_name(file_name)
                    .mime_str(&content_type)
                    .map_err(|e| ApiError::Config(e.to_string()))?;
                form.part(name, file)
            }
            FormPart::Text { name, value } => form.text(name, value),
        };
    }
    Ok(form)
}

#[async_trait]
impl ApiNetwork for NativeNetwork {
    async fn fetch(&self, url: &str, request: ApiRequest) -> Result<ApiResponse> {
        let mut req_builder = self.client.request(request.method.clone(), url);

        for (k, v) in &request.headers {
            req_builder = req_builder.header(k, v);
        }

        req_builder = match request.body {
            Body::Empty => req_builder,
            Body::Json(bytes) => req_builder
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(bytes),
            Body::Multipart(parts) => req_builder.multipart(multipart_form(parts)?),
        };

        let response = req_builder.send().await.map_err(transport_error)?;

        let status = response.status().as_u16();
        let mut headers = BTreeMap::new();
        for (k, v) in response.headers() {
            if let Ok(val) = v.to_str() {
                headers.insert(k.as_str().to_string(), val.to_string());
            }
        }

        let body = response.bytes().await.map_err(transport_error)?;

        tracing::trace!("[ApiNetwork] {} {} -> {} ({} bytes)", request.method, url, status, body.len());

        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[test]
    fn test_multipart_form_accepts_parts() {
        let form = multipart_form(vec![
            FormPart::File {
                name: "file".into(),
                file_name: "avatar.png".into(),
                content_type: "image/png".into(),
                bytes: Bytes::from_static(b"\x89PNG"),
            },
            FormPart::Text {
                name: "storeId".into(),
                value: "3".into(),
            },
        ]);
        assert!(form.is_ok());
    }

    #[test]
    fn test_multipart_form_rejects_bad_mime() {
        let form = multipart_form(vec![FormPart::File {
            name: "file".into(),
            file_name: "x".into(),
            content_type: "not a mime".into(),
            bytes: Bytes::new(),
        }]);
        assert!(matches!(form, Err(ApiError::Config(_))));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_failure() {
        let network = NativeNetwork::new(Client::new());
        let result = network
            .fetch("http://127.0.0.1:1/api/user/info", ApiRequest::get("/user/info"))
            .await;
        assert!(matches!(result, Err(ApiError::Network { .. })));
    }
}
