//! Endpoint tables, one module per role.
//!
//! Every function maps typed input onto a fixed method and path and returns
//! the envelope the pipeline produced. None of them touch session state;
//! that is the job of the [`facade`](crate::facade) types.

pub mod admin;
pub mod cart;
pub mod merchant;
pub mod models;
pub mod rider;
pub mod user;

pub use models::*;

use crate::client::ApiClient;
use crate::error::Result;
use crate::types::{ApiRequest, Credential, Envelope, FormPart, Role};
use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// Send `request` tagged with `role`.
pub(crate) async fn send<T: DeserializeOwned>(
    client: &ApiClient,
    role: Role,
    request: ApiRequest,
) -> Result<Envelope<T>> {
    client.call(request.as_role(role)).await
}

/// Send `request` with `body` as its JSON payload, tagged with `role`.
pub(crate) async fn send_json<B, T>(
    client: &ApiClient,
    role: Role,
    request: ApiRequest,
    body: &B,
) -> Result<Envelope<T>>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    send(client, role, request.with_json(body)?).await
}

/// A file to send through one of the image upload endpoints.
#[derive(Clone, Debug, PartialEq)]
pub struct Upload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl Upload {
    /// Content type is guessed from the file extension.
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        let file_name = file_name.into();
        let content_type = guess_content_type(&file_name).to_string();
        Self {
            file_name,
            content_type,
            bytes: bytes.into(),
        }
    }

    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self::new(file_name, bytes))
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }
}

fn guess_content_type(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}

/// Post `file` as the multipart `file` field, plus an optional id field.
///
/// The role's stored token is read here and attached as an explicit bearer
/// credential instead of being left to role resolution. The envelope data is
/// the URL of the stored image.
pub(crate) async fn upload(
    client: &ApiClient,
    role: Role,
    path: &str,
    file: Upload,
    id_field: Option<(&str, i64)>,
) -> Result<Envelope<String>> {
    let token = client.session().stored_token(role).unwrap_or_default();

    let mut request = ApiRequest::post(path)
        .with_part(FormPart::File {
            name: "file".to_string(),
            file_name: file.file_name,
            content_type: file.content_type,
            bytes: file.bytes,
        })
        .with_credential(Credential::Bearer(token));

    if let Some((name, id)) = id_field {
        request = request.with_part(FormPart::Text {
            name: name.to_string(),
            value: id.to_string(),
        });
    }

    client.call(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_guess() {
        assert_eq!(Upload::new("me.PNG", vec![1u8]).content_type, "image/png");
        assert_eq!(Upload::new("a.jpeg", vec![1u8]).content_type, "image/jpeg");
        assert_eq!(
            Upload::new("noext", vec![1u8]).content_type,
            "application/octet-stream"
        );
        assert_eq!(
            Upload::new("a.png", vec![1u8])
                .with_content_type("image/x-custom")
                .content_type,
            "image/x-custom"
        );
    }

    #[tokio::test]
    async fn test_upload_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("avatar.jpg");
        std::fs::write(&path, b"jpeg-bytes").unwrap();

        let upload = Upload::from_path(&path).await.unwrap();
        assert_eq!(upload.file_name, "avatar.jpg");
        assert_eq!(upload.content_type, "image/jpeg");
        assert_eq!(upload.bytes, Bytes::from_static(b"jpeg-bytes"));
    }
}
