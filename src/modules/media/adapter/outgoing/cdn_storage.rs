use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use chrono::Utc;
use reqwest::StatusCode;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;
use tracing::debug;

use crate::modules::media::application::domain::entities::UploadedAsset;
use crate::modules::media::application::ports::outgoing::{
    AssetStorage, AssetStorageError, AssetUpload,
};

/// Upper bound for a single CDN request, upload included.
pub const CDN_TIMEOUT: Duration = Duration::from_secs(20);

// ============================================================================
// Configuration
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CdnConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
}

#[derive(Clone)]
pub struct CdnConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    pub base_url: String,
}

impl fmt::Debug for CdnConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CdnConfig")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl CdnConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.cloudinary.com/v1_1";

    pub fn from_env() -> Result<Self, CdnConfigError> {
        let required = |key: &'static str| {
            std::env::var(key)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .ok_or(CdnConfigError::Missing(key))
        };

        Ok(Self {
            cloud_name: required("CDN_CLOUD_NAME")?,
            api_key: required("CDN_API_KEY")?,
            api_secret: required("CDN_API_SECRET")?,
            base_url: std::env::var("CDN_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string()),
        })
    }
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
    width: u32,
    height: u32,
    public_id: String,
}

#[derive(Debug, Deserialize)]
struct DestroyResponse {
    result: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

// ============================================================================
// Adapter
// ============================================================================

/// Signed REST client for the image CDN. Constructed once in `main` and
/// injected into the media services.
#[derive(Clone)]
pub struct CdnAssetStorage {
    config: CdnConfig,
    client: reqwest::Client,
}

impl CdnAssetStorage {
    pub fn new(config: CdnConfig) -> Result<Self, AssetStorageError> {
        let client = reqwest::Client::builder()
            .timeout(CDN_TIMEOUT)
            .build()
            .map_err(|e| AssetStorageError::Unavailable(e.to_string()))?;

        Ok(Self { config, client })
    }

    fn endpoint(&self, action: &str) -> String {
        format!(
            "{}/{}/image/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.cloud_name,
            action
        )
    }

    /// `sha256("k1=v1&k2=v2..." + secret)` over the sorted signed params.
    fn sign(&self, params: &BTreeMap<&'static str, String>) -> String {
        let to_sign = params
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");

        let mut hasher = Sha256::new();
        hasher.update(to_sign.as_bytes());
        hasher.update(self.config.api_secret.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Adds timestamp and signature, then the unsigned credentials.
    fn signed(
        &self,
        mut params: BTreeMap<&'static str, String>,
        timestamp: i64,
    ) -> BTreeMap<&'static str, String> {
        params.insert("timestamp", timestamp.to_string());
        let signature = self.sign(&params);

        params.insert("signature", signature);
        params.insert("signature_algorithm", "sha256".to_string());
        params.insert("api_key", self.config.api_key.clone());
        params
    }

    async fn post(
        &self,
        action: &str,
        body: &BTreeMap<&'static str, String>,
    ) -> Result<String, AssetStorageError> {
        let response = self
            .client
            .post(self.endpoint(action))
            .json(body)
            .send()
            .await
            .map_err(|e| AssetStorageError::Unavailable(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AssetStorageError::Unavailable(e.to_string()))?;

        if status.is_success() {
            Ok(text)
        } else {
            Err(map_failure(status, &text))
        }
    }
}

fn map_failure(status: StatusCode, body: &str) -> AssetStorageError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| format!("HTTP {status}"));

    if status == StatusCode::NOT_FOUND {
        AssetStorageError::NotFound
    } else if status.is_client_error() {
        AssetStorageError::Rejected(message)
    } else {
        AssetStorageError::Unavailable(message)
    }
}

fn malformed(e: serde_json::Error) -> AssetStorageError {
    AssetStorageError::Unavailable(format!("Malformed CDN response: {e}"))
}

#[async_trait]
impl AssetStorage for CdnAssetStorage {
    async fn upload(&self, upload: AssetUpload) -> Result<UploadedAsset, AssetStorageError> {
        let mut params = BTreeMap::new();
        params.insert("folder", upload.folder.clone());
        if let Some(directive) = upload.transform.to_directive() {
            params.insert("transformation", directive);
        }

        let mut body = self.signed(params, Utc::now().timestamp());
        body.insert(
            "file",
            format!(
                "data:{};base64,{}",
                upload.image_type.mime(),
                general_purpose::STANDARD.encode(&upload.bytes)
            ),
        );

        let text = self.post("upload", &body).await?;
        let parsed: UploadResponse = serde_json::from_str(&text).map_err(malformed)?;

        debug!(public_id = %parsed.public_id, bytes = upload.bytes.len(), "Asset stored on CDN");

        Ok(UploadedAsset {
            url: parsed.secure_url,
            width: parsed.width,
            height: parsed.height,
            public_id: parsed.public_id,
        })
    }

    async fn delete(&self, public_id: &str) -> Result<(), AssetStorageError> {
        let mut params = BTreeMap::new();
        params.insert("public_id", public_id.to_string());

        let body = self.signed(params, Utc::now().timestamp());
        let text = self.post("destroy", &body).await?;
        let parsed: DestroyResponse = serde_json::from_str(&text).map_err(malformed)?;

        match parsed.result.as_str() {
            "ok" => Ok(()),
            "not found" => Err(AssetStorageError::NotFound),
            other => Err(AssetStorageError::Rejected(other.to_string())),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
