use async_trait::async_trait;

use crate::modules::media::application::domain::entities::{
    ImageTransform, ImageType, UploadedAsset,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetUpload {
    pub bytes: Vec<u8>,
    pub image_type: ImageType,
    pub folder: String,
    pub transform: ImageTransform,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssetStorageError {
    #[error("Asset not found")]
    NotFound,

    #[error("Storage rejected the request: {0}")]
    Rejected(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Remote image store (CDN). Bytes go in, a public URL comes out.
#[async_trait]
pub trait AssetStorage: Send + Sync {
    async fn upload(&self, upload: AssetUpload) -> Result<UploadedAsset, AssetStorageError>;

    async fn delete(&self, public_id: &str) -> Result<(), AssetStorageError>;
}
