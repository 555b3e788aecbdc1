use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::media::application::domain::entities::{ImageTransform, UploadedAsset};
use crate::modules::media::application::domain::policies::upload_policy::UploadRejection;

/// One file as sent by the client: base64 payload, optionally as a
/// `data:<mime>;base64,` URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadImagesCommand {
    pub files: Vec<EncodedImage>,
    pub folder: Option<String>,
    pub transform: ImageTransform,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadImagesError {
    #[error(transparent)]
    Rejected(#[from] UploadRejection),

    #[error("Storage error: {0}")]
    StorageError(String),
}

#[async_trait]
pub trait UploadImagesUseCase: Send + Sync {
    /// All files are validated before anything is sent. Results keep the
    /// order of `command.files`.
    async fn execute(
        &self,
        owner: UserId,
        command: UploadImagesCommand,
    ) -> Result<Vec<UploadedAsset>, UploadImagesError>;
}
