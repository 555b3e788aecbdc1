use std::sync::Arc;

use crate::modules::media::application::ports::incoming::use_cases::{
    DeleteImageUseCase, UploadImagesUseCase,
};

#[derive(Clone)]
pub struct MediaUseCases {
    pub upload: Arc<dyn UploadImagesUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteImageUseCase + Send + Sync>,
}
