use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::auth::application::domain::entities::UserId;
use crate::modules::media::application::domain::policies::upload_policy::UploadPolicy;
use crate::modules::media::application::ports::incoming::use_cases::{
    DeleteImageError, DeleteImageUseCase,
};
use crate::modules::media::application::ports::outgoing::{AssetStorage, AssetStorageError};

pub struct DeleteImageService<S>
where
    S: AssetStorage,
{
    storage: S,
    policy: UploadPolicy,
}

impl<S> DeleteImageService<S>
where
    S: AssetStorage,
{
    pub fn new(storage: S, policy: UploadPolicy) -> Self {
        Self { storage, policy }
    }
}

#[async_trait]
impl<S> DeleteImageUseCase for DeleteImageService<S>
where
    S: AssetStorage + Send + Sync,
{
    async fn execute(&self, owner: UserId, public_id: &str) -> Result<(), DeleteImageError> {
        let public_id = public_id.trim();

        if !self.policy.owns_public_id(owner, public_id) {
            warn!(owner = %owner, public_id = %public_id, "Refusing to delete foreign asset");
            return Err(DeleteImageError::Forbidden);
        }

        match self.storage.delete(public_id).await {
            Ok(()) => {
                info!(owner = %owner, public_id = %public_id, "Image deleted");
                Ok(())
            }
            Err(AssetStorageError::NotFound) => Err(DeleteImageError::NotFound),
            Err(e) => {
                error!(public_id = %public_id, error = %e, "Image delete failed");
                Err(DeleteImageError::StorageError(e.to_string()))
            }
        }
    }
}
