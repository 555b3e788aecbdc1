use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use futures::future::join_all;
use tracing::{error, info, warn};

use crate::auth::application::domain::entities::UserId;
use crate::modules::media::application::domain::entities::UploadedAsset;
use crate::modules::media::application::domain::policies::upload_policy::{
    UploadPolicy, UploadRejection,
};
use crate::modules::media::application::ports::incoming::use_cases::{
    EncodedImage, UploadImagesCommand, UploadImagesError, UploadImagesUseCase,
};
use crate::modules::media::application::ports::outgoing::{AssetStorage, AssetUpload};

pub struct UploadImagesService<S>
where
    S: AssetStorage,
{
    storage: S,
    policy: UploadPolicy,
}

impl<S> UploadImagesService<S>
where
    S: AssetStorage,
{
    pub fn new(storage: S, policy: UploadPolicy) -> Self {
        Self { storage, policy }
    }

    /// Best effort: a failed request should not leave orphans on the CDN.
    async fn discard(&self, uploaded: &[UploadedAsset]) {
        let results = join_all(uploaded.iter().map(|a| self.storage.delete(&a.public_id))).await;

        for (asset, result) in uploaded.iter().zip(results) {
            if let Err(e) = result {
                warn!(public_id = %asset.public_id, error = %e, "Could not discard uploaded asset");
            }
        }
    }
}

/// Returns the effective mime type and the decoded bytes.
fn decode(index: usize, image: &EncodedImage) -> Result<(String, Vec<u8>), UploadRejection> {
    let (uri_mime, payload) = match image.data.strip_prefix("data:") {
        Some(rest) => {
            let (header, payload) = rest
                .split_once(',')
                .ok_or(UploadRejection::InvalidEncoding { index })?;
            (header.strip_suffix(";base64"), payload)
        }
        None => (None, image.data.as_str()),
    };

    let mime = match image.mime_type.trim() {
        "" => uri_mime.unwrap_or_default().to_string(),
        declared => declared.to_string(),
    };

    let bytes = general_purpose::STANDARD
        .decode(payload.trim())
        .map_err(|_| UploadRejection::InvalidEncoding { index })?;

    Ok((mime, bytes))
}

#[async_trait]
impl<S> UploadImagesUseCase for UploadImagesService<S>
where
    S: AssetStorage + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        command: UploadImagesCommand,
    ) -> Result<Vec<UploadedAsset>, UploadImagesError> {
        self.policy.check_count(command.files.len())?;
        let folder = self.policy.folder_for(owner, command.folder.as_deref())?;

        let mut prepared = Vec::with_capacity(command.files.len());
        for (index, file) in command.files.iter().enumerate() {
            let (mime, bytes) = decode(index, file)?;
            let image_type = self.policy.check_file(index, &mime, &bytes)?;

            prepared.push(AssetUpload {
                bytes,
                image_type,
                folder: folder.clone(),
                transform: command.transform.clone(),
            });
        }

        let total = prepared.len();
        let batch_size = self.policy.batch_size.max(1);
        let mut pending = prepared.into_iter();
        let mut uploaded = Vec::with_capacity(total);

        loop {
            let batch: Vec<AssetUpload> = pending.by_ref().take(batch_size).collect();
            if batch.is_empty() {
                break;
            }

            let results = join_all(batch.into_iter().map(|u| self.storage.upload(u))).await;

            let mut failure = None;
            for result in results {
                match result {
                    Ok(asset) => uploaded.push(asset),
                    Err(e) => {
                        failure.get_or_insert(e);
                    }
                }
            }

            if let Some(e) = failure {
                error!(owner = %owner, error = %e, "Image upload failed");
                self.discard(&uploaded).await;
                return Err(UploadImagesError::StorageError(e.to_string()));
            }
        }

        info!(owner = %owner, count = total, folder = %folder, "Images uploaded");
        Ok(uploaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use uuid::Uuid;

    use crate::modules::media::application::domain::entities::{ImageTransform, ImageType};
    use crate::modules::media::application::ports::outgoing::AssetStorageError;

    const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 1, 2, 3];

    // ----------------------------
    // Mock storage
    // ----------------------------

    #[derive(Clone, Default)]
    struct MockStorage {
        calls: Arc<AtomicUsize>,
        in_flight: Arc<AtomicUsize>,
        max_in_flight: Arc<AtomicUsize>,
        fail_on_call: Option<usize>,
        uploads: Arc<Mutex<Vec<AssetUpload>>>,
        deleted: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl AssetStorage for MockStorage {
        async fn upload(&self, upload: AssetUpload) -> Result<UploadedAsset, AssetStorageError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);

            tokio::time::sleep(Duration::from_millis(5)).await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);

            if self.fail_on_call == Some(call) {
                return Err(AssetStorageError::Unavailable("timeout".to_string()));
            }

            let public_id = format!("{}/img-{call}", upload.folder);
            self.uploads.lock().unwrap().push(upload);
            Ok(UploadedAsset {
                url: format!("https://cdn.test/{public_id}.png"),
                width: 640,
                height: 480,
                public_id,
            })
        }

        async fn delete(&self, public_id: &str) -> Result<(), AssetStorageError> {
            self.deleted.lock().unwrap().push(public_id.to_string());
            Ok(())
        }
    }

    // ----------------------------
    // Helpers
    // ----------------------------

    fn png_file() -> EncodedImage {
        EncodedImage {
            mime_type: "image/png".to_string(),
            data: general_purpose::STANDARD.encode(PNG),
        }
    }

    fn command(files: Vec<EncodedImage>) -> UploadImagesCommand {
        UploadImagesCommand {
            files,
            folder: Some("projects".to_string()),
            transform: ImageTransform::default(),
        }
    }

    fn service(storage: MockStorage) -> UploadImagesService<MockStorage> {
        UploadImagesService::new(storage, UploadPolicy::default())
    }

    // ----------------------------
    // Tests
    // ----------------------------

    #[tokio::test]
    async fn uploads_into_owner_folder() {
        let storage = MockStorage::default();
        let owner = UserId::from(Uuid::new_v4());

        let assets = service(storage.clone())
            .execute(owner, command(vec![png_file()]))
            .await
            .unwrap();

        assert_eq!(assets.len(), 1);
        assert_eq!(assets[0].width, 640);
        let uploads = storage.uploads.lock().unwrap();
        assert_eq!(uploads[0].folder, format!("portfolio-hub/{owner}/projects"));
        assert_eq!(uploads[0].image_type, ImageType::Png);
        assert_eq!(uploads[0].bytes, PNG);
    }

    #[tokio::test]
    async fn accepts_data_uris_without_declared_type() {
        let storage = MockStorage::default();
        let file = EncodedImage {
            mime_type: String::new(),
            data: format!("data:image/png;base64,{}", general_purpose::STANDARD.encode(PNG)),
        };

        let result = service(storage)
            .execute(UserId::from(Uuid::new_v4()), command(vec![file]))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn uploads_run_in_batches_of_three() {
        let storage = MockStorage::default();

        let assets = service(storage.clone())
            .execute(UserId::from(Uuid::new_v4()), command(vec![png_file(); 7]))
            .await
            .unwrap();

        assert_eq!(assets.len(), 7);
        assert_eq!(storage.calls.load(Ordering::SeqCst), 7);
        assert_eq!(storage.max_in_flight.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn invalid_file_rejects_whole_request_before_uploading() {
        let storage = MockStorage::default();
        let bad = EncodedImage {
            mime_type: "image/png".to_string(),
            data: "not base64!".to_string(),
        };

        let result = service(storage.clone())
            .execute(
                UserId::from(Uuid::new_v4()),
                command(vec![png_file(), bad]),
            )
            .await;

        assert_eq!(
            result,
            Err(UploadImagesError::Rejected(UploadRejection::InvalidEncoding {
                index: 1
            }))
        );
        assert_eq!(storage.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn too_many_files_are_rejected() {
        let result = service(MockStorage::default())
            .execute(UserId::from(Uuid::new_v4()), command(vec![png_file(); 11]))
            .await;

        assert_eq!(
            result,
            Err(UploadImagesError::Rejected(UploadRejection::TooManyFiles {
                max: 10,
                actual: 11
            }))
        );
    }

    #[tokio::test]
    async fn storage_failure_discards_uploaded_assets() {
        let storage = MockStorage {
            fail_on_call: Some(2),
            ..MockStorage::default()
        };

        let result = service(storage.clone())
            .execute(UserId::from(Uuid::new_v4()), command(vec![png_file(); 5]))
            .await;

        assert!(matches!(result, Err(UploadImagesError::StorageError(_))));
        assert_eq!(storage.calls.load(Ordering::SeqCst), 3);
        assert_eq!(storage.deleted.lock().unwrap().len(), 2);
    }
}
