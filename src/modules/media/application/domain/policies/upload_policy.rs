use crate::modules::media::application::domain::entities::ImageType;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadRejection {
    #[error("No files provided")]
    NoFiles,

    #[error("Too many files (max {max}, got {actual})")]
    TooManyFiles { max: usize, actual: usize },

    #[error("File {index} is too large (max {max_bytes} bytes, got {actual_bytes} bytes)")]
    FileTooLarge {
        index: usize,
        max_bytes: usize,
        actual_bytes: usize,
    },

    #[error("File {index} has an unsupported type: {mime}")]
    UnsupportedType { index: usize, mime: String },

    #[error("File {index} content does not match {declared}")]
    ContentMismatch { index: usize, declared: ImageType },

    #[error("File {index} is not valid base64")]
    InvalidEncoding { index: usize },

    #[error("Invalid folder name")]
    InvalidFolder,
}

#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_file_size_bytes: usize,
    pub max_files_per_request: usize,
    /// Number of uploads sent to the CDN concurrently.
    pub batch_size: usize,
    /// Every upload lands under `{root_folder}/{owner}/...`.
    pub root_folder: String,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_file_size_bytes: 5 * 1024 * 1024,
            max_files_per_request: 10,
            batch_size: 3,
            root_folder: Self::DEFAULT_ROOT_FOLDER.to_string(),
        }
    }
}

impl UploadPolicy {
    pub const DEFAULT_ROOT_FOLDER: &'static str = "portfolio-hub";

    /// Root folder from `MEDIA_ROOT_FOLDER`; limits are fixed.
    pub fn from_env() -> Self {
        let root_folder = std::env::var("MEDIA_ROOT_FOLDER")
            .ok()
            .map(|s| s.trim().trim_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_ROOT_FOLDER.to_string());

        Self {
            root_folder,
            ..Self::default()
        }
    }

    /// JSON body ceiling for an upload request: every file base64-encoded
    /// plus room for the surrounding fields.
    pub fn max_request_bytes(&self) -> usize {
        self.max_files_per_request * (self.max_file_size_bytes.div_ceil(3) * 4 + 1024) + 64 * 1024
    }

    pub fn check_count(&self, count: usize) -> Result<(), UploadRejection> {
        if count == 0 {
            return Err(UploadRejection::NoFiles);
        }
        if count > self.max_files_per_request {
            return Err(UploadRejection::TooManyFiles {
                max: self.max_files_per_request,
                actual: count,
            });
        }
        Ok(())
    }

    /// Declared type must be allowed and agree with the decoded bytes.
    pub fn check_file(
        &self,
        index: usize,
        declared_mime: &str,
        bytes: &[u8],
    ) -> Result<ImageType, UploadRejection> {
        if bytes.len() > self.max_file_size_bytes {
            return Err(UploadRejection::FileTooLarge {
                index,
                max_bytes: self.max_file_size_bytes,
                actual_bytes: bytes.len(),
            });
        }

        let declared =
            ImageType::from_mime(declared_mime).ok_or_else(|| UploadRejection::UnsupportedType {
                index,
                mime: declared_mime.to_string(),
            })?;

        match ImageType::sniff(bytes) {
            Some(actual) if actual == declared => Ok(declared),
            _ => Err(UploadRejection::ContentMismatch { index, declared }),
        }
    }

    /// Owner folder plus an optional caller-chosen subfolder of `[a-z0-9_-]`
    /// segments.
    pub fn folder_for(
        &self,
        owner: impl std::fmt::Display,
        subfolder: Option<&str>,
    ) -> Result<String, UploadRejection> {
        let base = format!("{}/{}", self.root_folder, owner);

        let Some(sub) = subfolder.map(|s| s.trim().trim_matches('/')).filter(|s| !s.is_empty())
        else {
            return Ok(base);
        };

        let valid = sub.split('/').all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
        });

        if !valid {
            return Err(UploadRejection::InvalidFolder);
        }

        Ok(format!("{base}/{sub}"))
    }

    /// Public ids returned by the CDN start with the folder they were
    /// uploaded to.
    pub fn owns_public_id(&self, owner: impl std::fmt::Display, public_id: &str) -> bool {
        public_id.starts_with(&format!("{}/{}/", self.root_folder, owner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0];

    #[test]
    fn defaults_match_upload_limits() {
        let policy = UploadPolicy::default();

        assert_eq!(policy.max_file_size_bytes, 5 * 1024 * 1024);
        assert_eq!(policy.max_files_per_request, 10);
        assert_eq!(policy.batch_size, 3);
    }

    #[test]
    fn request_ceiling_fits_ten_encoded_files() {
        let policy = UploadPolicy::default();

        assert!(policy.max_request_bytes() > 10 * (5 * 1024 * 1024) * 4 / 3);
    }

    #[test]
    fn file_count_bounds() {
        let policy = UploadPolicy::default();

        assert_eq!(policy.check_count(0), Err(UploadRejection::NoFiles));
        assert!(policy.check_count(10).is_ok());
        assert_eq!(
            policy.check_count(11),
            Err(UploadRejection::TooManyFiles { max: 10, actual: 11 })
        );
    }

    #[test]
    fn file_checks() {
        let policy = UploadPolicy {
            max_file_size_bytes: 16,
            ..UploadPolicy::default()
        };

        assert_eq!(policy.check_file(0, "image/png", PNG), Ok(ImageType::Png));
        assert_eq!(
            policy.check_file(1, "image/svg+xml", PNG),
            Err(UploadRejection::UnsupportedType {
                index: 1,
                mime: "image/svg+xml".to_string()
            })
        );
        assert_eq!(
            policy.check_file(2, "image/jpeg", PNG),
            Err(UploadRejection::ContentMismatch {
                index: 2,
                declared: ImageType::Jpeg
            })
        );
        assert_eq!(
            policy.check_file(3, "image/png", &[0u8; 17]),
            Err(UploadRejection::FileTooLarge {
                index: 3,
                max_bytes: 16,
                actual_bytes: 17
            })
        );
    }

    #[test]
    fn folders_are_scoped_to_owner() {
        let policy = UploadPolicy::default();

        assert_eq!(policy.folder_for("u1", None).unwrap(), "portfolio-hub/u1");
        assert_eq!(
            policy.folder_for("u1", Some("/projects/cover/")).unwrap(),
            "portfolio-hub/u1/projects/cover"
        );
        assert_eq!(
            policy.folder_for("u1", Some("../u2")),
            Err(UploadRejection::InvalidFolder)
        );
        assert_eq!(
            policy.folder_for("u1", Some("a//b")),
            Err(UploadRejection::InvalidFolder)
        );
    }

    #[test]
    fn public_id_ownership() {
        let policy = UploadPolicy::default();

        assert!(policy.owns_public_id("u1", "portfolio-hub/u1/projects/abc"));
        assert!(!policy.owns_public_id("u1", "portfolio-hub/u10/abc"));
        assert!(!policy.owns_public_id("u1", "elsewhere/u1/abc"));
    }
}
