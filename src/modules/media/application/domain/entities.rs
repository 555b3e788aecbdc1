use serde::{Deserialize, Serialize};
use std::fmt;

/// Image formats accepted for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageType {
    Jpeg,
    Png,
    Webp,
    Gif,
}

impl ImageType {
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime.trim().to_ascii_lowercase().as_str() {
            "image/jpeg" | "image/jpg" => Some(ImageType::Jpeg),
            "image/png" => Some(ImageType::Png),
            "image/webp" => Some(ImageType::Webp),
            "image/gif" => Some(ImageType::Gif),
            _ => None,
        }
    }

    /// Detects the format from the file's magic bytes.
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [0xFF, 0xD8, 0xFF, ..] => Some(ImageType::Jpeg),
            [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, ..] => Some(ImageType::Png),
            [b'G', b'I', b'F', b'8', b'7' | b'9', b'a', ..] => Some(ImageType::Gif),
            [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => {
                Some(ImageType::Webp)
            }
            _ => None,
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            ImageType::Jpeg => "image/jpeg",
            ImageType::Png => "image/png",
            ImageType::Webp => "image/webp",
            ImageType::Gif => "image/gif",
        }
    }
}

impl fmt::Display for ImageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mime())
    }
}

/// Optional server-side transformation applied by the CDN on upload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageTransform {
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    /// CDN crop mode, e.g. `fill` or `limit`.
    #[serde(default)]
    pub crop: Option<String>,
    /// CDN quality setting, e.g. `auto` or `80`.
    #[serde(default)]
    pub quality: Option<String>,
}

impl ImageTransform {
    pub fn is_empty(&self) -> bool {
        self.width.is_none() && self.height.is_none() && self.crop.is_none() && self.quality.is_none()
    }

    /// Compact CDN notation, e.g. `w_400,h_300,c_fill,q_auto`.
    pub fn to_directive(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }

        let mut parts = Vec::new();
        if let Some(w) = self.width {
            parts.push(format!("w_{w}"));
        }
        if let Some(h) = self.height {
            parts.push(format!("h_{h}"));
        }
        if let Some(crop) = self.crop.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
            parts.push(format!("c_{crop}"));
        }
        if let Some(q) = self.quality.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            parts.push(format!("q_{q}"));
        }

        (!parts.is_empty()).then(|| parts.join(","))
    }
}

/// What the CDN hands back for a stored image. Only `url` ever ends up in a
/// portfolio document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedAsset {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub public_id: String,
}
