pub mod cdn_storage;

pub use cdn_storage::{CdnAssetStorage, CdnConfig};
