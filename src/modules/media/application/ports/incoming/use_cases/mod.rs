mod delete_image;
mod upload_images;

pub use delete_image::{DeleteImageError, DeleteImageUseCase};
pub use upload_images::{EncodedImage, UploadImagesCommand, UploadImagesError, UploadImagesUseCase};
