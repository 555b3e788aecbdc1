mod delete_image_service;
mod upload_images_service;

pub use delete_image_service::DeleteImageService;
pub use upload_images_service::UploadImagesService;
