mod delete_image;
mod upload_images;

pub use delete_image::*;
pub use upload_images::*;
