pub mod auth;
pub mod email;
pub mod media;
pub mod portfolio;
pub mod template;
