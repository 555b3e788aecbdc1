pub mod autofill;
pub mod content;
pub mod customization;
pub mod entities;
pub mod profile;
pub mod render;
pub mod section_edit;
pub mod slug;
pub mod styling;
