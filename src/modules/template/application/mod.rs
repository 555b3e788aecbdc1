pub mod domain;
pub mod ports;
pub mod service;
pub mod template_use_cases;
