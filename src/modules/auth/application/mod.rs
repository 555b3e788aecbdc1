pub mod domain;
pub mod helpers;
pub mod ports;
