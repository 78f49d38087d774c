pub mod client;
pub mod payment;
pub mod property;
pub mod service;
pub mod subject;
pub mod types;
pub mod work;
