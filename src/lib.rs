//! Back-office core for a professional-services studio: domain entities,
//! modal-dialog draft engines (work description composer and payment
//! allocator), and a repository layer over the studio REST backend.

pub mod domain;
pub mod drafts;
pub mod forms;
pub mod models;
pub mod repository;
pub mod services;
