pub mod admin_service;
pub mod content_service;
