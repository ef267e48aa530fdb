// Infrastructure layer - External dependencies and adapters
pub mod clock;
pub mod config;
pub mod html_renderer;
pub mod http_response;
pub mod memory_session_repository;
