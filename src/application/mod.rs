// Application layer - Use cases and the ports they depend on
pub mod clock;
pub mod dashboard_service;
pub mod session_repository;
