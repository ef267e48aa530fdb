// Domain layer - session state, simulation rules and the derived view
pub mod dashboard;
pub mod energy;
pub mod home_state;
pub mod lights;
pub mod sensors;
pub mod session;
