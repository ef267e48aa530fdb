// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
    pub cookie_name: String,
}
