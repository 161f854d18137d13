use std::sync::Arc;
use std::time::Instant;

use aadhar_homes_core::application::AadharHomesService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: AadharHomesService,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: AadharHomesService) -> Self {
        Self {
            args,
            service,
            started_at: Instant::now(),
        }
    }
}
