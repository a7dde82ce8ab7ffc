use std::sync::Arc;

use ayurveda_core::application::AyurvedaService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: AyurvedaService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: AyurvedaService) -> Self {
        Self { args, service }
    }
}
