use std::sync::Arc;

use crate::clock::Clock;
use crate::dashboard::{DashboardData, DisplaySettings};
use crate::observability::metrics::Metrics;

pub struct AppState {
    pub data: DashboardData,
    pub settings: DisplaySettings,
    pub clock: Arc<dyn Clock>,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(data: DashboardData, settings: DisplaySettings, clock: Arc<dyn Clock>) -> Self {
        Self {
            data,
            settings,
            clock,
            metrics: Metrics::new(),
        }
    }
}
