use axum::{extract::State, Json};
use std::sync::Arc;

use crate::domain::stats::{StatsResponse, StatsService, StatsServiceApi};

pub struct StatsController {
    stats_service: Arc<StatsService>,
}

impl StatsController {
    pub fn new(stats_service: Arc<StatsService>) -> Self {
        Self { stats_service }
    }

    /// GET /api/stats - Recording progress
    pub async fn get_stats(State(controller): State<Arc<StatsController>>) -> Json<StatsResponse> {
        Json(controller.stats_service.get_stats().await)
    }
}
