pub mod service;

pub use service::{StatsService, StatsServiceApi};

use serde::{Deserialize, Serialize};

/// Response for GET /api/stats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsResponse {
    pub recorded: usize,
    pub total: usize,
    /// Total recorded seconds
    pub duration: u64,
    pub quality: String,
    pub percentage: u32,
}
