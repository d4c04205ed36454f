//! Query Parameters

use serde::Deserialize;

fn default_limit() -> usize {
    20
}

/// Query parameters for list endpoints
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ListQuery {
    /// Maximum number of items; 0 returns everything.
    /// Unsigned, so a negative `?limit=` is rejected with a 400.
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            limit: default_limit(),
        }
    }
}
