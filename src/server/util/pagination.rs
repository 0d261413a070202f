//! Offset/limit pagination for collection listings.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::error::AppError;

pub const DEFAULT_OFFSET: u64 = 0;
pub const DEFAULT_LIMIT: u64 = 3;

/// Largest offset or limit the database driver binds as a signed 64-bit integer.
pub const MAX_WINDOW: u64 = i64::MAX as u64;

/// Window requested through the `offset` and `limit` query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Number of rows to skip (default: 0)
    #[serde(default = "default_offset")]
    pub offset: u64,
    /// Page size (default: 3)
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_offset() -> u64 {
    DEFAULT_OFFSET
}

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            offset: DEFAULT_OFFSET,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PaginationParams {
    /// Rejects windows the database cannot represent.
    ///
    /// # Returns
    /// - `Ok(Self)` - Both values fit in `MAX_WINDOW`
    /// - `Err(AppError::Validation)` - `offset` or `limit` exceeds `MAX_WINDOW`
    pub fn validate(self) -> Result<Self, AppError> {
        if self.offset > MAX_WINDOW || self.limit > MAX_WINDOW {
            return Err(AppError::Validation);
        }

        Ok(self)
    }

    /// The window immediately following this one.
    pub fn next(&self) -> Self {
        Self {
            offset: self.offset.saturating_add(self.limit),
            limit: self.limit,
        }
    }

    /// Whether a page of `returned` rows filled the window, meaning more rows may follow.
    ///
    /// An empty window is never full, so `limit=0` produces no `next` link.
    pub fn is_full_page(&self, returned: usize) -> bool {
        self.limit > 0 && returned as u64 == self.limit
    }

    /// Builds the link to the next window on top of `base_url`, which must carry no query.
    pub fn next_link(&self, base_url: &str) -> String {
        let next = self.next();
        format!("{}?offset={}&limit={}", base_url, next.offset, next.limit)
    }
}
