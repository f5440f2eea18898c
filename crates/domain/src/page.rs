// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Page-aligned pagination.
//!
//! A requested `(from, size)` pair selects the page containing `from`, not a
//! raw row offset: the page index is `from / size` (floor) and every page
//! holds `size` rows. `from = 7, size = 5` therefore yields rows 5..10.

use crate::error::DomainError;

/// Default page size for list requests.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// A validated page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Page {
    index: i64,
    size: i64,
}

impl Page {
    /// Resolves a `(from, size)` pair to the page containing `from`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPagination` if `from < 0` or `size < 1`.
    pub const fn from_offset(from: i64, size: i64) -> Result<Self, DomainError> {
        if from < 0 || size < 1 {
            return Err(DomainError::InvalidPagination { from, size });
        }
        Ok(Self {
            index: from / size,
            size,
        })
    }

    /// Zero-based page index.
    #[must_use]
    pub const fn index(&self) -> i64 {
        self.index
    }

    /// Rows per page.
    #[must_use]
    pub const fn size(&self) -> i64 {
        self.size
    }

    /// Number of rows to skip before this page.
    #[must_use]
    pub const fn offset(&self) -> i64 {
        self.index.saturating_mul(self.size)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            index: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}
