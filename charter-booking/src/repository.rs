use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{BookingDetails, BookingRequest, BookingStatus};

/// Listing filter for the back-office views. The status filter is kept as
/// the raw query text on purpose: an unknown status simply matches nothing
/// instead of failing the request.
#[derive(Debug, Clone, Default)]
pub struct BookingFilter {
    pub city_slug: Option<String>,
    pub status: Option<String>,
}

/// One page of a listing. Values arrive straight from query parameters and
/// are clamped to at least one.
#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl PageRequest {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, 20)
    }
}

/// Persistence boundary for booking requests
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Persist a freshly constructed booking.
    async fn insert(
        &self,
        booking: &BookingRequest,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Load one booking with its city and vehicle associations.
    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<BookingDetails>, Box<dyn std::error::Error + Send + Sync>>;

    /// Newest-first page of bookings plus the total row count for the
    /// same filter.
    async fn list(
        &self,
        filter: &BookingFilter,
        page: PageRequest,
    ) -> Result<(Vec<BookingDetails>, u64), Box<dyn std::error::Error + Send + Sync>>;

    /// Apply a status to an existing booking; `None` when the id is unknown.
    async fn update_status(
        &self,
        id: Uuid,
        status: BookingStatus,
    ) -> Result<Option<BookingDetails>, Box<dyn std::error::Error + Send + Sync>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_are_clamped_and_offset_is_zero_based() {
        let page = PageRequest::new(0, 0);
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 1);
        assert_eq!(page.offset(), 0);

        let page = PageRequest::new(3, 20);
        assert_eq!(page.offset(), 40);

        assert_eq!(PageRequest::default().limit, 20);
    }
}
