//! Zone resolution over the paginated zone listing

use bunny_webhook_provider::{normalize_domain_name, DnsProvider, ProviderError};

use crate::error::{CoreError, CoreResult};
use crate::types::{PaginatedResponse, PaginationParams, Zone};

/// Zones requested per listing page.
pub const ZONE_PAGE_SIZE: u32 = 3;

/// Default upper bound on listing pages fetched for one lookup.
pub const DEFAULT_MAX_ZONE_PAGES: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PagesState {
    Open,
    Exhausted,
    LimitReached,
}

/// Lazy, bounded sequence of zone listing pages.
///
/// Each call to [`next_page`](Self::next_page) issues at most one request.
/// The sequence ends (and stays ended) once the provider reports no more
/// items, a request fails, or `max_pages` pages have been fetched.
pub struct ZonePages<'a> {
    provider: &'a dyn DnsProvider,
    page_size: u32,
    max_pages: u32,
    next: u32,
    state: PagesState,
}

impl<'a> ZonePages<'a> {
    pub fn new(provider: &'a dyn DnsProvider, page_size: u32, max_pages: u32) -> Self {
        Self {
            provider,
            page_size: page_size.max(1),
            max_pages: max_pages.max(1),
            next: 1,
            state: PagesState::Open,
        }
    }

    /// Fetch the next page, or `Ok(None)` once the sequence has ended.
    pub async fn next_page(&mut self) -> Result<Option<PaginatedResponse<Zone>>, ProviderError> {
        if self.state != PagesState::Open {
            return Ok(None);
        }
        if self.next > self.max_pages {
            self.state = PagesState::LimitReached;
            return Ok(None);
        }

        let params = PaginationParams::new(self.next, self.page_size);
        let page = match self.provider.list_zones(&params).await {
            Ok(page) => page,
            Err(e) => {
                self.state = PagesState::Exhausted;
                return Err(e);
            }
        };

        self.next += 1;
        if !page.has_more {
            self.state = PagesState::Exhausted;
        }
        Ok(Some(page))
    }

    /// Whether the sequence stopped because of `max_pages` while the
    /// provider still reported more items.
    pub fn limit_reached(&self) -> bool {
        self.state == PagesState::LimitReached
    }

    /// Number of pages fetched successfully so far.
    pub fn pages_fetched(&self) -> u32 {
        self.next - 1
    }
}

/// Resolves a zone name to the provider's zone ID.
#[derive(Debug, Clone, Copy)]
pub struct ZoneResolver {
    page_size: u32,
    max_pages: u32,
}

impl Default for ZoneResolver {
    fn default() -> Self {
        Self {
            page_size: ZONE_PAGE_SIZE,
            max_pages: DEFAULT_MAX_ZONE_PAGES,
        }
    }
}

impl ZoneResolver {
    #[must_use]
    pub fn new(max_pages: u32) -> Self {
        Self {
            max_pages,
            ..Self::default()
        }
    }

    /// Find the ID of the zone whose domain equals `zone_name` (trailing dot
    /// ignored).
    ///
    /// Pages are fetched in order and the search stops at the first match.
    pub async fn resolve(&self, provider: &dyn DnsProvider, zone_name: &str) -> CoreResult<i64> {
        let domain = normalize_domain_name(zone_name);
        let mut pages = ZonePages::new(provider, self.page_size, self.max_pages);

        while let Some(page) = pages.next_page().await.map_err(CoreError::ZoneList)? {
            if let Some(zone) = page.items.iter().find(|z| z.domain == domain) {
                log::debug!(
                    "Resolved zone {domain} to id {} on page {}",
                    zone.id,
                    page.page
                );
                return Ok(zone.id);
            }
        }

        if pages.limit_reached() {
            log::warn!(
                "Zone listing still reports more items after {} pages, giving up on {domain}",
                pages.pages_fetched()
            );
            return Err(CoreError::ZonePageLimitExceeded {
                zone: zone_name.to_string(),
                pages: pages.pages_fetched(),
            });
        }

        Err(CoreError::ZoneNotFound(zone_name.to_string()))
    }
}
