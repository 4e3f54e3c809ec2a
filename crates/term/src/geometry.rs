//! GeometryProvider: samples the display size from a host console.
//!
//! A query never fails the caller. If the host cannot report its size the
//! provider logs a warning and hands out the 80x24 fallback instead.

use tracing::{debug, warn};

use crate::host::HostConsole;
use crate::types::{DisplaySize, DEFAULT_HEIGHT, DEFAULT_WIDTH};

pub struct GeometryProvider<H> {
    host: H,
    last: Option<DisplaySize>,
}

impl<H: HostConsole> GeometryProvider<H> {
    pub fn new(host: H) -> Self {
        Self { host, last: None }
    }

    /// Query the host once and return the current display size.
    ///
    /// Non-positive dimensions are replaced by their defaults. There are no
    /// retries; callers wanting fresher geometry call this again.
    pub fn query_current_size(&mut self) -> DisplaySize {
        let size = match self.host.query_region() {
            Ok(region) => {
                let size = DisplaySize::from_region(region);
                debug!(
                    ?region,
                    width = size.width,
                    height = size.height,
                    "queried display size"
                );
                size
            }
            Err(err) => {
                warn!(
                    operation = err.operation(),
                    reason = err.reason(),
                    width = DEFAULT_WIDTH,
                    height = DEFAULT_HEIGHT,
                    "could not determine display size, using default"
                );
                DisplaySize::fallback()
            }
        };
        self.last = Some(size);
        size
    }

    /// Size returned by the most recent query, if any.
    pub fn last_size(&self) -> Option<DisplaySize> {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryHost;
    use crate::types::Region;

    #[test]
    fn reports_host_extent() {
        let mut provider = GeometryProvider::new(MemoryHost::new(120, 40));
        assert_eq!(provider.query_current_size(), DisplaySize::new(120, 40));
    }

    #[test]
    fn failed_query_uses_fallback() {
        let mut provider = GeometryProvider::new(MemoryHost::detached());
        assert_eq!(provider.query_current_size(), DisplaySize::new(80, 24));
    }

    #[test]
    fn offset_region_is_converted_to_counts() {
        let host = MemoryHost::with_region(Region::new(5, 100, 84, 129));
        let mut provider = GeometryProvider::new(host);
        assert_eq!(provider.query_current_size(), DisplaySize::new(80, 30));
    }

    #[test]
    fn zero_dimension_is_replaced() {
        let mut provider = GeometryProvider::new(MemoryHost::new(0, 50));
        assert_eq!(provider.query_current_size(), DisplaySize::new(80, 50));
    }

    #[test]
    fn caches_last_query() {
        let mut provider = GeometryProvider::new(MemoryHost::new(33, 11));
        assert_eq!(provider.last_size(), None);
        let size = provider.query_current_size();
        assert_eq!(provider.last_size(), Some(size));
    }
}
