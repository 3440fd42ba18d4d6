use crate::{
    client::{HEADER_RATE_LIMIT, HEADER_RATE_REMAINING, HEADER_RATE_RESET},
    DateTime,
};
use reqwest::header::HeaderMap;
use std::str::FromStr;

/// Rate limit status reported alongside every response.
///
/// GitHub API docs: https://developer.github.com/v3/#rate-limiting
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rate {
    /// Number of requests allowed per hour
    pub limit: usize,
    /// Number of requests left in the current window
    pub remaining: usize,
    /// When the current window resets, in seconds since the unix epoch
    pub reset: u64,
}

impl Rate {
    pub(super) fn from_headers(headers: &HeaderMap) -> Self {
        let mut rate = Self::default();

        if let Some(limit) = header_value(headers, HEADER_RATE_LIMIT) {
            rate.limit = limit;
        }

        if let Some(remaining) = header_value(headers, HEADER_RATE_REMAINING) {
            rate.remaining = remaining;
        }

        if let Some(reset) = header_value(headers, HEADER_RATE_RESET) {
            rate.reset = reset;
        }

        rate
    }

    /// Whether the headers were present and report an exhausted window
    pub(super) fn is_exhausted(headers: &HeaderMap) -> bool {
        header_value::<usize>(headers, HEADER_RATE_REMAINING) == Some(0)
    }

    pub fn reset_at(&self) -> Option<DateTime> {
        DateTime::from_timestamp(self.reset as i64)
    }
}

fn header_value<T: FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    headers
        .get(name)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.parse().ok())
}

#[cfg(test)]
mod test {
    use super::{Rate, HEADER_RATE_LIMIT, HEADER_RATE_REMAINING, HEADER_RATE_RESET};
    use reqwest::header::HeaderMap;

    #[test]
    fn rate() {
        let mut headers = HeaderMap::new();
        headers.insert(HEADER_RATE_LIMIT, "60".parse().unwrap());
        headers.insert(HEADER_RATE_REMAINING, "56".parse().unwrap());
        headers.insert(HEADER_RATE_RESET, "1372700873".parse().unwrap());

        let r = Rate::from_headers(&headers);
        assert_eq!(r.limit, 60);
        assert_eq!(r.remaining, 56);
        assert_eq!(r.reset, 1372700873);
        assert_eq!(r.reset_at().map(|t| t.timestamp()), Some(1372700873));
        assert!(!Rate::is_exhausted(&headers));
    }

    #[test]
    fn exhausted() {
        let mut headers = HeaderMap::new();
        assert!(!Rate::is_exhausted(&headers));

        headers.insert(HEADER_RATE_REMAINING, "0".parse().unwrap());
        assert!(Rate::is_exhausted(&headers));
        assert_eq!(Rate::from_headers(&headers), Rate::default());
    }
}
