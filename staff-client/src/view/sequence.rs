//! Request sequencing for views
//!
//! Every load a view starts gets a token from a monotonically increasing
//! counter. A response is applied only when its token is the latest one
//! issued, so an older request that finishes late cannot append to a list a
//! newer request already owns.

/// Token identifying one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Per-view request counter
#[derive(Debug, Clone, Default)]
pub struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new token; every previously issued token becomes stale
    pub fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    /// Whether `token` is the most recently issued one
    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }

    /// Latest issued token, if any was issued
    pub fn latest(&self) -> Option<RequestToken> {
        (self.latest > 0).then_some(RequestToken(self.latest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_is_current() {
        let mut seq = RequestSeq::new();
        assert!(seq.latest().is_none());

        let first = seq.issue();
        assert!(seq.is_current(first));

        let second = seq.issue();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
        assert!(second > first);
        assert_eq!(seq.latest(), Some(second));
    }
}
