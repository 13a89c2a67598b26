// SPDX-License-Identifier: MPL-2.0
//! Bookkeeping for in-flight backend requests.
//!
//! Each action keeps at most one outstanding request. Starting a new one
//! supersedes the previous id, and a response is only accepted if its id is
//! still the outstanding one for its action.

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(u64);

/// Actions that can have a request in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    Ephemeris,
    Details,
    Translations,
    Thumbnail,
}

#[derive(Debug, Default)]
pub struct Requests {
    counter: u64,
    ephemeris: Option<RequestId>,
    details: Option<RequestId>,
    translations: Option<RequestId>,
    thumbnail: Option<RequestId>,
}

impl Requests {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&mut self, kind: RequestKind) -> &mut Option<RequestId> {
        match kind {
            RequestKind::Ephemeris => &mut self.ephemeris,
            RequestKind::Details => &mut self.details,
            RequestKind::Translations => &mut self.translations,
            RequestKind::Thumbnail => &mut self.thumbnail,
        }
    }

    /// Issues a fresh id for `kind`, superseding any outstanding one.
    pub fn start(&mut self, kind: RequestKind) -> RequestId {
        self.counter += 1;
        let id = RequestId(self.counter);
        *self.slot(kind) = Some(id);
        id
    }

    /// Accepts a response: returns `true` and clears the slot if `id` is the
    /// outstanding request for `kind`, `false` if it was superseded.
    pub fn finish(&mut self, kind: RequestKind, id: RequestId) -> bool {
        let slot = self.slot(kind);
        if *slot == Some(id) {
            *slot = None;
            true
        } else {
            false
        }
    }

    /// Forgets the outstanding request for `kind`; its response will be ignored.
    pub fn cancel(&mut self, kind: RequestKind) {
        *self.slot(kind) = None;
    }

    #[must_use]
    pub fn pending(&self, kind: RequestKind) -> Option<RequestId> {
        match kind {
            RequestKind::Ephemeris => self.ephemeris,
            RequestKind::Details => self.details,
            RequestKind::Translations => self.translations,
            RequestKind::Thumbnail => self.thumbnail,
        }
    }

    #[must_use]
    pub fn is_pending(&self, kind: RequestKind) -> bool {
        self.pending(kind).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_request_supersedes_older() {
        let mut requests = Requests::new();
        let first = requests.start(RequestKind::Ephemeris);
        let second = requests.start(RequestKind::Ephemeris);
        assert_ne!(first, second);

        assert!(!requests.finish(RequestKind::Ephemeris, first));
        assert!(requests.is_pending(RequestKind::Ephemeris));
        assert!(requests.finish(RequestKind::Ephemeris, second));
        assert!(!requests.is_pending(RequestKind::Ephemeris));
    }

    #[test]
    fn response_is_accepted_once() {
        let mut requests = Requests::new();
        let id = requests.start(RequestKind::Details);
        assert!(requests.finish(RequestKind::Details, id));
        assert!(!requests.finish(RequestKind::Details, id));
    }

    #[test]
    fn kinds_are_tracked_independently() {
        let mut requests = Requests::new();
        let eph = requests.start(RequestKind::Ephemeris);
        let details = requests.start(RequestKind::Details);
        assert!(!requests.finish(RequestKind::Details, eph));
        assert!(requests.finish(RequestKind::Ephemeris, eph));
        assert_eq!(requests.pending(RequestKind::Details), Some(details));
    }

    #[test]
    fn cancelled_request_is_ignored() {
        let mut requests = Requests::new();
        let id = requests.start(RequestKind::Thumbnail);
        requests.cancel(RequestKind::Thumbnail);
        assert!(!requests.finish(RequestKind::Thumbnail, id));
    }
}
