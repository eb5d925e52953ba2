//! Latest-request-wins guard for overlapping searches.

/// Identifies one issued search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchTicket(pub u64);

impl std::fmt::Display for SearchTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out increasing tickets; only the newest one may update the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn issue(&mut self) -> SearchTicket {
        self.latest += 1;
        SearchTicket(self.latest)
    }

    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        ticket.0 == self.latest
    }

    pub fn latest(&self) -> Option<SearchTicket> {
        (self.latest > 0).then_some(SearchTicket(self.latest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_is_current() {
        let mut seq = RequestSequence::default();
        assert_eq!(seq.latest(), None);
        let first = seq.issue();
        assert!(seq.is_current(first));
        let second = seq.issue();
        assert!(second > first);
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
        assert_eq!(seq.latest(), Some(second));
    }

    #[test]
    fn test_out_of_order_responses() {
        let mut seq = RequestSequence::default();
        let tickets: Vec<_> = (0..3).map(|_| seq.issue()).collect();
        // responses resolve in reverse order; only the last issued applies
        let applied: Vec<_> = tickets.iter().rev().filter(|t| seq.is_current(**t)).collect();
        assert_eq!(applied, vec![&tickets[2]]);
    }
}
