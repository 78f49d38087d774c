//! Read-only lookup collections fetched from the backend.
//!
//! Reloads are not cancelled when a dependency changes again quickly, so each
//! list carries a request generation counter: a response is installed only if
//! it matches the latest issued ticket, which keeps a slow stale response from
//! overwriting fresher data.

/// Ticket identifying one reload request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReloadTicket(u64);

#[derive(Clone, Debug)]
pub struct ReferenceList<T> {
    items: Vec<T>,
    generation: u64,
}

impl<T> Default for ReferenceList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ReferenceList<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            generation: 0,
        }
    }

    /// Registers a new reload request, superseding any ticket issued earlier.
    pub fn begin_reload(&mut self) -> ReloadTicket {
        self.generation += 1;
        ReloadTicket(self.generation)
    }

    /// Installs `items` if `ticket` is still the latest issued one. Returns
    /// whether the payload was applied.
    pub fn apply(&mut self, ticket: ReloadTicket, items: Vec<T>) -> bool {
        if ticket.0 == self.generation {
            self.items = items;
            true
        } else {
            false
        }
    }

    /// Drops the current items without invalidating outstanding tickets.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn find<P>(&self, predicate: P) -> Option<&T>
    where
        P: FnMut(&&T) -> bool,
    {
        self.items.iter().find(predicate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_ticket_applies() {
        let mut list = ReferenceList::new();
        let ticket = list.begin_reload();
        assert!(list.apply(ticket, vec![1, 2, 3]));
        assert_eq!(list.items(), &[1, 2, 3]);
    }

    #[test]
    fn superseded_ticket_is_discarded() {
        let mut list = ReferenceList::new();
        let stale = list.begin_reload();
        let fresh = list.begin_reload();

        assert!(list.apply(fresh, vec![10]));
        assert!(!list.apply(stale, vec![99]));
        assert_eq!(list.items(), &[10]);
    }

    #[test]
    fn clear_keeps_the_generation() {
        let mut list = ReferenceList::new();
        let ticket = list.begin_reload();
        list.clear();
        assert!(list.apply(ticket, vec![7]));
        assert_eq!(list.items(), &[7]);
    }
}
