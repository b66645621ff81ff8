/// Lifecycle of one remotely-owned collection.
///
/// `Loading` intentionally carries no items: while a fetch is in flight the
/// view renders placeholders, and a load failure resets to an explicit
/// empty `Failed` state instead of silently showing stale data.
#[derive(Debug, Clone, PartialEq)]
pub enum ListState<T> {
    /// Created, nothing requested yet.
    Idle,
    /// A list request is in flight.
    Loading,
    /// The last applied list response.
    Loaded {
        items: Vec<T>,
        page: u32,
        total_pages: u32,
    },
    /// The last list request failed; the collection is empty.
    Failed(String),
}

/// Handle for one in-flight list request.
///
/// Issued by [`ListSync::begin_load`] and passed back to
/// [`ListSync::finish_load`] with the outcome, so the controller can tell a
/// current response from a stale one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    seq: u64,
    page: u32,
}

impl LoadTicket {
    /// Page number the caller must request.
    pub fn page(&self) -> u32 {
        self.page
    }
}

/// Controller owning the local cache of one resource collection.
///
/// One instance per resource per view; the UI thread is the only writer.
/// For unpaginated resources (products) `total_pages` stays at 1 and every
/// load targets page 1.
#[derive(Debug)]
pub struct ListSync<T> {
    state: ListState<T>,
    next_seq: u64,
    applied_seq: u64,
    action_error: Option<String>,
}

impl<T> Default for ListSync<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ListSync<T> {
    pub fn new() -> Self {
        Self {
            state: ListState::Idle,
            next_seq: 0,
            applied_seq: 0,
            action_error: None,
        }
    }

    pub fn state(&self) -> &ListState<T> {
        &self.state
    }

    /// Items of the last applied load; empty unless `Loaded`.
    pub fn items(&self) -> &[T] {
        match &self.state {
            ListState::Loaded { items, .. } => items,
            _ => &[],
        }
    }

    /// Current page, 1 when nothing is loaded.
    pub fn page(&self) -> u32 {
        match &self.state {
            ListState::Loaded { page, .. } => *page,
            _ => 1,
        }
    }

    /// Page count reported by the last load, 1 when nothing is loaded.
    pub fn total_pages(&self) -> u32 {
        match &self.state {
            ListState::Loaded { total_pages, .. } => *total_pages,
            _ => 1,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ListState::Loading)
    }

    /// Status message of the last failed mutation, if any. Cleared when the
    /// next mutation begins.
    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    /// Enters `Loading` and issues a ticket for `page` (floored at 1).
    ///
    /// Allowed from any state; a load triggered while another is in flight
    /// simply supersedes it through the sequence guard.
    pub fn begin_load(&mut self, page: u32) -> LoadTicket {
        self.state = ListState::Loading;
        self.next_seq += 1;
        LoadTicket {
            seq: self.next_seq,
            page: page.max(1),
        }
    }

    /// Page navigation: clamps `page` to `[1, total_pages]` and starts a
    /// load, or returns `None` when the clamped page is already current so
    /// no request is issued at all.
    pub fn request_page(&mut self, page: u32) -> Option<LoadTicket> {
        match &self.state {
            ListState::Loaded {
                page: current,
                total_pages,
                ..
            } => {
                let clamped = page.clamp(1, (*total_pages).max(1));
                if clamped == *current {
                    None
                } else {
                    Some(self.begin_load(clamped))
                }
            }
            // Bounds are unknown before the first successful load; only the
            // lower one can be enforced.
            _ => Some(self.begin_load(page.max(1))),
        }
    }

    /// Applies the outcome of the load identified by `ticket`.
    ///
    /// Returns `false` when the response is stale (an equal or newer ticket
    /// has already been applied) and was discarded. On success the page is
    /// clamped once more against the returned page count, which may have
    /// shrunk while the request was in flight.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<(Vec<T>, u32), String>,
    ) -> bool {
        if ticket.seq <= self.applied_seq {
            return false;
        }
        self.applied_seq = ticket.seq;
        self.state = match result {
            Ok((items, total_pages)) => {
                let total_pages = total_pages.max(1);
                ListState::Loaded {
                    items,
                    page: ticket.page.min(total_pages),
                    total_pages,
                }
            }
            Err(message) => ListState::Failed(message),
        };
        true
    }

    /// A mutation request is about to be issued: drop the status text of
    /// the previous one.
    pub fn mutation_begun(&mut self) {
        self.action_error = None;
    }

    /// Re-fetch-after-write: a mutation succeeded, so the cache is out of
    /// date. Re-enters `Loading` and returns the ticket for the current
    /// page; the caller must re-issue the list request with it.
    pub fn mutation_succeeded(&mut self) -> LoadTicket {
        self.action_error = None;
        let page = self.page();
        self.begin_load(page)
    }

    /// A mutation failed: keep the displayed collection exactly as it is
    /// and record the operation-scoped message.
    pub fn mutation_failed(&mut self, message: impl Into<String>) {
        self.action_error = Some(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(sync: &mut ListSync<&'static str>, items: Vec<&'static str>, total_pages: u32) {
        let ticket = sync.begin_load(1);
        assert!(sync.finish_load(ticket, Ok((items, total_pages))));
    }

    #[test]
    fn initial_state_is_idle() {
        let sync: ListSync<&str> = ListSync::new();
        assert_eq!(*sync.state(), ListState::Idle);
        assert!(sync.items().is_empty());
        assert_eq!(sync.page(), 1);
        assert_eq!(sync.total_pages(), 1);
    }

    #[test]
    fn load_cycle_populates_state() {
        let mut sync = ListSync::new();
        let ticket = sync.begin_load(1);
        assert!(sync.is_loading());
        assert!(sync.finish_load(ticket, Ok((vec!["u1", "u2"], 3))));
        assert_eq!(sync.items(), ["u1", "u2"]);
        assert_eq!(sync.page(), 1);
        assert_eq!(sync.total_pages(), 3);
    }

    #[test]
    fn load_failure_clears_to_explicit_error_state() {
        let mut sync = ListSync::new();
        loaded(&mut sync, vec!["u1"], 1);
        let ticket = sync.begin_load(1);
        assert!(sync.finish_load(ticket, Err("Failed to load members.".into())));
        assert_eq!(
            *sync.state(),
            ListState::Failed("Failed to load members.".into())
        );
        assert!(sync.items().is_empty());
    }

    #[test]
    fn request_page_clamps_to_bounds() {
        let mut sync = ListSync::new();
        loaded(&mut sync, vec!["u1", "u2"], 3);

        // Past the upper bound: clamped to the last page, request issued.
        let ticket = sync.request_page(5).expect("load issued");
        assert_eq!(ticket.page(), 3);

        assert!(sync.finish_load(ticket, Ok((vec!["u5"], 3))));
        assert_eq!(sync.page(), 3);

        // Page 0 clamps to 1.
        let ticket = sync.request_page(0).expect("load issued");
        assert_eq!(ticket.page(), 1);
    }

    #[test]
    fn request_page_is_noop_for_current_page() {
        let mut sync = ListSync::new();
        loaded(&mut sync, vec!["u1"], 3);
        assert!(sync.request_page(1).is_none());

        // Clamping can also land on the current page: still no request.
        loaded(&mut sync, vec!["u1"], 1);
        assert!(sync.request_page(9).is_none());
    }

    #[test]
    fn mutation_success_forces_refetch_of_current_page() {
        let mut sync = ListSync::new();
        loaded(&mut sync, vec!["old"], 2);

        sync.mutation_begun();
        let ticket = sync.mutation_succeeded();
        assert!(sync.is_loading());
        assert_eq!(ticket.page(), 1);

        // The final collection is what the re-fetch returned, never the
        // pre-mutation collection patched in place.
        assert!(sync.finish_load(ticket, Ok((vec!["old", "Widget"], 2))));
        assert_eq!(sync.items(), ["old", "Widget"]);
    }

    #[test]
    fn mutation_failure_leaves_collection_untouched() {
        let mut sync = ListSync::new();
        loaded(&mut sync, vec!["u1", "u2"], 1);

        sync.mutation_begun();
        sync.mutation_failed("Failed to delete product.");
        assert_eq!(sync.items(), ["u1", "u2"]);
        assert_eq!(sync.action_error(), Some("Failed to delete product."));
        assert!(!sync.is_loading());
    }

    #[test]
    fn next_mutation_clears_previous_action_error() {
        let mut sync = ListSync::new();
        loaded(&mut sync, vec!["u1"], 1);
        sync.mutation_failed("Failed to favorite product.");
        sync.mutation_begun();
        assert_eq!(sync.action_error(), None);
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut sync = ListSync::new();
        let first = sync.begin_load(1);
        let second = sync.begin_load(2);

        assert!(sync.finish_load(second, Ok((vec!["p2"], 3))));
        // The older response arrives late and must not overwrite.
        assert!(!sync.finish_load(first, Ok((vec!["p1"], 3))));
        assert_eq!(sync.items(), ["p2"]);
        assert_eq!(sync.page(), 2);
    }

    #[test]
    fn stale_error_cannot_clobber_applied_load() {
        let mut sync = ListSync::new();
        let first = sync.begin_load(1);
        let second = sync.begin_load(1);

        assert!(sync.finish_load(second, Ok((vec!["u1"], 1))));
        assert!(!sync.finish_load(first, Err("network".into())));
        assert_eq!(sync.items(), ["u1"]);
    }

    #[test]
    fn page_clamped_again_when_total_shrinks_in_flight() {
        let mut sync = ListSync::new();
        loaded(&mut sync, vec!["u1"], 3);
        let ticket = sync.request_page(3).expect("load issued");
        // The server now reports fewer pages than when the request was made.
        assert!(sync.finish_load(ticket, Ok((vec![], 2))));
        assert_eq!(sync.page(), 2);
    }
}
