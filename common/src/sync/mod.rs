//! List synchronization controller shared by the resource pages.
//!
//! Both the members page and the products page show a remotely-owned
//! collection and mutate it through HTTP calls. The controller owns the
//! local copy of one such collection and enforces the two rules that keep
//! it consistent with the remote store:
//!
//! - **Re-fetch-after-write**: the local collection is a cache, never
//!   authoritative. A successful mutation never patches items in place; it
//!   puts the controller back into `Loading` and hands the caller a ticket
//!   to re-issue the list request, so server-side defaults and validation
//!   are always reflected.
//! - **Stale-response guard**: every load gets a monotonically increasing
//!   sequence number. A response carrying an older ticket than the last one
//!   applied is discarded, so an out-of-order completion can never
//!   overwrite newer state. Requests are not cancelled; losing a race just
//!   means the response is dropped on arrival.
//!
//! The controller is pure state transition logic. It never performs I/O
//! itself; the component driving it issues the HTTP calls and feeds the
//! results back through [`ListSync::finish_load`].

mod list;

pub use list::{ListState, ListSync, LoadTicket};
