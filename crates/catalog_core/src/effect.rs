use crate::FetchTicket;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch one catalog page; the answer must come back tagged with `ticket`.
    FetchPage { ticket: FetchTicket, page: u32 },
}
