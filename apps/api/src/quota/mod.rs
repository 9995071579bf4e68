// Daily search quota: an append-only ledger and the guard that enforces the limit.
// The guard runs before any upstream call is made.

pub mod guard;
pub mod ledger;
