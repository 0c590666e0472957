// Prediction ledger: the durable, append-only per-user history of
// classification requests, and the read endpoints over it.

pub mod handlers;
pub mod ledger;
