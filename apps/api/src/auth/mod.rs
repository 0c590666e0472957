// Account + session layer: credential storage, token issuance, and the
// bearer-token extractor used by every protected endpoint.
// Raw passwords exist only transiently inside signup/login handlers.

pub mod extract;
pub mod handlers;
pub mod password;
pub mod store;
pub mod token;
