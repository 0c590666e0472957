// Classification layer: feature schema + vector building, the pluggable
// classifier behind it, and the predict/features endpoints.
// The rest of the app never sees model internals, only `Classification`.

pub mod handlers;
pub mod model;
pub mod schema;
