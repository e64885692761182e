//! Data models for icon dictionaries, policies, and resolution requests.

mod entry;
mod policy;
mod resolution;

// Re-export all public types
pub use entry::{IconEntry, Warning};
pub use policy::{LoadPolicy, ReplacementPolicy};
pub use resolution::{Resolution, ResolveRequest};
