//! Platform records decoded from API responses and pushed updates.
//!
//! Field names follow the wire format so the records decode with plain serde.

mod chat;
mod inline;
mod markup;
mod media;
mod message;
mod update;

#[cfg(test)]
mod tests;

pub use chat::*;
pub use inline::*;
pub use markup::*;
pub use media::*;
pub use message::*;
pub use update::*;
