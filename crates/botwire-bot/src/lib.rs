//! # botwire-bot
//!
//! Update delivery for botwire: the long-polling [`Bot`], the webhook
//! receiver, and the [`Dispatcher`] both of them feed.

pub mod bot;
pub mod dispatcher;
pub mod webhook;

#[cfg(test)]
mod testing;

pub use bot::Bot;
pub use dispatcher::Dispatcher;
