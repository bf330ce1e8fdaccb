//! # botwire-api
//!
//! Typed client for the bot platform HTTP API.
//!
//! Every remote method is a `BotClient` operation. Calls without file
//! uploads go out as GET with query parameters; calls carrying an
//! [`InputFile`] are sent as a streamed `multipart/form-data` POST.

pub mod client;
pub mod input_file;
pub mod multipart;
pub mod params;
pub mod transport;

#[cfg(any(test, feature = "test-util"))]
pub mod mock;

pub use client::BotClient;
pub use input_file::InputFile;
pub use params::{Media, ParamValue, Params};
pub use transport::{HttpRequest, HttpResponse, Method, ReqwestTransport, Transport};
