//! Client Module
//!
//! Network access for the shell: a raw transport and the fetch-through
//! client that layers the timed cache over it.

mod fetch;
mod transport;

pub use fetch::FetchClient;
pub use transport::{HttpTransport, RawResponse, Transport};
