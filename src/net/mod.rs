//! REST client for the hosted identity and document API.
//!
//! DESIGN
//! ======
//! Every request goes through one small [`client::Client`] so the project
//! header and the request observer apply uniformly. Browser builds perform
//! real HTTP calls via `gloo-net`; non-browser builds stub every call with a
//! connectivity error so the rest of the crate compiles and tests natively.

pub mod client;
pub mod error;
pub mod types;
