//! Typed client for the Skylift CDN management API.
//!
//! Every operation issues exactly one HTTP request and funnels the result
//! through a shared classification pipeline: 2xx responses are decoded into
//! typed replies, failures surface as either [`HttpError`] (protocol or
//! body-shape problem) or [`ApiError`] (structured rejection reported by
//! the server).
//!
//! # Example
//!
//! ```rust,no_run
//! use skylift::{Pagination, Skylift};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), skylift::Error> {
//!     let client = Skylift::builder("sk_xxx").build()?;
//!
//!     let zones = client.storage_zone().list(Some(&Pagination::default())).await?;
//!     for zone in &zones.items {
//!         println!("{:?} ({:?})", zone.name, zone.region);
//!     }
//!
//!     match client.pull_zone().get(1234).await {
//!         Ok(zone) => println!("pull zone name: {:?}", zone.name),
//!         Err(skylift::Error::Api(err)) => eprintln!("rejected: {} ({})", err.message, err.error_key),
//!         Err(err) => return Err(err),
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod pullzone;
mod response;
mod storagezone;
mod types;

pub use client::Skylift;
pub use config::{Config, SkyliftBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use error::{ApiError, Error, HttpError, ResponseError};
pub use pullzone::{
    Hostname, PullZone, PullZoneAddOptions, PullZoneService, PullZoneUpdateOptions,
};
pub use storagezone::{
    StorageZone, StorageZoneAddOptions, StorageZoneService, StorageZoneUpdateOptions,
};
pub use types::{ListReply, Pagination};
