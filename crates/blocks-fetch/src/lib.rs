//! # blocks-fetch
//!
//! Fetch structured content from a Strapi REST API.
//!
//! The client builds `/api/{slug}` requests with qs-style query parameters
//! and a `locale`, returns the `data` member of the response, and keeps each
//! response for a short revalidation window.
//!
//! ## Example
//!
//! ```rust,no_run
//! use blocks_fetch::{ContentClient, ContentRequest, FetchConfig, FilterOperation, Language, Query};
//!
//! # async fn run() -> blocks_fetch::Result<()> {
//! let client = ContentClient::new(FetchConfig::new("https://cms.example.com")?)?;
//!
//! let request = ContentRequest::new("articles")
//!     .lang(Language::En)
//!     .query(
//!         Query::new()
//!             .populate(["cover", "body"])
//!             .filter("slug", FilterOperation::eq("hello-world")),
//!     );
//!
//! let data = client.fetch(&request).await?;
//! println!("{data}");
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod query;
mod request;

pub use client::ContentClient;
pub use config::FetchConfig;
pub use query::{FilterOperation, FilterValue, Query, QueryValue};
pub use request::{ContentRequest, Language};

/// Error type for content retrieval
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Error fetching content data: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Error fetching content data: {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Error fetching content data: invalid response body: {0}")]
    Decode(#[source] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, FetchError>;
