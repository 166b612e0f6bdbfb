//! Network access for the commit search API and diff endpoint.

mod client;
mod github;

pub use client::{HttpClient, RateLimitState};
pub use github::{encode_phrase, GitHubClient};
