//! Loads a remote feed of image items.
//!
//! [`api::RemoteFeedLoader`] asks an [`api::HttpClient`] for the feed URL,
//! validates the response and decodes it into [`domain::FeedItem`]s. The
//! outcome reaches the caller's callback exactly once, as either the items or
//! a [`errors::LoadError`].

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
