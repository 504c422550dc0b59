//! medialib - media library frontend for a stored-URL collection.
//!
//! Fetches stored URLs from a backend collection endpoint, classifies each
//! one as an image, video, YouTube link or webpage, and serves pages that
//! preview, search and delete them.

pub mod cli;
pub mod collection;
pub mod config;
pub mod media;
pub mod server;
pub mod utils;
