//! Route handlers
//!
//! All HTTP request handlers organized by resource.

pub mod explore;
pub mod health;
pub mod reels;
pub mod startups;
