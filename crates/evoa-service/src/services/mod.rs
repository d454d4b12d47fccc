//! Business logic services
//!
//! Feed assembly, counter mutations, follows, and the explore listing. Every
//! service borrows a shared [`ServiceContext`].

pub mod context;
pub mod engagement;
pub mod error;
pub mod explore;
pub mod feed;
pub mod startup;

#[cfg(test)]
pub(crate) mod testing;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use engagement::EngagementService;
pub use error::{ServiceError, ServiceResult};
pub use explore::ExploreService;
pub use feed::FeedService;
pub use startup::StartupService;
