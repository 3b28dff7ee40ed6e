//! Background Tasks Module
//!
//! Contains background tasks that run periodically while a cache is alive.
//!
//! # Tasks
//! - Expiration sweeper: removes expired cache items at configured intervals

mod sweeper;

pub use sweeper::spawn_sweeper;
