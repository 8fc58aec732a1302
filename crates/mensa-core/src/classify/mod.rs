pub mod course;
pub mod feed;
pub mod logos;
pub mod rules;

pub use course::{ClassifiedItem, Course};
pub use feed::{classify_feed, parse_feed, FeedResponse};
