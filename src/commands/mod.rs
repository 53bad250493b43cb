pub mod burst;
pub mod merge;
pub mod page_count;
pub mod split;
