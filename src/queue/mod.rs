// キュー層 - Producer と Consumer の間の唯一の共有リソース

pub mod bounded;

pub use bounded::{bounded_queue, validate_capacity, QueueReader, QueueWriter};
