pub mod article;
pub mod item;

pub use article::{Article, Source};
pub use item::{ParsedItem, RecordContext};
