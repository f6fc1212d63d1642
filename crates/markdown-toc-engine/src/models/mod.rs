pub mod outline;

pub use outline::{HeadingEntry, Outline};
