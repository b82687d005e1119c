mod queue;
mod sift;

pub use queue::{Heap, Order};
pub use sift::{build_heap, sift_down};
