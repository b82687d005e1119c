mod heap_sort;

pub use heap_sort::heap_sort;
