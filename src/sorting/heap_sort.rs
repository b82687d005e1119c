use crate::heap::{build_heap, sift_down};

/// Sorts `arr` ascending in place. Not stable.
pub fn heap_sort<T>(arr: &mut [T])
where
    T: Ord,
{
    let size = arr.len();
    if size <= 1 {
        return;
    }

    build_heap(arr);

    // arr[..i + 1] is a max-heap, arr[i + 1..] is already in final position
    for i in (1..size).rev() {
        arr.swap(0, i);
        sift_down(arr, i, 0);
    }
}
