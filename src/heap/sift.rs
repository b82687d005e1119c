// Array layout of the tree:
//           0
//     1            2
//  3     4      5     6
//
// left = 2i + 1, right = 2i + 2, parent = (i - 1) / 2

/// Restores the max-heap property for the subtree rooted at `i`, looking only
/// at the first `n` elements of `arr`.
///
/// Both subtrees below `i` must already be max-heaps. On equal values the
/// parent stays put, and the left child wins over the right one.
///
/// # Panics
///
/// Panics if `n > arr.len()` or `i >= n`.
pub fn sift_down<T: Ord>(arr: &mut [T], n: usize, i: usize) {
    sift_down_by(arr, n, i, |a, b| a > b);
}

/// Turns `arr` into a max-heap in place, bottom-up over the internal nodes.
pub fn build_heap<T: Ord>(arr: &mut [T]) {
    let size = arr.len();
    for i in (0..size / 2).rev() {
        sift_down(arr, size, i);
    }
}

/// `above(a, b)` is true when `a` must sit strictly closer to the root than `b`.
pub(crate) fn sift_down_by<T, F>(arr: &mut [T], n: usize, i: usize, above: F)
where
    F: Fn(&T, &T) -> bool,
{
    assert!(
        n <= arr.len(),
        "active length {} exceeds slice length {}",
        n,
        arr.len()
    );
    assert!(i < n, "root index {} outside active length {}", i, n);

    let mut root = i;
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut top = root;

        if left < n && above(&arr[left], &arr[top]) {
            top = left;
        }
        if right < n && above(&arr[right], &arr[top]) {
            top = right;
        }

        if top == root {
            break;
        }
        arr.swap(root, top);
        root = top;
    }
}

pub(crate) fn sift_up_by<T, F>(arr: &mut [T], mut i: usize, above: F)
where
    F: Fn(&T, &T) -> bool,
{
    while i > 0 {
        let parent = (i - 1) / 2;
        if !above(&arr[i], &arr[parent]) {
            break;
        }
        arr.swap(i, parent);
        i = parent;
    }
}
