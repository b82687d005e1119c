use super::sift::{sift_down_by, sift_up_by};

/// Which end of the ordering a [`Heap`] keeps at its root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Min,
    Max,
}

impl Order {
    /// True when `a` must sit strictly closer to the root than `b`.
    pub fn above<T: Ord>(self, a: &T, b: &T) -> bool {
        match self {
            Order::Min => a < b,
            Order::Max => a > b,
        }
    }
}

/// Array-backed binary heap, min- or max-ordered.
#[derive(Debug, Clone)]
pub struct Heap<T> {
    items: Vec<T>,
    order: Order,
}

impl<T: Ord> Heap<T> {
    pub fn new(order: Order) -> Self {
        Self::with_capacity(order, 0)
    }

    pub fn with_capacity(order: Order, capacity: usize) -> Self {
        Heap {
            items: Vec::with_capacity(capacity),
            order,
        }
    }

    pub fn order(&self) -> Order {
        self.order
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, item: T) {
        let order = self.order;
        self.items.push(item);
        let last = self.items.len() - 1;
        sift_up_by(&mut self.items, last, |a, b| order.above(a, b));
    }

    /// The root, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn pop(&mut self) -> Option<T> {
        let last = self.items.len().checked_sub(1)?;
        self.items.swap(0, last);
        let top = self.items.pop();

        let order = self.order;
        let size = self.items.len();
        if size > 0 {
            sift_down_by(&mut self.items, size, 0, |a, b| order.above(a, b));
        }
        top
    }

    /// Drains the heap root first: ascending for `Order::Min`, descending for `Order::Max`.
    pub fn into_ordered_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.items.len());
        while let Some(item) = self.pop() {
            out.push(item);
        }
        out
    }
}

impl<T: Ord> Extend<T> for Heap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_heap() {
        let mut heap: Heap<i64> = Heap::new(Order::Max);
        assert!(heap.is_empty());
        assert_eq!(heap.peek(), None);
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn max_root_after_pushes() {
        let mut heap = Heap::new(Order::Max);
        heap.extend([72, 65, 90, 78, 85, 60]);
        assert_eq!(heap.len(), 6);
        assert_eq!(heap.peek(), Some(&90));
    }

    #[test]
    fn min_root_after_pushes() {
        let mut heap = Heap::new(Order::Min);
        heap.extend([72, 65, 90, 78, 85, 60]);
        assert_eq!(heap.peek(), Some(&60));
    }

    #[test]
    fn peek_does_not_remove() {
        let mut heap = Heap::new(Order::Min);
        heap.push(3);
        heap.push(1);
        assert_eq!(heap.peek(), Some(&1));
        assert_eq!(heap.peek(), Some(&1));
        assert_eq!(heap.len(), 2);
    }

    #[test]
    fn pop_in_priority_order() {
        let mut heap = Heap::new(Order::Max);
        heap.extend([5, 3, 5, 1, 5]);
        assert_eq!(heap.pop(), Some(5));
        assert_eq!(heap.pop(), Some(5));
        assert_eq!(heap.pop(), Some(5));
        assert_eq!(heap.pop(), Some(3));
        assert_eq!(heap.pop(), Some(1));
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn drains_ascending_and_descending() {
        let mut low = Heap::new(Order::Min);
        let mut high = Heap::new(Order::Max);
        low.extend([4, -2, 9, 0, 4]);
        high.extend([4, -2, 9, 0, 4]);
        assert_eq!(low.into_ordered_vec(), [-2, 0, 4, 4, 9]);
        assert_eq!(high.into_ordered_vec(), [9, 4, 4, 0, -2]);
    }

    #[test]
    fn holds_references() {
        let marks = [String::from("b"), String::from("a"), String::from("c")];
        let mut heap = Heap::new(Order::Min);
        heap.extend(marks.iter());
        assert_eq!(heap.peek().map(|s| s.as_str()), Some("a"));
        assert_eq!(heap.order(), Order::Min);
    }
}
