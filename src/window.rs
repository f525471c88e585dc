use std::collections::VecDeque;

/// Fixed-capacity FIFO holding the most recent samples, oldest first.
///
/// Once full, every [`push`](SlidingWindow::push) evicts exactly one sample.
/// Storage is reserved up front so the steady state never allocates.
#[derive(Debug, Clone)]
pub struct SlidingWindow<T> {
    samples: VecDeque<T>,
    capacity: usize,
}

impl<T: Clone> SlidingWindow<T> {
    /// Creates a window filled with `capacity` copies of `value`
    pub fn filled(capacity: usize, value: T) -> Self {
        let mut window = Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        };
        window.fill(value);
        window
    }

    /// Empties the window, then fills every slot with `value`
    pub fn fill(&mut self, value: T) {
        self.samples.clear();
        self.samples.resize(self.capacity, value);
    }

    /// Appends `value`, dropping the oldest sample when the window is full
    pub fn push(&mut self, value: T) {
        if self.capacity == 0 {
            return;
        }
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(value);
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.samples.len() == self.capacity
    }

    /// Most recently pushed sample
    pub fn newest(&self) -> Option<&T> {
        self.samples.back()
    }

    /// Iterates over the samples, oldest first
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, T> {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_window_is_full() {
        let window = SlidingWindow::filled(5, 0.0);
        assert_eq!(window.len(), 5);
        assert!(window.is_full());
    }

    #[test]
    fn test_push_evicts_oldest() {
        let mut window = SlidingWindow::filled(5, 0.0);
        window.push(10.0);
        let contents: Vec<f64> = window.iter().copied().collect();
        assert_eq!(contents, vec![0.0, 0.0, 0.0, 0.0, 10.0]);

        for v in 1..=5 {
            window.push(v as f64);
        }
        let contents: Vec<f64> = window.iter().copied().collect();
        assert_eq!(contents, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(window.newest(), Some(&5.0));
    }

    #[test]
    fn test_clear_then_refill() {
        let mut window = SlidingWindow::filled(3, 1.0);
        window.clear();
        assert!(window.is_empty());
        assert!(!window.is_full());

        window.push(2.0);
        window.push(3.0);
        assert_eq!(window.len(), 2);
        assert!(!window.is_full());

        window.push(4.0);
        assert!(window.is_full());
        window.push(5.0);
        assert_eq!(window.len(), 3);
    }

    #[test]
    fn test_fill_resets_contents() {
        let mut window = SlidingWindow::filled(3, 1.0);
        window.push(9.0);
        window.fill(7.0);
        assert!(window.iter().all(|&v| v == 7.0));
        assert_eq!(window.len(), 3);
    }
}
