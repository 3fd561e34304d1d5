//! SlideIndex: the single owner of the visible slide position

/// Current slide of a fixed-length gallery.
///
/// [`SlideIndex::go_to`] is the only mutation; it wraps any target into
/// `[0, len)`, so the position can never leave range regardless of how far a
/// caller over- or undershoots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideIndex {
    current: usize,
    len: usize,
}

impl SlideIndex {
    pub fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Navigation only means something with at least two slides.
    pub fn can_advance(&self) -> bool {
        self.len > 1
    }

    /// Moves to `target` wrapped modulo the gallery length. No-op for
    /// galleries of zero or one slide. Returns whether the slide changed.
    pub fn go_to(&mut self, target: i64) -> bool {
        if !self.can_advance() {
            return false;
        }
        let len = self.len as i64;
        let next = target.rem_euclid(len) as usize;
        let changed = next != self.current;
        self.current = next;
        changed
    }

    pub fn next(&mut self) -> bool {
        self.go_to(self.current as i64 + 1)
    }

    pub fn prev(&mut self) -> bool {
        self.go_to(self.current as i64 - 1)
    }

    /// 1-based position for counters and data attributes.
    pub fn ordinal(&self) -> usize {
        self.current + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_forward_and_backward() {
        let mut idx = SlideIndex::new(5);
        idx.prev();
        assert_eq!(idx.current(), 4);
        idx.next();
        assert_eq!(idx.current(), 0);
    }

    #[test]
    fn congruent_targets_land_on_same_slide() {
        for target in -17i64..17 {
            let mut a = SlideIndex::new(4);
            let mut b = SlideIndex::new(4);
            a.go_to(target);
            b.go_to(target + 4 * 9);
            assert_eq!(a.current(), b.current(), "target {target}");
            let mut c = SlideIndex::new(4);
            c.go_to(target - 4 * 1_000);
            assert_eq!(a.current(), c.current());
        }
    }

    #[test]
    fn single_and_empty_galleries_never_move() {
        for len in [0, 1] {
            let mut idx = SlideIndex::new(len);
            assert!(!idx.next());
            assert!(!idx.prev());
            assert!(!idx.go_to(3));
            assert_eq!(idx.current(), 0);
        }
    }

    #[test]
    fn three_nexts_cycle_through_abc() {
        let mut idx = SlideIndex::new(3);
        let visited: Vec<usize> = (0..3)
            .map(|_| {
                idx.next();
                idx.current()
            })
            .collect();
        assert_eq!(visited, vec![1, 2, 0]);
    }

    #[test]
    fn reports_whether_slide_changed() {
        let mut idx = SlideIndex::new(3);
        assert!(!idx.go_to(3));
        assert!(idx.go_to(2));
        assert_eq!(idx.ordinal(), 3);
    }
}
