//! Bounded trajectory history.

use std::collections::VecDeque;

use tracing::trace;

use crate::error::StepCount;
use crate::point::Point;

/// Upper bound on the up-front allocation of a bounded buffer.
const PREALLOCATE_LIMIT: usize = 4096;

/// Outcome of [`TrajectoryBuffer::rewind`], telling the caller how to adjust
/// its step counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rewind {
    /// The request covered the whole history; the buffer is now empty and
    /// the counter must go back to 0.
    Cleared,
    /// Exactly this many points were removed; the counter must decrease by
    /// the same amount.
    Removed(usize),
}

/// Ordered history of sampled points, newest at the tail.
///
/// With a non-zero maximum the buffer behaves as a FIFO window: appending
/// past the bound evicts from the head. Rewinding can only restore what is
/// still retained, so in bounded mode evicted points are gone for good.
///
/// # Example
///
/// ```rust
/// use lissajous::{Point, Rewind, StepCount, TrajectoryBuffer};
///
/// let mut buf = TrajectoryBuffer::bounded(2);
/// for i in 0..3 {
///     buf.append(Point::new(i as f64, 0.0));
/// }
/// assert_eq!(buf.len(), 2);
/// assert_eq!(buf.rewind(StepCount::ONE), Rewind::Removed(1));
/// assert_eq!(buf.last(), Some(Point::new(1.0, 0.0)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrajectoryBuffer {
    points: VecDeque<Point>,
    max_len: usize,
}

impl TrajectoryBuffer {
    /// Creates an unbounded buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a buffer holding at most `max_len` points; 0 means unbounded.
    pub fn bounded(max_len: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(max_len.min(PREALLOCATE_LIMIT)),
            max_len,
        }
    }

    /// The configured bound, 0 when unbounded.
    #[inline]
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Returns true when the buffer has a bound.
    #[inline]
    pub fn is_bounded(&self) -> bool {
        self.max_len > 0
    }

    /// Changes the bound, evicting the oldest points if the buffer no
    /// longer fits.
    pub fn set_max_len(&mut self, max_len: usize) {
        self.max_len = max_len;
        self.evict();
    }

    /// Adds a point at the tail, evicting from the head when over the bound.
    pub fn append(&mut self, point: Point) {
        self.points.push_back(point);
        self.evict();
    }

    /// Removes up to `n` of the newest points.
    ///
    /// A request that reaches or exceeds the current length clears the
    /// buffer and reports [`Rewind::Cleared`].
    pub fn rewind(&mut self, n: StepCount) -> Rewind {
        let n = n.get();
        if n >= self.points.len() {
            self.points.clear();
            return Rewind::Cleared;
        }
        self.points.truncate(self.points.len() - n);
        Rewind::Removed(n)
    }

    /// Removes every point.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Number of retained points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true when no points are retained.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The newest point.
    #[inline]
    pub fn last(&self) -> Option<Point> {
        self.points.back().copied()
    }

    /// The oldest retained point.
    #[inline]
    pub fn first(&self) -> Option<Point> {
        self.points.front().copied()
    }

    /// Iterates from oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Point> + ExactSizeIterator + '_ {
        self.points.iter()
    }

    fn evict(&mut self) {
        if self.max_len == 0 || self.points.len() <= self.max_len {
            return;
        }
        let excess = self.points.len() - self.max_len;
        self.points.drain(..excess);
        trace!(evicted = excess, max_len = self.max_len, "Trajectory bound reached");
    }
}

impl<'a> IntoIterator for &'a TrajectoryBuffer {
    type Item = &'a Point;
    type IntoIter = std::collections::vec_deque::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
