use super::{Error, Result, MultiIndex, DimensionOrder, Shape};

/// An inclusive, axis-aligned box of coordinates, together with the
/// [`DimensionOrder`] in which to visit them.
///
/// Each dimension is traversed from `start[d]` to `end[d]` inclusive, in
/// whichever direction that implies. A dimension in which `start[d] ==
/// end[d]` is "frozen": it stays fixed, and the traversal visits a slice of
/// lower dimension.
///
/// ```
/// use ndpath::{MultiIndex, DimensionOrder, Path};
/// let p = Path::with_order(
///     MultiIndex::new([0, 0, 0]).unwrap(),
///     MultiIndex::new([1, 0, 1]).unwrap(),
///     DimensionOrder::new([2, 1, 0]).unwrap(),
/// ).unwrap();
/// assert!(p.is_frozen(1));
/// assert_eq!(p.point_count(), 4);
/// ```
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct Path {
    start: MultiIndex,
    end: MultiIndex,
    order: DimensionOrder,
}

impl Path {
    pub(crate) fn new_inner(start: MultiIndex, end: MultiIndex, order: DimensionOrder) -> Self {
        assert_eq!(start.rank(), end.rank());
        assert_eq!(start.rank(), order.rank());
        Self {start, end, order}
    }

    /// Constructs a `Path` that uses the standard [`DimensionOrder`], in which
    /// the last dimension varies fastest.
    pub fn new(start: MultiIndex, end: MultiIndex) -> Result<Self> {
        let order = DimensionOrder::standard(start.rank());
        Self::with_order(start, end, order)
    }

    /// Fails with [`Error::InvalidArgument`] if `start`, `end` and `order` do
    /// not all have the same rank, if `start == end`, or if the number of
    /// points does not fit in a `usize`.
    pub fn with_order(start: MultiIndex, end: MultiIndex, order: DimensionOrder) -> Result<Self> {
        if start.rank() != end.rank() {
            return Err(Error::invalid(format!(
                "cannot make a path from a {}-dimensional start to a {}-dimensional end",
                start.rank(), end.rank(),
            )));
        }
        if start.rank() != order.rank() {
            return Err(Error::invalid(format!(
                "dimension order has {} elements but the path has rank {}",
                order.rank(), start.rank(),
            )));
        }
        if start == end {
            return Err(Error::invalid(format!("start and end are the same point {}", start)));
        }
        let count = start.iter().zip(end.iter()).try_fold(1usize, |count, (&s, &e)| {
            s.abs_diff(e).checked_add(1).and_then(|n| count.checked_mul(n))
        });
        if count.is_none() {
            return Err(Error::invalid(format!("path from {} to {} has too many points", start, end)));
        }
        Ok(Self::new_inner(start, end, order))
    }

    pub fn rank(&self) -> usize { self.start.rank() }

    pub fn start(&self) -> &MultiIndex { &self.start }

    pub fn end(&self) -> &MultiIndex { &self.end }

    pub fn order(&self) -> &DimensionOrder { &self.order }

    /// The direction of travel in each dimension: `-1`, `0` (frozen) or `1`.
    pub fn steps(&self) -> MultiIndex {
        MultiIndex::new_inner(
            self.start.iter().zip(self.end.iter()).map(|(s, e)| e.cmp(s) as isize).collect()
        )
    }

    pub fn is_frozen(&self, dim: usize) -> bool { self.start[dim] == self.end[dim] }

    pub fn frozen_dimensions(&self) -> impl Iterator<Item=usize> + '_ {
        (0..self.rank()).filter(move |&d| self.is_frozen(d))
    }

    /// The number of coordinates visited in dimension `dim`.
    ///
    /// Every `Path` has at most `usize::MAX` points, so this cannot overflow.
    pub fn extent(&self, dim: usize) -> usize {
        self.start[dim].abs_diff(self.end[dim]) + 1
    }

    /// The total number of coordinates visited.
    pub fn point_count(&self) -> usize {
        (0..self.rank()).map(|d| self.extent(d)).product()
    }

    /// Returns `true` if `index` is one of the points visited by `self`.
    pub fn contains(&self, index: impl AsRef<[isize]>) -> bool {
        let index = index.as_ref();
        index.len() == self.rank() && index.iter().enumerate().all(|(d, &x)| {
            let (s, e) = (self.start[d], self.end[d]);
            s.min(e) <= x && x <= s.max(e)
        })
    }

    /// The same points, visited in the opposite order.
    pub fn reversed(&self) -> Self {
        Self {start: self.end.clone(), end: self.start.clone(), order: self.order.clone()}
    }

    /// The same box, visited in the same directions but with the loops
    /// nested according to `order`.
    pub fn reordered(&self, order: DimensionOrder) -> Result<Self> {
        Self::with_order(self.start.clone(), self.end.clone(), order)
    }

    /// Fails with [`Error::RankMismatch`] or [`Error::IndexOutOfRange`] if
    /// some point of `self` does not lie within `shape`.
    ///
    /// Only `start` and `end` need checking, since the other points are
    /// between them.
    pub fn check_within(&self, shape: &Shape) -> Result<()> {
        Error::check_rank(shape.rank(), self.rank())?;
        shape.check(&self.start)?;
        shape.check(&self.end)
    }
}

// ----------------------------------------------------------------------------
