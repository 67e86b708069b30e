use super::{Error, Result, MultiIndex, DimensionOrder, Path};

/// The coordinate space of an [`NDimArray`]: a lower bound and a length for
/// each dimension.
///
/// Dimension `d` admits the coordinates `lower_bound(d) ..= upper_bound(d)`.
///
/// ```
/// use ndpath::Shape;
/// let s = Shape::with_lower_bounds(&[2, 3], &[-1, 10]).unwrap();
/// assert_eq!(s.rank(), 2);
/// assert_eq!(s.len(), 6);
/// assert_eq!(s.lower_boundary().as_slice(), [-1, 10]);
/// assert_eq!(s.upper_boundary().as_slice(), [0, 12]);
/// ```
///
/// [`NDimArray`]: super::NDimArray
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct Shape {
    lengths: Box<[usize]>,
    lower: Box<[isize]>,
}

impl Shape {
    /// Constructs a `Shape` whose lower bounds are all zero.
    pub fn new(lengths: &[usize]) -> Result<Self> {
        Self::with_lower_bounds(lengths, &vec![0; lengths.len()])
    }

    /// Fails with [`Error::InvalidArgument`] if `lengths` is empty or contains
    /// a zero, or with [`Error::RankMismatch`] if `lower_bounds` has a
    /// different length.
    pub fn with_lower_bounds(lengths: &[usize], lower_bounds: &[isize]) -> Result<Self> {
        if lengths.is_empty() { return Err(Error::invalid("lengths must have at least 1 element")); }
        if let Some(d) = lengths.iter().position(|&n| n == 0) {
            return Err(Error::invalid(format!("length of dimension {} must be greater than 0", d)));
        }
        Error::check_rank(lengths.len(), lower_bounds.len())?;
        for (&n, &lo) in lengths.iter().zip(lower_bounds) {
            if isize::try_from(n).ok().and_then(|n| lo.checked_add(n - 1)).is_none() {
                return Err(Error::invalid(format!("upper bound of {} + {} - 1 overflows", lo, n)));
            }
        }
        if lengths.iter().try_fold(1usize, |acc, &n| acc.checked_mul(n)).is_none() {
            return Err(Error::invalid("element count overflows"));
        }
        Ok(Self {lengths: lengths.into(), lower: lower_bounds.into()})
    }

    pub fn rank(&self) -> usize { self.lengths.len() }

    /// The total number of elements.
    pub fn len(&self) -> usize { self.lengths.iter().product() }

    /// Always `false`; every dimension has at least one coordinate.
    pub fn is_empty(&self) -> bool { false }

    pub fn lengths(&self) -> &[usize] { &self.lengths }

    pub fn length(&self, dim: usize) -> usize { self.lengths[dim] }

    pub fn lower_bound(&self, dim: usize) -> isize { self.lower[dim] }

    pub fn upper_bound(&self, dim: usize) -> isize {
        self.lower[dim] + (self.lengths[dim] as isize - 1)
    }

    /// The smallest valid coordinate in every dimension.
    pub fn lower_boundary(&self) -> MultiIndex {
        MultiIndex::new_inner(self.lower.clone())
    }

    /// The largest valid coordinate in every dimension.
    pub fn upper_boundary(&self) -> MultiIndex {
        MultiIndex::new_inner((0..self.rank()).map(|d| self.upper_bound(d)).collect())
    }

    /// The row-major-equivalent [`DimensionOrder`] for this rank.
    pub fn standard_order(&self) -> DimensionOrder { DimensionOrder::standard(self.rank()) }

    /// Returns `true` if `index` has the right rank and lies within bounds.
    pub fn contains(&self, index: impl AsRef<[isize]>) -> bool {
        self.check(index).is_ok()
    }

    /// Fails with [`Error::RankMismatch`] if `index` has the wrong rank, or
    /// with [`Error::IndexOutOfRange`] if any coordinate is out of bounds.
    pub fn check(&self, index: impl AsRef<[isize]>) -> Result<()> {
        let index = index.as_ref();
        Error::check_rank(self.rank(), index.len())?;
        let inside = index.iter().enumerate().all(|(d, &x)| {
            self.lower_bound(d) <= x && x <= self.upper_bound(d)
        });
        if inside { return Ok(()); }
        Err(Error::IndexOutOfRange {
            index: MultiIndex::new_inner(index.into()),
            lower: self.lower_boundary(),
            upper: self.upper_boundary(),
        })
    }

    /// Returns the position of `index` in row-major order, counting from the
    /// lower boundary.
    pub fn offset(&self, index: impl AsRef<[isize]>) -> Result<usize> {
        let index = index.as_ref();
        self.check(index)?;
        Ok(self.offset_inner(index))
    }

    /// Like `offset()` but `index` must already have been checked.
    pub(crate) fn offset_inner(&self, index: &[isize]) -> usize {
        debug_assert!(self.contains(index));
        let mut offset = 0;
        for d in 0..self.rank() {
            offset = offset * self.lengths[d] + (index[d] - self.lower[d]) as usize;
        }
        offset
    }

    /// The inverse of `offset()`.
    ///
    /// # Panics
    ///
    /// Panics if `offset >= self.len()`.
    pub fn index_at(&self, offset: usize) -> MultiIndex {
        assert!(offset < self.len(), "offset {} is out of bounds for length {}", offset, self.len());
        let mut coords = vec![0; self.rank()];
        let mut rest = offset;
        for d in (0..self.rank()).rev() {
            coords[d] = self.lower[d] + (rest % self.lengths[d]) as isize;
            rest /= self.lengths[d];
        }
        MultiIndex::new_inner(coords.into())
    }

    /// The [`Path`] from `lower_boundary()` to `upper_boundary()` in the
    /// standard order.
    ///
    /// If every length is 1 this is a single-point path.
    pub fn full_path(&self) -> Path {
        Path::new_inner(self.lower_boundary(), self.upper_boundary(), self.standard_order())
    }
}

// ----------------------------------------------------------------------------
