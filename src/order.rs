use super::{Error, Result};

/// A permutation of the dimensions `0..rank` which says how a traversal nests
/// its loops.
///
/// Position 0 names the fastest-varying dimension, and the last position the
/// slowest-varying one.
///
/// ```
/// use ndpath::DimensionOrder;
/// assert_eq!(DimensionOrder::standard(3).as_slice(), [2, 1, 0]);
/// assert!(DimensionOrder::new(vec![0, 0, 1]).is_err());
/// ```
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct DimensionOrder(Box<[usize]>);

impl DimensionOrder {
    /// Fails with [`Error::InvalidArgument`] unless `dims` is a non-empty
    /// permutation of `0..dims.len()`.
    pub fn new(dims: impl Into<Box<[usize]>>) -> Result<Self> {
        let dims = dims.into();
        if dims.is_empty() { return Err(Error::invalid("dimension order must have at least 1 element")); }
        let mut seen = vec![false; dims.len()];
        for &d in dims.iter() {
            if d >= dims.len() {
                return Err(Error::invalid(format!("dimension {} is out of range for rank {}", d, dims.len())));
            }
            if seen[d] {
                return Err(Error::invalid(format!("dimension {} appears more than once", d)));
            }
            seen[d] = true;
        }
        Ok(Self(dims))
    }

    /// The order in which the last dimension varies fastest, i.e.
    /// `(rank-1, ..., 1, 0)`.
    ///
    /// # Panics
    ///
    /// Panics if `rank` is zero.
    pub fn standard(rank: usize) -> Self {
        assert!(rank > 0, "rank must be at least 1");
        Self((0..rank).rev().collect())
    }

    /// The order in which the first dimension varies fastest.
    ///
    /// # Panics
    ///
    /// Panics if `rank` is zero.
    pub fn column_major(rank: usize) -> Self {
        assert!(rank > 0, "rank must be at least 1");
        Self((0..rank).collect())
    }

    pub fn rank(&self) -> usize { self.0.len() }

    pub fn as_slice(&self) -> &[usize] { &self.0 }

    /// The dimensions from fastest- to slowest-varying.
    pub fn iter(&self) -> std::slice::Iter<'_, usize> { self.0.iter() }

    /// The same dimensions nested the other way round.
    pub fn reversed(&self) -> Self {
        Self(self.iter().rev().copied().collect())
    }
}

impl std::ops::Index<usize> for DimensionOrder {
    type Output = usize;
    fn index(&self, position: usize) -> &usize { &self.0[position] }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard() {
        assert_eq!(DimensionOrder::standard(1).as_slice(), [0]);
        assert_eq!(DimensionOrder::standard(4).as_slice(), [3, 2, 1, 0]);
        assert_eq!(DimensionOrder::column_major(3).as_slice(), [0, 1, 2]);
        assert_eq!(DimensionOrder::standard(3).reversed(), DimensionOrder::column_major(3));
    }

    #[test]
    fn valid() {
        let o = DimensionOrder::new([1, 2, 0]).unwrap();
        assert_eq!(o.rank(), 3);
        assert_eq!(o[0], 1);
        assert_eq!(o.iter().copied().collect::<Vec<_>>(), [1, 2, 0]);
    }

    #[test]
    fn invalid() {
        for dims in [vec![], vec![0, 0], vec![1, 2], vec![0, 1, 3], vec![2, 1, 1]] {
            assert!(matches!(DimensionOrder::new(dims), Err(Error::InvalidArgument {..})));
        }
    }
}
