use std::fmt::{self, Display};

use super::{Error, Result};

/// An ordered tuple of coordinates, one per dimension.
///
/// A `MultiIndex` is an immutable value. Its length is the rank of the
/// arrays and [`Path`]s it can be used with.
///
/// ```
/// use ndpath::MultiIndex;
/// let a = MultiIndex::new([3, -1, 4]).unwrap();
/// let b = MultiIndex::new([1, 1, 4]).unwrap();
/// let d = a.difference(&b).unwrap();
/// assert_eq!(d.as_slice(), [2, -2, 0]);
/// assert_eq!(d.sign_vector().as_slice(), [1, -1, 0]);
/// ```
///
/// [`Path`]: super::Path
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct MultiIndex(Box<[isize]>);

impl MultiIndex {
    pub(crate) fn new_inner(coords: Box<[isize]>) -> Self {
        debug_assert!(!coords.is_empty());
        Self(coords)
    }

    /// Constructs a `MultiIndex` from its coordinates.
    ///
    /// Fails with [`Error::InvalidArgument`] if `coords` is empty.
    pub fn new(coords: impl Into<Box<[isize]>>) -> Result<Self> {
        let coords = coords.into();
        if coords.is_empty() { return Err(Error::invalid("index must have at least 1 coordinate")); }
        Ok(Self(coords))
    }

    /// The number of coordinates.
    pub fn rank(&self) -> usize { self.0.len() }

    pub fn as_slice(&self) -> &[isize] { &self.0 }

    pub fn iter(&self) -> std::slice::Iter<'_, isize> { self.0.iter() }

    /// Returns `self - other`, computed coordinate by coordinate.
    ///
    /// Fails with [`Error::RankMismatch`] if the ranks differ, or with
    /// [`Error::InvalidArgument`] if a coordinate of the result overflows.
    pub fn difference(&self, other: &Self) -> Result<Self> {
        Error::check_rank(self.rank(), other.rank())?;
        self.iter().zip(other.iter()).map(|(&a, &b)| {
            a.checked_sub(b).ok_or_else(|| Error::invalid(format!("{} - {} overflows", self, other)))
        }).collect::<Result<Box<[isize]>>>().map(Self)
    }

    /// Maps each coordinate to `-1`, `0` or `1` according to its sign.
    pub fn sign_vector(&self) -> Self {
        Self(self.iter().map(|x| x.signum()).collect())
    }
}

impl TryFrom<Vec<isize>> for MultiIndex {
    type Error = Error;
    fn try_from(coords: Vec<isize>) -> Result<Self> { Self::new(coords) }
}

impl TryFrom<&[isize]> for MultiIndex {
    type Error = Error;
    fn try_from(coords: &[isize]) -> Result<Self> { Self::new(coords) }
}

impl<const N: usize> TryFrom<[isize; N]> for MultiIndex {
    type Error = Error;
    fn try_from(coords: [isize; N]) -> Result<Self> { Self::new(coords) }
}

impl std::ops::Index<usize> for MultiIndex {
    type Output = isize;
    fn index(&self, dim: usize) -> &isize { &self.0[dim] }
}

impl AsRef<[isize]> for MultiIndex {
    fn as_ref(&self) -> &[isize] { &self.0 }
}

impl<'a> IntoIterator for &'a MultiIndex {
    type Item = &'a isize;
    type IntoIter = std::slice::Iter<'a, isize>;
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl Display for MultiIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.iter().enumerate() {
            if i > 0 { write!(f, ", ")?; }
            write!(f, "{}", x)?;
        }
        write!(f, "]")
    }
}

// ----------------------------------------------------------------------------
