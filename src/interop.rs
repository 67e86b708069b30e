//! Conversions to and from [`ndarray`] types.
//!
//! Wherever this crate expects an index, these methods accept a
//! one-dimensional `ndarray` vector instead, performing the same validation.
//!
//! ```
//! use ndarray::{array, Array};
//! use ndpath::{NDimArray, MultiIndex};
//! let mut a: NDimArray<i32> = NDimArray::with_lower_bounds(&[2, 3], &[1, 0]).unwrap();
//! a.set_vector(array![2, 1].view(), 5).unwrap();
//! assert_eq!(a.get_vector(array![2, 1].view()), Ok(&5));
//! assert!(a.get_vector(array![0, 1].view()).is_err());
//! let index = MultiIndex::try_from(array![2isize, 1]).unwrap();
//! assert_eq!(index.to_ndarray(), array![2, 1]);
//! assert_eq!(a.to_ndarray(), Array::from_shape_vec(vec![2, 3], vec![0, 0, 0, 0, 5, 0]).unwrap());
//! ```

use ndarray::{Array1, ArrayBase, ArrayD, ArrayView1, Data, Dimension, IxDyn};

use super::{Error, Result, MultiIndex, Shape, NDimArray};

impl MultiIndex {
    pub fn to_ndarray(&self) -> Array1<isize> { Array1::from(self.as_slice().to_vec()) }
}

impl TryFrom<ArrayView1<'_, isize>> for MultiIndex {
    type Error = Error;
    fn try_from(v: ArrayView1<'_, isize>) -> Result<Self> { MultiIndex::new(v.to_vec()) }
}

impl TryFrom<Array1<isize>> for MultiIndex {
    type Error = Error;
    fn try_from(v: Array1<isize>) -> Result<Self> { MultiIndex::try_from(v.view()) }
}

// ----------------------------------------------------------------------------

impl<T> NDimArray<T> {
    /// Like [`get()`](Self::get), but `index` is an `ndarray` vector.
    pub fn get_vector(&self, index: ArrayView1<'_, isize>) -> Result<&T> {
        match index.as_slice() {
            Some(coords) => self.get(coords),
            None => self.get(index.to_vec()),
        }
    }

    /// Like [`set()`](Self::set), but `index` is an `ndarray` vector.
    pub fn set_vector(&mut self, index: ArrayView1<'_, isize>, value: T) -> Result<()> {
        match index.as_slice() {
            Some(coords) => self.set(coords, value),
            None => self.set(index.to_vec(), value),
        }
    }

    /// Copies `self` into an `ndarray::ArrayD` with the same lengths.
    ///
    /// `ndarray` indices always start at zero, so the lower bounds are lost.
    pub fn to_ndarray(&self) -> ArrayD<T> where T: Clone {
        let shape = self.shape();
        ArrayD::from_shape_fn(IxDyn(shape.lengths()), |ix| {
            let index: Vec<isize> = ix.slice().iter().enumerate()
                .map(|(d, &i)| shape.lower_bound(d) + i as isize)
                .collect();
            self.at_inner(&index).clone()
        })
    }

    /// Copies an `ndarray` array of any dimensionality into an `NDimArray`
    /// whose lower bounds are all zero.
    ///
    /// Fails with [`Error::InvalidArgument`] if `a` has no axes or an axis of
    /// length zero.
    pub fn from_ndarray<S, D>(a: &ArrayBase<S, D>) -> Result<Self> where
        S: Data<Elem=T>,
        D: Dimension,
        T: Clone,
    {
        let shape = Shape::new(a.shape())?;
        NDimArray::from_vec(shape, a.iter().cloned().collect::<Vec<_>>())
    }
}

// ----------------------------------------------------------------------------
