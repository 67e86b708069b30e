use super::{Error, Result, MultiIndex, Shape, Path, Cursor, Enumerator, SyncNDimArray};

/// A dense array of `T`s with arbitrary rank and arbitrary lower bounds.
///
/// The elements are stored in a [`Box<[T]>`] in row-major order, i.e. the
/// last dimension is contiguous. The coordinate space is described by a
/// [`Shape`], which is fixed for the lifetime of the array.
///
/// Elements are addressed by anything that implements `AsRef<[isize]>` and
/// has one coordinate per dimension: a [`MultiIndex`], an array, or a slice.
///
/// ```
/// use ndpath::NDimArray;
/// let mut a: NDimArray<char> = NDimArray::with_lower_bounds(&[2, 2], &[-1, 5]).unwrap();
/// a.set([-1, 6], 'x').unwrap();
/// assert_eq!(a.get([-1, 6]), Ok(&'x'));
/// assert_eq!(a.get([0, 5]), Ok(&'\0'));
/// assert!(a.get([1, 5]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NDimArray<T> {
    shape: Shape,
    items: Box<[T]>,
}

impl<T> NDimArray<T> {
    fn new_inner(shape: Shape, items: Box<[T]>) -> Self {
        assert_eq!(shape.len(), items.len());
        tracing::debug!(rank = shape.rank(), len = shape.len(), "constructed array");
        Self {shape, items}
    }

    /// Constructs an `NDimArray` of shape `shape` given its elements in
    /// row-major order.
    ///
    /// Fails with [`Error::RankMismatch`] if `items` has the wrong length.
    ///
    /// ```
    /// use ndpath::{NDimArray, Shape};
    /// let a = NDimArray::from_vec(Shape::new(&[2, 3]).unwrap(), vec![0, 1, 2, 3, 4, 5]).unwrap();
    /// assert_eq!(a[[1, 0]], 3);
    /// ```
    pub fn from_vec(shape: Shape, items: impl Into<Box<[T]>>) -> Result<Self> {
        let items = items.into();
        Error::check_rank(shape.len(), items.len())?;
        Ok(Self::new_inner(shape, items))
    }

    /// Constructs an `NDimArray` of shape `shape` from a function of the
    /// coordinates.
    pub fn from_fn(shape: Shape, mut f: impl FnMut(&MultiIndex) -> T) -> Self {
        let mut items = Vec::with_capacity(shape.len());
        for index in Cursor::owned(shape.full_path()) { items.push(f(&index)); }
        Self::new_inner(shape, items.into())
    }

    pub fn shape(&self) -> &Shape { &self.shape }

    pub fn rank(&self) -> usize { self.shape.rank() }

    /// The total number of elements.
    pub fn len(&self) -> usize { self.items.len() }

    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    pub fn length(&self, dim: usize) -> usize { self.shape.length(dim) }

    pub fn lower_bound(&self, dim: usize) -> isize { self.shape.lower_bound(dim) }

    pub fn upper_bound(&self, dim: usize) -> isize { self.shape.upper_bound(dim) }

    pub fn lower_boundary(&self) -> MultiIndex { self.shape.lower_boundary() }

    pub fn upper_boundary(&self) -> MultiIndex { self.shape.upper_boundary() }

    /// Returns the element at `index`.
    ///
    /// Fails with [`Error::RankMismatch`] or [`Error::IndexOutOfRange`] if
    /// `index` is not a valid coordinate.
    pub fn get(&self, index: impl AsRef<[isize]>) -> Result<&T> {
        let offset = self.shape.offset(index)?;
        Ok(&self.items[offset])
    }

    pub fn get_mut(&mut self, index: impl AsRef<[isize]>) -> Result<&mut T> {
        let offset = self.shape.offset(index)?;
        Ok(&mut self.items[offset])
    }

    /// Overwrites the element at `index`.
    ///
    /// Fails like [`get()`](Self::get), in which case nothing is written.
    pub fn set(&mut self, index: impl AsRef<[isize]>, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Like `get()` but `index` must already have been checked.
    pub(crate) fn at_inner(&self, index: &[isize]) -> &T {
        &self.items[self.shape.offset_inner(index)]
    }

    /// Iterates over every element in the standard order.
    ///
    /// ```
    /// use ndpath::{NDimArray, Shape};
    /// let a = NDimArray::from_vec(Shape::new(&[2, 2]).unwrap(), vec!['a', 'b', 'c', 'd']).unwrap();
    /// let visited: Vec<_> = a.iter().map(|(i, &x)| (i.to_string(), x)).collect();
    /// assert_eq!(visited, [
    ///     ("[0, 0]".to_string(), 'a'),
    ///     ("[0, 1]".to_string(), 'b'),
    ///     ("[1, 0]".to_string(), 'c'),
    ///     ("[1, 1]".to_string(), 'd'),
    /// ]);
    /// ```
    pub fn iter(&self) -> Enumerator<'_, T> {
        Enumerator::new_inner(self, Cursor::owned(self.shape.full_path()))
    }

    /// Iterates over the elements on `path`.
    ///
    /// Fails with [`Error::RankMismatch`] or [`Error::IndexOutOfRange`] if
    /// `path` does not fit within `self`.
    pub fn iter_path<'a>(&'a self, path: &'a Path) -> Result<Enumerator<'a, T>> {
        Enumerator::new(self, path)
    }

    /// Calls `visitor` for every element, in the standard order.
    pub fn enumerate(&self, mut visitor: impl FnMut(&MultiIndex, &T)) {
        for (index, t) in self.iter() { visitor(&index, t); }
    }

    /// Calls `visitor` for every element on `path`, in the order defined by
    /// `path`.
    ///
    /// Fails like [`iter_path()`](Self::iter_path), in which case `visitor`
    /// is not called.
    pub fn enumerate_path(&self, path: &Path, mut visitor: impl FnMut(&MultiIndex, &T)) -> Result<()> {
        for (index, t) in self.iter_path(path)? { visitor(&index, t); }
        Ok(())
    }

    /// Returns the raw array elements.
    pub fn as_slice(&self) -> &[T] { &self.items }

    pub fn as_mut_slice(&mut self) -> &mut [T] { &mut self.items }

    /// Returns the raw array elements.
    pub fn into_raw(self) -> Box<[T]> { self.items }
}

impl<T: Default> NDimArray<T> {
    /// Constructs an `NDimArray` of shape `shape` filled with `T::default()`.
    pub fn from_shape(shape: Shape) -> Self {
        let items = std::iter::repeat_with(T::default).take(shape.len()).collect();
        Self::new_inner(shape, items)
    }

    /// Constructs an `NDimArray` with the given lengths, whose lower bounds
    /// are all zero, filled with `T::default()`.
    ///
    /// Fails as [`Shape::new()`] does.
    pub fn new(lengths: &[usize]) -> Result<Self> {
        Ok(Self::from_shape(Shape::new(lengths)?))
    }

    /// Fails as [`Shape::with_lower_bounds()`] does.
    pub fn with_lower_bounds(lengths: &[usize], lower_bounds: &[isize]) -> Result<Self> {
        Ok(Self::from_shape(Shape::with_lower_bounds(lengths, lower_bounds)?))
    }
}

impl<T: Clone> NDimArray<T> {
    /// Returns an independent copy of `self` that can be shared between
    /// threads. See [`SyncNDimArray`].
    pub fn synchronize(&self) -> SyncNDimArray<T> { SyncNDimArray::new(self) }

    /// Replaces each element `t` at index `i` on `path` with
    /// `transform(i, t)`.
    ///
    /// ```
    /// use ndpath::{NDimArray, MultiIndex, Path};
    /// let mut a: NDimArray<u32> = NDimArray::new(&[3, 3]).unwrap();
    /// let corner = Path::new(
    ///     MultiIndex::new([1, 1]).unwrap(),
    ///     MultiIndex::new([2, 2]).unwrap(),
    /// ).unwrap();
    /// a.fill_path_with(&corner, |i, t| t + (i[0] + i[1]) as u32).unwrap();
    /// assert_eq!(a.as_slice(), [0, 0, 0, 0, 2, 3, 0, 3, 4]);
    /// ```
    ///
    /// See [`fill::fill_path_with()`](super::fill::fill_path_with).
    pub fn fill_path_with(
        &mut self,
        path: &Path,
        transform: impl FnMut(&MultiIndex, T) -> T,
    ) -> Result<()> {
        super::fill::fill_path_with(self, path, transform)
    }

    /// Sets every element on `path` to `value`.
    pub fn fill_path(&mut self, path: &Path, value: T) -> Result<()> {
        super::fill::fill_path(self, path, value)
    }

    /// Replaces each element `t` at index `i` with `transform(i, t)`, visiting
    /// the elements in the standard order.
    pub fn fill_with(&mut self, mut transform: impl FnMut(&MultiIndex, T) -> T) {
        // The standard order is the storage order.
        for (index, t) in Cursor::owned(self.shape.full_path()).zip(self.items.iter_mut()) {
            *t = transform(&index, t.clone());
        }
    }

    /// Sets every element to `value`.
    pub fn fill(&mut self, value: T) { self.items.fill(value) }
}

impl<T> AsRef<[T]> for NDimArray<T> {
    fn as_ref(&self) -> &[T] { &self.items }
}

impl<T> AsMut<[T]> for NDimArray<T> {
    fn as_mut(&mut self) -> &mut [T] { &mut self.items }
}

impl<'a, T> IntoIterator for &'a NDimArray<T> {
    type Item = (MultiIndex, &'a T);
    type IntoIter = Enumerator<'a, T>;
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

// ----------------------------------------------------------------------------

impl<T, I: AsRef<[isize]>> std::ops::Index<I> for NDimArray<T> {
    type Output = T;

    fn index(&self, index: I) -> &T {
        match self.get(index) {
            Ok(t) => t,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T, I: AsRef<[isize]>> std::ops::IndexMut<I> for NDimArray<T> {
    fn index_mut(&mut self, index: I) -> &mut T {
        match self.get_mut(index) {
            Ok(t) => t,
            Err(e) => panic!("{}", e),
        }
    }
}

// ----------------------------------------------------------------------------
