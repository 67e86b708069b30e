use super::{Result, MultiIndex, Shape, Path, Cursor, NDimArray};

/// Implemented by array-like types whose elements can be read by coordinate.
///
/// This is implemented by [`NDimArray`] and by [`SyncNDimArray`], and is what
/// the functions in [`fill`] need to read elements.
///
/// [`SyncNDimArray`]: super::SyncNDimArray
/// [`fill`]: super::fill
pub trait ArrayRead {
    /// The element type.
    type Item;

    /// The coordinate space of `self`.
    fn shape(&self) -> &Shape;

    /// Returns (a copy of) the element at `index`.
    ///
    /// Fails with [`Error::RankMismatch`] or [`Error::IndexOutOfRange`] if
    /// `index` is not a valid coordinate.
    ///
    /// [`Error::RankMismatch`]: super::Error::RankMismatch
    /// [`Error::IndexOutOfRange`]: super::Error::IndexOutOfRange
    fn read(&self, index: &[isize]) -> Result<Self::Item>;

    /// Calls `visitor` with (a copy of) every element on `path`.
    ///
    /// Each element is read with a separate call to `read()`.
    fn read_path(
        &self,
        path: &Path,
        mut visitor: impl FnMut(&MultiIndex, Self::Item),
    ) -> Result<()> where Self: Sized {
        path.check_within(self.shape())?;
        for index in Cursor::new(path) {
            let t = self.read(index.as_slice())?;
            visitor(&index, t);
        }
        Ok(())
    }
}

/// Implemented by array-like types whose elements can be written by
/// coordinate.
pub trait ArrayWrite: ArrayRead {
    /// Overwrites the element at `index`.
    ///
    /// Fails like [`ArrayRead::read()`], in which case nothing is written.
    fn write(&mut self, index: &[isize], value: Self::Item) -> Result<()>;
}

// ----------------------------------------------------------------------------

impl<T: Clone> ArrayRead for NDimArray<T> {
    type Item = T;
    fn shape(&self) -> &Shape { NDimArray::shape(self) }
    fn read(&self, index: &[isize]) -> Result<T> { self.get(index).cloned() }
}

impl<T: Clone> ArrayWrite for NDimArray<T> {
    fn write(&mut self, index: &[isize], value: T) -> Result<()> { self.set(index, value) }
}

// ----------------------------------------------------------------------------
