use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{Result, MultiIndex, Shape, Path, Cursor, NDimArray, ArrayRead, ArrayWrite};

/// An [`NDimArray`] behind a lock, so that it can be shared between threads.
///
/// Each call to [`get()`] or [`set()`] holds the lock for its duration.
/// Nothing holds the lock for longer than that. In particular,
/// [`enumerate()`] reads each element separately, so if another thread is
/// writing at the same time the visitor may see a mixture of old and new
/// values. Similarly, a [`fill`] is not atomic. Callers that need
/// multi-element transactions must provide their own locking.
///
/// ```
/// use ndpath::NDimArray;
/// let a: NDimArray<u64> = NDimArray::new(&[4]).unwrap();
/// let s = a.synchronize();
/// std::thread::scope(|scope| {
///     for i in 0..4 {
///         let s = &s;
///         scope.spawn(move || s.set([i], i as u64 * 100).unwrap());
///     }
/// });
/// assert_eq!(s.into_inner().as_slice(), [0, 100, 200, 300]);
/// ```
///
/// [`get()`]: Self::get
/// [`set()`]: Self::set
/// [`enumerate()`]: Self::enumerate
/// [`fill`]: super::fill
#[derive(Debug)]
pub struct SyncNDimArray<T> {
    shape: Shape,
    inner: Mutex<NDimArray<T>>,
}

impl<T> SyncNDimArray<T> {
    // Every critical section is a single read or a single assignment, so the
    // data are consistent even if a panic poisoned the lock.
    fn lock(&self) -> MutexGuard<'_, NDimArray<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The coordinate space. This never changes, so no lock is needed.
    pub fn shape(&self) -> &Shape { &self.shape }

    pub fn rank(&self) -> usize { self.shape.rank() }

    pub fn len(&self) -> usize { self.shape.len() }

    pub fn is_empty(&self) -> bool { self.shape.is_empty() }

    /// Overwrites the element at `index`, holding the lock.
    pub fn set(&self, index: impl AsRef<[isize]>, value: T) -> Result<()> {
        self.lock().set(index, value)
    }

    /// Returns the wrapped array.
    pub fn into_inner(self) -> NDimArray<T> {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Clone> SyncNDimArray<T> {
    /// Constructs a `SyncNDimArray` containing a copy of every element of
    /// `array`. Later changes to either do not affect the other.
    pub fn new(array: &NDimArray<T>) -> Self {
        let shape = array.shape().clone();
        let copy = NDimArray::from_fn(shape.clone(), |index| array.at_inner(index.as_slice()).clone());
        tracing::debug!(rank = shape.rank(), len = shape.len(), "synchronized array");
        Self {shape, inner: Mutex::new(copy)}
    }

    /// Returns a copy of the element at `index`, holding the lock.
    pub fn get(&self, index: impl AsRef<[isize]>) -> Result<T> {
        self.lock().get(index).cloned()
    }

    /// Calls `visitor` for every element, in the standard order.
    ///
    /// The lock is taken separately for each element.
    pub fn enumerate(&self, visitor: impl FnMut(&MultiIndex, T)) {
        self.visit(Cursor::owned(self.shape.full_path()), visitor);
    }

    /// Calls `visitor` for every element on `path`.
    ///
    /// The lock is taken separately for each element.
    pub fn enumerate_path(&self, path: &Path, visitor: impl FnMut(&MultiIndex, T)) -> Result<()> {
        path.check_within(&self.shape)?;
        self.visit(Cursor::new(path), visitor);
        Ok(())
    }

    /// `cursor.path()` must already have been checked.
    fn visit(&self, cursor: Cursor, mut visitor: impl FnMut(&MultiIndex, T)) {
        for index in cursor {
            let t = self.lock().at_inner(index.as_slice()).clone();
            visitor(&index, t);
        }
    }
}

impl<T> From<NDimArray<T>> for SyncNDimArray<T> {
    fn from(array: NDimArray<T>) -> Self {
        Self {shape: array.shape().clone(), inner: Mutex::new(array)}
    }
}

// ----------------------------------------------------------------------------

impl<T: Clone> ArrayRead for SyncNDimArray<T> {
    type Item = T;
    fn shape(&self) -> &Shape { &self.shape }
    fn read(&self, index: &[isize]) -> Result<T> { self.get(index) }
}

impl<T: Clone> ArrayWrite for SyncNDimArray<T> {
    fn write(&mut self, index: &[isize], value: T) -> Result<()> { self.set(index, value) }
}

impl<'a, T: Clone> ArrayRead for &'a SyncNDimArray<T> {
    type Item = T;
    fn shape(&self) -> &Shape { &self.shape }
    fn read(&self, index: &[isize]) -> Result<T> { self.get(index) }
}

/// Allows a shared `SyncNDimArray` to be passed to the functions in [`fill`].
///
/// [`fill`]: super::fill
impl<'a, T: Clone> ArrayWrite for &'a SyncNDimArray<T> {
    fn write(&mut self, index: &[isize], value: T) -> Result<()> { self.set(index, value) }
}

// ----------------------------------------------------------------------------
