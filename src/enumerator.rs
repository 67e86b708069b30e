//! Odometer-style traversal of a [`Path`].
//!
//! A [`Cursor`] visits the coordinates of a `Path` like the wheels of an
//! odometer. The wheel of the fastest-varying dimension turns on every step.
//! When a wheel reaches its end coordinate it jumps back to its start
//! coordinate and carries into the wheel of the next dimension in the
//! [`DimensionOrder`]. Unlike a real odometer, each wheel may turn in either
//! direction, may start anywhere, and may be frozen.
//!
//! An [`Enumerator`] is a `Cursor` bound to an [`NDimArray`], and also yields
//! the value at each coordinate.
//!
//! [`DimensionOrder`]: super::DimensionOrder

use std::borrow::{Cow};
use std::iter::{FusedIterator};

use super::{Result, MultiIndex, Path, NDimArray};

/// Visits every coordinate of a [`Path`], without reference to any array.
///
/// A `Cursor` can be driven either as an [`Iterator`], or through the
/// pull-based protocol of [`advance()`] and [`current()`].
///
/// ```
/// use ndpath::{MultiIndex, Path, Cursor};
/// let p = Path::new(MultiIndex::new([1, 1]).unwrap(), MultiIndex::new([0, 0]).unwrap()).unwrap();
/// let points: Vec<Vec<isize>> = Cursor::new(&p).map(|i| i.as_slice().to_vec()).collect();
/// assert_eq!(points, [[1, 1], [1, 0], [0, 1], [0, 0]]);
/// ```
///
/// [`advance()`]: Self::advance
/// [`current()`]: Self::current
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    path: Cow<'a, Path>,
    steps: MultiIndex,
    current: Box<[isize]>,
    started: bool,
    remaining: usize,
}

impl<'a> Cursor<'a> {
    fn new_inner(path: Cow<'a, Path>) -> Self {
        let steps = path.steps();
        let current = path.start().as_slice().into();
        let remaining = path.point_count();
        Self {path, steps, current, started: false, remaining}
    }

    /// Constructs a `Cursor` that borrows `path`.
    pub fn new(path: &'a Path) -> Self { Self::new_inner(Cow::Borrowed(path)) }

    /// Constructs a `Cursor` that owns `path`.
    pub fn owned(path: Path) -> Cursor<'static> { Cursor::new_inner(Cow::Owned(path)) }

    pub fn path(&self) -> &Path { &self.path }

    /// Moves to the next coordinate, returning `false` if there are none left.
    ///
    /// The first call does not move, so that the start of the path is
    /// visited. Once `advance()` has returned `false`, it will keep returning
    /// `false` until [`reset()`] is called.
    ///
    /// [`reset()`]: Self::reset
    pub fn advance(&mut self) -> bool {
        if !self.started {
            self.started = true;
            return true;
        }
        let (start, end) = (self.path.start(), self.path.end());
        if *self.current == *end.as_slice() { return false; }
        for &dim in self.path.order().iter() {
            if self.current[dim] == end[dim] {
                // Carry.
                self.current[dim] = start[dim];
            } else {
                self.current[dim] += self.steps[dim];
                return true;
            }
        }
        unreachable!("{:?} differs from {} in no dimension", self.current, end);
    }

    /// The current coordinate.
    ///
    /// Before the first call to [`advance()`] this is the start of the path.
    ///
    /// [`advance()`]: Self::advance
    pub fn current(&self) -> MultiIndex { MultiIndex::new_inner(self.current.clone()) }

    pub(crate) fn current_slice(&self) -> &[isize] { &self.current }

    /// Returns to the state of a newly-constructed `Cursor`.
    pub fn reset(&mut self) {
        self.current = self.path.start().as_slice().into();
        self.started = false;
        self.remaining = self.path.point_count();
    }
}

impl<'a> Iterator for Cursor<'a> {
    type Item = MultiIndex;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.advance() { return None; }
        self.remaining -= 1;
        Some(self.current())
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.remaining, Some(self.remaining)) }
}

impl<'a> ExactSizeIterator for Cursor<'a> {}

impl<'a> FusedIterator for Cursor<'a> {}

// ----------------------------------------------------------------------------

/// Visits every element of an [`NDimArray`] that lies on a [`Path`], yielding
/// each coordinate together with a reference to the element there.
///
/// ```
/// use ndpath::{NDimArray, MultiIndex, Path};
/// let a = NDimArray::from_fn(ndpath::Shape::new(&[2, 3]).unwrap(), |i| i[0] * 10 + i[1]);
/// let p = Path::new(MultiIndex::new([1, 2]).unwrap(), MultiIndex::new([1, 0]).unwrap()).unwrap();
/// let values: Vec<isize> = a.iter_path(&p).unwrap().map(|(_, &x)| x).collect();
/// assert_eq!(values, [12, 11, 10]);
/// ```
#[derive(Debug, Clone)]
pub struct Enumerator<'a, T> {
    array: &'a NDimArray<T>,
    cursor: Cursor<'a>,
}

impl<'a, T> Enumerator<'a, T> {
    /// `cursor.path()` must already have been checked against `array`.
    pub(crate) fn new_inner(array: &'a NDimArray<T>, cursor: Cursor<'a>) -> Self {
        let path = cursor.path();
        debug_assert!(path.check_within(array.shape()).is_ok());
        tracing::trace!(rank = path.rank(), points = path.point_count(), "enumerating path");
        Self {array, cursor}
    }

    /// Fails with [`Error::RankMismatch`] if `path` has the wrong rank for
    /// `array`, or with [`Error::IndexOutOfRange`] if it leaves the bounds of
    /// `array`.
    ///
    /// [`Error::RankMismatch`]: super::Error::RankMismatch
    /// [`Error::IndexOutOfRange`]: super::Error::IndexOutOfRange
    pub fn new(array: &'a NDimArray<T>, path: &'a Path) -> Result<Self> {
        path.check_within(array.shape())?;
        Ok(Self::new_inner(array, Cursor::new(path)))
    }

    pub fn path(&self) -> &Path { self.cursor.path() }

    /// See [`Cursor::advance()`].
    pub fn advance(&mut self) -> bool { self.cursor.advance() }

    /// See [`Cursor::current()`].
    pub fn current(&self) -> MultiIndex { self.cursor.current() }

    /// The element at `current()`.
    pub fn value(&self) -> &'a T { self.array.at_inner(self.cursor.current_slice()) }

    /// See [`Cursor::reset()`].
    pub fn reset(&mut self) { self.cursor.reset() }
}

impl<'a, T> Iterator for Enumerator<'a, T> {
    type Item = (MultiIndex, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.cursor.next()?;
        Some((index, self.value()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.cursor.size_hint() }
}

impl<'a, T> ExactSizeIterator for Enumerator<'a, T> {}

impl<'a, T> FusedIterator for Enumerator<'a, T> {}

// ----------------------------------------------------------------------------
