//! Bulk mutation of the elements on a [`Path`].
//!
//! These functions work with anything that implements [`ArrayWrite`],
//! including [`SyncNDimArray`]. Note that a fill is a sequence of separate
//! reads and writes, so it is not atomic with respect to other threads that
//! share a `SyncNDimArray`.
//!
//! [`NDimArray`] has methods of the same names, which are usually more
//! convenient.
//!
//! [`SyncNDimArray`]: super::SyncNDimArray
//! [`NDimArray`]: super::NDimArray

use super::{Result, MultiIndex, Path, Cursor, ArrayWrite};

/// Replaces each element `t` at index `i` on `path` with `transform(i, t)`.
///
/// Fails with [`Error::RankMismatch`] or [`Error::IndexOutOfRange`] if `path`
/// does not fit within `array`, in which case nothing is written.
///
/// [`Error::RankMismatch`]: super::Error::RankMismatch
/// [`Error::IndexOutOfRange`]: super::Error::IndexOutOfRange
pub fn fill_path_with<A: ArrayWrite>(
    array: &mut A,
    path: &Path,
    mut transform: impl FnMut(&MultiIndex, A::Item) -> A::Item,
) -> Result<()> {
    path.check_within(array.shape())?;
    tracing::debug!(rank = path.rank(), points = path.point_count(), "filling path");
    for index in Cursor::new(path) {
        let old = array.read(index.as_slice())?;
        array.write(index.as_slice(), transform(&index, old))?;
    }
    Ok(())
}

/// Sets every element on `path` to `value`.
pub fn fill_path<A: ArrayWrite>(array: &mut A, path: &Path, value: A::Item) -> Result<()> where
    A::Item: Clone,
{
    fill_path_with(array, path, |_, _| value.clone())
}

/// Replaces each element `t` at index `i` with `transform(i, t)`, visiting the
/// elements in the standard order.
pub fn fill_with<A: ArrayWrite>(
    array: &mut A,
    transform: impl FnMut(&MultiIndex, A::Item) -> A::Item,
) -> Result<()> {
    let path = array.shape().full_path();
    fill_path_with(array, &path, transform)
}

/// Sets every element to `value`.
pub fn fill<A: ArrayWrite>(array: &mut A, value: A::Item) -> Result<()> where
    A::Item: Clone,
{
    fill_with(array, |_, _| value.clone())
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::{Error, Shape, NDimArray};

    fn mi(coords: &[isize]) -> MultiIndex { MultiIndex::new(coords).unwrap() }

    #[test]
    fn constant() {
        let mut a: NDimArray<u8> = NDimArray::new(&[3, 3]).unwrap();
        let p = Path::new(mi(&[0, 1]), mi(&[2, 1])).unwrap();
        fill_path(&mut a, &p, 9).unwrap();
        assert_eq!(a.as_slice(), [
            0, 9, 0,
            0, 9, 0,
            0, 9, 0,
        ]);
        fill(&mut a, 1).unwrap();
        assert!(a.as_slice().iter().all(|&x| x == 1));
    }

    #[test]
    fn transform_sees_old_values_in_order() {
        let mut a = NDimArray::from_vec(Shape::new(&[4]).unwrap(), vec![1, 2, 3, 4]).unwrap();
        let mut order = Vec::new();
        let p = Path::new(mi(&[3]), mi(&[0])).unwrap();
        fill_path_with(&mut a, &p, |i, x| { order.push(i[0]); x * 10 }).unwrap();
        assert_eq!(order, [3, 2, 1, 0]);
        assert_eq!(a.as_slice(), [10, 20, 30, 40]);
    }

    #[test]
    fn index_dependent() {
        let mut a: NDimArray<isize> = NDimArray::with_lower_bounds(&[2, 2], &[1, 1]).unwrap();
        fill_with(&mut a, |i, _| i[0] * i[1]).unwrap();
        assert_eq!(a.as_slice(), [1, 2, 2, 4]);
    }

    #[test]
    fn invalid_path_writes_nothing() {
        let mut a: NDimArray<u8> = NDimArray::new(&[2, 2]).unwrap();
        let p = Path::new(mi(&[0, 0]), mi(&[2, 2])).unwrap();
        assert!(matches!(fill_path(&mut a, &p, 5), Err(Error::IndexOutOfRange {..})));
        let p = Path::new(mi(&[0]), mi(&[1])).unwrap();
        assert_eq!(fill_path(&mut a, &p, 5), Err(Error::RankMismatch {expected: 2, got: 1}));
        assert_eq!(a.as_slice(), [0, 0, 0, 0]);
    }

    #[test]
    fn single_point_shape() {
        let mut a: NDimArray<u8> = NDimArray::new(&[1, 1]).unwrap();
        fill(&mut a, 3).unwrap();
        assert_eq!(a.as_slice(), [3]);
    }
}
