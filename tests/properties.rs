//! Property-based tests for path traversal and fill.
//!
//! Shapes are kept small (rank 1 to 4, lengths 1 to 4) so that every case
//! can be checked exhaustively against a simple model.

use std::collections::{BTreeSet, HashSet};

use proptest::prelude::*;
use ndpath::{Error, MultiIndex, DimensionOrder, Shape, Path, Cursor, NDimArray};

/// A `Shape` with random lengths and lower bounds.
fn shape() -> impl Strategy<Value=Shape> {
    prop::collection::vec((1usize..=4, -3isize..=3), 1..=4).prop_map(|dims| {
        let lengths: Vec<usize> = dims.iter().map(|&(n, _)| n).collect();
        let lower: Vec<isize> = dims.iter().map(|&(_, lo)| lo).collect();
        Shape::with_lower_bounds(&lengths, &lower).unwrap()
    })
}

/// A permutation of `0..rank`.
fn order(rank: usize) -> impl Strategy<Value=DimensionOrder> {
    Just((0..rank).collect::<Vec<usize>>())
        .prop_shuffle()
        .prop_map(|dims| DimensionOrder::new(dims).unwrap())
}

/// Two coordinates within `shape`.
fn endpoints(shape: &Shape) -> impl Strategy<Value=(Vec<isize>, Vec<isize>)> {
    let ranges: Vec<_> = (0..shape.rank())
        .map(|d| (shape.lower_bound(d)..=shape.upper_bound(d), shape.lower_bound(d)..=shape.upper_bound(d)))
        .collect();
    ranges.prop_map(|pairs: Vec<(isize, isize)>| -> (Vec<isize>, Vec<isize>) {
        pairs.into_iter().unzip()
    })
}

/// A `Shape` and a valid `Path` within it.
fn shape_and_path() -> impl Strategy<Value=(Shape, Path)> {
    shape().prop_flat_map(|s| {
        let rank = s.rank();
        (Just(s.clone()), endpoints(&s), order(rank))
    }).prop_filter_map("degenerate path", |(s, (start, end), order)| {
        let path = Path::with_order(MultiIndex::new(start).ok()?, MultiIndex::new(end).ok()?, order).ok()?;
        Some((s, path))
    })
}

/// Every coordinate in the box spanned by `path`, by brute force.
fn model(path: &Path) -> BTreeSet<Vec<isize>> {
    let mut points = BTreeSet::new();
    points.insert(Vec::new());
    for d in 0..path.rank() {
        let (s, e) = (path.start()[d], path.end()[d]);
        points = points.into_iter().flat_map(|p| {
            (s.min(e)..=s.max(e)).map(move |x| { let mut p = p.clone(); p.push(x); p })
        }).collect();
    }
    points
}

fn visit(path: &Path) -> Vec<Vec<isize>> {
    Cursor::new(path).map(|i| i.as_slice().to_vec()).collect()
}

// ============================================================================
// Enumeration coverage
// ============================================================================

proptest! {
    /// The standard full-shape traversal visits every coordinate once, in
    /// lexicographic order.
    #[test]
    fn prop_full_enumeration_is_lexicographic(s in shape()) {
        let visited = visit(&s.full_path());
        prop_assert_eq!(visited.len(), s.len());
        prop_assert!(visited.windows(2).all(|w| w[0] < w[1]));
        let (lo, hi) = (s.lower_boundary(), s.upper_boundary());
        prop_assert_eq!(visited.first().unwrap(), lo.as_slice());
        prop_assert_eq!(visited.last().unwrap(), hi.as_slice());
    }

    /// The standard traversal agrees with the storage order.
    #[test]
    fn prop_full_enumeration_matches_storage(s in shape()) {
        let a = NDimArray::from_fn(s.clone(), |i| s.offset(i).unwrap());
        let offsets: Vec<usize> = a.iter().map(|(_, &x)| x).collect();
        prop_assert_eq!(offsets, (0..s.len()).collect::<Vec<_>>());
    }

    /// Any path visits exactly the points of its box, once each.
    #[test]
    fn prop_path_visits_its_box((_s, p) in shape_and_path()) {
        let visited = visit(&p);
        prop_assert_eq!(visited.len(), p.point_count());
        let unique: BTreeSet<Vec<isize>> = visited.iter().cloned().collect();
        prop_assert_eq!(unique.len(), visited.len());
        prop_assert_eq!(unique, model(&p));
        prop_assert_eq!(visited.first().unwrap(), p.start().as_slice());
        prop_assert_eq!(visited.last().unwrap(), p.end().as_slice());
    }

    /// Consecutive points differ by one step in exactly one dimension, except
    /// where a carry resets faster dimensions.
    #[test]
    fn prop_fastest_dimension_moves_first((_s, p) in shape_and_path()) {
        let visited = visit(&p);
        let fastest = p.order()[0];
        for w in visited.windows(2) {
            let moved: Vec<usize> = (0..p.rank()).filter(|&d| w[0][d] != w[1][d]).collect();
            prop_assert!(!moved.is_empty());
            if !p.is_frozen(fastest) && w[0][fastest] != p.end()[fastest] {
                prop_assert_eq!(moved, vec![fastest]);
                prop_assert_eq!(w[1][fastest] - w[0][fastest], p.steps()[fastest]);
            }
        }
    }
}

// ============================================================================
// Reversal and reordering
// ============================================================================

proptest! {
    /// Swapping start and end visits the same points in exactly the reverse
    /// order.
    #[test]
    fn prop_reversed_path_reverses((_s, p) in shape_and_path()) {
        let mut forwards = visit(&p);
        let backwards = visit(&p.reversed());
        forwards.reverse();
        prop_assert_eq!(forwards, backwards);
    }

    /// Changing the order changes only the sequence, never the set.
    #[test]
    fn prop_reordered_path_same_set(((_s, p), seed) in (shape_and_path(), any::<prop::sample::Index>())) {
        let rank = p.rank();
        let mut dims: Vec<usize> = (0..rank).collect();
        dims.rotate_left(seed.index(rank));
        let q = p.reordered(DimensionOrder::new(dims).unwrap()).unwrap();
        let a: HashSet<Vec<isize>> = visit(&p).into_iter().collect();
        let b: Vec<Vec<isize>> = visit(&q);
        prop_assert_eq!(b.len(), a.len());
        prop_assert_eq!(b.into_iter().collect::<HashSet<_>>(), a);
    }
}

// ============================================================================
// Frozen dimensions
// ============================================================================

proptest! {
    /// Freezing dimensions restricts the traversal to a slice through the
    /// frozen coordinates.
    #[test]
    fn prop_frozen_dimensions((_s, p) in shape_and_path()) {
        let frozen: Vec<usize> = p.frozen_dimensions().collect();
        let expected: usize = (0..p.rank()).filter(|d| !frozen.contains(d)).map(|d| p.extent(d)).product();
        let visited = visit(&p);
        prop_assert_eq!(visited.len(), expected);
        for point in &visited {
            for &d in &frozen {
                prop_assert_eq!(point[d], p.start()[d]);
            }
        }
    }
}

// ============================================================================
// Fill
// ============================================================================

proptest! {
    /// A constant fill changes exactly the elements on the path.
    #[test]
    fn prop_fill_constant_is_local((s, p) in shape_and_path()) {
        let before = NDimArray::from_fn(s.clone(), |i| i.iter().sum::<isize>());
        let mut after = before.clone();
        after.fill_path(&p, isize::MIN).unwrap();
        for ((index, &old), (_, &new)) in before.iter().zip(after.iter()) {
            if p.contains(&index) {
                prop_assert_eq!(new, isize::MIN);
            } else {
                prop_assert_eq!(new, old);
            }
        }
    }

    /// Filling with the identity changes nothing.
    #[test]
    fn prop_fill_identity((s, p) in shape_and_path()) {
        let before = NDimArray::from_fn(s, |i| i.to_string());
        let mut after = before.clone();
        after.fill_path_with(&p, |_, t| t).unwrap();
        prop_assert_eq!(&after, &before);
        after.fill_with(|_, t| t);
        prop_assert_eq!(after, before);
    }

    /// The transform is called with each index on the path, in traversal
    /// order.
    #[test]
    fn prop_fill_follows_path((s, p) in shape_and_path()) {
        let mut a: NDimArray<u8> = NDimArray::from_shape(s);
        let mut seen = Vec::new();
        a.fill_path_with(&p, |i, t| { seen.push(i.as_slice().to_vec()); t }).unwrap();
        prop_assert_eq!(seen, visit(&p));
    }
}

// ============================================================================
// Validation
// ============================================================================

proptest! {
    /// An order that is not a permutation is always rejected.
    #[test]
    fn prop_non_permutation_rejected(dims in prop::collection::vec(0usize..6, 1..6)) {
        let mut sorted = dims.clone();
        sorted.sort_unstable();
        let is_permutation = sorted.iter().copied().eq(0..dims.len());
        let result = DimensionOrder::new(dims);
        if is_permutation {
            prop_assert!(result.is_ok());
        } else {
            prop_assert!(matches!(result, Err(Error::InvalidArgument {..})), "accepted a non-permutation");
        }
    }

    /// Coordinates just outside the shape are rejected.
    #[test]
    fn prop_out_of_bounds_rejected(s in shape(), d in any::<prop::sample::Index>(), above in any::<bool>()) {
        let d = d.index(s.rank());
        let mut coords = s.lower_boundary().as_slice().to_vec();
        coords[d] = if above { s.upper_bound(d) + 1 } else { s.lower_bound(d) - 1 };
        let a: NDimArray<u8> = NDimArray::from_shape(s);
        prop_assert!(matches!(a.get(&coords), Err(Error::IndexOutOfRange {..})), "out-of-bounds read succeeded");
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn plane_scenario() {
    let p = Path::with_order(
        MultiIndex::new([0, 0, 0]).unwrap(),
        MultiIndex::new([1, 0, 1]).unwrap(),
        DimensionOrder::new([2, 1, 0]).unwrap(),
    ).unwrap();
    assert_eq!(visit(&p), [[0, 0, 0], [0, 0, 1], [1, 0, 0], [1, 0, 1]]);
}

#[test]
fn backwards_scenario() {
    let a = NDimArray::from_fn(Shape::new(&[2, 3]).unwrap(), |i| i[0] * 3 + i[1]);
    let p = Path::new(a.upper_boundary(), a.lower_boundary()).unwrap();
    let values: Vec<isize> = a.iter_path(&p).unwrap().map(|(_, &x)| x).collect();
    assert_eq!(values, [5, 4, 3, 2, 1, 0]);
}

#[test]
fn out_of_range_scenario() {
    let a: NDimArray<u8> = NDimArray::new(&[2, 2, 2]).unwrap();
    assert!(matches!(a.get([2, 0, 0]), Err(Error::IndexOutOfRange {..})));
}
