//! A pure-Rust library providing N-dimensional arrays with arbitrary lower
//! bounds, and traversal of their rectangular sub-regions in any order.
//!
//! [`NDimArray<T>`] represents an array of `T` of any rank. Its coordinate
//! space is described by a [`Shape`], which gives each dimension a lower
//! bound (which may be negative) and a length. The `T` values are internally
//! stored in a [`Box<[T]>`], which is a dense 1-dimensional representation
//! in row-major order. Elements are addressed by a [`MultiIndex`] (or any
//! other list of coordinates), and all accesses are bounds-checked.
//!
//! The interesting part is the traversal. A [`Path`] describes an inclusive
//! box from a `start` coordinate to an `end` coordinate, together with a
//! [`DimensionOrder`] that says which dimension varies fastest. Each
//! dimension is traversed in whichever direction goes from `start` to `end`;
//! a dimension in which they coincide is frozen, so a `Path` can describe a
//! slice of lower dimension. A [`Cursor`] walks a `Path` like an odometer,
//! and an [`Enumerator`] does the same while reading an `NDimArray`.
//!
//! ```
//! use ndpath::{NDimArray, MultiIndex, DimensionOrder, Path};
//! let a = NDimArray::from_vec(
//!     ndpath::Shape::new(&[2, 2, 2]).unwrap(),
//!     vec!["a", "b", "c", "d", "e", "f", "g", "h"],
//! ).unwrap();
//! // The plane `y = 0`, with `z` varying fastest.
//! let plane = Path::with_order(
//!     MultiIndex::new([0, 0, 0]).unwrap(),
//!     MultiIndex::new([1, 0, 1]).unwrap(),
//!     DimensionOrder::new([2, 1, 0]).unwrap(),
//! ).unwrap();
//! let visited: Vec<&str> = a.iter_path(&plane).unwrap().map(|(_, &s)| s).collect();
//! assert_eq!(visited, ["a", "b", "e", "f"]);
//! ```
//!
//! Reading and writing are also available through the traits [`ArrayRead`]
//! and [`ArrayWrite`], which are implemented both by `NDimArray` and by
//! [`SyncNDimArray`], a copy of an `NDimArray` that can be shared between
//! threads. The functions in [`fill`] are written in terms of these traits.
//!
//! With the `ndarray` feature, indices can also be given as `ndarray`
//! vectors, and arrays can be converted to and from `ndarray` arrays.
//!
//! Fallible operations return [`Error`]. Diagnostic events are emitted with
//! [`tracing`].

mod error;
pub use error::{Error, Result};

mod index;
pub use index::{MultiIndex};

mod order;
pub use order::{DimensionOrder};

mod shape;
pub use shape::{Shape};

mod path;
pub use path::{Path};

mod enumerator;
pub use enumerator::{Cursor, Enumerator};

mod array;
pub use array::{NDimArray};

mod access;
pub use access::{ArrayRead, ArrayWrite};

pub mod fill;

mod sync;
pub use sync::{SyncNDimArray};

#[cfg(feature = "ndarray")]
mod interop;
