//! Const-generic vectors, quaternions and matrices, with views over their storage.
//!
//! # Overview
//!
//! This crate provides three fixed-size shaped types: [`Vector`], [`Quat`] and [`Matrix`]. Their
//! dimensions are const generics, and their scalars are always stored contiguously, without
//! padding, in one documented order:
//!
//! - [`Vector`]: index order.
//! - [`Quat`]: `x, y, z, w` (imaginary parts first, real part last).
//! - [`Matrix`]: column-major. The element at `(row, col)` of an `R`-row matrix lives at flat index
//!   `col * R + row`.
//!
//! ## Iteration
//!
//! References to all three types implement [`IntoIterator`], visiting every scalar once in storage
//! order. They can be used in `for` loops and with any iterator adapter:
//!
//! ```
//! # use linalg_views::*;
//! let m = Mat4x3::<f32>::IDENTITY;
//! assert_eq!(m.iter().count(), 12);
//! assert_eq!((&m).into_iter().sum::<f32>(), 3.0);
//!
//! let mut q = Quat::from_components(1.0f32, 2.0, 3.0, 4.0);
//! for x in &mut q {
//!     *x *= 2.0;
//! }
//! assert_eq!(q.as_slice(), &[2.0, 4.0, 6.0, 8.0]);
//! ```
//!
//! ## Classification
//!
//! The [`shape`] module classifies types at compile time. The sealed [`Shaped`] trait is
//! implemented for exactly the three shaped types, and exposes their family, element count and
//! (for matrices, via [`MatrixShaped`]) their row and column extents as associated constants.
//!
//! ## Views
//!
//! The [`view`] module turns any [`Shaped`] value into a flat slice, an owned [`Vec`], or an
//! [`ndarray`] view (1-D for vectors and quaternions, `(rows, columns)` for matrices). Borrowed
//! views are tied to the lifetime of the value they were created from.
//!
//! ```
//! # use linalg_views::*;
//! let mut m = Mat2x3::from_rows([
//!     [1, 2, 3],
//!     [4, 5, 6],
//! ]);
//! assert_eq!(flat_view(&m), &[1, 4, 2, 5, 3, 6]);
//! assert_eq!(shaped_view(&m)[[1, 2]], 6);
//!
//! let copy = to_dynamic_array(&m);
//! flat_view_mut(&mut m).fill(0);
//! assert_eq!(copy, [1, 4, 2, 5, 3, 6]);
//! assert_eq!(m, Mat2x3::<i32>::ZERO);
//! ```
//!
//! # Logging
//!
//! The crate logs through the [`log`] facade. Only the allocating operations log anything, at
//! *trace* level.

mod matrix;
mod quat;
mod traits;
mod vector;

pub mod shape;
pub mod view;

pub use matrix::*;
pub use quat::*;
pub use shape::{
    col_extent, element_count, is_matrix_shaped, is_quaternion_shaped, is_vector_shaped,
    row_extent, shape_family, MatrixShaped, ShapeFamily, Shaped,
};
pub use traits::*;
pub use vector::*;
pub use view::*;
