//! Compile-time classification of shaped types.
//!
//! Every type whose storage can be viewed implements the sealed [`Shaped`] trait. The set of
//! implementors is closed: [`Vector`], [`Quat`] and [`Matrix`]. Passing anything else to the
//! functions in this module or in [`view`][crate::view] is rejected by the compiler:
//!
//! ```compile_fail
//! # use linalg_views::*;
//! let count = element_count::<[f32; 3]>();
//! ```
//!
//! Extents only exist for matrices:
//!
//! ```compile_fail
//! # use linalg_views::*;
//! let rows = row_extent::<Vec3f>();
//! ```

use ndarray::{ArrayView, ArrayView1, ArrayView2, ArrayViewMut, ArrayViewMut1, ArrayViewMut2};
use ndarray::{Dimension, Ix1, Ix2, ShapeBuilder};

use crate::{Matrix, Quat, Vector};

/// The family a [`Shaped`] type belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeFamily {
    Vector,
    Quaternion,
    Matrix,
}

mod sealed {
    pub trait Sealed {}
}

/// Types with a fixed, statically known shape and contiguous scalar storage.
///
/// This trait is sealed and implemented for exactly [`Vector`], [`Quat`] and [`Matrix`].
pub trait Shaped: sealed::Sealed {
    /// The scalar element type.
    type Elem;

    /// Dimensionality of the view returned by [`Shaped::nd_view`].
    ///
    /// [`Ix1`] for vectors and quaternions, [`Ix2`] for matrices.
    type Dim: Dimension;

    /// Which family this type belongs to.
    const FAMILY: ShapeFamily;

    /// Total number of scalars stored in a value of this type.
    const ELEMENTS: usize;

    /// Borrows all scalars in storage order.
    fn as_flat(&self) -> &[Self::Elem];

    /// Mutably borrows all scalars in storage order.
    fn as_flat_mut(&mut self) -> &mut [Self::Elem];

    /// Creates an [`ndarray`] view over the storage of `self`.
    fn nd_view(&self) -> ArrayView<'_, Self::Elem, Self::Dim>;

    /// Creates a mutable [`ndarray`] view over the storage of `self`.
    fn nd_view_mut(&mut self) -> ArrayViewMut<'_, Self::Elem, Self::Dim>;
}

/// [`Shaped`] types with a row and column extent.
///
/// Only implemented by [`Matrix`].
pub trait MatrixShaped: Shaped<Dim = Ix2> {
    /// Number of rows.
    const ROWS: usize;
    /// Number of columns.
    const COLS: usize;
}

impl<T, const N: usize> sealed::Sealed for Vector<T, N> {}
impl<T> sealed::Sealed for Quat<T> {}
impl<T, const R: usize, const C: usize> sealed::Sealed for Matrix<T, R, C> {}

impl<T, const N: usize> Shaped for Vector<T, N> {
    type Elem = T;
    type Dim = Ix1;

    const FAMILY: ShapeFamily = ShapeFamily::Vector;
    const ELEMENTS: usize = N;

    #[inline]
    fn as_flat(&self) -> &[T] {
        self.as_slice()
    }

    #[inline]
    fn as_flat_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }

    fn nd_view(&self) -> ArrayView1<'_, T> {
        ArrayView1::from(self.as_slice())
    }

    fn nd_view_mut(&mut self) -> ArrayViewMut1<'_, T> {
        ArrayViewMut1::from(self.as_mut_slice())
    }
}

impl<T> Shaped for Quat<T> {
    type Elem = T;
    type Dim = Ix1;

    const FAMILY: ShapeFamily = ShapeFamily::Quaternion;
    const ELEMENTS: usize = 4;

    #[inline]
    fn as_flat(&self) -> &[T] {
        self.as_slice()
    }

    #[inline]
    fn as_flat_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }

    fn nd_view(&self) -> ArrayView1<'_, T> {
        ArrayView1::from(self.as_slice())
    }

    fn nd_view_mut(&mut self) -> ArrayViewMut1<'_, T> {
        ArrayViewMut1::from(self.as_mut_slice())
    }
}

impl<T, const R: usize, const C: usize> Shaped for Matrix<T, R, C> {
    type Elem = T;
    type Dim = Ix2;

    const FAMILY: ShapeFamily = ShapeFamily::Matrix;
    const ELEMENTS: usize = R * C;

    #[inline]
    fn as_flat(&self) -> &[T] {
        self.as_slice()
    }

    #[inline]
    fn as_flat_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }

    /// `(rows, columns)` view with column-major strides.
    fn nd_view(&self) -> ArrayView2<'_, T> {
        ArrayView2::from_shape((R, C).f(), self.as_slice())
            .expect("matrix storage does not hold `R * C` elements")
    }

    /// `(rows, columns)` view with column-major strides.
    fn nd_view_mut(&mut self) -> ArrayViewMut2<'_, T> {
        ArrayViewMut2::from_shape((R, C).f(), self.as_mut_slice())
            .expect("matrix storage does not hold `R * C` elements")
    }
}

impl<T, const R: usize, const C: usize> MatrixShaped for Matrix<T, R, C> {
    const ROWS: usize = R;
    const COLS: usize = C;
}

/// Returns the [`ShapeFamily`] of `T`.
#[inline]
pub const fn shape_family<T: Shaped>() -> ShapeFamily {
    T::FAMILY
}

/// Returns whether `T` is a vector type.
///
/// ```
/// # use linalg_views::*;
/// assert!(is_vector_shaped::<Vec3f>());
/// assert!(!is_vector_shaped::<Quat<f32>>());
/// ```
#[inline]
pub const fn is_vector_shaped<T: Shaped>() -> bool {
    matches!(T::FAMILY, ShapeFamily::Vector)
}

/// Returns whether `T` is a quaternion type.
#[inline]
pub const fn is_quaternion_shaped<T: Shaped>() -> bool {
    matches!(T::FAMILY, ShapeFamily::Quaternion)
}

/// Returns whether `T` is a matrix type.
#[inline]
pub const fn is_matrix_shaped<T: Shaped>() -> bool {
    matches!(T::FAMILY, ShapeFamily::Matrix)
}

/// Returns the total number of scalars in a `T`.
///
/// This is the vector length for vectors, 4 for quaternions, and `rows * columns` for matrices.
///
/// ```
/// # use linalg_views::*;
/// const COUNT: usize = element_count::<Mat4x3<f32>>();
/// assert_eq!(COUNT, 12);
/// assert_eq!(element_count::<Vec2i>(), 2);
/// assert_eq!(element_count::<Quat<f64>>(), 4);
/// ```
#[inline]
pub const fn element_count<T: Shaped>() -> usize {
    T::ELEMENTS
}

/// Returns the number of rows of the matrix type `T`.
#[inline]
pub const fn row_extent<T: MatrixShaped>() -> usize {
    T::ROWS
}

/// Returns the number of columns of the matrix type `T`.
#[inline]
pub const fn col_extent<T: MatrixShaped>() -> usize {
    T::COLS
}
