//! Flat, owned and shaped views over the storage of [`Shaped`] values.
//!
//! | Function                              | Result                         | Allocates |
//! |---------------------------------------|--------------------------------|-----------|
//! | [`flat_view`] / [`flat_view_mut`]     | `&[T]` / `&mut [T]`            | no        |
//! | [`shaped_view`] / [`shaped_view_mut`] | [`ndarray`] view, 1-D or 2-D   | no        |
//! | [`to_dynamic_array`]                  | [`Vec<T>`]                     | once      |
//! | [`to_shaped_array`]                   | owned [`ndarray::Array`]       | once      |
//!
//! Borrowed views alias the source value and cannot outlive it. All of them present the scalars
//! in storage order: index order for vectors, `x, y, z, w` for quaternions, and column-major
//! order for matrices. Shaped views of matrices have the shape `(rows, columns)`, so they can be
//! indexed with `[[row, col]]` like the matrix itself is indexed with `(row, col)`.

use ndarray::{Array, ArrayView, ArrayViewMut};

use crate::shape::Shaped;

/// Returns the number of scalars in `value`.
///
/// Equivalent to [`element_count`][crate::element_count] for the type of `value`.
#[inline]
pub fn elements<T: Shaped>(_value: &T) -> usize {
    T::ELEMENTS
}

/// Borrows the scalars of `value` as a flat slice.
///
/// The slice has exactly [`elements`]`(value)` elements. The raw begin/end pointer pair is
/// available through `as_ptr_range` on the returned slice.
///
/// # Examples
///
/// ```
/// # use linalg_views::*;
/// let m = Mat4x3::<f32>::IDENTITY;
/// let flat = flat_view(&m);
/// assert_eq!(flat.len(), 12);
/// assert_eq!(flat.iter().sum::<f32>(), 3.0);
/// ```
#[inline]
pub fn flat_view<T: Shaped>(value: &T) -> &[T::Elem] {
    value.as_flat()
}

/// Mutably borrows the scalars of `value` as a flat slice.
///
/// Writes through the slice modify `value`.
///
/// # Examples
///
/// ```
/// # use linalg_views::*;
/// let mut v = vec3(1, 2, 3);
/// flat_view_mut(&mut v).fill(0);
/// assert_eq!(v, Vec3i::ZERO);
/// ```
#[inline]
pub fn flat_view_mut<T: Shaped>(value: &mut T) -> &mut [T::Elem] {
    value.as_flat_mut()
}

/// Copies the scalars of `value` into a new [`Vec`].
///
/// The returned vector is allocated once, with a capacity of exactly [`elements`]`(value)`, and
/// holds the scalars in the same order as [`flat_view`]. It does not alias `value`.
pub fn to_dynamic_array<T>(value: &T) -> Vec<T::Elem>
where
    T: Shaped,
    T::Elem: Clone,
{
    log::trace!("copying {:?} with {} elements", T::FAMILY, T::ELEMENTS);
    let mut out = Vec::with_capacity(T::ELEMENTS);
    out.extend_from_slice(value.as_flat());
    out
}

/// Borrows `value` as an [`ndarray`] view.
///
/// Vectors and quaternions produce a 1-D view with [`elements`]`(value)` elements. Matrices
/// produce a 2-D view of shape `(rows, columns)` whose strides match the column-major storage.
///
/// # Examples
///
/// ```
/// # use linalg_views::*;
/// let m = Matrix::from_rows([
///     [1, 2, 3],
///     [4, 5, 6],
/// ]);
/// let view = shaped_view(&m);
/// assert_eq!(view.dim(), (2, 3));
/// assert_eq!(view[[1, 0]], 4);
/// assert_eq!(view.row(0).to_vec(), [1, 2, 3]);
///
/// let q = Quat::from_components(1, 2, 3, 4);
/// assert_eq!(shaped_view(&q).len(), 4);
/// ```
#[inline]
pub fn shaped_view<T: Shaped>(value: &T) -> ArrayView<'_, T::Elem, T::Dim> {
    value.nd_view()
}

/// Mutably borrows `value` as an [`ndarray`] view.
///
/// The view has the same shape and strides as the one returned by [`shaped_view`]. Writes through
/// the view modify `value`.
///
/// # Examples
///
/// ```
/// # use linalg_views::*;
/// let mut m = Mat2::<i32>::ZERO;
/// shaped_view_mut(&mut m)[[0, 1]] = 7;
/// assert_eq!(m[(0, 1)], 7);
/// ```
#[inline]
pub fn shaped_view_mut<T: Shaped>(value: &mut T) -> ArrayViewMut<'_, T::Elem, T::Dim> {
    value.nd_view_mut()
}

/// Copies `value` into an owned [`ndarray::Array`] with the shape of [`shaped_view`].
pub fn to_shaped_array<T>(value: &T) -> Array<T::Elem, T::Dim>
where
    T: Shaped,
    T::Elem: Clone,
{
    log::trace!("copying {:?} with {} elements into an array", T::FAMILY, T::ELEMENTS);
    value.nd_view().to_owned()
}

#[cfg(test)]
mod tests {
    use ndarray::ShapeBuilder;

    use crate::{vec2, vec4, Mat2x3, Mat4f, Mat4x3, Quat, Vec4i};

    use super::*;

    fn init_logger() {
        env_logger::builder()
            .filter_module(env!("CARGO_CRATE_NAME"), log::LevelFilter::Trace)
            .is_test(true)
            .try_init()
            .ok();
    }

    #[test]
    fn elements_matches_type() {
        assert_eq!(elements(&vec2(1, 2)), 2);
        assert_eq!(elements(&Quat::<f32>::IDENTITY), 4);
        assert_eq!(elements(&Mat4f::IDENTITY), 16);
        assert_eq!(elements(&Mat4x3::<f32>::IDENTITY), 12);
    }

    #[test]
    fn flat_pointer_range() {
        let m = Mat4x3::<f32>::IDENTITY;
        let range = flat_view(&m).as_ptr_range();
        // Safety: both pointers are derived from the same slice.
        let distance = unsafe { range.end.offset_from(range.start) };
        assert_eq!(distance, 12);
        assert_eq!(range.start, &m as *const _ as *const f32);
    }

    #[test]
    fn dynamic_array_capacity() {
        init_logger();

        let copy = to_dynamic_array(&Mat4x3::<f32>::IDENTITY);
        assert_eq!(copy.len(), 12);
        assert_eq!(copy.capacity(), 12);
        assert_eq!(copy.iter().sum::<f32>(), 3.0);
    }

    #[test]
    fn dynamic_array_is_independent() {
        init_logger();

        let mut v = vec4(1, 2, 3, 4);
        let copy = to_dynamic_array(&v);
        flat_view_mut(&mut v).fill(0);
        assert_eq!(v, Vec4i::ZERO);
        assert_eq!(copy, [1, 2, 3, 4]);
    }

    #[test]
    fn shaped_view_of_vector_is_1d() {
        let v = vec4(1, 2, 3, 4);
        let view = shaped_view(&v);
        assert_eq!(view.ndim(), 1);
        assert_eq!(view.len(), 4);
        assert_eq!(view.as_slice(), Some(&[1, 2, 3, 4][..]));
    }

    #[test]
    fn shaped_view_of_matrix_is_column_major() {
        let m = Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]);
        let view = shaped_view(&m);
        assert_eq!(view.dim(), (2, 3));
        assert!(view.t().is_standard_layout());
        assert_eq!(view.as_slice_memory_order(), Some(m.as_slice()));
        for row in 0..2 {
            for col in 0..3 {
                assert_eq!(view[[row, col]], m[(row, col)]);
            }
        }
    }

    #[test]
    fn shaped_view_mut_writes_through() {
        let mut m = Mat4x3::<f32>::IDENTITY;
        shaped_view_mut(&mut m).fill(0.0);
        assert_eq!(m, Mat4x3::<f32>::ZERO);

        let mut q = Quat::from_components(1.0f32, 2.0, 3.0, 4.0);
        shaped_view_mut(&mut q)[3] = 0.0;
        assert_eq!(q.as_slice(), &[1.0, 2.0, 3.0, 0.0]);
    }

    #[test]
    fn shaped_array() {
        init_logger();

        let m = Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]);
        let owned = to_shaped_array(&m);
        assert_eq!(owned, shaped_view(&m));
        assert_eq!(
            owned,
            Array::from_shape_vec((2, 3).f(), vec![1, 4, 2, 5, 3, 6]).unwrap()
        );
    }
}
