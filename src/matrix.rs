use std::{array, fmt, slice};

use crate::{One, Vector, Zero};

mod ops;

pub type Mat2<T> = Matrix<T, 2, 2>;
pub type Mat2f = Mat2<f32>;
pub type Mat3<T> = Matrix<T, 3, 3>;
pub type Mat3f = Mat3<f32>;
pub type Mat4<T> = Matrix<T, 4, 4>;
pub type Mat4f = Mat4<f32>;

// Non-square aliases are named `Mat{rows}x{columns}`.
pub type Mat2x3<T> = Matrix<T, 2, 3>;
pub type Mat2x4<T> = Matrix<T, 2, 4>;
pub type Mat3x2<T> = Matrix<T, 3, 2>;
pub type Mat3x4<T> = Matrix<T, 3, 4>;
pub type Mat4x2<T> = Matrix<T, 4, 2>;
pub type Mat4x3<T> = Matrix<T, 4, 3>;

/// Matrix of `R` rows by `C` columns, stored column after column.
///
/// All `R * C` scalars are contiguous and unpadded. Position `(row, col)` maps to flat index
/// `col * R + row`, which is the order seen by [`Matrix::as_slice`], by iteration and by the
/// [`view`][crate::view] functions:
///
/// ```
/// # use linalg_views::*;
/// let mat = Matrix::from_rows([
///     [1, 2, 3],
///     [4, 5, 6],
/// ]);
/// assert_eq!(mat.as_slice(), &[1, 4, 2, 5, 3, 6]);
/// assert_eq!(mat[(1, 0)], 4);
/// assert_eq!(mat.get(2, 0), None);
/// ```
///
/// Indexing takes a `(row, col)` tuple and panics when either part is out of range. Use
/// [`Matrix::get`] for a checked lookup.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; R]; C]);

#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Length of the leading diagonal.
    const MIN_DIMENSION: usize = if R > C { C } else { R };

    /// Builds a matrix whose columns are `columns`, left to right.
    ///
    /// Since storage is column-major, this is a plain move of the data.
    ///
    /// ```
    /// # use linalg_views::*;
    /// let m = Mat3x2::from_columns([[1, 2, 3], [4, 5, 6]]);
    /// assert_eq!(m.as_slice(), &[1, 2, 3, 4, 5, 6]);
    /// assert_eq!(m[(2, 0)], 3);
    /// ```
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self {
        Self(columns.map(|col| col.into().into_array()))
    }

    /// Builds a matrix whose rows are `rows`, top to bottom.
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self
    where
        T: Copy,
    {
        let rows: [Vector<T, C>; R] = rows.map(Into::into);
        Self::from_fn(|row, col| rows[row][col])
    }

    /// Calls `cb(row, col)` for every position, column by column, and collects the results.
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|col| array::from_fn(|row| cb(row, col))))
    }

    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|column| column.map(&mut f)))
    }

    /// Mirrors the matrix along its leading diagonal.
    ///
    /// ```
    /// # use linalg_views::*;
    /// let m = Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]);
    /// assert_eq!(m.transpose(), Mat3x2::from_columns([[1, 2, 3], [4, 5, 6]]));
    /// ```
    pub fn transpose(self) -> Matrix<T, C, R>
    where
        T: Copy,
    {
        Matrix::from_fn(|row, col| self[(col, row)])
    }

    /// Checked access to `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(col).and_then(|col| col.get(row))
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(col).and_then(|col| col.get_mut(row))
    }

    /// Returns a copy of the column at index `col`.
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of bounds.
    pub fn column(&self, col: usize) -> Vector<T, R>
    where
        T: Copy,
    {
        self.0[col].into()
    }

    /// Returns the elements as a flat slice in column-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.0.as_flattened()
    }

    /// Returns the elements as a mutable flat slice in column-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg_views::*;
    /// let mut mat = Mat2::<i32>::ZERO;
    /// mat.as_mut_slice()[1] = 5;
    /// assert_eq!(mat[(1, 0)], 5);
    /// ```
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.0.as_flattened_mut()
    }

    /// Returns an iterator over all elements in column-major order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns an iterator over mutable references to all elements in column-major order.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T: Zero + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// All elements set to zero.
    pub const ZERO: Self = Self([[T::ZERO; R]; C]);
}

impl<T: Zero + One + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The identity matrix.
    ///
    /// The matrix has the value 1 on its leading diagonal and 0 everywhere else. For non-square
    /// matrices, the diagonal stops at the smaller dimension, so there are `min(R, C)` ones.
    ///
    /// ```
    /// # use linalg_views::*;
    /// assert_eq!(Mat4x3::<i32>::IDENTITY.iter().sum::<i32>(), 3);
    /// ```
    pub const IDENTITY: Self = {
        let mut columns = [[T::ZERO; R]; C];
        let mut i = 0;
        while i < Self::MIN_DIMENSION {
            columns[i][i] = T::ONE;
            i += 1;
        }
        Self(columns)
    };
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T, const R: usize, const C: usize>(&'a Matrix<T, R, C>, usize);

        impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for FormatRow<'_, T, R, C> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("[")?;
                for col in 0..C {
                    if col != 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{:?}", self.0[(self.1, col)])?;
                }
                f.write_str("]")
            }
        }

        // Natural reading order (row-wise), not storage order.
        let mut list = f.debug_list();
        for row in 0..R {
            list.entry(&FormatRow(self, row));
        }
        list.finish()
    }
}

impl<T, const R: usize, const C: usize> Default for Matrix<T, R, C>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, vec4, Vec4f};

    use super::*;

    #[test]
    fn from_rows_columns() {
        assert_eq!(
            Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]),
            Mat2x3::from_columns([[1, 4], [2, 5], [3, 6]]),
        );
    }

    #[test]
    fn column_major_storage() {
        let mat = Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(mat.as_slice(), &[1, 4, 2, 5, 3, 6]);
        assert_eq!(mat.column(1), vec2(2, 5));
        for row in 0..2 {
            for col in 0..3 {
                assert_eq!(mat.as_slice()[col * 2 + row], mat[(row, col)]);
            }
        }
    }

    #[test]
    fn fmt() {
        let mat = Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(format!("{:?}", mat), "[[1, 2, 3], [4, 5, 6]]");
        assert_eq!(format!("{:?}", mat.transpose()), "[[1, 4], [2, 5], [3, 6]]");
    }

    #[test]
    fn constants() {
        assert!(Mat3f::ZERO.iter().all(|&x| x == 0.0));
        assert_eq!(Mat2f::IDENTITY.as_slice(), &[1.0, 0.0, 0.0, 1.0]);

        #[rustfmt::skip]
        assert_eq!(Mat4x3::<i32>::IDENTITY, Matrix::from_rows([
            [1, 0, 0],
            [0, 1, 0],
            [0, 0, 1],
            [0, 0, 0],
        ]));
        #[rustfmt::skip]
        assert_eq!(Mat3x4::<i32>::IDENTITY, Matrix::from_rows([
            [1, 0, 0, 0],
            [0, 1, 0, 0],
            [0, 0, 1, 0],
        ]));
    }

    #[test]
    fn iterate() {
        let m = Mat4f::IDENTITY;
        let mut count = 0;
        let mut sum = 0.0;
        for x in &m {
            count += 1;
            sum += x;
        }
        assert_eq!(count, 16);
        assert_eq!(sum, 4.0);

        let mut m = Mat4f::IDENTITY;
        for x in &mut m {
            *x = 0.0;
        }
        assert_eq!(m * vec4(1.0, 1.0, 1.0, 1.0), Vec4f::ZERO);
    }

    #[test]
    fn mat_vec_mul() {
        let mat = Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(mat * vec3(1, 0, -1), [-2, -2]);

        let identity = Mat4x3::<i32>::IDENTITY;
        assert_eq!(identity * vec3(7, 8, 9), [7, 8, 9, 0]);
    }
}
