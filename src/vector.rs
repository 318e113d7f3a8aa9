use std::{array, fmt, slice};

use crate::traits::{Number, Zero};

mod ops;

/// Vector of 1 element.
pub type Vec1<T> = Vector<T, 1>;
pub type Vec1f = Vec1<f32>;
/// Vector of 2 elements.
pub type Vec2<T> = Vector<T, 2>;
pub type Vec2f = Vec2<f32>;
pub type Vec2i = Vec2<i32>;
/// Vector of 3 elements.
pub type Vec3<T> = Vector<T, 3>;
pub type Vec3f = Vec3<f32>;
pub type Vec3i = Vec3<i32>;
/// Vector of 4 elements.
pub type Vec4<T> = Vector<T, 4>;
pub type Vec4f = Vec4<f32>;
pub type Vec4i = Vec4<i32>;

/// Fixed-size vector holding `N` scalars of type `T`.
///
/// The scalars sit back to back in index order, with no padding before, between or after them.
/// [`flat_view`][crate::flat_view] and friends rely on this layout.
///
/// Use [`vec2`], [`vec3`] and the other free functions, or [`Vector::from_fn`], to build one.
/// Converting from `[T; N]` works as well. Elements are accessed with `v[i]`, and `&Vector` /
/// `&mut Vector` can be iterated directly:
///
/// ```
/// # use linalg_views::*;
/// let mut v = vec3(1, 2, 3);
/// for elem in &mut v {
///     *elem *= 2;
/// }
/// assert_eq!(v.iter().sum::<i32>(), 12);
/// assert_eq!(v[2], 6);
/// ```
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// All elements set to zero.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Copies `elem` into every slot.
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Builds a vector by calling `cb` once per index, in ascending order.
    ///
    /// ```
    /// # use linalg_views::*;
    /// let squares: Vec4<usize> = Vector::from_fn(|i| i * i);
    /// assert_eq!(squares, [0, 1, 4, 9]);
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Converts every element with `f`.
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Borrows the elements as a slice of length `N`.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Iterates over the elements in index order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.0.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.0.iter_mut()
    }

    /// Sum of the pairwise products of `self` and `other`.
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        let mut sum = T::ZERO;
        for (a, b) in self.0.into_iter().zip(other.0) {
            sum = sum + a * b;
        }
        sum
    }

    /// Squared euclidean length.
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self(array::from_fn(|_| T::default()))
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0
            .iter()
            .fold(&mut f.debug_tuple(""), |t, elem| t.field(elem))
            .finish()
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

#[inline]
pub const fn vec1<T>(x: T) -> Vec1<T> {
    Vector([x])
}

#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Shorthand for `Vector::from([x, y, z, w])`, usable in constants.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt() {
        assert_eq!(format!("{:?}", vec4(0.0, 0.0, 0.0, 1.0)), "(0.0, 0.0, 0.0, 1.0)");
        assert_eq!(format!("{:?}", vec2(1, 2)), "(1, 2)");
    }

    #[test]
    fn range_for() {
        let v = vec2(1, 2);
        let mut count = 0;
        let mut result = Vec2i::ZERO;
        for x in &v {
            result[count] = *x;
            count += 1;
        }
        assert_eq!(count, 2);
        assert_eq!(v, result);

        let mut v = vec3(1, 2, 3);
        for x in &mut v {
            *x = 0;
        }
        assert_eq!(v, Vec3i::ZERO);
    }

    #[test]
    fn by_value() {
        let collected: Vec<_> = vec4(1, 2, 3, 4).into_iter().collect();
        assert_eq!(collected, [1, 2, 3, 4]);
    }

    #[test]
    fn storage_is_unpadded() {
        assert_eq!(std::mem::size_of::<Vec3f>(), 3 * std::mem::size_of::<f32>());
        let v = vec3(1.0f32, 2.0, 3.0);
        let bytes: &[u8] = bytemuck::bytes_of(&v);
        assert_eq!(bytes.len(), 12);
        assert_eq!(bytemuck::cast_slice::<u8, f32>(bytes), v.as_slice());
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
        assert_eq!(vec3(1, 3, -5).length2(), 35);
    }
}
