use std::{
    array, fmt,
    ops::{Index, IndexMut},
    slice,
};

use crate::{vec4, Number, One, Vector, Zero};

/// A quaternion consisting of 3 imaginary numbers and a real number.
///
/// Quaternions are stored like a 4-dimensional vector: the `x`, `y` and `z` components (the `i`,
/// `j` and `k` imaginary parts) come first, followed by the real part `w`. Flat views and
/// iteration visit the components in this order.
///
/// ```
/// # use linalg_views::*;
/// let q = Quat::from_components(1.0f32, 2.0, 3.0, 4.0);
/// assert_eq!(q.iter().sum::<f32>(), 10.0);
/// assert_eq!(q[3], 4.0);
/// ```
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Quat<T> {
    vec: Vector<T, 4>,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quat<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quat<T> {}

impl<T: Zero + One> Quat<T> {
    /// The multiplicative identity.
    pub const IDENTITY: Self = Self {
        vec: vec4(T::ZERO, T::ZERO, T::ZERO, T::ONE),
    };
}

impl<T> Quat<T> {
    /// Creates a quaternion from a 4-dimensional [`Vector`].
    ///
    /// The `x`, `y`, and `z` coordinates correspond to the `i`, `j`, and `k` imaginary parts, while
    /// the `w` component corresponds to the real number part of the quaternion.
    pub fn from_vec(vec: Vector<T, 4>) -> Self {
        Self { vec }
    }

    pub fn from_components(x: T, y: T, z: T, w: T) -> Self {
        Self {
            vec: vec4(x, y, z, w),
        }
    }

    /// Returns the components as a [`Vector`] in `x, y, z, w` order.
    pub fn into_vec(self) -> Vector<T, 4> {
        self.vec
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.vec.as_slice()
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.vec.as_mut_slice()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.vec.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.vec.iter_mut()
    }

    /// Returns the squared length of this quaternion.
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.vec.length2()
    }
}

impl<T: fmt::Debug> fmt::Debug for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z, w] = self.vec.as_array();
        f.debug_struct("Quat")
            .field("x", x)
            .field("y", y)
            .field("z", z)
            .field("w", w)
            .finish()
    }
}

impl<T, U> PartialEq<Quat<U>> for Quat<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Quat<U>) -> bool {
        self.vec == other.vec
    }
}

impl<T: Eq> Eq for Quat<T> {}

impl<T> Index<usize> for Quat<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.vec[index]
    }
}

impl<T> IndexMut<usize> for Quat<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.vec[index]
    }
}

impl<T> IntoIterator for Quat<T> {
    type Item = T;
    type IntoIter = array::IntoIter<T, 4>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.vec.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Quat<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Quat<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_for() {
        let q = Quat::from_components(1.0f32, 2.0, 3.0, 4.0);
        let mut count = 0;
        let mut result = Quat::from_components(0.0, 0.0, 0.0, 0.0);
        for x in &q {
            result[count] = *x;
            count += 1;
        }
        assert_eq!(count, 4);
        assert_eq!(q, result);

        let mut q = q;
        for x in &mut q {
            *x = 0.0;
        }
        assert_eq!(q, Quat::from_vec(Vector::<f32, 4>::ZERO));
    }

    #[test]
    fn identity() {
        assert_eq!(Quat::<f32>::IDENTITY.as_slice(), &[0.0, 0.0, 0.0, 1.0]);
        assert_eq!(Quat::<f32>::IDENTITY.length2(), 1.0);
    }

    #[test]
    fn by_value() {
        let q = Quat::from_components(1, 2, 3, 4);
        assert_eq!(q.into_iter().rev().collect::<Vec<_>>(), [4, 3, 2, 1]);
    }

    #[test]
    fn fmt() {
        assert_eq!(
            format!("{:?}", Quat::from_components(1, 2, 3, 4)),
            "Quat { x: 1, y: 2, z: 3, w: 4 }"
        );
    }
}
