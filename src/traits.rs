use std::ops;

/// Additive identity.
pub trait Zero {
    const ZERO: Self;
}

/// Multiplicative identity.
pub trait One {
    const ONE: Self;
}

/// Scalars that matrix-vector products and dot products can be computed over.
///
/// Implemented automatically for every `Copy` type with [`Zero`], [`One`], addition and
/// multiplication, which covers all primitive integers and floats.
pub trait Number: Zero + One + ops::Add<Output = Self> + ops::Mul<Output = Self> + Copy {}

impl<T> Number for T where T: Zero + One + ops::Add<Output = Self> + ops::Mul<Output = Self> + Copy {}

macro_rules! zero_one {
    ($zero:literal, $one:literal: $($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = $zero;
            }

            impl One for $types {
                const ONE: Self = $one;
            }
        )+
    };
}
zero_one!(0, 1: u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
zero_one!(0.0, 1.0: f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn sum<T: Number>(values: &[T]) -> T {
        values.iter().fold(T::ZERO, |acc, &v| acc + v)
    }

    #[test]
    fn constants() {
        assert_eq!(u8::ZERO, 0);
        assert_eq!(i64::ONE, 1);
        assert_eq!(f32::ZERO, 0.0);
        assert_eq!(f64::ONE, 1.0);
    }

    #[test]
    fn number() {
        assert_eq!(sum(&[1, 2, 3, 4]), 10);
        assert_eq!(sum(&[0.5f32, 0.25]), 0.75);
        assert_eq!(sum::<i32>(&[]), 0);
        assert_eq!(sum(&[u8::MAX, 0]), 255);
    }
}
