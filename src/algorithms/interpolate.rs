/// Types with a numeric position that increases with their ordering, allowing
/// [`interpolation_search`](super::interpolation_search) to estimate where a value should be.
///
/// Implementors must ensure that `a < b` implies `a.ordinal() < b.ordinal()` and that equal values
/// have equal ordinals.
pub trait Interpolate: PartialOrd {
    /// The position of this value on a number line.
    fn ordinal(&self) -> i128;
}

macro_rules! impl_interpolate {
    ($($t:ty),* $(,)?) => {
        $(
            impl Interpolate for $t {
                fn ordinal(&self) -> i128 {
                    *self as i128
                }
            }
        )*
    };
}

impl_interpolate!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Interpolate for char {
    fn ordinal(&self) -> i128 {
        u32::from(*self) as i128
    }
}

impl<T: Interpolate + ?Sized> Interpolate for &T {
    fn ordinal(&self) -> i128 {
        (**self).ordinal()
    }
}
