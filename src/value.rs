use std::time::Duration;

/// A number that can be stored in a gauge.
///
/// Every integer and float primitive converts with `as f64`, so large integers round to the
/// nearest representable double. Durations convert to seconds.
pub trait IntoF64 {
    fn into_f64(self) -> f64;
}

macro_rules! into_f64 {
    ($($t:ty),*) => {
        $(
            impl IntoF64 for $t {
                fn into_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

into_f64!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl IntoF64 for Duration {
    fn into_f64(self) -> f64 {
        self.as_secs_f64()
    }
}
