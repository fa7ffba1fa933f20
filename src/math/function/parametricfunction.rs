/// A scalar function of one real variable that also receives a bundle of
/// auxiliary arguments, threaded through unchanged by whoever evaluates it.
///
/// Closures of the form `|x, args| ...` implement this trait automatically, so
/// callers can integrate ad hoc functions without defining a type.
pub trait ParametricFunction<A: ?Sized> {
    fn value(&self, x: f64, args: &A) -> f64;
}

impl<A: ?Sized, F> ParametricFunction<A> for F
where
    F: Fn(f64, &A) -> f64,
{
    fn value(&self, x: f64, args: &A) -> f64 {
        self(x, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_receives_arguments_unchanged() {
        let shifted_square = |x: f64, shift: &f64| (x - shift) * (x - shift);
        assert_eq!(shifted_square.value(3.0, &1.0), 4.0);
    }
}
