/// A callable model that maps an input to an output.
///
/// Solvers call models without knowing where the numbers come from: a parsed
/// expression, a closure-backed struct, or anything else that can fail in a
/// typed way.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// Models are usable behind a shared reference.
impl<M: Model + ?Sized> Model for &M {
    type Input = M::Input;
    type Output = M::Output;
    type Error = M::Error;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        (**self).call(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    struct Double;

    impl Model for Double {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, input: &f64) -> Result<f64, Infallible> {
            Ok(2.0 * input)
        }
    }

    fn call_twice<M: Model<Input = f64, Output = f64>>(model: M, x: f64) -> Option<f64> {
        let once = model.call(&x).ok()?;
        model.call(&once).ok()
    }

    #[test]
    fn reference_forwards_to_model() {
        let model = Double;
        assert_eq!(call_twice(&model, 1.5), Some(6.0));
        assert_eq!(call_twice(model, -1.0), Some(-4.0));
    }
}
