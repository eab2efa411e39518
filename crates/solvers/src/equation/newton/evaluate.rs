use std::sync::Arc;

use raphson_core::Model;

use super::{Cause, Failure, Role};

/// Calls `model` at `x` and rejects errors and non-finite values.
pub(super) fn evaluate<M>(model: &M, role: Role, x: f64) -> Result<f64, Failure>
where
    M: Model<Input = f64, Output = f64>,
{
    let value = model
        .call(&x)
        .map_err(|error| Failure::new(role, x, Cause::Model(Arc::new(error))))?;

    if !value.is_finite() {
        return Err(Failure::new(role, x, Cause::NonFinite { value }));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;
    use thiserror::Error;

    struct Reciprocal;

    impl Model for Reciprocal {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, x: &f64) -> Result<f64, Infallible> {
            Ok(1.0 / x)
        }
    }

    #[derive(Debug, Error)]
    #[error("negative input")]
    struct NegativeInput;

    struct CheckedSqrt;

    impl Model for CheckedSqrt {
        type Input = f64;
        type Output = f64;
        type Error = NegativeInput;

        fn call(&self, x: &f64) -> Result<f64, NegativeInput> {
            if *x < 0.0 {
                Err(NegativeInput)
            } else {
                Ok(x.sqrt())
            }
        }
    }

    #[test]
    fn finite_values_pass_through() {
        assert_relative_eq!(evaluate(&Reciprocal, Role::Function, 4.0).unwrap(), 0.25);
    }

    #[test]
    fn non_finite_values_fail() {
        let failure = evaluate(&Reciprocal, Role::Derivative, 0.0).unwrap_err();
        assert_eq!(failure.role, Role::Derivative);
        assert!(matches!(failure.cause, Cause::NonFinite { value } if value.is_infinite()));
    }

    #[test]
    fn model_errors_are_kept() {
        let failure = evaluate(&CheckedSqrt, Role::Function, -1.0).unwrap_err();
        assert_relative_eq!(failure.x, -1.0);
        match failure.cause {
            Cause::Model(error) => assert!(error.downcast_ref::<NegativeInput>().is_some()),
            other => panic!("unexpected cause: {other}"),
        }
    }
}
