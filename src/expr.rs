use crate::{derivative, error::Error, monomial::Monomial};
use std::{any::Any, fmt::Display};

/// Common interface of all terms that can be evaluated, differentiated and
/// rendered as text, over `N` variables.
pub trait Expression<const N: usize>: Display + Any {
    /// Evaluate the expression at the given values of the variables.
    fn solve(&self, values: &[f64; N]) -> f64;

    /// Compute the partial derivative with respect to all the variables flagged
    /// in `mask`, and write it to `output`. The previous contents of `output`
    /// are overwritten. `output` must be the same kind of expression as `self`,
    /// otherwise `Error::TypeMismatch` is returned and `output` is left as is.
    fn differentiate(&self, output: &mut dyn Expression<N>, mask: &[bool; N])
    -> Result<(), Error>;

    /// Used to downcast the output of `differentiate` to a concrete type.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<const N: usize> Expression<N> for Monomial<N> {
    fn solve(&self, values: &[f64; N]) -> f64 {
        Monomial::solve(self, values)
    }

    fn differentiate(
        &self,
        output: &mut dyn Expression<N>,
        mask: &[bool; N],
    ) -> Result<(), Error> {
        let deriv = output
            .as_any_mut()
            .downcast_mut::<Monomial<N>>()
            .ok_or(Error::TypeMismatch)?;
        derivative::differentiate(self, deriv, mask);
        Ok(())
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
