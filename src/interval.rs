use crate::{error::Error, monomial::Monomial};
use inari::Interval;

/// Create an interval from the bounds. The bounds are swapped if they're in
/// the wrong order.
pub fn from_bounds(mut lower: f64, mut upper: f64) -> Result<Interval, Error> {
    if upper < lower {
        (lower, upper) = (upper, lower);
    }
    inari::interval!(lower, upper).map_err(|_| Error::InvalidInterval)
}

impl<const N: usize> Monomial<N> {
    /// Compute an interval that contains all values of the monomial when each
    /// variable is somewhere in its corresponding interval in `values`.
    pub fn solve_interval(&self, values: &[Interval; N]) -> Result<Interval, Error> {
        let mut out =
            inari::interval!(self.coeff, self.coeff).map_err(|_| Error::InvalidInterval)?;
        for (exp, val) in self.exps.iter().zip(values.iter()) {
            if *exp == 0 {
                continue; // Same as multiplying by one.
            }
            let power = i32::try_from(*exp).map_err(|_| Error::ExponentOverflow(*exp))?;
            // Integer powers give tighter bounds than the general power,
            // e.g. even powers never go negative.
            out = out * val.pown(power);
        }
        Ok(out)
    }
}
