use crate::{error::Error, monomial::Monomial};

/// Compute the partial derivative of `source` with respect to all the
/// variables flagged in `mask`, and write it to `deriv`.
///
/// Every flagged variable with a non-zero exponent is differentiated once: the
/// coefficient is multiplied by the exponent and the exponent is decremented.
/// Flagged variables with a zero exponent are skipped rather than zeroing the
/// whole term. If no variable was differentiated, `deriv` is set to the
/// canonical zero. The previous contents of `deriv` are never read.
pub fn differentiate<const N: usize>(
    source: &Monomial<N>,
    deriv: &mut Monomial<N>,
    mask: &[bool; N],
) {
    *deriv = *source;
    let mut is_constant = true;
    for (i, (flag, exp)) in mask.iter().zip(source.exps.iter()).enumerate() {
        if *flag && *exp != 0 {
            // Read from the source, write to the output.
            deriv.coeff *= *exp as f64;
            deriv.exps[i] -= 1;
            is_constant = false;
        }
    }
    if is_constant {
        deriv.nullify();
    }
}

/// Mask that flags all the variables.
pub const fn mask_all<const N: usize>() -> [bool; N] {
    [true; N]
}

/// Mask that flags none of the variables. Differentiating with this mask
/// always produces the canonical zero.
pub const fn mask_none<const N: usize>() -> [bool; N] {
    [false; N]
}

/// Mask that flags only the variable at `index`.
pub fn mask_single<const N: usize>(index: usize) -> Result<[bool; N], Error> {
    if index >= N {
        return Err(Error::IndexOutOfBounds(index, N));
    }
    let mut mask = [false; N];
    mask[index] = true;
    Ok(mask)
}

impl<const N: usize> Monomial<N> {
    /// Get the partial derivative with respect to the variables flagged in
    /// `mask`. See `differentiate` for details.
    pub fn deriv(&self, mask: &[bool; N]) -> Monomial<N> {
        let mut out = Monomial::zero();
        differentiate(self, &mut out, mask);
        out
    }

    /// Numerically estimate the partial derivative with respect to the
    /// variable at `index`, at the given `values`, using central differences
    /// with the step size `eps`.
    pub fn numerical_deriv(
        &self,
        index: usize,
        values: &[f64; N],
        eps: f64,
    ) -> Result<f64, Error> {
        if index >= N {
            return Err(Error::IndexOutOfBounds(index, N));
        }
        if !eps.is_finite() || eps <= 0. {
            return Err(Error::CannotComputeNumericDerivative);
        }
        let (left, right) = {
            let mut left = *values;
            let mut right = *values;
            left[index] -= eps;
            right[index] += eps;
            (self.solve(&left), self.solve(&right))
        };
        Ok((right - left) / (2. * eps))
    }
}
