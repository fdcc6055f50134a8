use crate::monomial::Monomial;

impl<const N: usize> std::fmt::Display for Monomial<N> {
    /// Write the coefficient followed by the variables with non-zero exponents,
    /// for example `3x_1^2x_3^1`. The variables are labelled starting from 1.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.coeff)?;
        for (i, exp) in self.exps.iter().enumerate() {
            if *exp != 0 {
                write!(f, "x_{}^{}", i + 1, exp)?;
            }
        }
        Ok(())
    }
}
