use crate::monomial::Monomial;

impl<const N: usize> Monomial<N> {
    /// Produce the latex expression for the monomial, e.g. `3 x_{1}^{2} x_{2}`.
    pub fn to_latex(&self) -> String {
        let mut lx = self.coeff.to_string();
        for (i, exp) in self.exps.iter().enumerate() {
            match exp {
                0 => {} // Variable doesn't appear in the term.
                1 => lx.push_str(&format!(" x_{{{}}}", i + 1)),
                _ => lx.push_str(&format!(" x_{{{}}}^{{{exp}}}", i + 1)),
            }
        }
        lx
    }
}
