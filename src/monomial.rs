use crate::error::Error;

/// A single product term `c * x_1^e_1 * x_2^e_2 * ... * x_N^e_N`.
///
/// The number of variables `N` is part of the type, so monomials of different
/// dimensions can never be mixed. A monomial with a zero coefficient always has
/// all its exponents set to zero. This is referred to as the canonical zero.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Monomial<const N: usize> {
    pub(crate) coeff: f64,
    pub(crate) exps: [u32; N],
}

/// Monomial of a single variable.
pub type Monomial1D = Monomial<1>;

pub type MaybeMonomial<const N: usize> = Result<Monomial<N>, Error>;

impl<const N: usize> Default for Monomial<N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize> Monomial<N> {
    /// The canonical zero monomial.
    pub const fn zero() -> Self {
        Monomial {
            coeff: 0.,
            exps: [0; N],
        }
    }

    /// A constant, i.e. a monomial with all exponents set to zero.
    pub fn constant(coeff: f64) -> Self {
        Self::new(coeff, [0; N])
    }

    /// Create a monomial with the given coefficient and exponents. If the
    /// coefficient is zero, the exponents are discarded and the canonical zero
    /// is returned.
    pub fn new(coeff: f64, exps: [u32; N]) -> Self {
        let mut out = Monomial { coeff, exps };
        if out.coeff == 0. {
            out.nullify();
        }
        out
    }

    /// Same as `new` but the exponents are read from a slice, whose length
    /// must match the number of variables.
    pub fn from_slice(coeff: f64, exps: &[u32]) -> MaybeMonomial<N> {
        let exps: [u32; N] = exps
            .try_into()
            .map_err(|_| Error::DimensionMismatch(exps.len(), N))?;
        Ok(Self::new(coeff, exps))
    }

    pub fn coeff(&self) -> f64 {
        self.coeff
    }

    pub fn exps(&self) -> &[u32; N] {
        &self.exps
    }

    /// Exponent of the variable at `index`.
    pub fn exp(&self, index: usize) -> Result<u32, Error> {
        self.exps
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfBounds(index, N))
    }

    /// Number of variables.
    pub const fn dim(&self) -> usize {
        N
    }

    /// Sum of all exponents.
    pub fn degree(&self) -> u64 {
        self.exps.iter().map(|e| *e as u64).sum()
    }

    pub fn is_zero(&self) -> bool {
        self.coeff == 0.
    }

    /// Check if this is a constant. The canonical zero is also a constant.
    pub fn is_constant(&self) -> bool {
        self.exps.iter().all(|e| *e == 0)
    }

    /// Reset this monomial to the canonical zero.
    pub fn nullify(&mut self) {
        self.coeff = 0.;
        self.exps.fill(0);
    }

    /// Replace the exponents. A zero monomial stays canonical, i.e. the new
    /// exponents are dropped.
    pub fn set_exponents(&mut self, exps: &[u32; N]) {
        if self.is_zero() {
            self.nullify();
        } else {
            self.exps.copy_from_slice(exps);
        }
    }

    /// Evaluate the monomial at the given values of the variables. Zero raised
    /// to the power zero is treated as 1.
    pub fn solve(&self, values: &[f64; N]) -> f64 {
        self.exps
            .iter()
            .zip(values.iter())
            .fold(self.coeff, |result, (exp, val)| {
                result * f64::powf(*val, *exp as f64)
            })
    }

    /// Same as `solve`, but with the values coming from a slice whose length
    /// must match the number of variables.
    pub fn solve_slice(&self, values: &[f64]) -> Result<f64, Error> {
        let values: &[f64; N] = values
            .try_into()
            .map_err(|_| Error::DimensionMismatch(values.len(), N))?;
        Ok(self.solve(values))
    }
}
