/// Construct a monomial from a coefficient and, optionally, its exponents.
///
/// `monomial!(3.)` is a constant, the number of variables is inferred from
/// context. `monomial!(5.; 2, 3)` is `5 x_1^2 x_2^3`.
#[macro_export]
macro_rules! monomial {
    ($coeff:expr; $($exp:expr),+ $(,)?) => {
        $crate::Monomial::new($coeff, [$($exp),+])
    };
    ($coeff:expr) => {
        $crate::Monomial::constant($coeff)
    };
}

/// Assert that the floating point numbers are equal within the given epsilon.
#[macro_export]
macro_rules! assert_float_eq {
    ($a:expr, $b:expr, $eps:expr, $debug:expr) => {{
        // Make variables to avoid evaluating experssions multiple times.
        let a = $a;
        let b = $b;
        let eps = $eps;
        let error = f64::abs(a - b);
        if error > eps {
            eprintln!("{:?}", $debug);
        }
        assert!(
            error <= eps,
            "Assertion failed: |({}) - ({})| = {:e} <= {:e}",
            a,
            b,
            error,
            eps
        );
    }};
    ($a:expr, $b:expr, $eps:expr) => {
        assert_float_eq!($a, $b, $eps, "")
    };
    ($a:expr, $b:expr) => {
        assert_float_eq!($a, $b, f64::EPSILON)
    };
}
