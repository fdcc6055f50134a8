use criterion::{Criterion, criterion_group, criterion_main};
use monodiff::{Expression, Monomial, interval};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hint::black_box;

const N_TERMS: usize = 1024;
const N_QUERIES: usize = 64;
const DIM: usize = 4;

fn sample_range(range: (f64, f64), rng: &mut StdRng) -> f64 {
    range.0 + rng.random::<f64>() * (range.1 - range.0)
}

fn random_monomials(rng: &mut StdRng) -> Vec<Monomial<DIM>> {
    (0..N_TERMS)
        .map(|_| {
            let coeff = sample_range((-10., 10.), rng);
            let exps: [u32; DIM] = std::array::from_fn(|_| rng.random_range(0..6));
            Monomial::new(coeff, exps)
        })
        .collect()
}

fn random_queries(rng: &mut StdRng) -> Vec<[f64; DIM]> {
    (0..N_QUERIES)
        .map(|_| std::array::from_fn(|_| sample_range((-2., 2.), rng)))
        .collect()
}

fn b_solve(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let terms = random_monomials(&mut rng);
    let queries = random_queries(&mut rng);
    c.bench_function("monomial-solve", |b| {
        b.iter(|| {
            let mut sum = 0.;
            for q in queries.iter() {
                for t in terms.iter() {
                    sum += t.solve(black_box(q));
                }
            }
            black_box(sum)
        })
    });
}

fn b_differentiate(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(234);
    let terms = random_monomials(&mut rng);
    let masks: Vec<[bool; DIM]> = (0..16)
        .map(|_| std::array::from_fn(|_| rng.random::<bool>()))
        .collect();
    let mut deriv = Monomial::<DIM>::zero();
    c.bench_function("monomial-differentiate", |b| {
        b.iter(|| {
            for mask in masks.iter() {
                for t in terms.iter() {
                    monodiff::differentiate(t, &mut deriv, black_box(mask));
                    black_box(&deriv);
                }
            }
        })
    });
    let exprs: Vec<Box<dyn Expression<DIM>>> = terms
        .iter()
        .map(|t| Box::new(*t) as Box<dyn Expression<DIM>>)
        .collect();
    c.bench_function("expression-differentiate", |b| {
        b.iter(|| {
            for mask in masks.iter() {
                for e in exprs.iter() {
                    e.differentiate(&mut deriv, black_box(mask)).unwrap();
                    black_box(&deriv);
                }
            }
        })
    });
}

fn b_solve_interval(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(17);
    let terms = random_monomials(&mut rng);
    let queries: Vec<[inari::Interval; DIM]> = random_queries(&mut rng)
        .iter()
        .map(|q| {
            std::array::from_fn(|i| {
                interval::from_bounds(q[i], q[i] + sample_range((0., 0.5), &mut rng))
                    .expect("Cannot create interval")
            })
        })
        .collect();
    c.bench_function("monomial-solve-interval", |b| {
        b.iter(|| {
            for q in queries.iter() {
                for t in terms.iter() {
                    black_box(t.solve_interval(black_box(q)).unwrap());
                }
            }
        })
    });
}

criterion_group!(bench, b_solve, b_differentiate, b_solve_interval);
criterion_main!(bench);
