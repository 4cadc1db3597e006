use approx::assert_relative_eq;
use fastHist::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn gaussian_like(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    // Sum of uniforms, centered near zero; some samples fall outside the range.
    (0..n)
        .map(|_| (0..4).map(|_| rng.gen_range(-1.0..1.0)).sum::<f64>())
        .collect()
}

fn random_weights(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(0.1..3.0)).collect()
}

#[test]
fn test_unweighted_parallel_is_bit_exact() {
    let x = gaussian_like(200_003, 7);

    let mut serial = vec![0i64; 50];
    histogram_unweighted(&x, 50, -3.0, 3.0, &mut serial).unwrap();

    let mut parallel = vec![0i64; 50];
    histogram_unweighted_parallel(&x, 50, -3.0, 3.0, &mut parallel).unwrap();
    assert_eq!(serial, parallel);

    for threads in [1, 2, 3, 8] {
        let res = Histogram::new()
            .bins(50)
            .range(-3.0, 3.0)
            .parallel(true)
            .threads(threads)
            .build()
            .unwrap()
            .fill(&x)
            .unwrap();
        assert_eq!(res.counts, serial, "threads = {threads}");
    }
}

#[test]
fn test_weighted_parallel_near_equivalence() {
    let x = gaussian_like(150_000, 11);
    let w = random_weights(150_000, 12);

    let (mut sumw, mut sumw2) = (vec![0.0; 40], vec![0.0; 40]);
    histogram_weighted(&x, &w, 40, -2.5, 2.5, &mut sumw, &mut sumw2).unwrap();

    let (mut psumw, mut psumw2) = (vec![0.0; 40], vec![0.0; 40]);
    histogram_weighted_parallel(&x, &w, 40, -2.5, 2.5, &mut psumw, &mut psumw2).unwrap();

    for i in 0..40 {
        assert_relative_eq!(sumw[i], psumw[i], max_relative = 1e-9);
        assert_relative_eq!(sumw2[i], psumw2[i], max_relative = 1e-9);
    }

    let res = Histogram::new()
        .bins(40)
        .range(-2.5, 2.5)
        .threads(4)
        .build()
        .unwrap()
        .fill_weighted(&x, &w)
        .unwrap();
    for i in 0..40 {
        assert_relative_eq!(sumw[i], res.sumw[i], max_relative = 1e-9);
        assert_relative_eq!(sumw2[i], res.sumw2[i], max_relative = 1e-9);
    }
}

#[test]
fn test_disjoint_halves_sum_to_whole() {
    let x = gaussian_like(100_000, 3);
    let (left, right) = x.split_at(37_123);

    let hist = Histogram::new().bins(25).range(-2.0, 2.0).build().unwrap();
    let whole = hist.fill(&x).unwrap();
    let a = hist.fill(left).unwrap();
    let b = hist.fill(right).unwrap();

    let summed: Vec<i64> = a.counts.iter().zip(&b.counts).map(|(p, q)| p + q).collect();
    assert_eq!(summed, whole.counts);
}

#[test]
fn test_parallel_overwrites_caller_buffers() {
    let x = gaussian_like(10_000, 5);
    let w = random_weights(10_000, 6);

    let mut counts = vec![i64::MAX / 2; 8];
    histogram_unweighted_parallel(&x, 8, -1.0, 1.0, &mut counts).unwrap();
    let mut expected = vec![0i64; 8];
    histogram_unweighted(&x, 8, -1.0, 1.0, &mut expected).unwrap();
    assert_eq!(counts, expected);

    let (mut sumw, mut sumw2) = (vec![f64::NAN; 8], vec![f64::NAN; 8]);
    histogram_weighted_parallel(&x, &w, 8, -1.0, 1.0, &mut sumw, &mut sumw2).unwrap();
    assert!(sumw.iter().chain(&sumw2).all(|v| v.is_finite()));
}

#[test]
fn test_f32_samples_parallel() {
    let x: Vec<f32> = gaussian_like(50_000, 9).into_iter().map(|v| v as f32).collect();

    let mut serial = vec![0i64; 30];
    histogram_unweighted(&x, 30, -3.0, 3.0, &mut serial).unwrap();
    let mut parallel = vec![0i64; 30];
    histogram_unweighted_parallel(&x, 30, -3.0, 3.0, &mut parallel).unwrap();

    assert_eq!(serial, parallel);
}
