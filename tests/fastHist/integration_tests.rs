use approx::assert_relative_eq;
use fastHist::prelude::*;

#[test]
fn test_reference_counts() {
    let x = vec![0.0, 1.0, 2.0, 2.5, 3.0];

    let res = Histogram::new()
        .bins(3)
        .range(0.0, 3.0)
        .parallel(false)
        .build()
        .unwrap()
        .fill(&x)
        .unwrap();

    assert_eq!(res.counts, vec![1, 1, 2]);
    assert_eq!(res.total(), 4);
}

#[test]
fn test_reference_weighted() {
    let x = vec![0.0, 1.0, 2.0, 2.5, 3.0];
    let w = vec![1.0, 1.0, 1.0, 2.0, 5.0];

    let res = Histogram::new()
        .bins(3)
        .range(0.0, 3.0)
        .build()
        .unwrap()
        .fill_weighted(&x, &w)
        .unwrap();

    assert_eq!(res.sumw, vec![1.0, 1.0, 3.0]);
    assert_eq!(res.sumw2, vec![1.0, 1.0, 5.0]);
    assert_relative_eq!(res.errors()[2], 5.0_f64.sqrt());
}

#[test]
fn test_free_functions_match_reference() {
    let x = [0.0f32, 1.0, 2.0, 2.5, 3.0];
    let w = [1.0f32, 1.0, 1.0, 2.0, 5.0];

    let mut counts = [0i64; 3];
    histogram_unweighted(&x, 3, 0.0, 3.0, &mut counts).unwrap();
    assert_eq!(counts, [1, 1, 2]);

    let mut par_counts = [0i64; 3];
    histogram_unweighted_parallel(&x, 3, 0.0, 3.0, &mut par_counts).unwrap();
    assert_eq!(par_counts, [1, 1, 2]);

    let (mut sumw, mut sumw2) = ([0.0; 3], [0.0; 3]);
    histogram_weighted(&x, &w, 3, 0.0, 3.0, &mut sumw, &mut sumw2).unwrap();
    assert_eq!(sumw, [1.0, 1.0, 3.0]);
    assert_eq!(sumw2, [1.0, 1.0, 5.0]);

    let (mut psumw, mut psumw2) = ([0.0; 3], [0.0; 3]);
    histogram_weighted_parallel(&x, &w, 3, 0.0, 3.0, &mut psumw, &mut psumw2).unwrap();
    assert_eq!(psumw, [1.0, 1.0, 3.0]);
    assert_eq!(psumw2, [1.0, 1.0, 5.0]);
}

#[test]
fn test_boundaries() {
    let hist = Histogram::new().bins(4).range(-1.0, 1.0).build().unwrap();

    // xmin lands in the first bin, xmax is never counted.
    let res = hist.fill(&[-1.0, 1.0]).unwrap();
    assert_eq!(res.counts, vec![1, 0, 0, 0]);

    let res = hist
        .fill(&[f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -1.5, 7.0])
        .unwrap();
    assert_eq!(res.total(), 0);
}

#[test]
fn test_empty_input() {
    let x: Vec<f64> = Vec::new();
    let w: Vec<f64> = Vec::new();
    let hist = Histogram::new().bins(5).range(0.0, 1.0).build().unwrap();

    assert_eq!(hist.fill(&x).unwrap().counts, vec![0; 5]);

    let res = hist.fill_weighted(&x, &w).unwrap();
    assert_eq!(res.sumw, vec![0.0; 5]);
    assert_eq!(res.sumw2, vec![0.0; 5]);
}

#[test]
fn test_integer_samples_and_weights() {
    let x: Vec<i64> = vec![0, 1, 1, 2, 9, 10, -3];
    let w: Vec<u32> = vec![1, 2, 3, 4, 5, 6, 7];

    let hist = Histogram::new().bins(5).range(0.0, 10.0).build().unwrap();

    let counts = hist.fill(&x).unwrap();
    assert_eq!(counts.counts, vec![3, 1, 0, 0, 1]);

    let weighted = hist.fill_weighted(&x, &w).unwrap();
    assert_eq!(weighted.sumw, vec![6.0, 4.0, 0.0, 0.0, 5.0]);
    assert_eq!(weighted.sumw2, vec![14.0, 16.0, 0.0, 0.0, 25.0]);
}

#[test]
fn test_conservation() {
    let x: Vec<f64> = (0..1000).map(|i| (i as f64) * 0.013 - 2.0).collect();
    let w: Vec<f64> = (0..1000).map(|i| 1.0 + (i % 7) as f64).collect();
    let (xmin, xmax) = (-1.0, 8.0);

    let hist = Histogram::new().bins(17).range(xmin, xmax).build().unwrap();

    let in_range = x.iter().filter(|&&v| v >= xmin && v < xmax).count() as i64;
    assert_eq!(hist.fill(&x).unwrap().total(), in_range);

    let expected_sumw: f64 = x
        .iter()
        .zip(&w)
        .filter(|(&v, _)| v >= xmin && v < xmax)
        .map(|(_, &wi)| wi)
        .sum();
    let res = hist.fill_weighted(&x, &w).unwrap();
    assert_relative_eq!(res.total(), expected_sumw, max_relative = 1e-12);
}

#[test]
fn test_density() {
    let x = vec![0.1, 0.2, 0.6, 0.7, 0.8, 0.9];
    let res = Histogram::new()
        .bins(2)
        .range(0.0, 1.0)
        .build()
        .unwrap()
        .fill(&x)
        .unwrap();

    let density = res.density().unwrap();
    let width = res.spec.bin_width();
    let integral: f64 = density.heights.iter().map(|h| h * width).sum();
    assert_relative_eq!(integral, 1.0, epsilon = 1e-12);
    assert_relative_eq!(density.heights[0], 2.0 / 3.0, epsilon = 1e-12);
    assert_eq!(density.uncertainties.map(|u| u.len()), Some(2));
}

#[cfg(feature = "cpu")]
#[test]
fn test_ndarray_integration() {
    use ndarray::Array1;

    let x = Array1::from_vec(vec![0.0, 1.0, 2.0, 2.5, 3.0]);
    let w = Array1::from_vec(vec![1.0, 1.0, 1.0, 2.0, 5.0]);

    let hist = Histogram::new().bins(3).range(0.0, 3.0).build().unwrap();
    assert_eq!(hist.fill(&x).unwrap().counts, vec![1, 1, 2]);
    assert_eq!(hist.fill_weighted(&x, &w).unwrap().sumw, vec![1.0, 1.0, 3.0]);
}

#[test]
fn test_error_handling() {
    assert!(matches!(
        Histogram::new().bins(0).range(0.0, 1.0).build(),
        Err(HistError::InvalidBinningSpec { .. })
    ));
    assert!(matches!(
        Histogram::new().bins(3).range(1.0, 1.0).build(),
        Err(HistError::InvalidBinningSpec { .. })
    ));
    assert!(matches!(
        Histogram::new().bins(3).build(),
        Err(HistError::MissingParameter(_))
    ));

    let hist = Histogram::new().bins(3).range(0.0, 1.0).build().unwrap();
    match hist.fill_weighted(&[0.1, 0.2, 0.3], &[1.0, 2.0]) {
        Err(HistError::LengthMismatch { samples, weights }) => {
            assert_eq!((samples, weights), (3, 2));
        }
        other => panic!("Expected LengthMismatch error, got {:?}", other),
    }

    let mut short = [0i64; 2];
    assert!(matches!(
        histogram_unweighted_parallel(&[0.5f64], 3, 0.0, 1.0, &mut short),
        Err(HistError::OutputSizeMismatch {
            expected: 3,
            got: 2
        })
    ));
}

#[test]
fn test_sample_just_below_xmax_is_counted() {
    let (xmin, xmax): (f64, f64) = (0.7000000000000001, 1.7392304845413262);
    let below = f64::from_bits(xmax.to_bits() - 1);
    let x = [xmin, below, xmax];
    let w = [1.0, 2.0, 4.0];

    let mut counts = [0i64; 12];
    histogram_unweighted(&x, 12, xmin, xmax, &mut counts).unwrap();
    assert_eq!(counts[0], 1);
    assert_eq!(counts[11], 1);
    assert_eq!(counts.iter().sum::<i64>(), 2);

    let mut par_counts = [0i64; 12];
    histogram_unweighted_parallel(&x, 12, xmin, xmax, &mut par_counts).unwrap();
    assert_eq!(par_counts, counts);

    let (mut sumw, mut sumw2) = ([0.0; 12], [0.0; 12]);
    histogram_weighted(&x, &w, 12, xmin, xmax, &mut sumw, &mut sumw2).unwrap();
    assert_eq!(sumw[11], 2.0);
    assert_eq!(sumw2[11], 4.0);
}

#[test]
fn test_unrepresentable_range_width_rejected() {
    let mut counts = [0i64; 4];

    let err = histogram_unweighted(&[-1e308, 0.0, 1e308], 4, -f64::MAX, f64::MAX, &mut counts)
        .unwrap_err();
    assert!(matches!(err, HistError::InvalidBinningSpec { .. }));

    let err = histogram_unweighted(
        &[0.0, 2.5e-311, 5e-311, 7.5e-311],
        4,
        0.0,
        1e-310,
        &mut counts,
    )
    .unwrap_err();
    assert!(matches!(err, HistError::InvalidBinningSpec { .. }));

    assert!(matches!(
        Histogram::new().bins(4).range(-f64::MAX, f64::MAX).build(),
        Err(HistError::InvalidBinningSpec { .. })
    ));
}
