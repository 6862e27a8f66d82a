//! Randomized property checks for metricfold-agg.
//!
//! Inputs are drawn from a seeded ChaCha8 generator so every run is
//! reproducible. Values are small integers so that sums are exact and
//! results can be compared with `==` regardless of summation order.

use metricfold_agg::{
    aggregate, align_up, densify, merge, AggregateConfig, Interval, RegularizedSeries, Sample,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const CASES: u64 = 200;

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

struct Case {
    series: Vec<Vec<Sample>>,
    start: u32,
    end: u32,
    interval: u32,
}

fn random_series(rng: &mut ChaCha8Rng, base: u32, span: u32) -> Vec<Sample> {
    let n = rng.gen_range(0..30);
    (0..n)
        .map(|_| {
            let timestamp = base + rng.gen_range(0..=span);
            let value = if rng.gen_bool(0.1) {
                f64::NAN
            } else {
                f64::from(rng.gen_range(-50_i32..=50))
            };
            Sample::new(timestamp, value)
        })
        .collect()
}

fn random_case(seed: u64) -> Case {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let interval = rng.gen_range(1..=60);
    let base = rng.gen_range(0..100_000);
    let span = rng.gen_range(0..2_000);
    let n_series = rng.gen_range(0..6);
    let series = (0..n_series)
        .map(|_| random_series(&mut rng, base, span))
        .collect();
    let start = base + rng.gen_range(0..=span);
    let end = if rng.gen_bool(0.1) {
        start.saturating_sub(rng.gen_range(0..100))
    } else {
        start + rng.gen_range(0..=span)
    };
    Case {
        series,
        start,
        end,
        interval,
    }
}

fn run(case: &Case) -> RegularizedSeries {
    aggregate(&case.series, case.start, case.end, case.interval).expect("valid case")
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn output_is_deterministic() {
    for seed in 0..CASES {
        let case = random_case(seed);
        let first = run(&case);
        let second = run(&case);
        let sequential = AggregateConfig::new(case.start, case.end, case.interval)
            .unwrap()
            .with_parallel(false)
            .aggregate(&case.series)
            .unwrap();
        assert_eq!(first, second, "seed {seed}: repeated call differs");
        assert_eq!(first, sequential, "seed {seed}: parallel and sequential differ");
    }
}

#[test]
fn output_is_dense_over_aligned_window() {
    for seed in 0..CASES {
        let case = random_case(seed);
        let out = run(&case);
        let interval = Interval::new(case.interval).unwrap();
        let lo = align_up(case.start, interval).unwrap();
        let hi = align_up(case.end, interval).unwrap();
        let expected_len = if lo > hi {
            0
        } else {
            ((hi - lo) / case.interval) as usize + 1
        };

        assert_eq!(out.len(), expected_len, "seed {seed}: wrong length");
        for (i, ts) in out.timestamps().enumerate() {
            assert_eq!(ts % case.interval, 0, "seed {seed}: {ts} off grid");
            assert_eq!(ts, lo + i as u32 * case.interval, "seed {seed}: gap at {i}");
        }
    }
}

#[test]
fn single_series_equals_densify() {
    for seed in 0..CASES {
        let case = random_case(seed);
        let Some(first) = case.series.first() else {
            continue;
        };
        let interval = Interval::new(case.interval).unwrap();
        let got = aggregate(&[first], case.start, case.end, case.interval).unwrap();
        let expected = densify(first, case.start, case.end, interval).unwrap();
        assert_eq!(got, expected, "seed {seed}");
    }
}

#[test]
fn appended_duplicates_do_not_change_result() {
    for seed in 0..CASES {
        let case = random_case(seed);
        let baseline = run(&case);

        let mut rng = ChaCha8Rng::seed_from_u64(seed ^ 0xD0D0);
        let noisy: Vec<Vec<Sample>> = case
            .series
            .iter()
            .map(|s| {
                let mut out = Vec::with_capacity(s.len() * 2);
                for &sample in s {
                    out.push(sample);
                    // Copies always follow their original, so the first occurrence is unchanged.
                    while rng.gen_bool(0.3) {
                        let copy = out[rng.gen_range(0..out.len())];
                        out.push(copy);
                    }
                }
                out
            })
            .collect();

        let noisy_case = Case {
            series: noisy,
            ..case
        };
        assert_eq!(baseline, run(&noisy_case), "seed {seed}: duplicates changed the result");
    }
}

#[test]
fn empty_series_is_merge_identity() {
    for seed in 0..CASES {
        let case = random_case(seed);
        let interval = Interval::new(case.interval).unwrap();
        let blank = densify(&[], case.start, case.end, interval).unwrap();
        for s in &case.series {
            let dense = densify(s, case.start, case.end, interval).unwrap();
            assert_eq!(merge(&dense, &blank), dense, "seed {seed}");
            assert_eq!(merge(&blank, &dense), dense, "seed {seed}");
        }
    }
}

#[test]
fn merge_is_commutative() {
    for seed in 0..CASES {
        let case = random_case(seed);
        let interval = Interval::new(case.interval).unwrap();
        let dense: Vec<RegularizedSeries> = case
            .series
            .iter()
            .map(|s| densify(s, case.start, case.end, interval).unwrap())
            .collect();
        for pair in dense.windows(2) {
            assert_eq!(merge(&pair[0], &pair[1]), merge(&pair[1], &pair[0]), "seed {seed}");
        }
    }
}

#[test]
fn series_order_does_not_matter() {
    for seed in 0..CASES {
        let case = random_case(seed);
        let forward = run(&case);
        let mut series = case.series;
        series.reverse();
        let reversed = Case { series, ..case };
        assert_eq!(forward, run(&reversed), "seed {seed}");
    }
}
