//! Range-add / range-minimum queries over a fixed-length integer array.
//!
//! ```
//! use segtree_lazy::SegmentTree;
//!
//! let mut st = SegmentTree::new(&[1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
//! st.range_add(0, 3, 1).unwrap();
//! assert_eq!(st.range_min_query(0, 4), Ok(2));
//! assert!(st.range_min_query(0, 8).is_err());
//! ```

pub mod groups;

mod error;
mod segment_tree;

pub use error::Error;
pub use segment_tree::SegmentTree;

#[cfg(test)]
fn bench<F: FnOnce()>(name: &str, num_tabs: usize, f: F) {
    use std::time::{Duration, Instant};
    let start = Instant::now();
    f();
    let elapsed = start.elapsed();

    print!("BENCH `{}` :", name);
    for _ in 0..num_tabs {
        print!("\t");
    }

    if elapsed < Duration::from_millis(1) {
        println!(
            "{} {:03} nanos",
            elapsed.as_micros(),
            elapsed.as_nanos() % 1000,
        );
    } else if elapsed < Duration::from_secs(1) {
        println!(
            "{} {:03} micros",
            elapsed.as_millis(),
            elapsed.as_micros() % 1000,
        );
    } else {
        println!(
            "{} {:03} millis",
            elapsed.as_secs(),
            elapsed.subsec_millis(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    #[test]
    fn validate_segment_tree() {
        let mut rng = SmallRng::seed_from_u64(0x5eed);

        for &n in [1usize, 2, 3, 7, 8, 33, 100].iter() {
            let mut values: Vec<i64> = (0..n).map(|_| rng.gen_range(-1000..1000)).collect();
            let mut st = SegmentTree::new(&values).unwrap();
            assert_eq!(st.len(), n);

            for _ in 0..500 {
                let a = rng.gen_range(0..n);
                let b = rng.gen_range(0..n);
                let (l, r) = (a.min(b), a.max(b));

                if rng.gen_bool(0.5) {
                    let delta = rng.gen_range(-50..50);
                    st.range_add(l as isize, r as isize, delta).unwrap();
                    for x in values[l..=r].iter_mut() {
                        *x += delta;
                    }
                } else {
                    let expected = *values[l..=r].iter().min().unwrap();
                    assert_eq!(st.range_min_query(l as isize, r as isize), Ok(expected));
                }
            }
        }
    }

    #[test]
    #[ignore]
    fn bench_range_add() {
        let mut rng = SmallRng::from_entropy();

        const N: usize = 1 << 20;
        const Q: usize = 1 << 16;

        let values: Vec<i64> = (0..N).map(|_| rng.gen_range(0..1000_000)).collect();
        let ranges: Vec<_> = (0..Q)
            .map(|_| {
                let a = rng.gen_range(0..N);
                let b = rng.gen_range(0..N);
                (a.min(b), a.max(b))
            })
            .collect();

        let mut st = SegmentTree::new(&values).unwrap();
        let mut naive = values.clone();

        bench("SegmentTree::new", 2, || {
            SegmentTree::new(&values).unwrap();
        });
        println!();

        bench("SegmentTree::range_add", 1, || {
            for &(l, r) in ranges.iter() {
                st.range_add(l as isize, r as isize, 1).unwrap();
            }
        });
        bench("naive range_add", 2, || {
            for &(l, r) in ranges.iter() {
                for x in naive[l..=r].iter_mut() {
                    *x += 1;
                }
            }
        });
        println!();

        bench("SegmentTree::range_min_query", 1, || {
            for &(l, r) in ranges.iter() {
                st.range_min_query(l as isize, r as isize).unwrap();
            }
        });
        bench("naive range_min_query", 1, || {
            for &(l, r) in ranges.iter() {
                naive[l..=r].iter().min().unwrap();
            }
        });
        println!();

        assert_eq!(
            st.range_min_query(0, N as isize - 1),
            Ok(*naive.iter().min().unwrap())
        );
    }
}
