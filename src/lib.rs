pub mod groups;

mod segment_tree;

pub use groups::{
    BoxedMonoid, FnMonoid, MaxMonoid, MinMonoid, Monoid, NumAdditiveMonoid,
    NumMultiplicativeMonoid,
};
pub use segment_tree::{Result, SegmentTree, SegmentTreeError, SumSegmentTree};

#[cfg(test)]
use rand::prelude::*;

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
fn bench_range_sum() {
    let mut rng = SmallRng::from_entropy();

    const N: usize = 1 << 16;
    const Q: usize = 1 << 10;

    let mut a: Vec<i64> = (0..N as i64).collect();
    a.shuffle(&mut rng);

    let queries: Vec<(usize, usize)> = (0..Q)
        .map(|_| {
            let l = rng.gen_range(0..N);
            (l, rng.gen_range(l..N))
        })
        .collect();

    let mut st = SumSegmentTree::<i64>::with_len(N);
    bench("SegmentTree::build", 2, || st.build(a.iter().cloned()));
    bench("SegmentTree::from_values", 1, || {
        drop(SumSegmentTree::<i64>::from(a.clone()))
    });
    println!();

    let mut fast = Vec::with_capacity(Q);
    let mut slow = Vec::with_capacity(Q);
    bench("SegmentTree::get", 2, || {
        for &(l, r) in queries.iter() {
            fast.push(st.get(l, r));
        }
    });
    bench("Iterator::sum", 2, || {
        for &(l, r) in queries.iter() {
            slow.push(a[l..=r].iter().sum::<i64>());
        }
    });
    assert_eq!(fast, slow);
    println!();

    bench("SegmentTree::update_point", 1, || {
        for i in 0..N {
            st.update_point(i, i as i64 + *st.leaf(i).unwrap());
        }
    });
    for (i, x) in a.iter_mut().enumerate() {
        *x += i as i64;
    }
    println!();

    assert_eq!(st.leaf(3 * N / 4), Some(&a[3 * N / 4]));
    assert_eq!(st.total(), a.iter().sum::<i64>());
}

#[test]
pub fn main() {
    bench_range_sum();
    println!();
}
