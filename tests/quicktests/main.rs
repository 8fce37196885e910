//! Property tests that drive both trees through random operations and compare them against
//! `std::collections::BTreeSet`.

use quickcheck::{Arbitrary, Gen};
use simplelog::{Config, LevelFilter, TestLogger};

mod avl;
mod unbalanced;

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<K> {
    /// Insert the K into the data structure
    Insert(K),
    /// Remove the K from the data structure
    Remove(K),
    /// Look the K up
    Contains(K),
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 2]) {
            Some(&0) => Op::Insert(K::arbitrary(g)),
            Some(&1) => Op::Remove(K::arbitrary(g)),
            _ => Op::Contains(K::arbitrary(g)),
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match self {
            Op::Insert(k) => Box::new(k.shrink().map(Op::Insert)),
            Op::Remove(k) => Box::new(k.shrink().map(Op::Remove)),
            Op::Contains(k) => Box::new(k.shrink().map(Op::Contains)),
        }
    }
}

/// Routes the trees' `log` output through the test harness. Safe to call from every test.
pub fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Debug, Config::default());
}
