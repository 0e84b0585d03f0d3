//! Precision validity and the ambient precision limit.
//!
//! Precisions are signed 64-bit integers, more negative meaning finer. The
//! evaluator derives many offsets from a requested precision (`p − 2`,
//! `2p − 1`, `p − msd − 3`, …), so a precision is only accepted when it sits
//! far from integer overflow. On top of that, callers may install a
//! thread-local bound on how fine any approximation during a computation is
//! allowed to get; that bound is the sole escape hatch for queries that would
//! otherwise refine forever, such as comparing two equal values.

use std::cell::Cell;

use crate::error::RealError;

/// Whether `p` may be used as a precision: its top four bits must be all
/// zeros or all ones, leaving headroom for derived offsets.
pub fn is_precision_valid(p: i64) -> bool {
    let high = p >> 60;
    let top = p >> 61;
    (high ^ top) == 0
}

thread_local! {
    static PRECISION_LIMIT: Cell<Option<u64>> = const { Cell::new(None) };
}

/// Runs `f` with an ambient bound on precision magnitude: any approximation
/// at `|p| > limit` fails with [`RealError::PrecisionOverflow`] instead of
/// recursing. Limits nest; the previous limit is restored on exit.
pub fn with_precision_limit<R>(limit: u64, f: impl FnOnce() -> R) -> R {
    PRECISION_LIMIT.with(|cell| {
        let prev = cell.replace(Some(limit));
        let out = f();
        cell.set(prev);
        out
    })
}

/// Fails fast when `|p|` exceeds the ambient precision limit. A no-op when
/// no limit is installed.
pub fn check_precision_overflow(p: i64) -> Result<(), RealError> {
    PRECISION_LIMIT.with(|cell| match cell.get() {
        Some(limit) if p.unsigned_abs() > limit => Err(RealError::PrecisionOverflow),
        _ => Ok(()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinary_precisions_are_valid() {
        assert!(is_precision_valid(0));
        assert!(is_precision_valid(-1));
        assert!(is_precision_valid(-1000));
        assert!(is_precision_valid(1000));
        assert!(is_precision_valid(-(1 << 59)));
    }

    #[test]
    fn near_overflow_precisions_are_rejected() {
        assert!(!is_precision_valid(i64::MAX));
        assert!(!is_precision_valid(i64::MIN));
        assert!(!is_precision_valid(1 << 60));
        assert!(!is_precision_valid(-(1 << 61)));
        assert!(is_precision_valid((1 << 60) - 1));
    }

    #[test]
    fn limit_is_scoped_and_restored() {
        assert!(check_precision_overflow(1 << 40).is_ok());

        with_precision_limit(100, || {
            assert!(check_precision_overflow(-100).is_ok());
            assert_eq!(
                check_precision_overflow(-101),
                Err(RealError::PrecisionOverflow)
            );
            with_precision_limit(10, || {
                assert_eq!(
                    check_precision_overflow(-11),
                    Err(RealError::PrecisionOverflow)
                );
            });
            // inner scope popped, outer limit back in force
            assert!(check_precision_overflow(-100).is_ok());
        });

        assert!(check_precision_overflow(1 << 40).is_ok());
    }
}
