//! Batch wallet generation.
//!
//! Wallets are independent, so a batch is embarrassingly parallel. Results
//! keep their generation index order. A failure stops the batch but never
//! discards the wallets generated before it.

use rayon::{ThreadPoolBuilder, prelude::*};

use receipt::{Error, Result};

use crate::wallet::Wallet;

/// Outcome of a batch request.
#[derive(Debug, Default)]
pub struct Batch {
    /// Wallets generated, in index order.
    pub wallets: Vec<Wallet>,
    /// First failure, if the batch stopped early.
    pub error: Option<Error>,
}

impl Batch {
    /// True if every requested wallet was generated.
    pub const fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// Turn the batch into a plain result, dropping partial output on failure.
    pub fn into_result(self) -> Result<Vec<Wallet>> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.wallets),
        }
    }
}

/// Generate `count` wallets for `selector` on the calling thread.
pub fn generate_batch(selector: &str, count: usize) -> Batch {
    take_prefix((0..count).map(|_| Wallet::generate(selector)))
}

/// Generate `count` wallets on a rayon pool of `workers` threads.
///
/// `workers == 0` uses the global pool, sized to the available cores, and
/// `workers == 1` runs on the calling thread. The returned batch holds the
/// wallets before the first failure in index order.
pub fn generate_batch_parallel(selector: &str, count: usize, workers: usize) -> Batch {
    parallel_with(count, workers, |_| Wallet::generate(selector))
}

fn parallel_with<F>(count: usize, workers: usize, generate: F) -> Batch
where
    F: Fn(usize) -> Result<Wallet> + Send + Sync,
{
    if workers == 1 || count <= 1 {
        return take_prefix((0..count).map(generate));
    }

    let run = || {
        (0..count)
            .into_par_iter()
            .map(&generate)
            .collect::<Vec<_>>()
    };

    let results = if workers == 0 {
        tracing::debug!(count, "generating wallets on the global pool");
        run()
    } else {
        match ThreadPoolBuilder::new().num_threads(workers).build() {
            Ok(pool) => {
                tracing::debug!(count, workers, "generating wallets in parallel");
                pool.install(run)
            }
            Err(err) => {
                tracing::warn!(error = %err, "could not build worker pool, using the global pool");
                run()
            }
        }
    };

    take_prefix(results)
}

/// Keep results up to the first error.
fn take_prefix<I>(results: I) -> Batch
where
    I: IntoIterator<Item = Result<Wallet>>,
{
    let results = results.into_iter();
    let mut batch = Batch {
        wallets: Vec::with_capacity(results.size_hint().0),
        error: None,
    };
    for (index, result) in results.enumerate() {
        match result {
            Ok(wallet) => batch.wallets.push(wallet),
            Err(err) => {
                tracing::warn!(index, error = %err, "wallet generation failed, stopping batch");
                batch.error = Some(err);
                break;
            }
        }
    }
    batch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::ChainKind;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn key_hex(index: usize) -> String {
        format!("{:064x}", index + 1)
    }

    /// Deterministic wallet per index, failing at `fail_at`.
    fn indexed(fail_at: usize) -> impl Fn(usize) -> Result<Wallet> + Send + Sync {
        move |index| {
            if index == fail_at {
                Err(Error::Entropy(rand_core_error()))
            } else {
                Wallet::from_private_key_hex("ERC20", &key_hex(index))
            }
        }
    }

    fn assert_in_order(wallets: &[Wallet]) {
        for (index, wallet) in wallets.iter().enumerate() {
            assert_eq!(wallet.private_key_hex(), key_hex(index));
        }
    }

    fn rand_core_error() -> receipt::rand_core::Error {
        receipt::rand_core::Error::new("entropy unavailable")
    }

    mod sequential_tests {
        use super::*;

        #[test]
        fn test_sequential_batch() {
            let batch = generate_batch("TRC20", 25);
            assert!(batch.is_complete());
            assert_eq!(batch.wallets.len(), 25);
            assert!(batch.wallets.iter().all(|w| w.kind() == ChainKind::Tron));
        }

        #[test]
        fn test_zero_count() {
            let batch = generate_batch("ERC20", 0);
            assert!(batch.is_complete());
            assert!(batch.wallets.is_empty());
            assert!(generate_batch_parallel("ERC20", 0, 4).wallets.is_empty());
        }

        #[test]
        fn test_failure_keeps_prior_wallets() {
            let batch = take_prefix((0..10).map(indexed(3)));
            assert_eq!(batch.wallets.len(), 3);
            assert_in_order(&batch.wallets);
            assert!(matches!(batch.error, Some(Error::Entropy(_))));
            assert!(!batch.is_complete());
            assert!(batch.into_result().is_err());
        }

        #[test]
        fn test_stops_generating_after_failure() {
            let calls = AtomicUsize::new(0);
            let batch = parallel_with(10, 1, |index| {
                calls.fetch_add(1, Ordering::Relaxed);
                indexed(2)(index)
            });
            assert_eq!(batch.wallets.len(), 2);
            assert_eq!(calls.load(Ordering::Relaxed), 3);
        }
    }

    mod parallel_tests {
        use super::*;

        #[test]
        fn test_parallel_batch() {
            let batch = generate_batch_parallel("Polygon", 103, 4);
            assert!(batch.is_complete());
            assert_eq!(batch.wallets.len(), 103);
            assert!(batch.wallets.iter().all(|w| w.chain() == "Polygon"));

            let keys: HashSet<&str> = batch.wallets.iter().map(Wallet::private_key_hex).collect();
            assert_eq!(keys.len(), 103);
        }

        #[test]
        fn test_parallel_keeps_index_order() {
            let batch = parallel_with(64, 4, indexed(usize::MAX));
            assert!(batch.is_complete());
            assert_eq!(batch.wallets.len(), 64);
            assert_in_order(&batch.wallets);
        }

        #[test]
        fn test_parallel_failure_keeps_prefix() {
            let batch = parallel_with(40, 4, indexed(27));
            assert_eq!(batch.wallets.len(), 27);
            assert_in_order(&batch.wallets);
            assert!(matches!(batch.error, Some(Error::Entropy(_))));
        }

        #[test]
        fn test_parallel_failure_at_start_drops_everything() {
            let batch = parallel_with(40, 4, indexed(0));
            assert!(batch.wallets.is_empty());
            assert!(matches!(batch.error, Some(Error::Entropy(_))));
        }

        #[test]
        fn test_parallel_reports_first_failure_by_index() {
            let batch = parallel_with(20, 0, |index| {
                if index == 5 {
                    Err(Error::InvalidKeyRange)
                } else if index == 15 {
                    Err(Error::Entropy(rand_core_error()))
                } else {
                    indexed(usize::MAX)(index)
                }
            });
            assert_eq!(batch.wallets.len(), 5);
            assert!(matches!(batch.error, Some(Error::InvalidKeyRange)));
        }

        #[test]
        fn test_parallel_uses_global_pool() {
            let wallets = generate_batch_parallel("ERC20", 16, 0).into_result().unwrap();
            assert_eq!(wallets.len(), 16);
        }

        #[test]
        fn test_more_workers_than_wallets() {
            let batch = generate_batch_parallel("TRC20", 3, 64);
            assert_eq!(batch.wallets.len(), 3);
        }
    }
}
