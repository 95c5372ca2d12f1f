//! Bounded, fixed-interval polling until a query result satisfies a predicate.
//!
//! A node only makes an effect visible in validated state one or more ledger closes
//! after it was submitted, so callers poll. [`Scanner`] is the pure state machine: it
//! is fed one query outcome at a time and decides whether to keep polling, stop with
//! the value, or give up. [`scan`] and [`scan_until`] drive it with a real query and
//! a `tokio` timer between attempts.
//!
//! An unsatisfying value is not an error, nor is a transient failure such as
//! `actNotFound`. Any other error ends the scan at once.

use crate::error::RpcError;
use std::fmt;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// Fixed delay between attempts and the total number of attempts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanPolicy {
    pub interval: Duration,
    /// At least 1.
    pub max_attempts: u32,
}

impl ScanPolicy {
    pub fn new(interval: Duration, max_attempts: u32) -> Self {
        Self {
            interval,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Enough attempts to cover `timeout` at `interval` spacing, rounded up.
    pub fn from_timeout(timeout: Duration, interval: Duration) -> Self {
        let attempts = if interval.is_zero() {
            1
        } else {
            let whole = timeout.as_nanos().div_ceil(interval.as_nanos());
            u32::try_from(whole).unwrap_or(u32::MAX)
        };
        Self::new(interval, attempts)
    }
}

impl Default for ScanPolicy {
    fn default() -> Self {
        Self::new(Duration::from_secs(1), 20)
    }
}

/// Errors the scanner may retry past.
pub trait Transient {
    fn is_transient(&self) -> bool;
}

impl Transient for RpcError {
    fn is_transient(&self) -> bool {
        RpcError::is_transient(self)
    }
}

/// The most recent attempt that did not end the scan.
#[derive(Debug, PartialEq)]
pub enum Observation<T, E> {
    /// The query succeeded but the predicate did not hold.
    Unsatisfied(T),
    /// The query failed with a transient error.
    NotYet(E),
}

#[derive(Debug, PartialEq)]
pub enum ScanState<T, E> {
    /// `attempt` attempts have been made; poll again after the interval.
    Polling { attempt: u32 },
    Satisfied(T),
    TimedOut {
        attempts: u32,
        last: Option<Observation<T, E>>,
    },
}

#[derive(Debug, Error)]
pub enum ScanError<T: fmt::Debug, E: std::error::Error + 'static> {
    #[error("not confirmed after {attempts} attempts (last observation: {last:?})")]
    ConfirmationTimeout {
        attempts: u32,
        last: Option<Observation<T, E>>,
    },

    /// The query failed with an error that retrying will not fix.
    #[error(transparent)]
    Query(E),
}

impl<T: fmt::Debug, E: std::error::Error + 'static> ScanError<T, E> {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::ConfirmationTimeout { .. })
    }
}

/// The attempt counter and last observation of one scan.
#[derive(Debug)]
pub struct Scanner<T, E> {
    policy: ScanPolicy,
    attempts: u32,
    last: Option<Observation<T, E>>,
}

impl<T, E: Transient> Scanner<T, E> {
    pub fn new(policy: ScanPolicy) -> Self {
        Self {
            policy,
            attempts: 0,
            last: None,
        }
    }

    pub fn policy(&self) -> &ScanPolicy {
        &self.policy
    }

    /// Attempts observed so far.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Record one query outcome and move to the next state.
    ///
    /// A non-transient error is handed back as `Err` and the scan should stop. Once the
    /// attempt budget is spent every further call reports `TimedOut`.
    pub fn observe(
        &mut self,
        outcome: Result<T, E>,
        predicate: &dyn Fn(&T) -> bool,
    ) -> Result<ScanState<T, E>, E> {
        self.attempts = self.attempts.saturating_add(1);

        match outcome {
            Ok(value) if predicate(&value) => return Ok(ScanState::Satisfied(value)),
            Ok(value) => self.last = Some(Observation::Unsatisfied(value)),
            Err(e) if e.is_transient() => self.last = Some(Observation::NotYet(e)),
            Err(e) => return Err(e),
        }

        if self.attempts >= self.policy.max_attempts {
            Ok(ScanState::TimedOut {
                attempts: self.attempts,
                last: self.last.take(),
            })
        } else {
            Ok(ScanState::Polling {
                attempt: self.attempts,
            })
        }
    }
}

/// Poll `query` until it succeeds.
pub async fn scan<T, E, F, Fut>(policy: &ScanPolicy, query: F) -> Result<T, ScanError<T, E>>
where
    T: fmt::Debug,
    E: std::error::Error + Transient + 'static,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    scan_until(policy, query, |_| true).await
}

/// Poll `query` until its result satisfies `predicate`.
///
/// The query runs at most `policy.max_attempts` times, with `policy.interval` of
/// sleep between two attempts and none after the last.
pub async fn scan_until<T, E, F, Fut, P>(
    policy: &ScanPolicy,
    mut query: F,
    predicate: P,
) -> Result<T, ScanError<T, E>>
where
    T: fmt::Debug,
    E: std::error::Error + Transient + 'static,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    P: Fn(&T) -> bool,
{
    let mut scanner = Scanner::new(*policy);
    loop {
        let outcome = query().await;
        match scanner.observe(outcome, &predicate).map_err(ScanError::Query)? {
            ScanState::Satisfied(value) => {
                tracing::debug!(attempts = scanner.attempts(), "scan satisfied");
                return Ok(value);
            }
            ScanState::TimedOut { attempts, last } => {
                tracing::debug!(attempts, "scan timed out");
                return Err(ScanError::ConfirmationTimeout { attempts, last });
            }
            ScanState::Polling { attempt } => {
                tracing::trace!(attempt, max = policy.max_attempts, "not yet, polling again");
                tokio::time::sleep(policy.interval).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use tokio::time::Instant;

    #[derive(Debug, Error, PartialEq)]
    enum Probe {
        #[error("not yet")]
        NotYet,
        #[error("broken")]
        Broken,
    }

    impl Transient for Probe {
        fn is_transient(&self) -> bool {
            *self == Probe::NotYet
        }
    }

    fn policy(attempts: u32) -> ScanPolicy {
        ScanPolicy::new(Duration::from_secs(1), attempts)
    }

    #[test]
    fn observe_transitions() {
        let mut scanner: Scanner<u32, Probe> = Scanner::new(policy(3));
        let even = |v: &u32| v % 2 == 0;

        assert_eq!(scanner.observe(Ok(1), &even), Ok(ScanState::Polling { attempt: 1 }));
        assert_eq!(
            scanner.observe(Err(Probe::NotYet), &even),
            Ok(ScanState::Polling { attempt: 2 })
        );
        assert_eq!(scanner.observe(Ok(4), &even), Ok(ScanState::Satisfied(4)));
    }

    #[test]
    fn observe_times_out_with_last_observation() {
        let mut scanner: Scanner<u32, Probe> = Scanner::new(policy(2));
        let never = |_: &u32| false;

        scanner.observe(Err(Probe::NotYet), &never).unwrap();
        assert_eq!(
            scanner.observe(Ok(7), &never),
            Ok(ScanState::TimedOut {
                attempts: 2,
                last: Some(Observation::Unsatisfied(7)),
            })
        );
    }

    #[test]
    fn observe_returns_fatal_errors() {
        let mut scanner: Scanner<u32, Probe> = Scanner::new(policy(5));
        assert_eq!(scanner.observe(Err(Probe::Broken), &|_| true), Err(Probe::Broken));
    }

    #[test]
    fn policy_from_timeout_rounds_up() {
        let p = ScanPolicy::from_timeout(Duration::from_millis(2500), Duration::from_secs(1));
        assert_eq!(p.max_attempts, 3);
        assert_eq!(ScanPolicy::from_timeout(Duration::ZERO, Duration::from_secs(1)).max_attempts, 1);
        assert_eq!(ScanPolicy::new(Duration::ZERO, 0).max_attempts, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn runs_exactly_the_attempt_budget() {
        let calls = Cell::new(0u32);
        let started = Instant::now();

        let result = scan_until(
            &policy(4),
            || {
                calls.set(calls.get() + 1);
                async { Ok::<u32, Probe>(1) }
            },
            |v| *v > 1,
        )
        .await;

        assert_eq!(calls.get(), 4);
        match result {
            Err(ScanError::ConfirmationTimeout { attempts, last }) => {
                assert_eq!(attempts, 4);
                assert_eq!(last, Some(Observation::Unsatisfied(1)));
            }
            other => panic!("expected timeout, got {other:?}"),
        }
        // Three sleeps between four attempts, none after the last.
        assert_eq!(started.elapsed(), Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn transient_errors_then_success() {
        let calls = Cell::new(0u32);
        let value = scan(&policy(5), || {
            calls.set(calls.get() + 1);
            let n = calls.get();
            async move {
                if n < 3 {
                    Err(Probe::NotYet)
                } else {
                    Ok(n)
                }
            }
        })
        .await
        .unwrap();
        assert_eq!(value, 3);
        assert_eq!(calls.get(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn fatal_error_stops_immediately() {
        let calls = Cell::new(0u32);
        let result = scan(&policy(5), || {
            calls.set(calls.get() + 1);
            async { Err::<u32, _>(Probe::Broken) }
        })
        .await;
        assert!(matches!(result, Err(ScanError::Query(Probe::Broken))));
        assert_eq!(calls.get(), 1);
    }
}
