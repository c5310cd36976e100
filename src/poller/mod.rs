//! Recurring snapshot polling.
//!
//! [`Poller`] owns a timer that triggers a fetch cycle immediately and then
//! once per interval. Each cycle publishes [`PollState::Loading`], fetches
//! on its own task, filters and sorts the listing, and publishes
//! [`PollState::Ready`] or [`PollState::Failed`].
//!
//! Cycles are started by the clock, not by completion of the previous one,
//! so several fetches can be in flight at once. Every cycle is tagged with
//! a sequence number; a result is applied only if its cycle is still the
//! most recently started one and the poller has not been stopped. The
//! network call of a superseded cycle is never aborted, only ignored.

pub mod transform;

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::error::FetchError;
use crate::fetcher::AssetSource;
use crate::models::AssetRecord;

pub use transform::select_tracked;

/// User-facing message for every failed cycle, whatever the cause.
pub const FAILURE_MESSAGE: &str = "Failed to load data. Please try again.";

/// Default refresh cadence.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(30_000);

/// Assets tracked when nothing else is configured.
pub const DEFAULT_TRACKED_IDS: [&str; 3] = ["bitcoin", "ethereum", "tether"];

/// Filtered, rank-ordered result of one successful cycle.
pub type Snapshot = Arc<[AssetRecord]>;

/// What the presentation layer should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollState {
    /// No result yet, or a refresh is under way.
    Loading,
    /// The latest snapshot.
    Ready(Snapshot),
    /// The latest cycle failed.
    Failed(String),
}

impl PollState {
    /// Projects the state onto the `{items, is_loading, error}` triple a
    /// renderer reads.
    pub fn view(&self) -> PollView<'_> {
        match self {
            PollState::Loading => PollView {
                items: &[],
                is_loading: true,
                error: None,
            },
            PollState::Ready(snapshot) => PollView {
                items: snapshot,
                is_loading: false,
                error: None,
            },
            PollState::Failed(reason) => PollView {
                items: &[],
                is_loading: false,
                error: Some(reason.as_str()),
            },
        }
    }
}

/// Borrowed presentation view of a [`PollState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollView<'a> {
    pub items: &'a [AssetRecord],
    pub is_loading: bool,
    pub error: Option<&'a str>,
}

/// When [`PollState::Loading`] is published.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadingMode {
    /// At the start of every cycle, so a renderer flips to its loading
    /// view on each refresh.
    #[default]
    EveryCycle,
    /// Only until the first cycle completes.
    FirstCycleOnly,
}

/// Construction parameters for a [`Poller`].
#[derive(Debug, Clone)]
pub struct PollerConfig {
    pub interval: Duration,
    pub tracked_ids: HashSet<String>,
    pub loading: LoadingMode,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            tracked_ids: DEFAULT_TRACKED_IDS.iter().map(|s| s.to_string()).collect(),
            loading: LoadingMode::default(),
        }
    }
}

/// Receives every state the poller publishes.
///
/// Calls are made from a single task, one at a time.
pub trait Subscriber: Send + 'static {
    fn publish(&mut self, state: PollState);
}

impl<F> Subscriber for F
where
    F: FnMut(PollState) + Send + 'static,
{
    fn publish(&mut self, state: PollState) {
        self(state);
    }
}

/// Handle to a running poll loop.
///
/// Dropping the handle stops the loop.
pub struct Poller {
    live: Arc<AtomicBool>,
    driver: Option<JoinHandle<()>>,
}

impl Poller {
    /// Starts polling `source` and publishing to `subscriber`.
    ///
    /// The first cycle begins immediately. Must be called from within a
    /// tokio runtime.
    pub fn start<S, B>(config: &PollerConfig, source: S, subscriber: B) -> Self
    where
        S: AssetSource,
        B: Subscriber,
    {
        let live = Arc::new(AtomicBool::new(true));

        let interval = if config.interval.is_zero() {
            warn!("Zero poll interval requested, using 1ms");
            Duration::from_millis(1)
        } else {
            config.interval
        };

        let driver = Driver {
            source: Arc::new(source),
            tracked: Arc::new(config.tracked_ids.clone()),
            loading: config.loading,
            live: Arc::clone(&live),
            subscriber,
            started: 0,
            settled: false,
        };

        info!(
            interval_ms = interval.as_millis() as u64,
            tracked = config.tracked_ids.len(),
            "Starting poller"
        );
        let handle = tokio::spawn(driver.run(interval));

        Self {
            live,
            driver: Some(handle),
        }
    }

    /// Stops the timer and discards the result of any fetch still in
    /// flight. Safe to call more than once.
    pub fn stop(&mut self) {
        self.live.store(false, Ordering::SeqCst);
        if let Some(handle) = self.driver.take() {
            handle.abort();
            info!("Poller stopped");
        }
    }

    /// Returns `true` until [`stop`](Self::stop) is called.
    pub fn is_running(&self) -> bool {
        self.driver.is_some()
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Result of one fetch, tagged with the cycle that issued it.
struct CycleOutcome {
    seq: u64,
    result: Result<Vec<AssetRecord>, FetchError>,
}

/// State owned by the driver task.
struct Driver<S, B> {
    source: Arc<S>,
    tracked: Arc<HashSet<String>>,
    loading: LoadingMode,
    live: Arc<AtomicBool>,
    subscriber: B,
    /// Sequence number of the most recently started cycle.
    started: u64,
    /// Whether any cycle has published a result yet.
    settled: bool,
}

impl<S, B> Driver<S, B>
where
    S: AssetSource,
    B: Subscriber,
{
    async fn run(mut self, period: Duration) {
        let (tx, mut rx) = mpsc::unbounded_channel::<CycleOutcome>();

        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => self.begin_cycle(&tx),
                Some(outcome) = rx.recv() => self.finish_cycle(outcome),
            }
        }
    }

    fn begin_cycle(&mut self, tx: &mpsc::UnboundedSender<CycleOutcome>) {
        self.started += 1;
        let seq = self.started;

        if self.loading == LoadingMode::EveryCycle || !self.settled {
            self.publish(PollState::Loading);
        }

        debug!(seq, "Starting fetch cycle");
        let source = Arc::clone(&self.source);
        let tx = tx.clone();
        tokio::spawn(async move {
            let result = source.fetch().await;
            // The driver is gone once the poller stops; the result is moot.
            let _ = tx.send(CycleOutcome { seq, result });
        });
    }

    fn finish_cycle(&mut self, outcome: CycleOutcome) {
        if outcome.seq != self.started {
            debug!(
                seq = outcome.seq,
                latest = self.started,
                "Discarding stale cycle result"
            );
            return;
        }

        let state = match outcome.result {
            Ok(records) => {
                let snapshot = select_tracked(records, &self.tracked);
                debug!(seq = outcome.seq, count = snapshot.len(), "Cycle ready");
                PollState::Ready(snapshot.into())
            }
            Err(e) => {
                warn!(seq = outcome.seq, "Fetch cycle failed: {e}");
                PollState::Failed(FAILURE_MESSAGE.to_string())
            }
        };

        self.settled = true;
        self.publish(state);
    }

    fn publish(&mut self, state: PollState) {
        if !self.live.load(Ordering::SeqCst) {
            return;
        }
        self.subscriber.publish(state);
    }
}
