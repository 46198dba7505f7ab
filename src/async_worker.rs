use std::io;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use tamil_core::reverse::{transliterate_latin_to_ta, InputTool};
use tracing::debug;

/// How often `recv_timeout` re-checks the result channel.
const POLL_INTERVAL: Duration = Duration::from_millis(5);

/// Shared handle to an input tool usable from the worker thread.
pub type SharedInputTool = Arc<dyn InputTool + Send + Sync>;

// ---------------------------------------------------------------------------
// Work / Result types
// ---------------------------------------------------------------------------

struct ReverseWork {
    text: String,
    generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseResult {
    pub generation: u64,
    /// Latin text as submitted.
    pub source: String,
    /// Tamil suggestion, or `source` unchanged when the call failed.
    pub text: String,
}

// ---------------------------------------------------------------------------
// ReverseWorker
// ---------------------------------------------------------------------------

/// Runs reverse transliteration off the caller's thread.
///
/// Each `submit` supersedes earlier work: only the result for the latest
/// generation is delivered, and `invalidate` drops whatever is in flight.
/// Results that were already queued when a newer generation started are
/// discarded on receive.
pub struct ReverseWorker {
    work_tx: mpsc::Sender<ReverseWork>,
    result_rx: Mutex<mpsc::Receiver<ReverseResult>>,
    generation: Arc<AtomicU64>,
}

impl ReverseWorker {
    pub fn new(tool: SharedInputTool) -> io::Result<Self> {
        let generation = Arc::new(AtomicU64::new(0));
        let (work_tx, work_rx) = mpsc::channel::<ReverseWork>();
        let (result_tx, result_rx) = mpsc::channel::<ReverseResult>();
        {
            let gen = Arc::clone(&generation);
            thread::Builder::new()
                .name("tamil-reverse".into())
                .spawn(move || reverse_worker(work_rx, result_tx, gen, tool))?;
        }

        Ok(Self {
            work_tx,
            result_rx: Mutex::new(result_rx),
            generation,
        })
    }

    /// Queue `text` and return the generation its result will carry.
    pub fn submit(&self, text: String) -> u64 {
        let gen = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let _ = self.work_tx.send(ReverseWork {
            text,
            generation: gen,
        });
        gen
    }

    /// Cancel pending and in-flight work.
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Take the current generation's result if it has arrived.
    pub fn try_recv(&self) -> Option<ReverseResult> {
        let rx = self.result_rx.lock().ok()?;
        let current = self.generation.load(Ordering::SeqCst);
        while let Ok(result) = rx.try_recv() {
            if result.generation == current {
                return Some(result);
            }
            debug!(generation = result.generation, current, "stale reverse result dropped");
        }
        None
    }

    /// Wait up to `timeout` for the current generation's result.
    ///
    /// The result lock is only held while polling, so other receivers are
    /// not blocked for the length of the wait.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<ReverseResult> {
        let deadline = Instant::now() + timeout;
        loop {
            if let Some(result) = self.try_recv() {
                return Some(result);
            }
            let now = Instant::now();
            if now >= deadline {
                return None;
            }
            thread::sleep(POLL_INTERVAL.min(deadline - now));
        }
    }
}

// ---------------------------------------------------------------------------
// Worker thread
// ---------------------------------------------------------------------------

fn reverse_worker(
    rx: mpsc::Receiver<ReverseWork>,
    tx: mpsc::Sender<ReverseResult>,
    gen: Arc<AtomicU64>,
    tool: SharedInputTool,
) {
    while let Ok(work) = rx.recv() {
        // Drain: if multiple work items queued, skip to latest
        let mut latest = work;
        while let Ok(newer) = rx.try_recv() {
            latest = newer;
        }

        if latest.generation != gen.load(Ordering::SeqCst) {
            continue;
        }

        let text = transliterate_latin_to_ta(tool.as_ref(), &latest.text);

        if latest.generation != gen.load(Ordering::SeqCst) {
            debug!(generation = latest.generation, "stale reverse result dropped");
            continue;
        }

        let _ = tx.send(ReverseResult {
            generation: latest.generation,
            source: latest.text,
            text,
        });
    }
}
