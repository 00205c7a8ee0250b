use std::time::{Duration, Instant};

/// Report cadence in records. The wall-clock throttle below still applies on
/// top of this.
const REPORT_EVERY: usize = 5000;

/// Throttled throughput reporting for the export loop.
///
/// Writes `\r`-prefixed progress lines to stderr so they overwrite in place,
/// at most once per wall-clock second, and a final summary line when the run
/// completes.
pub struct ProgressReporter {
    started: Instant,
    last_report: Instant,
}

impl ProgressReporter {
    pub fn new() -> Self {
        let now = Instant::now();
        Self { started: now, last_report: now }
    }

    /// Called once per exported record with the cumulative count.
    pub fn record(&mut self, count: usize) {
        if let Some(line) = self.progress_line(count, Instant::now()) {
            eprint!("{line}");
        }
    }

    /// Print the final summary and return the elapsed time.
    pub fn finish(&self, count: usize) -> Duration {
        let elapsed = self.started.elapsed();
        eprintln!(
            "\r{}k messages exported in {}s ({} msgs/sec):",
            count / 1000,
            elapsed.as_secs(),
            rate(count, elapsed),
        );
        elapsed
    }

    fn progress_line(&mut self, count: usize, now: Instant) -> Option<String> {
        if count % REPORT_EVERY != 0 {
            return None;
        }
        if now.duration_since(self.last_report) <= Duration::from_secs(1) {
            return None;
        }
        self.last_report = now;
        let elapsed = now.duration_since(self.started);
        Some(format!("\r{}k exported ({} msgs/sec)      ", count / 1000, rate(count, elapsed)))
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn rate(count: usize, elapsed: Duration) -> u64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 { (count as f64 / secs) as u64 } else { 0 }
}
