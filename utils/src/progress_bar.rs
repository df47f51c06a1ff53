/*
MIT License
Copyright (c) 2021 Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// How often (in percent points) progress gets reported
const REPORT_STEP: usize = 10;

/// Reports the progress of a long process (e.g., a render) through
/// the `log` facade. It can be shared between threads.
pub struct ProgressBar {
    label: String,
    last_progress: AtomicUsize,
    counter: AtomicUsize,
    total_count: usize,
    start: Instant,
}

impl ProgressBar {
    /// Creates a new `ProgressBar` expecting `total_count` calls to `tic()`
    pub fn new(label: String, total_count: usize) -> Self {
        log::info!("{}: starting ({} tasks)", label, total_count);
        Self {
            label,
            total_count,
            last_progress: AtomicUsize::new(0),
            counter: AtomicUsize::new(0),
            start: Instant::now(),
        }
    }

    /// Registers one finished task
    pub fn tic(&self) {
        let c = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        let progress = self.percent(c);
        let lp = self.last_progress.load(Ordering::Relaxed);
        if progress >= lp + REPORT_STEP
            && self
                .last_progress
                .compare_exchange(lp, progress, Ordering::Relaxed, Ordering::Relaxed)
                .is_ok()
        {
            log::info!("{}: {}%", self.label, progress);
        }
    }

    /// The number of tasks registered so far
    pub fn count(&self) -> usize {
        self.counter.load(Ordering::Relaxed)
    }

    /// Time since the `ProgressBar` was created
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Reports the end of the process
    pub fn done(&self) {
        log::info!(
            "{}: done after {:.2} seconds",
            self.label,
            self.start.elapsed().as_secs_f64()
        );
    }

    fn percent(&self, count: usize) -> usize {
        if self.total_count == 0 {
            return 100;
        }
        (100 * count / self.total_count).min(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count() {
        let bar = ProgressBar::new("test".to_string(), 7);
        for _ in 0..7 {
            bar.tic();
        }
        assert_eq!(bar.count(), 7);
        assert_eq!(bar.percent(7), 100);
        assert_eq!(bar.percent(3), 42);
        bar.done();
    }

    #[test]
    fn test_empty() {
        let bar = ProgressBar::new("empty".to_string(), 0);
        assert_eq!(bar.percent(0), 100);
    }
}
