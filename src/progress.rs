// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Render progress.  Workers report finished rows through a shared
//! reference; the bar redraws only when the whole percentage changes,
//! so the counter is the only thing the threads contend on.

use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// Width of the bar, in characters.  One character per percent.
const BAR_WIDTH: usize = 100;

/// Something that wants to hear about finished work.
pub trait Progress: Sync {
    /// `units` more units of work are done.
    fn advance(&self, units: usize);
    /// All work is done.
    fn finish(&self);
}

/// Ignores everything.
#[derive(Copy, Clone, Debug, Default)]
pub struct Silent;

impl Progress for Silent {
    fn advance(&self, _units: usize) {}
    fn finish(&self) {}
}

/// Formats a duration as whole minutes and seconds, e.g. `2m 5s`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{}m {}s", secs / 60, secs % 60)
}

/// The bar itself: `=` for every completed percent, `>` at the
/// current one, blanks after.
pub fn bar(percent: usize) -> String {
    (0..BAR_WIDTH)
        .map(|i| {
            if i < percent {
                '='
            } else if i == percent {
                '>'
            } else {
                ' '
            }
        })
        .collect()
}

/// A whole status line, without the trailing carriage return.
pub fn progress_line(percent: usize, elapsed: Duration) -> String {
    format!(
        "[{}] {}%, Elapsed Time: {} ",
        bar(percent),
        percent,
        format_elapsed(elapsed)
    )
}

/// A text progress bar on standard error.
#[derive(Debug)]
pub struct ProgressBar {
    total: usize,
    done: AtomicUsize,
    // One more than the last percentage drawn; zero before the first draw.
    shown: AtomicUsize,
    start: Instant,
}

impl ProgressBar {
    /// A bar that reaches 100% after `total` units.
    pub fn new(total: usize) -> ProgressBar {
        ProgressBar {
            total,
            done: AtomicUsize::new(0),
            shown: AtomicUsize::new(0),
            start: Instant::now(),
        }
    }

    fn percent(&self, done: usize) -> usize {
        if self.total == 0 {
            return 100;
        }
        (done.min(self.total) * 100) / self.total
    }
}

impl Progress for ProgressBar {
    fn advance(&self, units: usize) {
        let done = self.done.fetch_add(units, Ordering::Relaxed) + units;
        let percent = self.percent(done);
        if self.shown.fetch_max(percent + 1, Ordering::Relaxed) <= percent {
            let line = progress_line(percent, self.start.elapsed());
            let _ = write!(io::stderr(), "{}\r", line);
        }
    }

    fn finish(&self) {
        let elapsed = format_elapsed(self.start.elapsed());
        let _ = writeln!(
            io::stderr(),
            "\r{:width$}\rTime Taken to render: {}",
            "",
            elapsed,
            width = BAR_WIDTH + 40
        );
        info!("render finished in {}", elapsed);
    }
}
