use std::io::{IsTerminal, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use crossterm::{
    cursor, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use tokio::time::Instant;

/// Bars are drawn only when each worker sends more requests than this.
const MIN_COUNT_FOR_PROGRESS: i64 = 9;
const REDRAW_INTERVAL: Duration = Duration::from_millis(250);
const BAR_SIZE: usize = 30;

/// Per-worker progress counters with an optional stderr renderer.
pub(crate) struct ProgressBoard {
    bars: Vec<ProgressBar>,
    started: Instant,
    finished: AtomicBool,
    visible: bool,
    no_color: bool,
}

struct ProgressBar {
    current: AtomicU64,
    total: AtomicU64,
}

impl ProgressBar {
    fn snapshot(&self) -> (u64, u64) {
        let total = self.total.load(Ordering::Acquire);
        let current = self.current.load(Ordering::Acquire).min(total);
        (current, total)
    }
}

impl ProgressBoard {
    pub(crate) fn new(workers: usize, count: i64, no_color: bool) -> Self {
        let total = u64::try_from(count).unwrap_or(0);
        let bars = (0..workers)
            .map(|_| ProgressBar {
                current: AtomicU64::new(0),
                total: AtomicU64::new(total),
            })
            .collect();
        Self {
            bars,
            started: Instant::now(),
            finished: AtomicBool::new(false),
            visible: count > MIN_COUNT_FOR_PROGRESS && std::io::stderr().is_terminal(),
            no_color,
        }
    }

    pub(crate) const fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn increment(&self, id: usize) {
        if let Some(bar) = self.bars.get(id) {
            bar.current.fetch_add(1, Ordering::AcqRel);
        }
    }

    /// Marks a bar as done at its current position.
    pub(crate) fn complete(&self, id: usize) {
        if let Some(bar) = self.bars.get(id) {
            let current = bar.current.load(Ordering::Acquire);
            bar.total.fetch_min(current, Ordering::AcqRel);
        }
    }

    pub(crate) fn is_done(&self, id: usize) -> bool {
        self.bars.get(id).is_none_or(|bar| {
            let (current, total) = bar.snapshot();
            current >= total
        })
    }

    pub(crate) fn all_done(&self) -> bool {
        (0..self.bars.len()).all(|id| self.is_done(id))
    }

    /// Stops the renderer after its next frame.
    pub(crate) fn finish(&self) {
        self.finished.store(true, Ordering::Release);
    }

    /// Spawns the redraw task. Returns `None` when bars are hidden.
    pub(crate) fn spawn_renderer(board: &Arc<Self>) -> Option<tokio::task::JoinHandle<()>> {
        if !board.is_visible() {
            return None;
        }
        let board = Arc::clone(board);
        Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(REDRAW_INTERVAL);
            let mut drawn = false;
            loop {
                ticker.tick().await;
                let last_frame = board.all_done() || board.finished.load(Ordering::Acquire);
                if board.render(drawn).is_err() {
                    break;
                }
                drawn = true;
                if last_frame {
                    break;
                }
            }
        }))
    }

    fn render(&self, redraw: bool) -> Result<(), std::io::Error> {
        let mut out = std::io::stderr();
        if redraw && let Ok(rows) = u16::try_from(self.bars.len()) {
            queue!(out, cursor::MoveUp(rows))?;
        }
        let elapsed_ms = self.started.elapsed().as_millis();
        for (id, bar) in self.bars.iter().enumerate() {
            let (current, total) = bar.snapshot();
            queue!(out, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine))?;
            for segment in build_progress_line(id, current, total, elapsed_ms) {
                match segment.color {
                    Some(color) if !self.no_color => queue!(
                        out,
                        SetForegroundColor(color),
                        Print(&segment.text),
                        ResetColor
                    )?,
                    _ => queue!(out, Print(&segment.text))?,
                }
            }
            queue!(out, Print("\n"))?;
        }
        out.flush()
    }
}

fn build_progress_line(
    id: usize,
    current: u64,
    total: u64,
    elapsed_ms: u128,
) -> Vec<ProgressSegment> {
    let label = ProgressSegment::colored(format!("Thread #{} ", id), Color::Yellow);
    if current >= total {
        let bar = format!("[{}]", "#".repeat(BAR_SIZE));
        return vec![
            label,
            ProgressSegment::plain(bar),
            ProgressSegment::colored(" DONE".to_owned(), Color::Green),
        ];
    }

    let current = u128::from(current);
    let total = u128::from(total);
    let size = u128::from(u64::try_from(BAR_SIZE).unwrap_or(u64::MAX));

    let scaled = current
        .saturating_mul(size)
        .checked_div(total)
        .unwrap_or(0);
    let complete_size = usize::try_from(scaled).unwrap_or(BAR_SIZE).min(BAR_SIZE);
    let incomplete_size = BAR_SIZE.saturating_sub(complete_size);
    let bar = format!(
        "[{}{}]",
        "#".repeat(complete_size),
        "-".repeat(incomplete_size)
    );

    let percent_x100 = current
        .saturating_mul(10_000)
        .checked_div(total)
        .unwrap_or(0);
    let percent_whole = percent_x100.checked_div(100).unwrap_or(0);
    let percent_frac = percent_x100.checked_rem(100).unwrap_or(0);
    let percent_text = format!(" {}.{:02}%", percent_whole, percent_frac);

    vec![
        label,
        ProgressSegment::plain(bar),
        ProgressSegment::colored(percent_text, Color::Cyan),
        ProgressSegment::plain(eta_text(current, total, elapsed_ms)),
    ]
}

fn eta_text(current: u128, total: u128, elapsed_ms: u128) -> String {
    let remaining = total.saturating_sub(current);
    match elapsed_ms
        .saturating_mul(remaining)
        .checked_div(current)
    {
        Some(eta_ms) => {
            let eta_tenths = eta_ms.checked_div(100).unwrap_or(0);
            let secs = eta_tenths.checked_div(10).unwrap_or(0);
            let tenths = eta_tenths.checked_rem(10).unwrap_or(0);
            format!(" | ETA {}.{}s", secs, tenths)
        }
        None => " | ETA --".to_owned(),
    }
}

struct ProgressSegment {
    text: String,
    color: Option<Color>,
}

impl ProgressSegment {
    const fn plain(text: String) -> Self {
        Self { text, color: None }
    }

    const fn colored(text: String, color: Color) -> Self {
        Self {
            text,
            color: Some(color),
        }
    }
}
