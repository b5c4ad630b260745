use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use reqwest::Client;
use tokio::time::Instant;
use tracing::{debug, error, info, warn};

use crate::error::{AppError, AppResult, RunError, TemplateError};
use crate::http::{build_client, send_get};
use crate::template::{
    TemplateLines, TemplateReader, parse_and_validate_url, prepare_url_from_bytes,
};
use crate::validation::{RunParameters, TemplateConfig};

use super::progress::ProgressBoard;

/// Validated settings of a `get` run.
#[derive(Debug, Clone)]
pub(crate) struct RunSettings {
    pub(crate) threads: usize,
    pub(crate) count: i64,
    pub(crate) sleep: Duration,
    pub(crate) max_duration: Option<Duration>,
    pub(crate) url: String,
    pub(crate) no_color: bool,
}

impl RunSettings {
    /// Converts parameters that already passed validation. Out of range
    /// values collapse to zero.
    pub(crate) fn from_parameters(params: &RunParameters, no_color: bool) -> Self {
        let max_duration_secs = u64::try_from(params.max_duration_secs).unwrap_or(0);
        Self {
            threads: usize::try_from(params.threads).unwrap_or(0),
            count: params.count.max(0),
            sleep: Duration::from_millis(u64::try_from(params.sleep_ms).unwrap_or(0)),
            max_duration: (max_duration_secs > 0).then(|| Duration::from_secs(max_duration_secs)),
            url: params.url.clone(),
            no_color,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RunSummary {
    pub(crate) succeeded: u64,
    pub(crate) failed: u64,
    pub(crate) elapsed: Duration,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let millis = self.elapsed.as_millis();
        write!(
            f,
            "Completed {} request(s): {} succeeded, {} failed in {}.{:03}s",
            self.succeeded.saturating_add(self.failed),
            self.succeeded,
            self.failed,
            millis.checked_div(1000).unwrap_or(0),
            millis.checked_rem(1000).unwrap_or(0)
        )
    }
}

enum UrlSource {
    Static(String),
    Template {
        url_template: String,
        reader: TemplateReader,
    },
}

impl UrlSource {
    async fn resolve(&mut self) -> Result<String, TemplateError> {
        match self {
            Self::Static(url) => Ok(url.clone()),
            Self::Template {
                url_template,
                reader,
            } => {
                let (line_number, line) = reader.random_line().await?;
                debug!(
                    "Using template line #{}: '{}'",
                    line_number,
                    String::from_utf8_lossy(&line)
                );
                prepare_url_from_bytes(url_template, &line)
            }
        }
    }
}

struct RunContext {
    client: Client,
    settings: RunSettings,
    lines: Option<Arc<TemplateLines>>,
    static_url: String,
    board: Arc<ProgressBoard>,
    succeeded: AtomicU64,
    failed: AtomicU64,
}

impl RunContext {
    async fn url_source(&self, worker: usize) -> Result<UrlSource, RunError> {
        match &self.lines {
            Some(lines) => {
                let reader = TemplateLines::reader(lines)
                    .await
                    .map_err(|source| RunError::WorkerSetupFailed { worker, source })?;
                Ok(UrlSource::Template {
                    url_template: self.settings.url.clone(),
                    reader,
                })
            }
            None => Ok(UrlSource::Static(self.static_url.clone())),
        }
    }
}

/// Runs `threads` independent workers, each sending up to `count` GET
/// requests. Returns once every worker has stopped.
///
/// # Errors
///
/// Returns an error when the client, the template index, or a worker can
/// not be set up, or when a worker task fails.
pub(crate) async fn run_get(
    settings: RunSettings,
    template: TemplateConfig,
) -> AppResult<RunSummary> {
    let started = Instant::now();
    info!(
        "Setting up GET execution to URL address {} with threads = {}, amount of requests = {}, sleep millis timeout = {}",
        settings.url,
        settings.threads,
        settings.count,
        settings.sleep.as_millis()
    );

    let lines = if template.enabled {
        let lines = TemplateLines::index(&template)
            .await
            .map_err(AppError::template)?;
        Some(Arc::new(lines))
    } else {
        None
    };
    // A templated URL is only valid once its placeholders are filled.
    let static_url = if lines.is_some() {
        String::new()
    } else {
        parse_and_validate_url(&settings.url).map_err(AppError::template)?
    };

    let board = Arc::new(ProgressBoard::new(
        settings.threads,
        settings.count,
        settings.no_color,
    ));
    let renderer = ProgressBoard::spawn_renderer(&board);
    let context = Arc::new(RunContext {
        client: build_client()?,
        settings,
        lines,
        static_url,
        board: Arc::clone(&board),
        succeeded: AtomicU64::new(0),
        failed: AtomicU64::new(0),
    });

    let mut handles = Vec::with_capacity(context.settings.threads);
    for worker in 0..context.settings.threads {
        debug!("Setting up new thread with id: {}", worker);
        let context = Arc::clone(&context);
        handles.push(tokio::spawn(async move {
            let result = run_worker(worker, &context).await;
            context.board.complete(worker);
            result
        }));
    }

    let mut first_error: Option<AppError> = None;
    for (worker, handle) in handles.into_iter().enumerate() {
        let result = match handle.await {
            Ok(result) => result,
            Err(source) => {
                board.complete(worker);
                Err(RunError::WorkerJoinFailed { worker, source })
            }
        };
        if let Err(err) = result {
            error!("{}", err);
            if first_error.is_none() {
                first_error = Some(AppError::run(err));
            }
        }
    }

    board.finish();
    if let Some(renderer) = renderer
        && let Err(err) = renderer.await
    {
        warn!("Progress renderer stopped unexpectedly: {}", err);
    }

    if let Some(err) = first_error {
        return Err(err);
    }

    let summary = RunSummary {
        succeeded: context.succeeded.load(Ordering::Acquire),
        failed: context.failed.load(Ordering::Acquire),
        elapsed: started.elapsed(),
    };
    info!("{}", summary);
    Ok(summary)
}

async fn run_worker(worker: usize, context: &RunContext) -> Result<(), RunError> {
    let settings = &context.settings;
    let mut source = context.url_source(worker).await?;
    let started = Instant::now();
    if let Some(max_duration) = settings.max_duration {
        debug!(
            "Determined maximum execution duration of {}s for thread with id: {}",
            max_duration.as_secs(),
            worker
        );
    }

    for _ in 0..settings.count {
        let succeeded = match source.resolve().await {
            Ok(url) => send_get(&context.client, &url).await.is_success(),
            Err(err) => {
                error!("Thread #{} could not resolve a request URL: {}", worker, err);
                false
            }
        };
        let counter = if succeeded {
            &context.succeeded
        } else {
            &context.failed
        };
        counter.fetch_add(1, Ordering::AcqRel);
        context.board.increment(worker);

        if !settings.sleep.is_zero() {
            debug!(
                "Sleeping thread with id: {} for {} millis before the next iteration",
                worker,
                settings.sleep.as_millis()
            );
            tokio::time::sleep(settings.sleep).await;
        }

        if let Some(max_duration) = settings.max_duration
            && started.elapsed() > max_duration
        {
            warn!(
                "Exceeded maximum execution duration of {} second(s). Terminating execution of thread with id: {}",
                max_duration.as_secs(),
                worker
            );
            context.board.complete(worker);
            break;
        }
    }

    Ok(())
}
