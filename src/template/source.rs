use std::io::SeekFrom;
use std::path::PathBuf;
use std::sync::Arc;

use rand::Rng;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncSeekExt, BufReader};

use crate::error::TemplateError;
use crate::validation::TemplateConfig;

const LINE_DELIMITER: u8 = b'\n';
const READ_BUFFER_SIZE: usize = 32 * 1024;

/// Byte offsets of every line of a validated template file.
#[derive(Debug)]
pub struct TemplateLines {
    path: PathBuf,
    offsets: Vec<u64>,
}

impl TemplateLines {
    /// Streams the template file once and records where each line starts.
    /// Indexing stops after `config.size` lines.
    ///
    /// # Errors
    ///
    /// Returns an error when the file can not be opened or read.
    pub async fn index(config: &TemplateConfig) -> Result<Self, TemplateError> {
        let read_error = |source| TemplateError::ReadLine {
            path: config.path.clone(),
            source,
        };
        let file = File::open(&config.path).await.map_err(read_error)?;
        let mut reader = BufReader::with_capacity(READ_BUFFER_SIZE, file);
        let mut offsets = Vec::with_capacity(config.size);
        let mut buffer = Vec::new();
        let mut offset: u64 = 0;

        while offsets.len() < config.size {
            buffer.clear();
            let read = reader
                .read_until(LINE_DELIMITER, &mut buffer)
                .await
                .map_err(read_error)?;
            if read == 0 {
                break;
            }
            offsets.push(offset);
            offset = offset.saturating_add(u64::try_from(read).unwrap_or(u64::MAX));
        }

        tracing::debug!(
            "Indexed {} template line(s) from '{}'",
            offsets.len(),
            config.path.display()
        );

        Ok(Self {
            path: config.path.clone(),
            offsets,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Opens a private reader over the indexed file.
    ///
    /// # Errors
    ///
    /// Returns an error when the file can not be opened.
    pub async fn reader(lines: &Arc<Self>) -> Result<TemplateReader, TemplateError> {
        let file = File::open(&lines.path)
            .await
            .map_err(|source| TemplateError::ReadLine {
                path: lines.path.clone(),
                source,
            })?;
        Ok(TemplateReader {
            lines: Arc::clone(lines),
            reader: BufReader::new(file),
            buffer: Vec::new(),
        })
    }
}

/// Per-worker cursor into [`TemplateLines`].
#[derive(Debug)]
pub struct TemplateReader {
    lines: Arc<TemplateLines>,
    reader: BufReader<File>,
    buffer: Vec<u8>,
}

impl TemplateReader {
    /// Reads a uniformly chosen line. Returns the line number and its raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::EmptySource`] when there are no lines, or a
    /// read error from the underlying file.
    pub async fn random_line(&mut self) -> Result<(usize, Vec<u8>), TemplateError> {
        let index = pick_index(self.lines.len()).ok_or(TemplateError::EmptySource)?;
        let line = self.line(index).await?;
        Ok((index, line))
    }

    /// Reads the bytes of the line at `index` with its trailing newline
    /// stripped. Lines are not required to be UTF-8.
    ///
    /// # Errors
    ///
    /// Returns an error when `index` is out of range or the read fails.
    pub async fn line(&mut self, index: usize) -> Result<Vec<u8>, TemplateError> {
        let offset = *self
            .lines
            .offsets
            .get(index)
            .ok_or_else(|| TemplateError::LineOutOfRange {
                path: self.lines.path.clone(),
                index,
            })?;
        let read_error = |source| TemplateError::ReadLine {
            path: self.lines.path.clone(),
            source,
        };

        self.reader
            .seek(SeekFrom::Start(offset))
            .await
            .map_err(read_error)?;
        self.buffer.clear();
        self.reader
            .read_until(LINE_DELIMITER, &mut self.buffer)
            .await
            .map_err(read_error)?;

        let line = self
            .buffer
            .strip_suffix(&[LINE_DELIMITER])
            .unwrap_or(&self.buffer);
        Ok(line.to_vec())
    }
}

// ThreadRng is not Send, so it never lives across an await point.
fn pick_index(len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(rand::thread_rng().gen_range(0..len))
}
