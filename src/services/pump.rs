use crate::audio::{AudioFormat, AudioSink};
use anyhow::{Context, Result};
use std::future::Future;
use std::pin::Pin;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Totals reported once a stream has been pumped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PumpSummary {
    pub bytes_read: u64,
    pub chunks: usize,
    pub frames_written: u64,
    /// Stopped by the shutdown signal rather than end of input
    pub interrupted: bool,
}

/// Streams raw PCM from a reader into an AudioSink
///
/// This service:
/// - Fills a fixed-size chunk buffer from the reader (short reads are merged)
/// - Hands each full chunk to the sink, so only the final chunk gets padded
/// - Terminates the sink at end of input or on shutdown, returning its result
///
/// Sink calls do blocking file I/O and run on tokio's blocking pool.
pub struct StreamPump<R, S> {
    reader: R,
    sink: S,
    chunk_bytes: usize,
}

impl<R, S> StreamPump<R, S>
where
    R: AsyncRead + Unpin,
    S: AudioSink + 'static,
{
    /// `chunk_bytes` is rounded down to whole samples.
    pub fn new(reader: R, sink: S, chunk_bytes: usize) -> Self {
        let chunk_bytes = chunk_bytes.max(AudioFormat::SAMPLE_WIDTH);
        Self {
            reader,
            sink,
            chunk_bytes: chunk_bytes - chunk_bytes % AudioFormat::SAMPLE_WIDTH,
        }
    }

    /// Pump until end of input.
    pub async fn run(self) -> Result<PumpSummary> {
        self.run_until(std::future::pending()).await
    }

    /// Pump until end of input or until `shutdown` resolves.
    ///
    /// On shutdown the partially filled chunk is still written and the sink is
    /// terminated, so no input that was already read is lost.
    pub async fn run_until<F>(self, shutdown: F) -> Result<PumpSummary>
    where
        F: Future<Output = ()>,
    {
        let StreamPump {
            mut reader,
            mut sink,
            chunk_bytes,
        } = self;
        tokio::pin!(shutdown);

        let mut summary = PumpSummary::default();
        let mut buf = vec![0u8; chunk_bytes];

        loop {
            let (filled, stopped) = fill(&mut reader, &mut buf, shutdown.as_mut())
                .await
                .context("Failed to read audio input")?;
            summary.bytes_read += filled as u64;
            summary.interrupted = stopped;

            let whole = filled - filled % AudioFormat::SAMPLE_WIDTH;
            if whole < filled {
                tracing::warn!("Input ended mid-sample, dropping {} byte(s)", filled - whole);
            }

            if whole > 0 {
                let (returned, (chunk, result)) = on_blocking_pool(sink, move |sink| {
                    let result = sink.consume_nonblocking(&buf[..whole]);
                    (buf, result)
                })
                .await?;
                sink = returned;
                buf = chunk;
                result.context("Failed to write audio chunk")?;
                summary.chunks += 1;
            }

            if stopped || filled < buf.len() {
                break;
            }
        }

        if summary.interrupted {
            tracing::info!("Shutdown requested, finalizing sink");
        }

        let (sink, result) = on_blocking_pool(sink, |sink| sink.terminate()).await?;
        result.context("Failed to finalize sink")?;
        summary.frames_written = sink.frames_written();

        tracing::info!(
            "Pumped {} bytes in {} chunk(s), {} frames written",
            summary.bytes_read,
            summary.chunks,
            summary.frames_written
        );
        Ok(summary)
    }
}

/// Run a sink call off the async workers, handing the sink back afterwards.
async fn on_blocking_pool<S, T, F>(mut sink: S, op: F) -> Result<(S, T)>
where
    S: Send + 'static,
    T: Send + 'static,
    F: FnOnce(&mut S) -> T + Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let out = op(&mut sink);
        (sink, out)
    })
    .await
    .context("Sink task panicked")
}

/// Read until `buf` is full, the reader is exhausted, or `shutdown` resolves.
///
/// Returns the bytes filled and whether shutdown stopped the read.
async fn fill<R, F>(
    reader: &mut R,
    buf: &mut [u8],
    mut shutdown: Pin<&mut F>,
) -> std::io::Result<(usize, bool)>
where
    R: AsyncRead + Unpin,
    F: Future<Output = ()>,
{
    let mut filled = 0;
    while filled < buf.len() {
        tokio::select! {
            _ = shutdown.as_mut() => return Ok((filled, true)),
            read = reader.read(&mut buf[filled..]) => {
                let n = read?;
                if n == 0 {
                    break;
                }
                filled += n;
            }
        }
    }
    Ok((filled, false))
}
