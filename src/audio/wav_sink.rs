use super::blocks::{block_count, decode_samples, padded_blocks};
use super::encoding::AudioEncoding;
use super::format::{AudioFormat, DEFAULT_SAMPLING_RATE};
use super::sink::AudioSink;
use crate::error::{SinkError, SinkResult};
use hound::WavWriter;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Mono 16-bit WAV file sink with fixed one-second framing
///
/// Every `consume_nonblocking` call is written as whole blocks of
/// `block_size` samples. The trailing remainder of each call is zero-padded
/// on its own and never merged with the next call's samples, so a stream
/// split at non-block-aligned points gets silence inserted at each split.
/// Writes are synchronous; the header is updated after every non-empty chunk.
pub struct WavSink {
    path: PathBuf,
    format: AudioFormat,
    encoding: AudioEncoding,
    block_size: usize,
    frames_written: u64,
    writer: Option<WavWriter<BufWriter<File>>>,
}

impl WavSink {
    pub fn create(
        path: impl AsRef<Path>,
        sampling_rate: u32,
        encoding: AudioEncoding,
    ) -> SinkResult<Self> {
        if sampling_rate == 0 {
            return Err(SinkError::InvalidSampleRate {
                rate: sampling_rate,
            });
        }

        let path = path.as_ref().to_path_buf();
        let format = AudioFormat::mono(sampling_rate);

        if !encoding.is_linear16() {
            tracing::warn!(
                "Encoding {} is not interpreted, writing {:?} as linear16",
                encoding,
                path
            );
        }

        let writer = WavWriter::create(&path, format.wav_spec())?;

        tracing::info!(
            "Opened WAV sink at {:?} ({} Hz, block size {})",
            path,
            sampling_rate,
            format.block_size()
        );

        Ok(Self {
            path,
            format,
            encoding,
            block_size: format.block_size(),
            frames_written: 0,
            writer: Some(writer),
        })
    }

    pub fn with_defaults(path: impl AsRef<Path>) -> SinkResult<Self> {
        Self::create(path, DEFAULT_SAMPLING_RATE, AudioEncoding::default())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn is_closed(&self) -> bool {
        self.writer.is_none()
    }
}

impl AudioSink for WavSink {
    fn sampling_rate(&self) -> u32 {
        self.format.sample_rate
    }

    fn audio_encoding(&self) -> AudioEncoding {
        self.encoding
    }

    fn consume_nonblocking(&mut self, chunk: &[u8]) -> SinkResult<()> {
        let writer = self.writer.as_mut().ok_or(SinkError::Closed)?;

        if chunk.len() % AudioFormat::SAMPLE_WIDTH != 0 {
            tracing::debug!(
                "Chunk of {} bytes has a trailing partial sample, ignoring last byte",
                chunk.len()
            );
        }

        let samples = decode_samples(chunk);
        if samples.is_empty() {
            return Ok(());
        }

        for block in padded_blocks(&samples, self.block_size) {
            for &sample in block.iter() {
                writer.write_sample(sample)?;
            }
        }
        writer.flush()?;

        let blocks = block_count(samples.len(), self.block_size);
        self.frames_written += (blocks * self.block_size) as u64;
        tracing::debug!(
            "Wrote {} samples as {} block(s) to {:?}",
            samples.len(),
            blocks,
            self.path
        );
        Ok(())
    }

    fn frames_written(&self) -> u64 {
        self.frames_written
    }

    fn terminate(&mut self) -> SinkResult<()> {
        let writer = self.writer.take().ok_or(SinkError::Closed)?;
        writer.finalize()?;

        tracing::info!(
            "Closed WAV sink at {:?} ({} frames)",
            self.path,
            self.frames_written
        );
        Ok(())
    }
}

impl Drop for WavSink {
    fn drop(&mut self) {
        if let Some(writer) = self.writer.take() {
            tracing::warn!("WAV sink at {:?} dropped without terminate", self.path);
            if let Err(e) = writer.finalize() {
                tracing::warn!("Failed to finalize {:?}: {}", self.path, e);
            }
        }
    }
}
