pub(crate) mod recorder;
mod stream;
mod synthetic;

pub use {
    recorder::{CaptureSegment, SegmentRecorder},
    stream::{ChunkSink, MediaStream},
    synthetic::SyntheticStream,
};
