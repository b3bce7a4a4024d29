use crate::CoreResult;

use tokio::sync::mpsc;

/// Destination for data chunks emitted by an open recording session.
pub type ChunkSink = mpsc::UnboundedSender<Vec<u8>>;

/// Live media stream seam.
///
/// Device drivers are external collaborators; the core only checks
/// readiness and opens recording sessions against the stream. At most one
/// recording session may be open per stream at a time; enforcing that is
/// the caller's job (see [`SegmentRecorder`](crate::SegmentRecorder)), but
/// implementations are free to reject overlapping starts as well.
pub trait MediaStream: Send {
    /// Whether the stream can accept a recording session right now.
    fn is_ready(&self) -> bool;

    /// Open a recording session. Emitted data chunks go to `chunks` until
    /// [`stop_recording`](MediaStream::stop_recording) is called or the
    /// receiving side is dropped.
    fn start_recording(&mut self, chunks: ChunkSink) -> CoreResult<()>;

    /// End the current recording session.
    fn stop_recording(&mut self) -> CoreResult<()>;
}
