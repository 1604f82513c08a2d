//! Remote preview clips.
//!
//! A [`RemotePreview`] is the playable resource of one track row. Playing it
//! fetches the clip over HTTP (once, the bytes are kept for replays), decodes
//! it with rodio and reports progress to the registered
//! [`PlaybackObserver`]. All handles share one [`AudioOutput`].

use std::{
    io::Cursor,
    sync::{
        Arc,
        atomic::{AtomicBool, AtomicU64, Ordering},
    },
    time::Duration,
};

use parking_lot::Mutex;
use reqwest::Client;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

use crate::{
    debug,
    error::PreviewError,
    preview::{MediaEvent, PlaybackObserver, PreviewAudio},
};

const END_POLL_INTERVAL: Duration = Duration::from_millis(200);

/// The default output device. Must stay alive for as long as any preview may
/// play; dropping it silences every sink.
pub struct AudioOutput {
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl AudioOutput {
    pub fn open_default() -> Result<Self, PreviewError> {
        let (stream, handle) = OutputStream::try_default()
            .map_err(|e| PreviewError::Playback(format!("no audio output device: {}", e)))?;
        Ok(Self {
            _stream: stream,
            handle,
        })
    }

    pub fn handle(&self) -> OutputStreamHandle {
        self.handle.clone()
    }
}

#[derive(Clone)]
pub struct RemotePreview {
    inner: Arc<Inner>,
}

struct Inner {
    url: String,
    client: Client,
    output: OutputStreamHandle,
    clip: Mutex<Option<Arc<Vec<u8>>>>,
    sink: Mutex<Option<Arc<Sink>>>,
    gate: PlaybackGate,
}

/// Paused flag plus a generation counter bumped by every play and rewind. A
/// load task holds the generation it was started with; once that is outdated
/// the task must neither touch the paused flag nor leave a sink behind.
#[derive(Debug)]
struct PlaybackGate {
    paused: AtomicBool,
    generation: AtomicU64,
}

impl PlaybackGate {
    fn new() -> Self {
        Self {
            paused: AtomicBool::new(true),
            generation: AtomicU64::new(0),
        }
    }

    fn is_paused(&self) -> bool {
        self.paused.load(Ordering::SeqCst)
    }

    fn pause(&self) {
        self.paused.store(true, Ordering::SeqCst);
    }

    fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Starts a new playback and returns its generation.
    fn begin(&self) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.paused.store(false, Ordering::SeqCst);
        generation
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    /// Marks the clip paused, unless a newer playback owns it.
    fn settle(&self, generation: u64) {
        if self.is_current(generation) {
            self.pause();
        }
    }
}

impl RemotePreview {
    pub fn new(url: impl Into<String>, client: Client, output: OutputStreamHandle) -> Self {
        Self {
            inner: Arc::new(Inner {
                url: url.into(),
                client,
                output,
                clip: Mutex::new(None),
                sink: Mutex::new(None),
                gate: PlaybackGate::new(),
            }),
        }
    }
}

impl PreviewAudio for RemotePreview {
    fn is_paused(&self) -> bool {
        self.inner.gate.is_paused()
    }

    fn pause(&self) {
        self.inner.gate.pause();
        if let Some(sink) = self.inner.sink.lock().as_ref() {
            sink.pause();
        }
    }

    fn rewind(&self) {
        self.inner.gate.invalidate();
        if let Some(sink) = self.inner.sink.lock().take() {
            sink.stop();
        }
    }

    fn play(&self, observer: PlaybackObserver) -> Result<(), PreviewError> {
        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|e| PreviewError::Playback(e.to_string()))?;

        let generation = self.inner.gate.begin();
        if let Some(sink) = self.inner.sink.lock().take() {
            sink.stop();
        }

        let inner = Arc::clone(&self.inner);
        runtime.spawn(async move {
            inner.load_and_play(observer, generation).await;
        });
        Ok(())
    }
}

impl Inner {
    async fn load_and_play(self: Arc<Self>, observer: PlaybackObserver, generation: u64) {
        observer.emit(MediaEvent::LoadStart);

        let clip = match self.fetch_clip().await {
            Ok(clip) => clip,
            Err(e) => {
                self.gate.settle(generation);
                observer.emit(MediaEvent::LoadFailed(e.to_string()));
                return;
            }
        };

        if !self.gate.is_current(generation) {
            debug!("preview {} replaced while loading", self.url);
            return;
        }

        let source = match Decoder::new(Cursor::new(clip.to_vec())) {
            Ok(source) => source,
            Err(e) => {
                self.gate.settle(generation);
                observer.emit(MediaEvent::LoadFailed(format!("cannot decode clip: {}", e)));
                return;
            }
        };

        let sink = match Sink::try_new(&self.output) {
            Ok(sink) => Arc::new(sink),
            Err(e) => {
                self.gate.settle(generation);
                observer.emit(MediaEvent::PlayRejected(e.to_string()));
                return;
            }
        };

        if !self.install(&sink, generation) {
            debug!("preview {} replaced before it could play", self.url);
            return;
        }
        sink.append(source);

        observer.emit(MediaEvent::CanPlay);

        loop {
            tokio::time::sleep(END_POLL_INTERVAL).await;
            if !self.gate.is_current(generation) {
                sink.stop();
                return;
            }
            if self.gate.is_paused() {
                // nothing resumes a paused preview, the next play starts over
                self.release(&sink, generation);
                return;
            }
            if sink.empty() {
                self.gate.settle(generation);
                self.release(&sink, generation);
                observer.emit(MediaEvent::Ended);
                return;
            }
        }
    }

    /// Stores `sink` as the clip's output. Returns `false` and stops the sink
    /// when a newer play or rewind got there first. Holding the slot lock
    /// orders this against `pause` and `rewind`.
    fn install(&self, sink: &Arc<Sink>, generation: u64) -> bool {
        let mut slot = self.sink.lock();
        if !self.gate.is_current(generation) {
            sink.stop();
            return false;
        }
        if self.gate.is_paused() {
            sink.pause();
        }
        *slot = Some(Arc::clone(sink));
        true
    }

    fn release(&self, sink: &Arc<Sink>, generation: u64) {
        sink.stop();
        let mut slot = self.sink.lock();
        if self.gate.is_current(generation) {
            slot.take();
        }
    }

    async fn fetch_clip(&self) -> Result<Arc<Vec<u8>>, PreviewError> {
        if let Some(clip) = self.clip.lock().as_ref() {
            return Ok(Arc::clone(clip));
        }

        debug!("fetching preview {}", self.url);
        let bytes = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        let clip = Arc::new(bytes.to_vec());
        *self.clip.lock() = Some(Arc::clone(&clip));
        Ok(clip)
    }
}

#[cfg(test)]
mod tests {
    use super::PlaybackGate;

    #[test]
    fn test_gate_starts_paused() {
        let gate = PlaybackGate::new();
        assert!(gate.is_paused());
        assert!(gate.is_current(0));
    }

    #[test]
    fn test_begin_unpauses_and_outdates_previous_generation() {
        let gate = PlaybackGate::new();
        let first = gate.begin();
        assert!(!gate.is_paused());
        assert!(gate.is_current(first));

        let second = gate.begin();
        assert_ne!(first, second);
        assert!(!gate.is_current(first));
        assert!(gate.is_current(second));
    }

    #[test]
    fn test_rewind_outdates_a_load_in_flight() {
        let gate = PlaybackGate::new();
        let generation = gate.begin();

        // stop-current: pause then rewind while the load task is still decoding
        gate.pause();
        gate.invalidate();

        assert!(!gate.is_current(generation));
    }

    #[test]
    fn test_settle_of_outdated_load_keeps_newer_playback_unpaused() {
        let gate = PlaybackGate::new();
        let stale = gate.begin();
        let live = gate.begin();

        gate.settle(stale);
        assert!(!gate.is_paused());

        gate.settle(live);
        assert!(gate.is_paused());
    }
}
