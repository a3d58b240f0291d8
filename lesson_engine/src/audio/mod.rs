//! Narration - speech playback behind an injected backend.

use lesson_content::Narration;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for one playback attempt.
///
/// Every call into the backend gets a fresh ID, and events carrying any
/// other ID are ignored; a report from an utterance that was cancelled
/// or superseded can never affect the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UtteranceId(pub Uuid);

impl UtteranceId {
    /// Create a new random utterance ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a nil/empty utterance ID (useful for defaults).
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for UtteranceId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UtteranceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What happened to an utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechEventKind {
    /// Audio actually started coming out.
    Started,
    /// Playback finished normally.
    Ended,
    /// Playback failed or was interrupted by the platform.
    Errored,
}

/// An asynchronous report from the speech backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeechEvent {
    pub utterance: UtteranceId,
    pub kind: SpeechEventKind,
}

impl SpeechEvent {
    pub fn started(utterance: UtteranceId) -> Self {
        Self {
            utterance,
            kind: SpeechEventKind::Started,
        }
    }

    pub fn ended(utterance: UtteranceId) -> Self {
        Self {
            utterance,
            kind: SpeechEventKind::Ended,
        }
    }

    pub fn errored(utterance: UtteranceId) -> Self {
        Self {
            utterance,
            kind: SpeechEventKind::Errored,
        }
    }
}

/// Platform speech services, injected by the host.
///
/// Calls are fire-and-forget; the backend reports progress through
/// [`SpeechEvent`]s fed back into [`Narrator::handle_event`].
pub trait SpeechBackend {
    /// Speak text through text-to-speech.
    fn speak(&mut self, utterance: UtteranceId, text: &str);

    /// Start playing a recorded audio file. Returns false when file
    /// playback is not available, without emitting any event.
    fn play_file(&mut self, utterance: UtteranceId, src: &str) -> bool;

    /// Stop whatever is playing.
    fn cancel(&mut self);
}

/// A backend for hosts without any audio output.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSpeech;

impl SpeechBackend for SilentSpeech {
    fn speak(&mut self, _utterance: UtteranceId, _text: &str) {}

    fn play_file(&mut self, _utterance: UtteranceId, _src: &str) -> bool {
        false
    }

    fn cancel(&mut self) {}
}

#[derive(Debug)]
struct ActiveUtterance {
    id: UtteranceId,
    /// Set once the backend reports that audio started.
    started: bool,
    /// Text to fall back to if file playback errors mid-flight.
    fallback_text: Option<String>,
}

/// Plays slide narration, one utterance at a time.
///
/// A recorded file is preferred over text-to-speech; when the file is
/// unavailable or errors, the narration's text is spoken instead.
/// Narration never blocks a lesson: a failure with no fallback left is
/// logged and swallowed.
pub struct Narrator {
    backend: Box<dyn SpeechBackend>,
    current: Option<ActiveUtterance>,
}

impl Narrator {
    /// Create a narrator speaking through the given backend.
    pub fn new(backend: Box<dyn SpeechBackend>) -> Self {
        Self {
            backend,
            current: None,
        }
    }

    /// Start narrating, cancelling whatever was playing first.
    ///
    /// Returns the utterance that was started, or None when the
    /// narration is empty.
    pub fn narrate(&mut self, narration: &Narration) -> Option<UtteranceId> {
        if narration.is_empty() {
            return None;
        }

        self.cancel();

        if let Some(file) = &narration.audio_file {
            let id = UtteranceId::new();
            if self.backend.play_file(id, file) {
                self.current = Some(ActiveUtterance {
                    id,
                    started: false,
                    fallback_text: narration.speak_text.clone(),
                });
                return Some(id);
            }
        }

        let text = narration.speak_text.as_ref()?;
        let id = UtteranceId::new();
        self.backend.speak(id, text);
        self.current = Some(ActiveUtterance {
            id,
            started: false,
            fallback_text: None,
        });
        Some(id)
    }

    /// Stop the current utterance, if any.
    pub fn cancel(&mut self) {
        if self.current.take().is_some() {
            self.backend.cancel();
        }
    }

    /// Apply a backend report.
    ///
    /// Events for anything but the current utterance are stale and
    /// ignored.
    pub fn handle_event(&mut self, event: SpeechEvent) {
        let is_current = self
            .current
            .as_ref()
            .map(|current| current.id == event.utterance)
            .unwrap_or(false);
        if !is_current {
            log::debug!("ignoring stale speech event for utterance {}", event.utterance);
            return;
        }

        match event.kind {
            SpeechEventKind::Started => {
                if let Some(current) = &mut self.current {
                    current.started = true;
                }
            }
            SpeechEventKind::Ended => {
                self.current = None;
            }
            SpeechEventKind::Errored => {
                let fallback = self
                    .current
                    .as_mut()
                    .and_then(|current| current.fallback_text.take());

                match fallback {
                    Some(text) => {
                        let id = UtteranceId::new();
                        self.backend.speak(id, &text);
                        self.current = Some(ActiveUtterance {
                            id,
                            started: false,
                            fallback_text: None,
                        });
                    }
                    None => {
                        log::warn!(
                            "narration {} failed and no fallback is left",
                            event.utterance
                        );
                        self.current = None;
                    }
                }
            }
        }
    }

    /// Whether an utterance is in flight (requested or audible).
    pub fn is_playing(&self) -> bool {
        self.current.is_some()
    }

    /// Whether the backend confirmed that audio started.
    pub fn playback_started(&self) -> bool {
        self.current
            .as_ref()
            .map(|current| current.started)
            .unwrap_or(false)
    }

    /// The utterance currently in flight.
    pub fn current_utterance(&self) -> Option<UtteranceId> {
        self.current.as_ref().map(|current| current.id)
    }
}

impl std::fmt::Debug for Narrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Narrator")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}
