use std::sync::Arc;

use lexiflow_lookup::LookupProvider;

pub mod decode;
pub mod sink;
pub mod speech;

pub use decode::decode_pcm16;
pub use sink::RodioSink;
pub use speech::SystemSpeech;

#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("audio decode error: {0}")]
    Decode(String),

    #[error("playback error: {0}")]
    Playback(String),

    #[error("speech synthesis error: {0}")]
    Speech(String),
}

/// Output device abstraction: takes normalized mono samples and plays
/// them to completion.
pub trait PlaybackSink: Send + Sync {
    fn play(&self, samples: Vec<f32>, sample_rate: u32) -> Result<(), AudioError>;
}

/// Platform speech synthesizer, the fallback when no synthesized audio
/// is available.
pub trait SpeechSynth: Send + Sync {
    fn speak(&self, text: &str, locale: &str) -> Result<(), AudioError>;
}

/// Pronounces a word: synthesized audio from the provider when it can be
/// fetched and decoded, platform speech otherwise. Never surfaces an
/// error to the caller; pronunciation is best-effort by design of the
/// surrounding flow.
pub struct Pronouncer {
    provider: Arc<dyn LookupProvider>,
    sink: Arc<dyn PlaybackSink>,
    speech: Arc<dyn SpeechSynth>,
    sample_rate: u32,
    locale: String,
}

impl Pronouncer {
    pub fn new(
        provider: Arc<dyn LookupProvider>,
        sink: Arc<dyn PlaybackSink>,
        speech: Arc<dyn SpeechSynth>,
        sample_rate: u32,
        locale: String,
    ) -> Self {
        Self {
            provider,
            sink,
            speech,
            sample_rate,
            locale,
        }
    }

    pub async fn pronounce(&self, word: &str) {
        match self.provider.fetch_audio(word).await {
            Ok(Some(payload)) => match decode_pcm16(&payload) {
                Ok(samples) => {
                    if let Err(e) = self.sink.play(samples, self.sample_rate) {
                        tracing::warn!("playback failed, falling back to speech: {e}");
                        self.fall_back(word);
                    }
                }
                Err(e) => {
                    tracing::warn!("undecodable audio payload: {e}");
                    self.fall_back(word);
                }
            },
            Ok(None) => {
                tracing::debug!("no synthesized audio for {word:?}");
                self.fall_back(word);
            }
            Err(e) => {
                tracing::warn!("audio fetch failed: {e}");
                self.fall_back(word);
            }
        }
    }

    fn fall_back(&self, word: &str) {
        if let Err(e) = self.speech.speak(word, &self.locale) {
            tracing::warn!("speech fallback failed: {e}");
        }
    }
}
