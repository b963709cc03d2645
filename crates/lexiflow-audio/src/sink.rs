use std::sync::mpsc;
use std::thread;

use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, Sink};

use crate::{AudioError, PlaybackSink};

/// Plays samples through the default output device via rodio.
///
/// The output stream is not `Send`, so each playback runs on its own
/// thread. Device setup errors are reported back synchronously; the
/// playback itself then runs to completion detached.
#[derive(Default)]
pub struct RodioSink;

impl RodioSink {
    pub fn new() -> Self {
        Self
    }
}

impl PlaybackSink for RodioSink {
    fn play(&self, samples: Vec<f32>, sample_rate: u32) -> Result<(), AudioError> {
        let (ready_tx, ready_rx) = mpsc::channel();

        thread::spawn(move || {
            let opened = OutputStream::try_default()
                .map_err(|e| AudioError::Playback(format!("no output device: {e}")))
                .and_then(|(stream, handle)| {
                    Sink::try_new(&handle)
                        .map(|sink| (stream, sink))
                        .map_err(|e| AudioError::Playback(format!("sink setup failed: {e}")))
                });

            match opened {
                Ok((_stream, sink)) => {
                    let _ = ready_tx.send(Ok(()));
                    sink.append(SamplesBuffer::new(1, sample_rate, samples));
                    sink.sleep_until_end();
                }
                Err(e) => {
                    let _ = ready_tx.send(Err(e));
                }
            }
        });

        ready_rx
            .recv()
            .map_err(|_| AudioError::Playback("playback thread died".to_string()))?
    }
}
