use std::process::{Command, Stdio};

use crate::{AudioError, SpeechSynth};

/// Speaks text through the platform's own speech synthesizer.
#[derive(Default)]
pub struct SystemSpeech;

impl SystemSpeech {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(target_os = "macos")]
fn speech_command(text: &str, _locale: &str) -> Command {
    let mut cmd = Command::new("say");
    cmd.arg(text);
    cmd
}

#[cfg(target_os = "linux")]
fn speech_command(text: &str, locale: &str) -> Command {
    let mut cmd = Command::new("espeak");
    cmd.arg("-v").arg(locale.to_lowercase()).arg(text);
    cmd
}

#[cfg(target_os = "windows")]
fn speech_command(text: &str, _locale: &str) -> Command {
    let escaped = text.replace('\'', "''");
    let mut cmd = Command::new("powershell");
    cmd.arg("-NoProfile").arg("-Command").arg(format!(
        "Add-Type -AssemblyName System.Speech; \
         (New-Object System.Speech.Synthesis.SpeechSynthesizer).Speak('{escaped}')"
    ));
    cmd
}

impl SpeechSynth for SystemSpeech {
    fn speak(&self, text: &str, locale: &str) -> Result<(), AudioError> {
        // Detached: the word keeps playing while the app moves on.
        speech_command(text, locale)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
            .map_err(|e| AudioError::Speech(format!("cannot start synthesizer: {e}")))
    }
}
