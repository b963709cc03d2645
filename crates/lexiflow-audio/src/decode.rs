use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::AudioError;

/// Decode a base64 payload of raw PCM (16-bit little-endian mono) into
/// normalized f32 samples in [-1.0, 1.0].
pub fn decode_pcm16(payload: &str) -> Result<Vec<f32>, AudioError> {
    let bytes = STANDARD
        .decode(payload.trim())
        .map_err(|e| AudioError::Decode(format!("invalid base64: {e}")))?;

    if bytes.len() % 2 != 0 {
        return Err(AudioError::Decode(format!(
            "odd PCM length: {} bytes",
            bytes.len()
        )));
    }

    Ok(bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]) as f32 / 32768.0)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(samples: &[i16]) -> String {
        let mut bytes = Vec::with_capacity(samples.len() * 2);
        for s in samples {
            bytes.extend_from_slice(&s.to_le_bytes());
        }
        STANDARD.encode(bytes)
    }

    #[test]
    fn decodes_known_samples() {
        let payload = encode(&[0, 16384, -32768, 32767]);
        let samples = decode_pcm16(&payload).unwrap();
        assert_eq!(samples[0], 0.0);
        assert_eq!(samples[1], 0.5);
        assert_eq!(samples[2], -1.0);
        assert!((samples[3] - 0.99997).abs() < 1e-4);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let payload = format!("  {}\n", encode(&[0]));
        assert_eq!(decode_pcm16(&payload).unwrap(), vec![0.0]);
    }

    #[test]
    fn rejects_invalid_base64() {
        assert!(matches!(
            decode_pcm16("not base64!!!"),
            Err(AudioError::Decode(_))
        ));
    }

    #[test]
    fn rejects_odd_byte_counts() {
        let payload = STANDARD.encode([0u8, 1, 2]);
        assert!(matches!(
            decode_pcm16(&payload),
            Err(AudioError::Decode(_))
        ));
    }
}
