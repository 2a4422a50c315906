//! Feedback beeps generated in memory as PCM16 mono WAV

const SAMPLE_RATE: u32 = 44_100;

/// Sine tone with a short linear fade-out to avoid a click at the end
pub fn sine_wav(frequency_hz: f32, duration_secs: f32, volume: f32) -> Vec<u8> {
    let samples = (duration_secs * SAMPLE_RATE as f32) as u32;
    let mut wav = wav_header(samples);

    let amplitude = volume.clamp(0.0, 1.0) * 0.7 * i16::MAX as f32;
    let fade_from = samples.saturating_sub(SAMPLE_RATE / 100);
    for n in 0..samples {
        let t = n as f32 / SAMPLE_RATE as f32;
        let fade = if n < fade_from {
            1.0
        } else {
            (samples - n) as f32 / (samples - fade_from).max(1) as f32
        };
        let sample = (amplitude * fade * (std::f32::consts::TAU * frequency_hz * t).sin()) as i16;
        wav.extend_from_slice(&sample.to_le_bytes());
    }
    wav
}

fn wav_header(samples: u32) -> Vec<u8> {
    let block_align: u16 = 2;
    let data_size = samples * block_align as u32;
    let mut h = Vec::with_capacity(44 + data_size as usize);
    h.extend_from_slice(b"RIFF");
    h.extend_from_slice(&(36 + data_size).to_le_bytes());
    h.extend_from_slice(b"WAVE");
    h.extend_from_slice(b"fmt ");
    h.extend_from_slice(&16u32.to_le_bytes());
    h.extend_from_slice(&1u16.to_le_bytes()); // PCM
    h.extend_from_slice(&1u16.to_le_bytes()); // mono
    h.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    h.extend_from_slice(&(SAMPLE_RATE * block_align as u32).to_le_bytes());
    h.extend_from_slice(&block_align.to_le_bytes());
    h.extend_from_slice(&16u16.to_le_bytes());
    h.extend_from_slice(b"data");
    h.extend_from_slice(&data_size.to_le_bytes());
    h
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wav_layout() {
        let wav = sine_wav(440.0, 0.1, 0.5);
        let samples = (0.1 * SAMPLE_RATE as f32) as usize;
        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(wav.len(), 44 + samples * 2);
    }
}
