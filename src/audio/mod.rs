//! Speech synthesis and recognition.

pub mod client;
pub mod recognition;
pub mod storage;
pub mod synthesis;
pub mod transcription;
pub mod tts;
pub mod types;

pub use client::SpeechClient;
pub use recognition::{interpret, parse_recognition, DEFAULT_ASR_URL};
pub use synthesis::DEFAULT_TTS_URL;
pub use transcription::AudioProvider;
pub use tts::SpeechProvider;
pub use types::*;
