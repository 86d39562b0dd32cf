//! voicetext: client for the VK Cloud (mcs.mail.ru) voice API.
//!
//! Covers the OAuth token lifecycle, text-to-speech synthesis streamed into
//! any async writer, and speech recognition of Ogg/Opus audio.
//!
//! # Quick Start
//!
//! ```no_run
//! use voicetext::prelude::*;
//!
//! # async fn example() -> voicetext::error::Result<()> {
//! let mut client = VoiceTextClient::from_env()?;
//! client.authenticate().await?;
//!
//! let file = tokio::fs::File::create("voice/hello.oga").await?;
//! let written = client.synthesize("Hello!", file).await?;
//! println!("{written} bytes");
//! # Ok(())
//! # }
//! ```

pub mod audio;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod prelude;
pub mod util;

#[cfg(feature = "cli")]
pub mod cli;

pub use client::VoiceTextClient;
