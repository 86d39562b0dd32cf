//! CLI command handlers.

use crate::audio::storage::open_audio;
use crate::client::VoiceTextClient;
use crate::config::VoiceTextConfig;

use super::{RecognizeArgs, SynthesizeArgs};

type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Handle `voicetext token`.
pub async fn handle_token(config: VoiceTextConfig) -> CliResult {
    let mut client = VoiceTextClient::from_config(config)?;
    let token = client.authenticate().await?;
    println!("{token}");
    Ok(())
}

/// Handle `voicetext synthesize`.
pub async fn handle_synthesize(mut config: VoiceTextConfig, args: SynthesizeArgs) -> CliResult {
    if let Some(dir) = args.output_dir {
        config.output_dir = dir;
    }
    if let Some(model) = args.model {
        config.synthesis.model_name = model;
    }
    if let Some(tempo) = args.tempo {
        config.synthesis.tempo = tempo;
    }

    let mut client = VoiceTextClient::from_config(config)?;
    client.authenticate().await?;
    let path = client.synthesize_to_file(&args.text, &args.id).await?;
    println!("{}", path.display());
    Ok(())
}

/// Handle `voicetext recognize`.
pub async fn handle_recognize(config: VoiceTextConfig, args: RecognizeArgs) -> CliResult {
    let mut client = VoiceTextClient::from_config(config)?;
    client.authenticate().await?;

    if !args.verbose {
        println!("{}", client.recognize_file(&args.file).await?);
        return Ok(());
    }

    let result = client.recognize_detailed(open_audio(&args.file).await?).await?;
    println!("qid: {}  phrase: {}", result.query_id, result.phrase_id);
    for (index, text) in result.texts.iter().enumerate() {
        println!(
            "[{index}] {:.2}  {}  ({})",
            text.confidence, text.punctuated_text, text.text
        );
    }
    Ok(())
}
