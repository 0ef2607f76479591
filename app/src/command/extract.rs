use std::io::Read;
use std::path::PathBuf;

use ticketgen_core::TicketRecord;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ExtractInput {
    /// Raw model output; stdin when absent
    pub file: Option<PathBuf>,
}

/// Strategy for extracting a ticket from saved model output.
///
/// Needs no config and makes no network calls. The record, including its
/// extraction status, is printed as JSON.
#[derive(Debug, Clone, Copy)]
pub struct ExtractStrategy;

impl super::CommandStrategy for ExtractStrategy {
    type Input = ExtractInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let text = match input.file {
            Some(path) => {
                let bytes = std::fs::read(&path)?;
                String::from_utf8_lossy(&bytes).into_owned()
            }
            None => {
                let mut bytes = Vec::new();
                std::io::stdin().read_to_end(&mut bytes)?;
                String::from_utf8_lossy(&bytes).into_owned()
            }
        };
        debug!("Extracting from {} bytes", text.len());

        let record = TicketRecord::extract(&text);
        println!("{}", serde_json::to_string_pretty(&record)?);
        if let Some(note) = super::extraction_note(record.extraction_status) {
            eprintln!("⚠️ {note}");
        }
        Ok(())
    }
}
