use anyhow::{Result, bail};
use std::io::{self, IsTerminal, Write};
use std::path::Path;

use super::load_resolved_config;
use crate::config::ResolveOptions;
use crate::fs::atomic_write;
use crate::input::{InputReader, InputSource};
use crate::translation::{ProcessOutput, RawProcessOptions};
use crate::ui::{Spinner, Style};

pub struct ProcessCommandOptions {
    pub file: Option<String>,
    pub text: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub options: RawProcessOptions,
    pub output: Option<String>,
}

pub async fn run_process(options: ProcessCommandOptions) -> Result<()> {
    let config = load_resolved_config(&ResolveOptions {
        host: options.host.clone(),
        port: options.port,
        options: options.options.clone(),
    })?;

    let source_text = InputReader::read(InputSource::from_args(
        options.text.as_deref(),
        options.file.as_deref(),
    ))?;

    if source_text.trim().is_empty() {
        bail!("Input is empty");
    }

    let process_options = config.process_options();
    if process_options.output_type.is_audio()
        && !process_options.base64
        && options.output.is_none()
        && io::stdout().is_terminal()
    {
        bail!(
            "Refusing to write binary audio to a terminal\n\n\
             Use --output <file>, --base64, or redirect stdout."
        );
    }

    let client = config.client()?;

    let spinner = Spinner::new("Processing...");
    let result = client
        .process_with_options(&source_text, &process_options)
        .await;
    spinner.stop();

    write_output(&result?, options.output.as_deref())
}

fn write_output(output: &ProcessOutput, path: Option<&str>) -> Result<()> {
    let content: &[u8] = match output {
        ProcessOutput::Audio(bytes) => bytes,
        ProcessOutput::DataUri(text) | ProcessOutput::Text(text) => text.as_bytes(),
    };

    if let Some(path) = path {
        atomic_write(Path::new(path), content)?;
        crate::status!(
            "{} Wrote {} bytes to {}",
            Style::success("✓"),
            content.len(),
            Style::secondary(path)
        );
        return Ok(());
    }

    let mut stdout = io::stdout().lock();
    stdout.write_all(content)?;
    if output.as_text().is_some_and(|t| !t.ends_with('\n')) {
        writeln!(stdout)?;
    }
    stdout.flush()?;

    Ok(())
}
