use crate::cli::Fa2JsonArgs;
use crate::config::PartialConvertConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use easyaf3config::{
    core::io::{json::JsonJobFile, traits::JobFile},
    workflows::{convert, progress::ProgressReporter},
};
use tracing::info;

pub fn run(args: Fa2JsonArgs) -> Result<()> {
    let partial_config = PartialConvertConfig::load(args.config.as_deref())?;
    info!("Merging configuration from file and CLI arguments...");
    let settings = partial_config.merge_with_cli(&args)?;

    println!(
        "Converting {} to {}",
        settings.fasta_path.display(),
        settings.json_path.display()
    );
    println!("Job name: {}", settings.job_name);
    println!("Model seeds: {:?}", settings.options.model_seeds);

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the conversion workflow...");
    let result = convert::job_from_fasta(
        &settings.fasta_path,
        &settings.job_name,
        &settings.options,
        &reporter,
    );
    progress_handler.clear();
    let job = result?;

    info!(
        "Job '{}' assembled with {} sequence(s).",
        job.name(),
        job.sequences().len()
    );

    JsonJobFile::write_to_path(&job, &settings.json_path).map_err(|e| CliError::FileWriting {
        path: settings.json_path.clone(),
        source: e.into(),
    })?;

    println!(
        "Successfully created AlphaFold3 configuration: {}",
        settings.json_path.display()
    );
    Ok(())
}
