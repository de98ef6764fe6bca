use crate::cli::ValidateArgs;
use crate::error::{CliError, Result};
use easyaf3config::core::io::{json::JsonJobFile, traits::JobFile};
use easyaf3config::core::models::job::AfJobConfig;
use easyaf3config::core::models::sequence::SequenceKind;
use tracing::info;

pub fn run(args: ValidateArgs) -> Result<()> {
    info!("Validating job document {:?}", &args.json);
    let job = JsonJobFile::read_from_path(&args.json).map_err(|e| CliError::FileParsing {
        path: args.json.clone(),
        source: e.into(),
    })?;

    println!("{}", summarize(&job));
    Ok(())
}

fn summarize(job: &AfJobConfig) -> String {
    let counts = SequenceKind::ALL
        .iter()
        .map(|kind| {
            let n = job.sequences().iter().filter(|s| s.kind() == *kind).count();
            format!("{} {}", n, kind)
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Valid job '{}' (dialect {}, version {})\n  Model seeds: {:?}\n  Sequences: {} ({})",
        job.name(),
        job.dialect(),
        job.version(),
        job.model_seeds(),
        job.sequences().len(),
        counts
    )
}
