//! The verification driver: source selection, core invocation, exit status.

use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::io::{self};
use std::path::Path;

use anyhow::Result;
use anyhow::bail;
use flate2::read::GzDecoder;
use verarch_core::VerifyConfig;
use verarch_core::VerifyReport;
use verarch_core::sources::DirSource;
use verarch_core::sources::SourceKind;
use verarch_core::sources::TarSource;
use verarch_core::sources::ZipSource;
use verarch_core::verify;

use crate::cli::Cli;
use crate::error::convert_verify_error;
use crate::output::OutputFormatter;

pub fn execute(cli: &Cli, formatter: &mut dyn OutputFormatter) -> Result<()> {
    let config = cli.verify_config();

    let report = run_source(cli, &config, &mut *formatter)
        .map_err(|e| convert_verify_error(e, &cli.input))?;

    formatter.finish(&report)?;

    // Either direction of discrepancy flags the run
    if report.is_clean() {
        Ok(())
    } else {
        bail!(
            "verification failed: {} differing, {} missing from source",
            report.mismatched.len(),
            report.missing_from_source.len()
        )
    }
}

fn run_source(
    cli: &Cli,
    config: &VerifyConfig,
    formatter: &mut dyn OutputFormatter,
) -> verarch_core::Result<VerifyReport> {
    let reference = cli.reference.as_path();

    match verarch_core::sources::detect_source(&cli.input) {
        SourceKind::Zip => {
            let mut source = ZipSource::open(&cli.input)?;
            verify(&mut source, reference, config, formatter)
        }
        SourceKind::Dir => {
            let mut source = DirSource::new(&cli.input);
            verify(&mut source, reference, config, formatter)
        }
        SourceKind::Tar => {
            let file = File::open(&cli.input)?;
            run_tar(BufReader::new(file), reference, config, formatter)
        }
        SourceKind::TarGz => {
            let file = File::open(&cli.input)?;
            run_tar(
                GzDecoder::new(BufReader::new(file)),
                reference,
                config,
                formatter,
            )
        }
        SourceKind::TarStdin => run_tar(io::stdin().lock(), reference, config, formatter),
    }
}

/// Drives a tar stream from any reader: plain file, gzip decoder, or stdin.
///
/// The archive must outlive the borrowed entry iterator, so it is owned here
/// for the duration of the run.
fn run_tar<R: Read>(
    reader: R,
    reference: &Path,
    config: &VerifyConfig,
    formatter: &mut dyn OutputFormatter,
) -> verarch_core::Result<VerifyReport> {
    let mut archive = tar::Archive::new(reader);
    let mut source = TarSource::new(archive.entries()?);
    verify(&mut source, reference, config, formatter)
}
