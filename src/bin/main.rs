use std::{fs::File, io::BufReader, process};

use clap::Parser;
use log::error;

use located_error::prelude::*;
use parser::{check_overwrite, Cli, Commands};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    let cli = Cli::parse();
    let verbosity = cli.verbose + u8::from(!cli.quiet);
    logger::Logger::init(verbosity);

    if let Err(err) = cli.serialize() {
        error!("{err}");
    }

    if let Err(err) = run(&cli) {
        error!("{err:?}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.commands {
        Commands::Extract { reference, output, pam, legacy, species_id, overwrite } => {
            run_extract(reference, output, pam, *legacy, *species_id, *overwrite)
        }
        Commands::Index {
            inputs,
            output,
            species,
            assembly,
            offset,
            species_id,
            guide_len,
            pam_len,
            legacy,
            overwrite,
        } => run_index(
            inputs, output, species, assembly, *offset, *species_id, *guide_len, *pam_len, *legacy, *overwrite,
        ),
        Commands::Search { index, sequence } => run_search(index, sequence),
        Commands::Scan { index, sequence } => run_scan(index, sequence),
    }
}

#[allow(clippy::too_many_arguments)]
fn run_extract(
    reference: &std::path::Path,
    output: &std::path::Path,
    pam: &str,
    legacy: bool,
    species_id: Option<u8>,
    overwrite: bool,
) -> Result<()> {
    check_overwrite(output, overwrite).loc("While preparing extraction")?;

    // species_id only ever appears as a trailing CSV column under legacy
    // mode, so it is derived from `legacy` rather than taken verbatim:
    // `--legacy` alone still emits the column (defaulting the id to 0), and
    // a stray `--species-id` without `--legacy` is ignored rather than
    // silently producing a 4-column legacy-shaped row.
    let species_id = legacy.then(|| species_id.unwrap_or(0));

    let file = File::open(reference).with_loc(|| format!("While opening {reference:?}"))?;
    let config = extractor::ScanConfig { pam: extractor::Pam::new(pam), legacy_mode: legacy, species_id };

    let mut writer = extractor::CsvWriter::create(output).with_loc(|| format!("While creating {output:?}"))?;
    let hits = extractor::scan(BufReader::new(file), &config, |record| writer.write_record(record))
        .loc("While scanning reference FASTA")?;
    writer.flush().loc("While flushing output CSV")?;

    println!("Wrote {hits} candidate guides to {}", output.display());
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn run_index(
    inputs: &[std::path::PathBuf],
    output: &std::path::Path,
    species: &str,
    assembly: &str,
    offset: u64,
    species_id: u8,
    guide_len: u8,
    pam_len: u8,
    legacy: bool,
    overwrite: bool,
) -> Result<()> {
    check_overwrite(output, overwrite).loc("While preparing indexing")?;

    let config = indexer::IndexConfig {
        species: species.to_string(),
        assembly: assembly.to_string(),
        offset,
        species_id,
        guide_len,
        pam_len,
        legacy_mode: legacy,
    };
    let n = indexer::build_index(inputs, output, &config).loc("While building index")?;

    println!("Wrote {n} guides to {}", output.display());
    Ok(())
}

fn run_search(index: &std::path::Path, sequence: &str) -> Result<()> {
    let guide_index = scanner::GuideIndex::open_mapped(index).with_loc(|| format!("While loading {index:?}"))?;
    let query = scanner::Query::new(sequence).loc("While encoding query sequence")?;
    let guides = guide_index.guides();

    let ids = scanner::search_exact(&guides, &query);
    println!("Found {} exact matches", ids.len());
    for id in ids {
        println!("{}", id as u64 + guide_index.metadata.offset);
    }
    Ok(())
}

fn run_scan(index: &std::path::Path, sequence: &str) -> Result<()> {
    let guide_index = scanner::GuideIndex::open_mapped(index).with_loc(|| format!("While loading {index:?}"))?;
    let query = scanner::Query::new(sequence).loc("While encoding query sequence")?;
    let guides = guide_index.guides();

    let result = scanner::scan(&guides, &query);
    println!("summary: {:?}", result.summary);
    println!("off-targets: {}", result.off_target_ids.len());
    for id in &result.off_target_ids {
        println!("{id}");
    }
    if result.overflow {
        println!("(overflow: more than {} ids found)", scanner::OVERFLOW_THRESHOLD);
    }
    Ok(())
}
