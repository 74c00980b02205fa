#[cfg(test)]
mod common;
use common::Fixture;

use std::process::Command;

fn crispr_index() -> Command {
    Command::new(env!("CARGO_BIN_EXE_crispr-index"))
}

#[test]
fn extract_index_search_and_scan_round_trip() {
    let reference = Fixture::copy("reference.fa");
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("guides.csv");
    let index = dir.path().join("guides.bin");

    let extract = crispr_index()
        .args(["extract", "--reference"])
        .arg(&*reference)
        .args(["--output"])
        .arg(&csv)
        .output()
        .expect("failed to run extract");
    assert!(extract.status.success(), "{}", String::from_utf8_lossy(&extract.stderr));
    assert!(csv.exists());

    let contents = std::fs::read_to_string(&csv).unwrap();
    assert_eq!(contents.lines().next().unwrap(), "MT,13,ATCACCCTATTAACCACTCACGG,1");

    let index_run = crispr_index()
        .arg("index")
        .arg(&csv)
        .args(["--output"])
        .arg(&index)
        .args(["--species", "Human", "--assembly", "GRCh38"])
        .output()
        .expect("failed to run index");
    assert!(index_run.status.success(), "{}", String::from_utf8_lossy(&index_run.stderr));
    assert!(index.exists());

    let search = crispr_index()
        .args(["search", "--index"])
        .arg(&index)
        .arg("ATCACCCTATTAACCACTCA")
        .output()
        .expect("failed to run search");
    assert!(search.status.success(), "{}", String::from_utf8_lossy(&search.stderr));
    let stdout = String::from_utf8_lossy(&search.stdout);
    assert!(stdout.contains("Found 1 exact matches"), "{stdout}");
    assert!(stdout.contains('1'), "{stdout}");

    let scan = crispr_index()
        .args(["scan", "--index"])
        .arg(&index)
        .arg("ATCACCCTATTAACCACTCA")
        .output()
        .expect("failed to run scan");
    assert!(scan.status.success(), "{}", String::from_utf8_lossy(&scan.stderr));
    let stdout = String::from_utf8_lossy(&scan.stdout);
    assert!(stdout.contains("off-targets: 1"), "{stdout}");
}

#[test]
fn search_and_scan_with_n_query_report_empty_results() {
    let reference = Fixture::copy("reference.fa");
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("guides.csv");
    let index = dir.path().join("guides.bin");

    crispr_index()
        .args(["extract", "--reference"])
        .arg(&*reference)
        .args(["--output"])
        .arg(&csv)
        .status()
        .unwrap();
    crispr_index().arg("index").arg(&csv).args(["--output"]).arg(&index).status().unwrap();

    let search = crispr_index()
        .args(["search", "--index"])
        .arg(&index)
        .arg("NNNNNNNNNNNNNNNNNNNN")
        .output()
        .expect("failed to run search");
    assert!(search.status.success(), "{}", String::from_utf8_lossy(&search.stderr));
    assert!(String::from_utf8_lossy(&search.stdout).contains("Found 0 exact matches"));

    let scan = crispr_index()
        .args(["scan", "--index"])
        .arg(&index)
        .arg("NNNNNNNNNNNNNNNNNNNN")
        .output()
        .expect("failed to run scan");
    assert!(scan.status.success(), "{}", String::from_utf8_lossy(&scan.stderr));
    let stdout = String::from_utf8_lossy(&scan.stdout);
    assert!(stdout.contains("summary: [0, 0, 0, 0, 0]"), "{stdout}");
    assert!(stdout.contains("off-targets: 0"), "{stdout}");
}
