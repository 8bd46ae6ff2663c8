//! End-to-end tests for the tabtools binaries

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn bin(name: &str) -> Command {
    Command::cargo_bin(name).unwrap()
}

#[test]
fn join_outer_join_scenario() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.tsv");
    let b = dir.path().join("b.tsv");
    fs::write(&a, "k1\t1\nk2\t2\n").unwrap();
    fs::write(&b, "k2\t20\nk3\t30\n").unwrap();

    bin("tab-join")
        .args(["-f", a.to_str().unwrap(), b.to_str().unwrap()])
        .args(["-m", "NA"])
        .assert()
        .success()
        .stdout("ID\ta.tsv\tb.tsv\nk1\t1\tNA\nk2\t2\t20\nk3\tNA\t30\n");
}

#[test]
fn join_reads_file_list_from_stdin() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.tsv");
    let b = dir.path().join("b.tsv");
    fs::write(&a, "k1\t1\n").unwrap();
    fs::write(&b, "k1\t2\n").unwrap();

    bin("tab-join")
        .args(["-f", "-"])
        .write_stdin(format!("{}\n{}\n", a.display(), b.display()))
        .assert()
        .success()
        .stdout("ID\ta.tsv\tb.tsv\nk1\t1\t2\n");
}

#[test]
fn join_filename_separator_names_columns() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("s1_R1.counts.tsv");
    let b = dir.path().join("s2_R1.counts.tsv");
    fs::write(&a, "k\t1\n").unwrap();
    fs::write(&b, "k\t2\n").unwrap();

    bin("tab-join")
        .args(["-f", a.to_str().unwrap(), b.to_str().unwrap()])
        .args(["-s", "."])
        .assert()
        .success()
        .stdout("ID\ts1_R1\ts2_R1\nk\t1\t2\n");
}

#[test]
fn join_filtered_to_empty_is_header_only_success() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.tsv");
    let b = dir.path().join("b.tsv");
    fs::write(&a, "__x\t1\n").unwrap();
    fs::write(&b, "__y\t2\n").unwrap();

    bin("tab-join")
        .args(["-f", a.to_str().unwrap(), b.to_str().unwrap()])
        .args(["-i", "__"])
        .assert()
        .success()
        .stdout("ID\ta.tsv\tb.tsv\n");
}

#[test]
fn join_missing_file_fails() {
    bin("tab-join")
        .args(["-f", "no/such/a.tsv", "no/such/b.tsv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn merge_from_stdin_autodetects_comma() {
    bin("tab-merge")
        .args(["-a", "chr", "-b", "pos", "-s", "-", "--drop"])
        .write_stdin("chr,pos,gene\n1,100,tp53\n")
        .assert()
        .success()
        .stdout("chr_pos,gene\n1-100,tp53\n");
}

#[test]
fn merge_unknown_column_fails() {
    bin("tab-merge")
        .args(["-a", "nope", "-b", "pos"])
        .write_stdin("chr\tpos\n1\t100\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("column not found"));
}

#[test]
fn move_column_to_first() {
    bin("tab-move")
        .args(["-c", "c", "-t", "first"])
        .write_stdin("a\tb\tc\n1\t2\t3\n")
        .assert()
        .success()
        .stdout("c\ta\tb\n3\t1\t2\n");
}

#[test]
fn move_invalid_position_fails() {
    bin("tab-move")
        .args(["-c", "a", "-t", "9"])
        .write_stdin("a\tb\n1\t2\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid position"));
}

#[test]
fn transpose_swaps_axes() {
    bin("tab-transpose")
        .write_stdin("id\tr1\tr2\nx\t1\t3\ny\t2\t4\n")
        .assert()
        .success()
        .stdout("id\tx\ty\nr1\t1\t2\nr2\t3\t4\n");
}

#[test]
fn transpose_ragged_input_fails() {
    bin("tab-transpose")
        .write_stdin("a\tb\n1\t2\t3\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ragged table"));
}

#[test]
fn capture_scenario_with_missing_token() {
    bin("tab-capture")
        .args(["-p", r"id=(\d+)", "-m", "NA"])
        .write_stdin("user id=42 active\nuser active\n")
        .assert()
        .success()
        .stdout("42\tuser id=42 active\nNA\tuser active\n");
}

#[test]
fn capture_rejects_pattern_without_groups() {
    bin("tab-capture")
        .args(["-p", r"id=\d+"])
        .write_stdin("x\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no capture groups"));
}

#[test]
fn capture_rejects_zero_field_index() {
    bin("tab-capture")
        .args(["-p", r"(\d+)", "--idx", "0"])
        .write_stdin("x\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn capture_short_skip_flags() {
    bin("tab-capture")
        .args(["-p", r"(\d+)", "-c", "-H"])
        .write_stdin("name\n# comment\nx1\n")
        .assert()
        .success()
        .stdout("name\n1\tx1\n");
}

#[test]
fn cut_keeps_columns_by_name() {
    bin("tab-cut")
        .args(["-c", "id,note"])
        .write_stdin("id\tn\tnote\nk\t1\tx\n")
        .assert()
        .success()
        .stdout("id\tnote\nk\tx\n");
}

#[test]
fn cut_inverted_drops_pattern_matches() {
    bin("tab-cut")
        .args(["-p", "count", "-v"])
        .write_stdin("id\tcount_a\tcount_b\nk\t1\t2\n")
        .assert()
        .success()
        .stdout("id\nk\n");
}

#[test]
fn cut_without_match_warns_and_outputs_nothing() {
    bin("tab-cut")
        .args(["-p", "zzz"])
        .write_stdin("id\tn\nk\t1\n")
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("no columns selected"));
}

#[test]
fn sort_rows_numerically() {
    bin("tab-sort")
        .args(["-b", "n"])
        .write_stdin("id\tn\na\t10\nb\t9\n")
        .assert()
        .success()
        .stdout("id\tn\nb\t9\na\t10\n");
}

#[test]
fn sort_unknown_column_fails() {
    bin("tab-sort")
        .args(["-b", "nope"])
        .write_stdin("id\tn\na\t1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("column not found"));
}

#[test]
fn insert_constant_column() {
    bin("tab-insert")
        .args(["-t", "first", "-v", "hg38", "-n", "build"])
        .write_stdin("id\tn\na\t1\n")
        .assert()
        .success()
        .stdout("build\tid\tn\nhg38\ta\t1\n");
}

#[test]
fn insert_beyond_append_fails() {
    bin("tab-insert")
        .args(["-t", "3", "-v", "x"])
        .write_stdin("id\tn\na\t1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid position"));
}

#[test]
fn group_collapses_rows() {
    bin("tab-group")
        .write_stdin("a1\tb1\na1\tb2\na2\tb3\n")
        .assert()
        .success()
        .stdout("a1\t2\tb1;b2\na2\t1\tb3\n");
}

#[test]
fn all_binaries_print_help() {
    for name in [
        "tab-merge",
        "tab-move",
        "tab-transpose",
        "tab-join",
        "tab-capture",
        "tab-group",
        "tab-cut",
        "tab-sort",
        "tab-insert",
    ] {
        bin(name)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage"));
    }
}
