use std::collections::HashSet;
use std::path::PathBuf;
use std::process::{Command, Output};

use mkpasswd_core::words::WORDS;
use mkpasswd_core::WORDS_PER_PHRASE;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_mkpasswd"))
}

fn run_mkpasswd(args: &[&str]) -> Output {
    Command::new(bin())
        .args(args)
        .output()
        .expect("run mkpasswd")
}

fn stdout_line(output: &Output) -> String {
    let stdout = String::from_utf8(output.stdout.clone()).expect("stdout is utf-8");
    assert!(stdout.ends_with('\n'), "output must end with a newline");
    assert_eq!(
        stdout.matches('\n').count(),
        1,
        "exactly one line on stdout"
    );
    stdout.trim_end_matches('\n').to_string()
}

fn assert_dictionary_words(words: &[&str]) {
    assert_eq!(words.len(), WORDS_PER_PHRASE);
    for word in words {
        assert!(
            WORDS.iter().any(|entry| entry == word),
            "{:?} is not a dictionary word",
            word
        );
    }
}

#[test]
fn test_cli_default_output_is_six_concatenated_words() {
    let output = run_mkpasswd(&[]);
    assert!(output.status.success());
    let line = stdout_line(&output);
    // Six 3-4 letter words with no separators.
    assert!(line.chars().all(|c| c.is_ascii_alphabetic()));
    assert!((18..=24).contains(&line.len()), "unexpected length: {line}");
}

#[test]
fn test_cli_dash_flag_joins_words_with_dashes() {
    let output = run_mkpasswd(&["-d"]);
    assert!(output.status.success());
    let line = stdout_line(&output);
    let words: Vec<&str> = line.split('-').collect();
    assert_dictionary_words(&words);
}

#[test]
fn test_cli_space_flag_joins_words_with_spaces() {
    let output = run_mkpasswd(&["-s"]);
    assert!(output.status.success());
    let line = stdout_line(&output);
    let words: Vec<&str> = line.split(' ').collect();
    assert_dictionary_words(&words);
}

#[test]
fn test_cli_last_delimiter_flag_wins() {
    let output = run_mkpasswd(&["-d", "-s"]);
    assert!(output.status.success());
    let line = stdout_line(&output);
    assert!(line.contains(' ') && !line.contains('-'));

    let output = run_mkpasswd(&["-s", "-d"]);
    assert!(output.status.success());
    let line = stdout_line(&output);
    assert!(line.contains('-') && !line.contains(' '));
}

#[test]
fn test_cli_help_flag_prints_usage_to_stderr_only() {
    let output = run_mkpasswd(&["-h"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty(), "no passphrase on -h");
    let stderr = String::from_utf8(output.stderr).expect("stderr is utf-8");
    assert!(stderr.contains("usage: mkpasswd"));
    assert!(stderr.contains("-d"));
    assert!(stderr.contains("-s"));
}

#[test]
fn test_cli_unknown_flag_is_fatal_with_usage_on_stderr() {
    let output = run_mkpasswd(&["-x"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty(), "nothing on stdout on bad flags");
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_cli_repeated_runs_produce_varied_passphrases() {
    // Never a fixed output; across many runs more than one distinct first
    // word must appear.
    let mut first_words = HashSet::new();
    for _ in 0..64 {
        let output = run_mkpasswd(&["-s"]);
        assert!(output.status.success());
        let line = stdout_line(&output);
        let first = line.split(' ').next().expect("first word").to_string();
        first_words.insert(first);
    }
    assert!(first_words.len() > 1);
}
