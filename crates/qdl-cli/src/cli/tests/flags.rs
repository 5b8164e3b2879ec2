use super::parse;
use crate::cli::Cli;
use clap::Parser;
use std::path::Path;

const URL: &str = "http://qiita.com/uasi/items/57da2e4268d348b371fb";

#[test]
fn cli_parse_url_only() {
    let cli = parse(&["qiita-dl", URL]);
    assert_eq!(cli.url, URL);
    assert!(!cli.executable);
    assert!(!cli.force);
    assert!(cli.output.is_none());
    assert!(cli.directory.is_none());
    assert_eq!(cli.index, 0);
    assert!(cli.config.is_none());
    assert_eq!(cli.verbose, 0);
}

#[test]
fn cli_parse_all_flags() {
    let cli = parse(&[
        "qiita-dl", "-x", "-f", "-o", "name.txt", "-d", "/tmp", "-n", "3", URL,
    ]);
    assert!(cli.executable);
    assert!(cli.force);
    assert_eq!(cli.output.as_deref(), Some("name.txt"));
    assert_eq!(cli.directory.as_deref(), Some(Path::new("/tmp")));
    assert_eq!(cli.index, 3);
}

#[test]
fn cli_parse_combined_short_flags() {
    let cli = parse(&["qiita-dl", "-xf", "-d", "/home/u/bin", URL]);
    assert!(cli.executable);
    assert!(cli.force);
    assert_eq!(cli.directory.as_deref(), Some(Path::new("/home/u/bin")));
}

#[test]
fn cli_parse_verbose_and_config() {
    let cli = parse(&["qiita-dl", "-vv", "--config", "qdl.toml", URL]);
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.config.as_deref(), Some(Path::new("qdl.toml")));
}

#[test]
fn cli_missing_url_is_error() {
    assert!(Cli::try_parse_from(["qiita-dl", "-x"]).is_err());
}

#[test]
fn cli_negative_index_is_error() {
    assert!(Cli::try_parse_from(["qiita-dl", "-n", "-1", URL]).is_err());
}

#[test]
fn job_from_flags() {
    let cli = parse(&["qiita-dl", "-x", "-o", "name.txt", "-d", "/tmp", "-n", "2", URL]);
    let job = cli.job();
    assert_eq!(job.url, URL);
    assert_eq!(job.index, 2);
    assert_eq!(job.filename.as_deref(), Some("name.txt"));
    assert_eq!(job.dir.as_deref(), Some(Path::new("/tmp")));
    assert!(job.executable);
    assert!(!job.force);
}
