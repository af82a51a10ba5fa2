#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use assert_cmd::cargo_bin_cmd;
use predicates::prelude::predicate;

#[test]
fn test_help_lists_resources() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("mflix");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("movies"))
        .stdout(predicate::str::contains("embedded-movies"))
        .stdout(predicate::str::contains("theaters"))
        .stdout(predicate::str::contains("demo"));
}

#[test]
fn test_movies_list_help() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("mflix");
    cmd.args(["movies", "list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--page"))
        .stdout(predicate::str::contains("--limit"));
}

#[test]
fn test_movies_search_help_lists_filters() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("mflix");
    cmd.args(["movies", "search", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--title"))
        .stdout(predicate::str::contains("--genre"))
        .stdout(predicate::str::contains("--year"));
}

#[test]
fn test_movies_get_missing_id() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("mflix");
    cmd.args(["movies", "get"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--id"));
}

#[test]
fn test_comments_by_movie_missing_id() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("mflix");
    cmd.args(["comments", "by-movie"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--id"));
}

#[test]
fn test_unknown_subcommand_fails() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("mflix");
    cmd.arg("playlists")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}
