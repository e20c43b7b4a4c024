//! Integration tests for the species and guide commands.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_species_lists_every_label() {
    let mut cmd = cargo_bin_cmd!("leafix");
    cmd.arg("species");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("BIDARA"))
        .stdout(predicate::str::contains("SAMBUNGNYAWA"))
        .stdout(predicate::str::contains("Piper betle L."));
}

#[test]
fn test_species_shows_taxonomy() {
    let mut cmd = cargo_bin_cmd!("leafix");
    cmd.arg("species").arg("SIRIH");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Scientific name: Piper betle L."))
        .stdout(predicate::str::contains("Order: Piperales"))
        .stdout(predicate::str::contains("Species: P. betle"));
}

#[test]
fn test_species_is_case_insensitive() {
    let mut cmd = cargo_bin_cmd!("leafix");
    cmd.arg("species").arg("kelor");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Moringa oleifera"));
}

#[test]
fn test_unknown_species_fails() {
    let mut cmd = cargo_bin_cmd!("leafix");
    cmd.arg("species").arg("MANGGA");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no taxonomy record for label 'MANGGA'"));
}

#[test]
fn test_guide_mentions_white_background() {
    let mut cmd = cargo_bin_cmd!("leafix");
    cmd.arg("guide");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("white background"));
}

#[test]
fn test_guide_explains_error_precedence() {
    let mut cmd = cargo_bin_cmd!("leafix");
    cmd.arg("guide");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("checked before the models load"))
        .stdout(predicate::str::contains("nothing is classified"));
}
