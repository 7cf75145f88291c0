//! Integration tests for the fh-cli binary.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn fh() -> Command {
    let mut cmd = Command::cargo_bin("fh").unwrap();
    for key in [
        "FARHOME_COMMAND",
        "FARHOME_SEED",
        "FARHOME_IMAGE_ROOT",
        "FARHOME_SHOW_ZERO",
        "FARHOME_MAX_DICE",
    ] {
        cmd.env_remove(key);
    }
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

// ---------------------------------------------------------------------------
// roll
// ---------------------------------------------------------------------------

#[test]
fn roll_guaranteed_wounds() {
    fh().args(["roll", "3g"])
        .assert()
        .success()
        .stdout(predicate::str::contains("guaranteed-wound").and(predicate::str::contains("Wounds: 3")));
}

#[test]
fn roll_with_flavor() {
    fh().args(["roll", "g", "--flavor", "Ambush"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ambush"));
}

#[test]
fn roll_same_seed_same_result() {
    let a = stdout_of(fh().args(["roll", "3s2e4w", "--seed", "7", "-o", "json"]));
    let b = stdout_of(fh().args(["roll", "3s2e4w", "--seed", "7", "-o", "json"]));
    assert_eq!(a, b);
}

#[test]
fn roll_seed_from_env() {
    let a = stdout_of(fh().args(["roll", "5n", "-o", "json"]).env("FARHOME_SEED", "11"));
    let b = stdout_of(fh().args(["roll", "5n", "--seed", "11", "-o", "json"]));
    assert_eq!(a, b);
}

#[test]
fn roll_json_output() {
    fh().args(["roll", "2g", "-o", "json"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"die\": \"guaranteed-wound\"")
                .and(predicate::str::contains("\"face\": \"wound\""))
                .and(predicate::str::contains("\"wounds\": 2")),
        );
}

#[test]
fn roll_html_output() {
    fh().args(["roll", "g", "-o", "html"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("data-die=\"guaranteed-wound\"")
                .and(predicate::str::contains(
                    "systems/farhome/images/dice/guaranteed-wound-wound.webp",
                )),
        );
}

#[test]
fn roll_html_uses_image_root_from_env() {
    fh().args(["roll", "g", "-o", "html"])
        .env("FARHOME_IMAGE_ROOT", "assets")
        .assert()
        .success()
        .stdout(predicate::str::contains("src=\"assets/guaranteed-wound-wound.webp\""));
}

#[test]
fn roll_with_reroll() {
    fh().args(["roll", "2g", "--reroll", "0", "-o", "json"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"discarded\": true")
                .and(predicate::str::contains("\"rerolled\": true"))
                .and(predicate::str::contains("\"wounds\": 2")),
        );
}

#[test]
fn roll_reroll_out_of_range_fails() {
    fh().args(["roll", "g", "--reroll", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no die at position 4"));
}

#[test]
fn roll_invalid_formula_fails() {
    fh().args(["roll", "1dx"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("1dx")
                .and(predicate::str::contains("h = hero"))
                .and(predicate::str::contains("error:")),
        );
}

#[test]
fn roll_too_many_dice_fails() {
    fh().args(["roll", "4294967295h1s"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("4294967296 dice").and(predicate::str::contains("at most 100")));
}

#[test]
fn roll_respects_max_dice_from_env() {
    fh().args(["roll", "3g"])
        .env("FARHOME_MAX_DICE", "2")
        .assert()
        .failure()
        .stderr(predicate::str::contains("at most 2"));
}

#[test]
fn roll_unparsable_seed_env_fails() {
    fh().args(["roll", "g"])
        .env("FARHOME_SEED", "abc")
        .assert()
        .failure()
        .stderr(predicate::str::contains("FARHOME_SEED"));
}

#[test]
fn roll_empty_formula_fails() {
    fh().args(["roll", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid dice formula"));
}

// ---------------------------------------------------------------------------
// chat
// ---------------------------------------------------------------------------

#[test]
fn chat_rolls_command() {
    fh().args(["chat", "/fh 2g # Falling rocks"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Falling rocks").and(predicate::str::contains("Wounds: 2")),
        );
}

#[test]
fn chat_rejected_formula_is_escaped_reply() {
    fh().args(["chat", "/fh <b>"])
        .assert()
        .success()
        .stdout(predicate::str::contains("&lt;b&gt;"));
}

#[test]
fn chat_oversized_pool_is_reply() {
    fh().args(["chat", "/fh 999999999h"])
        .assert()
        .success()
        .stdout(predicate::str::contains("at most 100"));
}

#[test]
fn chat_ignores_other_commands() {
    fh().args(["chat", "/roll 1d20"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a roll command"));
}

#[test]
fn chat_command_word_from_env() {
    fh().args(["chat", "/farhome g"])
        .env("FARHOME_COMMAND", "farhome")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wounds: 1"));
}

// ---------------------------------------------------------------------------
// parse / dice
// ---------------------------------------------------------------------------

#[test]
fn parse_shows_pool() {
    fh().args(["parse", "4w 3s 2e"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("superior")
                .and(predicate::str::contains("3s2e4w = 9 dice")),
        );
}

#[test]
fn parse_counts_past_category_limit() {
    fh().args(["parse", "4294967295h1s"])
        .assert()
        .success()
        .stdout(predicate::str::contains("= 4294967296 dice"));
}

#[test]
fn parse_invalid_formula_fails() {
    fh().args(["parse", "2q"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid dice formula"));
}

#[test]
fn dice_lists_every_die() {
    fh().arg("dice").assert().success().stdout(
        predicate::str::contains("hero")
            .and(predicate::str::contains("guaranteed wound"))
            .and(predicate::str::contains("Critical Defense")),
    );
}
