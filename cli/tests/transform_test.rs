//! Integration tests for the `filter`, `map`, `flat-map` and `reduce` commands.

mod common;

use common::{arrayfns, check_stderr};
use expect_test::expect;
use predicates::prelude::*;

#[test]
fn filter_keeps_matches_in_order() {
    arrayfns()
        .args(["filter", "--where", "even", "1", "2", "3", "4", "6"])
        .assert()
        .success()
        .stdout("[2, 4, 6]\n");
}

#[test]
fn filter_nothing_matches() {
    arrayfns()
        .args(["filter", "--where", "zero", "1", "2"])
        .assert()
        .success()
        .stdout("[]\n");
}

#[test]
fn map_transforms_each_element() {
    arrayfns()
        .args(["map", "--with", "square", "1", "-2", "3"])
        .assert()
        .success()
        .stdout("[1, 4, 9]\n");
}

#[test]
fn map_overflow_is_an_error() {
    check_stderr(
        &["map", "--with", "double", "9223372036854775807"],
        None,
        expect![[r#"
            error: integer overflow in `double`
        "#]],
    );

    arrayfns()
        .args(["map", "--with", "double", "9223372036854775807"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn flat_map_expands_every_element() {
    arrayfns()
        .args(["flat-map", "--with", "double", "1", "2", "3"])
        .assert()
        .success()
        .stdout("[1, 2, 2, 4, 3, 6]\n");
}

#[test]
fn flat_map_expand_if() {
    arrayfns()
        .args(["flat-map", "--with", "negate", "--expand-if", "odd", "1", "2", "3"])
        .assert()
        .success()
        .stdout("[1, -1, 2, 3, -3]\n");
}

#[test]
fn reduce_sum() {
    arrayfns()
        .args(["reduce", "--op", "sum", "1", "2", "3", "4", "5"])
        .assert()
        .success()
        .stdout("15\n");
}

#[test]
fn reduce_with_initial() {
    arrayfns()
        .args(["reduce", "--op", "sum", "--initial", "-10", "1", "2"])
        .assert()
        .success()
        .stdout("-7\n");
}

#[test]
fn reduce_empty_returns_initial() {
    arrayfns()
        .args(["reduce", "--op", "product"])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn unknown_predicate_is_rejected() {
    arrayfns()
        .args(["filter", "--where", "prime", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'prime'"));
}
