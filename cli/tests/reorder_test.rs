//! Integration tests for the `reverse`, `slice` and `splice` commands.

mod common;

use common::{arrayfns, check_stdout};
use expect_test::expect;

#[test]
fn reverse_odd_length() {
    arrayfns()
        .args(["reverse", "1", "2", "3", "4", "5"])
        .assert()
        .success()
        .stdout("[5, 4, 3, 2, 1]\n");
}

#[test]
fn reverse_empty() {
    arrayfns().args(["reverse"]).assert().success().stdout("[]\n");
}

#[test]
fn slice_negative_start() {
    arrayfns()
        .args(["slice", "--start", "-2", "1", "2", "3", "4", "5"])
        .assert()
        .success()
        .stdout("[4, 5]\n");
}

#[test]
fn slice_negative_end() {
    arrayfns()
        .args(["slice", "--start", "1", "--end", "-1", "1", "2", "3", "4", "5"])
        .assert()
        .success()
        .stdout("[2, 3, 4]\n");
}

#[test]
fn slice_start_after_end() {
    arrayfns()
        .args(["slice", "--start", "2", "--end", "1", "1", "2", "3"])
        .assert()
        .success()
        .stdout("[]\n");
}

#[test]
fn splice_replace() {
    check_stdout(
        &[
            "splice",
            "--start",
            "1",
            "--delete-count",
            "2",
            "--insert",
            "10",
            "--insert",
            "20",
            "1",
            "2",
            "3",
            "4",
            "5",
        ],
        None,
        expect![[r#"
            removed: [2, 3]
            result: [1, 10, 20, 4, 5]
        "#]],
    );
}

#[test]
fn splice_defaults_remove_everything() {
    check_stdout(
        &["splice", "7", "8", "9"],
        None,
        expect![[r#"
            removed: [7, 8, 9]
            result: []
        "#]],
    );
}

#[test]
fn splice_negative_start_insert_only() {
    check_stdout(
        &["splice", "--start", "-1", "--delete-count", "0", "--insert", "-5", "1", "2"],
        None,
        expect![[r#"
            removed: []
            result: [1, -5, 2]
        "#]],
    );
}
