use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("sample.txt");

    cmd.assert().success().stdout(str::contains("18 time(s)"));
}

#[test]
fn xmas_is_found_in_all_eight_directions() {
    let field = day4::WordField::parse("XMAS\nMM..\nAXAX\nS.XS\n..AA\n..SM\n")
        .expect("field should parse");

    // Rightward, downward and one diagonal from the X at (0, 0).
    assert_eq!(field.xmas_count(), 3);
}

#[test]
fn ragged_rows_are_rejected() {
    assert_eq!(
        day4::WordField::parse("XMAS\nXM.\n").err(),
        Some(day4::Error::InconsistentRow(4, 3))
    );
}
