use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("part2").unwrap();
    cmd.arg("sample.txt");

    cmd.assert().success().stdout(str::contains("4 report(s)"));
}

#[test]
fn dampener_tolerates_one_faulty_level() {
    let reports =
        day2::parse_reports("1 3 2 4 5\n8 6 4 4 1\n9 7 6 2 1\n").expect("reports should parse");

    assert!(reports[0].is_safe_with_dampener());
    assert!(reports[1].is_safe_with_dampener());
    assert!(!reports[2].is_safe_with_dampener());
}
