use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("sample.txt");

    cmd.assert().success().stdout(str::contains("2 report(s)"));
}

#[test]
fn strictly_monotonic_reports_with_small_gaps_are_safe() {
    let reports = day2::parse_reports("7 6 4 2 1\n1 2 7 8 9\n9 7 6 2 1\n1 3 2 4 5\n8 6 4 4 1\n1 3 6 7 9\n")
        .expect("reports should parse");
    let safe = reports.iter().map(|rep| rep.is_safe()).collect::<Vec<_>>();

    assert_eq!(safe, vec![true, false, false, false, false, true]);
}
