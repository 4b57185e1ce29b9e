use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("part2").unwrap();
    cmd.arg("sample.txt");

    cmd.assert().success().stdout(str::contains("31"));
}

#[test]
fn similarity_score_counts_right_list_occurrences() {
    let (list0, list1) = day1::parse_lists("3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n")
        .expect("lists should parse");

    assert_eq!(day1::similarity_score(&list0, &list1), 31);
}
