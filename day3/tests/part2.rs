use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("part2").unwrap();
    cmd.arg("sample.txt");

    cmd.assert().success().stdout(str::contains("48"));
}

#[test]
fn toggles_carry_across_the_stream() {
    let sum = day3::mul_sum_toggled(
        "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))",
    );

    assert_eq!(sum, 48);
}
