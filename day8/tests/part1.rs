use assert_cmd::Command;
use day8::AntennaField;
use predicates::prelude::predicate::str;
use utils::ScanError;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("sample.txt");

    cmd.assert().success().stdout(str::contains("14"));
}

#[test]
fn antinodes_mirror_each_antenna_pair() {
    // Antennas at (3, 4) and (5, 5) give antinodes at (1, 3) and (7, 6).
    let field = AntennaField::parse(
        "..........\n..........\n..........\n....a.....\n..........\n.....a....\n..........\n..........\n..........\n..........\n",
    )
    .expect("field should parse");

    assert_eq!(field.antinode_count(), 2);
}

#[test]
fn antinodes_outside_bounds_are_discarded() {
    let field = AntennaField::parse("aa..\n....\n").expect("field should parse");

    // Only (0, 2) is in bounds; the mirror on the other side would be at
    // column -1.
    assert_eq!(field.antinode_count(), 1);
}

#[test]
fn non_alphanumeric_frequency_is_rejected() {
    assert_eq!(
        AntennaField::parse("..#.\n....\n").err(),
        Some(ScanError::InvalidChar('#'))
    );
}
