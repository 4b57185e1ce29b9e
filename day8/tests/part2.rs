use assert_cmd::Command;
use day8::AntennaField;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("part2").unwrap();
    cmd.arg("sample.txt");

    cmd.assert().success().stdout(str::contains("34"));
}

#[test]
fn resonant_harmonics_cover_the_whole_line() {
    let field = AntennaField::parse(
        "T.........\n...T......\n.T........\n..........\n..........\n..........\n..........\n..........\n..........\n..........\n",
    )
    .expect("field should parse");

    assert_eq!(field.resonant_antinode_count(), 9);
}
