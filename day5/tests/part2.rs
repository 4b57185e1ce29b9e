use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("part2").unwrap();
    cmd.arg("sample.txt");

    cmd.assert().success().stdout(str::contains("123"));
}

#[test]
fn reorder_applies_the_ordering_rules() {
    let (rules, updates) = day5::parse_input(
        "47|53\n97|13\n97|61\n97|47\n75|29\n61|13\n75|53\n29|13\n97|29\n53|29\n61|53\n97|53\n61|29\n47|13\n75|47\n97|75\n47|61\n75|61\n47|29\n75|13\n53|13\n\n75,97,47,61,53\n61,13,29\n97,13,75,29,47\n",
    )
    .expect("input should parse");

    assert_eq!(rules.reorder(&updates[0]), vec![97, 75, 47, 61, 53]);
    assert_eq!(rules.reorder(&updates[1]), vec![61, 29, 13]);
    assert_eq!(rules.reorder(&updates[2]), vec![97, 75, 47, 29, 13]);
}
