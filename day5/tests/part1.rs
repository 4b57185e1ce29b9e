use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("sample.txt");

    cmd.assert().success().stdout(str::contains("143"));
}

#[test]
fn updates_violating_a_rule_are_not_ordered() {
    let (rules, updates) =
        day5::parse_input("47|53\n97|75\n\n47,53\n53,47\n75,97,53\n").expect("input should parse");

    assert!(rules.is_ordered(&updates[0]));
    assert!(!rules.is_ordered(&updates[1]));
    assert!(!rules.is_ordered(&updates[2]));
}

#[test]
fn middle_page_of_empty_update_is_none() {
    assert_eq!(day5::middle_page(&[75, 47, 61, 53, 29]), Some(61));
    assert_eq!(day5::middle_page(&[]), None);
}

#[test]
fn malformed_rule_is_rejected() {
    assert_eq!(
        day5::parse_input("47-53\n\n47,53\n").err(),
        Some(day5::Error::InvalidRuleText("47-53".to_string()))
    );
}
