use utils::{Glyph, MapBounds, MapScanner, Position, ScanError};

fn classify(c: char) -> Glyph<char> {
    match c {
        '.' => Glyph::Floor,
        c if c.is_ascii_alphanumeric() || c == '#' => Glyph::Item(c),
        _ => Glyph::Invalid,
    }
}

#[test]
fn scanner_reports_symbols_with_positions_and_bounds() {
    let mut scanner = MapScanner::new(".#.\n..a\n...\n", classify);
    let items = scanner
        .by_ref()
        .collect::<Result<Vec<_>, _>>()
        .expect("map should scan");

    assert_eq!(
        items,
        vec![(Position::new(0, 1), '#'), (Position::new(1, 2), 'a')]
    );
    assert_eq!(scanner.bounds(), MapBounds::new(3, 3));
}

#[test]
fn scanner_accepts_map_without_trailing_newline() {
    let mut scanner = MapScanner::new("..\n#.", classify);
    let items = scanner
        .by_ref()
        .collect::<Result<Vec<_>, _>>()
        .expect("map should scan");

    assert_eq!(items, vec![(Position::new(1, 0), '#')]);
    assert_eq!(scanner.bounds(), MapBounds::new(2, 2));
}

#[test]
fn scanner_accepts_crlf_line_endings() {
    let mut scanner = MapScanner::new("#.\r\n.#\r\n", classify);
    let items = scanner
        .by_ref()
        .collect::<Result<Vec<_>, _>>()
        .expect("map should scan");

    assert_eq!(
        items,
        vec![(Position::new(0, 0), '#'), (Position::new(1, 1), '#')]
    );
    assert_eq!(scanner.bounds(), MapBounds::new(2, 2));
}

#[test]
fn scanner_rejects_bare_carriage_return() {
    let result = MapScanner::new("#.\r.#\n", classify).collect::<Result<Vec<_>, _>>();

    assert_eq!(result, Err(ScanError::BareCarriageReturn));
}

#[test]
fn scanner_rejects_ragged_rows() {
    let result = MapScanner::new("....\n.....\n", classify).collect::<Result<Vec<_>, _>>();

    assert_eq!(result, Err(ScanError::InconsistentRow(4, 5)));
}

#[test]
fn scanner_rejects_unrecognized_character() {
    let result = MapScanner::new("..\n.!\n", classify).collect::<Result<Vec<_>, _>>();

    assert_eq!(result, Err(ScanError::InvalidChar('!')));
}

#[test]
fn scanner_yields_empty_bounds_for_empty_input() {
    let mut scanner = MapScanner::new("", classify);

    assert!(scanner.by_ref().next().is_none());
    assert!(scanner.bounds().is_empty());
}

#[test]
fn position_arithmetic() {
    let a = Position::new(3, 4);
    let b = Position::new(5, 1);
    let v = b.delta(&a);

    assert_eq!(a.offset(&v), Some(Position::new(5, 1)));
    assert_eq!(a.offset(&v.scaled(-1)), Some(Position::new(1, 7)));
    assert_eq!(Position::new(0, 0).offset(&v.scaled(-1)), None);
}
