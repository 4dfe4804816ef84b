use gart::error::ArtError;
use gart::pattern::{build_grid, build_pattern};
use gart::preview::render_rows;
use gart::window::GRID_WEEKS;
use pretty_assertions::assert_eq;

#[test]
fn pattern_width_follows_message_length() {
    for message in ["M", "HI", "TEA", "MATEJ", "HIHIHIHIHI"] {
        let pattern = build_pattern(message).unwrap();
        let n = message.len();
        assert_eq!(pattern.height(), 7);
        assert_eq!(pattern.width(), 5 * n + (n - 1), "message = {message}");
        assert!(pattern.rows().iter().all(|row| row.len() == pattern.width()));
    }
}

#[test]
fn glyphs_are_separated_by_a_blank_column() {
    let pattern = build_pattern("MM").unwrap();
    assert!(pattern.rows().iter().all(|row| !row[5]));
}

#[test]
fn grid_is_always_exactly_the_target_width() {
    for message in ["H", "HI", "MATEJ", "JAMJAMJAMJAMJAM"] {
        for width in [1, 2, 5, 11, 12, 13, 52, 53, 54, 120] {
            let grid = build_grid(message, width).unwrap();
            assert_eq!(grid.height(), 7);
            assert_eq!(grid.width(), width, "message = {message}, width = {width}");
            assert!(grid.rows().iter().all(|row| row.len() == width));
        }
    }
}

#[test]
fn long_message_is_cropped() {
    let message = "MATEJMATEJ";
    let pattern = build_pattern(message).unwrap();
    let grid = build_grid(message, GRID_WEEKS).unwrap();
    assert!(pattern.width() > GRID_WEEKS);
    for (full, cropped) in pattern.rows().iter().zip(grid.rows()) {
        assert_eq!(&full[..GRID_WEEKS], cropped.as_slice());
    }
}

#[test]
fn hi_grid_is_reproduced_exactly() {
    assert_eq!(build_pattern("HI").unwrap().width(), 11);

    let grid = build_grid("HI", GRID_WEEKS).unwrap();
    let expected = vec![
        "#...#.#####.#...#.#####.#...#.#####.#...#.#####.#...#",
        "#...#...#...#...#...#...#...#...#...#...#...#...#...#",
        "#...#...#...#...#...#...#...#...#...#...#...#...#...#",
        "#####...#...#####...#...#####...#...#####...#...#####",
        "#...#...#...#...#...#...#...#...#...#...#...#...#...#",
        "#...#...#...#...#...#...#...#...#...#...#...#...#...#",
        "#...#.#####.#...#.#####.#...#.#####.#...#.#####.#...#",
    ];
    assert_eq!(render_rows(&grid), expected);
    assert_eq!(grid.count_on(), 145);
}

#[test]
fn lowercase_message_matches_uppercase() {
    assert_eq!(build_grid("hi", 53).unwrap(), build_grid("HI", 53).unwrap());
}

#[test]
fn unsupported_and_empty_messages_are_rejected() {
    assert!(matches!(build_pattern("HEY"), Err(ArtError::UnsupportedGlyph('Y'))));
    assert!(matches!(build_grid("H I", 53), Err(ArtError::UnsupportedGlyph(' '))));
    assert!(matches!(build_grid("", 53), Err(ArtError::EmptyMessage)));
}
