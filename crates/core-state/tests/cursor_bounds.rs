//! Property tests: no sequence of movement primitives leaves the screen.

use core_state::{Direction, EditorState};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Op {
    Move(Direction),
    Page(Direction),
    Start,
    End,
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => direction().prop_map(Op::Move),
        1 => prop_oneof![Just(Direction::Up), Just(Direction::Down)].prop_map(Op::Page),
        1 => Just(Op::Start),
        1 => Just(Op::End),
    ]
}

proptest! {
    #[test]
    fn cursor_stays_in_bounds(
        cols in 1usize..200,
        rows in 1usize..80,
        ops in proptest::collection::vec(op(), 0..200),
    ) {
        let mut s = EditorState::new(cols, rows).unwrap();
        for op in ops {
            match op {
                Op::Move(d) => { s.move_cursor(d); }
                Op::Page(d) => { s.move_page(d); }
                Op::Start => s.line_start(),
                Op::End => s.line_end(),
            }
            prop_assert!(s.cursor_x < cols);
            prop_assert!(s.cursor_y < rows);
        }
    }

    // A step and its opposite cancel unless the first step hit an edge.
    #[test]
    fn interior_moves_are_reversible(cols in 3usize..100, rows in 3usize..50, x in 1usize..99, y in 1usize..49) {
        let mut s = EditorState::new(cols, rows).unwrap();
        s.cursor_x = x.min(cols - 2);
        s.cursor_y = y.min(rows - 2);
        let start = (s.cursor_x, s.cursor_y);
        prop_assert!(s.move_cursor(Direction::Right));
        prop_assert!(s.move_cursor(Direction::Left));
        prop_assert!(s.move_cursor(Direction::Down));
        prop_assert!(s.move_cursor(Direction::Up));
        prop_assert_eq!((s.cursor_x, s.cursor_y), start);
    }
}
