use glam::IVec2;
use gridloop::grid::direction::*;

#[test]
fn test_direction_opposite() {
    let test_cases = [
        (Direction::Up, Direction::Down),
        (Direction::Down, Direction::Up),
        (Direction::Left, Direction::Right),
        (Direction::Right, Direction::Left),
    ];

    for (dir, expected) in test_cases {
        assert_eq!(dir.opposite(), expected);
    }
}

#[test]
fn test_direction_as_ivec2() {
    let test_cases = [
        (Direction::Right, IVec2::X),
        (Direction::Down, IVec2::Y),
        (Direction::Left, -IVec2::X),
        (Direction::Up, -IVec2::Y),
    ];

    for (dir, expected) in test_cases {
        assert_eq!(dir.as_ivec2(), expected);
        assert_eq!(IVec2::from(dir), expected);
        assert_eq!(Direction::from_step(expected), Some(dir));
    }
}

#[test]
fn test_direction_indices() {
    let test_cases = [
        (Direction::Right, 0),
        (Direction::Down, 1),
        (Direction::Left, 2),
        (Direction::Up, 3),
    ];

    for (dir, expected) in test_cases {
        assert_eq!(dir.index(), expected);
    }
}

#[test]
fn test_forward_options_exclude_reversal() {
    for dir in Direction::DIRECTIONS {
        let options = dir.forward_options();
        assert_eq!(options[0], dir);
        assert!(!options.contains(&dir.opposite()));
        for turn in dir.perpendicular() {
            assert!(options.contains(&turn));
            assert_ne!(turn.is_horizontal(), dir.is_horizontal());
        }
    }
}

#[test]
fn test_from_step_rejects_non_unit_steps() {
    assert_eq!(Direction::from_step(IVec2::new(1, 1)), None);
    assert_eq!(Direction::from_step(IVec2::new(2, 0)), None);
    assert_eq!(Direction::from_step(IVec2::ZERO), None);
}
