use glam::IVec2;
use strum_macros::AsRefStr;

/// The four cardinal directions of travel on the track grid.
///
/// Discriminants follow the clockwise order used by the rotation table: right is `0`,
/// and each step clockwise (in screen space, `+y` pointing down) adds one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr)]
#[repr(usize)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    #[default]
    Right = 0,
    Down = 1,
    Left = 2,
    Up = 3,
}

impl Direction {
    /// The four cardinal directions, in index order.
    /// This is just a convenience constant for iterating over the directions.
    pub const DIRECTIONS: [Direction; 4] = [Direction::Right, Direction::Down, Direction::Left, Direction::Up];

    /// Returns the direction for an index in `0..4`, wrapping larger values.
    pub const fn from_index(index: usize) -> Direction {
        Self::DIRECTIONS[index % 4]
    }

    /// Returns the direction as a usize (0-3). Constant time.
    /// This is useful for indexing into arrays.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the opposite direction. Constant time.
    pub const fn opposite(self) -> Direction {
        Self::from_index(self.index() + 2)
    }

    /// The direction a quarter turn clockwise.
    pub const fn clockwise(self) -> Direction {
        Self::from_index(self.index() + 1)
    }

    /// The direction a quarter turn counter-clockwise.
    pub const fn counter_clockwise(self) -> Direction {
        Self::from_index(self.index() + 3)
    }

    /// The two directions at a right angle to this one.
    pub const fn perpendicular(self) -> [Direction; 2] {
        [self.clockwise(), self.counter_clockwise()]
    }

    /// The three directions that can follow this one without reversing.
    pub const fn forward_options(self) -> [Direction; 3] {
        [self, self.clockwise(), self.counter_clockwise()]
    }

    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Right | Direction::Left)
    }

    /// Returns the unit step for this direction.
    pub fn as_ivec2(self) -> IVec2 {
        self.into()
    }

    /// Resolves a unit step back into a direction, if it is one.
    pub fn from_step(step: IVec2) -> Option<Direction> {
        Self::DIRECTIONS.into_iter().find(|dir| dir.as_ivec2() == step)
    }
}

impl From<Direction> for IVec2 {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Right => IVec2::X,
            Direction::Down => IVec2::Y,
            Direction::Left => -IVec2::X,
            Direction::Up => -IVec2::Y,
        }
    }
}
