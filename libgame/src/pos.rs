#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    /// Offsets the position by `[dx, dy]` on a torus of the given size, each axis wrapping on its own.
    pub fn offset_wrapping(self, offset: [isize; 2], width: usize, height: usize) -> Self {
        fn wrap(center: usize, offset: isize, len: usize) -> usize {
            (center as isize + offset).rem_euclid(len as isize) as usize
        }

        Self {
            x: wrap(self.x, offset[0], width),
            y: wrap(self.y, offset[1], height),
        }
    }
}

impl From<[usize; 2]> for Position {
    fn from(value: [usize; 2]) -> Self {
        Self {
            x: value[0],
            y: value[1],
        }
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl From<Position> for [usize; 2] {
    fn from(value: Position) -> Self {
        [value.x, value.y]
    }
}
