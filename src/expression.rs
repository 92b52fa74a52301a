// Expression enums: moods and the discrete gaze anchors

/// Mutually exclusive eyelid expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mood {
    #[default]
    Default,
    Tired,  // Lids droop toward the outer corners
    Angry,  // Lids slope down toward the nose
    Happy,  // Bottom of each eye is masked
}

impl Mood {
    pub const ALL: [Mood; 4] = [Mood::Default, Mood::Tired, Mood::Angry, Mood::Happy];

    pub fn next(&self) -> Self {
        match self {
            Mood::Default => Mood::Tired,
            Mood::Tired => Mood::Angry,
            Mood::Angry => Mood::Happy,
            Mood::Happy => Mood::Default,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Mood::Default => "Default",
            Mood::Tired => "Tired",
            Mood::Angry => "Angry",
            Mood::Happy => "Happy",
        }
    }
}

/// Where the left eye should look; the right eye follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Position {
    #[default]
    Center,
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Position {
    pub const ALL: [Position; 9] = [
        Position::Center,
        Position::North,
        Position::NorthEast,
        Position::East,
        Position::SouthEast,
        Position::South,
        Position::SouthWest,
        Position::West,
        Position::NorthWest,
    ];

    /// Resolve the anchor to a left-eye target `(x, y)`.
    ///
    /// `constraint_x`/`constraint_y` are the usable travel range, `center` the
    /// resting position used for [`Position::Center`].
    pub fn target(&self, constraint_x: i32, constraint_y: i32, center: (i32, i32)) -> (i32, i32) {
        match self {
            Position::Center => center,
            Position::North => (constraint_x / 2, 0),
            Position::NorthEast => (constraint_x, 0),
            Position::East => (constraint_x, constraint_y / 2),
            Position::SouthEast => (constraint_x, constraint_y),
            Position::South => (constraint_x / 2, constraint_y),
            Position::SouthWest => (0, constraint_y),
            Position::West => (0, constraint_y / 2),
            Position::NorthWest => (0, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_resolve_to_constraint_extremes() {
        let center = (26, 102);
        assert_eq!(Position::NorthWest.target(53, 204, center), (0, 0));
        assert_eq!(Position::SouthEast.target(53, 204, center), (53, 204));
        assert_eq!(Position::North.target(53, 204, center), (26, 0));
        assert_eq!(Position::West.target(53, 204, center), (0, 102));
        assert_eq!(Position::Center.target(53, 204, center), center);
    }

    #[test]
    fn mood_cycle_visits_every_mood() {
        let mut mood = Mood::default();
        let mut seen = Vec::new();
        for _ in 0..Mood::ALL.len() {
            seen.push(mood);
            mood = mood.next();
        }
        assert_eq!(seen, Mood::ALL.to_vec());
        assert_eq!(mood, Mood::Default);
    }
}
