use crate::config::{CURIOSITY_EDGE_MARGIN, CURIOSITY_HEIGHT_OFFSET};
use crate::face::FaceState;

/// Per-frame height offsets `(left, right)` for eyes looking at a screen edge.
///
/// The left eye widens near the low edge (or, with a single eye, the high
/// edge too); the right eye widens near the high edge.
pub fn height_offsets(face: &FaceState) -> (i32, i32) {
    if !face.curious {
        return (0, 0);
    }

    let left = &face.eyes.left;
    let right = &face.eyes.right;

    let left_at_edge = left.x.next <= CURIOSITY_EDGE_MARGIN
        || (face.cyclops && left.x.next >= face.constraint_x() - CURIOSITY_EDGE_MARGIN);
    let right_at_edge = right.x.next >= face.screen_width - right.width.current - CURIOSITY_EDGE_MARGIN;

    (
        if left_at_edge { CURIOSITY_HEIGHT_OFFSET } else { 0 },
        if right_at_edge { CURIOSITY_HEIGHT_OFFSET } else { 0 },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;

    fn curious_face() -> FaceState {
        FaceState::new(&EngineConfig {
            curious: true,
            ..EngineConfig::default()
        })
    }

    #[test]
    fn off_when_not_curious() {
        let mut face = FaceState::new(&EngineConfig::default());
        face.eyes.left.x.next = 0;
        assert_eq!(height_offsets(&face), (0, 0));
    }

    #[test]
    fn centered_eyes_do_not_widen() {
        assert_eq!(height_offsets(&curious_face()), (0, 0));
    }

    #[test]
    fn left_edge_widens_left_eye() {
        let mut face = curious_face();
        face.eyes.left.x.next = 4;
        face.eyes.couple_right_to_left();
        assert_eq!(height_offsets(&face), (CURIOSITY_HEIGHT_OFFSET, 0));
    }

    #[test]
    fn right_edge_widens_right_eye() {
        let mut face = curious_face();
        face.eyes.left.x.next = face.constraint_x();
        face.eyes.couple_right_to_left();
        assert_eq!(height_offsets(&face), (0, CURIOSITY_HEIGHT_OFFSET));
    }

    #[test]
    fn single_eye_widens_at_high_edge() {
        let mut face = curious_face();
        face.cyclops = true;
        face.eyes.left.x.next = face.constraint_x();
        let (left, _) = height_offsets(&face);
        assert_eq!(left, CURIOSITY_HEIGHT_OFFSET);
    }
}
