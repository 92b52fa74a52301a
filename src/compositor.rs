//! Per-frame pipeline.
//!
//! One pass: widen for curiosity, smooth every current value toward its
//! target, poll the behavior generators, overlay flicker, then draw the eyes
//! and punch the mood eyelids out of them in the background color.

use crate::behaviors::{height_offsets, Behaviors};
use crate::expression::Mood;
use crate::face::FaceState;
use crate::geometry::EyeGeometry;
use crate::ports::{RandomSource, Surface};

/// Run one full compositor pass and present the result
pub fn compose_frame<S: Surface + ?Sized>(
    face: &mut FaceState,
    behaviors: &mut Behaviors,
    surface: &mut S,
    now: u64,
    rng: &mut dyn RandomSource,
) {
    interpolate(face);
    behaviors.update_all(face, now, rng);
    apply_flicker(face);
    if face.cyclops {
        mask_right_eye(face);
    }

    draw_eyes(face, surface);
    smooth_eyelids(face);
    draw_eyelids(face, surface);
    surface.present();
}

/// Move every current value one step toward its target
pub fn interpolate(face: &mut FaceState) {
    let (left_offset, right_offset) = height_offsets(face);
    let eyes = &mut face.eyes;
    eyes.left.height_offset = left_offset;
    eyes.right.height_offset = right_offset;

    eyes.left.step_height();
    eyes.right.step_height();

    eyes.spacing.step();
    eyes.left.step_shape();
    // Right target is derived after the left eye's width has moved
    eyes.couple_right_to_left();
    eyes.right.step_shape();
}

/// Jitter overlays go straight onto the current positions
pub fn apply_flicker(face: &mut FaceState) {
    if let Some(dx) = face.h_flicker.next_offset() {
        face.eyes.left.x.current += dx;
        face.eyes.right.x.current += dx;
    }
    if let Some(dy) = face.v_flicker.next_offset() {
        face.eyes.left.y.current += dy;
        face.eyes.right.y.current += dy;
    }
}

fn mask_right_eye(face: &mut FaceState) {
    face.eyes.right.width.current = 0;
    face.eyes.right.height.current = 0;
    face.eyes.spacing.current = 0;
}

fn draw_eyes<S: Surface + ?Sized>(face: &FaceState, surface: &mut S) {
    surface.clear(face.background);

    for eye in visible_eyes(face) {
        surface.fill_round_rect(
            eye.x.current,
            eye.y.current,
            eye.width.current,
            eye.height.current,
            eye.border_radius.current,
            face.main_color,
        );
    }
}

/// The left eye, plus the right one unless running a single eye
fn visible_eyes(face: &FaceState) -> impl Iterator<Item = &EyeGeometry> {
    std::iter::once(&face.eyes.left).chain((!face.cyclops).then_some(&face.eyes.right))
}

/// Lid targets follow the mood, sized from the left eye's current height
fn smooth_eyelids(face: &mut FaceState) {
    let lid = face.eyes.left.height.current / 2;
    let lids = &mut face.eyelids;

    lids.tired.next = if face.mood == Mood::Tired { lid } else { 0 };
    lids.angry.next = if face.mood == Mood::Angry { lid } else { 0 };
    lids.happy_bottom.next = if face.mood == Mood::Happy { lid } else { 0 };

    lids.tired.step();
    lids.angry.step();
    lids.happy_bottom.step();
}

fn draw_eyelids<S: Surface + ?Sized>(face: &FaceState, surface: &mut S) {
    let bg = face.background;
    let l = &face.eyes.left;
    let r = &face.eyes.right;
    let (lx, ly, lw) = (l.x.current, l.y.current - 1, l.width.current);
    let (rx, ry, rw) = (r.x.current, r.y.current - 1, r.width.current);
    let mid = lx + lw / 2;

    let mut triangle = |points: [(i32, i32); 3]| {
        let [(x1, y1), (x2, y2), (x3, y3)] = points;
        surface.fill_triangle(x1, y1, x2, y2, x3, y3, bg);
    };

    // Tired: lids droop toward the outer corners
    let tired = face.eyelids.tired.current;
    if tired > 0 {
        if face.cyclops {
            triangle([(lx, ly), (mid, ly), (lx, ly + tired)]);
            triangle([(mid, ly), (lx + lw, ly), (lx + lw, ly + tired)]);
        } else {
            triangle([(lx, ly), (lx + lw, ly), (lx, ly + tired)]);
            triangle([(rx, ry), (rx + rw, ry), (rx + rw, ry + tired)]);
        }
    }

    // Angry: lids slope down toward the middle of the face
    let angry = face.eyelids.angry.current;
    if angry > 0 {
        if face.cyclops {
            triangle([(lx, ly), (mid, ly), (mid, ly + angry)]);
            triangle([(mid, ly), (lx + lw, ly), (lx + lw, ly + angry)]);
        } else {
            triangle([(lx, ly), (lx + lw, ly), (lx + lw, ly + angry)]);
            triangle([(rx, ry), (rx + rw, ry), (rx, ry + angry)]);
        }
    }

    // Happy: cover the bottom of each eye
    let happy = face.eyelids.happy_bottom.current;
    if happy > 0 {
        for eye in visible_eyes(face) {
            surface.fill_round_rect(
                eye.x.current - 1,
                eye.y.current + eye.height.current - happy + 1,
                eye.width.current + 2,
                eye.height.default,
                eye.border_radius.current,
                bg,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::ports::{DrawCommand, FixedRandom, RecordingSurface};

    fn frame(face: &mut FaceState, behaviors: &mut Behaviors, surface: &mut RecordingSurface, now: u64) {
        compose_frame(face, behaviors, surface, now, &mut FixedRandom(0));
    }

    fn setup(config: EngineConfig) -> (FaceState, Behaviors, RecordingSurface) {
        let face = FaceState::new(&config);
        let behaviors = Behaviors::new(config.autoblink, config.idle);
        (face, behaviors, RecordingSurface::new())
    }

    #[test]
    fn frame_starts_with_clear_and_draws_two_eyes() {
        let (mut face, mut behaviors, mut surface) = setup(EngineConfig::default());
        frame(&mut face, &mut behaviors, &mut surface, 0);

        assert_eq!(surface.last_frame()[0], DrawCommand::Clear(face.background));
        assert_eq!(surface.round_rects(face.main_color).len(), 2);
        assert!(surface.triangles().is_empty());
    }

    #[test]
    fn cyclops_draws_single_shape_and_zeroes_right_eye() {
        let (mut face, mut behaviors, mut surface) = setup(EngineConfig {
            cyclops: true,
            ..EngineConfig::default()
        });
        frame(&mut face, &mut behaviors, &mut surface, 0);

        assert_eq!(face.eyes.right.width.current, 0);
        assert_eq!(face.eyes.right.height.current, 0);
        assert_eq!(face.eyes.spacing.current, 0);
        assert_eq!(surface.round_rects(face.main_color).len(), 1);
    }

    #[test]
    fn tired_mood_punches_two_triangles() {
        let (mut face, mut behaviors, mut surface) = setup(EngineConfig::default());
        for now in 0..10 {
            frame(&mut face, &mut behaviors, &mut surface, now * 20);
        }
        face.mood = Mood::Tired;
        frame(&mut face, &mut behaviors, &mut surface, 200);

        assert_eq!(face.eyelids.tired.next, 18);
        assert_eq!(face.eyelids.tired.current, 9);
        let triangles = surface.triangles();
        assert_eq!(triangles.len(), 2);
        let l = &face.eyes.left;
        assert_eq!(
            triangles[0],
            DrawCommand::Triangle {
                points: [
                    (l.x.current, l.y.current - 1),
                    (l.x.current + l.width.current, l.y.current - 1),
                    (l.x.current, l.y.current + 8),
                ],
                color: face.background,
            }
        );
    }

    #[test]
    fn happy_mood_masks_bottom_with_round_rects() {
        let (mut face, mut behaviors, mut surface) = setup(EngineConfig::default());
        face.mood = Mood::Happy;
        for now in 0..10 {
            frame(&mut face, &mut behaviors, &mut surface, now * 20);
        }
        let happy = face.eyelids.happy_bottom.current;
        assert!(happy > 0);

        let masks = surface.round_rects(face.background);
        assert_eq!(masks.len(), 2);
        let l = &face.eyes.left;
        // One pixel wider on each side, default height, current radius
        assert_eq!(
            masks[0],
            DrawCommand::RoundRect {
                x: 25,
                y: l.y.current + l.height.current - happy + 1,
                width: 38,
                height: 36,
                radius: 8,
                color: face.background,
            }
        );
    }

    #[test]
    fn angry_cyclops_lids_slope_from_left_to_right_corner() {
        let (mut face, mut behaviors, mut surface) = setup(EngineConfig {
            cyclops: true,
            ..EngineConfig::default()
        });
        face.mood = Mood::Angry;
        for now in 0..15 {
            frame(&mut face, &mut behaviors, &mut surface, now * 20);
        }
        let l = &face.eyes.left;
        let (x, y, w) = (l.x.current, l.y.current - 1, l.width.current);
        let mid = x + w / 2;
        let angry = face.eyelids.angry.current;
        assert!(angry > 0);
        assert_eq!(
            surface.triangles(),
            vec![
                DrawCommand::Triangle {
                    points: [(x, y), (mid, y), (mid, y + angry)],
                    color: face.background,
                },
                DrawCommand::Triangle {
                    points: [(mid, y), (x + w, y), (x + w, y + angry)],
                    color: face.background,
                },
            ]
        );
    }

    #[test]
    fn flicker_overlay_bypasses_smoothing() {
        let (mut face, mut behaviors, mut surface) = setup(EngineConfig::default());
        face.h_flicker.set(true, Some(4));
        let x_before = face.eyes.left.x.current;
        frame(&mut face, &mut behaviors, &mut surface, 0);
        assert_eq!(face.eyes.left.x.current, x_before - 4);
        frame(&mut face, &mut behaviors, &mut surface, 20);
        // Smoothing pulls half way back, then the overlay flips sign
        assert_eq!(face.eyes.left.x.current, (x_before - 4 + x_before) / 2 + 4);
    }
}
