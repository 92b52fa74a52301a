/// Square-wave jitter overlay.
///
/// Applied straight to the current position, bypassing smoothing. The sign
/// flips every frame, so the eyes oscillate at half the frame rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flicker {
    pub enabled: bool,
    pub amplitude: i32,
    alternate: bool,
}

impl Flicker {
    pub fn new(amplitude: i32) -> Self {
        Self {
            enabled: false,
            amplitude,
            alternate: false,
        }
    }

    /// `None` keeps the current amplitude
    pub fn set(&mut self, enabled: bool, amplitude: Option<i32>) {
        self.enabled = enabled;
        if let Some(amplitude) = amplitude {
            self.amplitude = amplitude;
        }
    }

    /// Offset for this frame, or `None` when disabled
    pub fn next_offset(&mut self) -> Option<i32> {
        if !self.enabled {
            return None;
        }
        let offset = if self.alternate { self.amplitude } else { -self.amplitude };
        self.alternate = !self.alternate;
        Some(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_alternate_sign() {
        let mut flicker = Flicker::new(3);
        flicker.set(true, None);
        let offsets: Vec<i32> = (0..4).filter_map(|_| flicker.next_offset()).collect();
        assert_eq!(offsets, vec![-3, 3, -3, 3]);
    }

    #[test]
    fn disabled_flicker_leaves_phase_untouched() {
        let mut flicker = Flicker::new(3);
        assert_eq!(flicker.next_offset(), None);
        flicker.set(true, Some(5));
        assert_eq!(flicker.next_offset(), Some(-5));
    }
}
