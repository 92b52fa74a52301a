use crate::color::Color;

/// Frames per second used when the host does not pick one
pub const DEFAULT_FRAME_RATE: u32 = 50;

/// How long an autoblink keeps the eyes shut
pub const BLINK_CLOSED_MS: u64 = 150;

// One-shot bursts
pub const CONFUSION_DURATION_MS: u64 = 500;
pub const CONFUSION_AMPLITUDE: i32 = 20;
pub const LAUGH_DURATION_MS: u64 = 500;
pub const LAUGH_AMPLITUDE: i32 = 5;

// Flicker amplitudes used when none has been set yet
pub const DEFAULT_H_FLICKER_AMPLITUDE: i32 = 2;
pub const DEFAULT_V_FLICKER_AMPLITUDE: i32 = 10;

// Curiosity widening
pub const CURIOSITY_HEIGHT_OFFSET: i32 = 8;
pub const CURIOSITY_EDGE_MARGIN: i32 = 10;

/// Smallest height an eye can be drawn with (a closed eye)
pub const MIN_EYE_HEIGHT: i32 = 1;

/// Recurring timer settings shared by autoblink and idle wander
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerConfig {
    pub enabled: bool,
    pub interval_secs: u32,   // Fixed part of the period
    pub variation_secs: u32,  // Upper bound (exclusive) of the random extra
}

impl TimerConfig {
    pub fn autoblink() -> Self {
        Self {
            enabled: false,
            interval_secs: 1,
            variation_secs: 4,
        }
    }

    pub fn idle() -> Self {
        Self {
            enabled: false,
            interval_secs: 1,
            variation_secs: 3,
        }
    }
}

/// Starting flicker amplitudes, used until a setter supplies its own
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlickerConfig {
    pub h_amplitude: i32,
    pub v_amplitude: i32,
}

impl Default for FlickerConfig {
    fn default() -> Self {
        Self {
            h_amplitude: DEFAULT_H_FLICKER_AMPLITUDE,
            v_amplitude: DEFAULT_V_FLICKER_AMPLITUDE,
        }
    }
}

/// Everything needed to build an engine.
///
/// Values are applied once at construction; afterwards the engine setters are
/// the only way to change them.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub screen_width: i32,
    pub screen_height: i32,
    pub main_color: Color,
    pub background: Color,
    pub frame_rate: u32,
    pub cyclops: bool,
    pub curious: bool,
    pub eye_width: i32,
    pub eye_height: i32,
    pub border_radius: i32,
    pub spacing: i32,
    pub autoblink: TimerConfig,
    pub idle: TimerConfig,
    pub flicker: FlickerConfig,
}

impl EngineConfig {
    /// 135x240, the default portrait layout
    pub fn portrait() -> Self {
        Self::default()
    }

    /// 240x135, the portrait layout rotated a quarter turn
    pub fn landscape() -> Self {
        Self {
            screen_width: 240,
            screen_height: 135,
            ..Self::default()
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            screen_width: 135,
            screen_height: 240,
            main_color: Color::WHITE,
            background: Color::BLACK,
            frame_rate: DEFAULT_FRAME_RATE,
            cyclops: false,
            curious: false,
            eye_width: 36,
            eye_height: 36,
            border_radius: 8,
            spacing: 10,
            autoblink: TimerConfig::autoblink(),
            idle: TimerConfig::idle(),
            flicker: FlickerConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landscape_swaps_screen_axes() {
        let portrait = EngineConfig::portrait();
        let landscape = EngineConfig::landscape();
        assert_eq!(landscape.screen_width, portrait.screen_height);
        assert_eq!(landscape.screen_height, portrait.screen_width);
        assert_eq!(landscape.eye_width, portrait.eye_width);
    }

    #[test]
    fn timers_start_disabled() {
        let config = EngineConfig::default();
        assert!(!config.autoblink.enabled);
        assert!(!config.idle.enabled);
        assert_eq!(config.autoblink.variation_secs, 4);
        assert_eq!(config.idle.variation_secs, 3);
        assert_eq!((config.flicker.h_amplitude, config.flicker.v_amplitude), (2, 10));
    }
}
