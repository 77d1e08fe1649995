//! Static table of libfg2 hardware controls
//!
//! Maps each screaming-case control name to its human-readable description.
//! The table is fixed at process start and only ever enumerated; accessor
//! text is derived from it by the emit module.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One named hardware control and its description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlEntry {
    pub name: String,
    pub description: String,
}

impl ControlEntry {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

lazy_static::lazy_static! {
    // BTreeMap keeps enumeration in ascending name order.
    static ref FG_CONTROLS: BTreeMap<&'static str, &'static str> = {
        let mut m = BTreeMap::new();
        m.insert("BRIGHTNESS", "Picture brightness: or more precisely: the black level.");
        m.insert("CONTRAST", "Picture contrast or luma gain.");
        m.insert("SATURATION", "Picture color saturation or chroma gain.");
        m.insert("HUE", "Hue or color balance.");
        m.insert("AUDIO_VOLUME", "Overall audio volume. Note some drivers also provide an OSS or ALSA mixer interface.");
        m.insert("AUDIO_BALANCE", "Audio stereo balance. Minimum corresponds to all the way left: maximum to right.");
        m.insert("AUDIO_BASS", "Audio bass adjustment.");
        m.insert("AUDIO_TREBLE", "Audio treble adjustment.");
        m.insert("AUDIO_MUTE", "Mute audio: i. e. set the volume to zero: however without affecting FG_AUDIO_VOLUME. Like ALSA drivers: V4L2 drivers must mute at load time to avoid excessive noise. Actually the entire device should be reset to a low power consumption state.");
        m.insert("AUDIO_LOUDNESS", "Loudness mode (bass boost).");
        m.insert("AUTO_WHITE_BALANCE", "Automatic white balance (cameras).");
        m.insert("DO_WHITE_BALANCE", "This is an action control. When set (the value is ignored): the device will do a white balance and then hold the current setting. Contrast this with the boolean FG_AUTO_WHITE_BALANCE: which: when activated: keeps adjusting the white balance.");
        m.insert("RED_BALANCE", "\tRed chroma balance.");
        m.insert("BLUE_BALANCE", "Blue chroma balance.");
        m.insert("GAMMA", "Gamma adjust.");
        m.insert("EXPOSURE", "Exposure (cameras).");
        m.insert("AUTO_GAIN", "Automatic gain/exposure control.");
        m.insert("GAIN", "Gain control.");
        m.insert("HFLIP", "Mirror the picture horizontally.");
        m.insert("VFLIP", "Mirror the picture vertically.");
        m.insert("POWER_LINE_FREQUENCY", "nables a power line frequency filter to avoid flicker. Possible values are: FG_POWER_LINE_FREQUENCY_DISABLED (0): FG_POWER_LINE_FREQUENCY_50HZ (1) and FG_POWER_LINE_FREQUENCY_60HZ (2).");
        m.insert("AUTO_HUE", "Enables automatic hue control by the device. The effect of setting FG_HUE while automatic hue control is enabled is undefined: drivers should ignore such request.");
        m.insert("WHITE_BALANCE_TEMP", "This control specifies the white balance settings as a color temperature in Kelvin. A driver should have a minimum of 2800 (incandescent) to 6500 (daylight). For more information about color temperature see Wikipedia.");
        m.insert("SHARPNESS", "Adjusts the sharpness filters in a camera. The minimum value disables the filters: higher values give a sharper picture.");
        m.insert("BACKLIGHT_COMPENSATION", "Adjusts the backlight compensation in a camera. The minimum value disables backlight compensation.");
        m.insert("CHROMA_AGC", "");
        m.insert("COLOR_KILLER", "");
        m.insert("COLOR_EFFECTS", "");
        m.insert("AUTO_BRIGHTNESS", "");
        m.insert("BAND_STOP_FILTER", "");
        m.insert("ROTATE", "");
        m.insert("BACKGROUND_COLOR", "");
        m
    };
}

/// Enumerate every control entry in ascending name order
pub fn all() -> Vec<ControlEntry> {
    FG_CONTROLS
        .iter()
        .map(|(name, description)| ControlEntry::new(*name, *description))
        .collect()
}

/// Number of controls in the table
pub fn count() -> usize {
    FG_CONTROLS.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_populated() {
        assert_eq!(count(), 32);
        assert_eq!(all().len(), count());
    }

    #[test]
    fn test_enumeration_is_sorted_by_name() {
        let entries = all();
        for pair in entries.windows(2) {
            assert!(
                pair[0].name < pair[1].name,
                "{} should precede {}",
                pair[0].name,
                pair[1].name
            );
        }
    }

    #[test]
    fn test_audio_controls_order() {
        let entries = all();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        let balance = names.iter().position(|n| *n == "AUDIO_BALANCE").unwrap();
        let volume = names.iter().position(|n| *n == "AUDIO_VOLUME").unwrap();
        let auto_brightness = names.iter().position(|n| *n == "AUTO_BRIGHTNESS").unwrap();
        assert!(balance < volume);
        assert!(volume < auto_brightness);
    }

    #[test]
    fn test_names_are_screaming_case() {
        for entry in all() {
            assert!(!entry.name.is_empty());
            assert!(entry
                .name
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'));
        }
    }

    #[test]
    fn test_empty_descriptions_are_allowed() {
        let entries = all();
        let chroma = entries.iter().find(|e| e.name == "CHROMA_AGC").unwrap();
        assert_eq!(chroma.description, "");
    }
}
