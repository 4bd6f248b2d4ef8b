use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Platforms with a known OP boost. Anything else plays at 1.0.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Device {
    Phone,
    Mobile,
    Tablet,
    Console,
    Pc,
    Laptop,
    Ps,
    Xbox,
}

impl Device {
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Phone | Self::Mobile => 1.075,
            Self::Tablet => 1.05,
            Self::Console | Self::Ps | Self::Xbox => 1.10,
            Self::Pc | Self::Laptop => 1.0,
        }
    }

    /// Case-insensitive label lookup.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::from_str(label.trim()).ok()
    }
}

/// Boost applied to OP for `label`; unrecognised labels get 1.0.
pub fn device_multiplier(label: &str) -> f64 {
    Device::from_label(label).map_or(1.0, |d| d.multiplier())
}

pub fn all_devices() -> Vec<(Device, f64)> {
    Device::iter().map(|d| (d, d.multiplier())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_case_insensitive() {
        assert_eq!(Device::from_label("XBOX"), Some(Device::Xbox));
        assert_eq!(Device::from_label(" Mobile "), Some(Device::Mobile));
    }

    #[test]
    fn unknown_device_plays_at_one() {
        assert_eq!(device_multiplier("toaster"), 1.0);
        assert_eq!(device_multiplier(""), 1.0);
    }

    #[test]
    fn display_round_trips_through_label() {
        for (device, _) in all_devices() {
            assert_eq!(Device::from_label(&device.to_string()), Some(device));
        }
    }
}
