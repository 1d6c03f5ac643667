use super::time_slots::TimeSlot;
use crate::shared::clock::hour_key;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Маска рабочих часов: "00".."23" → включён ли час.
///
/// Отсутствующий ключ означает "включён". Хранится документом настроек
/// `schedule_hours`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HourMask {
    hours: BTreeMap<String, bool>,
}

impl HourMask {
    pub fn from_map(hours: BTreeMap<String, bool>) -> Self {
        Self { hours }
    }

    pub fn as_map(&self) -> &BTreeMap<String, bool> {
        &self.hours
    }

    pub fn is_enabled(&self, hour: u32) -> bool {
        self.hours.get(&hour_key(hour)).copied().unwrap_or(true)
    }

    pub fn set(&mut self, hour: u32, enabled: bool) {
        if hour < 24 {
            self.hours.insert(hour_key(hour), enabled);
        }
    }

    pub fn toggle(&mut self, hour: u32) {
        let current = self.is_enabled(hour);
        self.set(hour, !current);
    }

    pub fn set_all(&mut self, enabled: bool) {
        self.set_range(0, 24, enabled);
    }

    /// Часы `[from, to)`
    pub fn set_range(&mut self, from: u32, to: u32, enabled: bool) {
        for hour in from..to.min(24) {
            self.set(hour, enabled);
        }
    }

    pub fn enabled_hours(&self) -> Vec<u32> {
        (0..24).filter(|h| self.is_enabled(*h)).collect()
    }

    pub fn disabled_count(&self) -> usize {
        24 - self.enabled_hours().len()
    }

    /// Строки сетки, которые отображаются
    pub fn visible_slots(&self, slots: &[TimeSlot]) -> Vec<TimeSlot> {
        slots
            .iter()
            .filter(|s| self.is_enabled(s.hour()))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d400_schedule_board::time_slots::{generate_slots, SlotRange};

    #[test]
    fn missing_keys_are_enabled() {
        let mask = HourMask::default();
        assert!(mask.is_enabled(0));
        assert!(mask.is_enabled(23));
        assert_eq!(mask.enabled_hours().len(), 24);
    }

    #[test]
    fn toggle_and_bulk() {
        let mut mask = HourMask::default();
        mask.toggle(9);
        assert!(!mask.is_enabled(9));
        mask.toggle(9);
        assert!(mask.is_enabled(9));

        mask.set_all(false);
        assert!(mask.enabled_hours().is_empty());
        mask.set_range(10, 12, true);
        assert_eq!(mask.enabled_hours(), vec![10, 11]);
        assert_eq!(mask.disabled_count(), 22);
    }

    #[test]
    fn hidden_rows_are_dropped() {
        let mut mask = HourMask::default();
        mask.set(9, false);
        let slots = generate_slots(SlotRange::new(8, 11).unwrap());
        let visible = mask.visible_slots(&slots);
        assert_eq!(visible.len(), 8);
        assert!(visible.iter().all(|s| s.hour() != 9));
    }

    #[test]
    fn serializes_as_plain_map() {
        let mut mask = HourMask::default();
        mask.set(7, false);
        let json = serde_json::to_string(&mask).unwrap();
        assert_eq!(json, r#"{"07":false}"#);
        let back: HourMask = serde_json::from_str(r#"{"07":false,"08":true}"#).unwrap();
        assert!(!back.is_enabled(7));
        assert!(back.is_enabled(8));
    }
}
