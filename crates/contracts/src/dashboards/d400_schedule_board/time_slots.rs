use crate::shared::clock::format_hhmm;
use serde::{Deserialize, Serialize};

/// Шаг сетки расписания, минут
pub const SLOT_MINUTES: i32 = 15;

/// Строка сетки
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Минуты от полуночи
    pub minutes: i32,
    /// "HH:MM"
    pub label: String,
}

impl TimeSlot {
    pub fn at(minutes: i32) -> Self {
        Self {
            minutes,
            label: format_hhmm(minutes),
        }
    }

    pub fn hour(&self) -> u32 {
        (self.minutes / 60) as u32
    }

    /// Первый слот часа (для разделителя часов в сетке)
    pub fn is_hour_start(&self) -> bool {
        self.minutes % 60 == 0
    }
}

/// Диапазон часов сетки `[start_hour:00, end_hour:00)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRange {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl Default for SlotRange {
    fn default() -> Self {
        Self {
            start_hour: 0,
            end_hour: 24,
        }
    }
}

impl SlotRange {
    pub fn new(start_hour: u32, end_hour: u32) -> Result<Self, String> {
        let range = Self {
            start_hour,
            end_hour,
        };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.end_hour > 24 {
            return Err(format!("Час окончания {} больше 24", self.end_hour));
        }
        if self.start_hour >= self.end_hour {
            return Err(format!(
                "Час начала {} должен быть меньше часа окончания {}",
                self.start_hour, self.end_hour
            ));
        }
        Ok(())
    }

    pub fn hours(&self) -> std::ops::Range<u32> {
        self.start_hour..self.end_hour
    }
}

/// Слоты по 15 минут от начала диапазона до его конца (не включая)
pub fn generate_slots(range: SlotRange) -> Vec<TimeSlot> {
    let start = range.start_hour as i32 * 60;
    let end = range.end_hour.min(24) as i32 * 60;
    (start..end)
        .step_by(SLOT_MINUTES as usize)
        .map(TimeSlot::at)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_day_has_96_slots() {
        let slots = generate_slots(SlotRange::default());
        assert_eq!(slots.len(), 96);
        assert_eq!(slots[0].label, "00:00");
        assert_eq!(slots[1].label, "00:15");
        assert_eq!(slots.last().map(|s| s.label.as_str()), Some("23:45"));
    }

    #[test]
    fn partial_range() {
        let slots = generate_slots(SlotRange::new(9, 11).unwrap());
        let labels: Vec<&str> = slots.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            ["09:00", "09:15", "09:30", "09:45", "10:00", "10:15", "10:30", "10:45"]
        );
        assert_eq!(slots[4].hour(), 10);
        assert!(slots[4].is_hour_start());
    }

    #[test]
    fn invalid_ranges() {
        assert!(SlotRange::new(10, 10).is_err());
        assert!(SlotRange::new(0, 25).is_err());
    }
}
