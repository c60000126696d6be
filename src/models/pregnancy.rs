/// Earliest week the tracker accepts.
pub const MIN_PREGNANCY_WEEK: u8 = 1;

/// Latest week the tracker accepts.
pub const MAX_PREGNANCY_WEEK: u8 = 40;

/// Trimester label for a pregnancy week.
pub fn trimester_for_week(week: u8) -> &'static str {
    if week <= 12 {
        "1º Trimestre"
    } else if week <= 28 {
        "2º Trimestre"
    } else {
        "3º Trimestre"
    }
}

/// What the pregnancy tracker shows for the current week.
#[derive(Debug, Clone, PartialEq)]
pub struct PregnancyInfo {
    pub week: u8,
    pub baby_size: String,
    pub baby_weight: String,
    pub symptoms: Vec<String>,
    pub tips: Vec<String>,
    pub development: String,
}

impl PregnancyInfo {
    /// Weeks remaining until week 40.
    pub fn weeks_remaining(&self) -> u8 {
        MAX_PREGNANCY_WEEK.saturating_sub(self.week)
    }

    /// Progress through the pregnancy, 0-100.
    pub fn progress_percent(&self) -> u16 {
        u16::from(self.week) * 100 / u16::from(MAX_PREGNANCY_WEEK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trimester_boundaries() {
        assert_eq!(trimester_for_week(1), "1º Trimestre");
        assert_eq!(trimester_for_week(12), "1º Trimestre");
        assert_eq!(trimester_for_week(13), "2º Trimestre");
        assert_eq!(trimester_for_week(28), "2º Trimestre");
        assert_eq!(trimester_for_week(29), "3º Trimestre");
        assert_eq!(trimester_for_week(40), "3º Trimestre");
    }

    #[test]
    fn test_progress() {
        let info = PregnancyInfo {
            week: 20,
            baby_size: String::new(),
            baby_weight: String::new(),
            symptoms: vec![],
            tips: vec![],
            development: String::new(),
        };
        assert_eq!(info.progress_percent(), 50);
        assert_eq!(info.weeks_remaining(), 20);
    }
}
