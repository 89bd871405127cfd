use std::fmt;

/// The six entries of a daily prayer schedule, in display order.
///
/// Sunrise is part of the schedule but is not an obligatory prayer;
/// it never qualifies as a "next prayer" target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prayer {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    /// All schedule entries in chronological display order.
    pub fn all() -> [Prayer; 6] {
        [
            Prayer::Fajr,
            Prayer::Sunrise,
            Prayer::Dhuhr,
            Prayer::Asr,
            Prayer::Maghrib,
            Prayer::Isha,
        ]
    }

    /// The five obligatory prayers, in chronological order.
    /// This is the candidate list for next-prayer resolution.
    pub fn obligatory() -> [Prayer; 5] {
        [
            Prayer::Fajr,
            Prayer::Dhuhr,
            Prayer::Asr,
            Prayer::Maghrib,
            Prayer::Isha,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Prayer::Fajr => "Fajr",
            Prayer::Sunrise => "Sunrise",
            Prayer::Dhuhr => "Dhuhr",
            Prayer::Asr => "Asr",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
        }
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_order_is_fixed() {
        let names: Vec<&str> = Prayer::all().iter().map(|p| p.display_name()).collect();
        assert_eq!(
            names,
            vec!["Fajr", "Sunrise", "Dhuhr", "Asr", "Maghrib", "Isha"]
        );
    }

    #[test]
    fn obligatory_excludes_sunrise() {
        assert!(!Prayer::obligatory().contains(&Prayer::Sunrise));
        assert_eq!(Prayer::obligatory().len(), 5);
    }
}
