//! Mood classification derived from the meter value.

/// Display bucket for a mood value.
///
/// The three tiers partition 0–100 with no gaps or overlaps; boundaries are
/// inclusive on the lower tier (40 is still `Happy`, 75 is still `Okay`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoodTier {
    Happy,
    Okay,
    Broke,
}

impl MoodTier {
    /// Classifies a 0–100 mood value.
    pub fn from_mood(mood: u8) -> Self {
        if mood <= 40 {
            MoodTier::Happy
        } else if mood <= 75 {
            MoodTier::Okay
        } else {
            MoodTier::Broke
        }
    }

    /// Big face shown above the track.
    pub fn emoji(self) -> &'static str {
        match self {
            MoodTier::Happy => "😁",
            MoodTier::Okay => "😐",
            MoodTier::Broke => "😰",
        }
    }

    /// Headline under the face.
    pub fn headline(self) -> &'static str {
        match self {
            MoodTier::Happy => "Wallet is Happy",
            MoodTier::Okay => "Wallet is Okay",
            MoodTier::Broke => "Wallet is Crying",
        }
    }

    /// One-line advisory, Urdu/English mix as on the page.
    pub fn advice(self) -> &'static str {
        match self {
            MoodTier::Happy => "Shabash! Paisa bach raha hai, treat yourself!",
            MoodTier::Okay => "Sab theek chal raha hai, bas careful rehna.",
            MoodTier::Broke => "Bhai, thoda control karo! Budget khatam ho gaya hai.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_inclusive_on_lower_tier() {
        assert_eq!(MoodTier::from_mood(40), MoodTier::Happy);
        assert_eq!(MoodTier::from_mood(41), MoodTier::Okay);
        assert_eq!(MoodTier::from_mood(75), MoodTier::Okay);
        assert_eq!(MoodTier::from_mood(76), MoodTier::Broke);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(MoodTier::from_mood(0), MoodTier::Happy);
        assert_eq!(MoodTier::from_mood(100), MoodTier::Broke);
    }

    #[test]
    fn test_partition_has_no_gaps() {
        for mood in 0..=100u8 {
            // from_mood is total over the range; every value lands in a tier.
            let tier = MoodTier::from_mood(mood);
            match tier {
                MoodTier::Happy => assert!(mood <= 40),
                MoodTier::Okay => assert!(mood > 40 && mood <= 75),
                MoodTier::Broke => assert!(mood > 75),
            }
        }
    }

    #[test]
    fn test_display_strings() {
        assert_eq!(MoodTier::Happy.headline(), "Wallet is Happy");
        assert_eq!(MoodTier::Broke.emoji(), "😰");
    }
}
