use serde::{Deserialize, Serialize};
use std::fmt;

pub const SCORE_MIN: u8 = 0;
pub const SCORE_MAX: u8 = 100;

/// Qualitative verdict attached to a headline score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Strong,
    Promising,
    Risky,
    Weak,
}

impl Verdict {
    pub fn band(self) -> ScoreBand {
        match self {
            Verdict::Strong => ScoreBand::Strong,
            Verdict::Promising => ScoreBand::Promising,
            Verdict::Risky => ScoreBand::Risky,
            Verdict::Weak => ScoreBand::Weak,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.band().label()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score bucket used for chips and dashboard styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Weak,
    Risky,
    Promising,
    Strong,
}

impl ScoreBand {
    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Strong => "Strong",
            ScoreBand::Promising => "Promising",
            ScoreBand::Risky => "Risky",
            ScoreBand::Weak => "Weak",
        }
    }

    pub fn verdict(self) -> Verdict {
        match self {
            ScoreBand::Strong => Verdict::Strong,
            ScoreBand::Promising => Verdict::Promising,
            ScoreBand::Risky => Verdict::Risky,
            ScoreBand::Weak => Verdict::Weak,
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            ScoreBand::Strong => "strong",
            ScoreBand::Promising => "promising",
            ScoreBand::Risky => "risky",
            ScoreBand::Weak => "weak",
        };
        f.write_str(key)
    }
}

/// Inclusive lower bounds of the upper three bands; anything below `risky` is weak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandThresholds {
    pub strong: u8,
    pub promising: u8,
    pub risky: u8,
}

impl Default for BandThresholds {
    fn default() -> Self {
        Self {
            strong: 80,
            promising: 60,
            risky: 40,
        }
    }
}

impl BandThresholds {
    /// Bands any integer, clamping into the score range first.
    pub fn band(&self, score: i32) -> ScoreBand {
        let score = clamp_score(score);
        if score >= self.strong {
            ScoreBand::Strong
        } else if score >= self.promising {
            ScoreBand::Promising
        } else if score >= self.risky {
            ScoreBand::Risky
        } else {
            ScoreBand::Weak
        }
    }

    pub fn verdict(&self, score: u8) -> Verdict {
        self.band(i32::from(score)).verdict()
    }

    pub(crate) fn is_well_formed(&self) -> bool {
        self.strong <= SCORE_MAX && self.strong > self.promising && self.promising > self.risky
    }
}

pub(crate) fn clamp_score(value: i32) -> u8 {
    let clamped = value.clamp(i32::from(SCORE_MIN), i32::from(SCORE_MAX));
    u8::try_from(clamped).unwrap_or(SCORE_MAX)
}

pub fn verdict_for(score: u8) -> Verdict {
    BandThresholds::default().verdict(score)
}

pub fn get_band(score: i32) -> ScoreBand {
    BandThresholds::default().band(score)
}

pub fn band_label(band: ScoreBand) -> &'static str {
    band.label()
}

/// Compact `"72 / 100 · Promising"` rendering of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreChip {
    pub score: u8,
    pub band: ScoreBand,
}

impl ScoreChip {
    pub fn new(score: i32) -> Self {
        Self {
            score: clamp_score(score),
            band: get_band(score),
        }
    }
}

impl fmt::Display for ScoreChip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / 100 · {}", self.score, self.band.label())
    }
}
