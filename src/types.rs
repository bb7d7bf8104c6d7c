//! Evaluation result types.

use std::fmt;

/// A strength score, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PasswordScore(u8);

impl PasswordScore {
    pub const MAX: u8 = 100;

    /// Creates a score, clamping out-of-range values.
    pub fn new(value: i64) -> Self {
        Self(value.clamp(0, Self::MAX as i64) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn strength(&self) -> PasswordStrength {
        match self.0 {
            0..=49 => PasswordStrength::Weak,
            50..=69 => PasswordStrength::Medium,
            70..=89 => PasswordStrength::Strong,
            _ => PasswordStrength::Epic,
        }
    }
}

impl fmt::Display for PasswordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
    Epic,
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PasswordStrength::Weak => "weak",
            PasswordStrength::Medium => "medium",
            PasswordStrength::Strong => "strong",
            PasswordStrength::Epic => "epic",
        };
        f.write_str(label)
    }
}

/// Score plus the reasons it fell short of full marks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordEvaluation {
    pub score: PasswordScore,
    pub reasons: Vec<String>,
}

impl PasswordEvaluation {
    pub fn strength(&self) -> PasswordStrength {
        self.score.strength()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_clamped() {
        assert_eq!(PasswordScore::new(-3).value(), 0);
        assert_eq!(PasswordScore::new(250).value(), 100);
        assert_eq!(PasswordScore::new(42).value(), 42);
    }

    #[test]
    fn test_strength_boundaries() {
        assert_eq!(PasswordScore::new(49).strength(), PasswordStrength::Weak);
        assert_eq!(PasswordScore::new(50).strength(), PasswordStrength::Medium);
        assert_eq!(PasswordScore::new(69).strength(), PasswordStrength::Medium);
        assert_eq!(PasswordScore::new(70).strength(), PasswordStrength::Strong);
        assert_eq!(PasswordScore::new(90).strength(), PasswordStrength::Epic);
        assert_eq!(PasswordScore::new(100).strength(), PasswordStrength::Epic);
    }

    #[test]
    fn test_display() {
        assert_eq!(PasswordScore::new(74).to_string(), "74");
        assert_eq!(PasswordStrength::Medium.to_string(), "medium");
    }
}
