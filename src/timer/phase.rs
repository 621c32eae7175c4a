//! Phase and stage of the interval timer

use serde::{Deserialize, Serialize};

/// Which half of a set is counting down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Working,
    Resting,
}

/// Whether the timer is stopped, counting down, or paused.
///
/// A stopped timer has no stage; it always restarts in [`Stage::Working`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Stopped,
    Started(Stage),
    Paused(Stage),
}

impl Phase {
    /// Stage of the current set, `Working` while stopped
    pub fn stage(&self) -> Stage {
        match self {
            Phase::Stopped => Stage::Working,
            Phase::Started(stage) | Phase::Paused(stage) => *stage,
        }
    }

    /// Only a started timer counts as running; a paused one does not
    pub fn is_running(&self) -> bool {
        matches!(self, Phase::Started(_))
    }

    pub fn is_stopped(&self) -> bool {
        matches!(self, Phase::Stopped)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Stopped => "stopped",
            Phase::Started(_) => "started",
            Phase::Paused(_) => "paused",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_stopped_and_working() {
        let phase = Phase::default();
        assert_eq!(phase, Phase::Stopped);
        assert_eq!(phase.stage(), Stage::Working);
        assert!(!phase.is_running());
    }

    #[test]
    fn test_paused_keeps_stage_but_is_not_running() {
        let phase = Phase::Paused(Stage::Resting);
        assert_eq!(phase.stage(), Stage::Resting);
        assert!(!phase.is_running());
        assert_eq!(phase.as_str(), "paused");
    }
}
