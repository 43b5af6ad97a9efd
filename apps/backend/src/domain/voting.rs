//! Vote tally for a proposed mission group.

/// Outcome of a complete vote.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TallyOutcome {
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct VoteTally {
    pub approvals: usize,
    pub rejections: usize,
}

impl VoteTally {
    pub fn count(votes: &[bool]) -> Self {
        let approvals = votes.iter().filter(|&&v| v).count();
        Self {
            approvals,
            rejections: votes.len() - approvals,
        }
    }

    /// Strict majority approves; a tie is a rejection.
    pub fn outcome(&self) -> TallyOutcome {
        if self.approvals > self.rejections {
            TallyOutcome::Approved
        } else {
            TallyOutcome::Rejected
        }
    }
}

/// Tally once every player has voted, `None` while votes are outstanding.
pub fn tally_if_complete(votes: &[bool], player_count: usize) -> Option<TallyOutcome> {
    if votes.len() < player_count {
        return None;
    }
    Some(VoteTally::count(votes).outcome())
}
