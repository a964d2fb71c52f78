//! Paddle shrink schedule
//!
//! The paddle gets shorter as the rally goes on. Entries fire on an exact rally
//! count only; counts between entries leave the paddle as it is. The table is
//! scanned in order and the first matching entry wins, so the second entry for
//! 10 (half-length 35) can never fire.

/// Which rally counts an entry applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RallyMatch {
    Exactly(u32),
    Above(u32),
}

impl RallyMatch {
    #[inline]
    pub fn matches(self, rally_count: u32) -> bool {
        match self {
            RallyMatch::Exactly(n) => rally_count == n,
            RallyMatch::Above(n) => rally_count > n,
        }
    }
}

/// Ordered (rally count, half-length) table
pub const SHRINK_SCHEDULE: [(RallyMatch, f32); 10] = [
    (RallyMatch::Exactly(0), 50.0),
    (RallyMatch::Exactly(5), 45.0),
    (RallyMatch::Exactly(10), 40.0),
    // Shadowed by the entry above
    (RallyMatch::Exactly(10), 35.0),
    (RallyMatch::Exactly(15), 30.0),
    (RallyMatch::Exactly(20), 25.0),
    (RallyMatch::Exactly(25), 20.0),
    (RallyMatch::Exactly(30), 15.0),
    (RallyMatch::Exactly(35), 10.0),
    (RallyMatch::Above(50), 5.0),
];

/// Half-length the paddle takes at this rally count, if any entry fires
pub fn half_length_for(rally_count: u32) -> Option<f32> {
    SHRINK_SCHEDULE
        .iter()
        .find(|(rule, _)| rule.matches(rally_count))
        .map(|&(_, half_length)| half_length)
}
