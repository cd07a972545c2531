use crate::dice::Dice;

/// Shape of a hand, computed once and queried by every lower-section rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct HandShape {
    pub counts: [u8; 7],
    pub distinct: u8,
    pub max_count: u8,
    /// Longest run of consecutive faces present.
    pub longest_run: u8,
}

#[inline(always)]
pub fn analyze(dice: &Dice) -> HandShape {
    let counts = dice.face_counts();
    let mut s = HandShape {
        counts,
        ..Default::default()
    };

    let mut run = 0u8;
    for &c in &counts[1..] {
        if c > 0 {
            s.distinct += 1;
            s.max_count = s.max_count.max(c);
            run += 1;
            s.longest_run = s.longest_run.max(run);
        } else {
            run = 0;
        }
    }
    s
}

impl HandShape {
    pub fn is_four_of_a_kind(&self) -> bool {
        self.max_count >= 4
    }

    /// Two faces split 3/2, or a single face five times. Five of a kind
    /// counting as a full house is a house rule of this game.
    pub fn is_full_house(&self) -> bool {
        self.distinct == 1 || (self.distinct == 2 && self.max_count == 3)
    }

    pub fn is_small_straight(&self) -> bool {
        self.longest_run >= 4
    }

    pub fn is_large_straight(&self) -> bool {
        self.longest_run == 5
    }

    pub fn is_yahtzee(&self) -> bool {
        self.max_count == 5
    }
}
