//! Seeding tie-break strategies.
//!
//! Before each round the active players are sorted by score with a stable
//! sort. A [`SeedTieBreak`] arranges them first, so its order decides who
//! goes first among players on the same score.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::player::PlayerId;

/// Orders players before the stable score sort
pub trait SeedTieBreak: Send {
    /// Rearrange `players` (given in registration order) in place
    fn arrange(&mut self, players: &mut [PlayerId]);
}

/// Random order among equal scores
pub struct RandomTieBreak {
    rng: StdRng,
}

impl RandomTieBreak {
    /// Seeded from the operating system; runs are not reproducible
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible order for a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomTieBreak {
    fn default() -> Self {
        Self::new()
    }
}

impl SeedTieBreak for RandomTieBreak {
    fn arrange(&mut self, players: &mut [PlayerId]) {
        players.shuffle(&mut self.rng);
    }
}

/// Registration order among equal scores
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistrationOrder;

impl SeedTieBreak for RegistrationOrder {
    fn arrange(&mut self, _players: &mut [PlayerId]) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn players(n: usize) -> Vec<PlayerId> {
        (0..n).map(|_| Uuid::new_v4()).collect()
    }

    #[test]
    fn test_registration_order_is_untouched() {
        let original = players(6);
        let mut arranged = original.clone();
        RegistrationOrder.arrange(&mut arranged);
        assert_eq!(arranged, original);
    }

    #[test]
    fn test_same_seed_same_order() {
        let original = players(12);
        let mut first = original.clone();
        let mut second = original.clone();

        RandomTieBreak::seeded(42).arrange(&mut first);
        RandomTieBreak::seeded(42).arrange(&mut second);
        assert_eq!(first, second);
    }

    #[test]
    fn test_random_keeps_every_player() {
        let original = players(9);
        let mut arranged = original.clone();
        RandomTieBreak::new().arrange(&mut arranged);

        let mut sorted_original = original.clone();
        sorted_original.sort();
        arranged.sort();
        assert_eq!(arranged, sorted_original);
    }
}
