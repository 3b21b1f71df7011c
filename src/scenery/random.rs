//! Injectable randomness for scenery placement

use rand::Rng;

/// Source of the random draws used when placing scenery.
///
/// Every `rand::Rng` is one; tests can supply fixed sequences instead.
pub trait RandomSource {
    /// Uniform draw in `[low, high]`. `low <= high` is guaranteed by callers.
    fn uniform(&mut self, low: f32, high: f32) -> f32;
    /// Fair coin
    fn coin_flip(&mut self) -> bool;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn uniform(&mut self, low: f32, high: f32) -> f32 {
        if low >= high {
            return low;
        }
        self.gen_range(low..=high)
    }

    fn coin_flip(&mut self) -> bool {
        self.gen_bool(0.5)
    }
}

/// Replays fixed fractions and coin results, cycling when exhausted.
/// `uniform` maps each fraction in [0, 1] onto the requested range.
#[cfg(test)]
pub struct ScriptedRandom {
    fractions: Vec<f32>,
    coins: Vec<bool>,
    next_fraction: usize,
    next_coin: usize,
}

#[cfg(test)]
impl ScriptedRandom {
    pub fn new(fractions: Vec<f32>, coins: Vec<bool>) -> Self {
        Self { fractions, coins, next_fraction: 0, next_coin: 0 }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn uniform(&mut self, low: f32, high: f32) -> f32 {
        let t = self.fractions[self.next_fraction % self.fractions.len()];
        self.next_fraction += 1;
        low + (high - low) * t
    }

    fn coin_flip(&mut self) -> bool {
        let c = self.coins[self.next_coin % self.coins.len()];
        self.next_coin += 1;
        c
    }
}
