use anyhow::{anyhow, Result};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::quiz::definition::AnswerSet;


pub trait Weighted {
    fn weight(&self) -> f64;
}

impl Weighted for f64 {
    fn weight(&self) -> f64 {
        *self
    }
}

/// Picks an index with probability proportional to its weight.
///
/// Walks the items in order, subtracting each weight from a uniform draw in
/// `[0, total)` and stopping once the remainder reaches zero. Rounding can let
/// the walk run off the end, in which case the last item is picked. Returns
/// `None` only when there is nothing to pick from.
pub fn pick<T: Weighted, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Option<usize> {
    let last = items.len().checked_sub(1)?;
    let total: f64 = items.iter().map(Weighted::weight).sum();
    let mut remainder = rng.gen::<f64>() * total;
    for (index, item) in items.iter().enumerate() {
        remainder -= item.weight();
        if remainder <= 0.0 {
            return Some(index);
        }
    }
    Some(last)
}

/// Display order of a question's options.
///
/// Slot `n` (1-based) shows the option at original position `order[n - 1]`
/// (also 1-based), so answers given as slots can be mapped back to the
/// positions the question's correct set refers to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Presentation {
    order: Vec<usize>,
}

impl Presentation {
    #[cfg(test)]
    pub fn identity(option_count: usize) -> Self {
        Presentation {
            order: (1..=option_count).collect(),
        }
    }

    /// Uniform shuffle of the original positions.
    pub fn shuffled<R: Rng + ?Sized>(option_count: usize, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (1..=option_count).collect();
        order.shuffle(rng);
        Presentation { order }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn original_position(&self, slot: usize) -> Option<usize> {
        let offset = slot.checked_sub(1)?;
        self.order.get(offset).copied()
    }

    pub fn to_original(&self, slots: &[usize]) -> Result<AnswerSet> {
        slots
            .iter()
            .map(|&slot| {
                self.original_position(slot).ok_or_else(|| {
                    anyhow!(
                        "There is no option {}, pick between 1 and {}",
                        slot,
                        self.len()
                    )
                })
            })
            .collect()
    }

    #[cfg(test)]
    pub fn slots_for(&self, originals: &AnswerSet) -> Vec<usize> {
        self.iter()
            .filter(|(_slot, original)| originals.contains(original))
            .map(|(slot, _original)| slot)
            .collect()
    }

    /// Yields `(slot, original position)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.order
            .iter()
            .enumerate()
            .map(|(offset, &original)| (offset + 1, original))
    }
}
