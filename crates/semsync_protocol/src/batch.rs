//! Order-preserving batch packing under a byte budget.

use tracing::warn;

/// The outcome of packing one payload sequence.
///
/// Concatenating `batches` reproduces the input order exactly, minus the
/// payloads in `dropped`.
#[derive(Debug)]
pub struct Packed<T> {
    /// Emitted batches. Each batch is non-empty and its estimate sum is
    /// strictly below the budget.
    pub batches: Vec<Vec<T>>,
    /// Payloads whose own estimate met or exceeded the budget.
    ///
    /// There is no finer granularity than a single payload, so these fit
    /// in no batch; they are handed back instead of being silently lost.
    pub dropped: Vec<T>,
}

impl<T> Packed<T> {
    /// Total number of payloads placed into batches.
    #[must_use]
    pub fn unit_count(&self) -> usize {
        self.batches.iter().map(Vec::len).sum()
    }
}

/// Splits an ordered payload sequence into byte-budgeted batches.
///
/// Payloads are processed strictly in input order and never reordered. A
/// batch closes as soon as the next payload would push its estimate sum to
/// the budget or beyond, so every emitted batch stays strictly under the
/// budget.
#[derive(Debug, Clone, Copy)]
pub struct BatchPacker {
    budget: usize,
}

impl BatchPacker {
    /// Creates a packer for the given byte budget.
    #[must_use]
    pub const fn new(budget: usize) -> Self {
        Self { budget }
    }

    /// Returns the byte budget.
    #[must_use]
    pub const fn budget(&self) -> usize {
        self.budget
    }

    /// Packs `units` into batches, sizing each with `estimate`.
    pub fn pack<T, F>(&self, units: Vec<T>, estimate: F) -> Packed<T>
    where
        F: Fn(&T) -> usize,
    {
        let mut packed = Packed {
            batches: Vec::new(),
            dropped: Vec::new(),
        };
        let mut current = Vec::new();
        let mut running = 0usize;

        for unit in units {
            let size = estimate(&unit);
            if size >= self.budget {
                warn!(
                    "payload of {} bytes exceeds the {}-byte budget on its own, dropping",
                    size, self.budget
                );
                packed.dropped.push(unit);
                continue;
            }
            if running + size >= self.budget && !current.is_empty() {
                packed.batches.push(std::mem::take(&mut current));
                running = 0;
            }
            running += size;
            current.push(unit);
        }
        if !current.is_empty() {
            packed.batches.push(current);
        }

        packed
    }
}
