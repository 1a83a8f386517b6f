//! # Cycle Budget
//!
//! A single counter owned by the execution loop and handed `&mut` to every
//! handler. Each bus access and internal step charges one cycle against it.
//!
//! The remaining budget is signed: the loop only checks it between
//! instructions, so the last instruction may drive it below zero. That
//! overshoot is the hardware behaviour (the CPU stops on instruction
//! boundaries), not an accounting error.

/// Cycles remaining and cycles spent during one `execute`/`step` call.
///
/// # Examples
///
/// ```
/// use emu6502::CycleBudget;
///
/// let mut budget = CycleBudget::new(3);
/// budget.charge(2);
/// assert_eq!(budget.remaining(), 1);
/// budget.charge(2);
/// assert!(budget.is_exhausted());
/// assert_eq!(budget.remaining(), -1);
/// assert_eq!(budget.spent(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleBudget {
    remaining: i64,
    spent: u64,
}

impl CycleBudget {
    /// A budget of `cycles`.
    pub fn new(cycles: u32) -> Self {
        Self {
            remaining: cycles as i64,
            spent: 0,
        }
    }

    /// A budget that never runs out; used to measure a single step.
    pub fn unbounded() -> Self {
        Self {
            remaining: i64::MAX,
            spent: 0,
        }
    }

    /// Charges `cycles` against the budget.
    #[inline]
    pub fn charge(&mut self, cycles: u32) {
        self.remaining = self.remaining.saturating_sub(cycles as i64);
        self.spent += cycles as u64;
    }

    /// Cycles left; negative after an overshoot.
    pub fn remaining(&self) -> i64 {
        self.remaining
    }

    /// Cycles charged so far.
    pub fn spent(&self) -> u64 {
        self.spent
    }

    /// True once the remaining budget is zero or below.
    pub fn is_exhausted(&self) -> bool {
        self.remaining <= 0
    }
}
