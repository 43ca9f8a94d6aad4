//! Pouch aggregate - Tracked state of a single essence pouch
//!
//! # Rustic DDD Design
//!
//! This aggregate follows Rustic DDD principles:
//! - **Private fields**: All fields are encapsulated
//! - **Valid by construction**: the decay exemption of the small pouch is
//!   enforced on every construction path
//! - **Exclusive mutation**: observers mutate through `&mut`, so the borrow
//!   checker provides the single-writer guarantee
//!
//! # Partial knowledge
//!
//! The host environment does not always reveal ground truth, so the stored
//! amount and the decay budget each carry an independent "unknown" flag.
//! While a quantity is unknown it is an assumption: `fill` and `empty` fail
//! closed (store/remove nothing, return 0) rather than mutate a baseline
//! nobody has observed. Authoritative writes clear the flag for the
//! quantity they set.

use crate::types::PouchKind;
use crate::value_objects::FillsRemaining;

/// Tracked state of one essence pouch.
///
/// # Invariants
///
/// - `kind` is fixed for the lifetime of the instance
/// - a small pouch never participates in decay tracking, whatever the
///   caller requested at construction
/// - authoritative writes to a quantity clear that quantity's unknown flag
///
/// The stored amount and decay budget are deliberately *not* clamped after
/// arithmetic: a negative decay budget means decay has been exceeded, and a
/// stored amount above a freshly-degraded capacity means the capacity
/// assumption was stale. Both are signals the observer needs intact.
///
/// # Example
///
/// ```
/// use pouchtrackr_domain::{Pouch, PouchKind};
///
/// let mut pouch = Pouch::new(PouchKind::Giant);
/// pouch.set_stored(3);
/// assert_eq!(pouch.fill(10, false), 9);
/// assert!(pouch.is_filled());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pouch {
    kind: PouchKind,
    stored: i32,
    remaining_before_decay: i32,
    degraded: bool,
    degrades: bool,
    stored_unknown: bool,
    decay_unknown: bool,
}

impl Pouch {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create a pouch in the fully-unknown state (never observed).
    ///
    /// Stored amount defaults to 0 and the decay budget to the kind's
    /// maximum, with both marked as assumptions.
    pub fn new(kind: PouchKind) -> Self {
        Self::with_stored(kind, 0, true, true)
    }

    /// Create a pouch from an initially observed stored amount.
    ///
    /// The decay budget defaults to the kind's maximum and the pouch starts
    /// non-degraded and decay-eligible (unless the kind is exempt).
    pub fn with_stored(
        kind: PouchKind,
        stored: i32,
        stored_unknown: bool,
        decay_unknown: bool,
    ) -> Self {
        Self::from_parts(
            kind,
            stored,
            kind.max_usage_before_decay(),
            false,
            true,
            stored_unknown,
            decay_unknown,
        )
    }

    /// Create a pouch with every field explicit (used when the observer has
    /// reconstructed full state, e.g. after witnessing a degrade).
    ///
    /// `degrades` is still forced off for the exempt kind, whatever was
    /// passed.
    pub fn from_parts(
        kind: PouchKind,
        stored: i32,
        remaining_before_decay: i32,
        degraded: bool,
        degrades: bool,
        stored_unknown: bool,
        decay_unknown: bool,
    ) -> Self {
        let pouch = Self {
            kind,
            stored,
            remaining_before_decay,
            degraded,
            degrades: kind.degrades() && degrades,
            stored_unknown,
            decay_unknown,
        };
        tracing::debug!(?pouch, "created pouch");
        pouch
    }

    // =========================================================================
    // Accessors (read-only)
    // =========================================================================

    /// Returns the kind of this pouch.
    #[inline]
    pub fn kind(&self) -> PouchKind {
        self.kind
    }

    /// Returns the tracked stored essence amount.
    #[inline]
    pub fn stored(&self) -> i32 {
        self.stored
    }

    /// Returns the tracked decay budget: essence that can still be stored
    /// before the pouch decays. Negative once decay has been exceeded.
    #[inline]
    pub fn remaining_before_decay(&self) -> i32 {
        self.remaining_before_decay
    }

    /// Returns whether the pouch has already degraded.
    #[inline]
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Returns whether this pouch participates in decay tracking.
    #[inline]
    pub fn degrades(&self) -> bool {
        self.degrades
    }

    /// Returns whether the stored amount is an assumption rather than an
    /// observed fact.
    #[inline]
    pub fn stored_unknown(&self) -> bool {
        self.stored_unknown
    }

    /// Returns whether the decay budget is an assumption rather than an
    /// observed fact.
    #[inline]
    pub fn decay_unknown(&self) -> bool {
        self.decay_unknown
    }

    // =========================================================================
    // Authoritative writes
    // =========================================================================

    /// Overwrite the stored amount from an authoritative reading, without
    /// touching the decay budget.
    ///
    /// No range validation: observed ground truth may legitimately exceed
    /// the modeled capacity when the capacity assumption is stale.
    pub fn set_stored(&mut self, stored: i32) {
        tracing::debug!(
            kind = %self.kind,
            stored,
            previously = self.stored,
            "setting stored essence"
        );
        self.stored = stored;
        self.stored_unknown = false;
    }

    /// Overwrite the decay budget from an authoritative reading.
    ///
    /// No range validation.
    pub fn set_remaining_before_decay(&mut self, remaining_before_decay: i32) {
        tracing::debug!(
            kind = %self.kind,
            remaining_before_decay,
            previously = self.remaining_before_decay,
            "setting remaining essence before decay"
        );
        self.remaining_before_decay = remaining_before_decay;
        self.decay_unknown = false;
    }

    // =========================================================================
    // Mutation Methods
    // =========================================================================

    /// Repair the pouch: restore the decay budget to the kind's maximum and
    /// clear the degraded state. The stored amount is untouched.
    pub fn repair(&mut self) {
        self.remaining_before_decay = self.kind.max_usage_before_decay();
        self.degraded = false;
        self.decay_unknown = false;
        tracing::debug!(
            kind = %self.kind,
            remaining_before_decay = self.remaining_before_decay,
            "repaired pouch"
        );
    }

    /// Empty up to `requested` essence out of the pouch.
    ///
    /// Fails closed while the stored amount is unknown: removes nothing and
    /// returns 0, since there is no safe baseline to subtract from.
    /// Otherwise removes `min(requested, stored)` and returns the amount
    /// removed.
    pub fn empty(&mut self, requested: i32) -> i32 {
        if self.stored_unknown {
            return 0;
        }
        let removed = requested.min(self.stored);
        self.stored -= removed;
        self.stored_unknown = false;
        tracing::debug!(
            kind = %self.kind,
            requested,
            removed,
            stored = self.stored,
            "emptied pouch"
        );
        removed
    }

    /// Fill the pouch with up to `incoming` essence and return the amount
    /// actually stored. Essence beyond the available space is discarded,
    /// mirroring real container overflow.
    ///
    /// Fails closed while the stored amount is unknown: stores nothing and
    /// returns 0.
    ///
    /// When the pouch is decay-eligible, `ignore_decay` is false (no
    /// decay-preventing equipment worn) and the budget is known, the amount
    /// stored is charged against the decay budget. The budget is never
    /// floored; driving it negative records that decay has been exceeded.
    pub fn fill(&mut self, incoming: i32, ignore_decay: bool) -> i32 {
        if self.stored_unknown {
            return 0;
        }
        let to_store = incoming.min(self.available_space());
        self.stored += to_store;
        if self.degrades && !ignore_decay && !self.decay_unknown {
            self.remaining_before_decay -= to_store;
        }
        self.stored_unknown = false;
        tracing::debug!(
            kind = %self.kind,
            incoming,
            to_store,
            stored = self.stored,
            remaining_before_decay = self.remaining_before_decay,
            "filled pouch"
        );
        to_store
    }

    /// Authoritatively mark the pouch as holding no essence.
    pub fn reset_stored(&mut self) {
        self.stored = 0;
        self.stored_unknown = false;
    }

    /// Authoritatively restore the decay budget to the kind's maximum.
    pub fn reset_decay(&mut self) {
        self.remaining_before_decay = self.kind.max_usage_before_decay();
        self.decay_unknown = false;
    }

    /// Full authoritative reset of both tracked quantities.
    pub fn reset(&mut self) {
        self.reset_stored();
        self.reset_decay();
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns the maximum essence this pouch can currently hold, given its
    /// degradation state.
    pub fn maximum_capacity(&self) -> i32 {
        if self.degraded {
            self.kind.max_degraded_capacity()
        } else {
            self.kind.max_capacity()
        }
    }

    /// Returns how much essence can still be stored.
    ///
    /// Negative when the stored amount exceeds the current maximum capacity
    /// (a stale capacity assumption); callers must tolerate that.
    pub fn available_space(&self) -> i32 {
        self.maximum_capacity() - self.stored
    }

    /// Returns whether the pouch is filled to its current maximum capacity.
    pub fn is_filled(&self) -> bool {
        self.stored == self.maximum_capacity()
    }

    /// Returns whether the pouch holds no essence.
    pub fn is_empty(&self) -> bool {
        self.stored == 0
    }

    /// Returns the approximate fraction of fill usages left before decay.
    ///
    /// A pouch that never decays reports [`FillsRemaining::Unlimited`]; a
    /// decay-eligible pouch whose budget has not been observed reports
    /// [`FillsRemaining::Unknown`] rather than a zero ratio, so consumers
    /// can tell "no fills left" from "don't know".
    pub fn fills_remaining(&self) -> FillsRemaining {
        if !self.degrades {
            return FillsRemaining::Unlimited;
        }
        if self.decay_unknown {
            return FillsRemaining::Unknown;
        }
        FillsRemaining::Ratio(
            f64::from(self.remaining_before_decay) / f64::from(self.kind.max_usage_before_decay()),
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
