//! Pouch kind catalog
//!
//! The fixed set of essence pouch kinds the tracker knows about. All
//! per-kind data (capacities, decay budget, decay exemption) is static and
//! exposed through match-based accessors; a [`PouchKind`] value is the
//! catalog key, so holding one is holding a reference into the catalog.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A kind of essence pouch.
///
/// Degradation exemption is a per-kind static property: the small pouch
/// never decays, and every construction path of the state model enforces
/// that regardless of what the caller asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PouchKind {
    Small,
    Medium,
    Large,
    Giant,
    Colossal,
}

impl PouchKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            PouchKind::Small => "Small pouch",
            PouchKind::Medium => "Medium pouch",
            PouchKind::Large => "Large pouch",
            PouchKind::Giant => "Giant pouch",
            PouchKind::Colossal => "Colossal pouch",
        }
    }

    /// Maximum essence the pouch can hold while not degraded.
    pub fn max_capacity(&self) -> i32 {
        match self {
            PouchKind::Small => 3,
            PouchKind::Medium => 6,
            PouchKind::Large => 9,
            PouchKind::Giant => 12,
            PouchKind::Colossal => 40,
        }
    }

    /// Maximum essence the pouch can hold once degraded.
    ///
    /// Never exceeds [`max_capacity`](Self::max_capacity) for the same kind.
    pub fn max_degraded_capacity(&self) -> i32 {
        match self {
            PouchKind::Small => 3,
            PouchKind::Medium => 3,
            PouchKind::Large => 7,
            PouchKind::Giant => 9,
            PouchKind::Colossal => 35,
        }
    }

    /// Essence that can be stored into the pouch before it decays.
    ///
    /// This is the reset value for a pouch's decay budget. Zero for the
    /// small pouch, whose budget is never consulted.
    pub fn max_usage_before_decay(&self) -> i32 {
        match self {
            PouchKind::Small => 0,
            PouchKind::Medium => 45,
            PouchKind::Large => 29,
            PouchKind::Giant => 10,
            PouchKind::Colossal => 255,
        }
    }

    /// Whether this kind is capable of decaying at all.
    pub fn degrades(&self) -> bool {
        !matches!(self, PouchKind::Small)
    }

    /// Returns all kinds in catalog order.
    pub fn all() -> [PouchKind; 5] {
        [
            PouchKind::Small,
            PouchKind::Medium,
            PouchKind::Large,
            PouchKind::Giant,
            PouchKind::Colossal,
        ]
    }
}

impl fmt::Display for PouchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for PouchKind {
    type Err = DomainError;

    /// Parses a kind from its short name or display name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "small" | "small pouch" => Ok(PouchKind::Small),
            "medium" | "medium pouch" => Ok(PouchKind::Medium),
            "large" | "large pouch" => Ok(PouchKind::Large),
            "giant" | "giant pouch" => Ok(PouchKind::Giant),
            "colossal" | "colossal pouch" => Ok(PouchKind::Colossal),
            _ => Err(DomainError::parse(format!("Unknown pouch kind: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_capacities() {
        assert_eq!(PouchKind::Small.max_capacity(), 3);
        assert_eq!(PouchKind::Medium.max_capacity(), 6);
        assert_eq!(PouchKind::Large.max_capacity(), 9);
        assert_eq!(PouchKind::Giant.max_capacity(), 12);
        assert_eq!(PouchKind::Colossal.max_capacity(), 40);
    }

    #[test]
    fn catalog_decay_budgets() {
        assert_eq!(PouchKind::Medium.max_usage_before_decay(), 45);
        assert_eq!(PouchKind::Large.max_usage_before_decay(), 29);
        assert_eq!(PouchKind::Giant.max_usage_before_decay(), 10);
        assert_eq!(PouchKind::Colossal.max_usage_before_decay(), 255);
    }

    #[test]
    fn degraded_capacity_never_exceeds_normal_capacity() {
        for kind in PouchKind::all() {
            assert!(
                kind.max_degraded_capacity() <= kind.max_capacity(),
                "{} degraded capacity exceeds normal capacity",
                kind
            );
        }
    }

    #[test]
    fn only_the_small_pouch_is_exempt_from_decay() {
        assert!(!PouchKind::Small.degrades());
        assert!(PouchKind::Medium.degrades());
        assert!(PouchKind::Large.degrades());
        assert!(PouchKind::Giant.degrades());
        assert!(PouchKind::Colossal.degrades());
    }

    #[test]
    fn all_covers_every_kind_once() {
        let kinds = PouchKind::all();
        assert_eq!(kinds.len(), 5);
        for kind in kinds {
            assert_eq!(kinds.iter().filter(|k| **k == kind).count(), 1);
        }
    }

    #[test]
    fn display_uses_display_name() {
        assert_eq!(PouchKind::Small.to_string(), "Small pouch");
        assert_eq!(PouchKind::Colossal.to_string(), "Colossal pouch");
    }

    #[test]
    fn from_str_round_trips_display_names() {
        for kind in PouchKind::all() {
            let parsed: PouchKind = kind.display_name().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn from_str_accepts_short_names_case_insensitively() {
        assert_eq!("giant".parse::<PouchKind>().unwrap(), PouchKind::Giant);
        assert_eq!("COLOSSAL".parse::<PouchKind>().unwrap(), PouchKind::Colossal);
    }

    #[test]
    fn from_str_rejects_unknown_names() {
        let result = "satchel".parse::<PouchKind>();
        assert!(result.is_err());
        if let Err(e) = result {
            assert!(e.to_string().contains("satchel"));
        }
    }

    #[test]
    fn serde_round_trips_snake_case() {
        assert_eq!(
            serde_json::to_string(&PouchKind::Small).unwrap(),
            "\"small\""
        );
        for kind in PouchKind::all() {
            let json = serde_json::to_string(&kind).unwrap();
            let back: PouchKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, kind);
        }
    }
}
