//! Identity newtypes for model entities.
//!
//! Variables and constraints are referenced by value identity everywhere:
//! containers store IDs, and relationships resolve by lookup through the
//! owning model. IDs are assigned sequentially from 0 and never reused.

use serde::{Deserialize, Serialize};

macro_rules! define_id_type {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            Serialize,
            Deserialize,
        )]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Create an ID from a u32 value.
            pub fn new(value: u32) -> Self {
                Self(value)
            }

            /// Get the inner u32 value.
            pub fn inner(self) -> u32 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id_type!(VariableId);
define_id_type!(ConstraintId);

#[cfg(test)]
mod tests {
    use super::{ConstraintId, VariableId};

    #[test]
    fn variable_id_roundtrip() {
        let id = VariableId::new(3);
        assert_eq!(id.inner(), 3);
        assert_eq!(id.to_string(), "3");
    }

    #[test]
    fn constraint_id_roundtrip() {
        let id = ConstraintId::new(9);
        assert_eq!(id.inner(), 9);
    }

    #[test]
    fn ids_order_by_inner_value() {
        assert!(VariableId::new(1) < VariableId::new(2));
    }
}
