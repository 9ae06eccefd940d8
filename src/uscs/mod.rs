//! USCS (Unitary-Square Constraint System) representation and verification
//!
//! Definition (DFGK14 §2):
//! each constraint is a linear form c over z = (1, x, w) with ⟨c, z⟩² = 1

mod constraint;
mod system;

pub use constraint::{Term, UscsConstraint};
pub use system::UscsConstraintSystem;

/// Public-input part of an assignment, x₁ … x_{num_inputs}
pub type PrimaryInput<F> = Vec<F>;

/// Auxiliary (witness) part of an assignment, y₁ … y_{num_auxiliary}
pub type AuxiliaryInput<F> = Vec<F>;
