//! Noyau postfixe
//!
//! Organisation interne :
//! - erreur.rs     : taxonomie des erreurs (thiserror)
//! - jetons.rs     : nombres / opérateurs / parenthèses + poids
//! - nombre.rs     : lecture d’un littéral numérique
//! - validation.rs : contrôles structurels avant conversion
//! - rpn.rs        : shunting-yard (infixe -> postfixe)
//! - eval.rs       : pile d’opérandes + pipeline complet

pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod nombre;
pub mod rpn;
pub mod validation;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurCalcul;
pub use eval::{calcule, calcule_avec_demarche};
