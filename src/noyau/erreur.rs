// src/noyau/erreur.rs
//
// Erreurs du noyau (une variante par genre d’échec).
// - détectées de façon synchrone, renvoyées à l’appelant immédiat
// - la première faute trouvée gagne : pas d’évaluation partielle

use std::fmt;

use thiserror::Error;

/// Résultat du noyau.
pub type ResultatCalcul<T> = Result<T, ErreurCalcul>;

/// Échecs possibles d’une évaluation.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ErreurCalcul {
    /// L’entrée ne contient aucun caractère.
    #[error("expression vide")]
    ExpressionVide,

    /// Symbole hors de l’ensemble autorisé (chiffres, '.', + - * /, parenthèses, espaces).
    #[error("caractère invalide '{symbole}' en position {position}")]
    CaractereInvalide { symbole: char, position: usize },

    /// Une ')' sans '(' correspondante, ou une '(' jamais refermée.
    #[error("parenthèses déséquilibrées")]
    ParenthesesDesequilibrees,

    /// Il faut exactement un opérande de plus que d’opérateurs binaires.
    #[error("opérations binaires invalides : {operandes} opérande(s) pour {operateurs} opérateur(s)")]
    Arite { operandes: usize, operateurs: usize },

    /// Littéral numérique illisible (ex: "1.2.3").
    #[error("nombre invalide : '{0}'")]
    NombreInvalide(String),

    /// Division dont l’opérande droit vaut exactement 0.
    #[error("division par zéro")]
    DivisionParZero,
}

/// Genre d’erreur, indépendant du texte (noms neutres, stables).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum GenreErreur {
    EmptyExpression,
    InvalidCharacter,
    UnbalancedParentheses,
    ArityMismatch,
    NumberParseError,
    DivisionByZero,
}

impl ErreurCalcul {
    pub fn genre(&self) -> GenreErreur {
        match self {
            ErreurCalcul::ExpressionVide => GenreErreur::EmptyExpression,
            ErreurCalcul::CaractereInvalide { .. } => GenreErreur::InvalidCharacter,
            ErreurCalcul::ParenthesesDesequilibrees => GenreErreur::UnbalancedParentheses,
            ErreurCalcul::Arite { .. } => GenreErreur::ArityMismatch,
            ErreurCalcul::NombreInvalide(_) => GenreErreur::NumberParseError,
            ErreurCalcul::DivisionParZero => GenreErreur::DivisionByZero,
        }
    }
}

impl fmt::Display for GenreErreur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nom = match self {
            GenreErreur::EmptyExpression => "EmptyExpression",
            GenreErreur::InvalidCharacter => "InvalidCharacter",
            GenreErreur::UnbalancedParentheses => "UnbalancedParentheses",
            GenreErreur::ArityMismatch => "ArityMismatch",
            GenreErreur::NumberParseError => "NumberParseError",
            GenreErreur::DivisionByZero => "DivisionByZero",
        };
        f.write_str(nom)
    }
}
