// src/noyau/jetons.rs
//
// Jetons du pipeline : nombres (texte littéral), opérateurs binaires, parenthèses.
// Le flux postfixe ne contient jamais de parenthèses.

use std::fmt;

/// Opérateurs binaires (tous associatifs à gauche).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Div,
}

impl Operateur {
    /// Reconnaît un symbole d’opérateur binaire.
    pub fn depuis_symbole(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Moins),
            '*' => Some(Operateur::Fois),
            '/' => Some(Operateur::Div),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Div => '/',
        }
    }

    /// Arithmétique IEEE double précision (la division par zéro est filtrée avant).
    pub fn applique(self, gauche: f64, droite: f64) -> f64 {
        match self {
            Operateur::Plus => gauche + droite,
            Operateur::Moins => gauche - droite,
            Operateur::Fois => gauche * droite,
            Operateur::Div => gauche / droite,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Jeton {
    /// Littéral tel que lu (parsé en f64 seulement à l’évaluation).
    Nombre(String),
    Op(Operateur),
    ParG,
    ParD,
}

impl Jeton {
    /// Opérateur ou parenthèse (les nombres passent par nombre::lire_nombre).
    pub fn depuis_symbole(c: char) -> Option<Self> {
        match c {
            '(' => Some(Jeton::ParG),
            ')' => Some(Jeton::ParD),
            _ => Operateur::depuis_symbole(c).map(Jeton::Op),
        }
    }

    /// "Poids" (précédence) : ( = 0, ) = 1, + - = 2, * / = 3.
    /// Les poids des parenthèses sont des sentinelles : '(' ne sort jamais par comparaison.
    pub fn poids(&self) -> i32 {
        match self {
            Jeton::ParG => 0,
            Jeton::ParD => 1,
            Jeton::Op(Operateur::Plus | Operateur::Moins) => 2,
            Jeton::Op(Operateur::Fois | Operateur::Div) => 3,
            Jeton::Nombre(_) => -1,
        }
    }
}

impl fmt::Display for Jeton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Jeton::Nombre(n) => f.write_str(n),
            Jeton::Op(op) => write!(f, "{}", op.symbole()),
            Jeton::ParG => f.write_str("("),
            Jeton::ParD => f.write_str(")"),
        }
    }
}

/// Format utilitaire (démarche) : flux postfixe délimité par des espaces.
pub fn format_postfixe(jetons: &[Jeton]) -> String {
    jetons
        .iter()
        .map(Jeton::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
