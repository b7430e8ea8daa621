// src/noyau/validation.rs
//
// Validation structurelle AVANT toute conversion.
// Ordre des contrôles (le premier échec gagne) :
//   1) non vide  2) jeu de caractères  3) parenthèses  4) arité binaire
//
// L’arité est un contrôle grossier (opérandes - opérateurs == 1), pas une grammaire :
// "+ 1 2" passe, par exemple.

use super::erreur::{ErreurCalcul, ResultatCalcul};
use super::jetons::{Jeton, Operateur};
use super::nombre::{est_symbole_nombre, lire_nombre};

/// Valide une expression infixe brute.
pub fn valide(expression: &str) -> ResultatCalcul<()> {
    if expression.is_empty() {
        return Err(ErreurCalcul::ExpressionVide);
    }

    let symboles: Vec<char> = expression.chars().collect();

    verifie_symboles(&symboles)?;

    if !parentheses_equilibrees(&symboles) {
        return Err(ErreurCalcul::ParenthesesDesequilibrees);
    }

    let (operandes, operateurs) = compte_arite(&symboles);
    if operandes != operateurs + 1 {
        return Err(ErreurCalcul::Arite {
            operandes,
            operateurs,
        });
    }

    Ok(())
}

/// Espaces ASCII seulement (tab, LF, FF, CR, espace) : U+00A0, \x0B… sont refusés.
fn symbole_autorise(c: char) -> bool {
    est_symbole_nombre(c) || Jeton::depuis_symbole(c).is_some() || c.is_ascii_whitespace()
}

fn verifie_symboles(symboles: &[char]) -> ResultatCalcul<()> {
    match symboles.iter().position(|&c| !symbole_autorise(c)) {
        Some(position) => Err(ErreurCalcul::CaractereInvalide {
            symbole: symboles[position],
            position,
        }),
        None => Ok(()),
    }
}

fn parentheses_equilibrees(symboles: &[char]) -> bool {
    let mut ouvertes: Vec<char> = Vec::new();

    for &c in symboles {
        match c {
            '(' => ouvertes.push(c),
            ')' => {
                // ')' sans partenaire
                if ouvertes.pop().is_none() {
                    return false;
                }
            }
            _ => {}
        }
    }

    ouvertes.is_empty()
}

/// (nombre d’opérandes, nombre d’opérateurs binaires)
fn compte_arite(symboles: &[char]) -> (usize, usize) {
    let mut operandes = 0;
    let mut operateurs = 0;

    let mut i = 0;
    while i < symboles.len() {
        let c = symboles[i];
        if est_symbole_nombre(c) {
            lire_nombre(symboles, &mut i);
            operandes += 1;
        } else if Operateur::depuis_symbole(c).is_some() {
            operateurs += 1;
        }
        i += 1;
    }

    (operandes, operateurs)
}
