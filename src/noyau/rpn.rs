// src/noyau/rpn.rs
//
// Shunting-yard : infixe (texte validé) -> flux postfixe (RPN)
//
// Règles:
// - nombre : lu en entier (lire_nombre) puis sorti directement
// - opérateur : on dépile tant que le sommet a un poids >= (associativité à gauche),
//   puis on empile
// - '(' : empilée sans condition
// - ')' : on dépile jusqu’à '(' (qui est jetée) ; pile vide avant => rien à faire
// - fin : on vide la pile
//
// NOTE:
// - Les poids viennent de Jeton::poids ; '(' vaut 0 donc bloque toujours le dépilement.
// - vers_postfixe suppose l’entrée validée ; postfixe() valide d’abord.

use super::erreur::ResultatCalcul;
use super::jetons::Jeton;
use super::nombre::{est_symbole_nombre, lire_nombre};
use super::validation::valide;

/// Valide puis convertit.
pub fn postfixe(expression: &str) -> ResultatCalcul<Vec<Jeton>> {
    valide(expression)?;
    Ok(vers_postfixe(expression))
}

/// Convertit une expression infixe (déjà validée) en flux postfixe.
///
/// Exemple:
///   infixe:   "3 + 4 * 2"
///   postfixe: [3, 4, 2, *, +]
pub fn vers_postfixe(expression: &str) -> Vec<Jeton> {
    let symboles: Vec<char> = expression.chars().collect();

    let mut out: Vec<Jeton> = Vec::new();
    let mut ops: Vec<Jeton> = Vec::new();

    let mut i = 0;
    while i < symboles.len() {
        let c = symboles[i];

        if est_symbole_nombre(c) {
            out.push(Jeton::Nombre(lire_nombre(&symboles, &mut i)));
        } else if let Some(jeton) = Jeton::depuis_symbole(c) {
            match jeton {
                Jeton::Op(_) => {
                    while let Some(sommet) = ops.last() {
                        if sommet.poids() < jeton.poids() {
                            break;
                        }
                        if let Some(sorti) = ops.pop() {
                            out.push(sorti);
                        }
                    }
                    ops.push(jeton);
                }
                Jeton::ParG => ops.push(jeton),
                Jeton::ParD => {
                    // dépile jusqu’à '(' (jetée) ; pile vide avant => rien
                    while let Some(sommet) = ops.pop() {
                        if sommet == Jeton::ParG {
                            break;
                        }
                        out.push(sommet);
                    }
                }
                Jeton::Nombre(_) => {}
            }
        }
        // espaces : ignorés

        i += 1;
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        // une '(' orpheline ne peut venir que d’une entrée non validée : on ne la sort pas
        if op != Jeton::ParG {
            out.push(op);
        }
    }

    out
}
