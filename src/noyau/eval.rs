//! Noyau — évaluation (pipeline réel)
//!
//! validation -> shunting-yard (postfixe) -> pile d’opérandes -> f64
//!
//! Chaque appel possède ses propres piles : aucune donnée partagée entre appels,
//! temps linéaire en la longueur de l’entrée (démarche comprise), pas de récursion.

use super::erreur::{ErreurCalcul, ResultatCalcul};
use super::jetons::{format_postfixe, Jeton, Operateur};
use super::rpn::postfixe;

#[derive(Default, Clone, Debug, PartialEq)]
pub struct DemarcheNoyau {
    /// Flux postfixe, délimité par des espaces.
    pub postfixe: String,
    /// Une ligne par jeton consommé : action + sommet + profondeur de la pile.
    pub pile: String,
}

/// API publique : évalue une expression infixe.
#[tracing::instrument(level = "debug", fields(longueur = expression.len()))]
pub fn calcule(expression: &str) -> ResultatCalcul<f64> {
    let flux = postfixe(expression)?;
    tracing::debug!(postfixe = %format_postfixe(&flux), "conversion terminée");
    evalue_postfixe(&flux)
}

/// Comme `calcule`, avec la démarche (postfixe + trace de la pile d’opérandes).
pub fn calcule_avec_demarche(expression: &str) -> ResultatCalcul<(f64, DemarcheNoyau)> {
    let flux = postfixe(expression)?;
    let mut trace = Vec::new();
    let valeur = evalue(&flux, Some(&mut trace))?;

    let d = DemarcheNoyau {
        postfixe: format_postfixe(&flux),
        pile: trace.join("\n"),
    };
    Ok((valeur, d))
}

/// Évalue un flux postfixe.
///
/// Opérande manquant => 0.0 (permissif : "+ 1" donnerait 1 si le flux arrivait ici).
/// Division : opérande droit exactement 0.0 => DivisionParZero.
pub fn evalue_postfixe(flux: &[Jeton]) -> ResultatCalcul<f64> {
    evalue(flux, None)
}

fn evalue(flux: &[Jeton], mut trace: Option<&mut Vec<String>>) -> ResultatCalcul<f64> {
    let mut pile: Vec<f64> = Vec::with_capacity(flux.len());

    for jeton in flux {
        match jeton {
            Jeton::Nombre(litteral) => {
                let v = lit_litteral(litteral)?;
                pile.push(v);
                if let Some(t) = trace.as_mut() {
                    t.push(format!("{litteral} → sommet {v} (profondeur {})", pile.len()));
                }
            }

            Jeton::Op(op) => {
                // droite = dernier empilé, gauche = le précédent
                let droite = pile.pop().unwrap_or(0.0);
                let gauche = pile.pop().unwrap_or(0.0);

                if *op == Operateur::Div && droite == 0.0 {
                    return Err(ErreurCalcul::DivisionParZero);
                }

                let r = op.applique(gauche, droite);
                pile.push(r);
                if let Some(t) = trace.as_mut() {
                    let sym = op.symbole();
                    t.push(format!(
                        "{gauche} {sym} {droite} = {r} → sommet {r} (profondeur {})",
                        pile.len()
                    ));
                }
            }

            // n’apparaissent pas dans un flux issu de vers_postfixe
            Jeton::ParG | Jeton::ParD => {}
        }
    }

    // Pile vide : impossible pour une entrée validée (>= 1 opérande), signalée comme arité.
    pile.pop().ok_or(ErreurCalcul::Arite {
        operandes: 0,
        operateurs: 0,
    })
}

fn lit_litteral(litteral: &str) -> ResultatCalcul<f64> {
    match litteral.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ErreurCalcul::NombreInvalide(litteral.to_string())),
    }
}
