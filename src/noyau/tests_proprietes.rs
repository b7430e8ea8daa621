//! Tests de propriétés : comportements observables du pipeline complet.
//!
//! - précédence / associativité / parenthèses
//! - erreurs (genre exact, première faute gagnante)
//! - idempotence (aucun état caché)
//! - permissivité conservée (arité grossière, opérande manquant)

use super::erreur::GenreErreur;
use super::{calcule, calcule_avec_demarche, ErreurCalcul};

fn eval_ok(expr: &str) -> f64 {
    calcule(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_genre(expr: &str, attendu: GenreErreur) {
    match calcule(expr) {
        Ok(v) => panic!("expr={expr:?} devait échouer ({attendu}), a donné {v}"),
        Err(e) => assert_eq!(e.genre(), attendu, "expr={expr:?} err={e}"),
    }
}

/* ------------------------ Précédence ------------------------ */

#[test]
fn multiplication_avant_addition() {
    assert_eq!(eval_ok("3 + 4 * 2"), 11.0);
    assert_eq!(eval_ok("2 * 3 + 4 * 5"), 26.0);
    assert_eq!(eval_ok("1 + 8 / 4 - 1"), 2.0);
}

#[test]
fn gauche_a_droite_a_precedence_egale() {
    assert_eq!(eval_ok("10 - 2 - 3"), 5.0);
    assert_eq!(eval_ok("2 / 4 * 8"), 4.0);
    assert_eq!(eval_ok("1 - 1 + 1"), 1.0);
}

#[test]
fn parentheses_l_emportent() {
    assert_eq!(eval_ok("(3 + 4) * 2"), 14.0);
    assert_eq!(eval_ok("10 - (2 - 3)"), 11.0);
    assert_eq!(eval_ok("((1 + 2) * (3 + 4)) / 7"), 3.0);
}

#[test]
fn espaces_indifferents() {
    assert_eq!(eval_ok("3+4*2"), eval_ok("  3 +   4 *\t2 "));
}

/* ------------------------ Décimaux ------------------------ */

#[test]
fn decimaux() {
    assert_eq!(eval_ok("1.5 + 2.5"), 4.0);
    assert_eq!(eval_ok("0.1 + 0.2"), 0.1 + 0.2);
    assert_eq!(eval_ok("3."), 3.0);
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn erreurs_par_genre() {
    assert_genre("", GenreErreur::EmptyExpression);
    assert_genre("1 + a", GenreErreur::InvalidCharacter);
    assert_genre("(1 + 2", GenreErreur::UnbalancedParentheses);
    assert_genre("1 + 2)", GenreErreur::UnbalancedParentheses);
    assert_genre("+ 1", GenreErreur::ArityMismatch);
    assert_genre("1 +", GenreErreur::ArityMismatch);
    assert_genre("1..5 * 2", GenreErreur::NumberParseError);
    assert_genre("5 / 0", GenreErreur::DivisionByZero);
}

#[test]
fn division_par_zero_jamais_infini() {
    for expr in ["5 / 0", "0 / 0", "1 / (3 - 3)", "2 / (0.5 - 0.5) + 1"] {
        assert_eq!(calcule(expr), Err(ErreurCalcul::DivisionParZero), "{expr:?}");
    }
}

#[test]
fn premiere_faute_gagne() {
    // division par zéro ET nombre illisible : le nombre est lu avant la division
    assert_genre("1.2.3 / 0", GenreErreur::NumberParseError);
    // la division par zéro du premier facteur sort avant le nombre illisible du second
    assert_genre("1 / 0 + 1.2.3", GenreErreur::DivisionByZero);
}

/* ------------------------ Idempotence ------------------------ */

#[test]
fn idempotence() {
    let exprs = ["3 + 4 * 2", "(1.5 - 4) / 3", "5 / 0", "", "1 +"];
    for e in exprs {
        let a = calcule(e);
        let b = calcule(e);
        assert_eq!(a, b, "expr={e:?}");
        assert_eq!(calcule_avec_demarche(e), calcule_avec_demarche(e));
    }
}

/* ------------------------ Permissivité conservée ------------------------ */

#[test]
fn operateur_en_tete_accepte_si_comptes_justes() {
    // 2 opérandes, 1 opérateur : la validation passe ; postfixe "1 2 -"
    assert_eq!(eval_ok("- 1 2"), -1.0);
}

#[test]
fn demarche_coherente_avec_calcule() {
    let (v, d) = calcule_avec_demarche("2 * (3 + 4) - 5").unwrap();
    assert_eq!(v, eval_ok("2 * (3 + 4) - 5"));
    assert_eq!(d.postfixe, "2 3 4 + * 5 -");
}
