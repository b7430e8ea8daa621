// src/noyau/nombre.rs
//
// Lecture d’un nombre (suite maximale de chiffres et de '.').
// Permissif : "1.2.3" est lu tel quel, c’est l’évaluation qui le refusera.

/// Début (ou suite) de littéral numérique.
pub fn est_symbole_nombre(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Lit la suite de chiffres / '.' commençant en `*pos`.
///
/// Au retour, `*pos` désigne le DERNIER symbole consommé : l’appelant avance
/// lui-même d’un cran. S’arrête en fin de chaîne sans erreur.
pub fn lire_nombre(symboles: &[char], pos: &mut usize) -> String {
    let debut = *pos;
    let mut fin = debut;
    while fin < symboles.len() && est_symbole_nombre(symboles[fin]) {
        fin += 1;
    }

    // rien lu : on laisse pos en place (l’appelant ne doit pas appeler ici hors nombre)
    if fin > debut {
        *pos = fin - 1;
    }

    symboles[debut..fin].iter().collect()
}
