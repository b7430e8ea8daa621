//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, démarche, historique)
//! et offrir des opérations simples (C/CLR/AC/DEL) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Historique borné.

/// Garde-fou : nombre d’entrées conservées dans l’historique.
const HISTORIQUE_MAX: usize = 50;

#[derive(Clone, Default, Debug, PartialEq)]
pub struct Demarche {
    pub postfixe: String,
    pub pile: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String,
    pub erreur: String,
    pub resultat_dispo: bool,

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- (expression, résultat) les plus récents en tête ---
    pub historique: Vec<(String, String)>,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            resultat_dispo: false,
            demarche: Demarche::default(),
            historique: Vec::new(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

/// Affichage d’un résultat : "11" pour 11.0, jamais "-0".
pub fn format_resultat(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    v.to_string()
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + historique).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.historique.clear();
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.resultat_dispo = false;
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// DEL : retire le dernier symbole (et les espaces qui le suivaient).
    pub fn backspace_entree(&mut self) {
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
        self.entree.pop();
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// On CONSERVE le dernier résultat affiché ; la démarche est effacée (non fiable).
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat + démarche, et l’ajouter à l’historique.
    pub fn set_resultat(&mut self, valeur: f64, demarche: Demarche) {
        self.erreur.clear();
        self.resultat = format_resultat(valeur);
        self.resultat_dispo = true;
        self.demarche = demarche;

        self.historique
            .insert(0, (self.entree.trim().to_string(), self.resultat.clone()));
        self.historique.truncate(HISTORIQUE_MAX);

        self.focus_entree = true;
    }

    /// Reprend une expression de l’historique dans l’entrée.
    pub fn rappelle(&mut self, index: usize) {
        if let Some((expr, _)) = self.historique.get(index) {
            self.entree = expr.clone();
            self.focus_entree = true;
        }
    }
}
