// src/service.rs
//
// Façade JSON du noyau (sans transport)
// -------------------------------------
// Contrat de la route de calcul :
//   requête  : {"expression": "<texte>"}
//   réponse  : {"result": <nombre>}            -> 200
//              {"error": "Expression is not valid"} -> 422 (refus du noyau)
//              {"error": "Internal server error"}   -> 500 (décodage / encodage)
//
// Le transport (HTTP, stdin/stdout…) est à la charge de l’appelant :
// ici on ne fait que corps -> (statut, corps).

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::noyau::{calcule, ErreurCalcul};

/// Route exposée par le service d’origine.
pub const ROUTE_CALCUL: &str = "/api/v1/calculate";

pub const TYPE_CONTENU: &str = "application/json";

pub const MSG_EXPRESSION_INVALIDE: &str = "Expression is not valid";
pub const MSG_ERREUR_INTERNE: &str = "Internal server error";

/// Corps de secours si même la réponse d’erreur ne s’encode pas.
const CORPS_ERREUR_INTERNE: &str = r#"{"error":"Internal server error"}"#;

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct RequeteCalcul {
    // champ absent => "" => refus "expression vide" (422), comme le service d’origine
    #[serde(default, alias = "Expression")]
    pub expression: String,
}

/// Décodage à la manière d’un décodeur de flux : seule la PREMIÈRE valeur JSON compte
/// (la suite du corps est ignorée), `null` vaut une requête vide, corps vide => erreur.
fn decode_requete(corps: &str) -> Result<RequeteCalcul, ErreurService> {
    let mut flux = serde_json::Deserializer::from_str(corps).into_iter::<Option<RequeteCalcul>>();
    match flux.next() {
        Some(Ok(req)) => Ok(req.unwrap_or_default()),
        Some(Err(e)) => Err(ErreurService::Decodage(e)),
        None => Err(ErreurService::CorpsVide),
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct ReponseCalcul {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Réponse prête à écrire sur un transport.
#[derive(Clone, Debug, PartialEq)]
pub struct Reponse {
    pub statut: u16,
    pub type_contenu: &'static str,
    pub corps: String,
}

#[derive(Debug, Error)]
pub enum ErreurService {
    #[error("corps JSON illisible : {0}")]
    Decodage(#[source] serde_json::Error),

    #[error("corps de requête vide")]
    CorpsVide,

    #[error("calcul refusé : {0}")]
    Calcul(#[from] ErreurCalcul),

    /// JSON n’a pas de représentation pour ±inf (ex: 1e308 * 10).
    #[error("résultat non représentable en JSON : {0}")]
    NonRepresentable(f64),

    #[error("encodage JSON impossible : {0}")]
    Encodage(#[source] serde_json::Error),

    #[error("entrée/sortie : {0}")]
    Io(#[from] std::io::Error),
}

impl ErreurService {
    /// Statut HTTP : 422 pour un refus du noyau, 500 pour une faute de la façade.
    pub fn statut(&self) -> u16 {
        match self {
            ErreurService::Calcul(_) => 422,
            _ => 500,
        }
    }

    fn message_public(&self) -> &'static str {
        match self {
            ErreurService::Calcul(_) => MSG_EXPRESSION_INVALIDE,
            _ => MSG_ERREUR_INTERNE,
        }
    }
}

impl Reponse {
    fn ok(corps: String) -> Self {
        Self {
            statut: 200,
            type_contenu: TYPE_CONTENU,
            corps,
        }
    }

    fn depuis_erreur(e: &ErreurService) -> Self {
        let r = ReponseCalcul {
            result: None,
            error: Some(e.message_public().to_string()),
        };
        let corps =
            serde_json::to_string(&r).unwrap_or_else(|_| CORPS_ERREUR_INTERNE.to_string());
        Self {
            statut: e.statut(),
            type_contenu: TYPE_CONTENU,
            corps,
        }
    }
}

/// Traite un corps de requête ; journalise l’issue.
pub fn traite_requete(corps: &str) -> Reponse {
    match repond(corps) {
        Ok(json) => Reponse::ok(json),
        Err(e) => {
            match &e {
                ErreurService::Calcul(c) => {
                    tracing::warn!(genre = %c.genre(), "erreur de calcul : {c}")
                }
                autre => tracing::error!("requête en échec : {autre}"),
            }
            Reponse::depuis_erreur(&e)
        }
    }
}

fn repond(corps: &str) -> Result<String, ErreurService> {
    let req = decode_requete(corps)?;

    let resultat = calcule(&req.expression)?;
    if !resultat.is_finite() {
        return Err(ErreurService::NonRepresentable(resultat));
    }

    let r = ReponseCalcul {
        result: Some(resultat),
        error: None,
    };
    let json = serde_json::to_string(&r).map_err(ErreurService::Encodage)?;

    tracing::info!(resultat, "calcul réussi");
    Ok(json)
}

/// Transport minimal : lit UNE requête sur `entree`, écrit la réponse sur `sortie`.
/// Retourne le statut pour que l’appelant choisisse son code de sortie.
pub fn traite_flux<R: Read, W: Write>(
    mut entree: R,
    mut sortie: W,
) -> Result<u16, ErreurService> {
    let mut corps = String::new();
    entree.read_to_string(&mut corps)?;

    tracing::debug!(route = ROUTE_CALCUL, octets = corps.len(), "requête reçue");
    let reponse = traite_requete(&corps);

    writeln!(sortie, "{}", reponse.corps)?;
    sortie.flush()?;

    tracing::debug!(
        statut = reponse.statut,
        type_contenu = reponse.type_contenu,
        "réponse envoyée"
    );
    Ok(reponse.statut)
}
