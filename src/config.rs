// src/config.rs
//
// Configuration de lancement : mode (fenêtre, JSON, évaluation directe) + filtre de journal.
//
// Usage:
//   calculatrice_postfixe                  # fenêtre (eframe)
//   calculatrice_postfixe --json           # une requête JSON sur stdin -> réponse sur stdout
//   calculatrice_postfixe -e "3 + 4 * 2"   # évalue et affiche
//   calculatrice_postfixe --log debug      # filtre tracing (sinon CALC_LOG, RUST_LOG, "info")

use thiserror::Error;

/// Variable d’environnement prioritaire pour le filtre de journal.
pub const VAR_LOG: &str = "CALC_LOG";

/// Filtre utilisé si rien n’est fourni.
pub const FILTRE_LOG_DEFAUT: &str = "info";

pub const AIDE: &str = "\
Calculatrice postfixe

Usage:
  calculatrice_postfixe                    fenêtre
  calculatrice_postfixe --json             requête {\"expression\": ...} sur stdin
  calculatrice_postfixe -e <expression>    évalue et affiche le résultat
  calculatrice_postfixe --log <filtre>     filtre de journal (tracing)
  calculatrice_postfixe --help | --version";

#[derive(Clone, Debug, PartialEq)]
pub enum Mode {
    Fenetre,
    Json,
    Eval(String),
    Aide,
    Version,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub mode: Mode,
    pub filtre_log: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum ErreurConfig {
    #[error("argument inconnu : {0}")]
    ArgumentInconnu(String),

    #[error("{0} attend une valeur")]
    ValeurManquante(&'static str),
}

impl Config {
    /// Arguments du processus + environnement.
    pub fn depuis_env() -> Result<Self, ErreurConfig> {
        let filtre_env = std::env::var(VAR_LOG)
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok());
        Self::depuis_args(std::env::args().skip(1), filtre_env)
    }

    /// `args` sans le nom du programme.
    pub fn depuis_args<I>(args: I, filtre_env: Option<String>) -> Result<Self, ErreurConfig>
    where
        I: IntoIterator<Item = String>,
    {
        let mut mode = Mode::Fenetre;
        let mut filtre_log = filtre_env
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| FILTRE_LOG_DEFAUT.to_string());

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json" => mode = Mode::Json,
                "-e" | "--eval" => {
                    let expr = args.next().ok_or(ErreurConfig::ValeurManquante("--eval"))?;
                    mode = Mode::Eval(expr);
                }
                "--log" => {
                    filtre_log = args.next().ok_or(ErreurConfig::ValeurManquante("--log"))?;
                }
                "-h" | "--help" => mode = Mode::Aide,
                "-V" | "--version" => mode = Mode::Version,
                _ => return Err(ErreurConfig::ArgumentInconnu(arg)),
            }
        }

        Ok(Self { mode, filtre_log })
    }
}
