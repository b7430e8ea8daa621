// src/main.rs
//
// Calculatrice postfixe — point d’entrée NATIF + WEB (WASM)
// ---------------------------------------------------------
// But:
// - NATIF : fenêtre eframe, ou façade JSON (stdin/stdout), ou évaluation directe (-e)
// - WEB (wasm32) : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports, dead_code))]

use std::process::ExitCode;

use eframe::egui;

mod app;
mod config;
mod noyau;
mod service;

use app::AppCalc;
use config::{Config, Mode, AIDE, FILTRE_LOG_DEFAUT};

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice postfixe";

/* ------------------------ Journal ------------------------ */

/// tracing vers stderr : stdout reste réservé aux réponses (--json, -e).
#[cfg(not(target_arch = "wasm32"))]
fn installer_journal(filtre: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filtre = EnvFilter::try_new(filtre).unwrap_or_else(|_| EnvFilter::new(FILTRE_LOG_DEFAUT));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filtre)
        .init();
}

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> ExitCode {
    let config = match Config::depuis_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Erreur: {e}\n\n{AIDE}");
            return ExitCode::FAILURE;
        }
    };

    installer_journal(&config.filtre_log);

    match config.mode {
        Mode::Aide => {
            println!("{AIDE}");
            ExitCode::SUCCESS
        }
        Mode::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Mode::Json => lancer_json(),
        Mode::Eval(expression) => lancer_eval(&expression),
        Mode::Fenetre => lancer_fenetre(),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn lancer_json() -> ExitCode {
    match service::traite_flux(std::io::stdin().lock(), std::io::stdout().lock()) {
        Ok(200) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("façade JSON : {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn lancer_eval(expression: &str) -> ExitCode {
    match noyau::calcule(expression) {
        Ok(v) => {
            tracing::info!(resultat = v, "calcul réussi");
            println!("{}", app::etat::format_resultat(v));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Erreur ({}): {e}", e.genre());
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn lancer_fenetre() -> ExitCode {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([460.0, 640.0])
            .with_min_inner_size([380.0, 520.0]),
        ..Default::default()
    };

    tracing::info!("démarrage de la fenêtre");
    let r = eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|_cc| Ok(Box::<AppCalc>::default())),
    );

    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("fenêtre : {e}");
            ExitCode::FAILURE
        }
    }
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
