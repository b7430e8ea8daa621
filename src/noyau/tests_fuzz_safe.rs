//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - tailles bornées
//! - budget temps global
//! - invariant clé : sans parenthèses, le résultat == évaluation de référence
//!   (* / d’abord, puis + -, gauche à droite)

use std::time::{Duration, Instant};

use super::erreur::GenreErreur;
use super::{calcule, ErreurCalcul};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération ------------------------ */

fn gen_nombre(rng: &mut Rng) -> (String, f64) {
    // 0 inclus (utile pour la division par zéro)
    let entier = rng.pick(10);
    if rng.coin() {
        let frac = rng.pick(100);
        let s = format!("{entier}.{frac:02}");
        let v: f64 = s.parse().unwrap();
        (s, v)
    } else {
        (entier.to_string(), entier as f64)
    }
}

fn gen_op(rng: &mut Rng) -> char {
    match rng.pick(4) {
        0 => '+',
        1 => '-',
        2 => '*',
        _ => '/',
    }
}

/// Expression sans parenthèses : (texte, nombres, opérateurs).
fn gen_plate(rng: &mut Rng, n_ops: usize) -> (String, Vec<f64>, Vec<char>) {
    let mut texte = String::new();
    let mut nombres = Vec::new();
    let mut ops = Vec::new();

    let (s, v) = gen_nombre(rng);
    texte.push_str(&s);
    nombres.push(v);

    for _ in 0..n_ops {
        let op = gen_op(rng);
        let (s, v) = gen_nombre(rng);
        if rng.coin() {
            texte.push_str(&format!(" {op} {s}"));
        } else {
            texte.push_str(&format!("{op}{s}"));
        }
        ops.push(op);
        nombres.push(v);
    }

    (texte, nombres, ops)
}

/// Référence : termes (* /) gauche à droite, puis somme (+ -) gauche à droite.
fn reference(nombres: &[f64], ops: &[char]) -> Result<f64, ErreurCalcul> {
    let mut termes: Vec<f64> = vec![nombres[0]];
    let mut signes: Vec<char> = Vec::new();

    for (op, &v) in ops.iter().zip(&nombres[1..]) {
        match op {
            '*' | '/' => {
                if *op == '/' && v == 0.0 {
                    return Err(ErreurCalcul::DivisionParZero);
                }
                let t = termes.last_mut().unwrap();
                *t = if *op == '*' { *t * v } else { *t / v };
            }
            _ => {
                signes.push(*op);
                termes.push(v);
            }
        }
    }

    let mut acc = termes[0];
    for (s, t) in signes.iter().zip(&termes[1..]) {
        acc = if *s == '+' { acc + t } else { acc - t };
    }
    Ok(acc)
}

/// Bruit borné sur l’alphabet autorisé (+ quelques intrus).
fn gen_bruit(rng: &mut Rng, len: usize) -> String {
    const ALPHABET: &[char] = &[
        '0', '1', '7', '.', '+', '-', '*', '/', '(', ')', ' ', 'x', '^',
    ];
    (0..len)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_plate_egale_reference() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_div0 = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let n_ops = rng.pick(8) as usize;
        let (expr, nombres, ops) = gen_plate(&mut rng, n_ops);

        let attendu = reference(&nombres, &ops);
        let obtenu = calcule(&expr);
        assert_eq!(obtenu, attendu, "expr={expr:?}");

        match obtenu {
            Ok(_) => seen_ok += 1,
            Err(_) => seen_div0 += 1,
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 100, "trop peu de succès: {seen_ok}");
    assert!(seen_div0 > 0, "aucune division par zéro vue");
}

#[test]
fn fuzz_safe_bruit_sans_panique_et_deterministe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);
    let mut genres_vus = std::collections::HashSet::new();

    for _ in 0..2000 {
        budget(t0, max);

        let len = rng.pick(16) as usize;
        let expr = gen_bruit(&mut rng, len);

        let a = calcule(&expr);
        // même entrée => même sortie (pas d’état caché)
        assert_eq!(a, calcule(&expr), "expr={expr:?}");

        match a {
            Ok(v) => assert!(!v.is_nan(), "NaN pour expr={expr:?}"),
            Err(e) => {
                genres_vus.insert(e.genre());
            }
        }
    }

    for g in [
        GenreErreur::EmptyExpression,
        GenreErreur::InvalidCharacter,
        GenreErreur::UnbalancedParentheses,
        GenreErreur::ArityMismatch,
    ] {
        assert!(genres_vus.contains(&g), "genre jamais vu: {g}");
    }
}

// Budgets larges pour les cas de charge : build debug sur CI chargée.
#[test]
fn fuzz_safe_longue_somme_lineaire() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    let expr = vec!["0.5"; 10_000].join(" + ");
    let v = calcule(&expr).unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);

    assert_eq!(v, 5000.0);
}

#[test]
fn fuzz_safe_imbrication_profonde_sans_recursion() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    let n = 20_000;
    let expr = format!("{}2 * 3{}", "(".repeat(n), ")".repeat(n));
    let v = calcule(&expr).unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);

    assert_eq!(v, 6.0);
}
