//! Structure of the S-AS (Scopo-Antiscopo) questionnaire: 20 statement
//! pairs, each with a goal-oriented (S) and an avoidance-oriented (AS)
//! statement, grouped into 8 factors.

use psicotest_core::models::answers::{ItemKey, Role};

/// Highest Part-I rating.
pub const RATING_MAX: f64 = 4.0;

pub const PAIR_COUNT: u8 = 20;

/// Highest weight a Part-II forced choice may carry; unweighted choices count 1.
pub const CHOICE_SCORE_MAX: f64 = RATING_MAX;

const fn s(pair: u8) -> ItemKey {
    ItemKey::new(pair, Role::Scopo)
}

const fn a(pair: u8) -> ItemKey {
    ItemKey::new(pair, Role::Antiscopo)
}

/// Keys that never contribute to a factor score, whether answered or not.
/// They still count towards the scopo/antiscopo totals.
pub const EXCLUDED_KEYS: [ItemKey; 6] = [s(4), a(4), s(6), a(6), s(9), a(9)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactorKind {
    Realizzazione,
    Appartenenza,
    Autonomia,
    Sicurezza,
    EvitamentoFallimento,
    EvitamentoRifiuto,
    EvitamentoDipendenza,
    EvitamentoIncertezza,
}

#[derive(Debug)]
pub struct FactorDef {
    pub kind: FactorKind,
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub orientation: Role,
    pub items: &'static [ItemKey],
}

pub static FACTORS: [FactorDef; 8] = [
    FactorDef {
        kind: FactorKind::Realizzazione,
        id: "realizzazione",
        name: "Realizzazione personale",
        description: "Motivazione a raggiungere risultati, migliorarsi e veder riconosciuto \
                      il proprio valore.",
        orientation: Role::Scopo,
        items: &[s(1), s(4), s(5), s(12), s(17)],
    },
    FactorDef {
        kind: FactorKind::Appartenenza,
        id: "appartenenza",
        name: "Appartenenza e legami",
        description: "Motivazione a costruire e mantenere relazioni significative e a \
                      sentirsi parte di un gruppo.",
        orientation: Role::Scopo,
        items: &[s(2), s(6), s(8), s(13), s(14), s(19)],
    },
    FactorDef {
        kind: FactorKind::Autonomia,
        id: "autonomia",
        name: "Autonomia",
        description: "Motivazione a decidere per sé, scegliere liberamente e seguire la \
                      propria direzione.",
        orientation: Role::Scopo,
        items: &[s(3), s(10), s(15), s(20)],
    },
    FactorDef {
        kind: FactorKind::Sicurezza,
        id: "sicurezza",
        name: "Sicurezza e stabilità",
        description: "Motivazione a disporre di condizioni di vita prevedibili, stabili e \
                      protette.",
        orientation: Role::Scopo,
        items: &[s(7), s(9), s(11), s(16), s(18)],
    },
    FactorDef {
        kind: FactorKind::EvitamentoFallimento,
        id: "evitamento_fallimento",
        name: "Evitamento del fallimento",
        description: "Spinta a evitare errori, insuccessi e giudizi di inadeguatezza.",
        orientation: Role::Antiscopo,
        items: &[a(1), a(4), a(5), a(12), a(17)],
    },
    FactorDef {
        kind: FactorKind::EvitamentoRifiuto,
        id: "evitamento_rifiuto",
        name: "Evitamento del rifiuto",
        description: "Spinta a evitare esclusione, abbandono e disapprovazione da parte \
                      degli altri.",
        orientation: Role::Antiscopo,
        items: &[a(2), a(6), a(8), a(14), a(19)],
    },
    FactorDef {
        kind: FactorKind::EvitamentoDipendenza,
        id: "evitamento_dipendenza",
        name: "Evitamento della dipendenza",
        description: "Spinta a evitare situazioni di vincolo, costrizione o perdita di \
                      controllo sulle proprie scelte.",
        orientation: Role::Antiscopo,
        items: &[a(3), a(9), a(10), a(15), a(20)],
    },
    FactorDef {
        kind: FactorKind::EvitamentoIncertezza,
        id: "evitamento_incertezza",
        name: "Evitamento dell'incertezza",
        description: "Spinta a evitare imprevisti, cambiamenti e situazioni percepite come \
                      pericolose.",
        orientation: Role::Antiscopo,
        items: &[a(7), a(11), a(13), a(16), a(18)],
    },
];

pub fn factor(id: &str) -> Option<&'static FactorDef> {
    FACTORS.iter().find(|f| f.id == id)
}

pub fn factor_of_key(key: &ItemKey) -> Option<&'static FactorDef> {
    FACTORS.iter().find(|f| f.items.contains(key))
}

pub fn is_excluded(key: &ItemKey) -> bool {
    EXCLUDED_KEYS.contains(key)
}

pub fn is_known_pair(pair: u8) -> bool {
    (1..=PAIR_COUNT).contains(&pair)
}

pub fn is_known_key(key: &ItemKey) -> bool {
    is_known_pair(key.pair)
}

/// Every Part-I key in pair order, goal statement first.
pub fn all_keys() -> impl Iterator<Item = ItemKey> {
    (1..=PAIR_COUNT).flat_map(|pair| [s(pair), a(pair)])
}
