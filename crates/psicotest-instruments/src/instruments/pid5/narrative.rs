//! Authored clinical text for the PID-5 domains.
//!
//! Domains have a paragraph for every `(DomainKind, QualitativeLevel)`;
//! facets and unknown identifiers get a generic sentence.

use psicotest_core::models::interpretation::{QualitativeLevel, Recommendation, RecommendationKind};

use super::catalog::{self, DomainKind};
use crate::tiers::PID5_BANDS;

/// Narrative paragraph for a domain or facet at the level implied by `mean`.
pub fn narrative_for(id: &str, mean: f64) -> String {
    let level = PID5_BANDS.classify(mean).level();

    if let Some(domain) = catalog::domain(id) {
        return domain_paragraph(domain.kind, level).to_string();
    }

    generic_narrative(id, level)
}

fn generic_narrative(id: &str, level: QualitativeLevel) -> String {
    if let Some(facet) = catalog::facet(id) {
        return format!(
            "{}: {} Il punteggio si colloca su un livello {}.",
            facet.name, facet.description, level
        );
    }
    format!("Il punteggio in {id} si colloca su un livello {level}.")
}

fn domain_paragraph(kind: DomainKind, level: QualitativeLevel) -> &'static str {
    use DomainKind::*;
    use QualitativeLevel::*;

    match (kind, level) {
        (NegativeAffect, Basso) => {
            "L'affettività negativa si colloca su un livello basso: ansia, tristezza e \
             irritabilità compaiono in misura contenuta e proporzionata alle circostanze, \
             con una buona stabilità emotiva complessiva."
        }
        (Detachment, Basso) => {
            "Il distacco si colloca su un livello basso: la persona ricerca e mantiene \
             relazioni sociali e intime senza particolari difficoltà e conserva la capacità \
             di provare interesse e piacere."
        }
        (Antagonism, Basso) => {
            "L'antagonismo si colloca su un livello basso: nelle relazioni prevalgono \
             sincerità e considerazione per gli altri, senza tendenze manipolative o \
             grandiose di rilievo."
        }
        (Disinhibition, Basso) => {
            "La disinibizione si colloca su un livello basso: il comportamento appare \
             nel complesso pianificato e responsabile, con una buona capacità di \
             mantenere l'attenzione e rispettare gli impegni."
        }
        (Psychoticism, Basso) => {
            "Lo psicoticismo si colloca su un livello basso: non emergono convinzioni \
             insolite, esperienze percettive alterate o comportamenti eccentrici \
             degni di nota."
        }
        (NegativeAffect, Moderato) => {
            "Emerge una moderata tendenza a sperimentare emozioni negative. In situazioni \
             di stress la persona può avvertire ansia, irritabilità o timore di perdere \
             figure di riferimento, pur mantenendo nel complesso una discreta capacità di \
             recupero dell'equilibrio emotivo."
        }
        (NegativeAffect, Elevato) => {
            "Il profilo indica un'elevata affettività negativa: ansia, oscillazioni \
             dell'umore e preoccupazioni ricorrenti sembrano accompagnare con frequenza \
             l'esperienza quotidiana. Le reazioni emotive possono risultare intense rispetto \
             agli eventi che le attivano e la paura della separazione può orientare le scelte \
             relazionali."
        }
        (NegativeAffect, MoltoElevato) => {
            "L'affettività negativa raggiunge un livello molto elevato. Emozioni come ansia, \
             paura e instabilità affettiva appaiono pervasive e difficili da modulare, con \
             un probabile impatto significativo sul funzionamento personale e relazionale. \
             Il quadro suggerisce una marcata vulnerabilità allo stress e una forte \
             dipendenza dalla vicinanza delle figure significative."
        }
        (Detachment, Moderato) => {
            "Si osserva una moderata tendenza al distacco: la persona può preferire spazi \
             di solitudine e mostrare una certa riservatezza nelle relazioni più strette, \
             senza che ciò comprometta in modo rilevante la vita sociale."
        }
        (Detachment, Elevato) => {
            "Il distacco risulta elevato. Si evidenziano ritiro dalle relazioni sociali, \
             ridotto coinvolgimento emotivo e difficoltà a trarre piacere dalle attività \
             quotidiane. I legami intimi tendono a essere evitati o vissuti con disagio."
        }
        (Detachment, MoltoElevato) => {
            "Il distacco si colloca su un livello molto elevato: isolamento, anedonia ed \
             evitamento dell'intimità appaiono marcati e stabili. Il quadro può associarsi \
             a un impoverimento significativo della rete sociale e della qualità di vita e \
             merita un approfondimento clinico."
        }
        (Antagonism, Moderato) => {
            "Emerge un moderato antagonismo: in alcune circostanze la persona può mettere \
             i propri interessi davanti a quelli altrui o tendere a valorizzare la propria \
             immagine, mantenendo tuttavia un adeguato rispetto delle regole relazionali."
        }
        (Antagonism, Elevato) => {
            "Il profilo evidenzia un antagonismo elevato, con tendenza a manipolare, a \
             distorcere i fatti a proprio vantaggio e a percepirsi come superiori agli \
             altri. Le relazioni possono risultarne conflittuali o strumentali."
        }
        (Antagonism, MoltoElevato) => {
            "L'antagonismo raggiunge un livello molto elevato. Manipolatorietà, disonestà \
             e grandiosità appaiono tratti centrali del funzionamento interpersonale, con \
             un rischio concreto di conflitti ripetuti e di compromissione della fiducia \
             nei contesti lavorativi e personali."
        }
        (Disinhibition, Moderato) => {
            "Si rileva una moderata disinibizione: la persona può talvolta agire d'impulso \
             o faticare a mantenere l'attenzione su compiti prolungati, pur riuscendo in \
             genere a rispettare gli impegni assunti."
        }
        (Disinhibition, Elevato) => {
            "La disinibizione risulta elevata. Impulsività, distraibilità e difficoltà a \
             onorare obblighi e scadenze tendono a caratterizzare il comportamento, che \
             appare guidato dalle sollecitazioni del momento più che dalla pianificazione."
        }
        (Disinhibition, MoltoElevato) => {
            "La disinibizione si colloca su un livello molto elevato: il comportamento \
             appare marcatamente impulsivo e poco orientato alle conseguenze, con frequenti \
             difficoltà di concentrazione e di affidabilità. Il quadro può esporre a scelte \
             rischiose e a ripercussioni sul piano lavorativo e relazionale."
        }
        (Psychoticism, Moderato) => {
            "Emergono in misura moderata modalità di pensiero o di percezione insolite: \
             la persona può riferire esperienze particolari o adottare comportamenti \
             originali, senza che questi interferiscano in modo significativo con \
             l'adattamento."
        }
        (Psychoticism, Elevato) => {
            "Lo psicoticismo risulta elevato. Si evidenziano convinzioni inusuali, \
             comportamenti eccentrici ed esperienze percettive insolite che possono \
             rendere difficile la condivisione della realtà con gli altri."
        }
        (Psychoticism, MoltoElevato) => {
            "Lo psicoticismo si colloca su un livello molto elevato: esperienze percettive \
             alterate, convinzioni bizzarre ed eccentricità marcata appaiono rilevanti e \
             potenzialmente invalidanti. Si raccomanda un'attenta valutazione clinica \
             specialistica."
        }
    }
}

/// Targeted recommendation for a domain above the recommendation threshold.
pub fn domain_recommendation(id: &str, name: &str) -> Recommendation {
    let (title, body) = match catalog::domain(id).map(|d| d.kind) {
        Some(DomainKind::NegativeAffect) => (
            "Regolazione emotiva",
            "Si suggerisce un percorso orientato alla regolazione emotiva, con tecniche di \
             gestione dell'ansia e dello stress e un lavoro sulla tolleranza della \
             separazione e dell'incertezza.",
        ),
        Some(DomainKind::Detachment) => (
            "Riattivazione relazionale",
            "Si consiglia di favorire gradualmente il coinvolgimento in attività sociali e \
             piacevoli, lavorando sulla consapevolezza emotiva e sulla costruzione di \
             relazioni di fiducia.",
        ),
        Some(DomainKind::Antagonism) => (
            "Competenze interpersonali",
            "È indicato un lavoro sulle competenze interpersonali e sull'empatia, con \
             particolare attenzione alla trasparenza nella comunicazione e al \
             riconoscimento del punto di vista altrui.",
        ),
        Some(DomainKind::Disinhibition) => (
            "Autoregolazione comportamentale",
            "Si raccomandano strategie di pianificazione e di autoregolazione: definizione \
             di obiettivi concreti, gestione del tempo e tecniche per rimandare la \
             risposta impulsiva.",
        ),
        Some(DomainKind::Psychoticism) => (
            "Approfondimento specialistico",
            "Si raccomanda un approfondimento clinico specialistico per valutare la natura \
             delle esperienze percettive e delle convinzioni inusuali riferite.",
        ),
        None => (
            "Approfondimento del profilo",
            "Si suggerisce un colloquio di approfondimento sulle aree emerse come rilevanti.",
        ),
    };

    Recommendation {
        identifier: Some(id.to_string()),
        kind: RecommendationKind::Targeted,
        title: format!("{title} ({name})"),
        body: body.to_string(),
    }
}

pub fn normal_range_recommendation() -> Recommendation {
    Recommendation {
        identifier: None,
        kind: RecommendationKind::NormalRange,
        title: "Profilo nella norma".to_string(),
        body: "Il profilo di personalità si colloca entro i limiti della norma. Non emergono \
               aree che richiedano interventi specifici; si suggerisce di valorizzare le \
               risorse personali già presenti."
            .to_string(),
    }
}

pub fn follow_up_recommendation() -> Recommendation {
    Recommendation {
        identifier: None,
        kind: RecommendationKind::FollowUp,
        title: "Monitoraggio e follow-up".to_string(),
        body: "Si consiglia di ripetere la valutazione a distanza di 6-12 mesi e di \
               integrare i risultati con un colloquio clinico, poiché il questionario \
               descrive tendenze e non costituisce di per sé una diagnosi."
            .to_string(),
    }
}
