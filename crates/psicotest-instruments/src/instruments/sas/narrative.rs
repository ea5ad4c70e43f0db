//! Authored text for the S-AS factors and for the scopo/antiscopo balance.

use psicotest_core::models::interpretation::{QualitativeLevel, Recommendation, RecommendationKind};

use super::catalog::{self, FactorKind};
use crate::tiers::SAS_BANDS;

pub fn narrative_for(id: &str, mean: f64) -> String {
    let level = SAS_BANDS.classify(mean).level();

    match catalog::factor(id) {
        Some(factor) => factor_paragraph(factor.kind, level).to_string(),
        None => format!("Il punteggio in {id} si colloca su un livello {level}."),
    }
}

fn factor_paragraph(kind: FactorKind, level: QualitativeLevel) -> &'static str {
    use FactorKind::*;
    use QualitativeLevel::*;

    match (kind, level) {
        (Realizzazione, Basso) => {
            "Il desiderio di realizzarsi occupa un posto marginale tra le motivazioni \
             attuali: i risultati personali non sembrano costituire una fonte centrale \
             di soddisfazione."
        }
        (Appartenenza, Basso) => {
            "Il bisogno di appartenenza appare poco accentuato: la persona sembra \
             trovare equilibrio anche senza un forte investimento in legami di gruppo."
        }
        (Autonomia, Basso) => {
            "La ricerca di autonomia è poco accentuata: la persona accetta volentieri \
             indicazioni e decisioni condivise senza vivere i vincoli come limitanti."
        }
        (Sicurezza, Basso) => {
            "Il bisogno di stabilità è poco accentuato e si accompagna a una buona \
             apertura verso il cambiamento e le situazioni nuove."
        }
        (EvitamentoFallimento, Basso) => {
            "Il timore di sbagliare è contenuto: errori e insuccessi sembrano vissuti \
             come parte normale dell'esperienza, senza compromettere l'iniziativa."
        }
        (EvitamentoRifiuto, Basso) => {
            "Il timore del rifiuto è contenuto: la persona sembra in grado di \
             esprimersi e di affermare i propri bisogni senza temere l'esclusione."
        }
        (EvitamentoDipendenza, Basso) => {
            "Il bisogno di sottrarsi ai vincoli è contenuto: impegni e forme di \
             reciprocità non sembrano vissuti come una minaccia alla propria libertà."
        }
        (EvitamentoIncertezza, Basso) => {
            "Il disagio verso l'incertezza è contenuto: imprevisti e cambiamenti \
             vengono affrontati senza particolare apprensione."
        }
        (Realizzazione, Moderato) => {
            "Il desiderio di realizzarsi e di ottenere risultati è presente in misura \
             moderata e convive in modo equilibrato con altre motivazioni."
        }
        (Realizzazione, Elevato) => {
            "La realizzazione personale rappresenta uno scopo centrale: la persona investe \
             energie nel raggiungimento di risultati e nel miglioramento delle proprie \
             competenze, traendone soddisfazione e senso di efficacia."
        }
        (Realizzazione, MoltoElevato) => {
            "La spinta alla realizzazione è molto marcata e tende a orientare gran parte \
             delle scelte. Può costituire una risorsa importante, ma anche esporre a \
             frustrazione quando i risultati attesi tardano ad arrivare."
        }
        (Appartenenza, Moderato) => {
            "Il bisogno di legami e di appartenenza è presente in misura moderata: le \
             relazioni sono importanti senza diventare il perno esclusivo delle scelte."
        }
        (Appartenenza, Elevato) => {
            "I legami affettivi e l'appartenenza a un gruppo costituiscono uno scopo \
             rilevante. La persona tende a investire nelle relazioni e a cercare \
             condivisione e vicinanza."
        }
        (Appartenenza, MoltoElevato) => {
            "L'appartenenza rappresenta uno scopo dominante: il benessere personale appare \
             strettamente legato alla qualità delle relazioni, con il rischio di \
             subordinare i propri bisogni a quelli del gruppo."
        }
        (Autonomia, Moderato) => {
            "Il desiderio di autonomia è presente in misura moderata e si accompagna a una \
             buona disponibilità a collaborare e a condividere le decisioni."
        }
        (Autonomia, Elevato) => {
            "L'autonomia costituisce uno scopo importante: la persona desidera decidere \
             per sé e seguire la propria direzione, mostrando iniziativa e indipendenza."
        }
        (Autonomia, MoltoElevato) => {
            "La ricerca di autonomia è molto marcata e può tradursi in difficoltà ad \
             accettare vincoli, indicazioni o forme di dipendenza anche funzionali."
        }
        (Sicurezza, Moderato) => {
            "Il bisogno di stabilità è presente in misura moderata, compatibile con una \
             discreta apertura al cambiamento."
        }
        (Sicurezza, Elevato) => {
            "La sicurezza e la stabilità rappresentano scopi rilevanti: la persona ricerca \
             contesti prevedibili e condizioni di vita protette, su cui fonda il proprio \
             senso di benessere."
        }
        (Sicurezza, MoltoElevato) => {
            "Il bisogno di sicurezza è molto marcato e tende a orientare le scelte verso la \
             conservazione dell'esistente, a scapito talvolta di opportunità di crescita."
        }
        (EvitamentoFallimento, Moderato) => {
            "La preoccupazione di sbagliare è presente in misura moderata e può sostenere \
             l'impegno senza risultare paralizzante."
        }
        (EvitamentoFallimento, Elevato) => {
            "L'evitamento del fallimento è un antiscopo rilevante: il timore di sbagliare o \
             di essere giudicati inadeguati può indurre a rimandare, a controllare \
             eccessivamente o a rinunciare a sfide percepite come rischiose."
        }
        (EvitamentoFallimento, MoltoElevato) => {
            "Il timore del fallimento è molto marcato e sembra guidare una parte \
             importante del comportamento, con possibili ricadute in termini di ansia da \
             prestazione, perfezionismo e autocritica."
        }
        (EvitamentoRifiuto, Moderato) => {
            "Il timore del rifiuto è presente in misura moderata e si manifesta \
             soprattutto nelle situazioni relazionali più coinvolgenti."
        }
        (EvitamentoRifiuto, Elevato) => {
            "L'evitamento del rifiuto è un antiscopo rilevante: la persona può adattarsi \
             alle aspettative altrui per non rischiare esclusione o disapprovazione."
        }
        (EvitamentoRifiuto, MoltoElevato) => {
            "Il timore di essere rifiutati o abbandonati è molto marcato e può condizionare \
             in modo significativo le relazioni, favorendo compiacenza, ritiro o \
             ipersensibilità al giudizio."
        }
        (EvitamentoDipendenza, Moderato) => {
            "Il bisogno di sottrarsi ai vincoli è presente in misura moderata e si \
             esprime soprattutto quando le situazioni appaiono troppo costrittive."
        }
        (EvitamentoDipendenza, Elevato) => {
            "L'evitamento della dipendenza è un antiscopo rilevante: vincoli, obblighi e \
             situazioni in cui si dipende dagli altri tendono a essere vissuti come \
             minacciosi."
        }
        (EvitamentoDipendenza, MoltoElevato) => {
            "Il timore di perdere il controllo sulle proprie scelte è molto marcato e può \
             ostacolare l'impegno in relazioni e progetti che richiedono reciprocità."
        }
        (EvitamentoIncertezza, Moderato) => {
            "Il disagio verso l'incertezza è presente in misura moderata e non impedisce \
             di affrontare i cambiamenti quando necessario."
        }
        (EvitamentoIncertezza, Elevato) => {
            "L'evitamento dell'incertezza è un antiscopo rilevante: imprevisti e \
             cambiamenti tendono a suscitare preoccupazione e a essere evitati quando \
             possibile."
        }
        (EvitamentoIncertezza, MoltoElevato) => {
            "L'intolleranza dell'incertezza è molto marcata e può tradursi in un bisogno \
             costante di rassicurazione e di controllo, con una significativa quota di \
             ansia anticipatoria."
        }
    }
}

pub fn factor_recommendation(id: &str, name: &str) -> Recommendation {
    let (title, body) = match catalog::factor(id).map(|f| f.kind) {
        Some(FactorKind::Realizzazione) => (
            "Valorizzare gli obiettivi",
            "Si suggerisce di tradurre la spinta alla realizzazione in obiettivi concreti e \
             graduali, prevedendo momenti di verifica e di riconoscimento dei progressi.",
        ),
        Some(FactorKind::Appartenenza) => (
            "Coltivare le relazioni",
            "Si consiglia di valorizzare la rete relazionale come risorsa, curando al \
             tempo stesso uno spazio per i bisogni personali.",
        ),
        Some(FactorKind::Autonomia) => (
            "Sostenere l'autonomia",
            "È utile offrire margini di scelta e di responsabilità, concordando in modo \
             esplicito i vincoli necessari.",
        ),
        Some(FactorKind::Sicurezza) => (
            "Gestire il cambiamento",
            "Si suggerisce di introdurre i cambiamenti in modo graduale e prevedibile, \
             rafforzando la fiducia nelle proprie capacità di adattamento.",
        ),
        Some(FactorKind::EvitamentoFallimento) => (
            "Ridurre il timore dell'errore",
            "Si consiglia un lavoro sulla tolleranza dell'errore e sull'autocritica, \
             favorendo l'esposizione graduale a sfide con un livello di rischio \
             sostenibile.",
        ),
        Some(FactorKind::EvitamentoRifiuto) => (
            "Rafforzare l'assertività",
            "È indicato un percorso sull'assertività e sulla gestione del giudizio altrui, \
             per esprimere i propri bisogni senza timore di esclusione.",
        ),
        Some(FactorKind::EvitamentoDipendenza) => (
            "Equilibrio tra autonomia e reciprocità",
            "Si suggerisce di esplorare il significato attribuito ai vincoli relazionali, \
             sperimentando forme di collaborazione che non minaccino il senso di \
             controllo.",
        ),
        Some(FactorKind::EvitamentoIncertezza) => (
            "Tolleranza dell'incertezza",
            "Si raccomandano tecniche di gestione dell'ansia anticipatoria e di \
             esposizione graduale a situazioni nuove o poco prevedibili.",
        ),
        None => (
            "Approfondimento motivazionale",
            "Si suggerisce un colloquio di approfondimento sulle motivazioni emerse come \
             prevalenti.",
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
        title: "Profilo motivazionale equilibrato".to_string(),
        body: "Nessun fattore raggiunge livelli tali da richiedere interventi specifici: il \
               profilo motivazionale appare nel complesso equilibrato."
            .to_string(),
    }
}

pub fn follow_up_recommendation() -> Recommendation {
    Recommendation {
        identifier: None,
        kind: RecommendationKind::FollowUp,
        title: "Monitoraggio e follow-up".to_string(),
        body: "Si consiglia di riprendere i risultati in un colloquio di restituzione e di \
               ripetere la somministrazione dopo eventuali percorsi di sviluppo, per \
               verificare l'evoluzione dell'equilibrio tra scopi e antiscopi."
            .to_string(),
    }
}

pub fn balance_narrative(balance: i32) -> String {
    match balance {
        b if b > 0 => format!(
            "Il bilancio tra scopi e antiscopi è positivo (+{b}): le motivazioni orientate \
             al raggiungimento degli obiettivi prevalgono su quelle orientate all'evitamento."
        ),
        b if b < 0 => format!(
            "Il bilancio tra scopi e antiscopi è negativo ({b}): le motivazioni orientate \
             all'evitamento di esiti temuti prevalgono su quelle orientate agli obiettivi."
        ),
        _ => "Il bilancio tra scopi e antiscopi è nullo: le due componenti motivazionali \
              hanno un peso equivalente."
            .to_string(),
    }
}
