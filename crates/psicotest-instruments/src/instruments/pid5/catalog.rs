//! Structure of the PID-5 (full 220-item version): 25 facets, each built
//! from a fixed list of items, and 5 domains built from three facets each.

/// Highest response on the 0–3 scale, also the pivot for reversed items.
pub const RESPONSE_MAX: f64 = 3.0;

pub const ITEM_COUNT: u16 = 220;

/// Items scored as `RESPONSE_MAX - v`.
pub const REVERSED_ITEMS: [u16; 16] = [
    7, 30, 35, 58, 87, 90, 96, 97, 98, 131, 142, 155, 164, 177, 210, 215,
];

#[derive(Debug)]
pub struct FacetDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub items: &'static [u16],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainKind {
    NegativeAffect,
    Detachment,
    Antagonism,
    Disinhibition,
    Psychoticism,
}

#[derive(Debug)]
pub struct DomainDef {
    pub kind: DomainKind,
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub facets: &'static [&'static str],
}

/// Catalog entry for a single item.
#[derive(Debug, Clone, Copy)]
pub struct ItemInfo {
    pub id: u16,
    pub facet: &'static FacetDef,
    pub reversed: bool,
}

pub static FACETS: [FacetDef; 25] = [
    FacetDef {
        id: "anhedonia",
        name: "Anedonia",
        description: "Mancanza di piacere e di interesse per le esperienze della vita quotidiana.",
        items: &[1, 23, 26, 30, 124, 155, 157, 189],
    },
    FacetDef {
        id: "anxiousness",
        name: "Ansia",
        description: "Sentimenti intensi e frequenti di nervosismo, tensione e preoccupazione.",
        items: &[79, 93, 95, 96, 109, 110, 130, 141, 174],
    },
    FacetDef {
        id: "attention_seeking",
        name: "Ricerca di attenzione",
        description: "Comportamenti volti ad attirare su \
                      di sé l'attenzione e l'ammirazione altrui.",
        items: &[14, 43, 74, 111, 113, 173, 191, 211],
    },
    FacetDef {
        id: "callousness",
        name: "Insensibilità",
        description: "Mancanza di interesse per i sentimenti e i problemi degli altri.",
        items: &[11, 13, 19, 54, 72, 73, 90, 153, 166, 183, 198, 200, 207, 208],
    },
    FacetDef {
        id: "deceitfulness",
        name: "Disonestà",
        description: "Tendenza alla menzogna, alla frode e alla distorsione dei fatti.",
        items: &[41, 53, 56, 76, 126, 134, 142, 206, 214, 218],
    },
    FacetDef {
        id: "depressivity",
        name: "Depressività",
        description: "Sentimenti di tristezza, vuoto e mancanza di speranza.",
        items: &[27, 61, 66, 81, 86, 104, 119, 148, 151, 163, 168, 169, 178, 212],
    },
    FacetDef {
        id: "distractibility",
        name: "Distraibilità",
        description: "Difficoltà a mantenere la concentrazione e a portare a termine i compiti.",
        items: &[6, 29, 47, 68, 88, 118, 132, 144, 199],
    },
    FacetDef {
        id: "eccentricity",
        name: "Eccentricità",
        description: "Comportamenti, aspetto o modi di esprimersi insoliti e bizzarri.",
        items: &[5, 21, 24, 25, 33, 52, 55, 70, 71, 152, 172, 185, 205],
    },
    FacetDef {
        id: "emotional_lability",
        name: "Labilità emotiva",
        description: "Instabilità delle emozioni e dell'umore, \
                      con reazioni intense e sproporzionate.",
        items: &[18, 62, 102, 122, 138, 165, 181],
    },
    FacetDef {
        id: "grandiosity",
        name: "Grandiosità",
        description: "Convinzione di essere superiori agli altri \
                      e di meritare un trattamento speciale.",
        items: &[40, 65, 114, 179, 187, 197],
    },
    FacetDef {
        id: "hostility",
        name: "Ostilità",
        description: "Rabbia persistente o frequente in risposta anche a offese minime.",
        items: &[28, 32, 38, 85, 92, 116, 158, 170, 188, 216],
    },
    FacetDef {
        id: "impulsivity",
        name: "Impulsività",
        description: "Agire d'impulso, senza pianificare né considerare le conseguenze.",
        items: &[4, 16, 17, 22, 58, 204],
    },
    FacetDef {
        id: "intimacy_avoidance",
        name: "Evitamento dell'intimità",
        description: "Evitamento delle relazioni strette e dei legami sentimentali.",
        items: &[89, 97, 108, 120, 145, 203],
    },
    FacetDef {
        id: "irresponsibility",
        name: "Irresponsabilità",
        description: "Mancato rispetto di obblighi, accordi e impegni presi.",
        items: &[31, 129, 156, 160, 171, 201, 210],
    },
    FacetDef {
        id: "manipulativeness",
        name: "Manipolatorietà",
        description: "Uso di sotterfugi e seduzione per influenzare o controllare gli altri.",
        items: &[107, 125, 162, 180, 219],
    },
    FacetDef {
        id: "perceptual_dysregulation",
        name: "Disregolazione percettiva",
        description: "Esperienze percettive insolite e fenomeni di tipo dissociativo.",
        items: &[36, 37, 42, 44, 59, 77, 83, 154, 192, 193, 213, 217],
    },
    FacetDef {
        id: "perseveration",
        name: "Perseverazione",
        description: "Insistenza in un comportamento anche quando si è dimostrato inefficace.",
        items: &[46, 51, 60, 78, 80, 100, 121, 128, 137],
    },
    FacetDef {
        id: "restricted_affectivity",
        name: "Affettività ridotta",
        description: "Scarsa reattività emotiva e freddezza nelle situazioni coinvolgenti.",
        items: &[8, 45, 84, 91, 101, 167, 184],
    },
    FacetDef {
        id: "rigid_perfectionism",
        name: "Perfezionismo rigido",
        description: "Insistenza rigida sul fatto che tutto debba essere impeccabile e in ordine.",
        items: &[34, 49, 105, 115, 123, 135, 140, 176, 196, 220],
    },
    FacetDef {
        id: "risk_taking",
        name: "Assunzione di rischi",
        description: "Coinvolgimento in attività pericolose senza considerarne le conseguenze.",
        items: &[3, 7, 35, 39, 48, 67, 69, 87, 98, 112, 159, 164, 195, 215],
    },
    FacetDef {
        id: "separation_insecurity",
        name: "Insicurezza da separazione",
        description: "Paura di restare soli o di essere separati dalle persone significative.",
        items: &[12, 50, 57, 64, 127, 149, 175],
    },
    FacetDef {
        id: "submissiveness",
        name: "Sottomissione",
        description: "Adeguamento del proprio comportamento agli interessi e ai desideri altrui.",
        items: &[9, 15, 63, 202],
    },
    FacetDef {
        id: "suspiciousness",
        name: "Sospettosità",
        description: "Aspettativa di malevolenza o di danno da parte degli altri.",
        items: &[2, 103, 117, 131, 133, 177, 190],
    },
    FacetDef {
        id: "unusual_beliefs",
        name: "Convinzioni ed esperienze inusuali",
        description: "Convinzione di possedere capacità insolite ed esperienze di realtà alterate.",
        items: &[94, 99, 106, 139, 143, 150, 194, 209],
    },
    FacetDef {
        id: "withdrawal",
        name: "Ritiro",
        description: "Preferenza per la solitudine e riduzione dei contatti sociali.",
        items: &[10, 20, 75, 82, 136, 146, 147, 161, 182, 186],
    },
];

pub static DOMAINS: [DomainDef; 5] = [
    DomainDef {
        kind: DomainKind::NegativeAffect,
        id: "negative_affect",
        name: "Affettività Negativa",
        description: "Esperienza frequente e intensa di emozioni negative come ansia, \
                      instabilità emotiva e paura della separazione.",
        facets: &["emotional_lability", "anxiousness", "separation_insecurity"],
    },
    DomainDef {
        kind: DomainKind::Detachment,
        id: "detachment",
        name: "Distacco",
        description: "Evitamento delle esperienze socio-emotive, sia nelle relazioni \
                      quotidiane sia nei legami intimi, con ridotta capacità di provare piacere.",
        facets: &["withdrawal", "anhedonia", "intimacy_avoidance"],
    },
    DomainDef {
        kind: DomainKind::Antagonism,
        id: "antagonism",
        name: "Antagonismo",
        description: "Comportamenti che mettono la persona in contrasto con gli altri, \
                      con un senso esagerato della propria importanza.",
        facets: &["manipulativeness", "deceitfulness", "grandiosity"],
    },
    DomainDef {
        kind: DomainKind::Disinhibition,
        id: "disinhibition",
        name: "Disinibizione",
        description: "Orientamento alla gratificazione immediata, con comportamenti \
                      guidati dagli stimoli del momento più che dalla pianificazione.",
        facets: &["irresponsibility", "impulsivity", "distractibility"],
    },
    DomainDef {
        kind: DomainKind::Psychoticism,
        id: "psychoticism",
        name: "Psicoticismo",
        description: "Comportamenti e cognizioni insoliti, eccentrici o bizzarri, \
                      incongrui rispetto al contesto culturale.",
        facets: &["unusual_beliefs", "eccentricity", "perceptual_dysregulation"],
    },
];

pub fn is_reversed(item: u16) -> Option<bool> {
    facet_of_item(item).map(|_| REVERSED_ITEMS.contains(&item))
}

pub fn item(id: u16) -> Option<ItemInfo> {
    facet_of_item(id).map(|facet| ItemInfo {
        id,
        facet,
        reversed: REVERSED_ITEMS.contains(&id),
    })
}

pub fn facet(id: &str) -> Option<&'static FacetDef> {
    FACETS.iter().find(|f| f.id == id)
}

pub fn facet_of_item(item: u16) -> Option<&'static FacetDef> {
    FACETS.iter().find(|f| f.items.contains(&item))
}

pub fn domain(id: &str) -> Option<&'static DomainDef> {
    DOMAINS.iter().find(|d| d.id == id)
}

pub fn domain_of_facet(facet_id: &str) -> Option<&'static DomainDef> {
    DOMAINS.iter().find(|d| d.facets.contains(&facet_id))
}
