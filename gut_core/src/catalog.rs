//! # Seed Catalog
//!
//! The fixed list of 12 candidate actions and their initial G, U, T scores,
//! compiled into the binary. A session copies this table once into its
//! [`Worksheet`](crate::worksheet::Worksheet); the table itself is never
//! mutated.

use crate::action::{Action, ActionId, GutScores};

/// Number of actions in the seed catalog
pub const SEED_LEN: usize = 12;

/// `(id, label, gravity, urgency, trend)` for every seeded action, in id order.
pub const SEED_ACTIONS: [(u32, &str, u8, u8, u8); SEED_LEN] = [
    (1, "Oferecer planos de financiamento e parcelamento facilitado", 5, 5, 4),
    (2, "Desenvolver pacotes integrados (embriões + consultoria técnica especializada)", 5, 4, 5),
    (3, "Parcerias estratégicas com laboratórios veterinários locais + central de suporte remoto", 5, 4, 5),
    (4, "Oferta de embriões congelados de alta qualidade com garantia de viabilidade", 5, 4, 4),
    (5, "Promover treinamentos e workshops focados em manejo reprodutivo", 4, 4, 5),
    (6, "Desenvolver plataformas digitais para acompanhar ciclo reprodutivo e enviar alertas", 4, 5, 5),
    (7, "Investir em técnicas avançadas de congelamento/descongelamento", 5, 4, 4),
    (8, "Oferecer descontos progressivos, programas de fidelidade e benefícios por indicação", 4, 4, 4),
    (9, "Comercializar embriões de alta qualidade genética (maior potencial de concepção)", 5, 4, 5),
    (10, "Desenvolver embriões adaptados às condições locais + linhas customizadas para diferentes perfis de produtores", 4, 3, 4),
    (11, "Análise criteriosa das receptoras para seleção das melhores candidatas", 4, 4, 5),
    (12, "Divulgar estudos de caso e resultados reais", 3, 3, 4),
];

/// Build the initial snapshot of the catalog, in id order.
pub fn seed_catalog() -> Vec<Action> {
    SEED_ACTIONS
        .iter()
        .map(|&(id, label, g, u, t)| {
            Action::new(ActionId(id), label, GutScores::from_values(g.into(), u.into(), t.into()))
        })
        .collect()
}

/// Initial scores of a seeded action, if the id exists.
pub fn seed_scores(id: ActionId) -> Option<GutScores> {
    SEED_ACTIONS
        .iter()
        .find(|(seed_id, ..)| *seed_id == id.0)
        .map(|&(_, _, g, u, t)| GutScores::from_values(g.into(), u.into(), t.into()))
}
