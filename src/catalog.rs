// Sample catalog the client runs against while the platform has no
// backend: partner spaces, their events and the forum discussions, plus
// the pure matching rules used by search and tab filtering.

use crate::types::{ForumCategory, PartnerKind};

pub struct Partner {
    pub id: u32,
    pub name: &'static str,
    pub kind: PartnerKind,
    pub location: &'static str,
    pub description: &'static str,
    /// Photos shown in the detail gallery (rendered as generated slides
    /// until real imagery lands).
    pub photo_count: usize,
    pub rating: f32,
    pub tags: &'static [&'static str],
    pub events: &'static [PartnerEvent],
}

pub struct PartnerEvent {
    pub id: u32,
    pub title: &'static str,
    pub date_label: &'static str,
}

pub struct Discussion {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub author: &'static str,
    pub category: ForumCategory,
    pub replies: u32,
    pub posted_label: &'static str,
}

static PARTNERS: &[Partner] = &[
    Partner {
        id: 1,
        name: "Café Cultura",
        kind: PartnerKind::Cafe,
        location: "Rua Principal, 120 — Centro",
        description: "Café de bairro com estante comunitária ao lado do balcão. \
            Deixe um livro, leve outro, e fique para um cafezinho coado.",
        photo_count: 4,
        rating: 4.8,
        tags: &["wi-fi", "estante comunitária", "pet friendly"],
        events: &[
            PartnerEvent {
                id: 101,
                title: "Clube do livro: literatura brasileira",
                date_label: "Sáb, 15 de agosto · 16h",
            },
            PartnerEvent {
                id: 102,
                title: "Troca-troca de romances",
                date_label: "Dom, 23 de agosto · 10h",
            },
        ],
    },
    Partner {
        id: 2,
        name: "Livraria Páginas Soltas",
        kind: PartnerKind::Livraria,
        location: "Av. das Flores, 58 — Bom Fim",
        description: "Sebo e livraria independente; a prateleira da vitrine é \
            reservada para os livros liberados pela comunidade.",
        photo_count: 5,
        rating: 4.6,
        tags: &["sebo", "autores locais"],
        events: &[PartnerEvent {
            id: 103,
            title: "Sarau de poesia",
            date_label: "Sex, 21 de agosto · 19h",
        }],
    },
    Partner {
        id: 3,
        name: "Biblioteca do Bairro",
        kind: PartnerKind::Biblioteca,
        location: "Praça da Árvore, s/n — Jardim",
        description: "Biblioteca comunitária mantida por voluntários. Ponto \
            oficial de check-in com mural de recados entre leitores.",
        photo_count: 3,
        rating: 4.9,
        tags: &["infantil", "estudo", "voluntários"],
        events: &[PartnerEvent {
            id: 104,
            title: "Hora do conto para crianças",
            date_label: "Sáb, 15 de agosto · 10h",
        }],
    },
    Partner {
        id: 4,
        name: "Casa Mundo das Artes",
        kind: PartnerKind::EspacoCultural,
        location: "Rua do Teatro, 7 — Centro Histórico",
        description: "Centro cultural com oficinas, exposições e uma geladeiroteca \
            na entrada: uma geladeira antiga cheia de livros livres.",
        photo_count: 6,
        rating: 4.5,
        tags: &["oficinas", "geladeiroteca", "exposições"],
        events: &[
            PartnerEvent {
                id: 105,
                title: "Oficina de encadernação artesanal",
                date_label: "Qua, 19 de agosto · 18h30",
            },
            PartnerEvent {
                id: 106,
                title: "Feira de troca de livros",
                date_label: "Dom, 30 de agosto · 9h",
            },
        ],
    },
    Partner {
        id: 5,
        name: "Café Entrelinhas",
        kind: PartnerKind::Cafe,
        location: "Rua das Acácias, 233 — Vila Nova",
        description: "Cafeteria silenciosa pensada para leitura, com mesas \
            individuais e empréstimo informal de marcadores de página.",
        photo_count: 3,
        rating: 4.3,
        tags: &["silencioso", "leitura"],
        events: &[],
    },
    Partner {
        id: 6,
        name: "Livraria & Bistrô Capítulo Dois",
        kind: PartnerKind::Livraria,
        location: "Alameda dos Ipês, 90 — Moinhos",
        description: "Livraria com bistrô nos fundos; todo livro da comunidade \
            devolvido ali rende um desconto no café da tarde.",
        photo_count: 4,
        rating: 4.4,
        tags: &["bistrô", "desconto leitor"],
        events: &[PartnerEvent {
            id: 107,
            title: "Noite de lançamento: autores da cidade",
            date_label: "Qui, 27 de agosto · 19h30",
        }],
    },
    Partner {
        id: 7,
        name: "Biblioteca Parque Leitura",
        kind: PartnerKind::Biblioteca,
        location: "Parque Municipal, portão 3",
        description: "Quiosque de leitura dentro do parque, com redes, bancos à \
            sombra e estantes abertas de segunda a domingo.",
        photo_count: 5,
        rating: 4.7,
        tags: &["ao ar livre", "família"],
        events: &[PartnerEvent {
            id: 108,
            title: "Piquenique literário",
            date_label: "Dom, 16 de agosto · 11h",
        }],
    },
    Partner {
        id: 8,
        name: "Estação Criativa",
        kind: PartnerKind::EspacoCultural,
        location: "Antiga estação férrea — Distrito Criativo",
        description: "Galpão multiuso com coworking, palco aberto e um vagão \
            restaurado que funciona como ponto de liberação de livros.",
        photo_count: 4,
        rating: 4.2,
        tags: &["coworking", "palco aberto"],
        events: &[],
    },
];

static DISCUSSIONS: &[Discussion] = &[
    Discussion {
        id: 1,
        title: "Qual foi o melhor livro que você encontrou por acaso?",
        excerpt: "Achei um exemplar de Grande Sertão: Veredas no Café Cultura com \
            anotações lindas nas margens. Quero ouvir histórias parecidas!",
        author: "Mariana Lopes",
        category: ForumCategory::Livros,
        replies: 23,
        posted_label: "há 2 horas",
    },
    Discussion {
        id: 2,
        title: "Novo ponto de liberação no Parque Municipal",
        excerpt: "O quiosque do portão 3 agora aceita check-in! Fica ao lado das \
            redes de leitura, bem sinalizado.",
        author: "Pedro Amaral",
        category: ForumCategory::Locais,
        replies: 11,
        posted_label: "há 5 horas",
    },
    Discussion {
        id: 3,
        title: "Alguém vai na feira de troca do dia 30?",
        excerpt: "Estou separando uma caixa de ficção científica para levar. Topam \
            combinar um encontro do fórum por lá?",
        author: "Luiza Carvalho",
        category: ForumCategory::Eventos,
        replies: 17,
        posted_label: "ontem",
    },
    Discussion {
        id: 4,
        title: "Etiqueta de check-in: quanto tempo ficar com um livro?",
        excerpt: "Não achei nada nas regras sobre prazo. Vocês costumam liberar o \
            livro de novo em quantas semanas?",
        author: "Rafael Nunes",
        category: ForumCategory::Geral,
        replies: 34,
        posted_label: "há 2 dias",
    },
    Discussion {
        id: 5,
        title: "Resenha coletiva: Torto Arado",
        excerpt: "O exemplar WBS-2041 já passou por seis leitores. Que tal cada um \
            deixar aqui um parágrafo de impressão?",
        author: "Mariana Lopes",
        category: ForumCategory::Livros,
        replies: 41,
        posted_label: "há 3 dias",
    },
    Discussion {
        id: 6,
        title: "Sarau da Páginas Soltas foi demais",
        excerpt: "Quem perdeu, a livraria gravou tudo. Próxima edição em setembro — \
            fica o convite para o pessoal do fórum.",
        author: "Camila Duarte",
        category: ForumCategory::Eventos,
        replies: 8,
        posted_label: "há 4 dias",
    },
    Discussion {
        id: 7,
        title: "Livros infantis: onde liberar?",
        excerpt: "Minha filha cresceu e temos uns trinta livros infantis em ótimo \
            estado. Qual parceiro tem mais movimento de famílias?",
        author: "João Vitor",
        category: ForumCategory::Locais,
        replies: 15,
        posted_label: "há 5 dias",
    },
    Discussion {
        id: 8,
        title: "Apresentem-se por aqui!",
        excerpt: "Tópico fixo para quem chegou agora: conte de que bairro você é e \
            o que anda lendo.",
        author: "Equipe Encontrei",
        category: ForumCategory::Geral,
        replies: 127,
        posted_label: "há 2 semanas",
    },
];

pub fn partners() -> &'static [Partner] {
    PARTNERS
}

pub fn partner(id: u32) -> Option<&'static Partner> {
    PARTNERS.iter().find(|p| p.id == id)
}

pub fn discussions() -> &'static [Discussion] {
    DISCUSSIONS
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Directory filter: the active kind tab plus a live substring search over
/// name, location and description. An empty query matches everything.
pub fn partner_matches(p: &Partner, kind: Option<PartnerKind>, query: &str) -> bool {
    if let Some(kind) = kind {
        if p.kind != kind {
            return false;
        }
    }
    let query = query.trim().to_lowercase();
    query.is_empty()
        || contains_ignore_case(p.name, &query)
        || contains_ignore_case(p.location, &query)
        || contains_ignore_case(p.description, &query)
}

/// Forum filter: category tab plus substring search over title, excerpt
/// and author.
pub fn discussion_matches(d: &Discussion, category: Option<ForumCategory>, query: &str) -> bool {
    if let Some(category) = category {
        if d.category != category {
            return false;
        }
    }
    let query = query.trim().to_lowercase();
    query.is_empty()
        || contains_ignore_case(d.title, &query)
        || contains_ignore_case(d.excerpt, &query)
        || contains_ignore_case(d.author, &query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cafe_cultura() -> &'static Partner {
        partner(1).unwrap()
    }

    #[test]
    fn empty_query_matches_every_partner() {
        for p in partners() {
            assert!(partner_matches(p, None, ""));
            assert!(partner_matches(p, None, "   "));
        }
    }

    #[test]
    fn query_is_case_insensitive_and_spans_fields() {
        let p = cafe_cultura();
        assert!(partner_matches(p, None, "CULTURA")); // name
        assert!(partner_matches(p, None, "rua principal")); // location
        assert!(partner_matches(p, None, "cafezinho")); // description
        assert!(!partner_matches(p, None, "planetário"));
    }

    #[test]
    fn kind_tab_restricts_matches() {
        let p = cafe_cultura();
        assert!(partner_matches(p, Some(PartnerKind::Cafe), ""));
        assert!(!partner_matches(p, Some(PartnerKind::Biblioteca), ""));
        // Kind and query combine: right kind, wrong query still misses.
        assert!(!partner_matches(p, Some(PartnerKind::Cafe), "planetário"));
    }

    #[test]
    fn discussion_search_covers_author() {
        let d = &discussions()[0];
        assert!(discussion_matches(d, None, "mariana"));
        assert!(discussion_matches(d, Some(ForumCategory::Livros), "sertão"));
        assert!(!discussion_matches(d, Some(ForumCategory::Eventos), "sertão"));
    }

    #[test]
    fn catalog_ids_are_unique() {
        let mut ids: Vec<u32> = partners().iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), partners().len());

        let mut event_ids: Vec<u32> = partners()
            .iter()
            .flat_map(|p| p.events.iter().map(|e| e.id))
            .collect();
        event_ids.sort_unstable();
        event_ids.dedup();
        let total: usize = partners().iter().map(|p| p.events.len()).sum();
        assert_eq!(event_ids.len(), total);
    }

    #[test]
    fn every_partner_has_photos_and_a_sane_rating() {
        for p in partners() {
            assert!(p.photo_count > 0, "{} has no photos", p.name);
            assert!((0.0..=5.0).contains(&p.rating), "{} rating", p.name);
        }
    }
}
