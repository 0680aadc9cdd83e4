use crate::views::tabs::TabLabel;

/// Kind of partner space that hosts book exchanges.
#[derive(strum::EnumCount, strum::EnumIter, Debug, PartialEq, Eq, Clone, Copy)]
pub enum PartnerKind {
    Cafe,
    Livraria,
    Biblioteca,
    EspacoCultural,
}

impl TabLabel for PartnerKind {
    fn loc_key(&self) -> &'static str {
        match self {
            PartnerKind::Cafe => "partner-kind-cafe",
            PartnerKind::Livraria => "partner-kind-livraria",
            PartnerKind::Biblioteca => "partner-kind-biblioteca",
            PartnerKind::EspacoCultural => "partner-kind-espaco",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            PartnerKind::Cafe => "☕",
            PartnerKind::Livraria => "📚",
            PartnerKind::Biblioteca => "🏛",
            PartnerKind::EspacoCultural => "🎭",
        }
    }
}

/// Forum discussion category.
#[derive(strum::EnumCount, strum::EnumIter, Debug, PartialEq, Eq, Clone, Copy)]
pub enum ForumCategory {
    Livros,
    Locais,
    Eventos,
    Geral,
}

impl TabLabel for ForumCategory {
    fn loc_key(&self) -> &'static str {
        match self {
            ForumCategory::Livros => "forum-category-livros",
            ForumCategory::Locais => "forum-category-locais",
            ForumCategory::Eventos => "forum-category-eventos",
            ForumCategory::Geral => "forum-category-geral",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ForumCategory::Livros => "📖",
            ForumCategory::Locais => "📍",
            ForumCategory::Eventos => "📅",
            ForumCategory::Geral => "💬",
        }
    }
}

/// Profile page sections.
#[derive(strum::EnumIter, Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum ProfileSection {
    #[default]
    Dados,
    Preferencias,
}

impl TabLabel for ProfileSection {
    fn loc_key(&self) -> &'static str {
        match self {
            ProfileSection::Dados => "profile-tab-dados",
            ProfileSection::Preferencias => "profile-tab-preferencias",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ProfileSection::Dados => "👤",
            ProfileSection::Preferencias => "⚙",
        }
    }
}

/// Feedback toast severity; mirrors the success/error/info palette of the
/// web front end.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn color(&self) -> eframe::egui::Color32 {
        use eframe::egui::Color32;
        match self {
            ToastKind::Success => Color32::from_rgb(16, 185, 129),
            ToastKind::Error => Color32::from_rgb(239, 68, 68),
            ToastKind::Info => Color32::from_rgb(59, 130, 246),
        }
    }
}
