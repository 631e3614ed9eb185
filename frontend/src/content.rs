//! Literal copy and tables the page is rendered from.

use crate::components::icon::IconName;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionId {
    Hero,
    Description,
    Screenshots,
    About,
    Support,
}

impl SectionId {
    pub const fn id(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Description => "description",
            SectionId::Screenshots => "screenshots",
            SectionId::About => "about",
            SectionId::Support => "support",
        }
    }

    pub const fn anchor(self) -> &'static str {
        match self {
            SectionId::Hero => "#hero",
            SectionId::Description => "#description",
            SectionId::Screenshots => "#screenshots",
            SectionId::About => "#about",
            SectionId::Support => "#support",
        }
    }
}

pub struct NavItem {
    pub label: &'static str,
    pub target: SectionId,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Обзор", target: SectionId::Hero },
    NavItem { label: "Описание", target: SectionId::Description },
    NavItem { label: "Скриншоты", target: SectionId::Screenshots },
    NavItem { label: "О нас", target: SectionId::About },
    NavItem { label: "Поддержите нас", target: SectionId::Support },
];

pub const LOGIN_LABEL: &str = "Войти";

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: &[Stat] = &[
    Stat { value: "10K+", label: "Игроков" },
    Stat { value: "500+", label: "Матчей в день" },
    Stat { value: "4.9★", label: "Рейтинг" },
];

pub const HERO_HEADLINE: &[&str] = &["МЫ ВЕРИМ,", "ЧТО СИЛА", "ИГРЫ В", "СООБЩЕСТВЕ"];

/// Index of the headline line drawn with the gradient.
pub const HERO_ACCENT_LINE: usize = 2;

pub const MARQUEE_TEXT: &str = "VOLLEYHUB · ИГРАЙ · ПОБЕЖДАЙ · СОРЕВНУЙСЯ · СОЗДАВАЙ КОМАНДЫ · ";
pub const MARQUEE_REPEAT: usize = 8;

pub struct Feature {
    pub icon: IconName,
    pub text: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature { icon: IconName::Users, text: "Мультиплеер до 12 игроков" },
    Feature { icon: IconName::Trophy, text: "Ежемесячные турниры" },
    Feature { icon: IconName::Zap, text: "Реалистичная физика" },
    Feature { icon: IconName::Star, text: "Система прокачки" },
];

pub struct CommunityCard {
    pub icon: IconName,
    pub title: &'static str,
    pub desc: &'static str,
    pub badge: &'static str,
}

pub const COMMUNITY_CARDS: &[CommunityCard] = &[
    CommunityCard {
        icon: IconName::Mic,
        title: "Форум игроков",
        desc: "Обсуждай тактику, делись опытом, находи команду",
        badge: "Популярное",
    },
    CommunityCard {
        icon: IconName::Bell,
        title: "Анонсы апдейтов",
        desc: "Первым узнавай о новых фичах и патчах",
        badge: "Новое",
    },
    CommunityCard {
        icon: IconName::Award,
        title: "Турниры",
        desc: "Участвуй в официальных и сезонных турнирах",
        badge: "Скоро",
    },
];

pub const TEAM_TAGS: &[&str] = &["Геймдизайн", "Backend", "3D Art", "Сообщество"];

/// Colour scheme of a support card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Purple,
    Neutral,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Accent::Blue => "accent-blue",
            Accent::Purple => "accent-purple",
            Accent::Neutral => "accent-neutral",
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct SupportTier {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub emoji: &'static str,
    pub accent: Accent,
    pub perks: &'static [&'static str],
    pub popular: bool,
}

pub const SUPPORT_TIERS: &[SupportTier] = &[
    SupportTier {
        name: "Supporter Pack",
        price: "299 ₽",
        period: "/мес",
        emoji: "🎯",
        accent: Accent::Blue,
        perks: &[
            "Роль Supporter в Discord",
            "Доступ к закрытому каналу",
            "Ранние анонсы",
            "Ник в списке патронов",
        ],
        popular: false,
    },
    SupportTier {
        name: "Founder Pack",
        price: "999 ₽",
        period: "/мес",
        emoji: "👑",
        accent: Accent::Purple,
        perks: &[
            "Роль Founder в Discord",
            "Ранний доступ к бете",
            "Эксклюзивный скин игрока",
            "Голос при разработке",
            "Ежемесячный Q&A с командой",
        ],
        popular: true,
    },
    SupportTier {
        name: "Любая сумма",
        price: "Сам решаю",
        period: "",
        emoji: "💫",
        accent: Accent::Neutral,
        perks: &[
            "Роль Donator в Discord",
            "Спасибо от команды",
            "Упоминание в патч-ноутах",
        ],
        popular: false,
    },
];

pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [&'static str],
}

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        title: "Company",
        links: &["О нас", "Команда", "Карьера", "Блог"],
    },
    FooterColumn {
        title: "Product",
        links: &["Обзор", "Геймплей", "Патч-ноуты", "Дорожная карта"],
    },
    FooterColumn {
        title: "Legal",
        links: &["Конфиденциальность", "Условия использования", "Cookie"],
    },
];

pub const LEGAL_LINKS: &[&str] = &["Политика конфиденциальности", "Условия использования"];

pub const COPYRIGHT: &str = "© 2025 VolleyHub.Fun — Singular Games. Все права защищены.";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const ALL_SECTIONS: [SectionId; 5] = [
        SectionId::Hero,
        SectionId::Description,
        SectionId::Screenshots,
        SectionId::About,
        SectionId::Support,
    ];

    #[test]
    fn nav_reaches_every_section_once() {
        let targets: Vec<SectionId> = NAV_ITEMS.iter().map(|item| item.target).collect();
        assert_eq!(targets, ALL_SECTIONS.to_vec());
    }

    #[test]
    fn anchors_point_at_ids() {
        for section in ALL_SECTIONS {
            assert_eq!(section.anchor(), format!("#{}", section.id()));
        }
        let ids: HashSet<&str> = ALL_SECTIONS.iter().map(|s| s.id()).collect();
        assert_eq!(ids.len(), ALL_SECTIONS.len());
    }

    #[test]
    fn exactly_one_popular_tier() {
        let popular: Vec<&str> = SUPPORT_TIERS
            .iter()
            .filter(|tier| tier.popular)
            .map(|tier| tier.name)
            .collect();
        assert_eq!(popular, vec!["Founder Pack"]);
    }

    #[test]
    fn every_tier_lists_perks() {
        assert!(SUPPORT_TIERS.iter().all(|tier| !tier.perks.is_empty()));
    }

    #[test]
    fn list_keys_are_unique() {
        let features: HashSet<&str> = FEATURES.iter().map(|f| f.text).collect();
        assert_eq!(features.len(), FEATURES.len());
        let cards: HashSet<&str> = COMMUNITY_CARDS.iter().map(|c| c.title).collect();
        assert_eq!(cards.len(), COMMUNITY_CARDS.len());
        let columns: HashSet<&str> = FOOTER_COLUMNS.iter().map(|c| c.title).collect();
        assert_eq!(columns.len(), FOOTER_COLUMNS.len());
    }

    #[test]
    fn accent_line_is_in_headline() {
        assert!(HERO_ACCENT_LINE < HERO_HEADLINE.len());
    }
}
