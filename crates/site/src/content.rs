//! Editorial content for the marketing pages.
//!
//! The landing page copy is Russian and changes together with the design,
//! so it lives in code as typed static data instead of a CMS. Templates
//! receive these structures through the view models in [`crate::routes`].

// =============================================================================
// Villa categories
// =============================================================================

/// Marketing category of a villa, shown as a colored badge on cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VillaCategory {
    Unique,
    Beachfront,
    Premium,
    Chalet,
}

impl VillaCategory {
    /// Russian badge label rendered on villa and collection cards.
    #[must_use]
    pub const fn badge_label(self) -> &'static str {
        match self {
            Self::Unique => "Уникальные",
            Self::Beachfront => "Берег моря",
            Self::Premium => "Премиум класс",
            Self::Chalet => "Шале",
        }
    }

    /// CSS modifier class that selects the badge color.
    #[must_use]
    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::Unique => "badge-unique",
            Self::Beachfront => "badge-beachfront",
            Self::Premium => "badge-premium",
            Self::Chalet => "badge-chalet",
        }
    }
}

// =============================================================================
// Section content types
// =============================================================================

/// Hero banner copy.
#[derive(Debug, Clone, Copy)]
pub struct Hero {
    pub title_intro: &'static str,
    pub title_highlight: &'static str,
    pub title_rest: &'static str,
    pub rate_note: &'static str,
}

/// Section heading with an accented span inside it.
///
/// `lead` and `trail` may be empty when the accent sits at the start or
/// the end of the heading.
#[derive(Debug, Clone, Copy)]
pub struct SectionHeading {
    pub lead: &'static str,
    pub highlight: &'static str,
    pub trail: &'static str,
    pub subtitle: &'static str,
}

/// First about panel: brand statement next to a wide villa photo.
#[derive(Debug, Clone, Copy)]
pub struct AboutIntro {
    pub heading_highlight: &'static str,
    pub heading_rest: &'static str,
    pub paragraph: &'static str,
    pub image: &'static str,
}

/// Second about panel: crypto payment pitch with currency icons.
#[derive(Debug, Clone, Copy)]
pub struct AboutCrypto {
    pub lead: &'static str,
    pub lead_accent: &'static str,
    pub note: &'static str,
    pub closing: &'static str,
    pub icons: &'static [PaymentIcon],
    pub image: &'static str,
}

/// A payment method icon with its accessible name.
#[derive(Debug, Clone, Copy)]
pub struct PaymentIcon {
    pub src: &'static str,
    pub alt: &'static str,
}

/// A featured villa card.
#[derive(Debug, Clone, Copy)]
pub struct Villa {
    pub name: &'static str,
    pub location: &'static str,
    pub category: VillaCategory,
    pub guests: u32,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub description: &'static str,
    pub image: &'static str,
}

/// A recommended destination card.
#[derive(Debug, Clone, Copy)]
pub struct Destination {
    pub name: &'static str,
    pub villa_count: u32,
    pub image: &'static str,
}

impl Destination {
    /// Russian noun for the villa count, agreeing with the number
    /// ("1 Вилла", "3 Виллы", "580 Вилл").
    #[must_use]
    pub const fn count_noun(&self) -> &'static str {
        match (self.villa_count % 100, self.villa_count % 10) {
            (11..=14, _) => "Вилл",
            (_, 1) => "Вилла",
            (_, 2..=4) => "Виллы",
            _ => "Вилл",
        }
    }
}

/// A card in the villa collections grid.
#[derive(Debug, Clone, Copy)]
pub struct CollectionCard {
    pub category: VillaCategory,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

/// A country card in the travel world grid.
#[derive(Debug, Clone, Copy)]
pub struct TravelCard {
    pub country: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

/// Header navigation link.
#[derive(Debug, Clone, Copy)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Footer link columns and contact block.
#[derive(Debug, Clone, Copy)]
pub struct FooterContent {
    pub collections_heading: &'static str,
    pub collections: &'static [&'static str],
    pub destinations_heading: &'static str,
    pub destinations: &'static [&'static str],
    pub navigation_heading: &'static str,
    pub navigation: &'static [&'static str],
    pub payment_heading: &'static str,
    pub payment_lead: &'static str,
    pub payment_note: &'static str,
    pub crypto_icons: &'static [PaymentIcon],
    pub classic_payment_heading: &'static str,
    pub card_icons: &'static [PaymentIcon],
    pub address_lines: &'static [&'static str],
    pub phone: &'static str,
    pub email: &'static str,
    /// First year of the copyright range; the closing year is rendered
    /// with the `current_year` filter.
    pub copyright_since: u32,
}

// =============================================================================
// Static copy
// =============================================================================

pub static HERO: Hero = Hero {
    title_intro: "Откройте для себя",
    title_highlight: "Prime villa",
    title_rest: "для отдыха в разных уголках мира",
    rate_note: "* Стоимость аренды от 700 EUR",
};

pub static CRYPTO_ICONS: &[PaymentIcon] = &[
    PaymentIcon {
        src: "/static/images/payments/bitcoin.svg",
        alt: "Bitcoin",
    },
    PaymentIcon {
        src: "/static/images/payments/ethereum.svg",
        alt: "Ethereum",
    },
    PaymentIcon {
        src: "/static/images/payments/tether.svg",
        alt: "Tether",
    },
];

pub static CARD_ICONS: &[PaymentIcon] = &[
    PaymentIcon {
        src: "/static/images/payments/mastercard.svg",
        alt: "Mastercard",
    },
    PaymentIcon {
        src: "/static/images/payments/visa.svg",
        alt: "Visa",
    },
];

/// First about panel: slides up with no delay.
pub static ABOUT_INTRO: AboutIntro = AboutIntro {
    heading_highlight: "Prime villa",
    heading_rest: "- это сочетание утончённого отдыха и современных технологий.",
    paragraph: "Мы предлагаем роскошные виллы в самых живописных уголках мира и делаем процесс бронирования максимально удобным.",
    image: "/static/images/about/infinity-pool.jpg",
};

/// Second about panel: slides down 200 ms after the first.
pub static ABOUT_CRYPTO: AboutCrypto = AboutCrypto {
    lead: "Теперь вы можете арендовать виллу не только привычными способами, но и оплатить проживание с помощью криптовалюты -",
    lead_accent: "Bitcoin, Ethereum или Tether",
    note: "Это просто, безопасно и отражает дух времени.",
    closing: "Добро пожаловать в современный формат путешествий с Prime Villa.",
    icons: CRYPTO_ICONS,
    image: "/static/images/about/cliffside-villa.jpg",
};

pub static POPULAR_VILLAS_HEADING: SectionHeading = SectionHeading {
    lead: "Наши самые",
    highlight: "востребованные виллы",
    trail: "",
    subtitle: "Выбор гостей, ценящих комфорт и стиль.",
};

pub static VILLAS: &[Villa] = &[
    Villa {
        name: "La Palmeraie Asian House",
        location: "Багамы",
        category: VillaCategory::Unique,
        guests: 56,
        bedrooms: 33,
        bathrooms: 15,
        description: "На побережье Багам — утончённая роскошь в окружении тропического покоя.",
        image: "/static/images/villas/la-palmeraie-asian-house.jpg",
    },
    Villa {
        name: "Villa Poseidon's Perch",
        location: "Ойл Нат Бэй, Вирджин Горда",
        category: VillaCategory::Beachfront,
        guests: 24,
        bedrooms: 10,
        bathrooms: 7,
        description: "Роскошный \"водный дворец\" на вершине хребта, откуда открываются захватывающие бирюзовые виды на Атлантический океан.",
        image: "/static/images/villas/villa-poseidons-perch.jpg",
    },
    Villa {
        name: "Arnalaya Beach House",
        location: "Чангу, Бали",
        category: VillaCategory::Premium,
        guests: 12,
        bedrooms: 6,
        bathrooms: 15,
        description: "Это божественная резиденция современного дизайна, раскинувшаяся на побережье в окружении тропического великолепия, где утонченная роскошь сочетается с беззаботным ритмом океанских волн.",
        image: "/static/images/villas/arnalaya-beach-house.jpg",
    },
];

pub static DESTINATIONS_HEADING: SectionHeading = SectionHeading {
    lead: "",
    highlight: "Рекомендуемые",
    trail: "направления для вас",
    subtitle: "Откройте для себя лучшие уголки мира.",
};

pub static DESTINATIONS: &[Destination] = &[
    Destination {
        name: "Бали",
        villa_count: 580,
        image: "/static/images/destinations/bali.jpg",
    },
    Destination {
        name: "Мальдивы",
        villa_count: 30,
        image: "/static/images/destinations/maldives.jpg",
    },
    Destination {
        name: "Пхукет",
        villa_count: 110,
        image: "/static/images/destinations/phuket.jpg",
    },
    Destination {
        name: "Коста-Рика",
        villa_count: 20,
        image: "/static/images/destinations/costa-rica.jpg",
    },
];

pub static COLLECTIONS_HEADING: SectionHeading = SectionHeading {
    lead: "От уединённых до премиальных -",
    highlight: "найдите свою виллу",
    trail: "",
    subtitle: "Насладитесь моментом — остальное мы возьмём на себя.",
};

pub static COLLECTIONS_CTA: &str = "Открыть все предложения";

/// Collection cards as displayed: two columns of two cards each.
pub static COLLECTION_COLUMNS: &[&[CollectionCard]] = &[
    &[
        CollectionCard {
            category: VillaCategory::Beachfront,
            title: "Виллы на берегу моря",
            description: "Менее чем в 50 м от пляжа.",
            image: "/static/images/collections/beachfront.jpg",
        },
        CollectionCard {
            category: VillaCategory::Unique,
            title: "Уникальные виллы",
            description: "Аренда виллы с неповторимым дизайном.",
            image: "/static/images/collections/unique.jpg",
        },
    ],
    &[
        CollectionCard {
            category: VillaCategory::Premium,
            title: "Виллы премиум-класса",
            description: "Самые роскошные варианты аренды.",
            image: "/static/images/collections/premium.jpg",
        },
        CollectionCard {
            category: VillaCategory::Chalet,
            title: "Шале",
            description: "Роскошные апартаменты в горах.",
            image: "/static/images/collections/chalet.jpg",
        },
    ],
];

pub static TRAVEL_HEADING: SectionHeading = SectionHeading {
    lead: "",
    highlight: "Мир",
    trail: "наших путешествий",
    subtitle: "От лазурных берегов до экзотических островов — выберите своё направление.",
};

/// Travel world cards as displayed: three columns of two cards each.
pub static TRAVEL_COLUMNS: &[&[TravelCard]] = &[
    &[
        TravelCard {
            country: "Греция",
            description: "Очарование древности и безмятежности.",
            image: "/static/images/travel/greece.jpg",
        },
        TravelCard {
            country: "Франция",
            description: "Романтика, стиль и безупречный вкус жизни.",
            image: "/static/images/travel/france.jpg",
        },
    ],
    &[
        TravelCard {
            country: "Индонезия",
            description: "Баланс природы, роскоши и спокойствия.",
            image: "/static/images/travel/indonesia.jpg",
        },
        TravelCard {
            country: "Таиланд",
            description: "Тропический рай с восточным шармом.",
            image: "/static/images/travel/thailand.jpg",
        },
    ],
    &[
        TravelCard {
            country: "Италия",
            description: "Искусство жить красиво.",
            image: "/static/images/travel/italy.jpg",
        },
        TravelCard {
            country: "Мексика",
            description: "След древних цивилизаций.",
            image: "/static/images/travel/mexico.jpg",
        },
    ],
];

pub static NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "Направления",
        href: "#destinations",
    },
    NavLink {
        label: "О нас",
        href: "#about",
    },
    NavLink {
        label: "Контакты",
        href: "#contacts",
    },
];

pub static LOCALE_LABEL: &str = "RU";

pub static BOOKING_CTA_LABEL: &str = "Бронируй сейчас";
pub static BOOKING_CTA_HREF: &str = "/booking";

pub static FOOTER: FooterContent = FooterContent {
    collections_heading: "Коллекции вилл",
    collections: &[
        "Виллы на берегу моря",
        "Виллы премиум-класса",
        "Уникальные виллы",
        "Шале",
    ],
    destinations_heading: "Направления",
    destinations: &[
        "Греция",
        "Индонезия",
        "Италия",
        "Франция",
        "Таиланд",
        "Мексика",
    ],
    navigation_heading: "Навигация",
    navigation: &[
        "О нас",
        "Контакты",
        "Надежность и безопасность",
        "Правила и условия",
    ],
    payment_heading: "Оплата",
    payment_lead: "Современно, удобно и безопасно",
    payment_note: "Мы принимаем Bitcoin, Ethereum и другие популярные валюты.",
    crypto_icons: CRYPTO_ICONS,
    classic_payment_heading: "Классический способ оплаты",
    card_icons: CARD_ICONS,
    address_lines: &[
        "One Pacific Place | Admiralty | Hong Kong",
        "88 Queensway, 75H8+35",
    ],
    phone: "+852 55162286 | +852 55162286",
    email: "support@primevilla.com",
    copyright_since: 2008,
};

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_three_featured_villas() {
        assert_eq!(VILLAS.len(), 3);
        assert_eq!(VILLAS[0].name, "La Palmeraie Asian House");
        assert_eq!(VILLAS[0].guests, 56);
    }

    #[test]
    fn test_four_destinations() {
        assert_eq!(DESTINATIONS.len(), 4);
        let bali = DESTINATIONS.iter().find(|d| d.name == "Бали").unwrap();
        assert_eq!(bali.villa_count, 580);
    }

    #[test]
    fn test_count_noun_agrees_with_number() {
        let card = |villa_count| Destination {
            name: "Тест",
            villa_count,
            image: "/static/images/destinations/bali.jpg",
        };

        assert_eq!(card(1).count_noun(), "Вилла");
        assert_eq!(card(21).count_noun(), "Вилла");
        assert_eq!(card(3).count_noun(), "Виллы");
        assert_eq!(card(12).count_noun(), "Вилл");
        assert_eq!(card(30).count_noun(), "Вилл");
        assert_eq!(card(110).count_noun(), "Вилл");
        assert_eq!(card(580).count_noun(), "Вилл");
    }

    #[test]
    fn test_collection_grid_is_two_by_two() {
        assert_eq!(COLLECTION_COLUMNS.len(), 2);
        for column in COLLECTION_COLUMNS {
            assert_eq!(column.len(), 2);
        }
    }

    #[test]
    fn test_travel_grid_is_three_by_two() {
        assert_eq!(TRAVEL_COLUMNS.len(), 3);
        for column in TRAVEL_COLUMNS {
            assert_eq!(column.len(), 2);
        }
    }

    #[test]
    fn test_badge_labels() {
        assert_eq!(VillaCategory::Unique.badge_label(), "Уникальные");
        assert_eq!(VillaCategory::Beachfront.badge_label(), "Берег моря");
        assert_eq!(VillaCategory::Premium.badge_label(), "Премиум класс");
        assert_eq!(VillaCategory::Chalet.badge_label(), "Шале");
    }

    #[test]
    fn test_every_card_has_copy() {
        for villa in VILLAS {
            assert!(!villa.description.is_empty());
            assert!(villa.image.starts_with("/static/images/"));
        }
        for column in TRAVEL_COLUMNS {
            for card in *column {
                assert!(!card.description.is_empty());
            }
        }
    }

    #[test]
    fn test_footer_columns() {
        assert_eq!(FOOTER.collections.len(), 4);
        assert_eq!(FOOTER.destinations.len(), 6);
        assert_eq!(FOOTER.navigation.len(), 4);
        assert_eq!(FOOTER.email, "support@primevilla.com");
    }

    #[test]
    fn test_about_panels() {
        assert_eq!(ABOUT_INTRO.heading_highlight, "Prime villa");
        assert_eq!(ABOUT_CRYPTO.lead_accent, "Bitcoin, Ethereum или Tether");
        assert_eq!(ABOUT_CRYPTO.icons.len(), 3);
    }

    #[test]
    fn test_payment_icons_have_alt_text() {
        for icon in CRYPTO_ICONS.iter().chain(CARD_ICONS) {
            assert!(!icon.alt.is_empty());
            assert!(icon.src.ends_with(".svg"));
        }
    }
}
