//! Landing page route handler.
//!
//! All section content is static; the handler only assembles view models
//! and attaches reveal settings to the blocks that animate. The about
//! panels and the two staggered grids reveal on scroll, villa and
//! destination cards render without animation, as designed.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::content::{
    self, AboutCrypto, AboutIntro, CollectionCard, Destination, Hero, SectionHeading, TravelCard,
    Villa,
};
use crate::filters;
use crate::reveal::{Reveal, RevealDirection};
use crate::routes::PageChrome;

// =============================================================================
// Section Views
// =============================================================================

/// The two about panels with their reveal settings.
pub struct AboutView {
    pub intro_reveal: Reveal,
    pub intro: &'static AboutIntro,
    pub crypto_reveal: Reveal,
    pub crypto: &'static AboutCrypto,
}

/// A collection card with its position-derived reveal settings.
pub struct CollectionCellView {
    pub reveal: Reveal,
    pub card: &'static CollectionCard,
}

/// A travel world card with its position-derived reveal settings.
pub struct TravelCellView {
    pub reveal: Reveal,
    pub card: &'static TravelCard,
}

/// Landing page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub chrome: PageChrome,
    pub hero: &'static Hero,
    pub about: AboutView,
    pub villas_heading: &'static SectionHeading,
    pub villas: &'static [Villa],
    pub collections_heading: &'static SectionHeading,
    pub collections_cta: &'static str,
    pub collection_columns: Vec<Vec<CollectionCellView>>,
    pub destinations_heading: &'static SectionHeading,
    pub destinations: &'static [Destination],
    pub travel_heading: &'static SectionHeading,
    pub travel_columns: Vec<Vec<TravelCellView>>,
}

impl HomeTemplate {
    /// Assemble the full landing page view.
    #[must_use]
    pub fn build() -> Self {
        Self {
            chrome: PageChrome::new(),
            hero: &content::HERO,
            about: about_view(),
            villas_heading: &content::POPULAR_VILLAS_HEADING,
            villas: content::VILLAS,
            collections_heading: &content::COLLECTIONS_HEADING,
            collections_cta: content::COLLECTIONS_CTA,
            collection_columns: staggered_columns(content::COLLECTION_COLUMNS, |reveal, card| {
                CollectionCellView { reveal, card }
            }),
            destinations_heading: &content::DESTINATIONS_HEADING,
            destinations: content::DESTINATIONS,
            travel_heading: &content::TRAVEL_HEADING,
            travel_columns: staggered_columns(content::TRAVEL_COLUMNS, |reveal, card| {
                TravelCellView { reveal, card }
            }),
        }
    }
}

/// The two about panels: intro slides up immediately, the crypto payment
/// panel slides down 200 ms later.
fn about_view() -> AboutView {
    AboutView {
        intro_reveal: Reveal::new(0, RevealDirection::Up),
        intro: &content::ABOUT_INTRO,
        crypto_reveal: Reveal::new(200, RevealDirection::Down),
        crypto: &content::ABOUT_CRYPTO,
    }
}

/// Attach position-derived reveals to a column grid of cards.
fn staggered_columns<T: 'static, V>(
    columns: &'static [&'static [T]],
    make: impl Fn(Reveal, &'static T) -> V,
) -> Vec<Vec<V>> {
    columns
        .iter()
        .zip(0u32..)
        .map(|(cards, column)| {
            cards
                .iter()
                .zip(0u32..)
                .map(|(card, row)| make(Reveal::staggered(column, row), card))
                .collect()
        })
        .collect()
}

/// Display the landing page.
#[instrument]
pub async fn home() -> impl IntoResponse {
    HomeTemplate::build()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_about_panels_mirror_design() {
        let about = about_view();
        assert_eq!(about.intro_reveal.delay_ms(), 0);
        assert_eq!(about.intro_reveal.direction(), RevealDirection::Up);
        assert_eq!(about.crypto_reveal.delay_ms(), 200);
        assert_eq!(about.crypto_reveal.direction(), RevealDirection::Down);
    }

    #[test]
    fn test_collection_cells_cascade() {
        let view = HomeTemplate::build();
        assert_eq!(view.collection_columns.len(), 2);

        // First column slides up, second slides down, rows add 150 ms.
        assert_eq!(view.collection_columns[0][0].reveal.delay_ms(), 0);
        assert_eq!(view.collection_columns[0][1].reveal.delay_ms(), 150);
        assert_eq!(view.collection_columns[1][0].reveal.delay_ms(), 100);
        assert_eq!(
            view.collection_columns[1][0].reveal.direction(),
            RevealDirection::Down
        );
    }

    #[test]
    fn test_travel_grid_covers_six_regions() {
        let view = HomeTemplate::build();
        let cells: usize = view.travel_columns.iter().map(Vec::len).sum();
        assert_eq!(cells, 6);
    }

    #[test]
    fn test_home_renders_brand_and_sections() {
        let html = HomeTemplate::build().render().unwrap();
        assert!(html.contains("Prime villa"));
        assert!(html.contains("Поиск"));
        assert!(html.contains("La Palmeraie Asian House"));
        assert!(html.contains("Бали"));
        assert!(html.contains("data-reveal-direction=\"down\""));
    }
}
