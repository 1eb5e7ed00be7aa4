//! Cross-system correspondence resolver.
//!
//! Starting from one card, gathers its Tree of Life Path and the two
//! Sephiroth that Path joins, any planet or zodiac sign named by the card's
//! astrology field, and the signs that share the card's element. Every
//! sub-lookup is optional: a miss leaves its field out of the result.

use serde::Serialize;
use sqlx::SqliteConnection;

use crate::astrology;
use crate::cards;
use crate::error::LookupResult;
use crate::models::{Card, PathView, Planet, Sephirah, SignByElement, ZodiacSign};
use crate::qabalah;

#[derive(Debug, Clone, Serialize)]
pub struct ConnectedSephiroth {
    pub from: Sephirah,
    pub to: Sephirah,
}

/// The astrology field may name a planet, a sign, or (in principle) both.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AstrologyLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planet: Option<Planet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zodiac_sign: Option<ZodiacSign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ruling_planet: Option<Planet>,
}

impl AstrologyLinks {
    fn is_empty(&self) -> bool {
        self.planet.is_none() && self.zodiac_sign.is_none() && self.ruling_planet.is_none()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Correspondences {
    pub card: Card,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qabalah_path: Option<PathView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connected_sephiroth: Option<ConnectedSephiroth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub astrology: Option<AstrologyLinks>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elemental_zodiac: Option<Vec<SignByElement>>,
}

pub async fn resolve(conn: &mut SqliteConnection, number: i64) -> LookupResult<Correspondences> {
    let card = cards::get_card(conn, number, false).await?;

    let mut qabalah_path = None;
    let mut connected_sephiroth = None;
    if card.is_major() {
        if let Some(path) = qabalah::path_for_card(conn, card.id).await? {
            let from = qabalah::find_sephirah(conn, path.connects_from).await?;
            let to = qabalah::find_sephirah(conn, path.connects_to).await?;
            if let (Some(from), Some(to)) = (from, to) {
                connected_sephiroth = Some(ConnectedSephiroth { from, to });
            }
            qabalah_path = Some(path);
        }
    }

    let mut links = AstrologyLinks::default();
    if let Some(name) = card.astrology.as_deref() {
        // Planet and sign are tried independently against the same text.
        links.planet = astrology::find_planet(conn, name).await?;
        if let Some(sign) = astrology::find_sign(conn, name).await? {
            links.ruling_planet = astrology::find_planet(conn, &sign.ruling_planet).await?;
            links.zodiac_sign = Some(sign);
        }
    }
    let astrology_links = (!links.is_empty()).then_some(links);

    let elemental_zodiac = match card.element.as_deref() {
        Some(element) => {
            let signs = astrology::signs_by_element(conn, element).await?;
            (!signs.is_empty()).then_some(signs)
        }
        None => None,
    };

    Ok(Correspondences {
        card,
        qabalah_path,
        connected_sephiroth,
        astrology: astrology_links,
        elemental_zodiac,
    })
}
