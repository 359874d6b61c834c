// Embedded museum catalog

use log::warn;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::MuseumMapError;
use crate::geo::Coordinate;

/// A named point of interest, used both as a map marker and a list entry
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Place {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub coordinate: Coordinate,
}

impl Place {
    pub fn new(name: &str, address: &str, coordinate: Coordinate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            address: address.to_string(),
            coordinate,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Catalog {
    places: Vec<Place>,
}

impl Catalog {
    pub fn new(places: Vec<Place>) -> Self {
        Self { places }
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    pub fn find(&self, id: Uuid) -> Option<&Place> {
        self.places.iter().find(|p| p.id == id)
    }

    pub fn get(&self, index: usize) -> Result<&Place, MuseumMapError> {
        self.places
            .get(index)
            .ok_or(MuseumMapError::UnknownPlace { index })
    }

    /// Like `get`, but an out of range index selects the first place.
    /// `None` only for an empty catalog.
    pub fn get_or_first(&self, index: usize) -> Option<&Place> {
        match self.get(index) {
            Ok(place) => Some(place),
            Err(e) => {
                warn!("{}, selecting the first place instead", e);
                self.places.first()
            }
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        museum_catalog()
    }
}

/// The three Kaliningrad museums shipped with the app
pub fn museum_catalog() -> Catalog {
    Catalog::new(vec![
        Place::new(
            "Музей Мирового океана",
            "г. Калининград, набережная Петра Великого, 1 - 9",
            Coordinate::new(54.7041, 20.5077),
        ),
        Place::new(
            "Музей янтаря",
            "г. Калининград, ул. Фрунзе, 112",
            Coordinate::new(54.7029, 20.5154),
        ),
        Place::new(
            "Башня Дона",
            "г. Калининград, Литовский вал, 107",
            Coordinate::new(54.7097, 20.5083),
        ),
    ])
}
