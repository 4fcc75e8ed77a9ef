use geo::Point;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::fields::Field;

/// One output record. Only fields whose column was present in the sheet are
/// set; `lon`/`lat` only once the address has been geocoded.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub name: Option<String>,
    pub description: Option<String>,
    pub addr: Option<String>,
    pub lon: Option<f64>,
    pub lat: Option<f64>,
    pub menu: Option<String>,
    pub takeaway: Option<String>,
    pub delivery: Option<String>,
    pub phone: Option<String>,
    pub opening_hours: Option<String>,
    pub close_day: Option<String>,
    pub payment: Option<String>,
    pub website: Option<String>,
    pub sns: Option<String>,
    pub transportation: Option<String>,
    pub category: Option<String>,
    pub genre: Option<String>,
    pub note: Option<String>,
    pub area: Option<String>,
    pub diet: Option<String>,
}

impl Venue {
    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Description => &mut self.description,
            Field::Address => &mut self.addr,
            Field::Menu => &mut self.menu,
            Field::Takeaway => &mut self.takeaway,
            Field::Delivery => &mut self.delivery,
            Field::Phone => &mut self.phone,
            Field::OpeningHours => &mut self.opening_hours,
            Field::CloseDay => &mut self.close_day,
            Field::Payment => &mut self.payment,
            Field::Website => &mut self.website,
            Field::Sns => &mut self.sns,
            Field::Transportation => &mut self.transportation,
            Field::Category => &mut self.category,
            Field::Genre => &mut self.genre,
            Field::Note => &mut self.note,
            Field::Area => &mut self.area,
            Field::Diet => &mut self.diet,
        };
        *slot = Some(value);
    }

    #[cfg(test)]
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Description => self.description.as_deref(),
            Field::Address => self.addr.as_deref(),
            Field::Menu => self.menu.as_deref(),
            Field::Takeaway => self.takeaway.as_deref(),
            Field::Delivery => self.delivery.as_deref(),
            Field::Phone => self.phone.as_deref(),
            Field::OpeningHours => self.opening_hours.as_deref(),
            Field::CloseDay => self.close_day.as_deref(),
            Field::Payment => self.payment.as_deref(),
            Field::Website => self.website.as_deref(),
            Field::Sns => self.sns.as_deref(),
            Field::Transportation => self.transportation.as_deref(),
            Field::Category => self.category.as_deref(),
            Field::Genre => self.genre.as_deref(),
            Field::Note => self.note.as_deref(),
            Field::Area => self.area.as_deref(),
            Field::Diet => self.diet.as_deref(),
        }
    }

    /// Stores a geocoded position. `x` is longitude, `y` latitude.
    pub fn locate(&mut self, point: Point) {
        self.lon = Some(point.x());
        self.lat = Some(point.y());
    }
}
