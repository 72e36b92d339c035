use serde::{Deserialize, Deserializer, Serialize};

use crate::models::review::Review;

/// A rentable listing as returned by `/api/places` and `/api/places/{id}`.
///
/// Only `id` is mandatory. Absent or `null` optional fields decode to `None`
/// or an empty list; a field of the wrong JSON type fails the whole decode.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Place {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub price_per_night: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub amenities: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub reviews: Vec<Review>,
}

/// Shown wherever a place field is missing.
pub const PLACEHOLDER: &str = "—";

impl Place {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Place")
    }

    /// Nightly price without currency sign, or the placeholder.
    pub fn price_text(&self) -> String {
        self.price_per_night
            .map(|price| price.to_string())
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    }

    pub fn amenities_text(&self) -> String {
        if self.amenities.is_empty() {
            "No amenities listed".to_string()
        } else {
            self.amenities.join(", ")
        }
    }
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decodes the body of `GET /api/places`. A `null` body is an empty list.
pub fn decode_place_list(body: &str) -> Result<Vec<Place>, serde_json::Error> {
    Ok(serde_json::from_str::<Option<Vec<Place>>>(body)?.unwrap_or_default())
}
