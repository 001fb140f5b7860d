//! Reverse geocoding
//!
//! Turns scan coordinates into a short human-readable address via the
//! geocode.maps.co reverse endpoint. The API key is read from local storage
//! (`duty_track_geocode_key`) or baked in at build time through the
//! `DUTY_TRACK_GEOCODE_KEY` env var. Every failure path falls back to the
//! plain `"lat, long"` string so the tables always have something to show.

use gloo_net::http::Request;
use serde::Deserialize;

const GEOCODE_KEY_STORAGE: &str = "duty_track_geocode_key";
const GEOCODE_URL: &str = "https://geocode.maps.co/reverse";

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    address: Option<Address>,
}

#[derive(Debug, Default, Deserialize)]
struct Address {
    #[serde(default)]
    road: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    town: Option<String>,
    #[serde(default)]
    village: Option<String>,
    #[serde(default)]
    country: Option<String>,
}

/// `road, city|town|village, country` with empty parts skipped. `None` when
/// nothing usable came back.
fn format_address(address: &Address) -> Option<String> {
    let locality = address
        .city
        .as_deref()
        .or(address.town.as_deref())
        .or(address.village.as_deref());

    let parts: Vec<&str> = [address.road.as_deref(), locality, address.country.as_deref()]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

fn api_key() -> Option<String> {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(GEOCODE_KEY_STORAGE).ok().flatten())
        .filter(|key| !key.is_empty());
    stored.or_else(|| option_env!("DUTY_TRACK_GEOCODE_KEY").map(str::to_string))
}

/// Resolve coordinates to an address, falling back to `"lat, long"`.
pub async fn reverse_geocode(lat: &str, long: &str) -> String {
    let fallback = format!("{}, {}", lat, long);

    let Some(key) = api_key() else {
        web_sys::console::error_1(&"API key for geocoding is missing.".into());
        return fallback;
    };

    let url = format!(
        "{}?lat={}&lon={}&api_key={}",
        GEOCODE_URL, lat, long, key
    );

    let response = match Request::get(&url).send().await {
        Ok(response) if response.ok() => response,
        _ => return fallback,
    };

    match response.json::<ReverseResponse>().await {
        Ok(body) => body
            .address
            .as_ref()
            .and_then(format_address)
            .unwrap_or(fallback),
        Err(_) => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_full_address() {
        let body: ReverseResponse = serde_json::from_str(
            r#"{"address": {"road": "Station Road", "town": "Shamli", "country": "India"}}"#,
        )
        .unwrap();
        assert_eq!(
            format_address(&body.address.unwrap()).unwrap(),
            "Station Road, Shamli, India"
        );
    }

    #[test]
    fn test_city_beats_town_and_village() {
        let address = Address {
            city: Some("Meerut".to_string()),
            town: Some("Shamli".to_string()),
            village: Some("Babri".to_string()),
            ..Default::default()
        };
        assert_eq!(format_address(&address).unwrap(), "Meerut");
    }

    #[test]
    fn test_missing_parts_are_skipped() {
        let address = Address {
            village: Some("Babri".to_string()),
            country: Some("India".to_string()),
            ..Default::default()
        };
        assert_eq!(format_address(&address).unwrap(), "Babri, India");
    }

    #[test]
    fn test_empty_address_yields_none() {
        assert!(format_address(&Address::default()).is_none());

        let body: ReverseResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(body.address.is_none());
    }
}
