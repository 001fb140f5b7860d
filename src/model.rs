//! Wire types exchanged with the Duty Track backend
//!
//! Records are passed through verbatim; field renames keep the backend's
//! camelCase names, including the historical `lattitude` spelling that
//! existing QR codes and scan records were written with.

use serde::{Deserialize, Serialize};

/// A duty person tracked by an admin.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    #[serde(rename = "pnoNo")]
    pub pno_no: String,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

/// A single photo attached to a person record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub url: String,
}

/// One duty-point QR record, mutated server-side when a physical scan occurs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QrRecord {
    pub id: String,
    #[serde(rename = "lattitude")]
    pub latitude: String,
    pub longitude: String,
    #[serde(rename = "policeStation")]
    pub police_station: String,
    #[serde(rename = "dutyPoint", default)]
    pub duty_point: String,
    #[serde(default)]
    pub cug: Option<i64>,
    #[serde(rename = "isScanned", default)]
    pub is_scanned: bool,
    /// `"DD-MM-YYYY HH:MM AM/PM"`, absent until the point is scanned.
    #[serde(rename = "scannedOn", default)]
    pub scanned_on: Option<String>,
    #[serde(rename = "scannedBy", default)]
    pub scanned_by: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: String,
}

/// Payload for creating a duty point. Also the exact JSON encoded into the
/// printed QR code, so the field names must not drift.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QrDraft {
    #[serde(rename = "lattitude")]
    pub latitude: String,
    pub longitude: String,
    #[serde(rename = "policeStation")]
    pub police_station: String,
    #[serde(rename = "dutyPoint")]
    pub duty_point: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cug: Option<i64>,
}

impl From<&QrRecord> for QrDraft {
    fn from(record: &QrRecord) -> Self {
        Self {
            latitude: record.latitude.clone(),
            longitude: record.longitude.clone(),
            police_station: record.police_station.clone(),
            duty_point: record.duty_point.clone(),
            cug: record.cug,
        }
    }
}

/// Payload for the signup endpoint, single or bulk.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewPerson {
    pub name: String,
    #[serde(rename = "pnoNo")]
    pub pno_no: String,
    pub password: String,
    pub co: String,
    #[serde(rename = "policeStation")]
    pub police_station: String,
}

/// Payload for `/subAdmin/create`.
#[derive(Clone, Debug, Serialize)]
pub struct SubAdminDraft {
    pub name: String,
    pub role: String,
    #[serde(rename = "mobileNo")]
    pub mobile_no: String,
    pub password: String,
}

/// Admin identity carried in the login response and persisted alongside the
/// bearer token for session continuity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdminProfile {
    pub id: i64,
    pub email: String,
    pub name: String,
}

/// Validate a latitude form field. Returns the message to show inline.
pub fn validate_latitude(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Latitude is required".to_string());
    }
    match value.parse::<f64>() {
        Err(_) => Some("Latitude must be a number".to_string()),
        Ok(n) if !(-90.0..=90.0).contains(&n) => {
            Some("Latitude must be between -90 and 90".to_string())
        }
        Ok(_) => None,
    }
}

/// Validate a longitude form field. Returns the message to show inline.
pub fn validate_longitude(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Longitude is required".to_string());
    }
    match value.parse::<f64>() {
        Err(_) => Some("Longitude must be a number".to_string()),
        Ok(n) if !(-180.0..=180.0).contains(&n) => {
            Some("Longitude must be between -180 and 180".to_string())
        }
        Ok(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_wire_names() {
        let json = r#"{
            "id": "p1",
            "name": "A Sharma",
            "pnoNo": "120045",
            "photos": [{"url": "https://cdn.example/p1.jpg"}]
        }"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert_eq!(person.pno_no, "120045");
        assert_eq!(person.photos.len(), 1);
    }

    #[test]
    fn test_qr_record_defaults() {
        // Freshly created records have no scan fields yet.
        let json = r#"{
            "id": "q1",
            "lattitude": "29.4513",
            "longitude": "77.3152",
            "policeStation": "Shamli"
        }"#;
        let record: QrRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.latitude, "29.4513");
        assert!(!record.is_scanned);
        assert!(record.scanned_on.is_none());
        assert_eq!(record.duty_point, "");
    }

    #[test]
    fn test_qr_draft_payload_spelling() {
        let draft = QrDraft {
            latitude: "29.4513".to_string(),
            longitude: "77.3152".to_string(),
            police_station: "Shamli".to_string(),
            duty_point: "Bus Stand".to_string(),
            cug: Some(9876543210),
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert!(json.get("lattitude").is_some());
        assert!(json.get("latitude").is_none());
        assert_eq!(json["policeStation"], "Shamli");
        assert_eq!(json["dutyPoint"], "Bus Stand");
    }

    #[test]
    fn test_qr_draft_omits_missing_cug() {
        let draft = QrDraft {
            latitude: "29.0".to_string(),
            longitude: "77.0".to_string(),
            police_station: "Kairana".to_string(),
            duty_point: String::new(),
            cug: None,
        };
        let json = serde_json::to_string(&draft).unwrap();
        assert!(!json.contains("cug"));
    }

    #[test]
    fn test_latitude_bounds() {
        assert!(validate_latitude("").is_some());
        assert!(validate_latitude("north").is_some());
        assert!(validate_latitude("90.01").is_some());
        assert!(validate_latitude("-90.01").is_some());
        assert!(validate_latitude("-90").is_none());
        assert!(validate_latitude("29.4513").is_none());
    }

    #[test]
    fn test_longitude_bounds() {
        assert!(validate_longitude("").is_some());
        assert!(validate_longitude("180.5").is_some());
        assert!(validate_longitude("180").is_none());
        assert!(validate_longitude("77.3152").is_none());
    }
}
