//! Duty-board filtering
//!
//! Scan records carry their timestamp as the backend string
//! `"DD-MM-YYYY HH:MM AM/PM"`. Filtering parses that once per check and
//! combines station, date-window, and time-phase predicates; a person stays
//! visible when at least one of their scans matches.

use std::collections::HashMap;

use chrono::{NaiveDate, Timelike};

use crate::model::{Person, QrRecord};

/// A patrol time-of-day bucket. `start_hour >= end_hour` wraps midnight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimePhase {
    pub label: &'static str,
    pub start_hour: u32,
    pub end_hour: u32,
}

/// The eight three-hour patrol phases offered by the duty board.
pub static TIME_PHASES: [TimePhase; 8] = [
    TimePhase { label: "Day Phase 1 (6AM - 9AM)", start_hour: 6, end_hour: 9 },
    TimePhase { label: "Day Phase 2 (9AM - 12PM)", start_hour: 9, end_hour: 12 },
    TimePhase { label: "Day Phase 3 (12PM - 3PM)", start_hour: 12, end_hour: 15 },
    TimePhase { label: "Day Phase 4 (3PM - 6PM)", start_hour: 15, end_hour: 18 },
    TimePhase { label: "Night Phase 1 (6PM - 9PM)", start_hour: 18, end_hour: 21 },
    TimePhase { label: "Night Phase 2 (9PM - 12AM)", start_hour: 21, end_hour: 0 },
    TimePhase { label: "Night Phase 3 (12AM - 3AM)", start_hour: 0, end_hour: 3 },
    TimePhase { label: "Night Phase 4 (3AM - 6AM)", start_hour: 3, end_hour: 6 },
];

/// Look up a phase by its dropdown label.
pub fn phase_by_label(label: &str) -> Option<&'static TimePhase> {
    TIME_PHASES.iter().find(|p| p.label == label)
}

/// Split a `scannedOn` value into its date and 24-hour clock hour.
///
/// Returns `None` for malformed values; such records never match a filter.
pub fn parse_scanned_on(raw: &str) -> Option<(NaiveDate, u32)> {
    let trimmed = raw.trim();
    let (date_part, time_part) = trimmed.split_once(' ')?;
    let date = NaiveDate::parse_from_str(date_part, "%d-%m-%Y").ok()?;
    let time = chrono::NaiveTime::parse_from_str(time_part.trim(), "%I:%M %p").ok()?;
    Some((date, time.hour()))
}

fn hour_in_phase(hour: u32, phase: &TimePhase) -> bool {
    if phase.start_hour >= phase.end_hour {
        hour >= phase.start_hour || hour < phase.end_hour
    } else {
        hour >= phase.start_hour && hour < phase.end_hour
    }
}

/// The duty board's scan criteria. All parts are optional and ANDed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScanFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub phase: Option<TimePhase>,
    pub station: Option<String>,
}

impl ScanFilter {
    /// True when no scan criterion is set and person filtering is skipped.
    pub fn is_empty(&self) -> bool {
        self.start_date.is_none()
            && self.end_date.is_none()
            && self.phase.is_none()
            && self.station.is_none()
    }

    /// Whether a single scan record satisfies every active criterion.
    pub fn matches(&self, scan: &QrRecord) -> bool {
        let Some(raw) = scan.scanned_on.as_deref() else {
            return false;
        };

        if let Some(station) = &self.station {
            if &scan.police_station != station {
                return false;
            }
        }

        let Some((date, hour)) = parse_scanned_on(raw) else {
            return false;
        };

        // A single bound means "exactly that day"; both bounds are inclusive.
        let date_ok = match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => date >= start && date <= end,
            (Some(start), None) => date == start,
            (None, Some(end)) => date == end,
            (None, None) => true,
        };
        if !date_ok {
            return false;
        }

        match &self.phase {
            Some(phase) => hour_in_phase(hour, phase),
            None => true,
        }
    }
}

/// Apply the scan filter and free-text search to the person list.
///
/// With any scan criterion active, a person survives only if at least one of
/// their scans matches. The text query then narrows by name
/// (case-insensitive contains) or PNO (substring).
pub fn filter_persons(
    persons: &[Person],
    scans: &HashMap<String, Vec<QrRecord>>,
    filter: &ScanFilter,
    query: &str,
) -> Vec<Person> {
    let mut result: Vec<Person> = persons.to_vec();

    if !filter.is_empty() {
        result.retain(|person| {
            scans
                .get(&person.pno_no)
                .map(|history| history.iter().any(|scan| filter.matches(scan)))
                .unwrap_or(false)
        });
    }

    if !query.is_empty() {
        let needle = query.to_lowercase();
        result.retain(|person| {
            person.name.to_lowercase().contains(&needle) || person.pno_no.contains(query)
        });
    }

    result
}

/// Distinct police stations seen across the loaded scan history, sorted.
pub fn station_names(scans: &HashMap<String, Vec<QrRecord>>) -> Vec<String> {
    let mut stations: Vec<String> = scans
        .values()
        .flatten()
        .filter(|scan| !scan.police_station.is_empty())
        .map(|scan| scan.police_station.clone())
        .collect();
    stations.sort();
    stations.dedup();
    stations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(station: &str, scanned_on: Option<&str>) -> QrRecord {
        QrRecord {
            id: "q1".to_string(),
            latitude: "29.45".to_string(),
            longitude: "77.31".to_string(),
            police_station: station.to_string(),
            duty_point: "Chowk".to_string(),
            cug: None,
            is_scanned: scanned_on.is_some(),
            scanned_on: scanned_on.map(str::to_string),
            scanned_by: String::new(),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    fn person(name: &str, pno: &str) -> Person {
        Person {
            id: format!("id-{pno}"),
            name: name.to_string(),
            pno_no: pno.to_string(),
            photos: Vec::new(),
        }
    }

    fn date(d: u32, m: u32, y: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_scanned_on() {
        let (d, hour) = parse_scanned_on("05-08-2026 09:03 PM").unwrap();
        assert_eq!(d, date(5, 8, 2026));
        assert_eq!(hour, 21);

        // Midnight hour is 0, noon stays 12.
        assert_eq!(parse_scanned_on("05-08-2026 12:30 AM").unwrap().1, 0);
        assert_eq!(parse_scanned_on("05-08-2026 12:30 PM").unwrap().1, 12);

        assert!(parse_scanned_on("").is_none());
        assert!(parse_scanned_on("05-08-2026").is_none());
        assert!(parse_scanned_on("2026-08-05 09:03 PM").is_none());
    }

    #[test]
    fn test_hour_in_phase_wraps_midnight() {
        let night2 = phase_by_label("Night Phase 2 (9PM - 12AM)").unwrap();
        assert!(hour_in_phase(21, night2));
        assert!(hour_in_phase(23, night2));
        assert!(!hour_in_phase(0, night2));

        let night3 = phase_by_label("Night Phase 3 (12AM - 3AM)").unwrap();
        assert!(hour_in_phase(0, night3));
        assert!(hour_in_phase(2, night3));
        assert!(!hour_in_phase(3, night3));

        let day1 = phase_by_label("Day Phase 1 (6AM - 9AM)").unwrap();
        assert!(hour_in_phase(6, day1));
        assert!(!hour_in_phase(9, day1));
    }

    #[test]
    fn test_filter_requires_scanned_on() {
        let filter = ScanFilter {
            station: Some("Shamli".to_string()),
            ..Default::default()
        };
        assert!(!filter.matches(&scan("Shamli", None)));
        assert!(filter.matches(&scan("Shamli", Some("05-08-2026 07:00 AM"))));
    }

    #[test]
    fn test_date_window_semantics() {
        let aug4 = "04-08-2026 10:00 AM";
        let aug5 = "05-08-2026 10:00 AM";
        let aug6 = "06-08-2026 10:00 AM";

        // Both bounds: inclusive range.
        let range = ScanFilter {
            start_date: Some(date(4, 8, 2026)),
            end_date: Some(date(5, 8, 2026)),
            ..Default::default()
        };
        assert!(range.matches(&scan("Shamli", Some(aug4))));
        assert!(range.matches(&scan("Shamli", Some(aug5))));
        assert!(!range.matches(&scan("Shamli", Some(aug6))));

        // Single bound: exact day only.
        let only_start = ScanFilter {
            start_date: Some(date(4, 8, 2026)),
            ..Default::default()
        };
        assert!(only_start.matches(&scan("Shamli", Some(aug4))));
        assert!(!only_start.matches(&scan("Shamli", Some(aug5))));

        let only_end = ScanFilter {
            end_date: Some(date(5, 8, 2026)),
            ..Default::default()
        };
        assert!(only_end.matches(&scan("Shamli", Some(aug5))));
        assert!(!only_end.matches(&scan("Shamli", Some(aug4))));
    }

    #[test]
    fn test_combined_station_and_phase() {
        let filter = ScanFilter {
            station: Some("Kairana".to_string()),
            phase: phase_by_label("Night Phase 1 (6PM - 9PM)").copied(),
            ..Default::default()
        };
        assert!(filter.matches(&scan("Kairana", Some("05-08-2026 08:15 PM"))));
        assert!(!filter.matches(&scan("Shamli", Some("05-08-2026 08:15 PM"))));
        assert!(!filter.matches(&scan("Kairana", Some("05-08-2026 05:15 PM"))));
    }

    #[test]
    fn test_filter_persons_by_scan_match() {
        let persons = vec![person("Amit Kumar", "1001"), person("Ravi Verma", "1002")];
        let mut scans = HashMap::new();
        scans.insert(
            "1001".to_string(),
            vec![scan("Shamli", Some("05-08-2026 07:10 AM"))],
        );
        scans.insert(
            "1002".to_string(),
            vec![scan("Kairana", Some("05-08-2026 07:10 AM"))],
        );

        let filter = ScanFilter {
            station: Some("Shamli".to_string()),
            ..Default::default()
        };
        let kept = filter_persons(&persons, &scans, &filter, "");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].pno_no, "1001");
    }

    #[test]
    fn test_empty_filter_keeps_unscanned_persons() {
        let persons = vec![person("Amit Kumar", "1001")];
        let scans = HashMap::new();
        let kept = filter_persons(&persons, &scans, &ScanFilter::default(), "");
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_search_by_name_and_pno() {
        let persons = vec![person("Amit Kumar", "1001"), person("Ravi Verma", "2002")];
        let scans = HashMap::new();
        let filter = ScanFilter::default();

        let by_name = filter_persons(&persons, &scans, &filter, "amit");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Amit Kumar");

        let by_pno = filter_persons(&persons, &scans, &filter, "200");
        assert_eq!(by_pno.len(), 1);
        assert_eq!(by_pno[0].pno_no, "2002");

        assert!(filter_persons(&persons, &scans, &filter, "xyz").is_empty());
    }

    #[test]
    fn test_station_names_sorted_dedup() {
        let mut scans = HashMap::new();
        scans.insert(
            "1001".to_string(),
            vec![
                scan("Shamli", Some("05-08-2026 07:10 AM")),
                scan("Kairana", None),
            ],
        );
        scans.insert("1002".to_string(), vec![scan("Kairana", None), scan("", None)]);
        assert_eq!(station_names(&scans), vec!["Kairana", "Shamli"]);
    }
}
