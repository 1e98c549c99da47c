//! Facility and mission-type lists.
//!
//! The dashboard embeds its catalog as CSV at compile time and parses it once on
//! mount. The filter bar receives the parsed catalog as a prop.
//!
//! # CSV Format
//!
//! With headers, one row per (facility, mission type) pair:
//!
//! ```text
//! FACILITY,MISSION_TYPE
//! St. Mary,Delivery
//! St. Mary,Disinfection
//! Mercy General,Delivery
//! ```

use crate::state::{ALL_FACILITIES, ALL_MISSION_TYPES};
use anyhow::bail;
use std::collections::BTreeMap;
use std::rc::Rc;

#[derive(Debug, Default, PartialEq)]
struct CatalogTable {
    /// Facilities in first-seen order
    facilities: Vec<String>,
    /// Every mission type across facilities, first-seen order
    all_types: Vec<String>,
    /// Facility -> its mission types, first-seen order
    types_by_facility: BTreeMap<String, Vec<String>>,
}

/// Facility list plus a facility-scoped mission-type list.
///
/// Cloning shares the underlying table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacilityCatalog {
    table: Rc<CatalogTable>,
}

impl FacilityCatalog {
    /// Build a catalog from (facility, mission type) pairs.
    pub fn from_pairs<I, F, T>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (F, T)>,
        F: Into<String>,
        T: Into<String>,
    {
        let mut table = CatalogTable::default();
        for (facility, robot_type) in pairs {
            let facility = facility.into();
            let robot_type = robot_type.into();

            if !table.facilities.contains(&facility) {
                table.facilities.push(facility.clone());
            }
            if !table.all_types.contains(&robot_type) {
                table.all_types.push(robot_type.clone());
            }
            let types = table.types_by_facility.entry(facility).or_default();
            if !types.contains(&robot_type) {
                types.push(robot_type);
            }
        }
        Self {
            table: Rc::new(table),
        }
    }

    /// Parse a catalog from CSV text (see module docs for the format).
    pub fn from_csv(csv_data: &str) -> anyhow::Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let mut pairs = Vec::new();
        for (line, result) in rdr.records().enumerate() {
            let r = result?;
            let facility = r.get(0).unwrap_or("").trim();
            let robot_type = r.get(1).unwrap_or("").trim();
            if facility.is_empty() || robot_type.is_empty() {
                bail!("catalog row {} is missing a facility or mission type", line + 1);
            }
            if facility == ALL_FACILITIES || robot_type == ALL_MISSION_TYPES {
                bail!("catalog row {} uses the reserved name \"All\"", line + 1);
            }
            pairs.push((facility.to_string(), robot_type.to_string()));
        }

        let catalog = Self::from_pairs(pairs);
        log::info!(
            "[Fleet] catalog: Loaded {} facilities, {} mission types",
            catalog.table.facilities.len(),
            catalog.table.all_types.len()
        );
        Ok(catalog)
    }

    /// Facility menu entries: the "All" sentinel, then every facility.
    pub fn facilities(&self) -> Vec<String> {
        std::iter::once(ALL_FACILITIES.to_string())
            .chain(self.table.facilities.iter().cloned())
            .collect()
    }

    /// Mission-type menu entries for `facility`: the "All" sentinel, then the
    /// facility's types. For the "All" facility every known type is listed; an
    /// unknown facility only gets the sentinel.
    pub fn mission_types(&self, facility: &str) -> Vec<String> {
        let types: &[String] = if facility == ALL_FACILITIES {
            &self.table.all_types
        } else {
            self.table
                .types_by_facility
                .get(facility)
                .map(Vec::as_slice)
                .unwrap_or(&[])
        };
        std::iter::once(ALL_MISSION_TYPES.to_string())
            .chain(types.iter().cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::FacilityCatalog;

    const CSV: &str = "FACILITY,MISSION_TYPE
St. Mary,Delivery
St. Mary,Disinfection
Mercy General,Delivery
Mercy General,Telepresence
St. Mary,Delivery
";

    #[test]
    fn test_facilities_start_with_sentinel() {
        let catalog = FacilityCatalog::from_csv(CSV).unwrap();
        assert_eq!(catalog.facilities(), vec!["All", "St. Mary", "Mercy General"]);
    }

    #[test]
    fn test_mission_types_are_facility_scoped() {
        let catalog = FacilityCatalog::from_csv(CSV).unwrap();
        assert_eq!(
            catalog.mission_types("St. Mary"),
            vec!["All", "Delivery", "Disinfection"]
        );
        assert_eq!(
            catalog.mission_types("All"),
            vec!["All", "Delivery", "Disinfection", "Telepresence"]
        );
        assert_eq!(catalog.mission_types("Nowhere"), vec!["All"]);
    }

    #[test]
    fn test_rejects_blank_and_reserved_rows() {
        assert!(FacilityCatalog::from_csv("FACILITY,MISSION_TYPE\nSt. Mary,\n").is_err());
        assert!(FacilityCatalog::from_csv("FACILITY,MISSION_TYPE\nAll,Delivery\n").is_err());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = FacilityCatalog::from_csv("FACILITY,MISSION_TYPE\n").unwrap();
        assert_eq!(catalog.facilities(), vec!["All"]);
        assert_eq!(catalog.mission_types("All"), vec!["All"]);
    }

    #[test]
    fn test_clones_compare_equal() {
        let a = FacilityCatalog::from_csv(CSV).unwrap();
        let b = FacilityCatalog::from_pairs(vec![
            ("St. Mary", "Delivery"),
            ("St. Mary", "Disinfection"),
            ("Mercy General", "Delivery"),
            ("Mercy General", "Telepresence"),
        ]);
        assert_eq!(a.clone(), b);
    }
}
