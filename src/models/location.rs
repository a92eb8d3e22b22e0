use serde::{Deserialize, Serialize};

/// Una sucursal ("branch") o un punto raíz ("root"). Ambas listas
/// comparten la misma estructura; solo cambia el endpoint de origen.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LocationEntity {
    pub id: u64,
    pub name: String,
    pub district: String,
    pub address: String,
    pub phone: String,
    pub manager: String,
    pub hours: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_location_array() {
        let body = r#"[
            {
                "id": 1,
                "name": "Central Branch",
                "district": "Downtown",
                "address": "12 Main St",
                "phone": "+1 555 0100",
                "manager": "A. Rivera",
                "hours": "09:00 - 18:00"
            }
        ]"#;

        let locations: Vec<LocationEntity> = serde_json::from_str(body).unwrap();
        assert_eq!(locations.len(), 1);
        assert_eq!(locations[0].id, 1);
        assert_eq!(locations[0].district, "Downtown");
        assert_eq!(locations[0].hours, "09:00 - 18:00");
    }

    #[test]
    fn rejects_payload_that_is_not_an_array() {
        let body = r#"{"error": "service unavailable"}"#;
        assert!(serde_json::from_str::<Vec<LocationEntity>>(body).is_err());
    }

    #[test]
    fn rejects_entries_with_missing_fields() {
        // Sin "district" no hay nada que filtrar
        let body = r#"[{"id": 2, "name": "North Branch"}]"#;
        assert!(serde_json::from_str::<Vec<LocationEntity>>(body).is_err());
    }
}
