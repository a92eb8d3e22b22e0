use yew::prelude::*;

use crate::config::CONFIG;
use crate::models::location::LocationEntity;
use crate::services::ApiClient;

/// Estado de la página: un solo valor, sin flags sueltos.
#[derive(Clone, PartialEq, Debug)]
pub enum LocationsState {
    Loading,
    Empty,
    Populated {
        branches: Vec<LocationEntity>,
        roots: Vec<LocationEntity>,
    },
}

pub struct UseLocationsHandle {
    pub state: UseStateHandle<LocationsState>,
}

/// Ciclo fetch-filter para un distrito. Cada cambio del parámetro de
/// ruta reinicia el ciclo desde Loading; un distrito ausente se
/// asienta en Empty sin tocar la red.
#[hook]
pub fn use_locations(district: Option<String>) -> UseLocationsHandle {
    let state = use_state(|| LocationsState::Loading);
    // Contador de generación: un ciclo superado no aplica su resultado
    let generation = use_mut_ref(|| 0u32);

    {
        let state = state.clone();
        let generation = generation.clone();

        use_effect_with(district, move |district| {
            *generation.borrow_mut() += 1;
            let current = *generation.borrow();

            match district.as_deref() {
                Some(district) if !district.is_empty() => {
                    state.set(LocationsState::Loading);

                    let district = district.to_string();
                    let state = state.clone();
                    let generation = generation.clone();

                    wasm_bindgen_futures::spawn_local(async move {
                        let api = ApiClient::new(CONFIG.api_base_url.clone());
                        let settled = run_cycle(&api, &district).await;

                        if *generation.borrow() == current {
                            state.set(settled);
                        } else {
                            log::info!("⏭️ Ciclo superado para {}, resultado descartado", district);
                        }
                    });
                }
                _ => {
                    // Sin distrito en la ruta no hay nada que pedir
                    state.set(LocationsState::Empty);
                }
            }
            || ()
        });
    }

    UseLocationsHandle { state }
}

// Lectura secuencial: branches se resuelve completo antes de pedir
// roots. Cualquier fallo se registra y el ciclo se asienta en Empty.
async fn run_cycle(api: &ApiClient, district: &str) -> LocationsState {
    let branches = match api.get_branches().await {
        Ok(branches) => branches,
        Err(e) => {
            log::error!("❌ Error fetching branch and root details: {}", e);
            return LocationsState::Empty;
        }
    };

    let roots = match api.get_roots().await {
        Ok(roots) => roots,
        Err(e) => {
            log::error!("❌ Error fetching branch and root details: {}", e);
            return LocationsState::Empty;
        }
    };

    log::info!(
        "📦 Recibidos {} branches y {} roots para filtrar por {}",
        branches.len(),
        roots.len(),
        district
    );

    settled_state(
        filter_by_district(branches, district),
        filter_by_district(roots, district),
    )
}

/// Igualdad de distrito sin distinguir mayúsculas. Sin trim ni
/// normalización de acentos; el orden de la respuesta se conserva.
pub fn filter_by_district(entries: Vec<LocationEntity>, district: &str) -> Vec<LocationEntity> {
    let needle = district.to_lowercase();
    entries
        .into_iter()
        .filter(|entry| entry.district.to_lowercase() == needle)
        .collect()
}

/// Ambas listas vacías es Empty; con al menos una entrada, Populated.
pub fn settled_state(
    branches: Vec<LocationEntity>,
    roots: Vec<LocationEntity>,
) -> LocationsState {
    if branches.is_empty() && roots.is_empty() {
        LocationsState::Empty
    } else {
        LocationsState::Populated { branches, roots }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(id: u64, name: &str, district: &str) -> LocationEntity {
        LocationEntity {
            id,
            name: name.to_string(),
            district: district.to_string(),
            address: format!("{} High St", id),
            phone: "+1 555 0100".to_string(),
            manager: "A. Rivera".to_string(),
            hours: "09:00 - 18:00".to_string(),
        }
    }

    #[test]
    fn filter_matches_district_case_insensitively() {
        let entries = vec![
            entity(1, "Central", "downtown"),
            entity(2, "North", "Midtown"),
            entity(3, "East", "DOWNTOWN"),
        ];

        let filtered = filter_by_district(entries, "Downtown");

        let ids: Vec<u64> = filtered.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3], "orden de la respuesta conservado");
    }

    #[test]
    fn filter_does_not_trim_whitespace() {
        let entries = vec![entity(1, "Central", "Downtown ")];
        assert!(filter_by_district(entries, "Downtown").is_empty());
    }

    #[test]
    fn filter_does_not_fold_accents() {
        let entries = vec![entity(1, "Central", "Cañada")];
        assert!(filter_by_district(entries, "Canada").is_empty());
    }

    #[test]
    fn settles_empty_when_both_lists_are_empty() {
        assert_eq!(settled_state(vec![], vec![]), LocationsState::Empty);
    }

    #[test]
    fn settles_populated_when_only_branches_match() {
        // Escenario A: un branch en downtown, roots vacío
        let branches = filter_by_district(vec![entity(1, "Central", "downtown")], "Downtown");
        let roots = filter_by_district(vec![], "Downtown");

        match settled_state(branches, roots) {
            LocationsState::Populated { branches, roots } => {
                assert_eq!(branches.len(), 1);
                assert!(roots.is_empty(), "sin sección de roots que renderizar");
            }
            other => panic!("expected Populated, got {:?}", other),
        }
    }

    #[test]
    fn settles_empty_when_no_entry_matches_the_district() {
        // Escenario B: ambas APIs devuelven Midtown, el parámetro es Uptown
        let branches = vec![entity(1, "Central", "Midtown")];
        let roots = vec![entity(2, "Root One", "Midtown")];

        let state = settled_state(
            filter_by_district(branches, "Uptown"),
            filter_by_district(roots, "Uptown"),
        );

        assert_eq!(state, LocationsState::Empty);
    }

    #[test]
    fn a_failed_read_is_indistinguishable_from_no_matches() {
        // Escenario C: el ciclo fallido se asienta en el mismo estado
        // que un resultado vacío; la UI no distingue entre ambos.
        let after_failure = LocationsState::Empty;
        let after_empty_result = settled_state(vec![], vec![]);
        assert_eq!(after_failure, after_empty_result);
    }
}
