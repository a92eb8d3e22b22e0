use yew::prelude::*;

use super::location_section::{LocationSection, SectionColor};
use crate::hooks::{use_locations, LocationsState};

#[derive(Properties, PartialEq)]
pub struct LocationDetailsProps {
    /// Distrito tomado de la ruta; None si la ruta no trae uno.
    pub district: Option<String>,
}

/// Página de detalle: Loading mientras el ciclo está en vuelo, Empty
/// si no quedó nada que mostrar, Populated con una sección por lista.
#[function_component(LocationDetails)]
pub fn location_details(props: &LocationDetailsProps) -> Html {
    let locations = use_locations(props.district.clone());
    let district = props.district.clone().unwrap_or_default();

    match &*locations.state {
        LocationsState::Loading => html! {
            <main class="pt-28 pb-16">
                <div class="container-custom text-center">
                    <h1 class="text-4xl font-display font-semibold">{"Loading..."}</h1>
                    <p class="text-gray-600 mt-4">
                        {"Please wait while we fetch the branch and root details."}
                    </p>
                </div>
            </main>
        },
        LocationsState::Empty => html! {
            <main class="pt-28 pb-16">
                <div class="container-custom text-center">
                    <h1 class="text-4xl font-display font-semibold">{"No Data Found"}</h1>
                    <p class="text-gray-600 mt-4">
                        {format!("No branches or roots found for {}.", district)}
                    </p>
                </div>
            </main>
        },
        LocationsState::Populated { branches, roots } => html! {
            <main class="pt-28 pb-16">
                <div class="container-custom">
                    <h1 class="text-4xl font-display font-semibold text-center text-gray-800">
                        {format!("{} Details", district)}
                    </h1>

                    if !branches.is_empty() {
                        <LocationSection
                            title="Branches"
                            items={branches.clone()}
                            tag="Branch"
                            color={SectionColor::Indigo}
                        />
                    }

                    if !roots.is_empty() {
                        <LocationSection
                            title="Roots"
                            items={roots.clone()}
                            tag="Root"
                            color={SectionColor::Green}
                        />
                    }
                </div>
            </main>
        },
    }
}
