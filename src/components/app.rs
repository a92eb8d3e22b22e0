use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;
use yew::prelude::*;

use super::{Footer, Header, LocationDetails};

#[function_component(App)]
pub fn app() -> Html {
    let district = use_state(current_district);

    // El historial puede cambiar el parámetro sin recargar la página
    {
        let district = district.clone();

        use_effect_with((), move |_| {
            let callback = Closure::wrap(Box::new(move |_: web_sys::Event| {
                district.set(current_district());
            }) as Box<dyn FnMut(_)>);

            if let Some(window) = window() {
                let _ = window.add_event_listener_with_callback(
                    "popstate",
                    callback.as_ref().unchecked_ref(),
                );
            }

            move || {
                callback.forget();
            }
        });
    }

    html! {
        <div class="min-h-screen bg-gray-50">
            <Header />
            <LocationDetails district={(*district).clone()} />
            <Footer />
        </div>
    }
}

// Helper functions

fn current_district() -> Option<String> {
    let pathname = window()?.location().pathname().ok()?;
    let raw = district_from_pathname(&pathname)?;

    // decodeURIComponent lanza con secuencias % malformadas;
    // en ese caso se usa el segmento tal cual
    match js_sys::decode_uri_component(&raw) {
        Ok(decoded) => Some(String::from(decoded)),
        Err(_) => Some(raw),
    }
}

/// Extrae el distrito de rutas tipo `/locations/{district}`.
fn district_from_pathname(pathname: &str) -> Option<String> {
    let mut segments = pathname.split('/').filter(|s| !s.is_empty());

    match segments.next()? {
        "locations" => segments.next().map(str::to_string),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::district_from_pathname;

    #[test]
    fn extracts_the_district_segment() {
        assert_eq!(
            district_from_pathname("/locations/Downtown"),
            Some("Downtown".to_string())
        );
    }

    #[test]
    fn ignores_trailing_segments() {
        assert_eq!(
            district_from_pathname("/locations/Downtown/extra"),
            Some("Downtown".to_string())
        );
    }

    #[test]
    fn yields_nothing_for_other_paths() {
        assert_eq!(district_from_pathname("/"), None);
        assert_eq!(district_from_pathname("/about"), None);
        assert_eq!(district_from_pathname("/locations"), None);
        assert_eq!(district_from_pathname("/locations/"), None);
    }
}
