use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="bg-white border-t border-gray-100 mt-16">
            <div class="container-custom py-8 text-center text-sm text-gray-500">
                {"© 2025 Branch Locator"}
            </div>
        </footer>
    }
}
