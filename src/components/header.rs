use yew::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="fixed top-0 inset-x-0 z-10 bg-white shadow-sm">
            <nav class="container-custom flex items-center justify-between py-5">
                <a href="/" class="text-xl font-display font-semibold text-gray-800">
                    {"Branch Locator"}
                </a>
                <div class="flex items-center gap-6 text-gray-600">
                    <a href="/" class="hover:text-indigo-600">{"Home"}</a>
                </div>
            </nav>
        </header>
    }
}
