use yew::prelude::*;

use super::location_section::SectionColor;
use crate::models::location::LocationEntity;

#[derive(Properties, PartialEq)]
pub struct LocationCardProps {
    pub location: LocationEntity,
    pub tag: String,
    pub color: SectionColor,
}

#[function_component(LocationCard)]
pub fn location_card(props: &LocationCardProps) -> Html {
    let location = &props.location;

    html! {
        <div class="bg-white rounded-xl shadow-md hover:shadow-xl transition-all duration-300 border border-gray-100">
            <div class="p-8">
                <div class="flex items-center justify-between mb-6">
                    <h3 class="text-2xl font-display font-semibold text-gray-800">
                        {location.name.clone()}
                    </h3>
                    <span class={classes!("px-3", "py-1", "text-sm", "font-medium", "rounded-full", props.color.tag_classes())}>
                        {props.tag.clone()}
                    </span>
                </div>
                <div class="space-y-4 text-gray-600">
                    { info_row(InfoIcon::MapPin, "Address", &location.address, props.color) }
                    { info_row(InfoIcon::Phone, "Phone", &location.phone, props.color) }
                    { info_row(InfoIcon::User, "Manager", &location.manager, props.color) }
                    { info_row(InfoIcon::Clock, "Open Time", &location.hours, props.color) }
                </div>
            </div>
        </div>
    }
}

#[derive(Clone, Copy, PartialEq)]
enum InfoIcon {
    MapPin,
    Phone,
    User,
    Clock,
}

fn info_row(icon: InfoIcon, label: &str, value: &str, color: SectionColor) -> Html {
    html! {
        <div class="flex items-start">
            { icon_svg(icon, color) }
            <p class="flex-1">
                <strong class="text-gray-700">{format!("{}:", label)}</strong>
                {" "}
                {value.to_string()}
            </p>
        </div>
    }
}

fn icon_svg(icon: InfoIcon, color: SectionColor) -> Html {
    // El pin lleva mt-1 para alinear con direcciones de varias líneas
    let class = classes!(
        "w-5",
        "h-5",
        color.icon_class(),
        matches!(icon, InfoIcon::MapPin).then_some("mt-1"),
        "mr-3",
    );

    match icon {
        InfoIcon::MapPin => html! {
            <svg {class} fill="none" stroke="currentColor" viewBox="0 0 24 24">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M17.657 16.657L13.414 20.9a1.998 1.998 0 01-2.827 0l-4.244-4.243a8 8 0 1111.314 0z" />
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 11a3 3 0 11-6 0 3 3 0 016 0z" />
            </svg>
        },
        InfoIcon::Phone => html! {
            <svg {class} fill="none" stroke="currentColor" viewBox="0 0 24 24">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M3 5a2 2 0 012-2h3.28a1 1 0 01.948.684l1.498 4.493a1 1 0 01-.502 1.21l-2.257 1.13a11.042 11.042 0 005.516 5.516l1.13-2.257a1 1 0 011.21-.502l4.493 1.498a1 1 0 01.684.949V19a2 2 0 01-2 2h-1C9.716 21 3 14.284 3 6V5z" />
            </svg>
        },
        InfoIcon::User => html! {
            <svg {class} fill="none" stroke="currentColor" viewBox="0 0 24 24">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M16 7a4 4 0 11-8 0 4 4 0 018 0zM12 14a7 7 0 00-7 7h14a7 7 0 00-7-7z" />
            </svg>
        },
        InfoIcon::Clock => html! {
            <svg {class} fill="none" stroke="currentColor" viewBox="0 0 24 24">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 8v4l3 3m6-3a9 9 0 11-18 0 9 9 0 0118 0z" />
            </svg>
        },
    }
}
