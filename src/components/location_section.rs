use yew::prelude::*;

use super::location_card::LocationCard;
use crate::models::location::LocationEntity;

/// Paleta de la sección: indigo para branches, verde para roots.
#[derive(Clone, Copy, PartialEq)]
pub enum SectionColor {
    Indigo,
    Green,
}

impl SectionColor {
    pub fn heading_class(self) -> &'static str {
        match self {
            SectionColor::Indigo => "text-indigo-700",
            SectionColor::Green => "text-green-700",
        }
    }

    pub fn tag_classes(self) -> &'static str {
        match self {
            SectionColor::Indigo => "text-indigo-600 bg-indigo-50",
            SectionColor::Green => "text-green-600 bg-green-50",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            SectionColor::Indigo => "text-indigo-500",
            SectionColor::Green => "text-green-500",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LocationSectionProps {
    pub title: String,
    pub items: Vec<LocationEntity>,
    pub tag: String,
    pub color: SectionColor,
}

#[function_component(LocationSection)]
pub fn location_section(props: &LocationSectionProps) -> Html {
    html! {
        <div class="mt-12">
            <h2 class={classes!("text-3xl", "font-display", "font-semibold", "text-center", "mb-8", props.color.heading_class())}>
                {props.title.clone()}
            </h2>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                { for props.items.iter().map(|item| html! {
                    <LocationCard
                        key={item.id}
                        location={item.clone()}
                        tag={props.tag.clone()}
                        color={props.color}
                    />
                })}
            </div>
        </div>
    }
}
