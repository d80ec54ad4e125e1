//! Inline SVG glyphs, no external icon packages.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IconProps {
    #[prop_or_default]
    pub class: Option<AttrValue>,
    #[prop_or(18)]
    pub size: u32,
}

const STAR_PATH: &str = "M12 17.27 18.18 21 16.54 13.97 22 9.24l-7.19-.62L12 2 9.19 8.62 2 9.24l5.46 4.73L5.82 21z";
const SHIELD_PATH: &str = "M12 2l7 3v6c0 5-3.5 9.74-7 11-3.5-1.26-7-6-7-11V5l7-3z";
const SPARKLE_PATH: &str = "M12 2l1.8 4.2L18 8l-4.2 1.8L12 14l-1.8-4.2L6 8l4.2-1.8L12 2zm7 9 1.2 2.8L23 15l-2.8 1.2L19 19l-1.2-2.8L15 15l2.8-1.2L19 11zM5 13l1 2.4L8.4 16 6 17l-1 2.4L4 17l-2.4-1L4 15l1-2z";
const CLOCK_PATH: &str = "M12 1.99a10 10 0 1 0 0 20.02 10 10 0 0 0 0-20.02zm1 11.01h4v2h-6V7h2v5.99z";
const MENU_PATH: &str = "M4 6h16M4 12h16M4 18h16";
const CLOSE_PATH: &str = "M6 18L18 6M6 6l12 12";

fn filled(props: &IconProps, d: &'static str) -> Html {
    let size = props.size.to_string();
    html! {
        <svg
            class={props.class.clone()}
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="currentColor"
            aria-hidden="true"
        >
            <path d={d} />
        </svg>
    }
}

fn stroked(props: &IconProps, d: &'static str) -> Html {
    let class = props.class.clone().unwrap_or(AttrValue::Static("h-6 w-6"));
    html! {
        <svg class={class} fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={d} />
        </svg>
    }
}

#[function_component(Stars)]
pub fn stars(props: &IconProps) -> Html {
    filled(props, STAR_PATH)
}

#[function_component(Shield)]
pub fn shield(props: &IconProps) -> Html {
    filled(props, SHIELD_PATH)
}

#[function_component(Sparkle)]
pub fn sparkle(props: &IconProps) -> Html {
    filled(props, SPARKLE_PATH)
}

#[function_component(Clock)]
pub fn clock(props: &IconProps) -> Html {
    filled(props, CLOCK_PATH)
}

/// Three-bar hamburger glyph.
#[function_component(MenuIcon)]
pub fn menu_icon(props: &IconProps) -> Html {
    stroked(props, MENU_PATH)
}

#[function_component(CloseIcon)]
pub fn close_icon(props: &IconProps) -> Html {
    stroked(props, CLOSE_PATH)
}
