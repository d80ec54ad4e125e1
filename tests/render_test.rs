#![cfg(not(target_arch = "wasm32"))]

use queens_park::button::{Button, ButtonProps, Size, Variant};
use queens_park::hero::{Hero, HeroProps};
use queens_park::navbar::{MenuState, NavItem, NavbarView, NavbarViewProps, NAV_CTA, NAV_ITEMS};
use yew::prelude::*;
use yew::ServerRenderer;

const PARK_ITEMS: &[NavItem] = &[
    NavItem { href: "/#coasters", label: "Coasters" },
    NavItem { href: "/#water", label: "Water Park" },
    NavItem { href: "/#food", label: "Food Court" },
    NavItem { href: "/#events", label: "Events" },
];

async fn render_nav(items: &'static [NavItem], state: MenuState) -> String {
    ServerRenderer::<NavbarView>::with_props(move || NavbarViewProps {
        items,
        open: state.is_open(),
        on_toggle: Callback::noop(),
        on_select: Callback::noop(),
    })
    .hydratable(false)
    .render()
    .await
}

fn hero_props(secondary_text: Option<&'static str>, secondary_link: Option<&'static str>) -> HeroProps {
    HeroProps {
        title: "Welcome to Queens Park".into(),
        subtitle: "Every ride ends with a smile.".into(),
        cta_text: "Plan Your Visit".into(),
        cta_link: "/tickets".into(),
        secondary_cta_text: secondary_text.map(AttrValue::from),
        secondary_cta_link: secondary_link.map(AttrValue::from),
        image_url: "/assets/kids.jpg".into(),
    }
}

async fn render_hero(
    secondary_text: Option<&'static str>,
    secondary_link: Option<&'static str>,
) -> String {
    ServerRenderer::<Hero>::with_props(move || hero_props(secondary_text, secondary_link))
        .hydratable(false)
        .render()
        .await
}

/// Splits the rendered bar into the desktop part and the mobile panel.
fn split_menus(html: &str) -> (&str, &str) {
    let at = html
        .find("id=\"mobile-menu\"")
        .expect("mobile panel not rendered");
    html.split_at(at)
}

fn assert_in_order(section: &str, items: &[NavItem]) {
    let mut last = 0;
    for item in items {
        let needle = format!("href=\"{}\"", item.href);
        assert_eq!(section.matches(&needle).count(), 1, "{} in {}", item.href, section);
        let pos = section.find(&needle).unwrap();
        assert!(pos >= last, "{} rendered out of order", item.href);
        last = pos;
    }
}

#[tokio::test]
async fn every_item_renders_once_per_menu_in_order() {
    let html = render_nav(PARK_ITEMS, MenuState::Closed).await;
    let (desktop, mobile) = split_menus(&html);

    assert_in_order(desktop, PARK_ITEMS);
    assert_in_order(mobile, PARK_ITEMS);
    for item in PARK_ITEMS {
        assert_eq!(html.matches(item.label).count(), 2);
    }
}

#[tokio::test]
async fn empty_item_list_renders_no_nav_links() {
    let html = render_nav(&[], MenuState::Closed).await;
    assert!(!html.contains("href=\"/#"));
    assert!(html.contains("Buy Tickets"));
}

#[tokio::test]
async fn default_items_render_in_both_menus() {
    let html = render_nav(NAV_ITEMS, MenuState::Closed).await;
    let (desktop, mobile) = split_menus(&html);
    for item in NAV_ITEMS.iter().filter(|i| i.href != "/") {
        assert!(desktop.contains(&format!("href=\"{}\"", item.href)));
        assert!(mobile.contains(&format!("href=\"{}\"", item.href)));
    }
}

#[tokio::test]
async fn closed_menu_hides_panel() {
    let html = render_nav(PARK_ITEMS, MenuState::Closed).await;
    assert!(html.contains("aria-expanded=\"false\""));
    assert!(html.contains("max-h-0 opacity-0 overflow-hidden"));
    assert!(!html.contains("max-h-96 opacity-100"));
    assert!(html.contains("M4 6h16M4 12h16M4 18h16"));
}

#[tokio::test]
async fn toggle_open_then_follow_link() {
    let state = MenuState::default();
    let html = render_nav(PARK_ITEMS, state).await;
    assert!(html.contains("max-h-0 opacity-0 overflow-hidden"));

    let state = state.toggled();
    let html = render_nav(PARK_ITEMS, state).await;
    assert!(html.contains("aria-expanded=\"true\""));
    assert!(html.contains("max-h-96 opacity-100"));
    assert!(html.contains("M6 18L18 6M6 6l12 12"));

    let state = state.link_selected();
    let html = render_nav(PARK_ITEMS, state).await;
    assert!(html.contains("aria-expanded=\"false\""));
    assert!(html.contains("max-h-0 opacity-0 overflow-hidden"));
}

#[tokio::test]
async fn hero_renders_both_ctas() {
    let html = render_hero(Some("Explore Rides"), Some("/rides")).await;
    assert!(html.contains("Welcome to Queens Park"));
    assert!(html.contains("Every ride ends with a smile."));
    assert!(html.contains("href=\"/tickets\""));
    assert!(html.contains("aria-label=\"Plan Your Visit\""));
    assert!(html.contains("href=\"/rides\""));
    assert!(html.contains("Explore Rides"));
    assert!(html.contains("/assets/kids.jpg"));
}

#[tokio::test]
async fn hero_omits_incomplete_secondary_cta() {
    let html = render_hero(Some("Explore Rides"), None).await;
    assert!(!html.contains("Explore Rides"));
    assert!(html.contains("href=\"/tickets\""));

    let html = render_hero(None, Some("/rides")).await;
    assert!(!html.contains("href=\"/rides\""));

    let html = render_hero(Some(""), Some("/rides")).await;
    assert!(!html.contains("href=\"/rides\""));
}

#[tokio::test]
async fn hero_keeps_decorative_layers() {
    let html = render_hero(None, None).await;
    assert!(html.contains("animate-beam-slow"));
    assert!(html.contains("animate-beam-fast"));
    assert!(html.contains("animate-scroll"));
    assert!(html.contains("aria-label=\"Welcome to Queens Park hero\""));
}

async fn render_button(href: Option<&'static str>, attrs: Vec<(&'static str, &'static str)>) -> String {
    ServerRenderer::<Button>::with_props(move || ButtonProps {
        children: html! { "Go" },
        variant: Variant::Outline,
        size: Size::Sm,
        class: Some("mt-2".into()),
        href: href.map(AttrValue::from),
        onclick: None,
        attrs: attrs
            .into_iter()
            .map(|(k, v)| (k, AttrValue::from(v)))
            .collect(),
    })
    .hydratable(false)
    .render()
    .await
}

#[tokio::test]
async fn button_without_href_is_a_button() {
    let html = render_button(None, vec![]).await;
    assert!(html.trim_start().starts_with("<button"));
    assert!(html.contains("type=\"button\""));
    assert!(html.contains("h-9 px-4 mt-2"));
}

#[tokio::test]
async fn button_with_href_is_a_link() {
    let html = render_button(Some("/rides"), vec![("href", "/ignored")]).await;
    assert!(html.trim_start().starts_with("<a "));
    assert!(html.contains("href=\"/rides\""));
    assert!(!html.contains("/ignored"));
    assert!(!html.contains("type=\"button\""));
}

#[tokio::test]
async fn button_forwards_extra_attrs() {
    let html = render_button(
        None,
        vec![("type", "submit"), ("data-track", "cta"), ("class", "shadow")],
    )
    .await;
    assert!(html.contains("type=\"submit\""));
    assert!(!html.contains("type=\"button\""));
    assert!(html.contains("data-track=\"cta\""));
    assert!(html.contains("mt-2 shadow"));
}

#[tokio::test]
async fn ticket_buttons_stay_dark_on_light_bar() {
    let html = render_nav(PARK_ITEMS, MenuState::Closed).await;
    let (desktop, mobile) = split_menus(&html);
    for section in [desktop, mobile] {
        let at = section.find("href=\"/tickets\"").expect("tickets button missing");
        let tag_start = section[..at].rfind("<a").unwrap();
        let tag = &section[tag_start..at + section[at..].find('>').unwrap()];
        assert!(tag.contains(NAV_CTA), "{tag}");
        assert!(tag.contains("text-black bg-gradient-to-b from-white"), "{tag}");
    }
}
