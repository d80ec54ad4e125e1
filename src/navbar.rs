use yew::prelude::*;

use crate::button::Button;
use crate::icons::{CloseIcon, MenuIcon};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
}

pub const BRAND: &str = "Queens Park";
pub const TICKETS_HREF: &str = "/tickets";

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { href: "/", label: "Home" },
    NavItem { href: "/#about", label: "About" },
    NavItem { href: "/#attractions", label: "Attractions" },
    NavItem { href: "/#visit", label: "Visit Us" },
    NavItem { href: "/#contact", label: "Contact" },
    NavItem { href: "/blog", label: "Blog" },
];

/// The bar sits on a light backdrop, so the white primary button gets a dark
/// outline and label that override the variant's white border.
pub const NAV_CTA: &str = "rounded-md !border !border-black !text-black";

const DESKTOP_LINK: &str = "inline-flex items-center px-1 pt-1 text-sm font-medium text-black hover:text-foreground transition-colors";
const PANEL_BASE: &str = "sm:hidden border-t border-border/60 bg-background/70 backdrop-blur-md transition-[max-height,opacity] duration-300";
const PANEL_OPEN: &str = "max-h-96 opacity-100";
const PANEL_CLOSED: &str = "max-h-0 opacity-0 overflow-hidden";
const MOBILE_LINK_BASE: &str = "block rounded-lg px-3 py-2 text-base font-medium transition-colors";
const MOBILE_LINK_ACTIVE: &str = "border-l-4 border-foreground/60 bg-foreground/5 text-foreground";
const MOBILE_LINK_IDLE: &str = "border-l-4 border-transparent text-muted-foreground hover:bg-foreground/5 hover:text-foreground";

/// Mobile disclosure panel state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    Open,
    #[default]
    Closed,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// Hamburger press.
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Open => MenuState::Closed,
            MenuState::Closed => MenuState::Open,
        }
    }

    /// A mobile link was followed; the panel always ends up closed.
    pub fn link_selected(self) -> Self {
        MenuState::Closed
    }
}

pub fn panel_class(open: bool) -> String {
    format!("{} {}", PANEL_BASE, if open { PANEL_OPEN } else { PANEL_CLOSED })
}

pub fn mobile_link_class(idx: usize) -> String {
    let state = if idx == 0 { MOBILE_LINK_ACTIVE } else { MOBILE_LINK_IDLE };
    format!("{} {}", MOBILE_LINK_BASE, state)
}

#[derive(Properties, PartialEq)]
pub struct NavbarViewProps {
    pub items: &'static [NavItem],
    pub open: bool,
    pub on_toggle: Callback<MouseEvent>,
    pub on_select: Callback<MouseEvent>,
}

/// Stateless markup for the bar; `Navbar` owns the open flag.
#[function_component(NavbarView)]
pub fn navbar_view(props: &NavbarViewProps) -> Html {
    let open = props.open;

    html! {
        <nav class="sticky top-0 z-50 bg-transparent backdrop-blur-md" aria-label="Main navigation">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between h-16">
                    <div class="flex items-center gap-10">
                        <a href="/" class="flex items-center gap-2">
                            <span class="text-2xl font-bold tracking-tight text-black">{ BRAND }</span>
                        </a>

                        <div class="hidden sm:flex sm:items-center sm:space-x-8">
                            { for props.items.iter().map(|item| html! {
                                <a key={item.href} href={item.href} class={DESKTOP_LINK}>{ item.label }</a>
                            }) }
                        </div>
                    </div>

                    <div class="hidden sm:flex sm:items-center">
                        <Button href={TICKETS_HREF} class={format!("{NAV_CTA} px-6")}>{ "Buy Tickets" }</Button>
                    </div>

                    <div class="flex items-center sm:hidden">
                        <button
                            type="button"
                            aria-label="Toggle menu"
                            aria-controls="mobile-menu"
                            aria-expanded={open.to_string()}
                            onclick={props.on_toggle.clone()}
                            class="inline-flex items-center justify-center p-2 rounded-md text-foreground hover:bg-foreground/5"
                        >
                            <span class="sr-only">{ "Open main menu" }</span>
                            if open {
                                <CloseIcon />
                            } else {
                                <MenuIcon />
                            }
                        </button>
                    </div>
                </div>
            </div>

            <div id="mobile-menu" class={panel_class(open)}>
                <div class="px-4 pt-2 pb-4 space-y-1">
                    { for props.items.iter().enumerate().map(|(idx, item)| html! {
                        <a
                            key={item.href}
                            href={item.href}
                            class={mobile_link_class(idx)}
                            onclick={props.on_select.clone()}
                        >
                            { item.label }
                        </a>
                    }) }

                    <Button
                        href={TICKETS_HREF}
                        class={format!("{NAV_CTA} w-full mt-2")}
                        onclick={props.on_select.clone()}
                    >
                        { "Buy Tickets" }
                    </Button>
                </div>
            </div>
        </nav>
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu = use_state(MenuState::default);

    let on_toggle = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            let next = (*menu).toggled();
            log::debug!("mobile menu -> {:?}", next);
            menu.set(next);
        })
    };

    let on_select = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            if menu.is_open() {
                log::debug!("mobile link followed, closing menu");
                menu.set((*menu).link_selected());
            }
        })
    };

    html! {
        <NavbarView items={NAV_ITEMS} open={menu.is_open()} {on_toggle} {on_select} />
    }
}
