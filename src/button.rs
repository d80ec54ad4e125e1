use yew::prelude::*;
use yew::virtual_dom::VNode;

const BASE: &str = "relative inline-flex items-center justify-center whitespace-nowrap rounded-xl text-sm font-semibold tracking-wide transition-all focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-white/70 focus-visible:ring-offset-2 focus-visible:ring-offset-white/10 disabled:opacity-50 disabled:pointer-events-none";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Variant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
    Link,
}

impl Variant {
    fn classes(self) -> &'static str {
        match self {
            Variant::Primary => "text-black bg-gradient-to-b from-white to-white/90 hover:to-white shadow-[0_8px_30px_rgba(255,255,255,0.18)] border border-white/80",
            Variant::Secondary => "text-white bg-white/10 hover:bg-white/15 border border-white/20 backdrop-blur",
            Variant::Outline => "text-white border border-white hover:bg-white/10",
            Variant::Ghost => "text-white hover:bg-white/10",
            Variant::Link => "text-white underline underline-offset-4 hover:opacity-80 px-0 py-0",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Size {
    #[default]
    Default,
    Sm,
    Lg,
    Icon,
}

impl Size {
    fn classes(self) -> &'static str {
        match self {
            Size::Default => "h-11 px-5",
            Size::Sm => "h-9 px-4",
            Size::Lg => "h-12 px-6 text-base",
            Size::Icon => "h-11 w-11",
        }
    }
}

/// Extra attributes forwarded onto the rendered element, in order.
pub type Attrs = Vec<(&'static str, AttrValue)>;

/// Joins class fragments with single spaces, skipping blank ones.
pub fn cn(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn button_classes(variant: Variant, size: Size, extra: Option<&str>) -> String {
    cn(&[BASE, variant.classes(), size.classes(), extra.unwrap_or("")])
}

/// Final attribute list for a button or link.
///
/// `defaults` go in first and `extra` overrides them by name, later entries
/// winning over earlier ones. A `class` entry in `extra` is appended to the
/// composed classes instead of replacing them, and `href` is ignored since the
/// `href` prop already decided what kind of element this is.
pub fn resolve_attrs(
    class: String,
    defaults: &[(&'static str, AttrValue)],
    extra: &[(&'static str, AttrValue)],
) -> Attrs {
    let mut class = class;
    let mut out: Attrs = defaults.to_vec();

    for (name, value) in extra {
        match *name {
            "class" => class = cn(&[class.as_str(), value.as_str()]),
            "href" => {}
            _ => match out.iter_mut().find(|slot| slot.0 == *name) {
                Some(slot) => slot.1 = value.clone(),
                None => out.push((*name, value.clone())),
            },
        }
    }

    out.insert(0, ("class", AttrValue::from(class)));
    out
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub children: Html,
    #[prop_or_default]
    pub variant: Variant,
    #[prop_or_default]
    pub size: Size,
    #[prop_or_default]
    pub class: Option<AttrValue>,
    /// Renders an `<a>` when set, a `<button>` otherwise.
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub attrs: Attrs,
}

fn hover_glow() -> Html {
    html! {
        <span class="pointer-events-none absolute inset-0 rounded-xl opacity-0 hover:opacity-100 transition-opacity">
            <span class="absolute -inset-1 rounded-2xl bg-gradient-to-r from-transparent via-white/30 to-transparent blur-xl"></span>
        </span>
    }
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let class = button_classes(props.variant, props.size, props.class.as_deref());

    let (mut node, defaults) = match &props.href {
        Some(href) => (
            html! {
                <a onclick={props.onclick.clone()}>
                    { props.children.clone() }
                    { hover_glow() }
                </a>
            },
            vec![("href", href.clone())],
        ),
        None => (
            html! {
                <button onclick={props.onclick.clone()}>
                    { props.children.clone() }
                    { hover_glow() }
                </button>
            },
            vec![("type", AttrValue::Static("button"))],
        ),
    };

    if let VNode::VTag(tag) = &mut node {
        for (name, value) in resolve_attrs(class, &defaults, &props.attrs) {
            tag.add_attribute(name, value);
        }
    }
    node
}
