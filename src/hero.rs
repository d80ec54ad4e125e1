use yew::prelude::*;

use crate::button::{Button, Size, Variant};
use crate::icons::{Clock, Shield, Sparkle, Stars};

const OPENING_HOURS: &str = "Open daily • 9:00–20:00";
const RATING: &str = "4.9";
const REVIEWS: &str = "/ 5 • 12k+ reviews";

const KEYFRAMES: &str = r#"
@keyframes beam-slow {
  0% { transform: translateY(-5%) rotate(0deg); opacity: 0.9; }
  50% { transform: translateY(2%) rotate(1deg); opacity: 0.75; }
  100% { transform: translateY(-5%) rotate(0deg); opacity: 0.9; }
}
@keyframes beam-fast {
  0% { transform: translateY(-8%) rotate(0deg); opacity: 0.9; }
  50% { transform: translateY(4%) rotate(-1deg); opacity: 0.7; }
  100% { transform: translateY(-8%) rotate(0deg); opacity: 0.9; }
}
.animate-beam-slow { animation: beam-slow 10s ease-in-out infinite; }
.animate-beam-fast { animation: beam-fast 8s ease-in-out infinite; }
@keyframes scroll {
  0% { transform: translateY(0); opacity: 1; }
  70% { transform: translateY(12px); opacity: .2; }
  100% { transform: translateY(0); opacity: 1; }
}
.animate-scroll { animation: scroll 1.6s ease-in-out infinite; }
"#;

#[derive(Debug, Clone, Properties, PartialEq)]
pub struct HeroProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    pub cta_text: AttrValue,
    pub cta_link: AttrValue,
    #[prop_or_default]
    pub secondary_cta_text: Option<AttrValue>,
    #[prop_or_default]
    pub secondary_cta_link: Option<AttrValue>,
    pub image_url: AttrValue,
}

impl HeroProps {
    /// Text and link of the secondary call-to-action, only when both are
    /// present and non-blank.
    pub fn secondary_cta(&self) -> Option<(&AttrValue, &AttrValue)> {
        let text = self
            .secondary_cta_text
            .as_ref()
            .filter(|t| !t.trim().is_empty())?;
        let link = self
            .secondary_cta_link
            .as_ref()
            .filter(|l| !l.trim().is_empty())?;
        Some((text, link))
    }

    pub fn background_style(&self) -> String {
        format!(
            "background-image: linear-gradient(180deg, rgba(0,0,0,.55), rgba(0,0,0,.65) 30%, rgba(0,0,0,.75)), url('{}');",
            self.image_url
        )
    }
}

fn light_beams() -> Html {
    html! {
        <div class="pointer-events-none absolute -inset-20">
            <div class="absolute left-1/2 top-[-10%] h-[120vh] w-[80vw] -translate-x-1/2 rotate-[18deg] animate-beam-slow bg-gradient-to-b from-white/10 via-white/[0.04] to-transparent blur-2xl"></div>
            <div class="absolute left-[10%] top-[-10%] h-[120vh] w-[60vw] rotate-[-14deg] animate-beam-fast bg-gradient-to-b from-pink-200/10 via-white/[0.05] to-transparent blur-3xl"></div>
            <div class="absolute right-[-10%] top-[-20%] h-[120vh] w-[55vw] rotate-[26deg] animate-beam-slow bg-gradient-to-b from-sky-200/10 via-white/[0.04] to-transparent blur-3xl"></div>
        </div>
    }
}

fn vignette() -> Html {
    html! {
        <div class="absolute inset-0">
            <div class="absolute inset-0 bg-[radial-gradient(90%_60%_at_50%_0%,rgba(255,255,255,0.20),rgba(255,255,255,0)_60%)]"></div>
            <div class="absolute inset-0 bg-[radial-gradient(60%_40%_at_50%_120%,rgba(0,0,0,0.65),rgba(0,0,0,0))]"></div>
        </div>
    }
}

fn film_grain() -> Html {
    html! {
        <div class="pointer-events-none absolute inset-0 opacity-[0.05] mix-blend-overlay [background-image:radial-gradient(1px_1px_at_20px_20px,rgba(255,255,255,0.4),transparent_1.5px)] bg-[length:24px_24px]"></div>
    }
}

fn eyebrow() -> Html {
    html! {
        <div class="flex flex-wrap items-center gap-3 mb-6">
            <span class="inline-flex items-center rounded-full border border-white/25 bg-white/10 px-3 py-1 text-xs md:text-sm backdrop-blur">
                { OPENING_HOURS }
            </span>
            <span class="inline-flex items-center gap-1.5 text-xs md:text-sm text-white/90">
                <Stars />
                <span class="font-medium">{ RATING }</span>
                <span class="text-white/70">{ REVIEWS }</span>
            </span>
        </div>
    }
}

fn reassurance() -> Html {
    html! {
        <div class="mt-5 flex flex-wrap items-center gap-4 text-xs text-white/80">
            <span class="inline-flex items-center gap-2"><Shield />{ "Safe & kid-friendly" }</span>
            <span class="inline-flex items-center gap-2"><Sparkle />{ "Free parking" }</span>
            <span class="inline-flex items-center gap-2"><Clock />{ "Same-day tickets available" }</span>
        </div>
    }
}

fn scroll_hint() -> Html {
    html! {
        <div class="pointer-events-none absolute bottom-6 left-1/2 -translate-x-1/2 text-white/80">
            <div class="flex flex-col items-center gap-2 text-xs">
                <span class="opacity-80">{ "Scroll" }</span>
                <span class="block h-9 w-[2px] overflow-hidden rounded-full bg-white/30">
                    <span class="block h-3 w-[2px] animate-scroll bg-white"></span>
                </span>
            </div>
        </div>
    }
}

/// Full-bleed landing banner: photo, animated light layers and the
/// headline with its calls to action.
#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let secondary = props.secondary_cta().map(|(text, link)| {
        html! {
            <Button
                href={link.clone()}
                variant={Variant::Secondary}
                size={Size::Lg}
                attrs={vec![("aria-label", text.clone())]}
            >
                { format!("🎢 {}", text) }
            </Button>
        }
    });

    html! {
        <section
            class="relative min-h-[80svh] md:min-h-[92svh] overflow-hidden text-white"
            aria-label={format!("{} hero", props.title)}
        >
            <div class="absolute inset-0 bg-center bg-cover" style={props.background_style()}></div>
            { light_beams() }
            { vignette() }
            { film_grain() }

            <div class="relative z-10 mx-auto max-w-6xl px-6 py-24 md:py-28 flex items-center min-h-[80svh] md:min-h-[92svh]">
                <div class="max-w-3xl">
                    { eyebrow() }

                    <h1 class="text-4xl md:text-6xl font-black leading-tight tracking-tight drop-shadow-[0_6px_24px_rgba(0,0,0,0.45)]">
                        { props.title.clone() }
                    </h1>
                    <p class="mt-4 md:mt-5 text-base md:text-xl text-white/90 drop-shadow-[0_4px_16px_rgba(0,0,0,0.55)]">
                        { props.subtitle.clone() }
                    </p>

                    <div class="mt-8 flex flex-col sm:flex-row gap-3">
                        <Button
                            href={props.cta_link.clone()}
                            variant={Variant::Primary}
                            size={Size::Lg}
                            attrs={vec![("aria-label", props.cta_text.clone())]}
                        >
                            { format!("🎟️ {}", props.cta_text) }
                        </Button>
                        { secondary }
                    </div>

                    { reassurance() }
                </div>
            </div>

            { scroll_hint() }
            <style>{ KEYFRAMES }</style>
        </section>
    }
}
