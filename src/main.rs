use queens_park::config::SiteConfig;
use queens_park::hero::Hero;
use queens_park::navbar::Navbar;
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    let config = use_state(SiteConfig::load);

    {
        let page_title = config.page_title.clone();
        use_effect_with(page_title, |title| {
            gloo::utils::document().set_title(title);
            || ()
        });
    }

    let hero = config.hero.to_props();

    html! {
        <>
          <Navbar />
          <main>
            <Hero ..hero />
          </main>
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    yew::Renderer::<App>::new().render();
}
