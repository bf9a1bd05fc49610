use dioxus::prelude::*;

use ui::core::platform::Platform;
use ui::Toolbar;

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    ui::config::install(ui::config::load());
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_hook(|| {
        ui::i18n::init();
        tracing::info!(platform = Platform::current().as_str(), "hoverdock starting");
    });

    rsx! {
        // Global app resources
        document::Style { "{MAIN_CSS_INLINE}" }

        Toolbar {}
    }
}
