use dioxus::prelude::*;

use ui::theme::Theme;
use ui::views::Dashboard;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Language tag shared with the header switcher; panels re-render on change.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        Theme {}
        Dashboard {}
    }
}
