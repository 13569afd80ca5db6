use yew::prelude::*;

/// Toolbar actions in the header. None of them is wired to anything yet.
const HEADER_ACTIONS: [(&str, &str); 4] = [
    ("Search", "🔍"),
    ("Notifications", "🔔"),
    ("Settings", "⚙"),
    ("Profile", "👤"),
];

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="header">
            <div class="container header-row">
                <div class="brand">
                    <div class="brand-mark">{"💼"}</div>
                    <h1 class="brand-name gradient-text">{"FinanceHub"}</h1>
                </div>
                <div class="header-actions">
                    {for HEADER_ACTIONS.iter().map(|(label, glyph)| html! {
                        <button class="icon-btn" title={*label} aria-label={*label}>
                            {*glyph}
                        </button>
                    })}
                </div>
            </div>
        </header>
    }
}
