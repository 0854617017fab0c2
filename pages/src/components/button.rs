use leptos::prelude::*;

/// Call-to-action button.
///
/// The label renders three times: an invisible placeholder reserves the
/// layout width, and the two visible layers swap on hover. The animation is
/// pure CSS (`styles.rs`), so the atom stays stateless.
#[component]
pub fn Button(
    /// Label shown on the button
    #[prop(into)]
    text: String,
) -> impl IntoView {
    view! {
        <button class="btn">
            <span class="btn-placeholder">{text.clone()}</span>
            <span class="btn-text-top">{text.clone()}</span>
            <span class="btn-text-bottom">{text}</span>
        </button>
    }
}
