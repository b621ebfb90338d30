use leptos::*;

/// Styled text input. `on_input` receives the raw value on every keystroke.
#[component]
pub fn TextInput(
    id: &'static str,
    name: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into, optional)] disabled: MaybeSignal<bool>,
    #[prop(into, optional)] invalid: MaybeSignal<bool>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <input
            id=id
            name=name
            type=input_type
            placeholder=placeholder
            class=move || input_class(invalid.get())
            prop:value=move || value.get()
            disabled=move || disabled.get()
            on:input=move |ev| on_input.call(event_target_value(&ev))
        />
    }
}

fn input_class(invalid: bool) -> &'static str {
    if invalid {
        "input input-invalid"
    } else {
        "input"
    }
}
