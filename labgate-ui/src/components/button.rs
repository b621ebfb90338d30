use leptos::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    fn class(self) -> Option<&'static str> {
        match self {
            Self::Medium => None,
            Self::Large => Some("btn-lg"),
        }
    }
}

/// Styled primary button
#[component]
pub fn Button(
    #[prop(default = "button")] button_type: &'static str,
    #[prop(optional)] size: ButtonSize,
    /// Stretch to the width of the container
    #[prop(optional)]
    block: bool,
    #[prop(into, optional)] disabled: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=button_type
            class=button_class(size, block)
            disabled=move || disabled.get()
        >
            {children()}
        </button>
    }
}

fn button_class(size: ButtonSize, block: bool) -> String {
    let mut classes = vec!["btn", "btn-primary"];
    classes.extend(size.class());
    if block {
        classes.push("btn-block");
    }
    classes.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_class() {
        assert_eq!(button_class(ButtonSize::Medium, false), "btn btn-primary");
        assert_eq!(button_class(ButtonSize::Large, true), "btn btn-primary btn-lg btn-block");
    }
}
