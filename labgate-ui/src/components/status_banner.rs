use labgate_common::{StatusKind, StatusMessage};
use leptos::*;

/// Banner above the form; renders nothing while there is no status
#[component]
pub fn StatusBanner(#[prop(into)] status: Signal<Option<StatusMessage>>) -> impl IntoView {
    move || {
        status.get().map(|message| {
            let icon = message.icon();
            view! {
                <div class=banner_class(message.kind) role="status">
                    <p class="status-text">{icon}{message.text}</p>
                </div>
            }
        })
    }
}

fn banner_class(kind: StatusKind) -> &'static str {
    match kind {
        StatusKind::Success => "status-banner status-success",
        StatusKind::Error => "status-banner status-error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_class() {
        assert_eq!(banner_class(StatusKind::Success), "status-banner status-success");
        assert_eq!(banner_class(StatusKind::Error), "status-banner status-error");
    }
}
