use labgate_common::{Field, LoginConfig, LoginForm, StatusMessage, SubmitOutcome};
use leptos::*;
use std::time::Duration;

use crate::components::{Button, ButtonSize, StatusBanner, TextInput};
use crate::timer::ResetTimer;

/// Reactive wrapper around [`LoginForm`] plus the timer of the pending reset
#[derive(Clone, Copy)]
pub struct LoginViewModel {
    form: RwSignal<LoginForm>,
    timer: ResetTimer,
    reset_delay: Duration,
}

impl LoginViewModel {
    pub fn new(reset_delay: Duration) -> Self {
        Self::with_timer(reset_delay, ResetTimer::new())
    }

    pub fn with_timer(reset_delay: Duration, timer: ResetTimer) -> Self {
        Self {
            form: create_rw_signal(LoginForm::new()),
            timer,
            reset_delay,
        }
    }

    pub fn value(&self, field: Field) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.value(field).to_string()))
    }

    pub fn error(&self, field: Field) -> Signal<Option<String>> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.error(field).map(str::to_string)))
    }

    pub fn status(&self) -> Signal<Option<StatusMessage>> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.status().cloned()))
    }

    pub fn locked(&self) -> Signal<bool> {
        let form = self.form;
        Signal::derive(move || form.with(LoginForm::is_locked))
    }

    pub fn change(&self, field: Field, value: String) {
        self.form.update(|f| {
            if !f.change(field, value) {
                tracing::debug!(field = %field, "edit ignored while form is locked");
            }
        });
    }

    /// Validate and, on success, start the reset countdown. If no timeout
    /// can be scheduled the form is reset at once so it never stays locked.
    pub fn submit(&self) -> SubmitOutcome {
        let outcome = self.form.try_update(LoginForm::submit).unwrap_or(SubmitOutcome::Ignored);

        if let SubmitOutcome::Accepted { .. } = outcome {
            let vm = *self;
            if let Err(e) = self.timer.schedule(self.reset_delay, move || vm.reset()) {
                tracing::error!("Failed to schedule form reset, resetting now: {}", e);
                self.reset();
            }
        }

        outcome
    }

    pub fn reset(&self) {
        self.form.update(LoginForm::reset);
        tracing::debug!("login form reset");
    }

    /// Drop the pending reset, if any. Called when the page is torn down.
    pub fn cancel_reset(&self) {
        if self.timer.cancel() {
            tracing::debug!("pending form reset cancelled on teardown");
        }
    }
}

#[component]
pub fn LoginPage(config: LoginConfig) -> impl IntoView {
    let vm = LoginViewModel::new(config.reset_delay());
    on_cleanup(move || vm.cancel_reset());

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <main class="login-page">
            <div class="login-card">
                <div class="login-header">
                    <h1>{config.heading}</h1>
                    <p class="tagline">{config.subtitle}</p>
                </div>

                <StatusBanner status=vm.status()/>

                <form class="login-form" on:submit=submit>
                    <LoginField vm=vm field=Field::Identifier/>
                    <LoginField vm=vm field=Field::Password/>

                    <Button button_type="submit" size=ButtonSize::Large block=true disabled=vm.locked()>
                        "Log In"
                    </Button>
                </form>

                <p class="login-footer">{config.footer}</p>
            </div>
        </main>
    }
}

#[component]
fn LoginField(vm: LoginViewModel, field: Field) -> impl IntoView {
    let error = vm.error(field);

    view! {
        <div class="form-group">
            <label for=field.name()>{field.label()}</label>
            <TextInput
                id=field.name()
                name=field.name()
                input_type=field.input_type()
                placeholder=field.placeholder()
                value=vm.value(field)
                disabled=vm.locked()
                invalid=Signal::derive(move || error.with(Option::is_some))
                on_input=move |value: String| vm.change(field, value)
            />
            {move || error.get().map(|msg| view! { <p class="field-error">{msg}</p> })}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::timer::manual::{FailingTimeouts, ManualTimeouts};

    const RESET_DELAY: Duration = Duration::from_millis(3000);

    fn with_runtime(f: impl FnOnce()) {
        let runtime = create_runtime();
        f();
        runtime.dispose();
    }

    fn view_model(clock: &ManualTimeouts) -> LoginViewModel {
        LoginViewModel::with_timer(RESET_DELAY, ResetTimer::with_scheduler(clock.clone()))
    }

    fn sign_in(vm: &LoginViewModel, identifier: &str, password: &str) -> SubmitOutcome {
        vm.change(Field::Identifier, identifier.to_string());
        vm.change(Field::Password, password.to_string());
        vm.submit()
    }

    #[test]
    fn test_empty_submit_shows_both_errors() {
        with_runtime(|| {
            let clock = ManualTimeouts::default();
            let vm = view_model(&clock);

            let outcome = vm.submit();

            assert!(matches!(outcome, SubmitOutcome::Rejected { .. }));
            assert_eq!(vm.error(Field::Identifier).get().as_deref(), Some("Email or username is required"));
            assert_eq!(vm.error(Field::Password).get().as_deref(), Some("Password is required"));
            assert!(vm.status().get().is_none());
            assert!(!vm.locked().get());
            assert!(!vm.timer.is_pending());
            assert!(clock.pending().is_empty());
        });
    }

    #[test]
    fn test_typing_clears_field_error() {
        with_runtime(|| {
            let vm = view_model(&ManualTimeouts::default());
            vm.submit();

            vm.change(Field::Password, "x".to_string());

            assert!(vm.error(Field::Password).get().is_none());
            assert!(vm.error(Field::Identifier).get().is_some());
            assert_eq!(vm.value(Field::Identifier).get(), "");
            assert_eq!(vm.value(Field::Password).get(), "x");
        });
    }

    #[test]
    fn test_successful_submit_schedules_reset() {
        with_runtime(|| {
            let clock = ManualTimeouts::default();
            let vm = view_model(&clock);

            let outcome = sign_in(&vm, "alice", "x");

            assert_eq!(outcome, SubmitOutcome::Accepted { identifier: "alice".to_string() });
            assert!(vm.locked().get());
            assert_eq!(
                vm.status().get().map(|s| s.text),
                Some("Welcome back! Successfully logged in as alice".to_string())
            );
            assert!(vm.timer.is_pending());
            assert_eq!(clock.pending(), vec![RESET_DELAY]);

            vm.change(Field::Identifier, "bob".to_string());
            assert_eq!(vm.value(Field::Identifier).get(), "alice");
            assert_eq!(vm.submit(), SubmitOutcome::Ignored);
            assert_eq!(clock.pending().len(), 1);
        });
    }

    #[test]
    fn test_reset_fires_and_unlocks_form() {
        with_runtime(|| {
            let clock = ManualTimeouts::default();
            let vm = view_model(&clock);
            sign_in(&vm, "alice", "x");

            assert_eq!(clock.fire(), 1);

            assert!(!vm.locked().get());
            assert!(vm.status().get().is_none());
            assert_eq!(vm.value(Field::Identifier).get(), "");
            assert_eq!(vm.value(Field::Password).get(), "");
            assert!(!vm.timer.is_pending());

            vm.change(Field::Identifier, "bob".to_string());
            assert_eq!(vm.value(Field::Identifier).get(), "bob");
        });
    }

    #[test]
    fn test_teardown_cancels_pending_reset() {
        with_runtime(|| {
            let clock = ManualTimeouts::default();
            let vm = view_model(&clock);
            sign_in(&vm, "alice", "x");

            vm.cancel_reset();

            assert!(!vm.timer.is_pending());
            assert_eq!(clock.fire(), 0);
            assert!(vm.locked().get());
            assert_eq!(vm.value(Field::Identifier).get(), "alice");
        });
    }

    #[test]
    fn test_unschedulable_reset_unlocks_immediately() {
        with_runtime(|| {
            let vm = LoginViewModel::with_timer(RESET_DELAY, ResetTimer::with_scheduler(FailingTimeouts));

            let outcome = sign_in(&vm, "alice", "x");

            assert!(matches!(outcome, SubmitOutcome::Accepted { .. }));
            assert!(!vm.locked().get());
            assert!(vm.status().get().is_none());
            assert_eq!(vm.value(Field::Identifier).get(), "");
        });
    }
}
