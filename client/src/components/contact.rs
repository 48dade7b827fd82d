//! Contact section: message form plus social links.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form owns a `ContactFormState` signal. Submitting snapshots the fields,
//! hands the snapshot to the relay on a local task and settles the state when
//! the call returns. The submit button stays disabled for the whole pending
//! window, so a second send cannot start from the same form.
//!
//! ERROR HANDLING
//! ==============
//! Relay failures are logged to the browser console and collapsed into the
//! single generic error banner. There is no automatic retry.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::*;

use crate::components::reveal::{Reveal, RevealFrom};
use crate::components::section_heading::SectionHeading;
use crate::content::SOCIAL_LINKS;
use crate::state::contact::{ContactField, ContactFormState};

const INPUT_CLASS: &str = "w-full px-3 sm:px-4 py-2 bg-tertiary/50 border border-textSecondary/20 rounded \
     focus:outline-none focus:border-secondary text-textPrimary text-sm sm:text-base";

/// Class of the submit label; kept in the layout but hidden while busy so the
/// button does not change size.
#[must_use]
pub fn submit_label_class(busy: bool) -> &'static str {
    if busy { "opacity-0" } else { "opacity-100" }
}

#[must_use]
pub fn input_type(field: ContactField) -> &'static str {
    match field {
        ContactField::Email => "email",
        ContactField::Name | ContactField::Message => "text",
    }
}

/// Submit stays disabled until hydration has attached the handler and while a
/// send is pending.
#[must_use]
pub fn submit_blocked(hydrated: bool, busy: bool) -> bool {
    !hydrated || busy
}

#[component]
pub fn Contact() -> impl IntoView {
    let form = RwSignal::new(ContactFormState::default());
    // Effects only run in the browser, after hydration.
    let hydrated = RwSignal::new(false);
    Effect::new(move || hydrated.set(true));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(Ok(snapshot)) = form.try_update(ContactFormState::begin_submit) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::relay::dispatch(&crate::net::relay::HttpRelay, &snapshot).await;
            if let Err(e) = &outcome {
                log::error!("error sending contact message: {e}");
            }
            form.update(|f| f.settle(outcome));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = snapshot;
    };

    let busy = move || form.with(ContactFormState::submit_disabled);
    let blocked = move || submit_blocked(hydrated.get(), busy());
    let dismiss = move |_: leptos::ev::MouseEvent| form.update(ContactFormState::dismiss_banner);

    view! {
        <section id="contact" class="section-padding relative overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-b from-primary via-tertiary to-primary">
                <div class="absolute w-[300px] sm:w-[500px] h-[300px] sm:h-[500px] bg-secondary/5 rounded-full blur-[100px] top-0 -right-64"></div>
                <div class="absolute w-[250px] sm:w-[400px] h-[250px] sm:h-[400px] bg-secondary/10 rounded-full blur-[80px] bottom-0 -left-32"></div>
            </div>

            <div class="container mx-auto relative z-10">
                <SectionHeading title="Get In Touch" subtitle="Let's work together"/>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8 sm:gap-12">
                    <Reveal from=RevealFrom::Left class="bg-tertiary/30 backdrop-blur-sm p-4 sm:p-6 rounded-2xl border border-secondary/10">
                        <form class="space-y-4 sm:space-y-6" method="post" on:submit=on_submit>
                            {move || {
                                form.with(|f| f.success_banner())
                                    .map(|text| {
                                        view! {
                                            <div
                                                class="flex justify-between items-start gap-3 bg-green-500/10 border border-green-500/50 text-green-500 px-3 sm:px-4 py-2 sm:py-3 rounded text-sm sm:text-base"
                                                role="status"
                                            >
                                                <span>{text}</span>
                                                <button type="button" aria-label="Dismiss" on:click=dismiss>"✕"</button>
                                            </div>
                                        }
                                    })
                            }}
                            {move || {
                                form.with(|f| f.error_banner().map(str::to_owned))
                                    .map(|text| {
                                        view! {
                                            <div
                                                class="flex justify-between items-start gap-3 bg-red-500/10 border border-red-500/50 text-red-500 px-3 sm:px-4 py-2 sm:py-3 rounded text-sm sm:text-base"
                                                role="alert"
                                            >
                                                <span>{text}</span>
                                                <button type="button" aria-label="Dismiss" on:click=dismiss>"✕"</button>
                                            </div>
                                        }
                                    })
                            }}

                            <FieldInput form=form field=ContactField::Name/>
                            <FieldInput form=form field=ContactField::Email/>
                            <FieldInput form=form field=ContactField::Message/>

                            <button
                                type="submit"
                                class="btn-primary w-full disabled:opacity-50 disabled:cursor-not-allowed relative"
                                disabled=blocked
                                aria-busy=move || busy().to_string()
                            >
                                <span class=move || submit_label_class(busy())>"Send Message"</span>
                                <Show when=busy>
                                    <div class="absolute inset-0 flex items-center justify-center">
                                        <div class="w-4 sm:w-5 h-4 sm:h-5 border-2 border-secondary border-t-transparent rounded-full animate-spin"></div>
                                    </div>
                                </Show>
                            </button>
                        </form>
                    </Reveal>

                    <Reveal
                        from=RevealFrom::Right
                        class="flex flex-col justify-between bg-tertiary/30 backdrop-blur-sm p-4 sm:p-6 rounded-2xl border border-secondary/10"
                    >
                        <div>
                            <h3 class="text-xl sm:text-2xl font-semibold text-textPrimary mb-3 sm:mb-4">
                                "Let's create something amazing together"
                            </h3>
                            <p class="text-sm sm:text-base text-textSecondary mb-6 sm:mb-8">
                                "I'm always open to discussing new projects, creative ideas, or opportunities to be part of your visions."
                            </p>
                        </div>
                        <div>
                            <h4 class="text-lg sm:text-xl font-semibold text-textPrimary mb-3 sm:mb-4">"Connect with me"</h4>
                            <div class="flex space-x-4 sm:space-x-6">
                                {SOCIAL_LINKS
                                    .into_iter()
                                    .map(|link| {
                                        let new_tab = link.opens_new_tab();
                                        view! {
                                            <a
                                                href=link.url
                                                target=new_tab.then_some("_blank")
                                                rel=new_tab.then_some("noopener noreferrer")
                                                class="text-xl sm:text-2xl text-textSecondary hover:text-secondary hover:scale-110 transition-all"
                                                title=link.label
                                                aria-label=link.label
                                            >
                                                {link.glyph}
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

/// Labelled input bound to one field of the form state.
///
/// Inputs stay editable while a send is pending; the in-flight request already
/// holds its own snapshot.
#[component]
fn FieldInput(form: RwSignal<ContactFormState>, field: ContactField) -> impl IntoView {
    let id = field.name();
    let value = move || form.with(|f| f.message.get(field).to_owned());
    let on_input = move |ev: leptos::ev::Event| form.update(|f| f.edit(field, event_target_value(&ev)));
    let hint = move || form.with(|f| f.field_hint(field));
    let hint_id = format!("{id}-hint");
    let invalid = move || form.with(|f| f.missing == Some(field)).to_string();

    let control = if field == ContactField::Message {
        view! {
            <textarea
                id=id
                name=id
                rows="5"
                required
                class=format!("{INPUT_CLASS} resize-none")
                aria-invalid=invalid
                aria-describedby=hint_id.clone()
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                type=input_type(field)
                id=id
                name=id
                required
                class=INPUT_CLASS
                aria-invalid=invalid
                aria-describedby=hint_id.clone()
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    };

    view! {
        <div>
            <label for=id class="block text-textSecondary text-sm sm:text-base mb-1 sm:mb-2">
                {field.label()}
            </label>
            {control}
            <p id=hint_id class="mt-1 text-sm text-red-500" role="alert">
                {hint}
            </p>
        </div>
    }
}
