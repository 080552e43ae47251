use gloo_timers::callback::Timeout;
use log::info;
use web_sys::{window, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::registration::controller::{deliver, RegistrationForm, SubmitSuccess};
use crate::registration::errors::SubmissionError;
use crate::registration::fields::FormField;
use crate::registration::transport::{GlooWebhook, PixelTracker};
use crate::registration::utm::QueryParams;
use crate::Route;

pub enum RegistrationMsg {
    Edit(FormField, String),
    Blur(FormField),
    Submit,
    Delivered(Result<SubmitSuccess, SubmissionError>),
    DismissBanner(u32),
    GoToThankYou,
}

pub struct RegistrationFormWidget {
    form: RegistrationForm,
    captured: bool,
}

impl RegistrationFormWidget {
    fn schedule_banner_dismissal(&self, ctx: &Context<Self>) {
        if let Some(banner) = self.form.banner() {
            let generation = banner.generation;
            let link = ctx.link().clone();
            Timeout::new(config::BANNER_TIMEOUT_MS, move || {
                link.send_message(RegistrationMsg::DismissBanner(generation));
            })
            .forget();
        }
    }

    fn view_error(&self, field: FormField) -> Html {
        match self.form.field_error(field) {
            Some(e) => html! { <div class="field-error">{e.to_string()}</div> },
            None => html! {},
        }
    }

    fn view_text(&self, ctx: &Context<Self>, field: FormField, icon: &str, caption: &str, placeholder: &str) -> Html {
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            RegistrationMsg::Edit(field, input.value())
        });
        let onblur = ctx.link().callback(move |_: FocusEvent| RegistrationMsg::Blur(field));
        let invalid = self.form.field_error(field).is_some();

        html! {
            <div class="form-group">
                <label>{format!("{} {}", icon, caption)}</label>
                <input
                    type="text"
                    name={field.wire_name()}
                    placeholder={placeholder.to_string()}
                    class={classes!(invalid.then(|| "invalid"))}
                    value={self.form.value(field).to_string()}
                    {oninput}
                    {onblur}
                />
                { self.view_error(field) }
            </div>
        }
    }

    fn view_select(&self, ctx: &Context<Self>, field: FormField, icon: &str, caption: &str, prompt: &str) -> Html {
        let onchange = ctx.link().callback(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            RegistrationMsg::Edit(field, select.value())
        });
        let onblur = ctx.link().callback(move |_: FocusEvent| RegistrationMsg::Blur(field));
        let current = self.form.value(field);
        let invalid = self.form.field_error(field).is_some();

        html! {
            <div class="form-group">
                <label>{format!("{} {}", icon, caption)}</label>
                <select name={field.wire_name()} class={classes!(invalid.then(|| "invalid"))} {onchange} {onblur}>
                    <option value="" selected={current.is_empty()}>{prompt.to_string()}</option>
                    {
                        for field.options().unwrap_or_default().iter().map(|(value, text)| html! {
                            <option value={*value} selected={current == *value}>{*text}</option>
                        })
                    }
                </select>
                { self.view_error(field) }
            </div>
        }
    }

    fn view_submit_label(&self) -> Html {
        if self.captured {
            html! { <span>{"✔ Registered!"}</span> }
        } else if self.form.is_submitting() {
            html! { <><span class="loading-spinner"></span><span>{" Creating Your Account..."}</span></> }
        } else {
            html! { <span>{"🚀 START EARNING TODAY"}</span> }
        }
    }
}

impl Component for RegistrationFormWidget {
    type Message = RegistrationMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let form = RegistrationForm::initialize(&QueryParams::parse(&search))
            .with_tracker(Box::new(PixelTracker));

        Self { form, captured: false }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            RegistrationMsg::Edit(field, value) => {
                self.form.update_field(field, &value);
                true
            }
            RegistrationMsg::Blur(field) => {
                let _ = self.form.validate_field(field);
                true
            }
            RegistrationMsg::Submit => {
                if self.captured {
                    return false;
                }
                match self.form.begin_submit() {
                    Ok(pending) => {
                        ctx.link().send_future(async move {
                            let webhook = GlooWebhook::new(config::get_webhook_url());
                            RegistrationMsg::Delivered(deliver(&webhook, &pending).await)
                        });
                    }
                    Err(SubmissionError::AlreadySubmitting) => return false,
                    Err(_) => self.schedule_banner_dismissal(ctx),
                }
                true
            }
            RegistrationMsg::Delivered(outcome) => {
                match self.form.finish_submit(outcome) {
                    Ok(_) => {
                        self.captured = true;
                        let link = ctx.link().clone();
                        Timeout::new(config::REDIRECT_DELAY_MS, move || {
                            link.send_message(RegistrationMsg::GoToThankYou);
                        })
                        .forget();
                    }
                    Err(_) => self.schedule_banner_dismissal(ctx),
                }
                true
            }
            RegistrationMsg::DismissBanner(generation) => self.form.dismiss_banner(generation),
            RegistrationMsg::GoToThankYou => {
                info!("Redirecting to thank-you page");
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::ThankYou);
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            RegistrationMsg::Submit
        });
        let locked = self.form.is_submitting() || self.captured;

        html! {
            <section class="registration-section" id="registernowform">
                <div class="registration-card">
                    <div class="registration-header">
                        <h2>{"🚀 START EARNING TODAY"}</h2>
                        <p>{"Join 1.2M+ successful traders worldwide"}</p>
                    </div>
                    <div class="offer-badge">
                        <strong>{"🎯 LIMITED TIME: Zero Brokerage Forever!"}</strong>
                        <div>{"🔥 Save ₹50,000+ annually on trading fees"}</div>
                    </div>
                    <form {onsubmit} novalidate={true}>
                        { self.view_text(ctx, FormField::FullName, "👤", "Full Name", "Enter your full name") }
                        { self.view_text(ctx, FormField::MobileNumber, "📱", "Mobile Number", "Enter your mobile number") }
                        { self.view_select(ctx, FormField::Language, "🌐", "Preferred Language", "Select your language") }
                        { self.view_select(ctx, FormField::ExperienceLevel, "📊", "Trading Experience", "Select your experience level") }
                        { self.view_select(ctx, FormField::WantsDemoAccount, "🎯", "Do you want a demo account?", "Choose demo account preference") }
                        if self.form.shows_market() {
                            <>
                                { self.view_select(ctx, FormField::PreferredMarket, "📈", "Which market interests you?", "Select your preferred market") }
                                <p class="form-hint">
                                    {"💡 "}<strong>{"Demo accounts"}</strong>{" let you practice with virtual money before risking real funds!"}
                                </p>
                            </>
                        }
                        if let Some(banner) = self.form.banner() {
                            <div class="form-banner" role="alert">{banner.text}</div>
                        }
                        <button type="submit" class="submit-button" disabled={locked}>
                            { self.view_submit_label() }
                        </button>
                        <p class="trust-line">{"✔ Secure Platform · ⚡ Instant Setup"}</p>
                    </form>
                </div>
                <style>
                    {r#"
                    .registration-card {
                        max-width: 28rem;
                        margin: 3rem auto 0;
                        background: #fff;
                        border-radius: 1.5rem;
                        overflow: hidden;
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.15);
                    }
                    .registration-header {
                        background: linear-gradient(135deg, #4f46e5, #7c3aed);
                        color: #fff;
                        text-align: center;
                        padding: 2rem 1.25rem;
                    }
                    .offer-badge {
                        margin: 1.5rem 2rem 0;
                        padding: 1rem;
                        border-radius: 0.75rem;
                        background: linear-gradient(90deg, #f59e0b, #fbbf24);
                        color: #fff;
                        text-align: center;
                    }
                    .registration-card form {
                        padding: 2rem;
                        display: flex;
                        flex-direction: column;
                        gap: 1.25rem;
                    }
                    .form-group label {
                        display: block;
                        font-weight: 700;
                        margin-bottom: 0.5rem;
                        color: #1f2937;
                    }
                    .form-group input,
                    .form-group select {
                        width: 100%;
                        padding: 0.9rem 1.1rem;
                        border: 2px solid #d1d5db;
                        border-radius: 0.75rem;
                        font-size: 1rem;
                    }
                    .form-group .invalid {
                        border-color: #ef4444;
                    }
                    .field-error {
                        color: #ef4444;
                        font-size: 0.75rem;
                        margin-top: 0.25rem;
                    }
                    .form-hint {
                        font-size: 0.75rem;
                        color: #4b5563;
                        background: #eff6ff;
                        padding: 0.75rem;
                        border-radius: 0.5rem;
                    }
                    .form-banner {
                        background: #fef2f2;
                        border: 1px solid #fecaca;
                        color: #b91c1c;
                        padding: 0.75rem 1rem;
                        border-radius: 0.5rem;
                        font-size: 0.875rem;
                    }
                    .submit-button {
                        padding: 1.2rem 2rem;
                        border: none;
                        border-radius: 1rem;
                        background: linear-gradient(135deg, #4f46e5, #10b981);
                        color: #fff;
                        font-size: 1.2rem;
                        font-weight: 800;
                        cursor: pointer;
                    }
                    .submit-button:disabled {
                        opacity: 0.5;
                        cursor: not-allowed;
                    }
                    .loading-spinner {
                        display: inline-block;
                        width: 20px;
                        height: 20px;
                        border: 3px solid rgba(255,255,255,.3);
                        border-radius: 50%;
                        border-top-color: #fff;
                        animation: spin 1s ease-in-out infinite;
                    }
                    @keyframes spin { to { transform: rotate(360deg); } }
                    .trust-line {
                        text-align: center;
                        font-size: 0.875rem;
                        color: #6b7280;
                    }
                    "#}
                </style>
            </section>
        }
    }
}
