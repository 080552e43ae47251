use yew::prelude::*;

use crate::config;

#[function_component(ThankYou)]
pub fn thank_you() -> Html {
    html! {
        <div class="thankyou-page">
            <div class="thankyou-card">
                <div class="success-circle">{"✔"}</div>
                <h1>{"🎉 Registration Successful!"}</h1>
                <p>
                    {"Welcome to the "}<strong>{"TradeKaro"}</strong>{" family!"}
                    <br />
                    {"Your trading journey begins now."}
                </p>
                <div class="next-steps">
                    <h3>{"✨ What's Next?"}</h3>
                    <p>{"📧 Check your email for login details"}</p>
                    <p>{"💸 Start with zero brokerage trading"}</p>
                    <p>{"🚀 Access 500+ products instantly"}</p>
                </div>
                <a
                    href={config::PLATFORM_SIGNUP_URL}
                    target="_blank"
                    rel="noopener noreferrer"
                    class="platform-button"
                >
                    {"🏠 Continue to Platform"}
                </a>
                <p class="platform-note">{"⚡ Platform opens in new window · 🔒 100% Secure Access"}</p>
            </div>
            <style>
                {r#"
                .thankyou-page {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    background: linear-gradient(135deg, #111827, #1f2937);
                    font-family: 'Poppins', sans-serif;
                }
                .thankyou-card {
                    max-width: 28rem;
                    width: 100%;
                    background: #fff;
                    border-radius: 1.5rem;
                    padding: 2rem;
                    text-align: center;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .success-circle {
                    width: 6rem;
                    height: 6rem;
                    margin: 0 auto 1.5rem;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 3rem;
                    color: #fff;
                    background: linear-gradient(90deg, #4ade80, #16a34a);
                }
                .next-steps {
                    margin: 1.5rem 0;
                    padding: 1.5rem;
                    border-radius: 1rem;
                    background: #eff6ff;
                    text-align: left;
                    font-size: 0.875rem;
                }
                .platform-button {
                    display: block;
                    padding: 1rem 1.5rem;
                    border-radius: 1rem;
                    background: linear-gradient(90deg, #2563eb, #9333ea);
                    color: #fff;
                    font-weight: 700;
                    text-decoration: none;
                }
                .platform-note {
                    margin-top: 0.75rem;
                    font-size: 0.75rem;
                    color: #6b7280;
                }
                "#}
            </style>
        </div>
    }
}
