use yew::prelude::*;

use crate::components::cards::{FeatureCard, TestimonialCard, VideoCard};
use crate::components::registration_form::RegistrationFormWidget;

const BENEFITS: &[(&str, &str, &str)] = &[
    ("💸", "Zero Fees", "No brokerage on any trade, ever"),
    ("📈", "High Margin", "Trade bigger with up to 500x leverage"),
    ("🎁", "Rewards", "Earn cashback on every deposit"),
    ("🤝", "24/7 Help", "Dedicated relationship manager"),
    ("🔒", "Secure", "Bank-grade protection for your funds"),
    ("⚡", "Quick Start", "Open your account in minutes"),
];

const REELS: &[(&str, &str)] = &[
    ("📊 Market Analysis Basics", "Learn market fundamentals"),
    ("💰 Zero Brokerage Benefits", "Save thousands on fees"),
    ("📈 Technical Trading Tips", "Master chart patterns"),
    ("🚀 Live Trading Session", "Real-time trading demo"),
];

const TESTIMONIALS: &[(&str, &str)] = &[
    (
        "Incredible platform! The zero brokerage feature saved me thousands. The RM support is outstanding - they guide you through every trade. I've been consistently profitable since joining TradeKaro!",
        "Vishal Pawar",
    ),
    (
        "As a beginner, I was scared of trading. But TradeKaro's step-by-step guidance and demo account helped me learn safely. Now I'm making consistent profits!",
        "Sridharan Krishnamoorthi",
    ),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page">
            <header class="hero">
                <img src="/logo.png" alt="TradeKaro" class="hero-logo" />
                <h1>{"Trade Smarter with "}<span class="gradient-text">{"Zero Brokerage"}</span></h1>
                <p>{"Learn, practice and trade stocks, forex, crypto and commodities with expert guidance in your own language."}</p>
                <a href="#registernowform" class="hero-cta">{"Register Now"}</a>
            </header>

            <RegistrationFormWidget />

            <section class="benefits">
                <h2>{"Why Traders Choose TradeKaro"}</h2>
                <div class="benefit-grid">
                    { for BENEFITS.iter().map(|(icon, title, description)| html! {
                        <FeatureCard icon={*icon} title={*title} description={*description} />
                    }) }
                </div>
            </section>

            <section class="reels">
                <h3>{"Learn Before You Trade"}</h3>
                <div class="reel-grid">
                    { for REELS.iter().zip(1u32..).map(|((title, description), number)| html! {
                        <VideoCard {number} title={*title} description={*description} />
                    }) }
                </div>
            </section>

            <section class="testimonials">
                <h3>{"What Our Traders Say"}</h3>
                { for TESTIMONIALS.iter().map(|(content, author)| html! {
                    <TestimonialCard content={*content} author={*author} />
                }) }
            </section>

            <footer class="landing-footer">
                <p>{"Trading involves risk. Past performance does not guarantee future returns."}</p>
            </footer>

            <style>
                {r#"
                .landing-page {
                    font-family: 'Poppins', sans-serif;
                    background: #f9fafb;
                    color: #111827;
                    max-width: 32rem;
                    margin: 0 auto;
                    padding-bottom: 3rem;
                }
                .hero {
                    text-align: center;
                    padding: 3rem 1.5rem 1rem;
                }
                .hero-logo {
                    height: 3rem;
                }
                .hero h1 {
                    font-size: 2rem;
                    line-height: 1.2;
                }
                .gradient-text {
                    background: linear-gradient(45deg, #4f46e5, #10b981);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-cta {
                    display: inline-block;
                    margin-top: 1rem;
                    padding: 0.8rem 2rem;
                    border-radius: 999px;
                    background: #4f46e5;
                    color: #fff;
                    text-decoration: none;
                    font-weight: 700;
                }
                .benefits, .reels, .testimonials {
                    padding: 2.5rem 1rem 0;
                    text-align: center;
                }
                .benefit-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 0.75rem;
                }
                .feature-card {
                    background: #fff;
                    border-radius: 1rem;
                    padding: 1rem 0.5rem;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.06);
                }
                .feature-card h3 {
                    font-size: 0.75rem;
                    margin: 0.25rem 0;
                }
                .feature-card p {
                    font-size: 0.7rem;
                    color: #6b7280;
                }
                .reel-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1rem;
                }
                .video-card video {
                    width: 100%;
                    height: 11rem;
                    object-fit: cover;
                    border-radius: 1rem;
                    background: linear-gradient(135deg, #6366f1 0%, #8b5cf6 50%, #ec4899 100%);
                }
                .testimonial-card {
                    background: #fff;
                    border-radius: 0.75rem;
                    padding: 1.5rem;
                    margin: 0 0 1rem;
                    text-align: left;
                    font-style: italic;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
                }
                .testimonial-avatar {
                    display: inline-flex;
                    width: 2rem;
                    height: 2rem;
                    margin-right: 0.75rem;
                    border-radius: 50%;
                    align-items: center;
                    justify-content: center;
                    background: linear-gradient(90deg, #f59e0b, #14b8a6);
                    color: #fff;
                    font-style: normal;
                    font-weight: 700;
                    font-size: 0.75rem;
                }
                .landing-footer {
                    text-align: center;
                    font-size: 0.75rem;
                    color: #9ca3af;
                    padding: 2rem 1rem 0;
                }
                "#}
            </style>
        </div>
    }
}
