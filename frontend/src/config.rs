
#[cfg(debug_assertions)]
pub fn get_webhook_url() -> &'static str {
    option_env!("WEBHOOK_URL").unwrap_or("http://localhost:3001/webhook")  // Local echo endpoint
}

#[cfg(not(debug_assertions))]
pub fn get_webhook_url() -> &'static str {
    option_env!("WEBHOOK_URL")
        .unwrap_or("https://webhooks.integrately.com/a/webhooks/6b81c0b612bb4beeab5bd774c15b8b38")
}

pub const PLATFORM_SIGNUP_URL: &str = "https://tradekaro.theplatformapi.com/auth-pages/create-account/step1";

/// How long the banner stays up before hiding itself.
pub const BANNER_TIMEOUT_MS: u32 = 5_000;

/// Pause between a captured lead and the jump to the thank-you page.
pub const REDIRECT_DELAY_MS: u32 = 1_000;

pub const NAME_MIN_LEN: usize = 2;
