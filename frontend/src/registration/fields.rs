/// Every user-editable input on the registration form.
///
/// The attribution fields are not listed here on purpose: they are captured
/// once at mount time and nothing should be able to overwrite them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    FullName,
    MobileNumber,
    Language,
    ExperienceLevel,
    WantsDemoAccount,
    PreferredMarket,
}

pub const DEMO_YES: &str = "Yes";

pub const LANGUAGES: &[(&str, &str)] = &[
    ("Tamil", "Tamil (தமிழ்)"),
    ("Telugu", "Telugu (తెలుగు)"),
    ("Kannada", "Kannada (ಕನ್ನಡ)"),
    ("Malayalam", "Malayalam (മലയാളം)"),
    ("Bengali", "Bengali (বাংলা)"),
    ("Hindi", "Hindi (हिन्दी)"),
    ("English", "English"),
    ("Gujarati", "Gujarati (ગુજરાતી)"),
    ("Punjabi", "Punjabi (ਪੰਜਾਬੀ)"),
];

pub const EXPERIENCE_LEVELS: &[(&str, &str)] = &[
    ("Beginner", "Beginner (New to Trading)"),
    ("Intermediate", "Intermediate (Some Experience)"),
    ("Advanced", "Advanced (Expert Trader)"),
];

pub const DEMO_CHOICES: &[(&str, &str)] = &[
    (DEMO_YES, "Yes - I want to practice first"),
    ("No", "No - I want to start live trading"),
];

pub const MARKETS: &[(&str, &str)] = &[
    ("Stock Market", "📈 Stock Market (Equity Trading)"),
    ("Forex", "💱 Forex (Currency Trading)"),
    ("Cryptocurrency", "₿ Cryptocurrency"),
    ("Commodities", "🥇 Commodities (Gold, Oil, etc.)"),
    ("Options", "📊 Options Trading"),
    ("Futures", "📉 Futures Trading"),
];

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::FullName,
        FormField::MobileNumber,
        FormField::Language,
        FormField::ExperienceLevel,
        FormField::WantsDemoAccount,
        FormField::PreferredMarket,
    ];

    /// Human readable name used in "... is required" messages.
    pub fn label(self) -> &'static str {
        match self {
            FormField::FullName => "Full Name",
            FormField::MobileNumber => "Mobile Number",
            FormField::Language => "Language",
            FormField::ExperienceLevel => "Experience Level",
            FormField::WantsDemoAccount => "Demo Account",
            FormField::PreferredMarket => "Market",
        }
    }

    /// Input `name` attribute and key in the webhook body.
    pub fn wire_name(self) -> &'static str {
        match self {
            FormField::FullName => "fullname",
            FormField::MobileNumber => "Mobile",
            FormField::Language => "Language",
            FormField::ExperienceLevel => "Experience",
            FormField::WantsDemoAccount => "demoAccount",
            FormField::PreferredMarket => "market",
        }
    }

    #[cfg(test)]
    pub fn from_wire_name(name: &str) -> Option<FormField> {
        Self::ALL.into_iter().find(|field| field.wire_name() == name)
    }

    /// Select options as `(value, caption)`; `None` for free-text inputs.
    pub fn options(self) -> Option<&'static [(&'static str, &'static str)]> {
        match self {
            FormField::FullName | FormField::MobileNumber => None,
            FormField::Language => Some(LANGUAGES),
            FormField::ExperienceLevel => Some(EXPERIENCE_LEVELS),
            FormField::WantsDemoAccount => Some(DEMO_CHOICES),
            FormField::PreferredMarket => Some(MARKETS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_map_back_to_fields() {
        for field in FormField::ALL {
            assert_eq!(FormField::from_wire_name(field.wire_name()), Some(field));
        }
        assert_eq!(FormField::from_wire_name("utm_source"), None);
    }

    #[test]
    fn market_options_keep_their_literal_values() {
        let values: Vec<&str> = MARKETS.iter().map(|(value, _)| *value).collect();
        assert_eq!(
            values,
            ["Stock Market", "Forex", "Cryptocurrency", "Commodities", "Options", "Futures"]
        );
        assert_eq!(LANGUAGES.len(), 9);
        assert!(FormField::FullName.options().is_none());
    }
}
