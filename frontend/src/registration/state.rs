use serde::Serialize;

use super::fields::FormField;
use super::utm::UtmParams;

/// Everything the lead form holds. Serializes straight into the flat
/// webhook body, with empty strings for anything unset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RegistrationFormState {
    #[serde(rename = "fullname")]
    pub full_name: String,
    #[serde(rename = "Mobile")]
    pub mobile_number: String,
    #[serde(rename = "Language")]
    pub language: String,
    #[serde(rename = "Experience")]
    pub experience_level: String,
    #[serde(rename = "demoAccount")]
    pub wants_demo_account: String,
    #[serde(rename = "market")]
    pub preferred_market: String,
    pub utm_source: String,
    pub utm_medium: String,
    pub utm_campaign: String,
    pub utm_term: String,
    pub utm_content: String,
}

impl RegistrationFormState {
    pub fn with_utm(utm: UtmParams) -> Self {
        Self {
            utm_source: utm.source,
            utm_medium: utm.medium,
            utm_campaign: utm.campaign,
            utm_term: utm.term,
            utm_content: utm.content,
            ..Self::default()
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::FullName => &self.full_name,
            FormField::MobileNumber => &self.mobile_number,
            FormField::Language => &self.language,
            FormField::ExperienceLevel => &self.experience_level,
            FormField::WantsDemoAccount => &self.wants_demo_account,
            FormField::PreferredMarket => &self.preferred_market,
        }
    }

    pub(super) fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::FullName => &mut self.full_name,
            FormField::MobileNumber => &mut self.mobile_number,
            FormField::Language => &mut self.language,
            FormField::ExperienceLevel => &mut self.experience_level,
            FormField::WantsDemoAccount => &mut self.wants_demo_account,
            FormField::PreferredMarket => &mut self.preferred_market,
        }
    }
}
