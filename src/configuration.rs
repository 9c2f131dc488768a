use anyhow::Context;
use secrecy::Secret;

use crate::contact_form::ContactForm;
use crate::domain::ContactEmail;
use crate::email_client::EmailClient;
use crate::messages_client::MessagesClient;

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub api: ApiSettings,
    pub relay: RelaySettings,
    pub contact: ContactDetails,
}

impl Settings {
    /// Build an empty contact form wired to the configured endpoints.
    pub fn form(&self) -> Result<ContactForm, anyhow::Error> {
        Ok(ContactForm::new(self.api.client(), self.relay.client()?))
    }
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ApiSettings {
    pub base_url: String,
}

impl ApiSettings {
    pub fn client(&self) -> MessagesClient {
        MessagesClient::new(self.base_url.clone())
    }
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct RelaySettings {
    pub base_url: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: Secret<String>,
    pub recipients: Vec<String>,
    pub recipient_name: String,
}

impl RelaySettings {
    pub fn recipients(&self) -> Result<Vec<ContactEmail>, String> {
        self.recipients
            .iter()
            .map(|r| ContactEmail::parse(r.trim().to_owned()))
            .collect()
    }

    pub fn client(&self) -> Result<EmailClient, anyhow::Error> {
        let recipients = self
            .recipients()
            .map_err(anyhow::Error::msg)
            .context("Invalid relay recipient")?;
        anyhow::ensure!(!recipients.is_empty(), "At least one relay recipient is required");
        Ok(EmailClient::new(
            self.base_url.clone(),
            self.service_id.clone(),
            self.template_id.clone(),
            self.public_key.clone(),
            recipients,
            self.recipient_name.clone(),
        ))
    }
}

/// Owner details shown next to the form.
#[derive(serde::Deserialize, Clone, Debug)]
pub struct ContactDetails {
    pub heading: String,
    pub blurb: String,
    pub email: String,
    pub phone: String,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    let configuration_directory = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        // e.g. `APP_API__BASE_URL=https://api.example.com` sets `Settings.api.base_url`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("relay.recipients")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

/// The possible runtime environment for our application.
#[derive(Debug, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}
