pub mod configuration;
pub mod contact_form;
pub mod domain;
pub mod email_client;
pub mod messages_client;
pub mod telemetry;
pub mod terminal;
pub mod utils;
