pub mod use_assistant;
pub mod use_credential_export;
