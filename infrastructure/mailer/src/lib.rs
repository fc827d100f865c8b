pub mod client;
pub mod http_sender;
pub mod log_sender;

pub use client::MailApiClient;
pub use http_sender::HttpEmailSender;
pub use log_sender::LogEmailSender;
