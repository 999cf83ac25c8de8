use lettre::message::{Mailbox, MessageBuilder};
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::SmtpTransport;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct MailAddress {
    name: String,
    email: String,
}

impl MailAddress {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn to_mailbox(&self) -> anyhow::Result<Mailbox> {
        Ok(Mailbox::new(Some(self.name.clone()), self.email.parse()?))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Smtp {
    url: String,
    username: String,
    password: String,
    #[serde(default)]
    use_starttls: bool,
}

impl Smtp {
    pub fn to_transport(&self) -> anyhow::Result<SmtpTransport> {
        let relay = self.url.as_str();
        let transport = {
            if self.use_starttls {
                SmtpTransport::starttls_relay(relay)
            } else {
                SmtpTransport::relay(relay)
            }
        }?;

        Ok(transport
            .credentials(Credentials::new(
                self.username.clone(),
                self.password.clone(),
            ))
            .build())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Mail {
    from: MailAddress,
    smtp: Smtp,
}

impl Mail {
    pub fn builder(&self) -> anyhow::Result<MessageBuilder> {
        Ok(MessageBuilder::new().from(self.from.to_mailbox()?))
    }

    pub fn to_transport(&self) -> anyhow::Result<SmtpTransport> {
        self.smtp.to_transport()
    }
}
