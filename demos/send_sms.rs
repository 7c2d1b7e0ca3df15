use std::io;

use nexmo::{Credentials, Environment, Message, NexmoClient};

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let credentials = Credentials::new(
        required_env("NEXMO_API_KEY")?,
        required_env("NEXMO_API_SECRET")?,
    );
    let from = required_env("NEXMO_FROM")?;
    let to = required_env("NEXMO_TO")?;
    let text = std::env::var("NEXMO_MESSAGE")
        .unwrap_or_else(|_| "Hello from the nexmo demo.".to_owned());
    let environment = if std::env::var("NEXMO_SANDBOX").is_ok() {
        Environment::Sandbox
    } else {
        Environment::Production
    };

    let client = NexmoClient::builder(credentials)
        .environment(environment)
        .build()?;

    match client.send_message(&Message::text(from, to, text)).await? {
        Ok(response) => println!("accepted, part ids: {:?}", response.ids()),
        Err(rejected) => println!(
            "rejected: {:?} (retryable: {}) {:?}",
            rejected.status,
            rejected.status.is_retryable(),
            rejected.error_text
        ),
    }

    Ok(())
}
