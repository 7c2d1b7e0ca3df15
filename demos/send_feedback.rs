use std::io;

use nexmo::{CallId, Credentials, Feedback, FeedbackTarget, MessageId, NexmoClient};

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
    let target = match std::env::var("NEXMO_CALL_ID") {
        Ok(call_id) => FeedbackTarget::Call(CallId::new(call_id)),
        Err(_) => FeedbackTarget::Message(MessageId::new(required_env("NEXMO_MESSAGE_ID")?)),
    };
    let delivered = std::env::var("NEXMO_DELIVERED").map_or(true, |value| value != "0");

    let client = NexmoClient::new(credentials);
    match client.send_feedback(&Feedback::new(target, delivered)).await? {
        Ok(()) => println!("feedback recorded"),
        Err(rejected) => println!("feedback rejected ({}): {}", rejected.status, rejected.text),
    }

    Ok(())
}
