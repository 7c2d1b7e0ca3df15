use std::io;

use nexmo::{Call, Credentials, NexmoClient};

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
    let call = Call {
        from: std::env::var("NEXMO_FROM").ok(),
        language: std::env::var("NEXMO_LANGUAGE").ok(),
        repeat_count: Some(2),
        ..Call::new(
            required_env("NEXMO_TO")?,
            std::env::var("NEXMO_MESSAGE")
                .unwrap_or_else(|_| "Hello from the nexmo demo.".to_owned()),
        )
    };

    let client = NexmoClient::new(credentials);
    let call_id = client.send_call(&call).await??;
    println!("call id: {call_id}");

    Ok(())
}
