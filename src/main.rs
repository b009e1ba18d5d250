use anyhow::Result;
use chatclip::clipboard::SystemClipboard;
use chatclip::{cli::parse_args, run_chatclip};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let config = parse_args()?;
    let mut clipboard = SystemClipboard::new();
    run_chatclip(config, &mut clipboard).await
}
