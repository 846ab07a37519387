use anyhow::Result;
use clap::Parser;

use gtrans_cli::cli::Args;
use gtrans_cli::cli::commands::translate::{self, TranslateOptions};
use gtrans_cli::config::ClientConfig;
use gtrans_cli::translation::GoogleTranslator;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let options = TranslateOptions {
        text: args.text,
        dest: args.dest,
        src: args.src,
    };

    let mut translator = GoogleTranslator::new(ClientConfig::default());
    translate::run_translate(&mut translator, &options).await?;

    Ok(())
}
