use clap::Parser;
use clap::builder::NonEmptyStringValueParser;

#[derive(Parser, Debug)]
#[command(name = "gtrans")]
#[command(about = "Translate text with Google Translate")]
#[command(version)]
pub struct Args {
    /// Text to translate
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub text: String,

    /// Destination language code (e.g., es, ja, zh-cn); defaults to en
    #[arg(short = 'd', long = "dest")]
    pub dest: Option<String>,

    /// Source language code; detected automatically when omitted
    #[arg(short = 's', long = "src")]
    pub src: Option<String>,
}
