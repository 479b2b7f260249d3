use banjara_translate::mt::google_translate::API_KEY_ENV;
use banjara_translate::mt::{GoogleTranslateProvider, MachineTranslator, MockMode, MockTranslator};
use banjara_translate::{Dictionary, LexicalMatcher, ServiceConfig, TranslationService};
use clap::{Arg, ArgAction, Command, value_parser};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

fn cli() -> Command {
    Command::new("banjara-translate")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Translate Banjara text into Telugu and English")
        .arg(
            Arg::new("text")
                .help("Banjara text to translate")
                .required(true)
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("dictionary")
                .long("dictionary")
                .short('d')
                .help("JSON dictionary to use instead of the built-in one")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("source")
                .long("source")
                .short('s')
                .help("Source language hint for the external translator")
                .default_value("hi"),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .short('t')
                .help("Seconds to wait for the external translator")
                .value_parser(value_parser!(u64).range(1..))
                .default_value("4"),
        )
        .arg(
            Arg::new("mock")
                .long("mock")
                .short('m')
                .help("Use mock translator instead of Google Translate")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Show how each token was matched")
                .action(ArgAction::SetTrue),
        )
}

/// A blank key counts as unset, the same as for the web server
fn api_key(value: Option<String>) -> Option<String> {
    value.filter(|key| !key.trim().is_empty())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = cli().get_matches();

    let text = matches
        .get_many::<String>("text")
        .map(|words| words.cloned().collect::<Vec<_>>().join(" "))
        .unwrap_or_default();
    let verbose = matches.get_flag("verbose");
    let use_mock = matches.get_flag("mock");

    if verbose {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
            .with_writer(std::io::stderr)
            .init();
    }

    if text.trim().is_empty() {
        eprintln!("❌ Banjara text is required");
        return Err("Missing text".into());
    }

    // 1. Load dictionary
    let dictionary = match matches.get_one::<PathBuf>("dictionary") {
        Some(path) => Dictionary::load_from_file(path)?,
        None => Dictionary::builtin()?,
    };

    if verbose {
        println!("📖 Dictionary: {} entries", dictionary.len());
    }

    let defaults = ServiceConfig::default();
    let config = ServiceConfig {
        source_hint: matches
            .get_one::<String>("source")
            .cloned()
            .unwrap_or(defaults.source_hint),
        fallback_timeout: matches
            .get_one::<u64>("timeout")
            .map(|secs| Duration::from_secs(*secs))
            .unwrap_or(defaults.fallback_timeout),
        ..ServiceConfig::default()
    };

    // 2. Pick the external translator
    let translator: Option<Arc<dyn MachineTranslator>> = if use_mock {
        Some(Arc::new(MockTranslator::new(MockMode::Suffix)))
    } else if let Some(key) = api_key(env::var(API_KEY_ENV).ok()) {
        Some(Arc::new(GoogleTranslateProvider::with_timeout(
            key,
            config.fallback_timeout,
        )?))
    } else {
        if verbose {
            println!("⚠️  GOOGLE_TRANSLATE_API_KEY not set, unmatched input gets placeholders");
        }
        None
    };

    let matcher = Arc::new(LexicalMatcher::new(Arc::new(dictionary)));
    let service = TranslationService::new(matcher, translator, config);

    // 3. Translate
    let result = service.translate(&text).await;

    if verbose {
        println!("📝 Source: \"{}\"", text);
        for token in &result.matches.tokens {
            match &token.matched {
                Some(m) => println!(
                    "   {:<16} → {:<16} {:<13} {:.2}",
                    token.original, m.entry.banjara, m.tier, m.score
                ),
                None => println!("   {:<16} → (no match)", token.original),
            }
        }
        println!("🔧 Method: {:?}", result.method);
        println!();
    }

    println!("Telugu:  {}", result.telugu);
    println!("English: {}", result.english);

    Ok(())
}
