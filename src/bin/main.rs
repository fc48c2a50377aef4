use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use lowkeese_core::config::{default_config_path, CONFIG_ENV};
use lowkeese_core::{EngineConfig, LowkeeseEngine};
use std::io::{self, stdin, stdout, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path)
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = EngineConfig::from_file_or_default(&config_path());
    let mut engine = LowkeeseEngine::from_config(&config);

    print_help()?;

    loop {
        print!("\n{} ", ">".bold());
        stdout().flush()?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let line = input.trim();
        let (cmd, rest) = match line.split_once(' ') {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        match cmd {
            "exit" => break,
            "" => {}
            ":en" => show(&engine.translate_forward(rest), "English → Lowkeese"),
            ":low" => show(&engine.translate_reverse(rest), "Lowkeese → English"),
            ":auto" => {
                let result = engine.detect_and_translate(rest);
                show(&result.text, &result.direction_label);
            }
            ":teach" => match rest.split_once('=') {
                Some((english, lowkeese)) => {
                    engine.teach(english, lowkeese);
                    println!(
                        "Added to Lowkeese dictionary: \"{}\" ↔ \"{}\"",
                        english.trim(),
                        lowkeese.trim()
                    );
                }
                None => println!("{}", "usage: :teach <english> = <lowkeese>".yellow()),
            },
            ":list" => {
                for entry in engine.dictionary.entries() {
                    println!("  {:<20} {}", entry.source, entry.target.cyan());
                }
                println!("({} taught)", engine.dictionary.user_len());
            }
            ":clear" => {
                execute!(stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
                print_help()?;
            }
            ":help" => print_help()?,
            _ => {
                // Bare text is translated in auto mode.
                let result = engine.detect_and_translate(line);
                show(&result.text, &result.direction_label);
            }
        }
    }

    println!("\nSaving dictionary...");
    match (engine.save_dictionary(), config.saved_dir()) {
        (Err(e), _) => eprintln!("[ERROR] Could not save dictionary: {}", e),
        (Ok(()), Some(dir)) => println!("Dictionary saved to '{}'", dir.display()),
        (Ok(()), None) => println!("Dictionary not persisted (no file store configured)"),
    }
    Ok(())
}

fn show(text: &str, label: &str) {
    println!("{} {}", format!("[{}]", label).dim(), text.green());
}

fn print_help() -> io::Result<()> {
    println!("{}", "Lowkeese translator".bold());
    println!("---------------------------------------------------------------");
    println!("  :en <text>                 English → Lowkeese");
    println!("  :low <text>                Lowkeese → English");
    println!("  :auto <text> or just text  detect the language");
    println!("  :teach <english> = <lowkeese>");
    println!("  :list  :clear  :help  exit");
    stdout().flush()
}
