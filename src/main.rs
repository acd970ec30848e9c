use clap::Parser;
use contact_book::core::{ConfigProvider, ContactSource};
use contact_book::utils::error::{ContactBookError, ErrorSeverity};
use contact_book::utils::logger;
use contact_book::{
    CliConfig, Command, ContactBook, ContactFields, Outcome, RestContactSource, SearchMode,
    Settings, TerminalView,
};
use std::io::{BufRead, Write};

fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(e: &ContactBookError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(exit_code(e.severity()));
}

fn confirm(prompt: &str) -> std::io::Result<bool> {
    print!("{} [y/N] ", prompt);
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    let settings = match Settings::resolve(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            logger::init_cli_logger(cli.verbose, cli.json_logs);
            fail(&e);
        }
    };
    logger::init_cli_logger(settings.verbose, settings.json_logs);
    tracing::debug!("Settings: {:?}", settings);

    let source = match RestContactSource::from_config(&settings) {
        Ok(source) => source,
        Err(e) => fail(&e),
    };
    let search_mode = if settings.literal_search() {
        SearchMode::Literal
    } else {
        SearchMode::Pattern
    };
    let book = ContactBook::new(source, TerminalView::stdout()).with_search_mode(search_mode);

    let outcome = match cli.command {
        Command::List => book.paint_default().await,
        Command::Tags => book.show_tags().await,
        Command::Search { term } => book.search(&term).await,
        Command::Tag { label } => book.select_tag(&label).await,
        Command::Show { id } => book.open_contact(id).await,
        Command::Add { fields } => {
            let fields = fields.apply_to(ContactFields::default());
            match book.create_contact(fields).await {
                Ok(Some(created)) => {
                    println!("✅ Created contact #{}", created.id);
                    Outcome::Rendered
                }
                Ok(None) => {
                    println!("✅ Created contact");
                    Outcome::Rendered
                }
                Err(e) => fail(&e),
            }
        }
        Command::Edit { id, fields } => {
            let current = match book.source().get_contact(id).await {
                Ok(contact) => ContactFields::from(&contact),
                Err(e) => fail(&e),
            };
            match book.update_contact(id, fields.apply_to(current)).await {
                Ok(_) => {
                    println!("✅ Updated contact #{}", id);
                    Outcome::Rendered
                }
                Err(e) => fail(&e),
            }
        }
        Command::Delete { id, yes } => {
            let confirmed = yes
                || match confirm("Do you want to delete the contact?") {
                    Ok(answer) => answer,
                    Err(e) => fail(&ContactBookError::IoError(e)),
                };
            if !confirmed {
                tracing::info!("Delete of contact #{} cancelled", id);
                return;
            }
            match book.delete_contact(id).await {
                Ok(()) => {
                    println!("✅ Deleted contact #{}", id);
                    Outcome::Rendered
                }
                Err(e) => fail(&e),
            }
        }
    };

    if outcome == Outcome::Failed {
        eprintln!("❌ Could not load contacts; rerun with --verbose for details");
        std::process::exit(exit_code(ErrorSeverity::Medium));
    }
}
