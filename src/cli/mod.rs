pub mod context;
pub mod contact_commands;

use crate::config::Config;
use crate::db::ContactRepo;
use crate::error::RapportResult;
use context::CLIContext;

/// Run the interactive menu against the configured contact file.
pub fn run(config: &Config) -> RapportResult<()> {
    let repo = ContactRepo::open(&config.data_file)?;

    println!("Rapport - contact & relationship tracker");
    println!("Loaded {} contact(s) from {}", repo.len(), repo.path().display());

    let mut ctx = CLIContext::new(repo, config.thresholds);
    menu_loop(&mut ctx);
    Ok(())
}

/// Shows the menu and dispatches choices until exit or end of input.
pub fn menu_loop(ctx: &mut CLIContext) {
    loop {
        print_menu();
        let choice = match ctx.prompt("Choose an option (1-7): ") {
            Some(s) => s,
            None => break,
        };

        match choice.as_str() {
            "1" => contact_commands::add(ctx),
            "2" => contact_commands::list(ctx),
            "3" => contact_commands::search(ctx),
            "4" => contact_commands::update(ctx),
            "5" => contact_commands::delete(ctx),
            "6" => contact_commands::insights(ctx),
            "7" => break,
            "" => continue,
            other => println!("Invalid choice: {}. Enter a number from 1 to 7.", other),
        }
    }
    println!("Goodbye.");
}

fn print_menu() {
    println!();
    println!("  1. Add contact");
    println!("  2. List contacts");
    println!("  3. Search contacts");
    println!("  4. Update contact");
    println!("  5. Delete contact");
    println!("  6. Relationship insights");
    println!("  7. Exit");
}
