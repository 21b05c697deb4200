use crate::cli::context::CLIContext;
use crate::model::*;
use crate::ops::contact_ops;
use crate::queries::{contact_queries, insight_queries, Freshness};
use crate::validation;

pub fn add(ctx: &mut CLIContext) {
    println!("Adding a new contact (press Enter to leave optional fields unknown)");
    println!();

    let Some(first_name) = ctx.prompt_until("First name (required): ", |s| {
        validation::non_blank(s, "first name")
    }) else {
        return;
    };

    macro_rules! optional {
        ($prompt:expr) => {
            match ctx.prompt($prompt) {
                Some(s) => s,
                None => return,
            }
        };
    }

    let last_name = optional!("Last name: ");
    let email = optional!("Email: ");
    let phone = optional!("Phone: ");
    let company = optional!("Company: ");

    let Some(strength) = ctx.prompt_until("Relationship strength (1-10): ", validation::relationship_strength) else {
        return;
    };

    println!("Preferred contact method:");
    for (i, method) in ContactMethod::ALL.iter().enumerate() {
        println!("  {}. {}", i + 1, method.display_name());
    }
    let Some(method) = ctx.prompt_until("Choice (1-3): ", validation::contact_method_choice) else {
        return;
    };

    let Some(birthday) = ctx.prompt_until("Birthday (YYYY-MM-DD): ", |s| {
        validation::optional_date(s, "birthday")
    }) else {
        return;
    };
    let Some(last_contact) = ctx.prompt_until("Last contact date (YYYY-MM-DD, blank if never): ", |s| {
        validation::optional_date(s, "last contact date")
    }) else {
        return;
    };

    let interests = validation::interests(&optional!("Interests (comma separated): "));
    let notes = optional!("Personal notes: ");

    let interest_refs: Vec<&str> = interests.iter().map(String::as_str).collect();
    let new = contact_ops::new_contact(
        &first_name,
        Some(last_name.as_str()),
        Some(email.as_str()),
        Some(phone.as_str()),
        Some(company.as_str()),
        strength as i64,
        method,
        birthday,
        &interest_refs,
        Some(notes.as_str()),
    );

    let result = new.and_then(|mut contact| {
        contact.last_contact_date = last_contact;
        contact_ops::add_contact(&mut ctx.repo, contact)
    });
    match result {
        Ok(c) => println!("Added {} (ID {})", c.full_name(), c.id),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn list(ctx: &CLIContext) {
    let contacts = ctx.repo.get_all();
    if contacts.is_empty() {
        println!("No contacts yet. Choose 'Add contact' to create one.");
        return;
    }

    println!("Contacts by relationship strength ({}):", contacts.len());
    println!();
    let today = ctx.today();
    for contact in contact_queries::by_strength(contacts) {
        println!("{}", format_line(contact, today));
    }
}

pub fn search(ctx: &mut CLIContext) {
    let Some(term) = ctx.prompt("Search term: ") else {
        return;
    };

    let matches = contact_queries::search(ctx.repo.get_all(), &term);
    if matches.is_empty() {
        println!("No contacts found matching '{}'", term);
        return;
    }

    println!("Found {} contact(s) matching '{}':", matches.len(), term);
    let today = ctx.today();
    for contact in matches {
        println!("{}", format_line(contact, today));
    }
}

pub fn update(ctx: &mut CLIContext) {
    if ctx.repo.is_empty() {
        println!("No contacts to update.");
        return;
    }
    list(ctx);
    println!();

    let Some(id) = ctx.prompt_until("ID of contact to update: ", validation::contact_id) else {
        return;
    };
    let Some(contact) = ctx.find_contact(id) else {
        return;
    };

    println!("Editing {} (Enter keeps the current value, 'clear' empties optional fields)", contact.full_name());
    let mut patch = ContactPatch::default();
    for field in ContactField::ALL {
        let prompt = format!("{} [{}]: ", field.label(), field.current_value(&contact));
        loop {
            let Some(input) = ctx.prompt(&prompt) else {
                println!("Cancelled.");
                return;
            };
            if input.is_empty() {
                break;
            }
            let raw = if field.is_optional() && input.eq_ignore_ascii_case("clear") {
                ""
            } else {
                input.as_str()
            };
            match patch.set(*field, raw) {
                Ok(()) => break,
                Err(e) => ctx.print_error(&e),
            }
        }
    }

    if patch.is_empty() {
        println!("No changes.");
        return;
    }

    let today = ctx.today();
    match contact_ops::update_contact(&mut ctx.repo, id, patch, today) {
        Ok(c) => println!("Updated {}", c.full_name()),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn delete(ctx: &mut CLIContext) {
    if ctx.repo.is_empty() {
        println!("No contacts to delete.");
        return;
    }
    list(ctx);
    println!();

    let Some(id) = ctx.prompt_until("ID of contact to delete: ", validation::contact_id) else {
        return;
    };
    let Some(contact) = ctx.find_contact(id) else {
        return;
    };

    let answer = ctx
        .prompt(&format!("Type 'yes' to delete {}: ", contact.full_name()))
        .unwrap_or_default();
    if !validation::confirmation(&answer) {
        println!("Cancelled.");
        return;
    }

    match contact_ops::delete_contact(&mut ctx.repo, id) {
        Ok(()) => println!("Deleted {}", contact.full_name()),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn insights(ctx: &CLIContext) {
    let today = ctx.today();
    let report = insight_queries::insights(ctx.repo.get_all(), today, &ctx.thresholds);

    println!();
    println!("Relationship insights:");
    println!("  Total contacts: {}", report.total);
    println!(
        "  Strong relationships (strength {}+): {}",
        ctx.thresholds.strong_min, report.strong
    );
    println!(
        "  Need attention (no contact in {}+ days): {}",
        ctx.thresholds.attention_after_days, report.needs_attention
    );

    if report.reconnect.is_empty() {
        println!();
        println!("Everyone is up to date.");
        return;
    }

    println!();
    println!("Consider reconnecting with:");
    for (contact, days) in &report.reconnect {
        let via = contact.preferred_contact_method.display_name();
        println!(
            "  {} - last contact: {} (prefers {})",
            contact.full_name(),
            CLIContext::format_days_ago(*days),
            via
        );
    }
}

fn format_line(contact: &Contact, today: chrono::NaiveDate) -> String {
    let days = contact_queries::days_since_contact(contact, today);
    let company = contact
        .company
        .as_ref()
        .map(|c| format!(" @ {}", c))
        .unwrap_or_default();
    let interests = if contact.interests.is_empty() {
        String::new()
    } else {
        format!(" [{}]", contact.interests.join(", "))
    };
    format!(
        "  {:>3}. {}{}{} - strength {}/10 - last contact: {} ({})",
        contact.id,
        contact.full_name(),
        company,
        interests,
        contact.relationship_strength,
        CLIContext::format_days_ago(days),
        Freshness::of(days).label()
    )
}
