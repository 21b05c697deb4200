use rapport::config::Config;
use rapport::db::ContactRepo;
use tracing_subscriber::EnvFilter;

fn main() {
    let config = Config::load();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Some(csv_path) = &config.import_csv {
        println!("Importing from {}...", csv_path.display());
        let result = ContactRepo::open(&config.data_file)
            .and_then(|mut repo| rapport::migrate::import_csv(csv_path, &mut repo));
        match result {
            Ok(stats) => {
                println!("Import complete!");
                println!("  Imported: {}", stats.imported);
                println!("  Skipped (malformed): {}", stats.skipped);
            }
            Err(e) => {
                eprintln!("Import failed: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    if let Some(csv_path) = &config.export_csv {
        let result = ContactRepo::open(&config.data_file)
            .and_then(|repo| rapport::migrate::export_csv(repo.get_all(), csv_path));
        match result {
            Ok(count) => println!("Exported {} contact(s) to {}", count, csv_path.display()),
            Err(e) => {
                eprintln!("Export failed: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    if let Err(e) = rapport::cli::run(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
