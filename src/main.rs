use std::env;

use dotenvy::dotenv;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use lead_search::backend::memory::InMemoryBackend;
use lead_search::dto::notification::Notification;
use lead_search::dto::view::LeadPageData;
use lead_search::models::config::ViewConfig;
use lead_search::services::controller::LeadSearchController;

const HELP: &str = "commands: search <text> | source <text> | size <5|10|25|50> | next | prev | refresh | sync | show | quit";

fn render(data: &LeadPageData) {
    let header: Vec<&str> = data.columns.iter().map(|c| c.label).collect();
    println!("{}", header.join(" | "));
    for lead in &data.leads {
        let row: Vec<&str> = data
            .columns
            .iter()
            .map(|c| lead.field(c.field_name).unwrap_or(""))
            .collect();
        println!("{}", row.join(" | "));
    }

    let total_pages = data
        .total_pages
        .map_or_else(|| "?".to_string(), |pages| pages.to_string());
    let links: Vec<String> = data
        .pages
        .iter()
        .map(|page| match page {
            Some(page) if *page == data.page_number => format!("[{page}]"),
            Some(page) => page.to_string(),
            None => "…".to_string(),
        })
        .collect();
    println!(
        "page {} of {} ({} per page) {}",
        data.page_number,
        total_pages,
        data.page_size,
        links.join(" ")
    );
    if let Some(error) = &data.error {
        println!("error: {error}");
    }
}

fn print_notifications(rx: &mut mpsc::UnboundedReceiver<Notification>) {
    while let Ok(notification) = rx.try_recv() {
        println!(
            "[{}] {}: {}",
            notification.variant.as_str(),
            notification.title,
            notification.message
        );
    }
}

#[tokio::main]
async fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let view_config = match ViewConfig::load("config", &app_env) {
        Ok(view_config) => view_config,
        Err(err) => {
            log::error!("Error loading view config: {err}");
            std::process::exit(1);
        }
    };

    let backend = match InMemoryBackend::from_csv_path(&view_config.leads_csv) {
        Ok(backend) => backend.with_sync_outcome(view_config.sync_outcome.clone()),
        Err(err) => {
            log::error!("Failed to load leads: {err}");
            std::process::exit(1);
        }
    };

    let (tx, mut rx) = mpsc::unbounded_channel::<Notification>();
    let mut controller = LeadSearchController::with_options(
        backend,
        tx,
        view_config.default_page_size,
        view_config.paging_mode,
    );

    log::info!("Starting lead browser with {} leads", controller.backend().leads().len());
    controller.connect().await;
    render(&controller.page_data());
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(err) => {
                log::error!("Failed to read command: {err}");
                break;
            }
        };

        let (command, argument) = match line.trim().split_once(' ') {
            Some((command, argument)) => (command, argument.trim()),
            None => (line.trim(), ""),
        };

        match command {
            "search" => controller.set_search_key(argument).await,
            "source" => controller.set_lead_source(argument).await,
            "size" => {
                if let Err(err) = controller.select_page_size(argument).await {
                    println!("{err}");
                    continue;
                }
            }
            "next" => {
                if !controller.go_to_next_page().await {
                    println!("already on the last page");
                }
            }
            "prev" => {
                if !controller.go_to_previous_page().await {
                    println!("already on the first page");
                }
            }
            "refresh" => controller.refresh().await,
            "sync" => {
                if let Err(err) = controller.sync_contacts().await {
                    log::debug!("Sync finished with error: {err}");
                }
                print_notifications(&mut rx);
                continue;
            }
            "show" => {}
            "quit" | "exit" => break,
            "" => continue,
            _ => {
                println!("{HELP}");
                continue;
            }
        }

        render(&controller.page_data());
        print_notifications(&mut rx);
    }

    log::info!("Lead browser stopped");
}
