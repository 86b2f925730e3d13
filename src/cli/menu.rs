//! Interactive numbered menu: generate, display, optionally archive.

use super::render::{self, RULE_WIDTH};
use crate::activity::open_activity_log;
use crate::archive::{Archive, ArchivedItem};
use crate::completion::CompletionClient;
use crate::config::{CREDENTIAL_ENV_VAR, Config};
use crate::generation::GenerationService;
use crate::prompts::{
    CampaignRequest, ContentKind, GenerationRequest, LeadScoreRequest, PitchRequest,
};
use crate::ui::style as ui;
use anyhow::Result;
use dialoguer::{Confirm, Input};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Generate(ContentKind),
    ViewSaved,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Generate(ContentKind::Campaign)),
            "2" => Some(Self::Generate(ContentKind::Pitch)),
            "3" => Some(Self::Generate(ContentKind::LeadScore)),
            "4" => Some(Self::ViewSaved),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Kind picked in the "view saved items" submenu; `None` means back.
pub fn parse_saved_choice(input: &str) -> Option<ContentKind> {
    match input.trim() {
        "1" => Some(ContentKind::Campaign),
        "2" => Some(ContentKind::Pitch),
        "3" => Some(ContentKind::LeadScore),
        _ => None,
    }
}

/// Parse a 1-based item number typed by the user.
pub fn parse_item_number(input: &str) -> Option<usize> {
    input.trim().parse::<usize>().ok().filter(|n| *n > 0)
}

pub async fn run_menu(config: &Config) -> Result<()> {
    print_header();

    if config.credential().is_none() {
        println!(
            "  {} {CREDENTIAL_ENV_VAR} not found in environment variables.",
            ui::failure("✗")
        );
        println!("  Set it (or api_key in config.toml) and try again.");
        anyhow::bail!("{CREDENTIAL_ENV_VAR} is required for the interactive menu");
    }
    println!("  {} API key loaded", ui::success("✓"));

    let activity = open_activity_log(&config.activity_db_path()).await;
    let service = GenerationService::new(
        CompletionClient::from_config(config),
        activity,
        config.prompts.max_field_chars,
    );
    let archive = Archive::new(config.archive_dir());

    loop {
        print_menu();
        let input: String = Input::new()
            .with_prompt("Select option (1-5)")
            .allow_empty(true)
            .interact_text()?;

        match MenuChoice::parse(&input) {
            Some(MenuChoice::Generate(kind)) => {
                let request = ask_request(kind)?;
                generate(&service, &archive, &request).await?;
            }
            Some(MenuChoice::ViewSaved) => view_saved(&archive)?,
            Some(MenuChoice::Exit) => {
                println!("\n  Thank you for using MarketMind!");
                println!("{}\n", ui::rule(RULE_WIDTH));
                return Ok(());
            }
            None => println!("\n  {} Invalid option. Please select 1-5.", ui::failure("✗")),
        }
    }
}

fn print_header() {
    println!();
    println!("{}", ui::rule(RULE_WIDTH));
    println!("  {}", ui::header("MARKETMIND - CLI"));
    println!("  {}", ui::dim("AI-powered marketing content generation"));
    println!("{}", ui::rule(RULE_WIDTH));
    println!();
}

fn print_menu() {
    println!();
    println!("  {}", ui::header("MAIN MENU"));
    println!("  {} Generate Ad Campaign", ui::accent("1."));
    println!("  {} Create Sales Pitch", ui::accent("2."));
    println!("  {} Score Lead", ui::accent("3."));
    println!("  {} View Saved Items", ui::accent("4."));
    println!("  {} Exit", ui::accent("5."));
    println!("{}", ui::dim("-".repeat(RULE_WIDTH)));
}

/// Read one field. Blank input leaves the field unset.
fn ask(prompt: &str) -> Result<Option<String>> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    let value = value.trim();
    Ok((!value.is_empty()).then(|| value.to_string()))
}

fn hint(text: &str) {
    println!("\n  {}", ui::dim(text));
}

fn ask_request(kind: ContentKind) -> Result<GenerationRequest> {
    Ok(match kind {
        ContentKind::Campaign => {
            println!("\n  {}\n", ui::header("AD CAMPAIGN GENERATOR"));
            let product = ask("Product/Service")?;
            let audience = ask("Target Audience")?;
            hint("Platforms: Facebook, Instagram, Google, LinkedIn, Twitter, TikTok, Email, Any");
            let platform = ask("Platform")?;
            hint("Goals: Brand Awareness, Lead Generation, Direct Sales, Engagement");
            let goal = ask("Campaign Goal")?;
            hint("Tones: Professional, Casual, Witty, Urgent/FOMO, Empathetic, Luxury");
            let tone = ask("Tone of Voice")?;
            CampaignRequest {
                product,
                audience,
                platform,
                goal,
                tone,
            }
            .into()
        }
        ContentKind::Pitch => {
            println!("\n  {}\n", ui::header("SALES PITCH CREATOR"));
            let product = ask("Product/Service")?;
            let customer_persona = ask("Customer Persona")?;
            let pain_points = ask("Customer Pain Points")?;
            hint("Formats: Elevator Pitch, Cold Email, LinkedIn DM, Cold Call Script");
            let format = ask("Pitch Format")?;
            PitchRequest {
                product,
                customer_persona,
                pain_points,
                format,
            }
            .into()
        }
        ContentKind::LeadScore => {
            println!("\n  {}\n", ui::header("LEAD SCORING"));
            LeadScoreRequest {
                name: ask("Lead Name")?,
                budget: ask("Budget ($)")?,
                need: ask("Need")?,
                urgency: ask("Urgency (Low/Medium/High)")?,
            }
            .into()
        }
    })
}

async fn generate(
    service: &GenerationService,
    archive: &Archive,
    request: &GenerationRequest,
) -> Result<()> {
    println!("\n  {}\n", ui::dim("Generating... Please wait..."));

    let text = match service.handle_narrative(request).await {
        Ok(text) => text,
        Err(error) => {
            println!("  {} Error: {error}", ui::failure("✗"));
            return Ok(());
        }
    };

    let kind = request.kind();
    println!("{}", ui::rule(RULE_WIDTH));
    println!("  {} {} generated", ui::success("✓"), kind);
    println!("{}", ui::rule(RULE_WIDTH));
    println!("{text}");
    println!("{}", ui::rule(RULE_WIDTH));

    let save = Confirm::new()
        .with_prompt(format!("Save this {}?", kind.to_string().to_lowercase()))
        .default(false)
        .interact()?;
    if save {
        match archive.append(kind, ArchivedItem::new(request, text)) {
            Ok(_) => println!(
                "  {} Saved to '{}'",
                ui::success("✓"),
                kind.archive_file_name()
            ),
            Err(error) => {
                tracing::warn!(kind = %kind, error = %error, "failed to archive item");
                println!("  {} Could not save: {error}", ui::failure("✗"));
            }
        }
    }
    Ok(())
}

fn view_saved(archive: &Archive) -> Result<()> {
    println!("\n  {}\n", ui::header("SAVED ITEMS"));
    println!("  {} View Campaigns", ui::accent("1."));
    println!("  {} View Pitches", ui::accent("2."));
    println!("  {} View Lead Scores", ui::accent("3."));
    println!("  {} Back to Main Menu", ui::accent("4."));

    let input: String = Input::new()
        .with_prompt("Select option")
        .allow_empty(true)
        .interact_text()?;
    let Some(kind) = parse_saved_choice(&input) else {
        return Ok(());
    };

    if !print_saved(archive, kind, None) {
        return Ok(());
    }

    let detail: String = Input::new()
        .with_prompt("View full details of an item? (Enter number or 'n')")
        .allow_empty(true)
        .interact_text()?;
    if let Some(number) = parse_item_number(&detail) {
        print_saved(archive, kind, Some(number));
    }
    Ok(())
}

/// Print the listing for `kind`, or one item in full when `number` is set.
/// Returns whether anything was listed. Archive failures are reported, not
/// propagated.
pub fn print_saved(archive: &Archive, kind: ContentKind, number: Option<usize>) -> bool {
    let items = match archive.list_all(kind) {
        Ok(items) => items,
        Err(error) => {
            tracing::warn!(kind = %kind, error = %error, "failed to read archive");
            println!("  {} Error: {error}", ui::failure("✗"));
            return false;
        }
    };

    match number {
        None => {
            println!("\n{}", render::saved_listing(kind, &items));
            !items.is_empty()
        }
        Some(number) => {
            match number.checked_sub(1).and_then(|index| items.get(index)) {
                Some(item) => {
                    println!("\n{}", ui::rule(RULE_WIDTH));
                    println!("{}", item.to_pretty_json());
                    println!("{}", ui::rule(RULE_WIDTH));
                }
                None => println!("  {}", render::out_of_range(kind, number, items.len())),
            }
            true
        }
    }
}
