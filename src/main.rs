use std::io::{self, BufRead, Write};

use colored::Colorize;

use pantry_chef::config::AppConfig;
use pantry_chef::heuristics::apply_pantry_heuristics;
use pantry_chef::providers::{GoogleProvider, LlmProvider};
use pantry_chef::render::print_recipe;
use pantry_chef::resolve::resolve_model_text;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("{}", "========================================".cyan());
    println!("{}", "       Pantry Chef recipe helper        ".cyan());
    println!("{}", "========================================".cyan());
    println!();

    let config = AppConfig::load()?;
    // A missing API key is fatal at startup, not per request
    let provider = GoogleProvider::new(&config.provider)?;

    let stdin = io::stdin();
    loop {
        print!(
            "{}",
            "Ingredients on hand, comma separated ('exit' to quit): ".yellow()
        );
        io::stdout().flush()?;

        let mut ingredients = String::new();
        if stdin.lock().read_line(&mut ingredients)? == 0 {
            break;
        }
        let ingredients = ingredients.trim().to_string();
        if ingredients.is_empty() || ingredients.eq_ignore_ascii_case("exit") {
            println!("{}", "\nClosing up the kitchen. Enjoy your meal!".green());
            break;
        }

        print!(
            "{}",
            "Dietary preferences or restrictions (e.g. vegan, gluten-free, halal) [optional]: "
                .yellow()
        );
        io::stdout().flush()?;

        let mut preferences = String::new();
        stdin.lock().read_line(&mut preferences)?;
        let preferences = preferences.trim().to_string();

        println!("{}", "\nCooking up a suggestion...".magenta());

        // Transport and response-shape errors are reported per request; the
        // loop itself never dies
        match provider.generate(&ingredients, &preferences).await {
            Ok(raw) => {
                let recipe = resolve_model_text(&raw);
                let recipe = apply_pantry_heuristics(&ingredients, &preferences, recipe);
                print_recipe(&recipe);
            }
            Err(e) => {
                eprintln!("{}", format!("Request failed: {}", e).red());
            }
        }

        println!("{}", "-".repeat(60));
        println!();
    }

    Ok(())
}
