use anyhow::{bail, Context, Result};
use askama::Template;
use clap::{Parser, Subcommand};

use navmenu::menu;

#[derive(Parser, Debug)]
#[command(name = "navmenu", version, about = "Inspects the application's static navigation menu")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Prints the menu entries in display order.
    List {
        /// Emit the entries as JSON instead of a text table.
        #[arg(long)]
        json: bool,
    },
    /// Prints the rendered hyperlink label for each entry.
    Render {
        /// Render only the entry with this key.
        #[arg(long)]
        key: Option<String>,
    },
    /// Verifies the menu invariants (unique keys, known absolute routes).
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::List { json } => {
            let items = menu::menu_items();
            if json {
                let mut s = serde_json::to_string_pretty(items).context("serialize menu")?;
                s.push('\n');
                print!("{s}");
            } else {
                for item in items {
                    println!("{}  {}  {}", item.key, item.path, item.label_text);
                }
            }
        }
        Command::Render { key } => match key {
            Some(key) => {
                let Some(item) = menu::find(&key) else {
                    bail!("No menu entry with key '{key}'");
                };
                println!("{}", item.label().render().context("render label")?);
            }
            None => {
                for item in menu::menu_items() {
                    println!("{}", item.label().render().context("render label")?);
                }
            }
        },
        Command::Check => {
            let items = menu::menu_items();
            menu::validate(items).context("menu invariants")?;
            println!("ok: {} menu entries", items.len());
        }
    }

    Ok(())
}
