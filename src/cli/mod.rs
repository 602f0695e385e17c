use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::application::{LedgerService, ValidationRules};
use crate::domain::{format_cents, CategoryFilter, Expense, ExpenseId, Theme};

/// Spesa - Expense Ledger
#[derive(Parser)]
#[command(name = "spesa")]
#[command(about = "A local-first expense ledger for the command line")]
#[command(version)]
pub struct Cli {
    /// Database file path
    #[arg(short, long, default_value = "spesa.db")]
    pub database: String,

    /// Reject expenses with a negative amount
    #[arg(long, global = true)]
    pub reject_negative: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new database
    Init,

    /// Record a new expense
    Add {
        /// Description of the expense
        description: String,

        /// Amount (e.g., "12.50" or "12")
        amount: String,

        /// Category (e.g., "Food", "Rent")
        category: String,
    },

    /// Remove an expense by id
    Remove {
        /// Expense id (shown by `list`)
        id: ExpenseId,
    },

    /// List expenses, optionally restricted to one category
    List {
        /// Category to filter by ("all" or omit for everything)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show the total, optionally restricted to one category
    Total {
        /// Category to filter by ("all" or omit for everything)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List the distinct categories in use
    Categories,

    /// Theme preference commands
    #[command(subcommand)]
    Theme(ThemeCommands),

    /// Export data to CSV or JSON
    Export {
        /// Format: csv, json
        format: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ThemeCommands {
    /// Show the current theme
    Show,

    /// Switch between light and dark
    Toggle,

    /// Set the theme explicitly
    Set {
        /// Theme name: light, dark
        theme: String,
    },
}

impl Cli {
    fn rules(&self) -> ValidationRules {
        ValidationRules {
            allow_negative_amounts: !self.reject_negative,
        }
    }

    async fn connect(&self) -> Result<LedgerService> {
        let service = LedgerService::connect(&self.database)
            .await?
            .with_rules(self.rules());
        Ok(service)
    }

    pub async fn run(self) -> Result<()> {
        match &self.command {
            Commands::Init => {
                LedgerService::init(&self.database).await?;
                println!("Database initialized: {}", self.database);
            }

            Commands::Add {
                description,
                amount,
                category,
            } => {
                let mut service = self.connect().await?;
                let expense = service.add_expense(description, amount, category).await?;
                println!(
                    "Recorded expense #{}: {} {} ({})",
                    expense.id,
                    format_cents(expense.amount_cents),
                    expense.description,
                    expense.category
                );
                print_notification(&service, self.verbose);
            }

            Commands::Remove { id } => {
                let mut service = self.connect().await?;
                match service.remove_expense(*id).await? {
                    Some(expense) => {
                        println!(
                            "Removed expense #{}: {} {}",
                            expense.id,
                            format_cents(expense.amount_cents),
                            expense.description
                        );
                    }
                    None => println!("No expense with id {}", id),
                }
                print_notification(&service, self.verbose);
            }

            Commands::List { category } => {
                let service = self.connect().await?;
                let filter = CategoryFilter::from_arg(category.as_deref());
                run_list_command(&service, &filter);
            }

            Commands::Total { category } => {
                let service = self.connect().await?;
                let filter = CategoryFilter::from_arg(category.as_deref());
                println!("Total ({}): {}", filter, format_cents(service.total(&filter)));
            }

            Commands::Categories => {
                let service = self.connect().await?;
                let categories = service.categories();
                if categories.is_empty() {
                    println!("No categories yet.");
                } else {
                    for category in categories {
                        println!("{}", category);
                    }
                }
            }

            Commands::Theme(theme_cmd) => {
                let mut service = self.connect().await?;
                run_theme_command(&mut service, theme_cmd).await?;
            }

            Commands::Export { format, output } => {
                let service = self.connect().await?;
                run_export_command(&service, format, output.as_deref())?;
            }
        }

        Ok(())
    }
}

fn print_notification(service: &LedgerService, verbose: bool) {
    if verbose {
        if let Some(notification) = service.current_notification() {
            eprintln!("[{:?}] {}", notification.kind, notification.message);
        }
    }
}

fn run_list_command(service: &LedgerService, filter: &CategoryFilter) {
    let expenses: Vec<&Expense> = service.expenses(filter);
    if expenses.is_empty() {
        println!("No expenses found.");
        return;
    }

    println!("{:<6} {:<30} {:<16} {:>12}", "ID", "DESCRIPTION", "CATEGORY", "AMOUNT");
    println!("{}", "-".repeat(66));
    for expense in &expenses {
        println!(
            "{:<6} {:<30} {:<16} {:>12}",
            expense.id,
            truncate(&expense.description, 30),
            truncate(&expense.category, 16),
            format_cents(expense.amount_cents)
        );
    }
    println!("{}", "-".repeat(66));
    println!(
        "{:<54} {:>12}",
        format!("TOTAL ({})", filter),
        format_cents(service.total(filter))
    );
}

async fn run_theme_command(service: &mut LedgerService, cmd: &ThemeCommands) -> Result<()> {
    match cmd {
        ThemeCommands::Show => {
            println!("{}", service.theme());
        }

        ThemeCommands::Toggle => {
            let theme = service.toggle_theme().await?;
            println!("Theme set to {}", theme);
        }

        ThemeCommands::Set { theme } => {
            let theme = Theme::from_str(theme).with_context(|| {
                format!("Invalid theme '{}'. Valid themes: light, dark", theme)
            })?;
            service.set_theme(theme).await?;
            println!("Theme set to {}", theme);
        }
    }
    Ok(())
}

fn run_export_command(service: &LedgerService, format: &str, output: Option<&str>) -> Result<()> {
    use crate::io::Exporter;
    use std::fs::File;
    use std::io::{stdout, Write};

    let exporter = Exporter::new(service);

    let writer: Box<dyn Write> = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path))?;
            Box::new(file)
        }
        None => Box::new(stdout()),
    };

    match format {
        "csv" => {
            let count = exporter.export_expenses_csv(writer)?;
            if output.is_some() {
                eprintln!("Exported {} expenses", count);
            }
        }
        "json" => {
            let snapshot = exporter.export_snapshot_json(writer)?;
            if output.is_some() {
                eprintln!("Exported snapshot: {} expenses", snapshot.expenses.len());
            }
        }
        _ => {
            anyhow::bail!("Invalid export format '{}'. Valid formats: csv, json", format);
        }
    }

    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
