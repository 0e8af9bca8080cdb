//! Expense CLI commands
//!
//! Implements the commands for adding, listing and deleting expenses, and for
//! managing the monthly income.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};

use super::Session;
use crate::display::{format_expense_table, format_summary};
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_json, export_yaml};
use crate::input::{parse_income, ExpenseInput};
use crate::models::{Expense, PresetCategory};
use crate::services::Saved;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// JSON (machine-readable)
    Json,
    /// YAML (human-readable)
    Yaml,
}

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Add a new expense
    Add {
        /// Amount (e.g. "500" or "12.75")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category: Food, Travel, Shopping, Bills, Custom, or any other text
        category: String,
        /// Category text when CATEGORY is "Custom"
        #[arg(short, long)]
        custom: Option<String>,
        /// Expense date (DD/MM/YYYY or YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List all expenses with totals
    #[command(alias = "ls")]
    List,
    /// Delete an expense by its row number in `list`
    #[command(alias = "rm")]
    Delete {
        /// Row number (1-based)
        row: usize,
    },
    /// Show or set the monthly income
    Income {
        /// New monthly income
        #[arg(allow_hyphen_values = true)]
        amount: Option<String>,
    },
    /// Show total and balance
    Summary,
    /// List the preset categories
    Categories,
    /// Export expenses, income and totals
    Export {
        /// Output file path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Show current configuration and paths
    Config,
}

/// Handle an expense command; no command shows the list and summary
pub fn handle_expense_command(
    session: &mut Session,
    cmd: Option<ExpenseCommands>,
) -> ExpenseResult<()> {
    match cmd {
        Some(ExpenseCommands::Add {
            amount,
            category,
            custom,
            date,
        }) => {
            let input = ExpenseInput {
                amount,
                category: Some(category),
                custom_category: custom,
                date,
            };
            let expense = input.into_expense(&session.settings)?;
            let saved = session.service.add(expense.clone());

            println!("Added expense: {}", describe(session, &expense));
            report_save(&saved);
            print_summary(session);
        }

        Some(ExpenseCommands::List) | None => {
            print!(
                "{}",
                format_expense_table(session.service.store().entries(), &session.settings)
            );
            println!();
            print_summary(session);
        }

        Some(ExpenseCommands::Delete { row }) => {
            let saved = session.service.remove_row(row)?;
            println!("Deleted expense: {}", describe(session, &saved.value));
            report_save(&saved);
            print_summary(session);
        }

        Some(ExpenseCommands::Income { amount }) => {
            if let Some(text) = amount {
                let income = parse_income(&text)?;
                session.settings.monthly_income = income;
                session.settings.save(&session.paths)?;
                session.service.set_income(income);
                println!(
                    "Monthly income set to {}",
                    income.format_with_label(&session.settings.currency_label)
                );
            } else {
                println!(
                    "Monthly income: {}",
                    session
                        .service
                        .income()
                        .format_with_label(&session.settings.currency_label)
                );
            }
            print_summary(session);
        }

        Some(ExpenseCommands::Summary) => {
            println!("Expenses: {}", session.service.store().len());
            print_summary(session);
        }

        Some(ExpenseCommands::Categories) => {
            for preset in PresetCategory::ALL {
                if preset == PresetCategory::Custom {
                    println!("{}  (use --custom <TEXT>)", preset);
                } else {
                    println!("{}", preset);
                }
            }
        }

        Some(ExpenseCommands::Export {
            output,
            format,
            pretty,
        }) => match output {
            Some(path) => {
                let file = File::create(&path).map_err(|e| {
                    ExpenseError::Export(format!(
                        "Failed to create file {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                let mut writer = BufWriter::new(file);
                write_export(session, &mut writer, format, pretty)?;
                writer
                    .flush()
                    .map_err(|e| ExpenseError::Export(e.to_string()))?;
                println!("Expenses exported to: {}", path.display());
            }
            None => {
                let stdout = io::stdout();
                let mut writer = stdout.lock();
                write_export(session, &mut writer, format, pretty)?;
            }
        },

        Some(ExpenseCommands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory: {}", session.paths.base_dir().display());
            println!("Settings file:  {}", session.paths.settings_file().display());
            println!("Expense file:   {}", session.service.path().display());
            println!();
            println!("Settings:");
            println!(
                "  Monthly income:      {}",
                session.settings.monthly_income
            );
            println!("  Currency label:      {}", session.settings.currency_label);
            println!(
                "  Display date format: {}",
                session.settings.display_date_format
            );
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    session: &Session,
    writer: &mut W,
    format: ExportFormat,
    pretty: bool,
) -> ExpenseResult<()> {
    match format {
        ExportFormat::Json => export_json(&session.service, writer, pretty),
        ExportFormat::Yaml => export_yaml(&session.service, writer),
    }
}

fn describe(session: &Session, expense: &Expense) -> String {
    format!(
        "{} {} on {}",
        expense
            .amount
            .format_with_label(&session.settings.currency_label),
        expense.category,
        expense.date.format(&session.settings.display_date_format)
    )
}

fn report_save<T>(saved: &Saved<T>) {
    if let Some(err) = &saved.warning {
        eprintln!("Warning: change kept for this session but not saved: {}", err);
    }
}

fn print_summary(session: &Session) {
    print!(
        "{}",
        format_summary(
            session.service.total(),
            session.service.balance(),
            &session.settings
        )
    );
}
