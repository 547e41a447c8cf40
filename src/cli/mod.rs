use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use crate::application::{FxPair, LedgerService};
use crate::domain::{
    Category, Cents, ExchangeRates, Kind, TransactionId, format_bs, format_usd, parse_amount,
    to_usd_cents,
};
use crate::io::Exporter;

/// Cuadre - Session income and expense tracker
#[derive(Parser)]
#[command(name = "cuadre")]
#[command(about = "An in-memory income/expense tracker for a single interactive session")]
#[command(version)]
pub struct Cli {
    /// Official (BCV) exchange rate in Bs per USD (e.g. "36.50")
    #[arg(long, default_value = "36.50")]
    pub official_rate: String,

    /// Parallel-market exchange rate in Bs per USD (e.g. "38.20")
    #[arg(long, default_value = "38.20")]
    pub parallel_rate: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let official = parse_amount(&self.official_rate)
            .context("Invalid official rate format. Use '36.50' or '36'")?;
        let parallel = parse_amount(&self.parallel_rate)
            .context("Invalid parallel rate format. Use '38.20' or '38'")?;
        if official <= 0 || parallel <= 0 {
            anyhow::bail!("Exchange rates must be positive");
        }

        let mut service = LedgerService::new(ExchangeRates::new(official, parallel));

        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        run_session(&mut service, stdin.lock(), stdout.lock(), self.verbose)
    }
}

/// Drive one interactive session: read commands until `quit` or EOF.
/// The ledger lives exactly as long as this loop; every user error is
/// recoverable and leaves the loop running.
pub fn run_session<R: BufRead, W: Write>(
    service: &mut LedgerService,
    input: R,
    mut output: W,
    verbose: bool,
) -> Result<()> {
    writeln!(
        output,
        "cuadre {} - type 'help' for commands",
        env!("CARGO_PKG_VERSION")
    )?;
    print_rates(&mut output, service.rates())?;

    for line in input.lines() {
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = words.split_first() else {
            continue;
        };

        if matches!(command, "quit" | "exit") {
            break;
        }

        if let Err(err) = dispatch(service, &mut output, command, args) {
            writeln!(output, "Error: {:#}", err)?;
        }
    }

    if verbose {
        eprintln!(
            "[session] {} transaction(s) discarded at exit",
            service.transactions().len()
        );
    }
    writeln!(output, "Session ended. Nothing was saved.")?;
    Ok(())
}

fn dispatch<W: Write>(
    service: &mut LedgerService,
    output: &mut W,
    command: &str,
    args: &[&str],
) -> Result<()> {
    match command {
        "income" => run_add_command(service, output, Kind::Income, args),
        "expense" => run_add_command(service, output, Kind::Expense, args),
        "edit" => run_edit_command(service, output, args),
        "delete" => run_delete_command(service, output, args),
        "list" => run_list_command(service, output),
        "summary" => run_summary_command(service, output, args),
        "categories" => run_categories_command(output, args),
        "convert" => run_convert_command(service, output, args),
        "rates" => print_rates(output, service.rates()),
        "export" => run_export_command(service, output, args),
        "help" => print_help(output),
        _ => anyhow::bail!("Unknown command '{}'. Type 'help' for the command list.", command),
    }
}

fn run_add_command<W: Write>(
    service: &mut LedgerService,
    output: &mut W,
    kind: Kind,
    args: &[&str],
) -> Result<()> {
    if args.len() != 2 {
        anyhow::bail!("Usage: {} <amount> <category>", kind.as_str());
    }
    let amount_cents = parse_amount(args[0])
        .with_context(|| format!("Invalid amount '{}'. Use '1500' or '1500,50'", args[0]))?;
    let category = parse_category(kind, args[1])?;

    let transaction = service.add_transaction(kind, amount_cents, category)?;

    writeln!(
        output,
        "Recorded {}: {} Bs ({}) [#{}]",
        transaction.kind,
        format_bs(transaction.amount_cents),
        transaction.category,
        transaction.id
    )?;
    Ok(())
}

fn run_edit_command<W: Write>(
    service: &mut LedgerService,
    output: &mut W,
    args: &[&str],
) -> Result<()> {
    if args.len() != 3 {
        anyhow::bail!("Usage: edit <id> <amount> <category>");
    }
    let id = parse_id(args[0])?;
    let amount_cents = parse_amount(args[1])
        .with_context(|| format!("Invalid amount '{}'. Use '1500' or '1500,50'", args[1]))?;
    let kind = service.get_transaction(id)?.kind;
    let category = parse_category(kind, args[2])?;

    let transaction = service.update_transaction(id, amount_cents, category)?;

    writeln!(
        output,
        "Updated #{}: {} Bs ({})",
        transaction.id,
        format_bs(transaction.amount_cents),
        transaction.category
    )?;
    Ok(())
}

fn run_delete_command<W: Write>(
    service: &mut LedgerService,
    output: &mut W,
    args: &[&str],
) -> Result<()> {
    if args.len() != 1 {
        anyhow::bail!("Usage: delete <id>");
    }
    let id = parse_id(args[0])?;

    let removed = service.delete_transaction(id)?;

    writeln!(
        output,
        "Deleted #{}: {} Bs ({})",
        removed.id,
        format_bs(removed.amount_cents),
        removed.category
    )?;
    Ok(())
}

fn run_list_command<W: Write>(service: &LedgerService, output: &mut W) -> Result<()> {
    let transactions = service.transactions();
    if transactions.is_empty() {
        writeln!(output, "No transactions yet.")?;
        return Ok(());
    }

    let rates = service.rates();
    writeln!(
        output,
        "{:<6} {:<8} {:<16} {:>16} {:>10} {:>10}  {}",
        "ID", "KIND", "CATEGORY", "AMOUNT (Bs)", "BCV ($)", "PAR ($)", "CREATED"
    )?;
    writeln!(output, "{}", "-".repeat(92))?;
    // Most recent first; the ledger itself keeps insertion order.
    for t in transactions.iter().rev() {
        let sign = if t.is_income() { "+" } else { "-" };
        writeln!(
            output,
            "{:<6} {:<8} {:<16} {:>16} {:>10} {:>10}  {}",
            format!("#{}", t.id),
            t.kind,
            t.category,
            format!("{}{}", sign, format_bs(t.amount_cents)),
            format_usd(to_usd_cents(t.amount_cents, rates.official)),
            format_usd(to_usd_cents(t.amount_cents, rates.parallel)),
            t.created_at.format("%Y-%m-%d %H:%M:%S")
        )?;
    }
    Ok(())
}

fn run_summary_command<W: Write>(
    service: &LedgerService,
    output: &mut W,
    args: &[&str],
) -> Result<()> {
    let report = service.summary();

    if args.first().copied() == Some("json") {
        writeln!(output, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    print_figure(output, "Income", report.totals.income, report.income_usd)?;
    print_figure(output, "Expenses", report.totals.expenses, report.expenses_usd)?;
    print_figure(output, "Balance", report.totals.balance, report.balance_usd)?;

    if let Some(trend) = report.trend {
        writeln!(output, "Trend: {} ({}%)", trend.direction, trend.percentage)?;
    }
    Ok(())
}

fn run_categories_command<W: Write>(output: &mut W, args: &[&str]) -> Result<()> {
    let kinds: Vec<Kind> = match args.first() {
        Some(word) => vec![Kind::from_str(word).ok_or_else(|| {
            anyhow::anyhow!("Unknown kind '{}'. Use 'income' or 'expense'", word)
        })?],
        None => vec![Kind::Income, Kind::Expense],
    };

    for kind in kinds {
        writeln!(output, "{} categories:", kind)?;
        for category in Category::all_for(kind) {
            writeln!(output, "  {:<16} ({})", category.as_str(), category.icon())?;
        }
    }
    Ok(())
}

fn run_convert_command<W: Write>(
    service: &LedgerService,
    output: &mut W,
    args: &[&str],
) -> Result<()> {
    if args.len() != 1 {
        anyhow::bail!("Usage: convert <amount>");
    }
    let amount_cents = parse_amount(args[0])
        .with_context(|| format!("Invalid amount '{}'. Use '1500' or '1500,50'", args[0]))?;

    let rates = service.rates();
    let usd = FxPair::of(amount_cents, rates);
    writeln!(
        output,
        "{} Bs = ${} at BCV ({}) / ${} at parallel ({})",
        format_bs(amount_cents),
        format_usd(usd.official),
        format_bs(rates.official),
        format_usd(usd.parallel),
        format_bs(rates.parallel)
    )?;
    Ok(())
}

fn run_export_command<W: Write>(
    service: &LedgerService,
    output: &mut W,
    args: &[&str],
) -> Result<()> {
    let exporter = Exporter::new(service);

    match args.first().copied().unwrap_or("csv") {
        "csv" => {
            exporter.export_transactions_csv(&mut *output)?;
        }
        "json" => {
            exporter.export_session_json(&mut *output)?;
            writeln!(output)?;
        }
        other => {
            anyhow::bail!("Invalid export format '{}'. Valid formats: csv, json", other);
        }
    }
    Ok(())
}

fn print_figure<W: Write>(output: &mut W, label: &str, amount: Cents, usd: FxPair) -> Result<()> {
    writeln!(
        output,
        "{:<10} {:>18} Bs   BCV: ${:>12}   Parallel: ${:>12}",
        label,
        format_bs(amount),
        format_usd(usd.official),
        format_usd(usd.parallel)
    )?;
    Ok(())
}

fn print_rates<W: Write>(output: &mut W, rates: ExchangeRates) -> Result<()> {
    writeln!(
        output,
        "Rates: BCV {} Bs/USD | Parallel {} Bs/USD",
        format_bs(rates.official),
        format_bs(rates.parallel)
    )?;
    Ok(())
}

fn print_help<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output, "Commands:")?;
    writeln!(output, "  income <amount> <category>      Record an income")?;
    writeln!(output, "  expense <amount> <category>     Record an expense")?;
    writeln!(output, "  edit <id> <amount> <category>   Replace a transaction's amount/category")?;
    writeln!(output, "  delete <id>                     Remove a transaction")?;
    writeln!(output, "  list                            Show history, most recent first")?;
    writeln!(output, "  summary [json]                  Totals, trend and USD equivalents")?;
    writeln!(output, "  categories [income|expense]     List valid categories")?;
    writeln!(output, "  convert <amount>                Show USD equivalents of an amount")?;
    writeln!(output, "  rates                           Show the session's exchange rates")?;
    writeln!(output, "  export [csv|json]               Dump the session to stdout")?;
    writeln!(output, "  quit                            End the session (nothing is saved)")?;
    Ok(())
}

fn parse_id(word: &str) -> Result<TransactionId> {
    word.trim_start_matches('#')
        .parse()
        .with_context(|| format!("Invalid transaction id '{}'", word))
}

fn parse_category(kind: Kind, word: &str) -> Result<Category> {
    Category::from_str(word).ok_or_else(|| {
        anyhow::anyhow!(
            "Unknown category '{}'. Try 'categories {}'",
            word,
            kind.as_str()
        )
    })
}
