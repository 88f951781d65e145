use analytics::series::{self, ChartSeries};
use analytics::{format_currency, format_currency_compact, format_percentage};
use anyhow::Context;
use chrono::Datelike;
use clap::{Args, Parser, Subcommand, ValueEnum};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use configuration::{Bounds, Config, ConfigArgs};
use core_types::{
    CompoundingFrequency, ContributionFrequency, ContributionTiming, GoalTag, GrowthParameters,
    MortgageParameters, PaymentFrequency, ValidationErrors,
};
use engine::{Calculator, GrowthOutcome, MortgageOutcome};
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Exit status for input that failed validation.
const INVALID_INPUT: u8 = 2;

/// The main entry point for the fincalc command-line calculator.
fn main() -> ExitCode {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines are flushed on exit.
    let _guard = match init_tracing(cli.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error setting up logging: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command failed.");
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Savings growth projections and mortgage amortization schedules.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    config: ConfigArgs,

    /// Print the full outcome as JSON instead of tables.
    #[arg(long, global = true)]
    json: bool,

    /// Pull out-of-range inputs back into bounds instead of rejecting them.
    #[arg(long, global = true)]
    clamp: bool,

    /// Calendar year of the first ledger row. Defaults to the current year.
    #[arg(long, global = true)]
    start_year: Option<i32>,

    /// Write logs to this file instead of stderr.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Project a savings balance forward year by year.
    Growth(GrowthArgs),
    /// Build the payment schedule for a fixed-rate mortgage.
    Mortgage(MortgageArgs),
    /// Show the active input bounds and assumptions.
    Limits,
}

#[derive(Args)]
struct GrowthArgs {
    /// Initial amount invested.
    #[arg(long, default_value = "10000")]
    principal: Decimal,

    /// Amount added each contribution period.
    #[arg(long, default_value = "500")]
    contribution: Decimal,

    /// Nominal annual rate in percent (e.g. 7 for 7%).
    #[arg(long, default_value = "7")]
    rate: Decimal,

    /// Horizon in years. Defaults to the goal's typical horizon.
    #[arg(long)]
    years: Option<u32>,

    /// How often interest is credited (daily, monthly, quarterly, annually).
    #[arg(long, default_value_t = CompoundingFrequency::Monthly)]
    compounding: CompoundingFrequency,

    /// How often a contribution is made (monthly, quarterly, annually).
    #[arg(long, default_value_t = ContributionFrequency::Monthly)]
    contribution_frequency: ContributionFrequency,

    /// Whether deposits land at the beginning or end of each sub-period.
    #[arg(long, default_value_t = ContributionTiming::Beginning)]
    timing: ContributionTiming,

    /// Annual inflation in percent.
    #[arg(long, default_value = "3")]
    inflation: Decimal,

    /// Tax rate on gains in percent.
    #[arg(long, default_value = "15")]
    tax: Decimal,

    /// Savings goal, used for the default horizon.
    #[arg(long, default_value_t = GoalTag::Retirement)]
    goal: GoalTag,
}

#[derive(Args)]
struct MortgageArgs {
    /// Purchase price of the home.
    #[arg(long, default_value = "300000")]
    price: Decimal,

    /// Cash paid up front.
    #[arg(long, default_value = "60000")]
    down_payment: Decimal,

    /// Nominal annual rate in percent.
    #[arg(long, default_value = "6")]
    rate: Decimal,

    /// Loan term in years.
    #[arg(long, default_value_t = 30)]
    term: u32,

    /// How often a payment is made (monthly, quarterly, annually).
    #[arg(long, default_value_t = PaymentFrequency::Monthly)]
    frequency: PaymentFrequency,

    /// Annual property tax.
    #[arg(long, default_value = "0")]
    property_tax: Decimal,

    /// Annual homeowner's insurance.
    #[arg(long, default_value = "0")]
    insurance: Decimal,

    /// Monthly mortgage insurance.
    #[arg(long, default_value = "0")]
    pmi: Decimal,

    /// Monthly HOA dues.
    #[arg(long, default_value = "0")]
    hoa: Decimal,

    /// Show one row per year or one row per payment.
    #[arg(long, value_enum, default_value_t = ScheduleView::Yearly)]
    schedule: ScheduleView,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ScheduleView {
    Yearly,
    Full,
}

impl From<GrowthArgs> for GrowthParameters {
    fn from(args: GrowthArgs) -> Self {
        Self {
            principal: args.principal,
            contribution: args.contribution,
            annual_rate: args.rate,
            years: args.years,
            compounding: args.compounding,
            contribution_frequency: args.contribution_frequency,
            contribution_timing: args.timing,
            inflation_rate: args.inflation,
            tax_rate: args.tax,
            goal: args.goal,
        }
    }
}

impl From<&MortgageArgs> for MortgageParameters {
    fn from(args: &MortgageArgs) -> Self {
        Self {
            home_price: args.price,
            down_payment: args.down_payment,
            annual_rate: args.rate,
            term_years: args.term,
            payment_frequency: args.frequency,
            property_tax_annual: args.property_tax,
            insurance_annual: args.insurance,
            mortgage_insurance_monthly: args.pmi,
            hoa_monthly: args.hoa,
        }
    }
}

// ==============================================================================
// Setup
// ==============================================================================

/// Logs go to stderr, or through a non-blocking writer to `log_file`.
/// Verbosity comes from `RUST_LOG` and defaults to warnings only.
fn init_tracing(log_file: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = FmtSubscriber::builder().with_env_filter(filter);

    match log_file {
        Some(path) => {
            let directory = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file_name = path.file_name().context("--log-file must name a file")?;
            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(directory, file_name));
            tracing::subscriber::set_global_default(
                builder.with_writer(writer).with_ansi(false).finish(),
            )?;
            Ok(Some(guard))
        }
        None => {
            tracing::subscriber::set_global_default(builder.with_writer(std::io::stderr).finish())?;
            Ok(None)
        }
    }
}

fn load_config(args: &ConfigArgs) -> anyhow::Result<Config> {
    let config = if args.config.is_some() {
        args.load()
    } else {
        configuration::load_config(configuration::default_config_path().as_deref())
    };
    config.context("Failed to load configuration")
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = load_config(&cli.config)?;
    let start_year = cli.start_year.unwrap_or_else(|| chrono::Local::now().year());
    let output = Output {
        json: cli.json,
        start_year,
    };

    match cli.command {
        Commands::Growth(args) => {
            let mut params = GrowthParameters::from(args);
            if cli.clamp {
                params = validation::clamp_growth(params, &config);
            }
            let calculator = Calculator::new(config);
            match calculator.project_growth(params) {
                Ok(outcome) => output.growth(&outcome)?,
                Err(errors) => return Ok(report_invalid(&errors)),
            }
        }
        Commands::Mortgage(args) => {
            let mut params = MortgageParameters::from(&args);
            if cli.clamp {
                params = validation::clamp_mortgage(params, &config);
            }
            let calculator = Calculator::new(config);
            match calculator.schedule_mortgage(params) {
                Ok(outcome) => output.mortgage(&outcome, args.schedule)?,
                Err(errors) => return Ok(report_invalid(&errors)),
            }
        }
        Commands::Limits => output.limits(&config)?,
    }

    Ok(ExitCode::SUCCESS)
}

/// One violation per line, then a non-zero exit.
fn report_invalid(errors: &ValidationErrors) -> ExitCode {
    tracing::warn!(count = errors.errors().len(), "Input rejected.");
    eprintln!("Invalid input:");
    for error in errors.errors() {
        eprintln!("  {}: {}", error.field, error.message);
    }
    ExitCode::from(INVALID_INPUT)
}

// ==============================================================================
// Rendering
// ==============================================================================

struct Output {
    json: bool,
    start_year: i32,
}

impl Output {
    fn growth(&self, outcome: &GrowthOutcome) -> anyhow::Result<()> {
        let base = Some(self.start_year);
        let ledger = &outcome.periods;
        let (contributed, earned) =
            series::growth_contribution_vs_interest(outcome.parameters.principal, ledger, base);

        if self.json {
            let charts = vec![
                series::growth_balance_series(ledger, base),
                series::growth_real_value_series(ledger, base),
                series::growth_after_tax_series(ledger, base),
                contributed,
                earned,
            ];
            return print_json(&serde_json::json!({ "outcome": outcome, "charts": charts }));
        }

        let s = &outcome.summary;
        let mut summary = new_table(vec!["Summary", ""]);
        add_pairs(
            &mut summary,
            vec![
                ("Horizon", format!("{} years", s.years)),
                ("Total contributed", format_currency(s.total_contributed)),
                ("Total interest", format_currency(s.total_interest)),
                ("Future value", format_currency(s.future_value)),
                ("In today's money", format_currency(s.inflation_adjusted_value)),
                ("After tax", format_currency(s.after_tax_value)),
                ("Effective annual rate", format_percentage(s.effective_annual_rate)),
                ("Sustainable monthly income", format_currency(s.sustainable_monthly_income)),
            ],
        );
        println!("{summary}");

        let mut table = new_table(vec![
            "Year",
            "Contributions",
            "Interest",
            "Balance",
            "Real value",
            "After tax",
            "Total contributed",
            "Total interest",
        ]);
        let cumulative = contributed.points.iter().zip(&earned.points);
        for (year, (put_in, interest)) in ledger.iter().zip(cumulative) {
            table.add_row(vec![
                Cell::new(&put_in.label),
                money(year.contributions),
                money(year.interest),
                money(year.ending_balance),
                money(year.real_value),
                money(year.after_tax_value),
                money(put_in.value),
                money(interest.value),
            ]);
        }
        println!("{table}");
        Ok(())
    }

    fn mortgage(&self, outcome: &MortgageOutcome, view: ScheduleView) -> anyhow::Result<()> {
        let base = Some(self.start_year);

        if self.json {
            let (principal, interest) = series::mortgage_split_series(&outcome.yearly, base);
            let charts: Vec<ChartSeries> = vec![
                series::mortgage_balance_series(&outcome.yearly, base),
                principal,
                interest,
            ];
            return print_json(&serde_json::json!({ "outcome": outcome, "charts": charts }));
        }

        let s = &outcome.summary;
        let mut summary = new_table(vec!["Summary", ""]);
        add_pairs(
            &mut summary,
            vec![
                ("Loan amount", format_currency(s.loan_amount)),
                ("Loan to value", format_percentage(s.loan_to_value)),
                ("Payments", s.payment_count.to_string()),
                ("Principal and interest", format_currency(s.periodic_payment)),
                ("Taxes, insurance and dues", format_currency(s.periodic_ancillary)),
                ("Total per payment", format_currency(s.periodic_outlay)),
                ("Total interest", format_currency(s.total_interest)),
                ("Total paid to the lender", format_currency(s.total_paid)),
                ("Total cost", format_currency(s.total_cost)),
                ("Effective annual rate", format_percentage(s.effective_annual_rate)),
                ("Paid off", series::year_label(s.payoff_year, base)),
            ],
        );
        println!("{summary}");

        let table = match view {
            ScheduleView::Yearly => {
                let mut table = new_table(vec!["Year", "Principal", "Interest", "Ending balance"]);
                for year in &outcome.yearly {
                    table.add_row(vec![
                        Cell::new(series::year_label(year.year, base)),
                        money(year.principal),
                        money(year.interest),
                        money(year.ending_balance),
                    ]);
                }
                table
            }
            ScheduleView::Full => {
                let mut table = new_table(vec![
                    "#", "Year", "Month", "Payment", "Principal", "Interest", "Balance",
                ]);
                for payment in &outcome.periods {
                    table.add_row(vec![
                        Cell::new(payment.payment_index),
                        Cell::new(series::year_label(payment.year, base)),
                        Cell::new(payment.month_in_year),
                        money(payment.payment),
                        money(payment.principal_portion),
                        money(payment.interest_portion),
                        money(payment.remaining_balance),
                    ]);
                }
                table
            }
        };
        println!("{table}");
        Ok(())
    }

    fn limits(&self, config: &Config) -> anyhow::Result<()> {
        if self.json {
            return print_json(config);
        }

        let g = &config.growth;
        let m = &config.mortgage;
        let mut table = new_table(vec!["Field", "Min", "Max"]);
        let money_rows = [
            ("growth.principal", &g.principal),
            ("growth.contribution", &g.contribution),
            ("mortgage.home_price", &m.home_price),
            ("mortgage.property_tax_annual", &m.property_tax_annual),
            ("mortgage.insurance_annual", &m.insurance_annual),
            ("mortgage.mortgage_insurance_monthly", &m.mortgage_insurance_monthly),
            ("mortgage.hoa_monthly", &m.hoa_monthly),
        ];
        let rate_rows = [
            ("growth.annual_rate", &g.annual_rate),
            ("growth.inflation_rate", &g.inflation_rate),
            ("growth.tax_rate", &g.tax_rate),
            ("mortgage.annual_rate", &m.annual_rate),
        ];
        for (field, bounds) in money_rows {
            add_bounds(&mut table, field, bounds, format_currency_compact);
        }
        for (field, bounds) in rate_rows {
            add_bounds(&mut table, field, bounds, format_percentage);
        }
        table.add_row(vec![
            Cell::new("growth.years"),
            Cell::new(1),
            Cell::new(g.max_years),
        ]);
        table.add_row(vec![
            Cell::new("mortgage.term_years"),
            Cell::new(1),
            Cell::new(m.max_term_years),
        ]);
        println!("{table}");

        let a = &config.assumptions;
        let mut assumptions = new_table(vec!["Assumption", ""]);
        add_pairs(
            &mut assumptions,
            vec![
                ("Minimum down payment", format_percentage(m.min_down_payment_pct)),
                ("Withdrawal rate", format_percentage(a.withdrawal_rate)),
            ],
        );
        for goal in [
            GoalTag::Retirement,
            GoalTag::HomePurchase,
            GoalTag::Education,
            GoalTag::EmergencyFund,
            GoalTag::Wealth,
        ] {
            assumptions.add_row(vec![
                Cell::new(format!("Default horizon ({goal})")),
                Cell::new(format!("{} years", a.default_horizons.for_goal(goal)))
                    .set_alignment(CellAlignment::Right),
            ]);
        }
        println!("{assumptions}");
        Ok(())
    }
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn add_pairs(table: &mut Table, rows: Vec<(&str, String)>) {
    for (label, value) in rows {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(value).set_alignment(CellAlignment::Right),
        ]);
    }
}

fn add_bounds(table: &mut Table, field: &str, bounds: &Bounds, render: fn(Decimal) -> String) {
    table.add_row(vec![
        Cell::new(field),
        Cell::new(render(bounds.min)).set_alignment(CellAlignment::Right),
        Cell::new(render(bounds.max)).set_alignment(CellAlignment::Right),
    ]);
}

fn money(value: Decimal) -> Cell {
    Cell::new(format_currency(value)).set_alignment(CellAlignment::Right)
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
