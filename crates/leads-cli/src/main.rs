// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod logging;
mod runtime;

use anyhow::{Context, Result, anyhow, bail};
use config::Config;
use leads_app::{
    EMPTY_STATE_MESSAGE, Lead, LeadStore, Location, MemoryRouter, Route, filter_leads, list_title,
};
use logging::LogTarget;
use runtime::FixtureRuntime;
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = parse_cli_args(env::args().skip(1), Config::default_path()?)?;
    if options.show_help {
        print_help();
        return Ok(());
    }

    if options.print_config_path {
        println!("{}", options.config_path.display());
        return Ok(());
    }

    if options.print_example {
        print!("{}", Config::example_config(&options.config_path));
        return Ok(());
    }

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `leads --print-example-config` to generate a v1 template",
            options.config_path.display()
        )
    })?;

    let start = match &options.url {
        Some(href) => config::start_location(href).context("invalid --url")?,
        None => config.start()?,
    };

    let target = LogTarget::for_session(options.list, config.log_file());
    logging::init_logging(config.log_level(), &target)?;

    let store = LeadStore::fixture()?;
    tracing::info!(leads = store.len(), start = %start.href(), "starting");

    if options.check_only {
        return Ok(());
    }

    if options.list {
        if start.route() != Route::Leads {
            bail!(
                "--list needs a list location such as /leads?status=active, got {}",
                start.href()
            );
        }
        let search = options.search.as_deref().unwrap_or_default();
        let visible = filter_leads(store.leads(), start.status_filter(), search);
        let stdout = io::stdout();
        let mut out = stdout.lock();
        return write_list(&mut out, &visible, options.json);
    }

    let mut router = MemoryRouter::new(start);
    let mut runtime = FixtureRuntime::new(store);
    leads_tui::run_app(&mut router, &mut runtime)
}

fn write_list<W: Write>(out: &mut W, leads: &[&Lead], json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, leads).context("encode leads as JSON")?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{}", list_title(leads.len()))?;
    if leads.is_empty() {
        writeln!(out, "{EMPTY_STATE_MESSAGE}")?;
        return Ok(());
    }
    for lead in leads {
        writeln!(
            out,
            "{}  {:<12}  {:<6}  {}  {}  {}",
            lead.id,
            lead.status.label(),
            lead.priority.as_str(),
            lead.date,
            lead.customer_name,
            lead.address
        )?;
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    url: Option<String>,
    search: Option<String>,
    list: bool,
    json: bool,
    print_config_path: bool,
    print_example: bool,
    check_only: bool,
    show_help: bool,
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: default_config_path,
        url: None,
        search: None,
        list: false,
        json: false,
        print_config_path: false,
        print_example: false,
        check_only: false,
        show_help: false,
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--config requires a file path"))?;
                options.config_path = PathBuf::from(value.as_ref());
            }
            "--url" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--url requires a location such as /leads"))?;
                options.url = Some(value.as_ref().to_owned());
            }
            "--search" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--search requires a term"))?;
                options.search = Some(value.as_ref().to_owned());
            }
            "--list" => {
                options.list = true;
            }
            "--json" => {
                options.json = true;
            }
            "--print-config-path" => {
                options.print_config_path = true;
            }
            "--print-example-config" => {
                options.print_example = true;
            }
            "--check" => {
                options.check_only = true;
            }
            "--help" | "-h" => {
                options.show_help = true;
            }
            unknown => {
                bail!("unknown argument {unknown:?}; run with --help to see supported options");
            }
        }
    }

    if !options.list && (options.search.is_some() || options.json) {
        bail!("--search and --json only apply together with --list");
    }

    Ok(options)
}

fn print_help() {
    println!("leads");
    println!("  --config <path>          Use a specific config path");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-example-config   Print a v1 config template");
    println!("  --url <href>             Start at a location, e.g. /leads?status=active");
    println!("  --list                   Print the filtered list instead of opening the TUI");
    println!("  --search <term>          Search term for --list");
    println!("  --json                   Print --list output as JSON");
    println!("  --check                  Validate config and lead data, then exit");
    println!("  --help                   Show this help");
}
