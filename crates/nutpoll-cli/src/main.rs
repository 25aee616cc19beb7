//! Command-line poller for UPS telemetry.
//!
//! Connects to a monitoring daemon, optionally authenticates, establishes
//! the UPS identifier (auto-detected or supplied), then either lists every
//! variable or fetches a single one and prints the result.

use std::collections::BTreeMap;
use std::error::Error;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use nutpoll_client::Session;

/// Poll a UPS monitoring daemon and print telemetry variables.
#[derive(Debug, Parser)]
#[command(name = "nutpoll", version, about)]
struct Args {
    /// Server address, `host` or `host:port` (port 3493 when omitted).
    addr: String,

    /// Username for credential-protected servers.
    #[arg(long, requires = "password")]
    username: Option<String>,

    /// Password for credential-protected servers.
    #[arg(long, requires = "username")]
    password: Option<String>,

    /// UPS identifier; auto-detected via LIST UPS when omitted.
    #[arg(long)]
    ups: Option<String>,

    /// Fetch a single variable instead of listing them all.
    #[arg(long, value_name = "NAME")]
    get: Option<String>,

    /// Print the result as JSON.
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let mut session = Session::connect(&args.addr)?;

    if let (Some(username), Some(password)) = (&args.username, &args.password) {
        session.authenticate(username, password)?;
    }

    let ups_id = match &args.ups {
        Some(id) => {
            session.set_identifier(id);
            id.clone()
        }
        None => session.identify()?,
    };

    if let Some(name) = &args.get {
        let value = session.get_var(&ups_id, name)?;
        print_variables(BTreeMap::from([(name.clone(), value)]), args.json)?;
    } else {
        session.list_var(&ups_id)?;
        let snapshot = session.store().snapshot().into_iter().collect();
        print_variables(snapshot, args.json)?;
    }

    session.close()?;
    Ok(())
}

/// Print variables sorted by name, one per line or as a JSON object.
fn print_variables(variables: BTreeMap<String, String>, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(&variables)?);
    } else {
        for (name, value) in &variables {
            println!("{}: {}", name, value);
        }
    }
    Ok(())
}
