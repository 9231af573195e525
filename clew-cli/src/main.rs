mod error;
mod logger;

use clap::{Parser, Subcommand};
use tracing::debug;

use clew_cypher::{literal, match_, node, parameter, variable, Statement};

use crate::error::CliResult;
use crate::logger::setup;

#[derive(Parser, Debug)]
#[command(name = "clew")]
#[command(about = "Render parameterized Cypher statements from the clew builder", long_about = None)]
struct Cli {
    #[arg(long, env = "CLEW_LOG_LEVEL", default_value = "info")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a set of sample statements, with their binding tables.
    Demo {
        /// Multiline rendering instead of single-line.
        #[arg(long)]
        pretty: bool,
    },
    /// Emit index DDL for a label.
    Index {
        #[arg(long, env = "CLEW_LABEL")]
        label: String,
        #[arg(long = "property", required = true)]
        properties: Vec<String>,
        /// Emit the DROP form instead of CREATE.
        #[arg(long)]
        drop: bool,
    },
    /// Emit uniqueness-constraint DDL for a label property.
    Constraint {
        #[arg(long, env = "CLEW_LABEL")]
        label: String,
        #[arg(long)]
        property: String,
        /// Emit the DROP form instead of CREATE.
        #[arg(long)]
        drop: bool,
    },
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    setup("clew", &cli.log_level);
    debug!("Received args: {cli:?}");

    match cli.command {
        Command::Demo { pretty } => demo(pretty)?,
        Command::Index {
            label,
            properties,
            drop,
        } => {
            let properties: Vec<&str> = properties.iter().map(String::as_str).collect();
            let statement = if drop {
                clew_schema::drop_index(&label, &properties)
            } else {
                clew_schema::create_index(&label, &properties)
            };
            println!("{}", statement.text());
        }
        Command::Constraint {
            label,
            property,
            drop,
        } => {
            let statement = if drop {
                clew_schema::drop_unique_constraint(&label, &property)
            } else {
                clew_schema::create_unique_constraint(&label, &property)
            };
            println!("{}", statement.text());
        }
    }

    Ok(())
}

fn demo(pretty: bool) -> CliResult<()> {
    for statement in sample_statements()? {
        if pretty {
            println!("{}", statement.pretty());
        } else {
            println!("{}", statement.text());
        }
        if !statement.parameters().is_empty() {
            println!("  parameters: {}", serde_json::to_string(statement.parameters())?);
        }
        println!();
    }
    Ok(())
}

fn sample_statements() -> CliResult<Vec<Statement>> {
    let person = node("Person").named("p");
    let movie = node("Movie").named("m");

    let filmography = match_(
        person
            .clone()
            .relationship_to(movie.clone(), "ACTED_IN")
            .named("r"),
    )
    .where_(person.property("name").eq(parameter("name", "Tom Hanks")))
    .returning(vec![movie.property("title").alias("title")])
    .order_by(variable("title"))
    .limit(10)
    .build()?;

    let co_actors = match_(
        person
            .clone()
            .relationship_to(movie.clone(), "ACTED_IN")
            .relationship_from(node("Person").named("co"), "ACTED_IN"),
    )
    .where_(person.property("name").eq(literal("Tom Hanks")))
    .returning(node("Person").named("co"))
    .distinct()
    .build()?;

    Ok(vec![filmography, co_actors])
}
