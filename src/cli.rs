use crate::config::DEFAULT_CREDENTIALS_FILE;
use crate::error::Error;
use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:
  zonectl add A example.com 192.0.2.1 3600
  zonectl add TXT example.com '1:content part 1' '2:content part 2' '3:content part 3' 3600
  zonectl get_all
  zonectl get A

Contents starting with '-' go after '--':
  zonectl add TXT example.com -- '-all' 3600";

#[derive(Debug, Parser)]
#[command(author, version, about = "Manage DNS records on a Cloudflare zone", after_help = EXAMPLES)]
pub struct Cli {
    /// Credentials file holding `api_token` and `zone_id`
    #[arg(
        long,
        env = "ZONECTL_CREDENTIALS",
        default_value = DEFAULT_CREDENTIALS_FILE,
        global = true
    )]
    pub credentials: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a record. TXT contents shaped `label:payload` create one record per segment
    Add {
        record_type: String,
        name: String,
        /// One or more contents, then the TTL
        #[arg(
            required = true,
            num_args = 2..,
            value_name = "CONTENT... TTL",
            allow_negative_numbers = true
        )]
        values: Vec<String>,
    },
    /// List every record in the zone
    #[command(name = "get_all")]
    GetAll,
    /// List records of one type
    Get { record_type: String },
}

/// A validated invocation, ready for dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(AddArgs),
    GetAll,
    Get(GetArgs),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddArgs {
    pub record_type: String,
    pub name: String,
    pub contents: Vec<String>,
    pub ttl: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetArgs {
    pub record_type: String,
}

impl TryFrom<Commands> for Command {
    type Error = Error;

    fn try_from(commands: Commands) -> Result<Self, Self::Error> {
        match commands {
            Commands::Add {
                record_type,
                name,
                values,
            } => {
                // The TTL is always the trailing argument.
                let (ttl, contents) = match values.split_last() {
                    Some((ttl, contents)) if !contents.is_empty() => (ttl, contents),
                    _ => {
                        return Err(Error::Usage(
                            "Not enough arguments for add command".to_string(),
                        ))
                    }
                };
                let ttl = ttl
                    .parse::<u32>()
                    .map_err(|_| Error::Usage(format!("invalid TTL: {}", ttl)))?;

                Ok(Command::Add(AddArgs {
                    record_type,
                    name,
                    contents: contents.to_vec(),
                    ttl,
                }))
            }
            Commands::GetAll => Ok(Command::GetAll),
            Commands::Get { record_type } => Ok(Command::Get(GetArgs { record_type })),
        }
    }
}

/// Validates parsed arguments, reporting failures the way clap reports its own.
pub fn validate(commands: Commands) -> Result<Command, clap::Error> {
    Command::try_from(commands).map_err(|err| match err {
        Error::Usage(msg) => Cli::command().error(ErrorKind::InvalidValue, msg),
        other => Cli::command().error(ErrorKind::Io, other),
    })
}
