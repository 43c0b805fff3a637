use crate::api::{DnsGateway, RecordSpec};
use crate::cli::{AddArgs, Command};
use crate::error::Result;
use crate::report::report;
use crate::segmented::SegmentedTxtWriter;
use log::{info, warn};

pub const ADD_SUCCESS: &str = "DNS record added successfully";

/// Runs one command against the gateway and returns the text to print.
pub async fn execute<G: DnsGateway + ?Sized>(gateway: &G, command: Command) -> Result<String> {
    match command {
        Command::Add(args) => {
            add(gateway, args).await?;
            Ok(ADD_SUCCESS.to_string())
        }
        Command::GetAll => {
            let records = gateway.list_all().await?;
            Ok(report(&records))
        }
        Command::Get(args) => {
            let records = gateway.list_by_type(&args.record_type).await?;
            Ok(report(&records))
        }
    }
}

async fn add<G: DnsGateway + ?Sized>(gateway: &G, args: AddArgs) -> Result<()> {
    if is_segmented(&args) {
        let created = SegmentedTxtWriter::new(gateway)
            .write(&args.name, &args.contents, args.ttl)
            .await?;
        info!("Created {} TXT segments for {}", created, args.name);
        return Ok(());
    }

    let mut contents = args.contents.into_iter();
    let content = contents.next().unwrap_or_default();
    let ignored = contents.count();
    if ignored > 0 {
        warn!("Ignoring {} extra content argument(s)", ignored);
    }

    let spec = RecordSpec {
        r#type: args.record_type,
        name: args.name,
        content,
        ttl: args.ttl,
    };
    gateway.create_record(&spec).await?;
    info!("Created {} record for {}", spec.r#type, spec.name);
    Ok(())
}

fn is_segmented(args: &AddArgs) -> bool {
    args.record_type == "TXT"
        && args
            .contents
            .first()
            .is_some_and(|content| content.contains(':'))
}
