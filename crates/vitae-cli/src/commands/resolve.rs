//! Resolve command implementation (`today` and `date`).

use crate::cli::ResolveArgs;
use crate::error::Result;
use crate::output::{Explanation, Formatter};
use chrono::NaiveDate;
use tracing::debug;
use vitae_resolver::ResolverError;
use vitae_service::{PersonResolutionService, ServiceError};

/// Execute a resolution for `date`, or for today when `None`.
pub async fn execute_resolve(
    service: &PersonResolutionService,
    date: Option<NaiveDate>,
    args: ResolveArgs,
    formatter: &Formatter,
) -> Result<()> {
    let date = date.unwrap_or_else(|| service.cache().today());
    debug!("Resolving person for {} (explain={})", date, args.explain);

    if !args.explain {
        let record = service.get_person_for_date(date).await;
        if record.is_placeholder {
            eprintln!("{}", formatter.warning("No person could be resolved; showing placeholder"));
        }
        println!("{}", formatter.format_person(&record, None)?);
        return Ok(());
    }

    match service.resolve_for_date(date).await {
        Ok((record, report)) => {
            println!(
                "{}",
                formatter.format_person(&record, Some(Explanation::Accepted(&report)))?
            );
        }
        Err(ServiceError::Resolver(ResolverError::ResolutionFailed { attempts, .. })) => {
            let placeholder = service.placeholder(date);
            println!(
                "{}",
                formatter.format_person(&placeholder, Some(Explanation::Exhausted(&attempts)))?
            );
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
