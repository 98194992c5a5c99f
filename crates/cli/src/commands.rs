use anyhow::{anyhow, Context};
use sqldns_domain::{RecordType, ZoneRecord};
use sqldns_jobs::{JobRunner, ZoneRefreshJob};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::di::Services;

pub async fn zones(services: &Services) -> anyhow::Result<()> {
    services.refresh_zones.execute().await?;

    let snapshot = services.zone_cache.snapshot();
    for zone in snapshot.zones() {
        println!("{}", zone);
    }
    Ok(())
}

pub async fn lookup(
    services: &Services,
    name: &str,
    zone: Option<&str>,
    record_type: &str,
) -> anyhow::Result<()> {
    let name = name.trim_end_matches('.');

    let zone = match zone {
        Some(zone) => zone.trim_end_matches('.').to_string(),
        None => {
            services.refresh_zones.execute().await?;
            services
                .zone_cache
                .snapshot()
                .best_match(name)
                .map(str::to_string)
                .ok_or_else(|| anyhow!("no served zone contains {}", name))?
        }
    };

    let kind = record_type.to_ascii_uppercase();
    match kind.as_str() {
        "A" | "AAAA" | "CNAME" => {
            let answers = services.resolve_hosts.execute(&zone, name).await?;
            for answer in &answers {
                println!("{}", answer);
            }
        }
        "ANY" => {
            let records = services.find_records.by_zone_and_name(&zone, name).await?;
            print_records(&records);
        }
        "SOA" => {
            let mut records = services
                .find_records
                .by_zone_and_types(&zone, name, &[RecordType::SOA])
                .await?;
            if records.is_empty() {
                warn!(zone = %zone, "No stored SOA; using placeholder");
                records = services.find_records.static_soa(&zone, name);
            }
            print_records(&records);
        }
        other => {
            let parsed: RecordType = other
                .parse()
                .map_err(|e: String| anyhow!(e))
                .context("unsupported --type")?;
            let records = services
                .find_records
                .by_zone_and_types(&zone, name, &[parsed])
                .await?;
            print_records(&records);
        }
    }
    Ok(())
}

pub async fn watch(services: &Services, interval_secs: u64) -> anyhow::Result<()> {
    let shutdown = CancellationToken::new();

    let handles = JobRunner::new()
        .with_zone_refresh(
            ZoneRefreshJob::new(services.refresh_zones.clone()).with_interval(interval_secs),
        )
        .with_shutdown_token(shutdown.clone())
        .start()
        .await;

    tokio::signal::ctrl_c().await?;
    info!("Shutdown requested");
    shutdown.cancel();

    for handle in handles {
        handle.await?;
    }
    Ok(())
}

fn print_records(records: &[ZoneRecord]) {
    for record in records {
        println!(
            "{}\t{}\t{}\t{}",
            record.owner_name(),
            record.ttl,
            record.record_type,
            record.content
        );
    }
}
