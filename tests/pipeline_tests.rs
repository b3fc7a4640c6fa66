//! Integration tests for the scanning pipeline.
//!
//! These tests drive the scanner with in-process resolver and probe fakes so
//! that completion order, concurrency and cancellation can be controlled
//! without touching the network.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use rust_blobfinder::cloud::listing::ListingProbe;
use rust_blobfinder::cloud::resolver::ExistenceResolver;
use rust_blobfinder::cloud::retry::RetryPolicy;
use rust_blobfinder::models::{NameError, ProbeResult, ScanStatus, ValidationOutcome};
use rust_blobfinder::scanner::{ScanSettings, Scanner};

/// Resolver that knows a fixed set of accounts and can be slowed per account
#[derive(Default)]
struct FakeResolver {
    existing: HashSet<String>,
    delays: HashMap<String, Duration>,
    calls: Mutex<Vec<String>>,
}

impl FakeResolver {
    fn with_accounts(accounts: &[&str]) -> Self {
        FakeResolver {
            existing: accounts.iter().map(|a| a.to_string()).collect(),
            ..Default::default()
        }
    }

    fn delay(mut self, account: &str, delay: Duration) -> Self {
        self.delays.insert(account.to_string(), delay);
        self
    }
}

#[async_trait]
impl ExistenceResolver for FakeResolver {
    async fn resolve(&self, account_name: &str) -> bool {
        self.calls.lock().unwrap().push(account_name.to_string());
        if let Some(delay) = self.delays.get(account_name) {
            tokio::time::sleep(*delay).await;
        }
        self.existing.contains(account_name)
    }
}

/// Probe with canned answers that tracks how many requests overlap
#[derive(Default)]
struct FakeProbe {
    responses: HashMap<String, ProbeResult>,
    delay: Duration,
    calls: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl FakeProbe {
    fn respond(mut self, account: &str, container: &str, result: ProbeResult) -> Self {
        self.responses.insert(format!("{}/{}", account, container), result);
        self
    }
}

#[async_trait]
impl ListingProbe for FakeProbe {
    async fn probe(&self, account_name: &str, container_name: &str) -> ProbeResult {
        let key = format!("{}/{}", account_name, container_name);
        self.calls.lock().unwrap().push(key.clone());

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        self.responses
            .get(&key)
            .cloned()
            .unwrap_or(ProbeResult::NotFound(404))
    }
}

fn settings(concurrency: usize) -> ScanSettings {
    ScanSettings {
        concurrency,
        retry: RetryPolicy::new(1, Duration::from_millis(1)),
    }
}

fn lines(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|e| e.to_string()).collect()
}

/// Output order follows the input even when the first entry finishes last
#[tokio::test]
async fn test_order_preserved_regardless_of_completion() {
    let resolver = Arc::new(
        FakeResolver::with_accounts(&["falsimentis", "validacct"])
            .delay("falsimentis", Duration::from_millis(150)),
    );
    let probe = Arc::new(
        FakeProbe::default()
            .respond("falsimentis", "falsimentis-container", ProbeResult::NotFound(403))
            .respond("validacct", "pub", ProbeResult::Found("<EnumerationResults/>".to_string())),
    );

    let scanner = Scanner::new(resolver.clone(), probe.clone(), settings(2));
    let outcome = scanner
        .run(
            lines(&["falsimentis:falsimentis-container", "ab", "validacct:pub"]),
            CancellationToken::new(),
        )
        .await;

    // validacct was probed before the slow falsimentis lookup returned
    assert_eq!(probe.calls.lock().unwrap()[0], "validacct/pub");

    let reports = &outcome.reports;
    assert_eq!(reports.len(), 3);
    assert_eq!(reports[0].candidate.raw_line, "falsimentis:falsimentis-container");
    assert_eq!(reports[0].probe, Some(ProbeResult::NotFound(403)));
    assert_eq!(
        reports[1].validation,
        ValidationOutcome::InvalidAccount(NameError::TooShort { len: 2, min: 3 })
    );
    assert_eq!(reports[1].probe, None);
    assert_eq!(reports[2].status(), ScanStatus::Success);
}

/// Invalid and non-resolving candidates never reach the probe
#[tokio::test]
async fn test_invalid_and_unresolved_never_probed() {
    let resolver = Arc::new(FakeResolver::with_accounts(&["validacct"]));
    let probe = Arc::new(FakeProbe::default());

    let scanner = Scanner::new(resolver.clone(), probe.clone(), settings(4));
    let outcome = scanner
        .run(
            lines(&["UPPER123:container", "validacct:my--container", "doesnotexist123", "validacct:pub"]),
            CancellationToken::new(),
        )
        .await;

    let statuses: Vec<_> = outcome.reports.iter().map(|r| r.status()).collect();
    assert_eq!(
        statuses,
        vec![
            ScanStatus::InvalidAccountName,
            ScanStatus::InvalidContainerName,
            ScanStatus::DnsNotResolved,
            ScanStatus::HttpNonSuccess,
        ]
    );

    let resolved = resolver.calls.lock().unwrap().clone();
    assert_eq!(resolved.len(), 2);
    assert!(resolved.contains(&"doesnotexist123".to_string()));

    assert_eq!(*probe.calls.lock().unwrap(), vec!["validacct/pub".to_string()]);
}

/// No more than `concurrency` probes are ever in flight
#[tokio::test]
async fn test_concurrency_is_bounded() {
    let accounts: Vec<String> = (0..20).map(|i| format!("account{:02}", i)).collect();
    let account_refs: Vec<&str> = accounts.iter().map(String::as_str).collect();

    let resolver = Arc::new(FakeResolver::with_accounts(&account_refs));
    let probe = Arc::new(FakeProbe {
        delay: Duration::from_millis(20),
        ..Default::default()
    });

    let scanner = Scanner::new(resolver, probe.clone(), settings(3));
    let outcome = scanner.run(accounts.clone(), CancellationToken::new()).await;

    assert_eq!(outcome.reports.len(), 20);
    assert_eq!(probe.calls.lock().unwrap().len(), 20);
    let max = probe.max_in_flight.load(Ordering::SeqCst);
    assert!(max <= 3, "observed {} concurrent probes", max);
    assert!(max >= 2, "expected probes to overlap, observed {}", max);
}

/// Cancelling mid-run stops dispatch but keeps finished reports
#[tokio::test]
async fn test_cancellation_mid_run() {
    let accounts: Vec<String> = (0..10).map(|i| format!("account{:02}", i)).collect();
    let account_refs: Vec<&str> = accounts.iter().map(String::as_str).collect();

    let resolver = Arc::new(FakeResolver::with_accounts(&account_refs));
    let probe = Arc::new(FakeProbe {
        delay: Duration::from_millis(100),
        ..Default::default()
    });

    let scanner = Scanner::new(resolver, probe, settings(2));
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(30)).await;
        trigger.cancel();
    });

    let outcome = scanner.run(accounts, cancel).await;

    assert_eq!(outcome.reports.len() + outcome.skipped, 10);
    assert!(outcome.skipped > 0);
    assert!(!outcome.reports.is_empty());
    // Reports that were produced are the first lines, in order
    assert!(outcome.reports.iter().enumerate().all(|(i, r)| r.index == i));
}

/// A connection failure is retried once and then reported
#[tokio::test]
async fn test_connection_failure_reported_after_retry() {
    let resolver = Arc::new(FakeResolver::with_accounts(&["validacct"]));
    let probe = Arc::new(FakeProbe::default().respond(
        "validacct",
        "pub",
        ProbeResult::ConnectionFailed("Failed to connect".to_string()),
    ));

    let scanner = Scanner::new(resolver, probe.clone(), settings(1));
    let outcome = scanner.run(lines(&["validacct:pub"]), CancellationToken::new()).await;

    assert_eq!(outcome.reports[0].status(), ScanStatus::ConnectionFailure);
    assert_eq!(probe.calls.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_empty_input() {
    let scanner = Scanner::new(
        Arc::new(FakeResolver::default()),
        Arc::new(FakeProbe::default()),
        settings(2),
    );
    let outcome = scanner.run(Vec::new(), CancellationToken::new()).await;

    assert!(outcome.reports.is_empty());
    assert_eq!(outcome.skipped, 0);
}
