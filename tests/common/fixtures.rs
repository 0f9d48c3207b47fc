//! Static log corpora used across harnesses.
//!
//! Each corpus is a `&'static [&'static str]` of representative lines in the
//! bracketed log format, time-ordered within a corpus the way a real log
//! file would be. All timestamps sit on 2020-02-28.

use fake::faker::lorem::en::Sentence;
use fake::Fake;

/// An application server's morning, mixed severities.
pub const CORPUS_SERVER: &[&str] = &[
    "[02/28/2020 9:00:00.00][info] Server listening on 0.0.0.0:8080.",
    "[02/28/2020 9:12:04.52][debug] Handling GET /status from 10.0.0.4.",
    "[02/28/2020 9:30:17.11][warn] Request latency above threshold: 1520ms.",
    "[02/28/2020 10:02:53.73][error] Could not reach upstream auth service.",
    "[02/28/2020 11:45:00.00][info] Completed scheduled cache flush.",
    "[02/28/2020 13:20:41.09][fatal] Worker pool exhausted, shutting down.",
];

/// A database server's lines interleaving `CORPUS_SERVER` in time.
pub const CORPUS_DB: &[&str] = &[
    "[02/28/2020 8:55:10.20][info] Database server ready.",
    "[02/28/2020 9:12:05.00][debug] Query plan cache hit ratio 0.93.",
    "[02/28/2020 10:02:54.10][error] Could not create database my_db7. Database server rejected request.",
    "[02/28/2020 12:00:00.00][warn] Replication lag at 4.2s.",
];

/// Lines that must not parse: at least one per failure kind.
pub const CORPUS_MALFORMED: &[&str] = &[
    "plain text with no brackets",
    "[02/28/2020 9:00:00.00] missing severity group",
    "[02/28/2020 9:00:00.00][info]no space before message",
    "[not a timestamp][info] first group is not a timestamp",
    "[02/28/2020 9:00:00][info] fraction missing",
    "[02/28/2020 9:00:00.1][info] fraction too short",
    "[02/28/2020 9:00:00.00][verbose] unknown severity tag",
    "[02/28/2020 9:00:00.00][] empty severity tag",
];

/// `n` well-formed lines with strictly increasing timestamps, a cycling
/// severity mix, and generated message text. Starts at midnight; stays
/// within the day for any `n` up to 86 400.
pub fn corpus_high_volume(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            let severity = match i % 10 {
                0 => "error",
                1 | 2 => "warn",
                3 => "debug",
                _ => "info",
            };
            let message: String = Sentence(3..8).fake();
            format!(
                "[02/28/2020 {}:{:02}:{:02}.{:02}][{}] {}",
                i / 3600 % 24,
                i / 60 % 60,
                i % 60,
                i % 100,
                severity,
                message,
            )
        })
        .collect()
}
