use std::path::Path;

use crate::error::ScrapError;
use crate::pagination::StopReason;
use crate::record::Record;

/// Number of chars of each quote shown in progress logs
const PREVIEW_LEN: usize = 50;

/// Progress sink of a scraping run. Every method defaults to a no-op.
pub trait Observer {
    fn page_requested(&mut self, _page: u32, _url: &str) {}
    fn page_fetched(&mut self, _page: u32, _status: u16) {}
    fn page_parsed(&mut self, _page: u32, _containers: usize) {}
    fn record_collected(&mut self, _record: &Record) {}
    fn record_skipped(&mut self, _error: &ScrapError) {}
    fn stopped(&mut self, _reason: &StopReason) {}
    fn finished(&mut self, _summary: &Summary) {}
}

pub struct NullObserver;

impl Observer for NullObserver {}

/// Final counts of a run, reported whether or not the export succeeded
#[derive(Debug, Clone)]
pub struct Summary<'a> {
    pub records: usize,
    pub pages: u32,
    pub output: &'a Path,
    pub written: bool,
}

/// Renders progress through the `log` facade
#[derive(Debug, Default)]
pub struct LogObserver;

impl Observer for LogObserver {
    fn page_requested(&mut self, page: u32, url: &str) {
        log::info!("Scraping page {page}: {url}");
    }

    fn page_fetched(&mut self, page: u32, status: u16) {
        log::info!("Page {page} status code: {status}");
    }

    fn page_parsed(&mut self, page: u32, containers: usize) {
        if containers > 0 {
            log::info!("Found {containers} quotes on page {page}");
        }
    }

    fn record_collected(&mut self, record: &Record) {
        log::info!("  - {} by {}", record.preview(PREVIEW_LEN), record.author());
    }

    fn record_skipped(&mut self, error: &ScrapError) {
        log::warn!("Skipping quote: {error}");
    }

    fn stopped(&mut self, reason: &StopReason) {
        if reason.is_failure() {
            log::error!("Stopping: {reason}");
        } else {
            log::info!("Stopping: {reason}");
        }
    }

    fn finished(&mut self, summary: &Summary) {
        log::info!(
            "Collected {} quotes from {} pages",
            summary.records,
            summary.pages
        );
        if summary.written {
            log::info!(
                "Saved {} quotes to {}",
                summary.records,
                summary.output.display()
            );
        }
    }
}
