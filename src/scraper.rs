use std::path::Path;
use std::time::Duration;

use crate::collector::Collector;
use crate::error::Result;
use crate::extractor::{extract, QuoteParser};
use crate::fetcher::Fetch;
use crate::observer::{Observer, Summary};
use crate::pagination::{PageOutcome, State, StopReason};
use crate::record::Record;
use crate::writer;

#[derive(Debug)]
pub struct Scraped {
    pub records: Vec<Record>,
    pub stop: StopReason,
}

/// Walks listing pages from page 1, one at a time, until the site signals the
/// end of content or a download fails. Sleeps `delay` between two pages.
pub async fn scrap_site<F, P, O>(
    fetcher: &F,
    parser: &P,
    observer: &mut O,
    delay: Duration,
) -> Scraped
where
    F: Fetch + ?Sized,
    P: QuoteParser + ?Sized,
    O: Observer + ?Sized,
{
    let mut collector = Collector::new();
    let mut state = State::start();

    let stop = loop {
        let page = match state {
            State::Running { page } => page,
            State::Stopped(reason) => break reason,
        };

        observer.page_requested(page, &fetcher.url(page));
        let fetched = match fetcher.fetch(page).await {
            Ok(fetched) => fetched,
            Err(e) => {
                state = state.next(PageOutcome::TransportFailed(e.to_string()));
                continue;
            }
        };

        observer.page_fetched(page, fetched.status);
        state = state.next(PageOutcome::Status(fetched.status));
        if !state.is_running() {
            continue;
        }

        let extracted = extract(parser, &fetched.markup, page);
        observer.page_parsed(page, extracted.containers);
        for e in &extracted.skipped {
            observer.record_skipped(e);
        }
        for record in &extracted.records {
            observer.record_collected(record);
        }
        collector.extend(extracted.records);

        state = state.next(PageOutcome::Parsed {
            containers: extracted.containers,
        });
        if state.is_running() && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    };

    observer.stopped(&stop);

    Scraped {
        records: collector.into_records(),
        stop,
    }
}

/// Scraps every page then writes the collected records to `output`.
///
/// The write is attempted exactly once, however pagination ended. The
/// collected records and final counts are kept even when it fails.
pub async fn scrap_to_csv<F, P, O>(
    fetcher: &F,
    parser: &P,
    observer: &mut O,
    delay: Duration,
    output: &Path,
) -> (Scraped, Result<()>)
where
    F: Fetch + ?Sized,
    P: QuoteParser + ?Sized,
    O: Observer + ?Sized,
{
    let scraped = scrap_site(fetcher, parser, observer, delay).await;

    let written = writer::write_records(&scraped.records, output);
    if let Err(e) = &written {
        log::error!("Couldn't save quotes to {} got: {e}", output.display());
    }

    observer.finished(&Summary {
        records: scraped.records.len(),
        pages: scraped.stop.pages_scraped(),
        output,
        written: written.is_ok(),
    });

    (scraped, written)
}
