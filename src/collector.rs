use crate::record::Record;

/// Append-only, first-seen ordered sequence of every scraped record
#[derive(Debug, Default)]
pub struct Collector {
    records: Vec<Record>,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = Record>,
    {
        self.records.extend(records);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}
