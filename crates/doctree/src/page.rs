/// Random-access source of per-page extracted text.
///
/// Page text is materialized by the caller before assembly starts; the engine
/// itself performs no I/O. Indexing is 0-based even though heading records
/// carry 1-based page numbers.
pub trait PageSource {
    fn page_count(&self) -> usize;

    /// Extracted plain text of the page at `index` (0-based).
    fn page_text(&self, index: usize) -> &str;
}

impl PageSource for [String] {
    fn page_count(&self) -> usize {
        self.len()
    }

    fn page_text(&self, index: usize) -> &str {
        &self[index]
    }
}

impl PageSource for Vec<String> {
    fn page_count(&self) -> usize {
        self.len()
    }

    fn page_text(&self, index: usize) -> &str {
        &self[index]
    }
}

impl PageSource for [&str] {
    fn page_count(&self) -> usize {
        self.len()
    }

    fn page_text(&self, index: usize) -> &str {
        self[index]
    }
}

impl PageSource for Vec<&str> {
    fn page_count(&self) -> usize {
        self.len()
    }

    fn page_text(&self, index: usize) -> &str {
        self[index]
    }
}

impl<const N: usize> PageSource for [&str; N] {
    fn page_count(&self) -> usize {
        N
    }

    fn page_text(&self, index: usize) -> &str {
        self[index]
    }
}
